//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `Arc<dyn UserStore>`, `Arc<dyn Mailer>` 같은 trait 객체를 생성자로 받고,
//! [`AppContext`](crate::core::app_context::AppContext)가 `web::Data`로 핸들러에 주입합니다.

pub mod auth;
pub mod mail;
pub mod users;
