//! # Core Module
//!
//! 애플리케이션 구성 요소를 조립하고 Actix-web `app_data`로 등록합니다.
//!
//! ```text
//! main / seed / tests
//!        │  AppContext::new(store, hasher, mailer, configs...)
//!        ▼
//! ┌──────────────────────────────────────────────┐
//! │ AppContext                                    │
//! │  users     : web::Data<UserService>           │
//! │  recovery  : web::Data<PasswordRecoveryService>│
//! │  sessions  : web::Data<SessionManager>        │
//! │  entra_id  : Option<web::Data<EntraIdAuthService>> │
//! └──────────────────────────────────────────────┘
//!        │  App::new().configure(|cfg| ctx.configure(cfg))
//!        ▼
//! 핸들러: web::Data<UserService> 등으로 추출
//! ```

pub mod app_context;

pub use app_context::AppContext;
