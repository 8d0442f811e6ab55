//! 요청 DTO 모듈
//!
//! 모든 폼은 `application/x-www-form-urlencoded`로 전송되며,
//! 필드 이름은 `user[field]` 규칙을 따릅니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! #[actix_web::post("/users/sign_in")]
//! async fn create(form: web::Form<SignInForm>) -> HttpResponse {
//!     let remember = form.remember();
//!     // ...
//! }
//! ```

pub mod oauth_request;
pub mod password_request;
pub mod registration_request;
pub mod session_request;

pub use oauth_request::OAuthCallbackQuery;
pub use password_request::{EditPasswordQuery, PasswordForm};
pub use registration_request::RegistrationForm;
pub use session_request::SignInForm;
