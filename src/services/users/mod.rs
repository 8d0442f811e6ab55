//! 사용자 관리 서비스 모듈
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 대소문자 무시 이메일 중복 방지
//! - 로그인 실패 시 계정 존재 여부 비노출
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{PasswordHasher, UserService};
//!
//! let user_service = UserService::new(store, PasswordHasher::from_env());
//! let user = user_service.authenticate("user@example.com", "password").await?;
//! ```

pub mod password_hasher;
pub mod user_service;

pub use password_hasher::PasswordHasher;
pub use user_service::UserService;
