//! 도메인 모델 모듈
//!
//! - [`auth`] - 로그인 사용자, 외부 신원
//! - [`oauth`] - OAuth 프로바이더 페이로드

pub mod auth;
pub mod oauth;

pub use auth::*;
