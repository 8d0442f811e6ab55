//! 사용자 엔티티 모듈
//!
//! - [`user`] - 저장된 사용자 문서
//! - [`user_draft`] - 저장 전 속성과 검증 규칙

pub mod user;
pub mod user_draft;

pub use user::User;
pub use user_draft::UserDraft;
