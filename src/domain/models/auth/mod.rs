//! 인증 관련 도메인 모델
//!
//! - [`authenticated_user`] - 요청에 연결된 로그인 사용자와 추출자
//! - [`external_identity`] - SSO 프로바이더가 확인한 신원

pub mod authenticated_user;
pub mod external_identity;

pub use authenticated_user::{AuthenticatedUser, CurrentUser};
pub use external_identity::ExternalIdentity;
