//! 인증 관련 서비스 모듈
//!
//! - [`PasswordRecoveryService`] - 재설정 토큰 발급/메일/비밀번호 교체
//! - [`EntraIdAuthService`] - Microsoft Entra ID SSO (OAuth 2.0 Authorization Code)

pub mod entra_id_auth_service;
pub mod password_recovery_service;

pub use entra_id_auth_service::EntraIdAuthService;
pub use password_recovery_service::PasswordRecoveryService;
