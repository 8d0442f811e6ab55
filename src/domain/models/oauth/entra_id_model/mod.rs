//! # Microsoft Entra ID OAuth 2.0 Domain Models
//!
//! Authorization Code Flow에서 주고받는 페이로드를 정의합니다.
//!
//! ```text
//! 1. 사용자 → /users/auth/entra_id → Microsoft 로그인 페이지
//! 2. Microsoft → /users/auth/entra_id/callback?code=...&state=...
//! 3. 서버 → code를 access_token으로 교환 (EntraTokenResponse)
//! 4. 서버 → access_token으로 userinfo 조회 (EntraUserInfo)
//! 5. 서버 → ExternalIdentity로 변환 후 사용자 조회/생성
//! ```

pub mod entra_user;
pub mod token_response;

pub use entra_user::EntraUserInfo;
pub use token_response::{EntraErrorResponse, EntraTokenResponse};
