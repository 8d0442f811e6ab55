//! # Entra ID 사용자 정보 모델
//!
//! Microsoft identity platform의 OIDC userinfo 엔드포인트
//! (`https://graph.microsoft.com/oidc/userinfo`) 응답을 매핑합니다.
//!
//! ```json
//! {
//!   "sub": "OLu859SGc2Sr9ZsqbkG-QbeLgJlb41KcdiPoLYNpSFA",
//!   "name": "Mikah Ollenburg",
//!   "given_name": "Mikah",
//!   "family_name": "Ollenburg",
//!   "email": "mikoll@contoso.com"
//! }
//! ```

use serde::Deserialize;

use crate::config::EntraIdConfig;
use crate::domain::models::auth::external_identity::ExternalIdentity;
use crate::errors::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct EntraUserInfo {
    /// 애플리케이션별 사용자 식별자 (pairwise subject)
    pub sub: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub given_name: Option<String>,

    #[serde(default)]
    pub family_name: Option<String>,

    /// 이메일 클레임이 없는 계정의 대체 로그인 이름 (UPN)
    #[serde(default)]
    pub preferred_username: Option<String>,
}

impl EntraUserInfo {
    /// 표시 이름: `name` → `given_name family_name` 순으로 사용
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = self.name.as_ref().filter(|n| !n.trim().is_empty()) {
            return Some(name.trim().to_string());
        }

        let joined = [self.given_name.as_deref(), self.family_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() { None } else { Some(joined) }
    }

    /// 프로바이더 독립적인 신원으로 변환합니다.
    ///
    /// 이메일이 없으면 `preferred_username`을 사용하며, 둘 다 없으면
    /// 로컬 사용자를 만들 수 없으므로 인증 에러입니다.
    pub fn into_identity(self) -> Result<ExternalIdentity, AppError> {
        let email = self
            .email
            .clone()
            .filter(|e| e.contains('@'))
            .or_else(|| self.preferred_username.clone().filter(|u| u.contains('@')))
            .ok_or_else(|| {
                AppError::AuthenticationError(
                    "Entra ID account does not expose an email address".to_string(),
                )
            })?;

        let name = self.display_name();

        Ok(ExternalIdentity::new(EntraIdConfig::PROVIDER, self.sub, email, name))
    }
}
