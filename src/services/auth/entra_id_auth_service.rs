//! # Microsoft Entra ID SSO 서비스
//!
//! OAuth 2.0 Authorization Code Flow로 Entra ID 사용자를 인증하고
//! [`UserService::from_omniauth`]로 로컬 사용자에 연결합니다.
//!
//! ```text
//! Browser                      Server                         Entra ID
//!    │ GET /users/auth/entra_id   │                                │
//!    │───────────────────────────▶│ state 생성 → 쿠키 저장          │
//!    │◀─── 303 authorize URL ─────│                                │
//!    │──────────────────────────────────────────────────────────▶│ 로그인
//!    │◀──────────── 302 callback?code=...&state=... ──────────────│
//!    │ GET /users/auth/entra_id/callback                           │
//!    │───────────────────────────▶│ state 확인                      │
//!    │                            │── POST token (code) ──────────▶│
//!    │                            │◀──────── access_token ─────────│
//!    │                            │── GET userinfo (Bearer) ──────▶│
//!    │                            │◀──────── sub, email, name ─────│
//!    │                            │ from_omniauth → 세션           │
//!    │◀────────── 303 / ──────────│                                │
//! ```
//!
//! state 값은 암호화 쿠키에 보관하며 콜백의 `state`와 일치해야 합니다 (CSRF 방지).
//! 그 비교는 핸들러가 담당합니다.

use std::sync::Arc;

use crate::{
    config::EntraIdConfig,
    domain::{
        entities::users::user::User,
        models::oauth::entra_id_model::{EntraErrorResponse, EntraTokenResponse, EntraUserInfo},
    },
    errors::AppError,
    services::users::user_service::UserService,
    utils::token::friendly_token,
};

const STATE_LENGTH: usize = 32;

pub struct EntraIdAuthService {
    config: EntraIdConfig,
    http: reqwest::Client,
    users: Arc<UserService>,
}

impl EntraIdAuthService {
    pub fn new(config: EntraIdConfig, users: Arc<UserService>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            users,
        }
    }

    /// CSRF 방지용 state 값
    pub fn new_state() -> String {
        friendly_token(STATE_LENGTH)
    }

    /// Microsoft 로그인 페이지 URL
    pub fn authorize_url(&self, state: &str) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("response_mode", "query"),
            ("scope", EntraIdConfig::SCOPE),
            ("state", state),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.authorize_uri, query_string)
    }

    /// Authorization code로 사용자를 인증하고 로컬 사용자를 반환합니다.
    pub async fn authenticate_with_code(&self, code: &str) -> Result<User, AppError> {
        let token = self.exchange_code_for_token(code).await?;
        let info = self.get_user_info(&token.access_token).await?;

        log::info!("Entra ID 사용자 인증: sub={}", info.sub);

        let identity = info.into_identity()?;
        self.users.from_omniauth(&identity).await
    }

    async fn exchange_code_for_token(&self, code: &str) -> Result<EntraTokenResponse, AppError> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
            ("scope", EntraIdConfig::SCOPE),
        ];

        let response = self
            .http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Entra ID 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<EntraErrorResponse>(&error_text)
                .map(|e| e.error_description.unwrap_or(e.error))
                .unwrap_or(error_text);

            return Err(AppError::AuthenticationError(format!(
                "Entra ID 토큰 교환 실패: {}",
                detail
            )));
        }

        response
            .json::<EntraTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Entra ID 토큰 응답 파싱 실패: {}", e)))
    }

    async fn get_user_info(&self, access_token: &str) -> Result<EntraUserInfo, AppError> {
        let response = self
            .http
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Entra ID 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Entra ID 사용자 정보 조회 실패: {}",
                error_text
            )));
        }

        response
            .json::<EntraUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Entra ID 사용자 정보 파싱 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::memory_repo::MemoryUserRepository;
    use crate::services::users::password_hasher::PasswordHasher;

    fn service() -> EntraIdAuthService {
        let users = Arc::new(UserService::new(
            Arc::new(MemoryUserRepository::new()),
            PasswordHasher::new(4),
        ));
        let config = EntraIdConfig::for_tenant(
            "contoso",
            "client-id",
            "secret",
            "http://localhost:8080/users/auth/entra_id/callback",
        );
        EntraIdAuthService::new(config, users)
    }

    #[test]
    fn test_authorize_url() {
        let url = service().authorize_url("state-123");

        assert!(url.starts_with("https://login.microsoftonline.com/contoso/oauth2/v2.0/authorize?"));
        assert!(url.contains("client_id=client-id"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains(
            "redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fusers%2Fauth%2Fentra_id%2Fcallback"
        ));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(url.contains("state=state-123"));
        assert!(!url.contains("secret"));
    }

    #[test]
    fn test_new_state_is_random() {
        let state = EntraIdAuthService::new_state();

        assert_eq!(state.len(), STATE_LENGTH);
        assert_ne!(state, EntraIdAuthService::new_state());
    }
}
