//! 인증 관련 설정 모듈
//!
//! 세션 쿠키, 비밀번호 복구, Microsoft Entra ID SSO 설정을 제공합니다.
//! 모든 값은 환경 변수에서 읽으며, 테스트에서는 구조체를 직접 구성할 수 있습니다.

use std::env;

use actix_web::cookie::Key;
use chrono::Duration;

use crate::config::Environment;

/// 세션 쿠키 설정
///
/// 세션/플래시/OAuth state 쿠키는 모두 `secret_key`로 암호화(private cookie)됩니다.
#[derive(Clone)]
pub struct SessionConfig {
    /// 쿠키 암호화 키 (최소 64바이트 마스터 키)
    pub secret_key: Key,
    /// "Remember me" 선택 시 세션 유지 기간
    pub remember_for: Duration,
    /// `Secure` 속성 부여 여부 (HTTPS 전용 쿠키)
    pub secure_cookies: bool,
}

impl SessionConfig {
    pub const DEFAULT_REMEMBER_DAYS: i64 = 14;

    /// 환경 변수에서 세션 설정을 로드합니다.
    ///
    /// * `SESSION_SECRET` - 64바이트 이상 문자열. 없거나 짧으면 임시 키를 생성합니다.
    /// * `REMEMBER_FOR_DAYS` - 기본값 14
    /// * `SECURE_COOKIES` - 기본값은 프로덕션에서만 true
    pub fn from_env() -> Self {
        let secret_key = match env::var("SESSION_SECRET") {
            Ok(secret) => Key::try_from(secret.as_bytes()).unwrap_or_else(|_| {
                log::warn!("SESSION_SECRET이 64바이트보다 짧습니다. 임시 키를 생성합니다 (재시작 시 모든 세션 만료)");
                Key::generate()
            }),
            Err(_) => {
                log::warn!("SESSION_SECRET not set, using a generated key (sessions reset on restart!)");
                Key::generate()
            }
        };

        let remember_days = env::var("REMEMBER_FOR_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(Self::DEFAULT_REMEMBER_DAYS);

        let secure_cookies = env::var("SECURE_COOKIES")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or_else(|_| Environment::current().is_production());

        Self {
            secret_key,
            remember_for: Duration::days(remember_days),
            secure_cookies,
        }
    }

    /// 무작위 키를 사용하는 설정 (테스트, 임시 실행용)
    pub fn ephemeral() -> Self {
        Self {
            secret_key: Key::generate(),
            remember_for: Duration::days(Self::DEFAULT_REMEMBER_DAYS),
            secure_cookies: false,
        }
    }
}

/// 비밀번호 복구 설정
#[derive(Debug, Clone)]
pub struct RecoveryConfig {
    /// 재설정 토큰 유효 기간
    pub reset_password_within: Duration,
    /// 발신자 주소
    pub mailer_sender: String,
    /// 메일 링크에 사용할 외부 URL
    pub base_url: String,
}

impl RecoveryConfig {
    pub const DEFAULT_RESET_WITHIN_HOURS: i64 = 6;

    pub fn from_env(base_url: String) -> Self {
        let hours = env::var("RESET_PASSWORD_WITHIN_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|h| *h > 0)
            .unwrap_or(Self::DEFAULT_RESET_WITHIN_HOURS);

        Self {
            reset_password_within: Duration::hours(hours),
            mailer_sender: env::var("MAILER_SENDER")
                .unwrap_or_else(|_| "please-change-me@example.com".to_string()),
            base_url,
        }
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            reset_password_within: Duration::hours(Self::DEFAULT_RESET_WITHIN_HOURS),
            mailer_sender: "please-change-me@example.com".to_string(),
            base_url: base_url.into(),
        }
    }
}

/// Microsoft Entra ID (구 Azure AD) OAuth 2.0 / OIDC 설정
///
/// `ENTRA_CLIENT_ID`가 없으면 SSO 로그인이 비활성화됩니다.
#[derive(Debug, Clone)]
pub struct EntraIdConfig {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub authorize_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
}

impl EntraIdConfig {
    /// 사용자 레코드에 저장되는 프로바이더 이름
    pub const PROVIDER: &'static str = "entra_id";

    /// 요청 scope
    pub const SCOPE: &'static str = "openid email profile";

    pub fn from_env(base_url: &str) -> Option<Self> {
        let client_id = env::var("ENTRA_CLIENT_ID").ok().filter(|v| !v.trim().is_empty())?;

        let client_secret = env::var("ENTRA_CLIENT_SECRET").unwrap_or_else(|_| {
            log::warn!("ENTRA_CLIENT_SECRET not set, token exchange will fail");
            String::new()
        });
        let tenant_id = env::var("ENTRA_TENANT_ID").unwrap_or_else(|_| "common".to_string());
        let redirect_uri = env::var("ENTRA_REDIRECT_URI")
            .unwrap_or_else(|_| format!("{}/users/auth/entra_id/callback", base_url));

        let mut config = Self::for_tenant(tenant_id, client_id, client_secret, redirect_uri);

        if let Ok(uri) = env::var("ENTRA_AUTHORIZE_URI") {
            config.authorize_uri = uri;
        }
        if let Ok(uri) = env::var("ENTRA_TOKEN_URI") {
            config.token_uri = uri;
        }
        if let Ok(uri) = env::var("ENTRA_USERINFO_URI") {
            config.userinfo_uri = uri;
        }

        Some(config)
    }

    /// Microsoft identity platform v2 기본 엔드포인트로 설정을 구성합니다.
    pub fn for_tenant(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        let tenant_id = tenant_id.into();
        let authority = format!("https://login.microsoftonline.com/{}/oauth2/v2.0", tenant_id);

        Self {
            authorize_uri: format!("{}/authorize", authority),
            token_uri: format!("{}/token", authority),
            userinfo_uri: "https://graph.microsoft.com/oidc/userinfo".to_string(),
            tenant_id,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entra_id_default_endpoints() {
        let config = EntraIdConfig::for_tenant("contoso", "client", "secret", "http://localhost/cb");

        assert_eq!(
            config.authorize_uri,
            "https://login.microsoftonline.com/contoso/oauth2/v2.0/authorize"
        );
        assert_eq!(
            config.token_uri,
            "https://login.microsoftonline.com/contoso/oauth2/v2.0/token"
        );
        assert_eq!(config.userinfo_uri, "https://graph.microsoft.com/oidc/userinfo");
    }

    #[test]
    fn test_recovery_config_defaults() {
        let config = RecoveryConfig::new("http://localhost:8080");

        assert_eq!(config.reset_password_within, Duration::hours(6));
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_ephemeral_session_config() {
        let config = SessionConfig::ephemeral();

        assert_eq!(config.remember_for, Duration::days(14));
        assert!(!config.secure_cookies);
    }
}
