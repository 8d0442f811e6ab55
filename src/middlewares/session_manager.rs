//! # 암호화 쿠키 세션
//!
//! 모든 세션 상태는 `SessionConfig::secret_key`로 암호화된 private cookie에 담깁니다.
//! 서버 쪽 세션 저장소는 없습니다.
//!
//! | 쿠키 | 내용 | 수명 |
//! |------|------|------|
//! | `_account_portal_session` | 사용자 ID, remember 스탬프 | 브라우저 세션 또는 `remember_for` |
//! | `_account_portal_flash` | notice / alert | 다음 요청에서 한 번 읽고 삭제 |
//! | `_account_portal_oauth_state` | OAuth state | 10분 |
//!
//! remember 스탬프는 로그인 시점 사용자의 `remember_created_at`(밀리초)입니다.
//! 로그아웃하면 `remember_created_at`이 지워지므로 이전에 발급된 remember 쿠키는
//! 더 이상 일치하지 않아 무효가 됩니다.

use actix_web::{
    HttpRequest,
    cookie::{Cookie, CookieJar, SameSite, time},
};
use serde::{Deserialize, Serialize};

use crate::{
    config::SessionConfig,
    domain::entities::users::user::User,
    errors::{AppError, ErrorContext},
    middlewares::flash::Flash,
};

pub const SESSION_COOKIE: &str = "_account_portal_session";
pub const FLASH_COOKIE: &str = "_account_portal_flash";
pub const OAUTH_STATE_COOKIE: &str = "_account_portal_oauth_state";

const OAUTH_STATE_MINUTES: i64 = 10;

/// 세션 쿠키에 저장되는 값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(rename = "uid")]
    pub user_id: String,

    /// remember-me 로그인일 때 `remember_created_at` 밀리초
    #[serde(rename = "rem", default, skip_serializing_if = "Option::is_none")]
    pub remember_stamp: Option<i64>,
}

impl SessionData {
    /// 사용자의 현재 remember 기록과 비교해 세션이 아직 유효한지 확인합니다.
    pub fn is_valid_for(&self, user: &User, remember_for: chrono::Duration) -> bool {
        match self.remember_stamp {
            None => true,
            Some(stamp) => {
                user.remember_created_at.map(|at| at.timestamp_millis()) == Some(stamp)
                    && !user.remember_expired(remember_for)
            }
        }
    }
}

#[derive(Clone)]
pub struct SessionManager {
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn remember_for(&self) -> chrono::Duration {
        self.config.remember_for
    }

    fn build(&self, name: &'static str, value: String, max_age: Option<chrono::Duration>) -> Cookie<'static> {
        let mut cookie = Cookie::build(name, value)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.secure_cookies)
            .finish();

        if let Some(max_age) = max_age {
            cookie.set_max_age(time::Duration::seconds(max_age.num_seconds()));
        }

        cookie
    }

    /// 값을 암호화한 쿠키를 만듭니다.
    fn encrypt(&self, name: &'static str, value: String, max_age: Option<chrono::Duration>) -> Cookie<'static> {
        let mut jar = CookieJar::new();
        jar.private_mut(&self.config.secret_key)
            .add(self.build(name, value, max_age));

        jar.get(name)
            .cloned()
            .unwrap_or_else(|| self.removal(name))
    }

    /// 요청 쿠키를 복호화합니다. 없거나 변조되었으면 `None`입니다.
    fn decrypt(&self, req: &HttpRequest, name: &str) -> Option<String> {
        let cookie = req.cookie(name)?;

        let mut jar = CookieJar::new();
        jar.add_original(cookie);

        let decrypted = jar.private(&self.config.secret_key).get(name);
        if decrypted.is_none() {
            log::debug!("복호화할 수 없는 쿠키 무시: {}", name);
        }
        decrypted.map(|c| c.value().to_string())
    }

    fn removal(&self, name: &'static str) -> Cookie<'static> {
        let mut cookie = self.build(name, String::new(), None);
        cookie.make_removal();
        cookie
    }

    /// 로그인 세션 쿠키
    ///
    /// `remember`이면 `remember_for` 동안 유지되는 영구 쿠키를 발급합니다.
    /// 이 경우 `user.remember_created_at`이 먼저 기록되어 있어야 합니다.
    pub fn sign_in_cookie(&self, user: &User, remember: bool) -> Result<Cookie<'static>, AppError> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장되지 않은 사용자로 로그인할 수 없습니다".to_string()))?;

        let remember_stamp = if remember {
            user.remember_created_at.map(|at| at.timestamp_millis())
        } else {
            None
        };

        let data = SessionData { user_id, remember_stamp };
        let value = serde_json::to_string(&data).context("세션 직렬화 실패")?;

        let max_age = remember_stamp.map(|_| self.config.remember_for);
        Ok(self.encrypt(SESSION_COOKIE, value, max_age))
    }

    pub fn sign_out_cookie(&self) -> Cookie<'static> {
        self.removal(SESSION_COOKIE)
    }

    pub fn read_session(&self, req: &HttpRequest) -> Option<SessionData> {
        let value = self.decrypt(req, SESSION_COOKIE)?;
        serde_json::from_str(&value).ok()
    }

    pub fn flash_cookie(&self, flash: &Flash) -> Cookie<'static> {
        match serde_json::to_string(flash) {
            Ok(value) => self.encrypt(FLASH_COOKIE, value, None),
            Err(e) => {
                log::error!("플래시 직렬화 실패: {}", e);
                self.removal(FLASH_COOKIE)
            }
        }
    }

    pub fn clear_flash_cookie(&self) -> Cookie<'static> {
        self.removal(FLASH_COOKIE)
    }

    pub fn read_flash(&self, req: &HttpRequest) -> Option<Flash> {
        let value = self.decrypt(req, FLASH_COOKIE)?;
        serde_json::from_str(&value).ok()
    }

    pub fn oauth_state_cookie(&self, state: &str) -> Cookie<'static> {
        self.encrypt(
            OAUTH_STATE_COOKIE,
            state.to_string(),
            Some(chrono::Duration::minutes(OAUTH_STATE_MINUTES)),
        )
    }

    pub fn clear_oauth_state_cookie(&self) -> Cookie<'static> {
        self.removal(OAUTH_STATE_COOKIE)
    }

    pub fn read_oauth_state(&self, req: &HttpRequest) -> Option<String> {
        self.decrypt(req, OAUTH_STATE_COOKIE)
    }
}
