//! 한 번만 표시되는 알림 메시지 (notice / alert)
//!
//! 핸들러가 응답에 플래시 쿠키를 실으면 다음 요청에서 `SessionMiddleware`가 읽어
//! extensions에 넣고, 응답 시 쿠키를 지웁니다.

use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, dev::Payload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

impl Flash {
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            notice: Some(message.into()),
            alert: None,
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            notice: None,
            alert: Some(message.into()),
        }
    }
}

/// 이번 요청에 전달된 플래시 (없으면 빈 값)
impl FromRequest for Flash {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(req.extensions().get::<Flash>().cloned().unwrap_or_default()))
    }
}
