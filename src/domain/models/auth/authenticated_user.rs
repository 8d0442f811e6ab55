use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};

use crate::domain::entities::users::user::User;

/// 세션 쿠키로 확인된 로그인 사용자
///
/// `SessionMiddleware`가 요청 extensions에 넣어 둡니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// 선택적 로그인 사용자 추출자
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<AuthenticatedUser>);

impl CurrentUser {
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref().map(|auth| &auth.user)
    }
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(CurrentUser(user)))
    }
}
