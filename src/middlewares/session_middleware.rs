//! 세션 미들웨어
//!
//! ```rust,ignore
//! App::new()
//!     // 모든 요청: 세션 쿠키 → 로그인 사용자, 플래시 로드
//!     .wrap(SessionMiddleware::load())
//!     .service(
//!         web::resource("/users/sign_in")
//!             // 로그인한 사용자는 `/`로 돌려보냄
//!             .wrap(SessionMiddleware::guest_only())
//!             .route(web::get().to(new_session)),
//!     )
//! ```
//!
//! `guest_only`는 바깥의 `load`가 extensions에 넣은 사용자만 확인하므로
//! 반드시 `load` 안쪽에 배치합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::session_inner::SessionMiddlewareService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// 세션 쿠키를 읽어 로그인 사용자와 플래시를 요청에 연결
    Load,
    /// 로그인한 사용자의 접근을 막음 (로그인, 회원가입, 비밀번호 찾기 화면)
    GuestOnly,
}

pub struct SessionMiddleware {
    mode: SessionMode,
}

impl SessionMiddleware {
    pub fn new(mode: SessionMode) -> Self {
        Self { mode }
    }

    pub fn load() -> Self {
        Self::new(SessionMode::Load)
    }

    pub fn guest_only() -> Self {
        Self::new(SessionMode::GuestOnly)
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}
