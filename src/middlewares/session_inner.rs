//! SessionMiddleware 요청 처리 로직
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::middlewares::flash::Flash;
use crate::middlewares::session_manager::{FLASH_COOKIE, SESSION_COOKIE, SessionManager};
use crate::middlewares::session_middleware::SessionMode;
use crate::services::users::user_service::UserService;

pub const ALREADY_SIGNED_IN: &str = "You are already signed in.";

pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: SessionMode,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            let Some(sessions) = req.app_data::<web::Data<SessionManager>>().cloned() else {
                log::error!("SessionManager가 app_data에 등록되지 않았습니다");
                let res = service.call(req).await?;
                return Ok(res.map_into_left_body());
            };

            match mode {
                SessionMode::GuestOnly => {
                    if req.extensions().contains::<AuthenticatedUser>() {
                        log::debug!("로그인 사용자의 게스트 전용 페이지 접근: {}", req.path());
                        let response = HttpResponse::SeeOther()
                            .insert_header((header::LOCATION, "/"))
                            .cookie(sessions.flash_cookie(&Flash::alert(ALREADY_SIGNED_IN)))
                            .finish();
                        let (req, _) = req.into_parts();
                        return Ok(ServiceResponse::new(req, response).map_into_right_body());
                    }

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                SessionMode::Load => {
                    let flash = sessions.read_flash(req.request());
                    if let Some(flash) = &flash {
                        req.extensions_mut().insert(flash.clone());
                    }

                    let stale_session = load_user(&req, &sessions).await;

                    let mut res = service.call(req).await?;

                    // 핸들러가 새 쿠키를 실은 경우 그대로 둠
                    if flash.is_some() && !sets_cookie(&res, FLASH_COOKIE) {
                        add_cookie(&mut res, sessions.clear_flash_cookie());
                    }
                    if stale_session && !sets_cookie(&res, SESSION_COOKIE) {
                        add_cookie(&mut res, sessions.sign_out_cookie());
                    }

                    Ok(res.map_into_left_body())
                }
            }
        })
    }
}

/// 세션 쿠키의 사용자를 extensions에 넣습니다.
///
/// 쿠키가 더 이상 유효하지 않으면(사용자 없음, remember 기록 불일치) `true`를 반환합니다.
async fn load_user(req: &ServiceRequest, sessions: &SessionManager) -> bool {
    let Some(data) = sessions.read_session(req.request()) else {
        return false;
    };

    let Some(users) = req.app_data::<web::Data<UserService>>().cloned() else {
        log::error!("UserService가 app_data에 등록되지 않았습니다");
        return false;
    };

    match users.find_by_id(&data.user_id).await {
        Ok(Some(user)) if data.is_valid_for(&user, sessions.remember_for()) => {
            log::debug!("세션 사용자: {}", data.user_id);
            req.extensions_mut().insert(AuthenticatedUser { user });
            false
        }
        Ok(_) => {
            log::debug!("만료된 세션 쿠키: {}", data.user_id);
            true
        }
        Err(e) => {
            log::error!("세션 사용자 조회 실패: {}", e);
            false
        }
    }
}

fn sets_cookie<B>(res: &ServiceResponse<B>, name: &str) -> bool {
    res.response().cookies().any(|c| c.name() == name)
}

fn add_cookie<B>(res: &mut ServiceResponse<B>, cookie: Cookie<'static>) {
    if let Err(e) = res.response_mut().add_cookie(&cookie) {
        log::error!("쿠키 설정 실패: {}", e);
    }
}
