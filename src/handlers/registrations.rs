//! 회원가입

use actix_web::{HttpResponse, get, http::StatusCode, post, web};

use crate::{
    domain::dto::users::request::RegistrationForm,
    errors::AppError,
    handlers::{SIGNED_UP, render, see_other},
    middlewares::{SessionManager, SessionMiddleware, flash::Flash},
    services::users::UserService,
    views,
};

#[get("/users/sign_up", wrap = "SessionMiddleware::guest_only()")]
pub async fn new_registration(flash: Flash) -> HttpResponse {
    render(StatusCode::OK, views::registrations::new("", "", None, &flash))
}

/// 가입에 성공하면 바로 로그인 상태가 됩니다.
#[post("/users", wrap = "SessionMiddleware::guest_only()")]
pub async fn create_registration(
    form: web::Form<RegistrationForm>,
    users: web::Data<UserService>,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match users.register(form.to_draft()).await {
        Ok(user) => Ok(see_other("/")
            .cookie(sessions.sign_in_cookie(&user, false)?)
            .cookie(sessions.flash_cookie(&Flash::notice(SIGNED_UP)))
            .finish()),
        Err(AppError::InvalidRecord(errors)) => {
            log::debug!("회원가입 검증 실패: {:?}", errors.full_messages());
            let page = views::registrations::new(
                form.name.as_deref().unwrap_or_default(),
                &form.email,
                Some(&errors),
                &Flash::default(),
            );
            Ok(render(StatusCode::UNPROCESSABLE_ENTITY, page))
        }
        Err(e) => Err(e),
    }
}
