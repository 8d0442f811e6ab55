//! 로그인 / 로그아웃

use actix_web::{HttpResponse, get, http::StatusCode, post, route, web};

use crate::{
    domain::{dto::users::request::SignInForm, models::auth::authenticated_user::CurrentUser},
    errors::AppError,
    handlers::{SIGNED_IN, SIGNED_OUT, render, see_other},
    middlewares::{SessionManager, SessionMiddleware, flash::Flash},
    services::{auth::EntraIdAuthService, users::UserService},
    views::{self, sessions::SignInPage},
};

#[get("/users/sign_in", wrap = "SessionMiddleware::guest_only()")]
pub async fn new_session(
    flash: Flash,
    entra_id: Option<web::Data<EntraIdAuthService>>,
) -> HttpResponse {
    let page = SignInPage {
        email: "",
        remember_me: false,
        alert: None,
        sso_enabled: entra_id.is_some(),
    };

    render(StatusCode::OK, views::sessions::new(&page, &flash))
}

/// 이메일/비밀번호 로그인
///
/// 실패하면 입력한 이메일을 유지한 채 로그인 폼을 422로 다시 보여줍니다.
#[post("/users/sign_in", wrap = "SessionMiddleware::guest_only()")]
pub async fn create_session(
    form: web::Form<SignInForm>,
    users: web::Data<UserService>,
    sessions: web::Data<SessionManager>,
    entra_id: Option<web::Data<EntraIdAuthService>>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let remember = form.remember();

    let user = match users.authenticate(&form.email, &form.password).await {
        Ok(user) => user,
        Err(AppError::AuthenticationError(message)) => {
            let page = SignInPage {
                email: &form.email,
                remember_me: remember,
                alert: Some(&message),
                sso_enabled: entra_id.is_some(),
            };
            return Ok(render(
                StatusCode::UNPROCESSABLE_ENTITY,
                views::sessions::new(&page, &Flash::default()),
            ));
        }
        Err(e) => return Err(e),
    };

    let user = if remember {
        users.remember(&user, sessions.remember_for()).await?
    } else {
        user
    };

    log::info!("로그인 성공: {}", user.email);

    Ok(see_other("/")
        .cookie(sessions.sign_in_cookie(&user, remember)?)
        .cookie(sessions.flash_cookie(&Flash::notice(SIGNED_IN)))
        .finish())
}

/// 로그아웃
///
/// 로그인하지 않은 상태에서 호출해도 같은 결과로 리다이렉트합니다.
#[route("/users/sign_out", method = "DELETE", method = "POST")]
pub async fn destroy_session(
    current_user: CurrentUser,
    users: web::Data<UserService>,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, AppError> {
    if let Some(user) = current_user.user() {
        users.forget(user).await?;
        log::info!("로그아웃: {}", user.email);
    }

    Ok(see_other("/")
        .cookie(sessions.sign_out_cookie())
        .cookie(sessions.flash_cookie(&Flash::notice(SIGNED_OUT)))
        .finish())
}
