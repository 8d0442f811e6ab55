//! 비밀번호 찾기 / 재설정
//!
//! | 메서드 | 경로 | 동작 |
//! |--------|------|------|
//! | `GET` | `/users/password/new` | 이메일 입력 폼 |
//! | `POST` | `/users/password` | 재설정 메일 발송 (`_method=put`이면 재설정) |
//! | `GET` | `/users/password/edit` | 새 비밀번호 폼 |
//! | `PUT`/`PATCH` | `/users/password` | 비밀번호 재설정 후 로그인 |

use actix_web::{HttpResponse, get, http::StatusCode, post, route, web};

use crate::{
    domain::dto::users::request::{EditPasswordQuery, PasswordForm},
    errors::AppError,
    handlers::{render, see_other},
    middlewares::{SessionManager, SessionMiddleware, flash::Flash},
    services::auth::PasswordRecoveryService,
    utils::string_utils::is_blank,
    views,
};

pub const SEND_INSTRUCTIONS: &str =
    "You will receive an email with instructions on how to reset your password in a few minutes.";
pub const PASSWORD_UPDATED: &str =
    "Your password has been changed successfully. You are now signed in.";
pub const NO_TOKEN: &str = "You can't access this page without coming from a password reset email. \
     If you do come from a password reset email, please make sure you used the full URL provided.";

#[get("/users/password/new", wrap = "SessionMiddleware::guest_only()")]
pub async fn new_password(flash: Flash) -> HttpResponse {
    render(StatusCode::OK, views::passwords::new("", None, &flash))
}

/// 재설정 안내 메일 요청
///
/// HTML 폼은 PUT을 보낼 수 없으므로 `_method=put|patch`이면 재설정으로 처리합니다.
#[post("/users/password", wrap = "SessionMiddleware::guest_only()")]
pub async fn create_password(
    form: web::Form<PasswordForm>,
    recovery: web::Data<PasswordRecoveryService>,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    if form.is_update() {
        return reset_password(form, &recovery, &sessions).await;
    }

    match recovery.send_reset_instructions(&form.email).await {
        Ok(_) => Ok(see_other("/users/sign_in")
            .cookie(sessions.flash_cookie(&Flash::notice(SEND_INSTRUCTIONS)))
            .finish()),
        Err(AppError::InvalidRecord(errors)) => Ok(render(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::passwords::new(&form.email, Some(&errors), &Flash::default()),
        )),
        Err(e) => Err(e),
    }
}

#[get("/users/password/edit", wrap = "SessionMiddleware::guest_only()")]
pub async fn edit_password(
    query: web::Query<EditPasswordQuery>,
    flash: Flash,
    sessions: web::Data<SessionManager>,
) -> HttpResponse {
    if is_blank(&query.reset_password_token) {
        return see_other("/users/sign_in")
            .cookie(sessions.flash_cookie(&Flash::alert(NO_TOKEN)))
            .finish();
    }

    render(
        StatusCode::OK,
        views::passwords::edit(&query.reset_password_token, None, &flash),
    )
}

#[route(
    "/users/password",
    method = "PUT",
    method = "PATCH",
    wrap = "SessionMiddleware::guest_only()"
)]
pub async fn update_password(
    form: web::Form<PasswordForm>,
    recovery: web::Data<PasswordRecoveryService>,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, AppError> {
    reset_password(form.into_inner(), &recovery, &sessions).await
}

async fn reset_password(
    form: PasswordForm,
    recovery: &PasswordRecoveryService,
    sessions: &SessionManager,
) -> Result<HttpResponse, AppError> {
    match recovery
        .reset_password(
            &form.reset_password_token,
            &form.password,
            form.password_confirmation.as_deref(),
        )
        .await
    {
        Ok(user) => Ok(see_other("/")
            .cookie(sessions.sign_in_cookie(&user, false)?)
            .cookie(sessions.flash_cookie(&Flash::notice(PASSWORD_UPDATED)))
            .finish()),
        Err(AppError::InvalidRecord(errors)) => Ok(render(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::passwords::edit(&form.reset_password_token, Some(&errors), &Flash::default()),
        )),
        Err(e) => Err(e),
    }
}
