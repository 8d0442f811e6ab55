//! Entra ID SSO 로그인
//!
//! ```text
//! GET|POST /users/auth/entra_id           → 303 Microsoft authorize URL (+ state 쿠키)
//! GET      /users/auth/entra_id/callback  → state 확인 → 코드 교환 → from_omniauth → 303 /
//! ```
//!
//! 콜백 실패는 모두 로그인 화면으로 돌려보내고 alert로 사유를 알립니다.

use actix_web::{HttpRequest, HttpResponse, get, route, web};
use validator::Validate;

use crate::{
    domain::dto::users::request::OAuthCallbackQuery,
    errors::AppError,
    handlers::see_other,
    middlewares::{SessionManager, flash::Flash},
    services::auth::EntraIdAuthService,
};

pub const PROVIDER_LABEL: &str = "Entra ID";
pub const AUTHENTICATED: &str = "Successfully authenticated from Entra ID account.";
pub const NOT_CONFIGURED: &str = "Entra ID sign in is not configured.";

#[route("/users/auth/entra_id", method = "GET", method = "POST")]
pub async fn authorize(
    entra_id: Option<web::Data<EntraIdAuthService>>,
    sessions: web::Data<SessionManager>,
) -> HttpResponse {
    let Some(entra_id) = entra_id else {
        return see_other("/users/sign_in")
            .cookie(sessions.flash_cookie(&Flash::alert(NOT_CONFIGURED)))
            .finish();
    };

    let state = EntraIdAuthService::new_state();

    see_other(&entra_id.authorize_url(&state))
        .cookie(sessions.oauth_state_cookie(&state))
        .finish()
}

#[get("/users/auth/entra_id/callback")]
pub async fn callback(
    req: HttpRequest,
    query: web::Query<OAuthCallbackQuery>,
    entra_id: Option<web::Data<EntraIdAuthService>>,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    let Some(entra_id) = entra_id else {
        return Ok(see_other("/users/sign_in")
            .cookie(sessions.flash_cookie(&Flash::alert(NOT_CONFIGURED)))
            .finish());
    };

    if let Some(error) = &query.error {
        log::warn!("Entra ID 인증 거부: {} {:?}", error, query.error_description);
        let reason = query.error_description.as_deref().unwrap_or(error);
        return Ok(failure(&sessions, reason));
    }

    if query.validate().is_err() {
        return Ok(failure(&sessions, "Invalid credentials"));
    }

    let expected_state = sessions.read_oauth_state(&req);
    if expected_state.as_deref() != Some(query.state.as_str()) {
        log::warn!("OAuth state 불일치");
        return Ok(failure(&sessions, "Csrf detected"));
    }

    let user = match entra_id.authenticate_with_code(&query.code).await {
        Ok(user) => user,
        Err(AppError::InvalidRecord(errors)) => {
            return Ok(failure(&sessions, &errors.full_messages().join(", ")));
        }
        Err(e @ (AppError::AuthenticationError(_) | AppError::ExternalServiceError(_))) => {
            log::warn!("Entra ID 인증 실패: {}", e);
            return Ok(failure(&sessions, "Invalid credentials"));
        }
        Err(e) => return Err(e),
    };

    log::info!("Entra ID 로그인: {}", user.email);

    Ok(see_other("/")
        .cookie(sessions.sign_in_cookie(&user, false)?)
        .cookie(sessions.clear_oauth_state_cookie())
        .cookie(sessions.flash_cookie(&Flash::notice(AUTHENTICATED)))
        .finish())
}

fn failure(sessions: &SessionManager, reason: &str) -> HttpResponse {
    let message = format!(
        "Could not authenticate you from {} because \"{}\".",
        PROVIDER_LABEL, reason
    );

    see_other("/users/sign_in")
        .cookie(sessions.clear_oauth_state_cookie())
        .cookie(sessions.flash_cookie(&Flash::alert(message)))
        .finish()
}
