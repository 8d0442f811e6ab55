use actix_web::{HttpResponse, get, http::StatusCode};

use crate::domain::models::auth::authenticated_user::CurrentUser;
use crate::handlers::render;
use crate::middlewares::flash::Flash;
use crate::views;

/// 루트 페이지
///
/// 로그인 여부에 따라 로그인/가입 링크 또는 사용자 정보와 로그아웃 버튼을 보여줍니다.
#[get("/")]
pub async fn index(current_user: CurrentUser, flash: Flash) -> HttpResponse {
    render(StatusCode::OK, views::home::index(current_user.user(), &flash))
}
