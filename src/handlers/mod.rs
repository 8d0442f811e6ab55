//! # HTTP Request Handlers Module
//!
//! 브라우저 요청을 처리하고 HTML 페이지 또는 리다이렉트를 반환합니다.
//!
//! ```text
//! Browser ──form/cookie──▶ SessionMiddleware ──▶ Handlers ──▶ Services ──▶ UserStore
//!                                                   │
//!                                                   └──▶ views (HTML)
//! ```
//!
//! ## 응답 규칙
//!
//! - 성공한 폼 제출은 `303 See Other`로 리다이렉트하고 플래시 쿠키로 결과를 알립니다.
//! - 검증/인증 실패는 같은 폼을 `422 Unprocessable Entity`로 다시 렌더링합니다.
//! - 그 외 `AppError`는 `ResponseError` 구현에 따라 JSON 에러 응답이 됩니다.

pub mod assets;
pub mod home;
pub mod omniauth;
pub mod passwords;
pub mod registrations;
pub mod sessions;

use actix_web::http::{StatusCode, header};
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, HttpResponseBuilder};

pub const SIGNED_IN: &str = "Signed in successfully.";
pub const SIGNED_OUT: &str = "Signed out successfully.";
pub const SIGNED_UP: &str = "Welcome! You have signed up successfully.";

/// HTML 응답
pub fn render(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

/// `303 See Other` 리다이렉트 빌더 (쿠키를 더 붙일 수 있음)
pub fn see_other(location: &str) -> HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location));
    builder
}
