//! 정적 스크립트

use actix_web::{HttpResponse, get, http::header};

const HELLO_CONTROLLER: &str = include_str!("../../assets/hello_controller.js");

/// `data-controller="hello"` 요소의 텍스트를 "Hello World!"로 바꾸는 스크립트
#[get("/assets/hello_controller.js")]
pub async fn hello_controller() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(HELLO_CONTROLLER)
}
