//! 로컬 포트에 띄우는 가짜 Entra ID 토큰 / userinfo 엔드포인트
//!
//! `code`마다 정해진 사용자를 돌려줍니다. 알 수 없는 코드는 `invalid_grant`로 거절합니다.

use std::collections::HashMap;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, dev::ServerHandle, web};
use serde_json::json;

use account_portal::config::EntraIdConfig;

pub const ALICE_CODE: &str = "alice-code";
pub const TAKEN_EMAIL_CODE: &str = "taken-code";
pub const NO_EMAIL_CODE: &str = "no-email-code";

pub const ALICE_EMAIL: &str = "alice@example.com";
pub const TAKEN_EMAIL: &str = "taken@example.com";

pub struct FakeEntra {
    pub base_url: String,
    handle: ServerHandle,
}

impl FakeEntra {
    pub fn start() -> Self {
        let server = HttpServer::new(|| {
            App::new()
                .route("/token", web::post().to(token))
                .route("/userinfo", web::get().to(userinfo))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    /// 토큰 / userinfo URI를 이 서버로 돌린 설정
    pub fn config(&self) -> EntraIdConfig {
        let mut config = EntraIdConfig::for_tenant(
            "contoso",
            "client-id",
            "client-secret",
            "http://localhost:8080/users/auth/entra_id/callback",
        );
        config.token_uri = format!("{}/token", self.base_url);
        config.userinfo_uri = format!("{}/userinfo", self.base_url);
        config
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn token(form: web::Form<HashMap<String, String>>) -> HttpResponse {
    let code = form.get("code").map(String::as_str).unwrap_or_default();

    match code {
        ALICE_CODE | TAKEN_EMAIL_CODE | NO_EMAIL_CODE => HttpResponse::Ok().json(json!({
            "access_token": format!("token-{}", code),
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": EntraIdConfig::SCOPE,
        })),
        _ => HttpResponse::BadRequest().json(json!({
            "error": "invalid_grant",
            "error_description": "AADSTS70008: The provided authorization code or refresh token has expired.",
        })),
    }
}

async fn userinfo(req: HttpRequest) -> HttpResponse {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default();

    match token.strip_prefix("token-") {
        Some(ALICE_CODE) => HttpResponse::Ok().json(json!({
            "sub": "alice-sub",
            "email": ALICE_EMAIL,
            "name": "Alice Example",
        })),
        Some(TAKEN_EMAIL_CODE) => HttpResponse::Ok().json(json!({
            "sub": "taken-sub",
            "email": TAKEN_EMAIL,
            "name": "Taken Example",
        })),
        Some(NO_EMAIL_CODE) => HttpResponse::Ok().json(json!({ "sub": "no-email-sub" })),
        _ => HttpResponse::Unauthorized().finish(),
    }
}
