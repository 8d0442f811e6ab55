//! 통합 테스트 공통 픽스처
//!
//! 메모리 저장소와 메모리 메일러로 전체 앱을 구성합니다.
#![allow(dead_code)]

pub mod fake_entra;

use std::sync::Arc;

use actix_web::{
    App,
    cookie::Cookie,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    test,
};

use account_portal::{
    config::{EntraIdConfig, RecoveryConfig, SessionConfig},
    core::app_context::AppContext,
    domain::entities::users::{user::User, user_draft::UserDraft},
    middlewares::session_manager::{FLASH_COOKIE, OAUTH_STATE_COOKIE, SESSION_COOKIE},
    repositories::users::{MemoryUserRepository, UserStore},
    routes::configure_all_routes,
    services::{mail::MemoryMailer, users::PasswordHasher},
};

pub const PASSWORD: &str = "password123";

pub struct TestContext {
    pub ctx: AppContext,
    pub store: Arc<MemoryUserRepository>,
    pub mailer: Arc<MemoryMailer>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Entra ID SSO가 설정된 앱 (토큰 교환 전 단계만 확인할 때)
    pub fn with_entra_id() -> Self {
        Self::build(Some(EntraIdConfig::for_tenant(
            "contoso",
            "client-id",
            "client-secret",
            "http://localhost:8080/users/auth/entra_id/callback",
        )))
    }

    pub fn with_entra_config(config: EntraIdConfig) -> Self {
        Self::build(Some(config))
    }

    fn build(entra_id: Option<EntraIdConfig>) -> Self {
        let store = Arc::new(MemoryUserRepository::new());
        let mailer = Arc::new(MemoryMailer::new());

        let ctx = AppContext::new(
            store.clone(),
            PasswordHasher::new(4),
            mailer.clone(),
            SessionConfig::ephemeral(),
            RecoveryConfig::new("http://localhost:8080"),
            entra_id,
        );

        Self { ctx, store, mailer }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let ctx = self.ctx.clone();
        App::new()
            .configure(move |cfg| ctx.configure(cfg))
            .configure(configure_all_routes)
    }

    /// `PASSWORD`로 가입된 사용자
    pub async fn create_user(&self, email: &str) -> User {
        self.ctx
            .users
            .register(UserDraft::new(email, PASSWORD).with_confirmation(PASSWORD))
            .await
            .unwrap()
    }

    pub async fn user_count(&self) -> u64 {
        self.store.count().await.unwrap()
    }
}

pub fn sign_in_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/users/sign_in")
        .set_form([("user[email]", email), ("user[password]", password)])
}

pub fn location(resp: &ServiceResponse) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn find_cookie(resp: &ServiceResponse, name: &str) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.into_owned())
}

/// 응답이 발급한 로그인 세션 쿠키 (삭제 쿠키는 제외)
pub fn session_cookie(resp: &ServiceResponse) -> Option<Cookie<'static>> {
    find_cookie(resp, SESSION_COOKIE).filter(|c| !c.value().is_empty())
}

pub fn oauth_state_cookie(resp: &ServiceResponse) -> Option<Cookie<'static>> {
    find_cookie(resp, OAUTH_STATE_COOKIE).filter(|c| !c.value().is_empty())
}

pub fn flash_cookie(resp: &ServiceResponse) -> Option<Cookie<'static>> {
    find_cookie(resp, FLASH_COOKIE).filter(|c| !c.value().is_empty())
}

pub async fn body_string(resp: ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// 메일 본문의 재설정 링크에서 원본 토큰을 꺼냅니다.
pub fn reset_token_from(body: &str) -> String {
    body.split("reset_password_token=")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .map(|token| urlencoding::decode(token).unwrap().into_owned())
        .unwrap()
}
