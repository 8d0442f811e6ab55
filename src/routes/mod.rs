//! 라우트 설정 모듈
//!
//! | 메서드 | 경로 | 핸들러 | 게스트 전용 |
//! |--------|------|--------|-------------|
//! | `GET` | `/` | `home::index` | |
//! | `GET`/`POST` | `/users/sign_in` | `sessions::new_session` / `create_session` | ✓ |
//! | `DELETE`/`POST` | `/users/sign_out` | `sessions::destroy_session` | |
//! | `GET` | `/users/sign_up` | `registrations::new_registration` | ✓ |
//! | `POST` | `/users` | `registrations::create_registration` | ✓ |
//! | `GET` | `/users/password/new` | `passwords::new_password` | ✓ |
//! | `POST` | `/users/password` | `passwords::create_password` | ✓ |
//! | `GET` | `/users/password/edit` | `passwords::edit_password` | ✓ |
//! | `PUT`/`PATCH` | `/users/password` | `passwords::update_password` | ✓ |
//! | `GET`/`POST` | `/users/auth/entra_id` | `omniauth::authorize` | |
//! | `GET` | `/users/auth/entra_id/callback` | `omniauth::callback` | |
//! | `GET` | `/assets/hello_controller.js` | `assets::hello_controller` | |
//! | `GET` | `/health` | `health_check` | |
//!
//! 페이지 라우트는 모두 `SessionMiddleware::load()` 스코프 안에 있으며,
//! 게스트 전용 라우트는 핸들러에 `SessionMiddleware::guest_only()`가 붙어 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .configure(|cfg| ctx.configure(cfg))
//!     .configure(configure_all_routes)
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::SessionMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 세션이 필요 없는 엔드포인트
    cfg.service(health_check)
        .service(handlers::assets::hello_controller);

    cfg.service(
        web::scope("")
            .wrap(SessionMiddleware::load())
            .configure(configure_page_routes)
            .configure(configure_user_routes)
            .configure(configure_omniauth_routes),
    );
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::home::index);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // 로그인 / 로그아웃
        .service(handlers::sessions::new_session)
        .service(handlers::sessions::create_session)
        .service(handlers::sessions::destroy_session)
        // 회원가입
        .service(handlers::registrations::new_registration)
        .service(handlers::registrations::create_registration)
        // 비밀번호 찾기
        .service(handlers::passwords::new_password)
        .service(handlers::passwords::create_password)
        .service(handlers::passwords::edit_password)
        .service(handlers::passwords::update_password);
}

fn configure_omniauth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::omniauth::authorize)
        .service(handlers::omniauth::callback);
}

/// 로드밸런서/모니터링용 헬스체크
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_portal",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
