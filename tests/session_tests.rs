//! 로그인 / 로그아웃 / 홈 화면 통합 테스트

mod common;

use actix_web::{http::StatusCode, test};

use account_portal::{
    handlers::{SIGNED_IN, SIGNED_OUT},
    middlewares::session_inner::ALREADY_SIGNED_IN,
    repositories::users::UserStore,
};
use common::{PASSWORD, TestContext, body_string, flash_cookie, location, session_cookie, sign_in_request};

#[actix_web::test]
async fn test_home_for_guest() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Welcome"));
    assert!(body.contains("Sign in</a>"));
    assert!(body.contains("Create an account"));
    assert!(body.contains(r#"<div data-controller="hello"></div>"#));
    assert!(!body.contains("Sign out"));
}

#[actix_web::test]
async fn test_sign_in_page() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::get().uri("/users/sign_in").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Sign in to your account"));
    assert!(body.contains(r#"name="user[email]""#));
    assert!(body.contains(r#"name="user[password]""#));
    assert!(body.contains("Forgot your password?"));
    // SSO 설정이 없으면 Microsoft 버튼을 숨김
    assert!(!body.contains("Sign in with Microsoft"));
}

#[actix_web::test]
async fn test_sign_in_with_valid_credentials() {
    let ctx = TestContext::new();
    ctx.create_user("test@example.com").await;
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(&app, sign_in_request("test@example.com", PASSWORD).to_request()).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    let session = session_cookie(&resp).expect("session cookie");
    let flash = flash_cookie(&resp).expect("flash cookie");
    assert!(session.max_age().is_none());

    // 다음 요청에서 로그인 상태와 플래시가 보임
    let req = test::TestRequest::get()
        .uri("/")
        .cookie(session)
        .cookie(flash)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("test@example.com"));
    assert!(body.contains("Sign out"));
    assert!(!body.contains("Sign in</a>"));
    assert!(body.contains(SIGNED_IN));
}

#[actix_web::test]
async fn test_sign_in_email_is_case_insensitive() {
    let ctx = TestContext::new();
    ctx.create_user("test@example.com").await;
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(&app, sign_in_request("  Test@Example.COM ", PASSWORD).to_request()).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(session_cookie(&resp).is_some());
}

#[actix_web::test]
async fn test_sign_in_with_invalid_credentials() {
    let ctx = TestContext::new();
    ctx.create_user("test@example.com").await;
    let app = test::init_service(ctx.app()).await;

    for (email, password) in [("test@example.com", "wrong-password"), ("nobody@example.com", PASSWORD)] {
        let resp = test::call_service(&app, sign_in_request(email, password).to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(session_cookie(&resp).is_none());
        let body = body_string(resp).await;
        assert!(body.contains("Invalid Email or password."));
        assert!(body.contains(email));
    }
}

#[actix_web::test]
async fn test_remember_me_sets_persistent_cookie() {
    let ctx = TestContext::new();
    ctx.create_user("test@example.com").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/users/sign_in")
        .set_form([
            ("user[email]", "test@example.com"),
            ("user[password]", PASSWORD),
            ("user[remember_me]", "1"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let session = session_cookie(&resp).unwrap();
    assert!(session.max_age().is_some());

    let user = ctx.ctx.users.store().find_by_email("test@example.com").await.unwrap().unwrap();
    assert!(user.remember_created_at.is_some());
}

#[actix_web::test]
async fn test_sign_out() {
    let ctx = TestContext::new();
    ctx.create_user("test@example.com").await;
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(&app, sign_in_request("test@example.com", PASSWORD).to_request()).await;
    let session = session_cookie(&resp).unwrap();

    let req = test::TestRequest::delete()
        .uri("/users/sign_out")
        .cookie(session.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    assert!(session_cookie(&resp).is_none());
    let flash = flash_cookie(&resp).unwrap();

    let req = test::TestRequest::get().uri("/").cookie(flash).to_request();
    let body = body_string(test::call_service(&app, req).await).await;
    assert!(body.contains(SIGNED_OUT));
    assert!(body.contains("Sign in</a>"));
}

#[actix_web::test]
async fn test_sign_out_via_form_post_without_session() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/users/sign_out")
        .set_form([("_method", "delete")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
}

#[actix_web::test]
async fn test_remembered_session_is_invalid_after_sign_out() {
    let ctx = TestContext::new();
    ctx.create_user("test@example.com").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/users/sign_in")
        .set_form([
            ("user[email]", "test@example.com"),
            ("user[password]", PASSWORD),
            ("user[remember_me]", "1"),
        ])
        .to_request();
    let remembered = session_cookie(&test::call_service(&app, req).await).unwrap();

    let req = test::TestRequest::delete()
        .uri("/users/sign_out")
        .cookie(remembered.clone())
        .to_request();
    test::call_service(&app, req).await;

    // 로그아웃 전에 복사해 둔 remember 쿠키는 더 이상 통하지 않음
    let req = test::TestRequest::get().uri("/").cookie(remembered).to_request();
    let resp = test::call_service(&app, req).await;

    let cleared = resp
        .response()
        .cookies()
        .any(|c| c.name() == account_portal::middlewares::session_manager::SESSION_COOKIE);
    assert!(cleared);
    let body = body_string(resp).await;
    assert!(!body.contains("Sign out"));
}

#[actix_web::test]
async fn test_guest_only_pages_redirect_signed_in_user() {
    let ctx = TestContext::new();
    ctx.create_user("test@example.com").await;
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(&app, sign_in_request("test@example.com", PASSWORD).to_request()).await;
    let session = session_cookie(&resp).unwrap();

    for uri in ["/users/sign_in", "/users/sign_up", "/users/password/new"] {
        let req = test::TestRequest::get().uri(uri).cookie(session.clone()).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(location(&resp), "/");

        let flash = flash_cookie(&resp).unwrap();
        let req = test::TestRequest::get()
            .uri("/")
            .cookie(session.clone())
            .cookie(flash)
            .to_request();
        let body = body_string(test::call_service(&app, req).await).await;
        assert!(body.contains(ALREADY_SIGNED_IN));
    }
}

#[actix_web::test]
async fn test_tampered_session_cookie_is_ignored() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::get()
        .uri("/")
        .cookie(actix_web::cookie::Cookie::new(
            account_portal::middlewares::session_manager::SESSION_COOKIE,
            "not-encrypted",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Sign in</a>"));
}
