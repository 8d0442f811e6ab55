//! 계정 포털
//!
//! 서버 렌더링 HTML로 회원가입, 로그인/로그아웃, 비밀번호 재설정,
//! Microsoft Entra ID SSO를 제공하는 Actix-web 애플리케이션입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Routes      │ ← 페이지/폼 엔드포인트, SessionMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 폼 해석, 리다이렉트, views 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 가입/인증/SSO/비밀번호 복구
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (MongoDB / 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_portal::core::AppContext;
//! use account_portal::repositories::users::MemoryUserRepository;
//! use account_portal::routes::configure_all_routes;
//!
//! let ctx = AppContext::from_env(Arc::new(MemoryUserRepository::new()));
//! let app = App::new()
//!     .configure(|cfg| ctx.configure(cfg))
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;
