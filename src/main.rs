//! 계정 포털 메인 애플리케이션
//!
//! 사용자 저장소를 초기화하고 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use account_portal::config::{RateLimitConfig, ServerConfig, StoreBackend};
use account_portal::core::AppContext;
use account_portal::db::Database;
use account_portal::errors::AppError;
use account_portal::repositories::users::{MemoryUserRepository, UserRepository, UserStore};
use account_portal::routes::configure_all_routes;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{App, HttpServer, middleware};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 계정 포털 시작중...");

    let store = match initialize_user_store().await {
        Ok(store) => store,
        Err(e) => {
            error!("사용자 저장소 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let context = AppContext::from_env(store);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(context).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(context: AppContext) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let context = context.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| context.configure(cfg))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG` 기본값: "info,actix_web=debug"
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `USER_STORE` 설정에 따라 MongoDB 또는 메모리 저장소를 준비합니다
async fn initialize_user_store() -> Result<Arc<dyn UserStore>, AppError> {
    match StoreBackend::current() {
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::new().await?);
            let repository = UserRepository::new(database);
            repository.create_indexes().await?;

            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            info!("🧪 메모리 사용자 저장소 사용 (재시작 시 데이터 소실)");
            Ok(Arc::new(MemoryUserRepository::new()))
        }
    }
}
