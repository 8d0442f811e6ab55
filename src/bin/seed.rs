//! 개발용 시드 데이터
//!
//! 개발 환경에서만 `dev@example.com` / `password` 사용자를 만듭니다.
//! 여러 번 실행해도 사용자는 한 번만 생성됩니다.
//!
//! ```bash
//! ENVIRONMENT=development cargo run --bin seed
//! ```

use std::sync::Arc;

use account_portal::config::{Environment, StoreBackend};
use account_portal::db::Database;
use account_portal::domain::entities::users::UserDraft;
use account_portal::errors::AppError;
use account_portal::repositories::users::{MemoryUserRepository, UserRepository, UserStore};
use account_portal::services::users::{PasswordHasher, UserService};
use env_logger::Env;
use log::{error, info};

const DEV_EMAIL: &str = "dev@example.com";
const DEV_PASSWORD: &str = "password";
const DEV_NAME: &str = "Dev User";

#[actix_web::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let environment = Environment::current();
    if !environment.is_development() {
        info!("개발 환경이 아니므로 시드를 건너뜁니다 ({:?})", environment);
        return;
    }

    if let Err(e) = seed().await {
        error!("시드 실패: {}", e);
        std::process::exit(1);
    }
}

async fn seed() -> Result<(), AppError> {
    let store: Arc<dyn UserStore> = match StoreBackend::current() {
        StoreBackend::MongoDb => {
            let repository = UserRepository::new(Arc::new(Database::new().await?));
            repository.create_indexes().await?;
            Arc::new(repository)
        }
        StoreBackend::Memory => Arc::new(MemoryUserRepository::new()),
    };

    let users = UserService::new(store, PasswordHasher::from_env());
    let draft = UserDraft::new(DEV_EMAIL, DEV_PASSWORD).with_name(DEV_NAME);

    let seeded = users.ensure_user(draft).await?;
    if seeded.created {
        info!("새 개발 사용자 생성: {}", seeded.user.email);
    } else {
        info!("개발 사용자가 이미 존재합니다: {}", seeded.user.email);
    }

    println!("Development user created: {} / {}", DEV_EMAIL, DEV_PASSWORD);
    Ok(())
}
