//! MongoDB 연결 관리
//!
//! `MONGODB_URI`와 `DATABASE_NAME` 환경 변수로 연결 정보를 읽고,
//! 시작 시 `ping` 명령으로 연결을 확인합니다.
//!
//! ```rust,ignore
//! let database = Arc::new(Database::new().await?);
//! let repo = UserRepository::new(database.clone());
//! repo.create_indexes().await?;
//! ```

use std::env;

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::errors::AppError;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    pub async fn new() -> Result<Self, AppError> {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "account_portal_development".to_string());

        Self::connect(&mongodb_uri, database_name).await
    }

    pub async fn connect(mongodb_uri: &str, database_name: String) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(mongodb_uri).await?;

        // 모니터링 도구에서 식별할 수 있도록 애플리케이션 이름 지정
        client_options.app_name = Some("account_portal".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
