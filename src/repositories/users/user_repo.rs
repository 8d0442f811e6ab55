//! # 사용자 리포지토리 (MongoDB)
//!
//! `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 옵션 |
//! |------|----|------|
//! | `email_unique` | `email` | unique |
//! | `provider_uid_unique` | `provider`, `uid` | unique, `provider`가 문자열인 문서만 |
//! | `reset_password_token` | `reset_password_token` | - |
//! | `created_at_desc` | `created_at` | - |
//!
//! 이메일은 항상 소문자로 저장되므로 `email_unique`가 대소문자 무시 유일성을 보장합니다.
//!
//! ## 멱등 upsert
//!
//! `find_or_create_by_*`는 `update_one` + `$setOnInsert` + `upsert`로 한 번의
//! 원자적 연산을 수행합니다. 동시에 같은 키로 upsert하면 한쪽이 duplicate key
//! 에러를 받을 수 있으며, 이 경우 이미 삽입된 문서를 다시 읽어 반환합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc, oid::ObjectId, to_document},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, UpdateOptions},
};

use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::AppError,
    repositories::users::user_store::{Upserted, UserStore},
    utils::string_utils::normalize_email,
};

const COLLECTION_NAME: &str = "users";

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY: i32 = 11000;

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 컬렉션 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let identity_index = IndexModel::builder()
            .keys(doc! { "provider": 1, "uid": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("provider_uid_unique".to_string())
                .partial_filter_expression(doc! { "provider": { "$type": "string" } })
                .build())
            .build();

        let reset_token_index = IndexModel::builder()
            .keys(doc! { "reset_password_token": 1 })
            .options(IndexOptions::builder()
                .name("reset_password_token".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, identity_index, reset_token_index, created_at_index])
            .await?;

        log::info!("✅ users 컬렉션 인덱스 확인 완료");
        Ok(())
    }

    async fn find_one(&self, filter: Document) -> Result<Option<User>, AppError> {
        Ok(self.collection().find_one(filter).await?)
    }

    /// `filter`에 해당하는 문서가 없을 때만 `user`를 삽입합니다.
    ///
    /// filter에 쓰인 필드는 upsert 시 filter 값으로 채워지므로 `$setOnInsert`에서 제외합니다.
    async fn upsert(&self, filter: Document, user: &User) -> Result<Upserted, AppError> {
        let mut on_insert = to_document(user)
            .map_err(|e| AppError::InternalError(format!("사용자 직렬화 실패: {}", e)))?;
        on_insert.remove("_id");
        for key in filter.keys() {
            on_insert.remove(key);
        }

        let options = UpdateOptions::builder().upsert(true).build();

        let created = match self
            .collection()
            .update_one(filter.clone(), doc! { "$setOnInsert": on_insert })
            .with_options(options)
            .await
        {
            Ok(result) => result.upserted_id.is_some(),
            Err(e) if is_duplicate_key(&e) => {
                // 동시 upsert 경합이면 먼저 들어간 문서가 있음, 아니면 다른 유일 키(이메일) 충돌
                return match self.find_one(filter).await? {
                    Some(existing) => Ok(Upserted { user: existing, created: false }),
                    None => Err(AppError::ConflictError("Email has already been taken".to_string())),
                };
            }
            Err(e) => return Err(e.into()),
        };

        let stored = self
            .find_one(filter)
            .await?
            .ok_or_else(|| AppError::InternalError("upsert 이후 사용자를 찾을 수 없습니다".to_string()))?;

        Ok(Upserted { user: stored, created })
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = match ObjectId::parse_str(id) {
            Ok(object_id) => object_id,
            Err(_) => {
                log::debug!("유효하지 않은 사용자 ID 형식: {}", id);
                return Ok(None);
            }
        };

        self.find_one(doc! { "_id": object_id }).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.find_one(doc! { "email": normalize_email(email) }).await
    }

    async fn find_by_identity(&self, provider: &str, uid: &str) -> Result<Option<User>, AppError> {
        self.find_one(doc! { "provider": provider, "uid": uid }).await
    }

    async fn find_by_reset_token(&self, digest: &str) -> Result<Option<User>, AppError> {
        self.find_one(doc! { "reset_password_token": digest }).await
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        user.email = normalize_email(&user.email);

        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("Email has already been taken".to_string()));
        }

        let result = match self.collection().insert_one(&user).await {
            Ok(result) => result,
            Err(e) if is_duplicate_key(&e) => {
                return Err(AppError::ConflictError("Email has already been taken".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn find_or_create_by_identity(&self, user: User) -> Result<Upserted, AppError> {
        let (provider, uid) = match (&user.provider, &user.uid) {
            (Some(provider), Some(uid)) => (provider.clone(), uid.clone()),
            _ => {
                return Err(AppError::ValidationError(
                    "provider와 uid가 필요합니다".to_string(),
                ));
            }
        };

        let mut user = user;
        user.email = normalize_email(&user.email);

        self.upsert(doc! { "provider": provider, "uid": uid }, &user).await
    }

    async fn find_or_create_by_email(&self, mut user: User) -> Result<Upserted, AppError> {
        user.email = normalize_email(&user.email);
        let filter = doc! { "email": user.email.clone() };

        self.upsert(filter, &user).await
    }

    async fn update(&self, user: &User) -> Result<User, AppError> {
        let id = user
            .id
            .ok_or_else(|| AppError::ValidationError("저장되지 않은 사용자는 수정할 수 없습니다".to_string()))?;

        let mut updated = user.clone();
        updated.email = normalize_email(&updated.email);
        updated.touch();

        let result = self
            .collection()
            .replace_one(doc! { "_id": id }, &updated)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("Email has already been taken".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(updated)
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.collection().count_documents(doc! {}).await?)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}
