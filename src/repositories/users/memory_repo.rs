//! 메모리 기반 사용자 저장소
//!
//! MongoDB 없이 서버를 띄우거나(`USER_STORE=memory`) 통합 테스트에서 사용합니다.
//! 모든 쓰기는 하나의 write lock 안에서 검사와 삽입을 함께 수행하므로
//! `find_or_create_by_*`가 MongoDB 구현과 같은 멱등성을 가집니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    domain::entities::users::user::User,
    errors::AppError,
    repositories::users::user_store::{Upserted, UserStore},
    utils::string_utils::normalize_email,
};

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("user store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("user store lock poisoned".to_string()))
    }

    fn find_where<F>(&self, predicate: F) -> Result<Option<User>, AppError>
    where
        F: Fn(&User) -> bool,
    {
        Ok(self.read()?.iter().find(|user| predicate(user)).cloned())
    }
}

fn insert(users: &mut Vec<User>, mut user: User) -> Result<User, AppError> {
    if users.iter().any(|existing| existing.email == user.email) {
        return Err(AppError::ConflictError("Email has already been taken".to_string()));
    }

    user.id = Some(ObjectId::new());
    users.push(user.clone());
    Ok(user)
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.find_where(|user| user.id == Some(object_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = normalize_email(email);
        self.find_where(|user| user.email == email)
    }

    async fn find_by_identity(&self, provider: &str, uid: &str) -> Result<Option<User>, AppError> {
        self.find_where(|user| user.has_identity(provider, uid))
    }

    async fn find_by_reset_token(&self, digest: &str) -> Result<Option<User>, AppError> {
        self.find_where(|user| user.reset_password_token.as_deref() == Some(digest))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        user.email = normalize_email(&user.email);
        let mut users = self.write()?;
        insert(&mut users, user)
    }

    async fn find_or_create_by_identity(&self, mut user: User) -> Result<Upserted, AppError> {
        let (provider, uid) = match (user.provider.clone(), user.uid.clone()) {
            (Some(provider), Some(uid)) => (provider, uid),
            _ => {
                return Err(AppError::ValidationError(
                    "provider와 uid가 필요합니다".to_string(),
                ));
            }
        };
        user.email = normalize_email(&user.email);

        let mut users = self.write()?;
        if let Some(existing) = users.iter().find(|u| u.has_identity(&provider, &uid)) {
            return Ok(Upserted { user: existing.clone(), created: false });
        }

        let user = insert(&mut users, user)?;
        Ok(Upserted { user, created: true })
    }

    async fn find_or_create_by_email(&self, mut user: User) -> Result<Upserted, AppError> {
        user.email = normalize_email(&user.email);

        let mut users = self.write()?;
        if let Some(existing) = users.iter().find(|u| u.email == user.email) {
            return Ok(Upserted { user: existing.clone(), created: false });
        }

        let user = insert(&mut users, user)?;
        Ok(Upserted { user, created: true })
    }

    async fn update(&self, user: &User) -> Result<User, AppError> {
        let id = user
            .id
            .ok_or_else(|| AppError::ValidationError("저장되지 않은 사용자는 수정할 수 없습니다".to_string()))?;

        let mut updated = user.clone();
        updated.email = normalize_email(&updated.email);
        updated.touch();

        let mut users = self.write()?;
        if users.iter().any(|u| u.id != Some(id) && u.email == updated.email) {
            return Err(AppError::ConflictError("Email has already been taken".to_string()));
        }

        let slot = users
            .iter_mut()
            .find(|u| u.id == Some(id))
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        *slot = updated.clone();

        Ok(updated)
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.read()?.len() as u64)
    }
}
