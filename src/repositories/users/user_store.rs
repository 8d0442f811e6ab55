//! 사용자 저장소 추상화
//!
//! 서비스 계층은 이 trait만 의존합니다. 운영에서는 MongoDB 구현
//! ([`UserRepository`](super::user_repo::UserRepository)), 테스트와
//! `USER_STORE=memory` 실행에서는 메모리 구현
//! ([`MemoryUserRepository`](super::memory_repo::MemoryUserRepository))을 사용합니다.
//!
//! ## 구현 규약
//!
//! - 이메일은 정규화된(소문자) 값으로 저장/조회합니다.
//! - `create`는 이메일이 이미 있으면 `AppError::ConflictError`를 반환합니다.
//! - `find_or_create_by_identity`는 `(provider, uid)` 기준 멱등 upsert입니다.
//!   같은 신원으로 여러 번 호출해도 문서는 최대 한 번만 삽입됩니다.

use async_trait::async_trait;

use crate::domain::entities::users::user::User;
use crate::errors::AppError;

/// upsert 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Upserted {
    pub user: User,
    /// 이번 호출에서 새로 삽입되었는지
    pub created: bool,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_identity(&self, provider: &str, uid: &str) -> Result<Option<User>, AppError>;

    /// 재설정 토큰 다이제스트로 조회
    async fn find_by_reset_token(&self, digest: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자 삽입 (ID 할당)
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// `(provider, uid)`가 같은 사용자가 있으면 반환, 없으면 `user`를 삽입
    async fn find_or_create_by_identity(&self, user: User) -> Result<Upserted, AppError>;

    /// 이메일이 같은 사용자가 있으면 반환, 없으면 `user`를 삽입
    async fn find_or_create_by_email(&self, user: User) -> Result<Upserted, AppError>;

    /// ID 기준 전체 교체. 대상이 없으면 `AppError::NotFound`
    async fn update(&self, user: &User) -> Result<User, AppError>;

    async fn count(&self) -> Result<u64, AppError>;
}
