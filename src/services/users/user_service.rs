//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 비밀번호 인증, SSO 사용자 프로비저닝, remember-me 기록을 담당합니다.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        UserService                        │
//! ├───────────────────────────────────────────────────────────┤
//! │ register        UserDraft 검증 → 중복 검사 → 해싱 → 저장    │
//! │ authenticate    이메일 조회 → bcrypt 검증                  │
//! │ from_omniauth   (provider, uid) 멱등 upsert               │
//! │ ensure_user     이메일 기준 멱등 생성 (시드)                │
//! │ remember/forget remember_created_at 기록                   │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                    Arc<dyn UserStore>
//! ```
//!
//! ## 에러
//!
//! - 필드 검증 실패는 `AppError::InvalidRecord` (예: `email` → "has already been taken")
//! - 로그인 실패는 계정 존재 여부를 드러내지 않도록 항상
//!   `AppError::AuthenticationError("Invalid Email or password.")`

use std::sync::Arc;

use mongodb::bson::DateTime;

use crate::{
    domain::{
        entities::users::{user::User, user_draft::UserDraft},
        models::auth::external_identity::ExternalIdentity,
    },
    errors::{AppError, FieldErrors},
    repositories::users::user_store::{Upserted, UserStore},
    services::users::password_hasher::PasswordHasher,
    utils::string_utils::{blank_to_none, is_blank},
};

/// 로그인 실패 메시지
pub const INVALID_LOGIN: &str = "Invalid Email or password.";

const EMAIL_TAKEN: &str = "has already been taken";

pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    pub fn store(&self) -> &Arc<dyn UserStore> {
        &self.store
    }

    /// 회원가입
    ///
    /// 모든 필드 에러를 한 번에 모아 `InvalidRecord`로 반환합니다.
    /// 이메일 형식이 올바를 때만 중복 여부를 조회합니다.
    pub async fn register(&self, draft: UserDraft) -> Result<User, AppError> {
        let errors = self.validate_draft(&draft).await?;
        if !errors.is_empty() {
            return Err(AppError::InvalidRecord(errors));
        }

        let encrypted_password = self.hasher.hash(&draft.password)?;
        let user = User::new_local(
            draft.normalized_email(),
            encrypted_password,
            blank_to_none(draft.name.clone()),
        );

        match self.store.create(user).await {
            Ok(created) => {
                log::info!("새 사용자 등록: {}", created.email);
                Ok(created)
            }
            // 검사와 저장 사이에 같은 이메일이 먼저 저장된 경우
            Err(AppError::ConflictError(_)) => Err(AppError::invalid_field("email", EMAIL_TAKEN)),
            Err(e) => Err(e),
        }
    }

    async fn validate_draft(&self, draft: &UserDraft) -> Result<FieldErrors, AppError> {
        let mut errors = match draft.validate_record() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => errors,
        };

        if errors.get("email").is_empty()
            && self.store.find_by_email(&draft.email).await?.is_some()
        {
            errors.add("email", EMAIL_TAKEN);
        }

        Ok(errors)
    }

    /// 이메일/비밀번호 인증
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        if is_blank(email) || password.is_empty() {
            return Err(AppError::AuthenticationError(INVALID_LOGIN.to_string()));
        }

        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_LOGIN.to_string()))?;

        let start = std::time::Instant::now();
        let is_valid = self.hasher.verify(password, &user.encrypted_password);
        log::debug!("Password verification took: {:?}", start.elapsed());

        if !is_valid {
            log::info!("로그인 실패: {}", user.email);
            return Err(AppError::AuthenticationError(INVALID_LOGIN.to_string()));
        }

        Ok(user)
    }

    /// SSO 신원으로 사용자를 찾거나 생성합니다.
    ///
    /// `(provider, uid)`가 이미 있으면 그 사용자를 그대로 반환하고,
    /// 없으면 이메일과 이름을 복사하고 임의 비밀번호를 부여해 생성합니다.
    /// 몇 번을 호출해도 같은 신원으로는 사용자가 한 번만 생성됩니다.
    pub async fn from_omniauth(&self, identity: &ExternalIdentity) -> Result<User, AppError> {
        if !identity.is_complete() {
            return Err(AppError::ValidationError(
                "provider와 uid가 필요합니다".to_string(),
            ));
        }

        if let Some(user) = self.store.find_by_identity(&identity.provider, &identity.uid).await? {
            return Ok(user);
        }

        if is_blank(&identity.email) {
            return Err(AppError::invalid_field("email", "can't be blank"));
        }

        let encrypted_password = self.hasher.hash(&PasswordHasher::random_password())?;
        let candidate = User::new_sso(identity, encrypted_password);

        let Upserted { user, created } = match self.store.find_or_create_by_identity(candidate).await {
            Ok(upserted) => upserted,
            Err(AppError::ConflictError(_)) => {
                log::warn!(
                    "SSO 신원 {}:{}의 이메일 {}이(가) 다른 계정에서 사용 중",
                    identity.provider,
                    identity.uid,
                    identity.normalized_email()
                );
                return Err(AppError::invalid_field("email", EMAIL_TAKEN));
            }
            Err(e) => return Err(e),
        };

        if created {
            log::info!("새 SSO 사용자 등록: {} ({})", user.email, identity.provider);
        }

        Ok(user)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.store.find_by_id(id).await
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        self.store.count().await
    }

    /// 이메일 기준으로 사용자가 없을 때만 생성합니다 (시드 스크립트용).
    pub async fn ensure_user(&self, draft: UserDraft) -> Result<Upserted, AppError> {
        draft.validate_record().map_err(AppError::InvalidRecord)?;

        if let Some(existing) = self.store.find_by_email(&draft.email).await? {
            return Ok(Upserted { user: existing, created: false });
        }

        let encrypted_password = self.hasher.hash(&draft.password)?;
        let user = User::new_local(
            draft.normalized_email(),
            encrypted_password,
            blank_to_none(draft.name.clone()),
        );

        self.store.find_or_create_by_email(user).await
    }

    /// "Remember me" 기록
    ///
    /// 기존 기록이 아직 유효하면 그대로 두고, 없거나 만료되었으면 새로 기록합니다.
    pub async fn remember(&self, user: &User, remember_for: chrono::Duration) -> Result<User, AppError> {
        if !user.remember_expired(remember_for) {
            return Ok(user.clone());
        }

        let mut updated = user.clone();
        updated.remember_created_at = Some(DateTime::now());
        self.store.update(&updated).await
    }

    /// 로그아웃 시 remember-me 기록 제거
    pub async fn forget(&self, user: &User) -> Result<User, AppError> {
        if user.remember_created_at.is_none() {
            return Ok(user.clone());
        }

        let mut updated = user.clone();
        updated.remember_created_at = None;
        self.store.update(&updated).await
    }
}
