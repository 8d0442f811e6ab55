//! 비밀번호 재설정
//!
//! ```text
//! POST /users/password          send_reset_instructions(email)
//!   └─ 토큰 생성 → 다이제스트 저장 → 메일 (원본 토큰이 담긴 링크)
//! GET  /users/password/edit?reset_password_token=...
//! PUT  /users/password          reset_password(token, password, confirmation)
//!   └─ 다이제스트 조회 → 기간 검사 → 비밀번호 검증 → 해시 교체, 토큰 제거
//! ```
//!
//! 원본 토큰은 DB에 저장하지 않으므로 DB가 유출되어도 재설정 링크를 만들 수 없습니다.

use std::sync::Arc;

use mongodb::bson::DateTime;

use crate::{
    config::RecoveryConfig,
    domain::entities::users::{user::User, user_draft::UserDraft},
    errors::{AppError, FieldErrors},
    repositories::users::user_store::UserStore,
    services::{
        mail::mailer::{MailMessage, Mailer},
        users::password_hasher::PasswordHasher,
    },
    utils::{
        string_utils::is_blank,
        token::{FRIENDLY_TOKEN_LENGTH, friendly_token, token_digest},
    },
};

pub const RESET_SUBJECT: &str = "Reset password instructions";

const TOKEN_FIELD: &str = "reset_password_token";

pub struct PasswordRecoveryService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    mailer: Arc<dyn Mailer>,
    config: RecoveryConfig,
}

impl PasswordRecoveryService {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        mailer: Arc<dyn Mailer>,
        config: RecoveryConfig,
    ) -> Self {
        Self { store, hasher, mailer, config }
    }

    /// 재설정 링크 (`{base_url}/users/password/edit?reset_password_token=...`)
    pub fn edit_url(&self, raw_token: &str) -> String {
        format!(
            "{}/users/password/edit?reset_password_token={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(raw_token)
        )
    }

    /// 재설정 안내 메일을 보냅니다.
    ///
    /// 등록되지 않은 이메일이면 `email` 필드에 "not found" 에러를 반환하며 메일은 보내지 않습니다.
    pub async fn send_reset_instructions(&self, email: &str) -> Result<User, AppError> {
        if is_blank(email) {
            return Err(AppError::invalid_field("email", "can't be blank"));
        }

        let mut user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::invalid_field("email", "not found"))?;

        let raw_token = friendly_token(FRIENDLY_TOKEN_LENGTH);
        user.reset_password_token = Some(token_digest(&raw_token));
        user.reset_password_sent_at = Some(DateTime::now());
        let user = self.store.update(&user).await?;

        let message = MailMessage {
            from: self.config.mailer_sender.clone(),
            to: user.email.clone(),
            subject: RESET_SUBJECT.to_string(),
            body: self.reset_body(&user, &raw_token),
        };
        self.mailer.deliver(message).await?;

        log::info!("비밀번호 재설정 메일 발송: {}", user.email);
        Ok(user)
    }

    fn reset_body(&self, user: &User, raw_token: &str) -> String {
        format!(
            "Hello {}!\n\n\
             Someone has requested a link to change your password. You can do this through the link below.\n\n\
             {}\n\n\
             If you didn't request this, please ignore this email.\n\
             Your password won't change until you access the link above and create a new one.\n",
            user.email,
            self.edit_url(raw_token)
        )
    }

    /// 토큰을 확인하고 비밀번호를 교체합니다.
    ///
    /// 성공하면 토큰이 제거된 사용자를 반환합니다. 같은 토큰은 다시 쓸 수 없습니다.
    /// 확인 값이 `None`이면 일치 검사를 하지 않습니다.
    pub async fn reset_password(
        &self,
        raw_token: &str,
        password: &str,
        password_confirmation: Option<&str>,
    ) -> Result<User, AppError> {
        let mut user = self.user_for_token(raw_token).await?;

        let mut draft = UserDraft::new(user.email.clone(), password);
        draft.password_confirmation = password_confirmation.map(str::to_string);
        if let Err(errors) = draft.validate_record() {
            let mut password_errors = FieldErrors::new();
            for field in ["password", "password_confirmation"] {
                for message in errors.get(field) {
                    password_errors.add(field, message);
                }
            }
            if !password_errors.is_empty() {
                return Err(AppError::InvalidRecord(password_errors));
            }
        }

        user.encrypted_password = self.hasher.hash(password)?;
        user.reset_password_token = None;
        user.reset_password_sent_at = None;

        let user = self.store.update(&user).await?;
        log::info!("비밀번호 재설정 완료: {}", user.email);
        Ok(user)
    }

    /// 유효한 토큰의 사용자 (재설정 폼 표시 전 확인용)
    pub async fn user_for_token(&self, raw_token: &str) -> Result<User, AppError> {
        if is_blank(raw_token) {
            return Err(AppError::invalid_field(TOKEN_FIELD, "can't be blank"));
        }

        let user = self
            .store
            .find_by_reset_token(&token_digest(raw_token.trim()))
            .await?
            .ok_or_else(|| AppError::invalid_field(TOKEN_FIELD, "is invalid"))?;

        if !user.reset_password_period_valid(self.config.reset_password_within) {
            return Err(AppError::invalid_field(
                TOKEN_FIELD,
                "has expired, please request a new one",
            ));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::memory_repo::MemoryUserRepository;
    use crate::services::mail::mailer::MemoryMailer;

    struct Fixture {
        service: PasswordRecoveryService,
        store: Arc<MemoryUserRepository>,
        mailer: Arc<MemoryMailer>,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(MemoryUserRepository::new());
        let mailer = Arc::new(MemoryMailer::new());
        let hasher = PasswordHasher::new(4);

        let user = User::new_local(
            "forgot@example.com".to_string(),
            hasher.hash("old-password").unwrap(),
            None,
        );
        store.create(user).await.unwrap();

        let service = PasswordRecoveryService::new(
            store.clone(),
            hasher,
            mailer.clone(),
            RecoveryConfig::new("http://localhost:8080/"),
        );

        Fixture { service, store, mailer }
    }

    fn token_from(body: &str) -> String {
        body.split("reset_password_token=")
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .unwrap()
            .to_string()
    }

    #[actix_web::test]
    async fn test_send_reset_instructions_mails_link_and_stores_digest() {
        let f = fixture().await;

        f.service.send_reset_instructions("Forgot@Example.com").await.unwrap();

        assert_eq!(f.mailer.count(), 1);
        let mail = f.mailer.last().unwrap();
        assert_eq!(mail.to, "forgot@example.com");
        assert_eq!(mail.subject, RESET_SUBJECT);
        assert!(mail.body.contains("http://localhost:8080/users/password/edit?reset_password_token="));

        let raw = token_from(&mail.body);
        let stored = f.store.find_by_email("forgot@example.com").await.unwrap().unwrap();
        assert_eq!(stored.reset_password_token, Some(token_digest(&raw)));
        assert_ne!(stored.reset_password_token.as_deref(), Some(raw.as_str()));
    }

    #[actix_web::test]
    async fn test_unknown_email_is_not_found_and_sends_nothing() {
        let f = fixture().await;

        let err = f.service.send_reset_instructions("nobody@example.com").await.unwrap_err();

        let errors = err.field_errors().unwrap();
        assert_eq!(errors.full_messages(), vec!["Email not found".to_string()]);
        assert_eq!(f.mailer.count(), 0);
    }

    #[actix_web::test]
    async fn test_reset_password_with_valid_token() {
        let f = fixture().await;
        f.service.send_reset_instructions("forgot@example.com").await.unwrap();
        let raw = token_from(&f.mailer.last().unwrap().body);

        let user = f.service.reset_password(&raw, "new-password", Some("new-password")).await.unwrap();

        assert!(user.valid_password("new-password"));
        assert!(user.reset_password_token.is_none());

        let reused = f.service.reset_password(&raw, "another-password", Some("another-password")).await;
        assert!(reused.unwrap_err().field_errors().unwrap().contains(TOKEN_FIELD, "is invalid"));
    }

    #[actix_web::test]
    async fn test_reset_password_without_confirmation() {
        let f = fixture().await;
        f.service.send_reset_instructions("forgot@example.com").await.unwrap();
        let raw = token_from(&f.mailer.last().unwrap().body);

        let user = f.service.reset_password(&raw, "new-password", None).await.unwrap();

        assert!(user.valid_password("new-password"));
    }

    #[actix_web::test]
    async fn test_reset_password_rejects_short_or_mismatched_password() {
        let f = fixture().await;
        f.service.send_reset_instructions("forgot@example.com").await.unwrap();
        let raw = token_from(&f.mailer.last().unwrap().body);

        let err = f.service.reset_password(&raw, "short", Some("other")).await.unwrap_err();
        let errors = err.field_errors().unwrap();

        assert!(errors.contains("password", "is too short (minimum is 6 characters)"));
        assert!(errors.contains("password_confirmation", "doesn't match Password"));

        // 실패한 시도는 토큰을 소모하지 않음
        assert!(f.service.user_for_token(&raw).await.is_ok());
    }

    #[actix_web::test]
    async fn test_expired_token() {
        let f = fixture().await;
        f.service.send_reset_instructions("forgot@example.com").await.unwrap();
        let raw = token_from(&f.mailer.last().unwrap().body);

        let mut user = f.store.find_by_email("forgot@example.com").await.unwrap().unwrap();
        let seven_hours_ago = DateTime::now().timestamp_millis() - chrono::Duration::hours(7).num_milliseconds();
        user.reset_password_sent_at = Some(DateTime::from_millis(seven_hours_ago));
        f.store.update(&user).await.unwrap();

        let err = f.service.reset_password(&raw, "new-password", Some("new-password")).await.unwrap_err();

        assert!(err
            .field_errors()
            .unwrap()
            .contains(TOKEN_FIELD, "has expired, please request a new one"));
    }
}
