//! 저장 전 사용자 속성과 검증 규칙
//!
//! 회원가입 폼, 시드 스크립트, 테스트 팩토리가 모두 `UserDraft`를 거쳐
//! 같은 규칙으로 검증됩니다.
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | email | 필수 | can't be blank |
//! | email | `^[^@\s]+@[^@\s]+$` (값이 있을 때만) | is invalid |
//! | password | 필수 | can't be blank |
//! | password | 6자 이상 | is too short (minimum is 6 characters) |
//! | password | 128자 이하 | is too long (maximum is 128 characters) |
//! | password_confirmation | 입력된 경우 password와 일치 | doesn't match Password |
//!
//! 이메일 중복("has already been taken")은 저장소 조회가 필요하므로
//! `UserService`에서 검사합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError};

use crate::config::PasswordConfig;
use crate::errors::FieldErrors;
use crate::utils::string_utils::{is_blank, normalize_email};

static EMAIL_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email format regex"));

#[derive(Debug, Clone, Default, Validate)]
pub struct UserDraft {
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_password"))]
    #[validate(length(max = 128, message = "is too long (maximum is 128 characters)"))]
    pub password: String,

    /// `None`이면 확인 검사를 건너뜀
    pub password_confirmation: Option<String>,

    pub name: Option<String>,
}

impl UserDraft {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.password_confirmation = Some(confirmation.into());
        self
    }

    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }

    /// 모든 필드 규칙을 검사하고 필드별 메시지를 반환합니다.
    pub fn validate_record(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        if let Some(confirmation) = &self.password_confirmation {
            if confirmation != &self.password {
                errors.add("password_confirmation", "doesn't match Password");
            }
        }

        errors.into_result()
    }

    pub fn is_valid(&self) -> bool {
        self.validate_record().is_ok()
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_blank(email) {
        return Err(ValidationError::new("blank").with_message("can't be blank".into()));
    }

    if !EMAIL_FORMAT.is_match(email.trim()) {
        return Err(ValidationError::new("invalid").with_message("is invalid".into()));
    }

    Ok(())
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if is_blank(password) {
        return Err(ValidationError::new("blank").with_message("can't be blank".into()));
    }

    if password.chars().count() < PasswordConfig::MIN_LENGTH {
        return Err(ValidationError::new("too_short").with_message(
            format!(
                "is too short (minimum is {} characters)",
                PasswordConfig::MIN_LENGTH
            )
            .into(),
        ));
    }

    Ok(())
}
