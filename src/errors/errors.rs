//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. HTML 폼을 다시 렌더링해야 하는 경우
//! (회원가입 실패, 로그인 실패 등)는 핸들러가 직접 처리하며,
//! 여기서 만들어지는 JSON 응답은 그 외 경로의 기본 응답입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use account_portal::errors::AppError;
//!
//! async fn load(store: &dyn UserStore, id: &str) -> Result<User, AppError> {
//!     store.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

use thiserror::Error;

use crate::errors::field_errors::FieldErrors;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 레코드 검증 실패 (필드별 메시지 포함)
    #[error("Validation failed: {}", .0.full_messages().join(", "))]
    InvalidRecord(FieldErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict error: {0}")]
    ConflictError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 단일 필드 검증 실패를 생성합니다.
    pub fn invalid_field(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        AppError::InvalidRecord(errors)
    }

    /// 필드별 에러 목록 (검증 실패가 아니면 `None`)
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::InvalidRecord(errors) => Some(errors),
            _ => None,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRecord(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        // 내부 에러 상세는 로그에만 남김
        let message = match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("{}", self);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let mut body = serde_json::json!({ "error": message });
        if let AppError::InvalidRecord(errors) = self {
            body["errors"] = serde_json::to_value(errors.as_map()).unwrap_or_default();
        }

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// `Result`에 문맥 메시지를 붙여 `AppError::InternalError`로 변환하는 헬퍼
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::ValidationError("provider와 uid가 필요합니다".into()), StatusCode::BAD_REQUEST),
            (AppError::invalid_field("email", "can't be blank"), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::AuthenticationError("Invalid Email or password.".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::NotFound("user".into()), StatusCode::NOT_FOUND),
            (AppError::ConflictError("Email has already been taken".into()), StatusCode::CONFLICT),
            (AppError::ExternalServiceError("Entra ID".into()), StatusCode::BAD_GATEWAY),
            (AppError::DatabaseError("connection reset".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.error_response().status(), status, "{}", error);
        }
    }

    #[test]
    fn test_invalid_record_message() {
        let error = AppError::invalid_field("email", "can't be blank");

        assert_eq!(error.to_string(), "Validation failed: Email can't be blank");
        assert!(error.field_errors().unwrap().contains("email", "can't be blank"));
        assert!(AppError::NotFound("user".into()).field_errors().is_none());
    }

    #[test]
    fn test_context_wraps_as_internal_error() {
        let result: Result<(), &str> = Err("invalid cost");

        match result.context("비밀번호 해싱 실패") {
            Err(AppError::InternalError(msg)) => assert_eq!(msg, "비밀번호 해싱 실패: invalid cost"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
