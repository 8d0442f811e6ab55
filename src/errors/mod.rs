//! 에러 타입 모듈
//!
//! - [`errors`] - `AppError`, `AppResult`, `ErrorContext`
//! - [`field_errors`] - 폼 검증용 필드별 메시지

pub mod errors;
pub mod field_errors;

pub use errors::{AppError, AppResult, ErrorContext};
pub use field_errors::FieldErrors;
