//! 공용 유틸리티 모듈
//!
//! - [`format`] - 통화/말줄임/제목 대소문자 포맷
//! - [`string_utils`] - 폼 입력 정리, 이메일 정규화
//! - [`token`] - 무작위 토큰과 다이제스트

pub mod format;
pub mod string_utils;
pub mod token;
