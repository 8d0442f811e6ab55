//! 도메인 계층
//!
//! ```text
//! entities  ← MongoDB 문서 (User) 와 검증 규칙 (UserDraft)
//! dto       ← HTML 폼 / 쿼리 파라미터
//! models    ← 인증 모델, OAuth 프로바이더 페이로드
//! ```

pub mod entities;
pub mod dto;
pub mod models;

