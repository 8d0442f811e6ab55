//! # Configuration Module
//!
//! 계정 포털의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 비밀번호 정책, 서버, 저장소, Rate Limiting
//! - [`auth_config`] - 세션 쿠키, 비밀번호 복구, Entra ID SSO
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use account_portal::config::{Environment, ServerConfig, SessionConfig};
//!
//! let env = Environment::current();
//! let bind = ServerConfig::bind_address();
//! let session = SessionConfig::from_env();
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
