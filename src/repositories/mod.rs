//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 구체 타입 대신 `Arc<dyn UserStore>`에 의존하며,
//! 시작 시 `USER_STORE` 설정에 따라 MongoDB 또는 메모리 구현이 주입됩니다.

pub mod users;
