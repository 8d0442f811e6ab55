//! 데이터 전송 객체 (폼, 쿼리 파라미터)

pub mod users;

pub use users::*;
