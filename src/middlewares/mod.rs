//! 요청 파이프라인 미들웨어
//!
//! - [`SessionMiddleware`] - 암호화 쿠키 세션 로드, 게스트 전용 페이지 보호
//! - [`SessionManager`] - 세션/플래시/OAuth state 쿠키 발급과 해석
//! - [`Flash`] - 한 번만 표시되는 알림 메시지

pub mod flash;
pub mod session_inner;
pub mod session_manager;
pub mod session_middleware;

pub use flash::Flash;
pub use session_manager::SessionManager;
pub use session_middleware::{SessionMiddleware, SessionMode};
