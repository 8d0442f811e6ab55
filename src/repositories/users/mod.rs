//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`](user_store::UserStore) 트레이트와 두 가지 구현을 제공합니다.
//!
//! - [`UserRepository`](user_repo::UserRepository) - MongoDB `users` 컬렉션
//! - [`MemoryUserRepository`](memory_repo::MemoryUserRepository) - 프로세스 메모리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let user_repo = UserRepository::new(database.clone());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod memory_repo;
pub mod user_repo;
pub mod user_store;

pub use memory_repo::MemoryUserRepository;
pub use user_repo::UserRepository;
pub use user_store::{Upserted, UserStore};
