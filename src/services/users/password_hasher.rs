//! bcrypt 비밀번호 해싱
//!
//! cost는 환경별로 다릅니다 ([`PasswordConfig::bcrypt_cost`]).
//! 테스트에서는 `PasswordHasher::new(4)`로 빠르게 해싱합니다.

use crate::config::PasswordConfig;
use crate::errors::{AppResult, ErrorContext};
use crate::utils::token::{FRIENDLY_TOKEN_LENGTH, friendly_token};

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        let start = std::time::Instant::now();

        let hashed = bcrypt::hash(password, self.cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    /// 해시 형식이 잘못된 경우에도 `false`를 반환합니다.
    pub fn verify(&self, password: &str, hashed: &str) -> bool {
        bcrypt::verify(password, hashed).unwrap_or(false)
    }

    /// SSO로 생성되는 사용자에게 부여하는 임의 비밀번호
    pub fn random_password() -> String {
        friendly_token(FRIENDLY_TOKEN_LENGTH)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::from_env()
    }
}
