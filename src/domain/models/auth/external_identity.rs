//! 외부 인증 프로바이더가 확인해 준 사용자 신원
//!
//! OAuth 콜백에서 얻은 프로필을 프로바이더와 무관한 형태로 표현합니다.
//! `UserService::from_omniauth`의 입력입니다.

use serde::{Deserialize, Serialize};

use crate::utils::string_utils::normalize_email;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    /// 프로바이더 이름 (예: `entra_id`)
    pub provider: String,
    /// 프로바이더 내 고유 식별자
    pub uid: String,
    pub email: String,
    pub name: Option<String>,
}

impl ExternalIdentity {
    pub fn new(
        provider: impl Into<String>,
        uid: impl Into<String>,
        email: impl Into<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            uid: uid.into(),
            email: email.into(),
            name,
        }
    }

    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }

    /// 프로바이더와 uid가 모두 채워져 있는지
    pub fn is_complete(&self) -> bool {
        !self.provider.trim().is_empty() && !self.uid.trim().is_empty()
    }
}
