//! 사용자 엔티티
//!
//! MongoDB `users` 컬렉션의 문서 구조입니다. 로컬 가입 사용자와
//! SSO(Entra ID) 사용자가 같은 컬렉션에 저장되며, SSO 사용자는
//! `(provider, uid)` 쌍으로 식별됩니다.

use chrono::Duration;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::models::auth::external_identity::ExternalIdentity;

/// 사용자 문서
///
/// `encrypted_password`는 항상 bcrypt 해시입니다. SSO 사용자는 이 경로로
/// 로그인하지 않지만, 무작위 비밀번호의 해시가 채워져 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 정규화된(소문자) 이메일
    pub email: String,

    pub encrypted_password: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// 외부 인증 프로바이더 이름 (예: `entra_id`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// 프로바이더가 부여한 사용자 식별자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// 재설정 토큰의 SHA-256 다이제스트
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_password_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_password_sent_at: Option<DateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_created_at: Option<DateTime>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 회원가입으로 생성되는 로컬 사용자
    pub fn new_local(email: String, encrypted_password: String, name: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            encrypted_password,
            name,
            provider: None,
            uid: None,
            reset_password_token: None,
            reset_password_sent_at: None,
            remember_created_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 첫 SSO 로그인으로 생성되는 사용자
    pub fn new_sso(identity: &ExternalIdentity, encrypted_password: String) -> Self {
        let mut user = Self::new_local(
            identity.normalized_email(),
            encrypted_password,
            identity.name.clone(),
        );
        user.provider = Some(identity.provider.clone());
        user.uid = Some(identity.uid.clone());
        user
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 화면 표시용 이름 (이름이 없으면 이메일)
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    pub fn is_sso_user(&self) -> bool {
        self.provider.is_some() && self.uid.is_some()
    }

    /// 평문 비밀번호가 저장된 bcrypt 해시와 일치하는지
    pub fn valid_password(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.encrypted_password).unwrap_or(false)
    }

    pub fn has_identity(&self, provider: &str, uid: &str) -> bool {
        self.provider.as_deref() == Some(provider) && self.uid.as_deref() == Some(uid)
    }

    /// 재설정 토큰이 아직 유효 기간 안에 있는지
    pub fn reset_password_period_valid(&self, within: Duration) -> bool {
        match self.reset_password_sent_at {
            Some(sent_at) => {
                let elapsed = DateTime::now().timestamp_millis() - sent_at.timestamp_millis();
                elapsed <= within.num_milliseconds()
            }
            None => false,
        }
    }

    /// remember-me 기록이 만료되었는지
    pub fn remember_expired(&self, remember_for: Duration) -> bool {
        match self.remember_created_at {
            Some(created) => {
                let elapsed = DateTime::now().timestamp_millis() - created.timestamp_millis();
                elapsed > remember_for.num_milliseconds()
            }
            None => true,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
