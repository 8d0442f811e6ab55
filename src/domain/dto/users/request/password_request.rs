//! 비밀번호 복구 폼 DTO
//!
//! `/users/password`는 HTML 폼의 한계 때문에 POST 하나로 재설정 요청과
//! 비밀번호 변경을 모두 받습니다. `_method=put|patch`가 있으면 변경 요청입니다.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PasswordForm {
    #[serde(rename = "_method", default)]
    pub method: Option<String>,

    #[serde(rename = "user[email]", default)]
    pub email: String,

    #[serde(rename = "user[reset_password_token]", default)]
    pub reset_password_token: String,

    #[serde(rename = "user[password]", default)]
    pub password: String,

    #[serde(rename = "user[password_confirmation]", default)]
    pub password_confirmation: Option<String>,
}

impl PasswordForm {
    /// 비밀번호 변경(PUT/PATCH) 요청인지
    pub fn is_update(&self) -> bool {
        matches!(
            self.method.as_deref().map(|m| m.trim().to_lowercase()).as_deref(),
            Some("put") | Some("patch")
        )
    }
}

/// `/users/password/edit?reset_password_token=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditPasswordQuery {
    #[serde(default)]
    pub reset_password_token: String,
}
