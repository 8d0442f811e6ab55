//! 회원가입 폼 DTO
//!
//! 필드 이름은 `user[email]` 형식을 사용합니다.

use serde::Deserialize;

use crate::domain::entities::users::user_draft::UserDraft;
use crate::utils::string_utils::deserialize_blank_as_none;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(rename = "user[name]", default, deserialize_with = "deserialize_blank_as_none")]
    pub name: Option<String>,

    #[serde(rename = "user[email]", default)]
    pub email: String,

    #[serde(rename = "user[password]", default)]
    pub password: String,

    /// 필드가 없으면 `None`이고 일치 검사를 건너뜁니다.
    #[serde(rename = "user[password_confirmation]", default)]
    pub password_confirmation: Option<String>,
}

impl RegistrationForm {
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            email: self.email.clone(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_form_from_urlencoded() {
        let body = "user%5Bname%5D=Test+User&user%5Bemail%5D=newuser%40example.com\
                    &user%5Bpassword%5D=password123&user%5Bpassword_confirmation%5D=password123";
        let form: RegistrationForm = parse_form(body);

        assert_eq!(form.name.as_deref(), Some("Test User"));
        assert_eq!(form.email, "newuser@example.com");

        let draft = form.to_draft();
        assert_eq!(draft.password_confirmation.as_deref(), Some("password123"));
        assert!(draft.is_valid());
    }

    #[test]
    fn test_missing_confirmation_is_not_checked() {
        let form = parse_form("user%5Bemail%5D=solo%40example.com&user%5Bpassword%5D=password123");

        let draft = form.to_draft();
        assert_eq!(draft.password_confirmation, None);
        assert!(draft.is_valid());
    }

    #[test]
    fn test_blank_confirmation_still_compared() {
        let form = parse_form(
            "user%5Bemail%5D=solo%40example.com&user%5Bpassword%5D=password123&user%5Bpassword_confirmation%5D=",
        );

        assert_eq!(form.password_confirmation.as_deref(), Some(""));
        assert!(!form.to_draft().is_valid());
    }

    #[test]
    fn test_blank_name_becomes_none() {
        let form: RegistrationForm = parse_form("user%5Bname%5D=&user%5Bemail%5D=a%40b.c");

        assert_eq!(form.name, None);
    }

    fn parse_form(body: &str) -> RegistrationForm {
        actix_web::web::Query::<RegistrationForm>::from_query(body)
            .unwrap()
            .into_inner()
    }
}
