//! 로그인 폼 DTO

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInForm {
    #[serde(rename = "user[email]", default)]
    pub email: String,

    #[serde(rename = "user[password]", default)]
    pub password: String,

    /// 체크박스 값 ("1" / "on" / "true")
    #[serde(rename = "user[remember_me]", default)]
    pub remember_me: Option<String>,
}

impl SignInForm {
    pub fn remember(&self) -> bool {
        matches!(
            self.remember_me.as_deref().map(str::trim),
            Some("1") | Some("on") | Some("true")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[test]
    fn test_remember_me_checkbox() {
        let form = Query::<SignInForm>::from_query(
            "user%5Bemail%5D=a%40b.c&user%5Bpassword%5D=x&user%5Bremember_me%5D=1",
        )
        .unwrap()
        .into_inner();
        assert!(form.remember());

        let form = Query::<SignInForm>::from_query("user%5Bemail%5D=a%40b.c")
            .unwrap()
            .into_inner();
        assert!(!form.remember());
        assert_eq!(form.password, "");
    }
}
