//! 로그인 화면

use crate::middlewares::flash::Flash;
use crate::views::{escape_html, input, layout};

pub struct SignInPage<'a> {
    pub email: &'a str,
    pub remember_me: bool,
    /// 인증 실패 메시지
    pub alert: Option<&'a str>,
    /// Entra ID SSO 버튼 표시 여부
    pub sso_enabled: bool,
}

pub fn new(page: &SignInPage<'_>, flash: &Flash) -> String {
    let alert = page
        .alert
        .map(|a| format!(r#"        <p class="alert">{}</p>"#, escape_html(a)))
        .unwrap_or_default();

    let sso = if page.sso_enabled {
        r#"        <form action="/users/auth/entra_id" method="post">
            <button type="submit">Sign in with Microsoft</button>
        </form>"#
    } else {
        ""
    };

    let content = format!(
        r#"        <h1>Sign in to your account</h1>
{alert}
        <form action="/users/sign_in" method="post">
{email}
{password}
            <div class="field">
                <input type="checkbox" id="user_remember_me" name="user[remember_me]" value="1"{checked}>
                <label for="user_remember_me">Remember me</label>
            </div>
            <button type="submit">Sign in</button>
        </form>
{sso}
        <p><a href="/users/sign_up">Create an account</a></p>
        <p><a href="/users/password/new">Forgot your password?</a></p>"#,
        alert = alert,
        email = input("email", "Email", "email", page.email, "email"),
        password = input("password", "Password", "password", "", "current-password"),
        checked = if page.remember_me { " checked" } else { "" },
        sso = sso,
    );

    layout("Sign in", None, flash, &content)
}
