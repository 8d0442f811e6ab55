//! 비밀번호 찾기 / 재설정 화면

use crate::errors::FieldErrors;
use crate::middlewares::flash::Flash;
use crate::views::{error_messages, escape_html, input, layout};

/// 재설정 안내 메일 요청 폼
pub fn new(email: &str, errors: Option<&FieldErrors>, flash: &Flash) -> String {
    let content = format!(
        r#"        <h1>Forgot your password?</h1>
{errors}
        <form action="/users/password" method="post">
{email}
            <button type="submit">Send reset instructions</button>
        </form>
        <p><a href="/users/sign_in">Back to sign in</a></p>"#,
        errors = error_messages(errors),
        email = input("email", "Email", "email", email, "email"),
    );

    layout("Forgot your password?", None, flash, &content)
}

/// 새 비밀번호 입력 폼
pub fn edit(reset_password_token: &str, errors: Option<&FieldErrors>, flash: &Flash) -> String {
    let content = format!(
        r#"        <h1>Change your password</h1>
{errors}
        <form action="/users/password" method="post">
            <input type="hidden" name="_method" value="put">
            <input type="hidden" name="user[reset_password_token]" value="{token}">
{password}
            <p><em>6 characters minimum</em></p>
{confirmation}
            <button type="submit">Change my password</button>
        </form>
        <p><a href="/users/sign_in">Back to sign in</a></p>"#,
        errors = error_messages(errors),
        token = escape_html(reset_password_token),
        password = input("password", "New password", "password", "", "new-password"),
        confirmation = input(
            "password_confirmation",
            "Confirm new password",
            "password",
            "",
            "new-password"
        ),
    );

    layout("Change your password", None, flash, &content)
}
