//! 회원가입 화면

use crate::errors::FieldErrors;
use crate::middlewares::flash::Flash;
use crate::views::{error_messages, input, layout};

pub fn new(name: &str, email: &str, errors: Option<&FieldErrors>, flash: &Flash) -> String {
    let content = format!(
        r#"        <h1>Create your account</h1>
{errors}
        <form action="/users" method="post">
{name}
{email}
{password}
            <p><em>6 characters minimum</em></p>
{confirmation}
            <button type="submit">Sign up</button>
        </form>
        <p>Already have an account? <a href="/users/sign_in">Sign in</a></p>"#,
        errors = error_messages(errors),
        name = input("name", "Name", "text", name, "name"),
        email = input("email", "Email", "email", email, "email"),
        password = input("password", "Password", "password", "", "new-password"),
        confirmation = input(
            "password_confirmation",
            "Password confirmation",
            "password",
            "",
            "new-password"
        ),
    );

    layout("Sign up", None, flash, &content)
}
