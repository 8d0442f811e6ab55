//! 루트 페이지

use crate::domain::entities::users::user::User;
use crate::middlewares::flash::Flash;
use crate::views::{escape_html, layout};

pub fn index(current_user: Option<&User>, flash: &Flash) -> String {
    let body = match current_user {
        Some(user) => format!(
            r#"        <h1>Welcome, {name}</h1>
        <p>You are signed in as <strong>{email}</strong>.</p>"#,
            name = escape_html(user.display_name()),
            email = escape_html(&user.email),
        ),
        None => r#"        <h1>Welcome</h1>
        <p>Please <a href="/users/sign_in">Sign in</a> or <a href="/users/sign_up">Create an account</a> to continue.</p>"#
            .to_string(),
    };

    let content = format!(
        r#"{body}
        <div data-controller="hello"></div>
        <script src="/assets/hello_controller.js" defer></script>"#,
        body = body,
    );

    layout("Welcome", current_user, flash, &content)
}
