//! 서버 렌더링 HTML 템플릿
//!
//! 각 페이지는 `String`을 반환하는 함수이며, 사용자 입력이 들어가는 자리는
//! 모두 [`escape_html`]을 거칩니다.

pub mod home;
pub mod passwords;
pub mod registrations;
pub mod sessions;

use crate::domain::entities::users::user::User;
use crate::errors::FieldErrors;
use crate::middlewares::flash::Flash;

/// `&`, `<`, `>`, `"`, `'` 이스케이프
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// 공통 레이아웃
pub fn layout(title: &str, current_user: Option<&User>, flash: &Flash, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Account Portal</title>
    <style>
        body {{ font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; color: #1f2937; }}
        nav {{ display: flex; gap: 1rem; align-items: center; justify-content: space-between; margin-bottom: 2rem; }}
        .notice {{ background: #ecfdf5; color: #065f46; padding: .75rem; border-radius: .375rem; }}
        .alert {{ background: #fef2f2; color: #991b1b; padding: .75rem; border-radius: .375rem; }}
        .field {{ margin-bottom: 1rem; }}
        .field label {{ display: block; font-weight: 600; margin-bottom: .25rem; }}
        .field input[type=email], .field input[type=password], .field input[type=text] {{ width: 100%; padding: .5rem; }}
        #error_explanation {{ border: 1px solid #fca5a5; padding: .75rem; margin-bottom: 1rem; }}
    </style>
</head>
<body>
    {nav}
    {flash}
    <main>
{content}
    </main>
</body>
</html>"##,
        title = escape_html(title),
        nav = nav(current_user),
        flash = flash_messages(flash),
        content = content,
    )
}

fn nav(current_user: Option<&User>) -> String {
    match current_user {
        Some(user) => format!(
            r#"<nav>
        <a href="/">Account Portal</a>
        <span>
            <span class="current-user">{email}</span>
            <form action="/users/sign_out" method="post" style="display:inline">
                <input type="hidden" name="_method" value="delete">
                <button type="submit">Sign out</button>
            </form>
        </span>
    </nav>"#,
            email = escape_html(&user.email),
        ),
        None => r#"<nav>
        <a href="/">Account Portal</a>
        <span>
            <a href="/users/sign_in">Sign in</a>
            <a href="/users/sign_up">Create an account</a>
        </span>
    </nav>"#
            .to_string(),
    }
}

fn flash_messages(flash: &Flash) -> String {
    let mut html = String::new();
    if let Some(notice) = &flash.notice {
        html.push_str(&format!(r#"<p class="notice">{}</p>"#, escape_html(notice)));
    }
    if let Some(alert) = &flash.alert {
        html.push_str(&format!(r#"<p class="alert">{}</p>"#, escape_html(alert)));
    }
    html
}

/// "2 errors prohibited this user from being saved:" 목록
pub fn error_messages(errors: Option<&FieldErrors>) -> String {
    let Some(errors) = errors.filter(|e| !e.is_empty()) else {
        return String::new();
    };

    let messages = errors.full_messages();
    let count = messages.len();
    let items = messages
        .iter()
        .map(|m| format!("            <li>{}</li>", escape_html(m)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"        <div id="error_explanation">
            <h2>{count} {noun} prohibited this user from being saved:</h2>
            <ul>
{items}
            </ul>
        </div>"#,
        count = count,
        noun = if count == 1 { "error" } else { "errors" },
        items = items,
    )
}

/// 라벨이 있는 입력 필드
pub fn input(name: &str, label: &str, input_type: &str, value: &str, autocomplete: &str) -> String {
    let id = format!("user_{}", name);
    format!(
        r#"        <div class="field">
            <label for="{id}">{label}</label>
            <input type="{input_type}" id="{id}" name="user[{name}]" value="{value}" autocomplete="{autocomplete}">
        </div>"#,
        id = id,
        label = label,
        input_type = input_type,
        name = name,
        value = escape_html(value),
        autocomplete = autocomplete,
    )
}
