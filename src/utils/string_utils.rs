//! 폼 입력 문자열 정리 유틸리티
//!
//! HTML 폼에서 넘어오는 값은 빈 문자열과 공백이 섞여 있으므로
//! 저장 전에 일관된 형태로 정리합니다.

use serde::Deserialize;

/// 이메일 정규화: 앞뒤 공백 제거 후 소문자 변환
///
/// 저장과 조회 모두 이 형태를 사용하므로 이메일 유일성은 대소문자를 구분하지 않습니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 공백만 있는 값은 `None`, 그 외에는 trim된 값
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// serde 역직렬화 시 빈 문자열을 `None`으로 변환합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Form {
///     #[serde(default, deserialize_with = "deserialize_blank_as_none")]
///     name: Option<String>,
/// }
/// ```
pub fn deserialize_blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(blank_to_none(opt))
}
