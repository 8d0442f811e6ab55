//! 필드별 검증 메시지 모음
//!
//! 폼 재렌더링 시 "Email can't be blank"와 같은 전체 메시지를 만들기 위해
//! 필드 이름과 메시지를 입력 순서대로 보관합니다.

use std::collections::BTreeMap;

use validator::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => {
                if !messages.iter().any(|m| m == message) {
                    messages.push(message.to_string());
                }
            }
            None => self.entries.push((field.to_string(), vec![message.to_string()])),
        }
    }

    /// 해당 필드의 메시지 (없으면 빈 슬라이스)
    pub fn get(&self, field: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.get(field).iter().any(|m| m == message)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, messages)| messages.len()).sum()
    }

    /// "Password confirmation doesn't match Password" 형식의 전체 메시지
    pub fn full_messages(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|(field, messages)| {
                let label = humanize(field);
                messages.iter().map(move |m| format!("{} {}", label, m))
            })
            .collect()
    }

    pub fn as_map(&self) -> BTreeMap<String, Vec<String>> {
        self.entries.iter().cloned().collect()
    }

    /// 검증 결과를 `Result`로 변환합니다.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut result = FieldErrors::new();

        // HashMap 순서는 고정되지 않으므로 필드 이름으로 정렬
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        for (field, field_errors) in fields {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.replace('_', " "));
                result.add(&field, &message);
            }
        }

        result
    }
}

/// `reset_password_token` → `Reset password token`
pub fn humanize(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
