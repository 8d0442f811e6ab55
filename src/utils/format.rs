//! 화면 표시용 포맷 헬퍼
//!
//! 통화 금액, 말줄임, 제목 대소문자 변환을 제공하는 순수 함수 모음입니다.

/// 말줄임 표시
pub const ELLIPSIS: &str = "...";

/// 통화 금액을 `$1,234.56` 형식으로 렌더링합니다.
///
/// 소수점 둘째 자리에서 반올림하며, 음수는 통화 기호 앞에 `-`를 붙입니다.
/// 반올림 결과가 0이면 부호를 붙이지 않습니다. 기호가 등록되지 않은 통화는
/// `CHF 1,234.56`처럼 통화 코드를 앞에 씁니다.
///
/// 정수 자릿수에 상한이 없어 `f64`로 표현되는 모든 유한 값을 그대로 씁니다.
/// NaN과 무한대는 0으로 표시합니다.
///
/// # Examples
///
/// ```rust
/// use account_portal::utils::format::format_currency;
///
/// assert_eq!(format_currency(1234.56, "USD"), "$1,234.56");
/// assert_eq!(format_currency(-50.0, "USD"), "-$50.00");
/// ```
pub fn format_currency(amount: f64, currency: &str) -> String {
    let magnitude = if amount.is_finite() { amount.abs() } else { 0.0 };
    let rendered = format!("{:.2}", magnitude);
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let is_zero = !rendered.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    let digits = group_thousands(whole);

    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}.{}", sign, symbol, digits, fraction),
        None => format!(
            "{}{} {}.{}",
            sign,
            currency.trim().to_uppercase(),
            digits,
            fraction
        ),
    }
}

/// 기본 통화(USD) 포맷
pub fn format_usd(amount: f64) -> String {
    format_currency(amount, "USD")
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    let symbol = match currency.trim().to_uppercase().as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "KRW" => "₩",
        "INR" => "₹",
        "CAD" => "CA$",
        "AUD" => "A$",
        _ => return None,
    };
    Some(symbol)
}

fn group_thousands(raw: &str) -> String {
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);

    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// 최대 길이(문자 수)를 넘으면 잘라내고 `...`를 붙입니다.
///
/// 결과 길이는 `max_len`을 넘지 않습니다. `max_len`이 3보다 작으면
/// 말줄임 표시만 `max_len` 길이로 남습니다.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let keep = max_len.saturating_sub(ELLIPSIS.len());
    if keep == 0 {
        return ELLIPSIS.chars().take(max_len).collect();
    }

    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// 공백으로 구분된 각 단어의 첫 글자를 대문자로, 나머지는 소문자로 바꿉니다.
/// 단어 사이의 공백은 그대로 유지합니다.
pub fn to_title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            result.push(ch);
        } else if at_word_start {
            at_word_start = false;
            result.extend(ch.to_uppercase());
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}
