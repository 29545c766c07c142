use rust_decimal::Decimal;

/// Telegram MarkdownV2 需要跳脫的字元
const MARKDOWN_ESCAPE_CHAR: &[char] = &['-', '+', '.', '(', ')', '?', '^', '$'];

/// 千分位分隔符號
const THOUSANDS_SEPARATOR: char = '\'';

/// Formats a decimal with exactly two fraction digits and `'` as the thousands separator.
///
/// # Example
///
/// ```
/// let text = format_decimal(dec!(12345.6));
/// assert_eq!(text, "12'345.60");
/// ```
pub fn format_decimal(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    let plain = rounded.abs().to_string();
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(plain.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }

    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }

    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}

/// Prefixes every MarkdownV2 control character the message may contain with a backslash.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if MARKDOWN_ESCAPE_CHAR.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Reverses [`escape_markdown`].
pub fn unescape_markdown(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.peek() {
                if MARKDOWN_ESCAPE_CHAR.contains(next) {
                    continue;
                }
            }
        }
        plain.push(c);
    }
    plain
}

/// Percent-encodes text so it can be used as a URL query value.
pub fn encode_query_value(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}
