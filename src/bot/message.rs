use rust_decimal::Decimal;

use crate::{declare::ChangeResult, util::text};

/// 組出通知的原始文字 (尚未跳脫)。
///
/// - 有漲跌：`TSLA @ *USD 105.00* (surged +5.00)`
/// - 無漲跌：`TSLA @ *USD 105.00* ` (保留結尾的空白)
pub fn format_message(symbol: &str, currency: &str, price: Decimal, change: &ChangeResult) -> String {
    let head = format!("{} @ *{} {}* ", symbol, currency, text::format_decimal(price));

    match change.direction.verb() {
        Some(verb) => format!(
            "{}({} {}{})",
            head,
            verb,
            change.direction.sign(),
            text::format_decimal(change.magnitude)
        ),
        None => head,
    }
}

/// Escapes the MarkdownV2 control characters first, then percent-encodes the result.
pub fn encode_message(message: &str) -> String {
    text::encode_query_value(&text::escape_markdown(message))
}
