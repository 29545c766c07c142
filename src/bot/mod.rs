use async_trait::async_trait;

use crate::error::Result;

/// 通知訊息的組成與跳脫
pub mod message;
/// Telegram Bot API
pub mod telegram;

/// 訊息的送出端
#[async_trait]
pub trait Messenger {
    /// 送出已經跳脫並編碼過的訊息，失敗時回傳 `Error::DeliveryFailed`。
    async fn deliver(&self, encoded_message: &str) -> Result<()>;
}
