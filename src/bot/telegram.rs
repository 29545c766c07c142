use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    bot::Messenger,
    config,
    error::{Error, Result},
    logging,
    util::http,
};

const HOST: &str = "api.telegram.org";

#[derive(Deserialize, Debug)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<Message>,
}

#[derive(Deserialize, Debug)]
struct Message {
    message_id: i64,
}

/// Telegram bot，建立時即檢查 token 與 chat id，不合格的設定無法產生實例
#[derive(Debug, Clone)]
pub struct Telegram {
    token: String,
    chat_id: String,
}

impl Telegram {
    pub fn new(token: &str, chat_id: &str) -> Result<Self> {
        config::validate_credentials(token, chat_id)?;

        Ok(Telegram {
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }

    pub fn from_config(settings: &config::Telegram) -> Result<Self> {
        Telegram::new(&settings.token, &settings.chat_id)
    }

    /// 組出 sendMessage 的網址，`encoded_message` 必須是已經跳脫並編碼過的文字
    fn send_message_url(&self, encoded_message: &str) -> String {
        format!(
            "https://{host}/bot{token}/sendMessage?parse_mode=MarkdownV2&disable_notification=true&chat_id={chat_id}&text={text}",
            host = HOST,
            token = self.token,
            chat_id = urlencoding::encode(&self.chat_id),
            text = encoded_message
        )
    }
}

#[async_trait]
impl Messenger for Telegram {
    async fn deliver(&self, encoded_message: &str) -> Result<()> {
        let url = self.send_message_url(encoded_message);
        let body = http::get(&url, None)
            .await
            .map_err(|why| Error::DeliveryFailed(format!("{:#}", why)))?;

        let response = serde_json::from_str::<SendMessageResponse>(&body).map_err(|why| {
            Error::DeliveryFailed(format!("Error parsing response JSON({}): {}", body, why))
        })?;

        check_response(response)
    }
}

fn check_response(response: SendMessageResponse) -> Result<()> {
    if !response.ok {
        return Err(Error::DeliveryFailed(
            response
                .description
                .unwrap_or_else(|| "telegram responded ok=false".to_string()),
        ));
    }

    if let Some(msg) = response.result {
        logging::debug_file_async(format!("telegram message_id: {}", msg.message_id));
    }

    Ok(())
}

/// 檢查設定後送出訊息，設定不合格時直接回傳 `Error::ConfigInvalid`，不會發出任何請求。
pub async fn deliver(bot_token: &str, chat_id: &str, encoded_message: &str) -> Result<()> {
    Telegram::new(bot_token, chat_id)?
        .deliver(encoded_message)
        .await
}
