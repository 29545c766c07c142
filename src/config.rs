use std::{env, path::PathBuf};

use anyhow::Result;
use config::{Config as config_config, File as config_file};
use serde::{Deserialize, Serialize};

use crate::{error::Error, logging};

const CONFIG_PATH: &str = "app.json";

/// Telegram bot token 至少要超過的長度
const MIN_TOKEN_LEN: usize = 40;
/// Telegram chat id 至少要超過的長度
const MIN_CHAT_ID_LEN: usize = 5;

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct App {
    #[serde(default)]
    pub bot: Bot,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Bot {
    #[serde(default)]
    pub telegram: Telegram,
}

const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Telegram {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub chat_id: String,
}

impl Telegram {
    /// 檢查 bot 設定是否可用，不合格時不會發出任何請求
    pub fn validate(&self) -> Result<(), Error> {
        validate_credentials(&self.token, &self.chat_id)
    }
}

/// Rejects a bot token of 40 characters or fewer and a chat id of 5 characters or fewer.
pub fn validate_credentials(token: &str, chat_id: &str) -> Result<(), Error> {
    if token.chars().count() <= MIN_TOKEN_LEN {
        return Err(Error::ConfigInvalid(format!(
            "bot token must be longer than {} characters",
            MIN_TOKEN_LEN
        )));
    }

    if chat_id.chars().count() <= MIN_CHAT_ID_LEN {
        return Err(Error::ConfigInvalid(format!(
            "chat id must be longer than {} characters",
            MIN_CHAT_ID_LEN
        )));
    }

    Ok(())
}

impl App {
    /// 依序讀取 `app.json` 與環境變數，環境變數優先
    pub fn load() -> Result<Self> {
        let config_path = config_path();
        let app = if config_path.exists() {
            let config: App = config_config::builder()
                .add_source(config_file::from(config_path))
                .build()?
                .try_deserialize()?;
            config
        } else {
            logging::debug_file_async(format!("{} not found, read settings from env", CONFIG_PATH));
            App::default()
        };

        Ok(app.override_with_env())
    }

    /// 將來至於 env 的設定值覆蓋掉 json 上的設定值
    fn override_with_env(self) -> Self {
        self.override_with(|key| env::var(key).ok())
    }

    fn override_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(token) = lookup(TELEGRAM_TOKEN) {
            self.bot.telegram.token = token.trim().to_string();
        }

        if let Some(chat_id) = lookup(TELEGRAM_CHAT_ID) {
            self.bot.telegram.chat_id = chat_id.trim().to_string();
        }

        self
    }
}

/// 回傳設定檔的路徑
fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_PATH)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const TOKEN: &str = "123456789:AAbbCCddEEffGGhhIIjjKKllMMnnOOppQQr";

    fn long_token() -> String {
        format!("{}{}", TOKEN, "xyz123")
    }

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials(&long_token(), "-1001234").is_ok());

        let exactly_forty = "a".repeat(40);
        assert!(matches!(
            validate_credentials(&exactly_forty, "-1001234"),
            Err(Error::ConfigInvalid(_))
        ));
        assert!(matches!(
            validate_credentials("", "-1001234"),
            Err(Error::ConfigInvalid(_))
        ));
        assert!(matches!(
            validate_credentials(&long_token(), "12345"),
            Err(Error::ConfigInvalid(_))
        ));
    }

    #[test]
    fn test_override_with() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (TELEGRAM_TOKEN, " env-token "),
            (TELEGRAM_CHAT_ID, "987654321"),
        ]);

        let mut app = App::default();
        app.bot.telegram.token = "json-token".to_string();
        let app = app.override_with(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(app.bot.telegram.token, "env-token");
        assert_eq!(app.bot.telegram.chat_id, "987654321");
    }

    #[test]
    fn test_override_keeps_json_value() {
        let mut app = App::default();
        app.bot.telegram.chat_id = "55555555".to_string();
        let app = app.override_with(|_| None);

        assert_eq!(app.bot.telegram.chat_id, "55555555");
        assert!(app.bot.telegram.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let app: App =
            serde_json::from_str(r#"{"bot":{"telegram":{"chat_id":"-100123456"}}}"#).unwrap();
        assert_eq!(app.bot.telegram.chat_id, "-100123456");
        assert!(app.bot.telegram.token.is_empty());

        let app: App = serde_json::from_str("{}").unwrap();
        assert!(app.bot.telegram.chat_id.is_empty());
    }
}
