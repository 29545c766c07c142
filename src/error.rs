use thiserror::Error;

/// 通知流程中可能發生的錯誤
///
/// `ConfigInvalid` 與 `ArgumentInvalid` 屬於致命錯誤，會在排程啟動前結束程式；
/// `DataUnavailable` 與 `DeliveryFailed` 則只會跳過當次的排程。
#[derive(Error, Debug)]
pub enum Error {
    /// Bot token or chat id is missing or too short.
    #[error("Invalid bot config: {0}")]
    ConfigInvalid(String),

    /// The market-data provider returned nothing usable for the symbol.
    #[error("Data unavailable for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    /// The messaging API rejected the message or could not be reached.
    #[error("Failed to deliver message: {0}")]
    DeliveryFailed(String),

    /// Command line arguments could not be accepted.
    #[error("{0}")]
    ArgumentInvalid(String),
}

impl Error {
    pub fn data_unavailable(symbol: &str, reason: impl Into<String>) -> Self {
        Error::DataUnavailable {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }

    /// Fatal errors abort the process before the loop starts.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ConfigInvalid(_) | Error::ArgumentInvalid(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fatal() {
        assert!(Error::ConfigInvalid("token".to_string()).is_fatal());
        assert!(Error::ArgumentInvalid("interval".to_string()).is_fatal());
        assert!(!Error::data_unavailable("TSLA", "empty result").is_fatal());
        assert!(!Error::DeliveryFailed("502".to_string()).is_fatal());
    }

    #[test]
    fn test_display() {
        let why = Error::data_unavailable("BTC-USD", "close series is empty");
        assert_eq!(
            why.to_string(),
            "Data unavailable for BTC-USD: close series is empty"
        );
    }
}
