//! Command-line arguments: `stock_notifier <symbol> [intervalSeconds]`.
use clap::Parser;

use crate::error::{Error, Result};

/// 預設每 60 秒執行一次
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

const MISSING_SYMBOL: &str =
    "Missing a valid symbol as parameter. Use something like 'TSLA' or 'BTC-USD'...";
const INVALID_INTERVAL: &str =
    "Invalid second parameter: must be a number representing seconds to re-run script.";

/// Parsed command-line arguments, checked by [`Args::validate`].
#[derive(Debug, Parser)]
#[command(version, about = "Push the price change of a symbol to a Telegram chat", long_about = None)]
pub struct Args {
    /// Yahoo Finance symbol, e.g. TSLA or BTC-USD.
    pub symbol: Option<String>,

    /// Seconds to wait between two notifications (>= 1).
    #[arg(allow_negative_numbers = true)]
    pub interval: Option<String>,
}

/// 驗證過的執行參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub symbol: String,
    pub interval_secs: u64,
}

impl Args {
    pub fn validate(self) -> Result<Settings> {
        let symbol = self
            .symbol
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::ArgumentInvalid(MISSING_SYMBOL.to_string()))?;

        let interval_secs = match self.interval {
            None => DEFAULT_INTERVAL_SECS,
            Some(interval) => interval
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs >= 1)
                .map(|secs| secs as u64)
                .ok_or_else(|| Error::ArgumentInvalid(INVALID_INTERVAL.to_string()))?,
        };

        Ok(Settings {
            symbol,
            interval_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(argv: &[&str]) -> Result<Settings> {
        Args::try_parse_from(argv).unwrap().validate()
    }

    #[test]
    fn test_symbol_with_default_interval() {
        assert_eq!(
            settings(&["stock_notifier", "BTC-USD"]).unwrap(),
            Settings {
                symbol: "BTC-USD".to_string(),
                interval_secs: 60
            }
        );
    }

    #[test]
    fn test_symbol_with_interval() {
        let s = settings(&["stock_notifier", "TSLA", "3600"]).unwrap();
        assert_eq!(s.symbol, "TSLA");
        assert_eq!(s.interval_secs, 3600);

        assert_eq!(settings(&["stock_notifier", "TSLA", "1"]).unwrap().interval_secs, 1);
    }

    #[test]
    fn test_missing_symbol() {
        for argv in [&["stock_notifier"][..], &["stock_notifier", "  "][..]] {
            match settings(argv) {
                Err(Error::ArgumentInvalid(msg)) => assert_eq!(msg, MISSING_SYMBOL),
                other => panic!("expected ArgumentInvalid, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_invalid_interval() {
        for interval in ["0", "-5", "abc", "1.5", ""] {
            match settings(&["stock_notifier", "TSLA", interval]) {
                Err(Error::ArgumentInvalid(msg)) => assert_eq!(msg, INVALID_INTERVAL),
                other => panic!("expected ArgumentInvalid for {:?}, got {:?}", interval, other),
            }
        }
    }

    #[test]
    fn test_too_many_arguments() {
        assert!(Args::try_parse_from(["stock_notifier", "TSLA", "60", "extra"]).is_err());
    }
}
