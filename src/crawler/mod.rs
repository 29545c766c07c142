use async_trait::async_trait;

use crate::{declare::Quote, error::Result};

/// 雅虎財經
pub mod yahoo;

/// 報價來源
///
/// 實作者需回傳當日的開盤價與目前價格 (皆四捨五入至小數兩位)，
/// 查無資料、資料不完整或網路錯誤時回傳 `Error::DataUnavailable`。
#[async_trait]
pub trait QuoteFetcher {
    async fn fetch(&self, symbol: &str) -> Result<Quote>;
}
