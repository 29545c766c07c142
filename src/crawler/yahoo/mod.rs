//! # Yahoo 財經採集模組
//!
//! 透過 Yahoo Finance 的 chart API 取得商品的幣別與當日開盤、目前價格。
//!
//! ## 站點資訊
//!
//! - 來源域名：`query1.finance.yahoo.com`
//! - 抓取技術：HTTP GET 取得 JSON。

/// 當日走勢 (chart API) 採集子模組
pub mod chart;

/// Yahoo Finance chart API 的主機域名
const HOST: &str = "query1.finance.yahoo.com";

/// Yahoo 財經採集器
///
/// 此結構體主要作為 `QuoteFetcher` Trait 的實作載體。
#[derive(Debug, Default, Clone, Copy)]
pub struct Yahoo {}
