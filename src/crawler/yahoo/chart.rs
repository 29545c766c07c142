use async_trait::async_trait;
use rust_decimal::{prelude::FromPrimitive, Decimal};
use serde::Deserialize;

use crate::{
    crawler::{
        yahoo::{Yahoo, HOST},
        QuoteFetcher,
    },
    declare::Quote,
    error::{Error, Result},
    logging, util,
};

#[derive(Deserialize, Debug)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize, Debug)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    meta: Meta,
    #[serde(default)]
    indicators: Indicators,
}

/// 商品的基本資料，目前只用到幣別
#[derive(Deserialize, Debug, Default)]
struct Meta {
    #[serde(default)]
    currency: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Series>,
}

/// 當日 OHLC 走勢，停牌或尚未開盤時陣列內可能是 null
#[derive(Deserialize, Debug, Default)]
struct Series {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[async_trait]
impl QuoteFetcher for Yahoo {
    async fn fetch(&self, symbol: &str) -> Result<Quote> {
        let url = format!(
            "https://{host}/v8/finance/chart/{symbol}?range=1d&interval=1d",
            host = HOST,
            symbol = urlencoding::encode(symbol)
        );
        let text = util::http::get(&url, None)
            .await
            .map_err(|why| Error::data_unavailable(symbol, format!("{:#}", why)))?;

        let quote = parse(symbol, &text)?;
        logging::debug_file_async(format!("yahoo quote: {:?}", quote));

        Ok(quote)
    }
}

/// 解析 chart API 的回應，只取 `open[0]` 與 `close[0]`。
///
/// 幣別欄位缺少時以空字串代替，不視為錯誤。
pub fn parse(symbol: &str, body: &str) -> Result<Quote> {
    let response = serde_json::from_str::<ChartResponse>(body)
        .map_err(|why| Error::data_unavailable(symbol, format!("invalid chart json: {}", why)))?;

    if let Some(err) = response.chart.error {
        return Err(Error::data_unavailable(
            symbol,
            format!("{} {}", err.code, err.description).trim().to_string(),
        ));
    }

    let result = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| Error::data_unavailable(symbol, "chart result is empty"))?;

    let currency = result.meta.currency.unwrap_or_default();
    let series = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| Error::data_unavailable(symbol, "quote series is empty"))?;

    let open = first_price(symbol, "open", &series.open)?;
    let close = first_price(symbol, "close", &series.close)?;

    Ok(Quote::new(symbol, currency.trim(), open, close))
}

fn first_price(symbol: &str, field: &str, values: &[Option<f64>]) -> Result<Decimal> {
    values
        .first()
        .copied()
        .flatten()
        .filter(|v| v.is_finite())
        .and_then(Decimal::from_f64)
        .ok_or_else(|| Error::data_unavailable(symbol, format!("{} series has no value", field)))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    const TSLA: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"currency": "USD", "symbol": "TSLA", "regularMarketPrice": 105.004},
                "timestamp": [1760707800],
                "indicators": {
                    "quote": [{
                        "open": [100.00499725341797],
                        "high": [106.1],
                        "low": [99.5],
                        "close": [105.00499725341797],
                        "volume": [123456]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    fn assert_unavailable(result: Result<Quote>) {
        match result {
            Err(Error::DataUnavailable { symbol, .. }) => assert_eq!(symbol, "TSLA"),
            other => panic!("expected DataUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_parse() {
        let quote = parse("TSLA", TSLA).unwrap();

        assert_eq!(quote.symbol, "TSLA");
        assert_eq!(quote.currency, "USD");
        assert_eq!(quote.open, dec!(100.00));
        assert_eq!(quote.close, dec!(105.00));
    }

    #[test]
    fn test_parse_without_currency() {
        let body = r#"{"chart":{"result":[{"meta":{},"indicators":{"quote":[{"open":[1.5],"close":[1.25]}]}}],"error":null}}"#;
        let quote = parse("TSLA", body).unwrap();

        assert_eq!(quote.currency, "");
        assert_eq!(quote.open, dec!(1.50));
        assert_eq!(quote.close, dec!(1.25));

        let body = r#"{"chart":{"result":[{"meta":{"currency":null},"indicators":{"quote":[{"open":[1.5],"close":[1.25]}]}}]}}"#;
        assert_eq!(parse("TSLA", body).unwrap().currency, "");
    }

    #[test]
    fn test_parse_chart_error() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        assert_unavailable(parse("TSLA", body));
    }

    #[test]
    fn test_parse_incomplete_data() {
        assert_unavailable(parse("TSLA", r#"{"chart":{"result":[],"error":null}}"#));
        assert_unavailable(parse(
            "TSLA",
            r#"{"chart":{"result":[{"meta":{"currency":"USD"},"indicators":{"quote":[]}}]}}"#,
        ));
        assert_unavailable(parse(
            "TSLA",
            r#"{"chart":{"result":[{"meta":{"currency":"USD"},"indicators":{"quote":[{"open":[],"close":[]}]}}]}}"#,
        ));
        assert_unavailable(parse(
            "TSLA",
            r#"{"chart":{"result":[{"meta":{"currency":"USD"},"indicators":{"quote":[{"open":[10.0],"close":[null]}]}}]}}"#,
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert_unavailable(parse("TSLA", "<html>Too Many Requests</html>"));
    }

    #[tokio::test]
    #[ignore]
    async fn test_fetch() {
        dotenv::dotenv().ok();
        logging::debug_file_async("開始 fetch".to_string());

        match Yahoo::default().fetch("BTC-USD").await {
            Ok(quote) => {
                dbg!(&quote);
                logging::debug_file_async(format!("quote : {:#?}", quote));
            }
            Err(why) => {
                logging::debug_file_async(format!("Failed to fetch because {:?}", why));
            }
        }

        logging::debug_file_async("結束 fetch".to_string());
    }
}
