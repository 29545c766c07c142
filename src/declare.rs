use std::fmt;

use rust_decimal::Decimal;

/// 單次抓取的報價快照
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: String,
    /// 幣別，來源沒有提供時為空字串
    pub currency: String,
    /// 當日開盤價 (已四捨五入至小數兩位)
    pub open: Decimal,
    /// 當日目前/收盤價 (已四捨五入至小數兩位)
    pub close: Decimal,
}

impl Quote {
    pub fn new(symbol: &str, currency: &str, open: Decimal, close: Decimal) -> Self {
        Quote {
            symbol: symbol.to_string(),
            currency: currency.to_string(),
            open: open.round_dp(2),
            close: close.round_dp(2),
        }
    }
}

/// The last price observed by this process.
///
/// Starts uninitialized and only lives as long as the process does.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceState {
    pub last_price: Decimal,
    pub initialized: bool,
}

impl PriceState {
    pub fn observed(price: Decimal) -> Self {
        PriceState {
            last_price: price,
            initialized: true,
        }
    }
}

/// 漲跌方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    None,
    Up,
    Down,
}

impl Direction {
    pub fn verb(&self) -> Option<&'static str> {
        match self {
            Direction::None => None,
            Direction::Up => Some("surged"),
            Direction::Down => Some("dropped"),
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            Direction::None => "",
            Direction::Up => "+",
            Direction::Down => "-",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::None => "NONE",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        };
        f.write_str(name)
    }
}

/// 與前一次觀察價格相比的漲跌結果，`magnitude` 恆為非負
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeResult {
    pub direction: Direction,
    pub magnitude: Decimal,
}

impl ChangeResult {
    pub fn unchanged() -> Self {
        ChangeResult {
            direction: Direction::None,
            magnitude: Decimal::ZERO,
        }
    }
}
