use rust_decimal::Decimal;

use crate::declare::{ChangeResult, Direction, PriceState, Quote};

/// 計算報價相對於前一次觀察價格的漲跌。
///
/// 第一次執行時還沒有前一次的價格，所以改以當日開盤價作為比較基準；
/// 之後每次都與上一次的收盤價比較。回傳的狀態一定會前進到本次的收盤價。
///
/// 基準價為零時視為沒有變化。
pub fn compute_change(quote: &Quote, state: PriceState) -> (ChangeResult, PriceState) {
    let baseline = if state.initialized {
        state.last_price
    } else {
        quote.open
    };
    let current = quote.close;

    let change = if baseline.is_zero() || current == baseline {
        ChangeResult::unchanged()
    } else if current > baseline {
        ChangeResult {
            direction: Direction::Up,
            magnitude: round_price(current - baseline),
        }
    } else {
        ChangeResult {
            direction: Direction::Down,
            magnitude: round_price(baseline - current),
        }
    };

    (change, PriceState::observed(current))
}

fn round_price(value: Decimal) -> Decimal {
    value.round_dp(2)
}
