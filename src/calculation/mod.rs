/// 計算報價的漲跌
pub mod price_change;
