/// http 請求
pub mod http;
/// 文字格式化與跳脫
pub mod text;
