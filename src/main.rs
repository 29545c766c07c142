use std::process;

use clap::Parser;

pub mod bot;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod crawler;
pub mod declare;
pub mod error;
pub mod logging;
pub mod scheduler;
pub mod util;

use crate::{
    bot::telegram::Telegram,
    cli::Args,
    crawler::yahoo::Yahoo,
    error::Error,
    scheduler::{Scheduler, WallClock},
};

/// 設定不合格時固定輸出的訊息
const MISSING_BOT_CONFIGS: &str = "Missing botconfigs!";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    let settings = match Args::parse().validate() {
        Ok(settings) => settings,
        Err(why) => exit_with(&why.to_string(), why),
    };

    let telegram = match config::App::load() {
        Ok(app) => match Telegram::from_config(&app.bot.telegram) {
            Ok(telegram) => telegram,
            Err(why) => exit_with(MISSING_BOT_CONFIGS, why),
        },
        Err(why) => exit_with(
            MISSING_BOT_CONFIGS,
            Error::ConfigInvalid(format!("{:#}", why)),
        ),
    };

    logging::info_console(format!(
        "stock_notifier 已啟動 {} every {}s, Rust OS/Arch: {}/{}",
        settings.symbol,
        settings.interval_secs,
        std::env::consts::OS,
        std::env::consts::ARCH
    ));

    let mut scheduler = Scheduler::new(
        &settings.symbol,
        settings.interval_secs,
        Yahoo::default(),
        telegram,
        WallClock,
    );

    scheduler.run().await;
}

/// 致命錯誤：輸出訊息後以非零狀態結束
fn exit_with(diagnostic: &str, why: Error) -> ! {
    logging::error_file_async(format!("Fatal error: {:?}", why));
    logging::error_console(diagnostic.to_string());
    process::exit(1);
}
