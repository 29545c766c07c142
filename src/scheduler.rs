use std::{fmt, time::Duration};

use async_trait::async_trait;

use crate::{
    bot::{message, Messenger},
    calculation::price_change,
    crawler::QuoteFetcher,
    declare::{ChangeResult, PriceState},
    error::Error,
    logging,
};

/// 排程目前所在的階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Fetching,
    Computing,
    Formatting,
    Delivering,
    Sleeping,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "IDLE",
            Stage::Fetching => "FETCHING",
            Stage::Computing => "COMPUTING",
            Stage::Formatting => "FORMATTING",
            Stage::Delivering => "DELIVERING",
            Stage::Sleeping => "SLEEPING",
        };
        f.write_str(name)
    }
}

/// 單次排程的結果
#[derive(Debug)]
pub enum TickOutcome {
    /// 訊息已送出，`message` 為跳脫前的原始文字
    Delivered { change: ChangeResult, message: String },
    /// 在 `stage` 階段失敗，本次剩下的步驟全部略過
    Skipped { stage: Stage, error: Error },
}

/// 兩次排程之間的等待方式
#[async_trait]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

/// 實際依照牆上時間等待
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

#[async_trait]
impl Clock for WallClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// 依固定間隔為單一商品抓取報價並送出漲跌通知。
///
/// 同一時間只會有一次排程在執行，下一次要等上一次的等待結束才會開始。
pub struct Scheduler<F, M, C> {
    symbol: String,
    interval: Duration,
    fetcher: F,
    messenger: M,
    clock: C,
    state: PriceState,
    stage: Stage,
}

impl<F, M, C> Scheduler<F, M, C>
where
    F: QuoteFetcher,
    M: Messenger,
    C: Clock,
{
    /// `interval_secs` 最少為 1 秒
    pub fn new(symbol: &str, interval_secs: u64, fetcher: F, messenger: M, clock: C) -> Self {
        Scheduler {
            symbol: symbol.to_string(),
            interval: Duration::from_secs(interval_secs.max(1)),
            fetcher,
            messenger,
            clock,
            state: PriceState::default(),
            stage: Stage::Idle,
        }
    }

    pub fn state(&self) -> PriceState {
        self.state
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 不斷執行排程，直到程式被外部終止
    pub async fn run(&mut self) {
        logging::info_file_async(format!(
            "Start watching {} every {} seconds",
            self.symbol,
            self.interval.as_secs()
        ));

        loop {
            self.step().await;
        }
    }

    /// 執行一次排程後等待一個間隔
    pub async fn step(&mut self) -> TickOutcome {
        let outcome = self.tick().await;

        match &outcome {
            TickOutcome::Delivered { change, message } => {
                logging::info_file_async(format!(
                    "{} {} {}: {}",
                    self.symbol, change.direction, change.magnitude, message
                ));
            }
            TickOutcome::Skipped { stage, error } => {
                logging::error_file_async(format!(
                    "Skip {} at {} because {:?}",
                    self.symbol, stage, error
                ));
            }
        }

        self.stage = Stage::Sleeping;
        self.clock.sleep(self.interval).await;
        self.stage = Stage::Idle;

        outcome
    }

    /// 抓取 → 計算 → 組訊息 → 送出，任何一步失敗就結束本次排程
    pub async fn tick(&mut self) -> TickOutcome {
        self.stage = Stage::Fetching;
        let quote = match self.fetcher.fetch(&self.symbol).await {
            Ok(quote) => quote,
            Err(error) => return self.skip(error),
        };

        self.stage = Stage::Computing;
        let (change, state) = price_change::compute_change(&quote, self.state);
        self.state = state;

        self.stage = Stage::Formatting;
        let text = message::format_message(&self.symbol, &quote.currency, quote.close, &change);
        let encoded = message::encode_message(&text);

        self.stage = Stage::Delivering;
        if let Err(error) = self.messenger.deliver(&encoded).await {
            return self.skip(error);
        }

        TickOutcome::Delivered {
            change,
            message: text,
        }
    }

    fn skip(&self, error: Error) -> TickOutcome {
        TickOutcome::Skipped {
            stage: self.stage,
            error,
        }
    }
}
