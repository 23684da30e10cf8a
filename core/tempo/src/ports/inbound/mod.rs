//! Inbound ポート: CLI からアプリを起動するための trait

use crate::cli::Config;
use common::error::Error;

/// 解析済み Config を受け取って usecase を実行する能力（main の Runner が実装する）
pub trait UseCaseRunner {
    fn run(&mut self, config: Config) -> Result<i32, Error>;
}
