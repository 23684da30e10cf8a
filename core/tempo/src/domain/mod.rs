//! 純粋ドメインロジック
//!
//! ポートにも端末にも依存しない。時刻が必要な操作はすべて引数で受け取る。

pub mod calendar;
pub mod offset;
pub mod stopwatch;
pub mod wall_clock;
