//! Outbound ポート: usecase が端末・割り込みを使うための trait
//!
//! 時刻・FS・環境変数・ログのポートは common 側にある。

pub mod console;
pub mod interrupt_checker;

pub use console::{Console, Key};
pub use interrupt_checker::InterruptChecker;
