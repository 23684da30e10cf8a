//! アダプター実装（Outbound ポートの実装とホスト境界）

#[cfg(unix)]
mod ansi_console;
mod config;
mod sigint_checker;

#[cfg(unix)]
pub use ansi_console::AnsiConsole;
pub use config::{load_file_config, FileConfig};
pub use sigint_checker::{NoopInterruptChecker, SigintChecker};
