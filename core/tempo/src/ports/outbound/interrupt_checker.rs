//! SIGINT / SIGTERM 等による割り込みを検知する Outbound ポート
//!
//! tick ループは毎周この trait を参照し、true なら画面を復元して終了する。

/// 割り込みが要求されたかどうかを返す能力
pub trait InterruptChecker: Send + Sync {
    fn is_interrupted(&self) -> bool;
}
