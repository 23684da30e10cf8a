//! 端末 Outbound ポート
//!
//! 元の設計でホスト表示層が担っていた境界そのもの:
//! 「表示を書く」「操作イベントを受け取る」「再描画周期で待つ」だけを抽象化する。

use common::error::Error;

/// 1 回のキー入力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Up,
    Down,
    Left,
    Right,
    Tab,
    Enter,
}

/// 端末抽象（Outbound ポート）
///
/// 実装は `adapter::AnsiConsole`（raw モード + ANSI）やテスト用の ScriptedConsole。
pub trait Console {
    /// raw モード + 代替スクリーンに入る
    fn enter(&mut self) -> Result<(), Error>;

    /// 端末状態を元に戻す（冪等）
    fn leave(&mut self) -> Result<(), Error>;

    /// 現在の端末サイズ (列, 行)
    fn size(&self) -> (u16, u16);

    /// 1 フレームを描画する（frame は "\n" 区切りのテキスト）
    fn present(&mut self, frame: &str) -> Result<(), Error>;

    /// 最大 timeout_ms 待って 1 キー読む。来なければ None（= 1 tick）。
    fn poll_key(&mut self, timeout_ms: u64) -> Result<Option<Key>, Error>;
}
