//! テスト用スタブ（Console / InterruptChecker）

use crate::ports::outbound::{Console, InterruptChecker, Key};
use common::adapter::ManualClock;
use common::error::Error;
use std::collections::VecDeque;
use std::sync::Arc;

/// 台本どおりにキーを返し、描画されたフレームを記録する Console
///
/// poll のたびに共有クロックをちょうど 1 tick 進める。台本が尽きたら
/// 'q' を返してループを終わらせる。
pub struct ScriptedConsole {
    script: VecDeque<Option<Key>>,
    clock: Arc<ManualClock>,
    pub frames: Vec<String>,
    pub entered: bool,
    pub left: bool,
}

impl ScriptedConsole {
    pub fn new(clock: Arc<ManualClock>, script: Vec<Option<Key>>) -> Self {
        Self {
            script: script.into(),
            clock,
            frames: Vec::new(),
            entered: false,
            left: false,
        }
    }

    /// 最後に描画されたフレーム（ANSI 除去済み）
    pub fn last_frame(&self) -> String {
        crate::screen::strip_ansi(self.frames.last().map(String::as_str).unwrap_or(""))
    }

    /// i 番目に描画されたフレーム（ANSI 除去済み）
    pub fn frame(&self, i: usize) -> String {
        crate::screen::strip_ansi(&self.frames[i])
    }
}

impl Console for ScriptedConsole {
    fn enter(&mut self) -> Result<(), Error> {
        self.entered = true;
        Ok(())
    }

    fn leave(&mut self) -> Result<(), Error> {
        self.left = true;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        (80, 24)
    }

    fn present(&mut self, frame: &str) -> Result<(), Error> {
        self.frames.push(frame.to_string());
        Ok(())
    }

    fn poll_key(&mut self, timeout_ms: u64) -> Result<Option<Key>, Error> {
        self.clock.advance(timeout_ms);
        Ok(self.script.pop_front().unwrap_or(Some(Key::Char('q'))))
    }
}

/// 固定値を返す InterruptChecker
pub struct StaticInterrupt {
    pub interrupted: bool,
}

impl InterruptChecker for StaticInterrupt {
    fn is_interrupted(&self) -> bool {
        self.interrupted
    }
}
