//! ダッシュボードの状態とティックループ（usecase 層）
//!
//! 1 周 = 割り込み確認 → フレーム合成 → 描画 → 最大 1 tick のキー待ち → キー解釈。
//! キー処理と再描画は同一スレッドで直列化されるため、ロックは要らない。

use crate::domain::calendar::MonthCursor;
use crate::domain::offset::OffsetSettings;
use crate::domain::stopwatch::{format_elapsed, Stopwatch};
use crate::domain::wall_clock;
use crate::ports::outbound::{Console, InterruptChecker, Key};
use crate::screen::{self, ScreenModel, View};
use common::error::Error;
use common::ports::outbound::{Clock, Log, LogRecord};
use std::sync::Arc;

/// キー解釈の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// ダッシュボード本体
///
/// 合成ルート（wiring / main）が唯一のインスタンスを組み立て、
/// 必要なコラボレータはすべてコンストラクタで受け取る。
pub struct Dashboard {
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
    stopwatch: Stopwatch,
    cursor: MonthCursor,
    offset: OffsetSettings,
    view: View,
}

impl Dashboard {
    pub fn new(
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
        offset: OffsetSettings,
        view: View,
    ) -> Self {
        let cursor = MonthCursor::from_date(wall_clock::local_date(clock.now_ms()));
        Self {
            clock,
            log,
            stopwatch: Stopwatch::new(),
            cursor,
            offset,
            view,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// 現在時刻で 1 フレーム分の読み取りモデルを作る
    pub fn screen_model(&self) -> ScreenModel<'_> {
        let now = self.clock.now_ms();
        let today = wall_clock::local_date(now);
        ScreenModel {
            view: self.view,
            wall: wall_clock::read(now, self.offset.offset_ms()),
            stopwatch_display: format_elapsed(self.stopwatch.elapsed_ms(now)),
            stopwatch_running: self.stopwatch.is_running(),
            stopwatch_paused: self.stopwatch.is_paused(),
            laps: self.stopwatch.laps(),
            calendar_title: self.cursor.title(),
            calendar_cells: self.cursor.grid(today),
            hours_label: self.offset.hours_label(),
            minutes_label: self.offset.minutes_label(),
            total_label: self.offset.total_label(),
        }
    }

    /// 1 キーを解釈して状態を進める
    pub fn handle_key(&mut self, key: Key) -> Step {
        match key {
            Key::Char('q') | Key::Ctrl('c') => Step::Quit,
            Key::Tab => {
                self.view = self.view.next();
                Step::Continue
            }
            Key::Char('1') => {
                self.view = View::Clock;
                Step::Continue
            }
            Key::Char('2') => {
                self.view = View::Stopwatch;
                Step::Continue
            }
            Key::Char('3') => {
                self.view = View::Calendar;
                Step::Continue
            }
            Key::Char('4') => {
                self.view = View::Settings;
                Step::Continue
            }
            other => {
                match self.view {
                    View::Clock => {}
                    View::Stopwatch => self.handle_stopwatch_key(other),
                    View::Calendar => self.handle_calendar_key(other),
                    View::Settings => self.handle_settings_key(other),
                }
                Step::Continue
            }
        }
    }

    fn handle_stopwatch_key(&mut self, key: Key) {
        let now = self.clock.now_ms();
        match key {
            Key::Char(' ') => {
                if self.stopwatch.is_running() {
                    self.stopwatch.pause(now);
                    self.log_event("stopwatch", "paused", Some(now));
                } else {
                    self.stopwatch.start(now);
                    self.log_event("stopwatch", "started", Some(now));
                }
            }
            Key::Char('l') => {
                let before = self.stopwatch.laps().len();
                self.stopwatch.lap(now);
                if self.stopwatch.laps().len() > before {
                    self.log_event("stopwatch", "lap", Some(now));
                }
            }
            Key::Char('r') => {
                self.stopwatch.reset();
                self.log_event("stopwatch", "reset", None);
            }
            _ => {}
        }
    }

    fn handle_calendar_key(&mut self, key: Key) {
        match key {
            Key::Left => self.cursor.step(-1),
            Key::Right => self.cursor.step(1),
            Key::Char('t') => {
                let today = wall_clock::local_date(self.clock.now_ms());
                self.cursor = MonthCursor::from_date(today);
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: Key) {
        match key {
            Key::Up => self.offset.nudge_hours(1),
            Key::Down => self.offset.nudge_hours(-1),
            Key::Right => self.offset.nudge_minutes(1),
            Key::Left => self.offset.nudge_minutes(-1),
            Key::Char('0') => self.offset.clear(),
            _ => {}
        }
    }

    /// tick ループを回す。終了時は必ず端末を復元する。
    pub fn run(
        &mut self,
        console: &mut dyn Console,
        interrupt: &dyn InterruptChecker,
        tick_ms: u64,
    ) -> Result<i32, Error> {
        console.enter()?;
        let result = self.run_loop(console, interrupt, tick_ms);
        let leave = console.leave();
        let code = result?;
        leave?;
        Ok(code)
    }

    fn run_loop(
        &mut self,
        console: &mut dyn Console,
        interrupt: &dyn InterruptChecker,
        tick_ms: u64,
    ) -> Result<i32, Error> {
        let _ = self.log.log(
            &LogRecord::info("lifecycle", "dashboard started")
                .with_field("view", serde_json::json!(self.view.name())),
        );
        loop {
            if interrupt.is_interrupted() {
                let _ = self.log.log(&LogRecord::info("lifecycle", "interrupted"));
                return Ok(130);
            }
            let (_cols, rows) = console.size();
            let frame = screen::compose(&self.screen_model(), rows);
            console.present(&frame)?;
            if let Some(key) = console.poll_key(tick_ms)? {
                if self.handle_key(key) == Step::Quit {
                    let _ = self.log.log(&LogRecord::info("lifecycle", "quit"));
                    return Ok(0);
                }
            }
        }
    }

    /// 状態遷移のログ（書けなくても画面は壊さない）
    fn log_event(&self, kind: &str, message: &str, now_ms: Option<u64>) {
        let mut record = LogRecord::info(kind, message);
        if let Some(now) = now_ms {
            record = record.with_field(
                "elapsed",
                serde_json::json!(format_elapsed(self.stopwatch.elapsed_ms(now))),
            );
        }
        let _ = self.log.log(&record);
    }
}
