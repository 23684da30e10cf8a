//! ダッシュボードのユースケーステスト

use super::support::{ScriptedConsole, StaticInterrupt};
use crate::domain::calendar::Cell;
use crate::domain::offset::OffsetSettings;
use crate::domain::wall_clock;
use crate::ports::outbound::Key;
use crate::screen::View;
use crate::usecase::dashboard::{Dashboard, Step};
use common::adapter::{ManualClock, NoopLog};
use common::ports::outbound::Clock;
use std::sync::Arc;

/// 2026-08-06T12:00:00Z
const NOW_MS: u64 = 1_785_585_600_000;
const TICK_MS: u64 = 50;

fn dashboard(clock: &Arc<ManualClock>) -> Dashboard {
    Dashboard::new(
        Arc::clone(clock) as Arc<dyn Clock>,
        Arc::new(NoopLog),
        OffsetSettings::default(),
        View::Clock,
    )
}

fn today_marks(dashboard: &Dashboard) -> usize {
    dashboard
        .screen_model()
        .calendar_cells
        .iter()
        .filter(|cell| matches!(cell, Cell::Day { today: true, .. }))
        .count()
}

#[test]
fn test_run_presents_then_quits_on_q() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    let mut console = ScriptedConsole::new(Arc::clone(&clock), vec![Some(Key::Char('q'))]);
    let code = dashboard
        .run(&mut console, &StaticInterrupt { interrupted: false }, TICK_MS)
        .unwrap();
    assert_eq!(code, 0);
    assert!(console.entered);
    assert!(console.left);
    assert_eq!(console.frames.len(), 1);
    assert!(console.frame(0).contains("[1] Clock"));
}

#[test]
fn test_run_stops_on_interrupt_with_130() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    let mut console = ScriptedConsole::new(Arc::clone(&clock), vec![]);
    let code = dashboard
        .run(&mut console, &StaticInterrupt { interrupted: true }, TICK_MS)
        .unwrap();
    assert_eq!(code, 130);
    assert!(console.frames.is_empty());
    assert!(console.left);
}

#[test]
fn test_ctrl_c_key_quits() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    assert_eq!(dashboard.handle_key(Key::Ctrl('c')), Step::Quit);
}

#[test]
fn test_stopwatch_keys_drive_engine_through_the_loop() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    // tick ごとに 50ms 進む: '2'(+50) 開始(+100) 空 tick x4(+300)
    // lap(+350, 経過 250ms) 停止(+400, 経過 300ms) 空 tick(+450) 台本切れで 'q'
    let script = vec![
        Some(Key::Char('2')),
        Some(Key::Char(' ')),
        None,
        None,
        None,
        None,
        Some(Key::Char('l')),
        Some(Key::Char(' ')),
        None,
    ];
    let mut console = ScriptedConsole::new(Arc::clone(&clock), script);
    let code = dashboard
        .run(&mut console, &StaticInterrupt { interrupted: false }, TICK_MS)
        .unwrap();
    assert_eq!(code, 0);

    // 計測中のフレーム（poll #7 の直前、経過 200ms）
    let running = console.frame(6);
    assert!(running.contains("00:00.20"), "{}", running);
    assert!(running.contains("(running)"));

    // 最後のフレーム: 停止済み・経過は 300ms で凍結・ラップは 250ms 時点
    let last = console.last_frame();
    assert!(last.contains("00:00.30"), "{}", last);
    assert!(last.contains("(paused)"));
    assert!(last.contains("Lap  1   00:00.25"));
}

#[test]
fn test_pause_then_resume_preserves_elapsed() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    dashboard.handle_key(Key::Char('2'));
    dashboard.handle_key(Key::Char(' '));
    clock.advance(2_500);
    dashboard.handle_key(Key::Char(' '));
    clock.advance(10_000);
    assert_eq!(dashboard.screen_model().stopwatch_display, "00:02.50");
    dashboard.handle_key(Key::Char(' '));
    clock.advance(1_000);
    assert_eq!(dashboard.screen_model().stopwatch_display, "00:03.50");
}

#[test]
fn test_reset_zeroes_elapsed_and_clears_laps() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    dashboard.handle_key(Key::Char('2'));
    dashboard.handle_key(Key::Char(' '));
    clock.advance(1_000);
    dashboard.handle_key(Key::Char('l'));
    dashboard.handle_key(Key::Char('r'));
    let model = dashboard.screen_model();
    assert_eq!(model.stopwatch_display, "00:00.00");
    assert!(model.laps.is_empty());
    assert!(!model.stopwatch_running);
    assert!(!model.stopwatch_paused);
}

#[test]
fn test_lap_is_noop_when_not_running() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    dashboard.handle_key(Key::Char('2'));
    dashboard.handle_key(Key::Char('l'));
    assert!(dashboard.screen_model().laps.is_empty());
    dashboard.handle_key(Key::Char(' '));
    clock.advance(500);
    dashboard.handle_key(Key::Char(' '));
    dashboard.handle_key(Key::Char('l'));
    assert!(dashboard.screen_model().laps.is_empty());
}

#[test]
fn test_calendar_navigation_rolls_over_years() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    dashboard.handle_key(Key::Char('3'));
    assert_eq!(dashboard.screen_model().calendar_title, "August 2026");
    dashboard.handle_key(Key::Left);
    assert_eq!(dashboard.screen_model().calendar_title, "July 2026");
    // 8 月から 8 ヶ月戻ると前年 12 月
    for _ in 0..7 {
        dashboard.handle_key(Key::Left);
    }
    assert_eq!(dashboard.screen_model().calendar_title, "December 2025");
    dashboard.handle_key(Key::Right);
    assert_eq!(dashboard.screen_model().calendar_title, "January 2026");
    dashboard.handle_key(Key::Char('t'));
    assert_eq!(dashboard.screen_model().calendar_title, "August 2026");
}

#[test]
fn test_calendar_today_marked_only_in_current_month() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    dashboard.handle_key(Key::Char('3'));
    assert_eq!(today_marks(&dashboard), 1);
    dashboard.handle_key(Key::Left);
    assert_eq!(today_marks(&dashboard), 0);
    dashboard.handle_key(Key::Char('t'));
    assert_eq!(today_marks(&dashboard), 1);
}

#[test]
fn test_settings_keys_shift_the_clock_reading() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    dashboard.handle_key(Key::Char('4'));
    dashboard.handle_key(Key::Up);
    dashboard.handle_key(Key::Up);
    for _ in 0..30 {
        dashboard.handle_key(Key::Right);
    }
    let model = dashboard.screen_model();
    assert_eq!(model.hours_label, "+2");
    assert_eq!(model.minutes_label, "+30");
    assert_eq!(model.total_label, "+02:30");
    // 2h30m = 9,000,000ms だけ進めた読みと一致する
    assert_eq!(model.wall, wall_clock::read(clock.now_ms(), 9_000_000));
}

#[test]
fn test_settings_clear_resets_offset() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    dashboard.handle_key(Key::Char('4'));
    dashboard.handle_key(Key::Down);
    dashboard.handle_key(Key::Left);
    dashboard.handle_key(Key::Char('0'));
    let model = dashboard.screen_model();
    assert_eq!(model.total_label, "00:00");
    assert_eq!(model.wall, wall_clock::read(clock.now_ms(), 0));
}

#[test]
fn test_tab_cycles_through_all_views() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    assert_eq!(dashboard.view(), View::Clock);
    let mut seen = vec![dashboard.view()];
    for _ in 0..3 {
        dashboard.handle_key(Key::Tab);
        seen.push(dashboard.view());
    }
    assert_eq!(seen, View::ALL.to_vec());
    dashboard.handle_key(Key::Tab);
    assert_eq!(dashboard.view(), View::Clock);
}

#[test]
fn test_unbound_keys_are_ignored() {
    let clock = Arc::new(ManualClock::new(NOW_MS));
    let mut dashboard = dashboard(&clock);
    assert_eq!(dashboard.handle_key(Key::Char('x')), Step::Continue);
    assert_eq!(dashboard.handle_key(Key::Enter), Step::Continue);
    assert_eq!(dashboard.view(), View::Clock);
}
