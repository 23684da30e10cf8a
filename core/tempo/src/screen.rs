//! 画面合成（純粋ロジック）
//!
//! ScreenModel から 1 フレーム分のテキストを組み立てる。端末 I/O は行わず、
//! 装飾は ANSI SGR のみ。行は "\n" 区切りで返し、raw モードへの変換は
//! adapter 側で行う。

use crate::domain::calendar::Cell;
use crate::domain::stopwatch::LapRecord;
use crate::domain::wall_clock::WallTime;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const REVERSE: &str = "\x1b[7m";

/// アクティブなビュー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Clock,
    Stopwatch,
    Calendar,
    Settings,
}

impl View {
    pub const ALL: [View; 4] = [View::Clock, View::Stopwatch, View::Calendar, View::Settings];

    /// タブ見出し
    pub fn label(&self) -> &'static str {
        match self {
            View::Clock => "Clock",
            View::Stopwatch => "Stopwatch",
            View::Calendar => "Calendar",
            View::Settings => "Settings",
        }
    }

    /// 設定・ログ用の小文字名
    pub fn name(&self) -> &'static str {
        match self {
            View::Clock => "clock",
            View::Stopwatch => "stopwatch",
            View::Calendar => "calendar",
            View::Settings => "settings",
        }
    }

    /// Tab キーでの巡回順
    pub fn next(&self) -> View {
        match self {
            View::Clock => View::Stopwatch,
            View::Stopwatch => View::Calendar,
            View::Calendar => View::Settings,
            View::Settings => View::Clock,
        }
    }

    /// 設定・CLI の文字列から解決する（大文字小文字は無視）
    pub fn parse(name: &str) -> Option<View> {
        match name.to_ascii_lowercase().as_str() {
            "clock" => Some(View::Clock),
            "stopwatch" => Some(View::Stopwatch),
            "calendar" => Some(View::Calendar),
            "settings" => Some(View::Settings),
            _ => None,
        }
    }
}

/// 1 フレーム分の描画入力（読み取り専用）
pub struct ScreenModel<'a> {
    pub view: View,
    pub wall: WallTime,
    pub stopwatch_display: String,
    pub stopwatch_running: bool,
    pub stopwatch_paused: bool,
    pub laps: &'a [LapRecord],
    pub calendar_title: String,
    pub calendar_cells: Vec<Cell>,
    pub hours_label: String,
    pub minutes_label: String,
    pub total_label: String,
}

fn tab_bar(active: View) -> String {
    let mut parts = Vec::with_capacity(View::ALL.len());
    for (i, view) in View::ALL.iter().enumerate() {
        let label = format!(" [{}] {} ", i + 1, view.label());
        if *view == active {
            parts.push(format!("{}{}{}", REVERSE, label, RESET));
        } else {
            parts.push(label);
        }
    }
    parts.join(" ")
}

fn clock_lines(model: &ScreenModel, out: &mut Vec<String>) {
    let wall = &model.wall;
    out.push(format!(
        "   {}{:02}:{:02}:{:02} {}{}",
        BOLD,
        wall.hour,
        wall.minute,
        wall.second,
        wall.meridiem.label(),
        RESET
    ));
    out.push(String::new());
    out.push(format!("   {}", wall.date_line));
}

fn stopwatch_lines(model: &ScreenModel, max_laps: usize, out: &mut Vec<String>) {
    let state = if model.stopwatch_running {
        "(running)"
    } else if model.stopwatch_paused {
        "(paused)"
    } else {
        ""
    };
    out.push(format!(
        "   {}{}{}   {}{}{}",
        BOLD, model.stopwatch_display, RESET, DIM, state, RESET
    ));
    if !model.laps.is_empty() {
        out.push(String::new());
        // 新しい順に表示する
        for lap in model.laps.iter().rev().take(max_laps) {
            out.push(format!("   Lap {:>2}   {}", lap.index, lap.time));
        }
        if model.laps.len() > max_laps {
            out.push(format!("   {}({} more){}", DIM, model.laps.len() - max_laps, RESET));
        }
    }
}

fn calendar_lines(model: &ScreenModel, out: &mut Vec<String>) {
    out.push(format!("   {}{:^20}{}", BOLD, model.calendar_title, RESET));
    out.push("   Su Mo Tu We Th Fr Sa".to_string());
    let mut row: Vec<String> = Vec::with_capacity(7);
    for cell in &model.calendar_cells {
        let text = match cell {
            Cell::Blank => "  ".to_string(),
            Cell::Day { day, today: false } => format!("{:2}", day),
            Cell::Day { day, today: true } => format!("{}{:2}{}", REVERSE, day, RESET),
        };
        row.push(text);
        if row.len() == 7 {
            out.push(format!("   {}", row.join(" ")));
            row.clear();
        }
    }
    if !row.is_empty() {
        out.push(format!("   {}", row.join(" ")));
    }
}

fn settings_lines(model: &ScreenModel, out: &mut Vec<String>) {
    out.push(format!("   Hours    {:>4}", model.hours_label));
    out.push(format!("   Minutes  {:>4}", model.minutes_label));
    out.push(String::new());
    out.push(format!("   Offset   {}", model.total_label));
}

fn hint(view: View) -> &'static str {
    match view {
        View::Clock => "[1-4] switch · [q] quit",
        View::Stopwatch => "[space] start/pause · [l] lap · [r] reset · [q] quit",
        View::Calendar => "[←/→] month · [t] today · [q] quit",
        View::Settings => "[↑/↓] hours · [←/→] minutes · [0] clear · [q] quit",
    }
}

/// 1 フレームを組み立てる。rows はラップ一覧の表示上限にだけ使う。
pub fn compose(model: &ScreenModel, rows: u16) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(tab_bar(model.view));
    lines.push(String::new());
    // タブ・余白・ヒントの分を引いた残りがラップに使える行数
    let max_laps = usize::from(rows).saturating_sub(8).max(1);
    match model.view {
        View::Clock => clock_lines(model, &mut lines),
        View::Stopwatch => stopwatch_lines(model, max_laps, &mut lines),
        View::Calendar => calendar_lines(model, &mut lines),
        View::Settings => settings_lines(model, &mut lines),
    }
    lines.push(String::new());
    lines.push(format!(" {}{}{}", DIM, hint(model.view), RESET));
    lines.join("\n")
}

/// ANSI エスケープ（CSI シーケンス）を取り除く。--once 出力とテストの照合用。
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(&d) = chars.peek() {
                    chars.next();
                    // CSI の終端バイトは 0x40..=0x7e
                    if ('\u{40}'..='\u{7e}').contains(&d) {
                        break;
                    }
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
