//! 壁時計の読み取り（実時刻 + 表示オフセット → 12 時間表示）
//!
//! 毎 tick 計算し直す読み取り専用モデル。キャッシュしない。

use chrono::{DateTime, Local, NaiveDate, Timelike, Utc};

/// 午前 / 午後
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn label(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// 12 時間表示の壁時計の読み
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallTime {
    /// 1..=12（0 時は 12 に写す）
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub meridiem: Meridiem,
    /// 長形式の日付行（例: "Wednesday, August 5, 2026"）
    pub date_line: String,
}

/// 24 時間制の時を 12 時間制 + 午前/午後に写す（0 → 12、12 → 12 PM）
pub fn split_hour(hour24: u32) -> (u32, Meridiem) {
    let meridiem = if hour24 >= 12 {
        Meridiem::Pm
    } else {
        Meridiem::Am
    };
    let hour = hour24 % 12;
    (if hour == 0 { 12 } else { hour }, meridiem)
}

fn local_datetime(ms: i64) -> DateTime<Local> {
    // 表現範囲外のミリ秒は epoch に飽和させる（全域関数にする）
    DateTime::<Utc>::from_timestamp_millis(ms)
        .unwrap_or_default()
        .with_timezone(&Local)
}

/// now + offset をローカル時刻として読む
pub fn read(now_ms: u64, offset_ms: i64) -> WallTime {
    let local = local_datetime((now_ms as i64).saturating_add(offset_ms));
    let (hour, meridiem) = split_hour(local.hour());
    WallTime {
        hour,
        minute: local.minute(),
        second: local.second(),
        meridiem,
        date_line: local.format("%A, %B %-d, %Y").to_string(),
    }
}

/// オフセットを掛けない実ローカル日付（カレンダーの「今日」印用）
pub fn local_date(now_ms: u64) -> NaiveDate {
    local_datetime(now_ms as i64).date_naive()
}
