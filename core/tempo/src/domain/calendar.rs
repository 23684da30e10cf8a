//! 月表示カレンダーの純粋ロジック
//!
//! カーソルは (年, 月) のみを持ち、実際の日付とは独立に移動できる。
//! 「今日」の印は呼び出し側から渡された実日付に対してだけ付く。

use chrono::{Datelike, NaiveDate};

/// カレンダーグリッドの 1 マス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// 月初の曜日合わせの空マス
    Blank,
    /// 日付マス
    Day { day: u32, today: bool },
}

/// 表示中の (年, 月) カーソル。月は 1..=12。
///
/// 不変条件: カーソルの指す月初日は常に chrono で表現可能。
/// コンストラクタと `step` がこれを保証する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// 表現可能な (年, 月) からカーソルを作る
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// 日付の属する月を指すカーソルを作る
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// delta ヶ月移動する（年へ繰り上げ・繰り下げ）。
    /// 表現範囲の外へ出る移動は無視する。
    pub fn step(&mut self, delta: i32) {
        let total = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;
        let Ok(year) = i32::try_from(year) else {
            return;
        };
        if NaiveDate::from_ymd_opt(year, month, 1).is_some() {
            self.year = year;
            self.month = month;
        }
    }

    /// 月初日の曜日（0 = 日曜）
    pub fn first_weekday(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// 月の日数（翌月 1 日の前日 = 当月末日）。
    /// 翌月が表現範囲外になるのは上端の 12 月だけなので、その場合は 31。
    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(31)
    }

    /// 見出し（例: "August 2026"）
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }

    /// 月グリッド: 曜日合わせの空マスに続けて 1..=日数 の日付マス。
    /// today がこの (年, 月) に属するときだけ、その日のマスに印を付ける。
    pub fn grid(&self, today: NaiveDate) -> Vec<Cell> {
        let today_day = (today.year() == self.year && today.month() == self.month)
            .then(|| today.day());
        let mut cells = Vec::with_capacity(self.first_weekday() as usize + 31);
        for _ in 0..self.first_weekday() {
            cells.push(Cell::Blank);
        }
        for day in 1..=self.days_in_month() {
            cells.push(Cell::Day {
                day,
                today: today_day == Some(day),
            });
        }
        cells
    }
}
