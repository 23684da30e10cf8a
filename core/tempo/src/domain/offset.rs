//! 表示オフセット設定（時 + 分 → ミリ秒）
//!
//! 時計表示にだけ加算される値で、どこにも永続化しない。

/// 時フィールドの許容範囲（実在する UTC オフセットの幅）
pub const HOURS_MIN: i32 = -12;
pub const HOURS_MAX: i32 = 14;
/// 分フィールドの許容範囲
pub const MINUTES_MIN: i32 = -59;
pub const MINUTES_MAX: i32 = 59;

/// 範囲外のオフセット入力
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid offset input: {field} must be between {min} and {max}, got {value}")]
pub struct InvalidOffsetInput {
    pub field: &'static str,
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

/// 時計表示に加算するオフセットの設定値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OffsetSettings {
    hours: i32,
    minutes: i32,
}

impl OffsetSettings {
    /// 範囲検証付きで作る
    pub fn new(hours: i32, minutes: i32) -> Result<Self, InvalidOffsetInput> {
        let mut settings = Self::default();
        settings.set_hours(hours)?;
        settings.set_minutes(minutes)?;
        Ok(settings)
    }

    pub fn hours(&self) -> i32 {
        self.hours
    }

    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    /// 範囲外は InvalidOffsetInput で拒否する（CLI 境界用）
    pub fn set_hours(&mut self, hours: i32) -> Result<(), InvalidOffsetInput> {
        if !(HOURS_MIN..=HOURS_MAX).contains(&hours) {
            return Err(InvalidOffsetInput {
                field: "hours",
                value: hours,
                min: HOURS_MIN,
                max: HOURS_MAX,
            });
        }
        self.hours = hours;
        Ok(())
    }

    /// 範囲外は InvalidOffsetInput で拒否する（CLI 境界用）
    pub fn set_minutes(&mut self, minutes: i32) -> Result<(), InvalidOffsetInput> {
        if !(MINUTES_MIN..=MINUTES_MAX).contains(&minutes) {
            return Err(InvalidOffsetInput {
                field: "minutes",
                value: minutes,
                min: MINUTES_MIN,
                max: MINUTES_MAX,
            });
        }
        self.minutes = minutes;
        Ok(())
    }

    /// 対話操作用: 範囲の端で止める
    pub fn nudge_hours(&mut self, delta: i32) {
        self.hours = (self.hours + delta).clamp(HOURS_MIN, HOURS_MAX);
    }

    /// 対話操作用: 範囲の端で止める
    pub fn nudge_minutes(&mut self, delta: i32) {
        self.minutes = (self.minutes + delta).clamp(MINUTES_MIN, MINUTES_MAX);
    }

    /// 両フィールドを 0 に戻す
    pub fn clear(&mut self) {
        self.hours = 0;
        self.minutes = 0;
    }

    /// 合成オフセット（ミリ秒）
    pub fn offset_ms(&self) -> i64 {
        i64::from(self.hours) * 3_600_000 + i64::from(self.minutes) * 60_000
    }

    /// 時フィールドの符号付きラベル
    pub fn hours_label(&self) -> String {
        signed_label(self.hours)
    }

    /// 分フィールドの符号付きラベル
    pub fn minutes_label(&self) -> String {
        signed_label(self.minutes)
    }

    /// 合成オフセットの hh:mm 表記（例: "+02:30", "-01:15", "00:00"）
    pub fn total_label(&self) -> String {
        let total_minutes = self.offset_ms() / 60_000;
        let sign = if total_minutes > 0 {
            "+"
        } else if total_minutes < 0 {
            "-"
        } else {
            ""
        };
        let abs = total_minutes.abs();
        format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
    }
}

/// 正の値だけ "+" を前置する（0 と負はそのまま）
pub fn signed_label(value: i32) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}
