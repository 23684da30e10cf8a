//! 時刻取得の Outbound ポート
//!
//! usecase はこの trait 経由で「現在時刻」を取得する。表示オフセットは
//! ここでは扱わない（読み出し側で加算する）。

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の `ManualClock` など。
pub trait Clock: Send + Sync {
    /// 現在時刻をミリ秒（Unix epoch）で返す
    fn now_ms(&self) -> u64;
}
