//! ユースケースレベルのテスト
//!
//! ManualClock + 台本化した Console で tick を決定的に駆動する。

mod dashboard_tests;
mod launch_tests;
mod support;
