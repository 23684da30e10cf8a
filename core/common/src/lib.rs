//! tempo 共通ライブラリ
//!
//! `tempo` コマンドから利用する共有機能（エラー型・Outbound ポート・標準アダプター）を提供します。

/// エラーハンドリング
pub mod error;

/// Outbound ポート定義
pub mod ports;

/// 標準アダプター実装
pub mod adapter;
