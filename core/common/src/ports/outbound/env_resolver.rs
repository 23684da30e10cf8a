//! 環境変数解決 Outbound ポート
//!
//! 設定ディレクトリ・ログファイルパスを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 設定ディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. TEMPO_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/tempo（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/tempo
    fn resolve_home_dir(&self) -> Result<PathBuf, Error>;

    /// 構造化ログの出力先を環境変数 TEMPO_LOG から取得する。
    /// 未設定なら Err（呼び出し側は NoopLog にフォールバックする）。
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error>;
}
