//! エラーハンドリング
//!
//! ワークスペース全体で共有するエラー型。終了コードは sysexits 準拠
//! （64: usage, 65: data, 70: software, 74: io）で統一する。

use std::io;

/// ワークスペース共通のエラー型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 引数・入力不正（EX_USAGE）
    #[error("{0}")]
    InvalidArgument(String),

    /// 入力データ不正（JSON 等、EX_DATAERR）
    #[error("{0}")]
    Json(String),

    /// 内部エラー（EX_SOFTWARE）
    #[error("{0}")]
    System(String),

    /// I/O エラー（EX_IOERR）
    #[error("{0}")]
    Io(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// データ不正エラー
    pub fn json_msg(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// プロセスの終了コード（sysexits）
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Json(_) => 65,
            Error::System(_) => 70,
            Error::Io(_) => 74,
        }
    }

    /// usage 表示が必要なエラーかどうか（main の分岐用）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
