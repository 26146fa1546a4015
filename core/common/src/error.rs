//! エラーハンドリング
//!
//! 種別ごとの enum に統一し、終了コードは sysexits 準拠で対応付ける
//! （64: usage, 70: software, 74: I/O, 78: config）。

use thiserror::Error as ThisError;

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 引数・入力の不正（usage エラー）
    #[error("{0}")]
    InvalidArgument(String),
    /// HTTP・リモート API のエラー
    #[error("{0}")]
    Http(String),
    /// JSON の生成・解析エラー
    #[error("{0}")]
    Json(String),
    /// ファイル I/O のエラー
    #[error("{0}")]
    Io(String),
    /// 環境変数の不足・不正
    #[error("{0}")]
    Env(String),
    /// その他のシステムエラー
    #[error("{0}")]
    System(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// HTTP エラー
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// JSON エラー
    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// I/O エラー（メッセージのみ保持）
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// 環境変数エラー
    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// usage エラー（呼び出し側で Usage 表示を出す）かどうか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Http(_) | Self::Json(_) | Self::Io(_) => 74,
            Self::Env(_) => 78,
            Self::System(_) => 70,
        }
    }
}
