pub mod code;
pub mod formatter;

use std::path::{Path, PathBuf};

use thiserror::Error;

use code::ErrorCode;

/// git-browse 統一エラー型
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("git url not parseable: {0}")]
    UnrecognizedRemoteFormat(String),

    #[error("Cannot read {}: {}", .path.display(), .source)]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {}: {}", .path.display(), .reason)]
    ConfigMalformed { path: PathBuf, reason: String },

    #[error("Cannot get '{}' from {}", .key, .path.display())]
    ConfigMissingKey { path: PathBuf, key: String },

    #[error("Not a git repository (or any parent up to the root): {}", .0.display())]
    RepositoryNotFound(PathBuf),

    #[error("specified file does not exist: {}", .0.display())]
    TargetNotFound(PathBuf),

    #[error("Cannot look up {operation} in {host}")]
    UnsupportedOperation {
        host: &'static str,
        operation: &'static str,
    },

    #[error("Review tool failed: {0}")]
    ReviewTool(String),

    #[error("Failed to open browser: {0}")]
    BrowserLaunch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),
}

pub type Result<T> = std::result::Result<T, BrowseError>;

impl BrowseError {
    /// エラーコードを返す
    pub fn code(&self) -> ErrorCode {
        match self {
            BrowseError::UnrecognizedRemoteFormat(_) => ErrorCode::Val001,
            BrowseError::TargetNotFound(_) => ErrorCode::Val002,
            BrowseError::UnsupportedOperation { .. } => ErrorCode::Val003,
            BrowseError::ConfigUnreadable { .. } => ErrorCode::Cfg001,
            BrowseError::ConfigMalformed { .. } => ErrorCode::Cfg002,
            BrowseError::ConfigMissingKey { .. } => ErrorCode::Cfg003,
            BrowseError::RepositoryNotFound(_) => ErrorCode::Git001,
            BrowseError::Git(_) => ErrorCode::Git002,
            BrowseError::ReviewTool(_) => ErrorCode::Ext001,
            BrowseError::BrowserLaunch(_) => ErrorCode::Ext002,
            BrowseError::Io(_) => ErrorCode::Io001,
        }
    }

    /// エラー表示で `-->` に出す場所（ファイルパス）
    pub fn location(&self) -> Option<&Path> {
        match self {
            BrowseError::ConfigUnreadable { path, .. }
            | BrowseError::ConfigMalformed { path, .. }
            | BrowseError::ConfigMissingKey { path, .. } => Some(path),
            _ => None,
        }
    }

    /// 設定ファイルの読み込み失敗
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BrowseError::ConfigUnreadable {
            path: path.into(),
            source,
        }
    }

    /// 設定ファイルの構文エラー
    pub fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        BrowseError::ConfigMalformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// 必須キーの欠落
    pub fn missing_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        BrowseError::ConfigMissingKey {
            path: path.into(),
            key: key.into(),
        }
    }
}
