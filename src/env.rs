use std::path::PathBuf;

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 設定ファイルパスの上書き
    pub const CONFIG_PATH: &'static str = "GIT_BROWSE_CONFIG";
    /// ログフィルタ（env_logger 形式）
    pub const LOG_FILTER: &'static str = "GIT_BROWSE_LOG";
    /// 汎用ログフィルタ（LOG_FILTER 未設定時）
    pub const RUST_LOG: &'static str = "RUST_LOG";
    /// 色付け無効化
    pub const NO_COLOR: &'static str = "NO_COLOR";
    /// ホームディレクトリ
    pub const HOME: &'static str = "HOME";

    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// 環境変数をパスとして取得
    pub fn get_path(key: &str) -> Option<PathBuf> {
        Self::get(key).map(PathBuf::from)
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
