//! デプロイメント設定
//!
//! 社内ホスト、社内ホスト向けの overlay ベース URL、リポジトリ名の書き換えテーブルを
//! JSON で与える。ファイルがなければ空の設定（公開サイトのみ）として扱う。
//!
//! ```json
//! {
//!   "internal_hosts": ["code.example.internal"],
//!   "sourcegraph_url": "https://sourcegraph.example.internal/",
//!   "godocs_url": "https://docs.example.internal/pkg/",
//!   "rewrites": [
//!     { "host": "code.example.internal", "owner": "example-code",
//!       "renames": { "legacy-name": "new-name" } }
//!   ]
//! }
//! ```

use crate::env::EnvVar;
use crate::error::{BrowseError, Result};
use crate::remote::strip_git_suffix;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// `~` からの既定の設定ファイルパス
const DEFAULT_CONFIG_PATH: &str = ".git-browse/config.json";

pub const SOURCEGRAPH_URL_KEY: &str = "sourcegraph_url";
pub const GODOCS_URL_KEY: &str = "godocs_url";

/// デプロイメント設定
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    internal_hosts: Vec<String>,
    sourcegraph_url: Option<String>,
    godocs_url: Option<String>,
    rewrites: Vec<RewriteRule>,
    #[serde(skip)]
    path: PathBuf,
}

/// ホスト単位のリポジトリ名書き換え
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RewriteRule {
    host: String,
    owner: String,
    #[serde(default)]
    renames: BTreeMap<String, String>,
}

impl RewriteRule {
    /// 新しいRewriteRuleを作成
    #[cfg(test)]
    pub fn new(host: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            renames: BTreeMap::new(),
        }
    }

    /// リネームを追加
    #[cfg(test)]
    pub fn with_rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.renames.insert(from.into(), to.into());
        self
    }

    /// 書き換え後のオーナー
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// リポジトリパスを1階層の名前に平坦化してリネームを適用する
    ///
    /// `/` は `-`、`@` は `---` に置換し、末尾の `.git` を除去する。
    pub fn apply(&self, raw_path: &str) -> String {
        let flattened = raw_path.replace('/', "-").replace('@', "---");
        let name = strip_git_suffix(&flattened);
        self.renames
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}

impl DeploymentConfig {
    /// 既定の場所から読み込む
    ///
    /// `GIT_BROWSE_CONFIG` で明示されたファイルは存在必須。
    /// `~/.git-browse/config.json` はなければ空の設定になる。
    pub fn load() -> Result<Self> {
        if let Some(path) = EnvVar::get_path(EnvVar::CONFIG_PATH) {
            return Self::load_from(&path);
        }

        let Some(home) = EnvVar::get_path(EnvVar::HOME) else {
            return Ok(Self::default());
        };
        let path = home.join(DEFAULT_CONFIG_PATH);
        if !path.exists() {
            debug!("no deployment config at {}", path.display());
            return Ok(Self {
                path,
                ..Self::default()
            });
        }
        Self::load_from(&path)
    }

    /// 指定したファイルから読み込む
    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| BrowseError::unreadable(path, e))?;
        let mut config: Self =
            serde_json::from_str(&content).map_err(|e| BrowseError::malformed(path, e))?;
        config.path = path.to_path_buf();

        debug!(
            "loaded deployment config {} ({} rewrites)",
            path.display(),
            config.rewrites.len()
        );
        Ok(config)
    }

    /// 設定ファイルのパス（読み込んでいない場合は空）
    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 社内（Phabricator 管理）のホストか
    ///
    /// `internal_hosts` に加え、書き換えルールの対象ホストも社内ホストとみなす。
    pub fn is_internal_host(&self, host: &str) -> bool {
        self.internal_hosts.iter().any(|h| h == host) || self.rewrite_for(host).is_some()
    }

    /// ホストに対応する書き換えルール
    pub fn rewrite_for(&self, host: &str) -> Option<&RewriteRule> {
        self.rewrites.iter().find(|rule| rule.host == host)
    }

    /// 社内 Sourcegraph のベース URL
    pub fn internal_sourcegraph_url(&self) -> Result<&str> {
        self.sourcegraph_url
            .as_deref()
            .ok_or_else(|| BrowseError::missing_key(&self.path, SOURCEGRAPH_URL_KEY))
    }

    /// 社内 Godocs のベース URL
    pub fn internal_godocs_url(&self) -> Result<&str> {
        self.godocs_url
            .as_deref()
            .ok_or_else(|| BrowseError::missing_key(&self.path, GODOCS_URL_KEY))
    }

    #[cfg(test)]
    pub fn with_internal_host(mut self, host: &str) -> Self {
        self.internal_hosts.push(host.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_sourcegraph_url(mut self, url: &str) -> Self {
        self.sourcegraph_url = Some(url.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_godocs_url(mut self, url: &str) -> Self {
        self.godocs_url = Some(url.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_rewrite(mut self, rule: RewriteRule) -> Self {
        self.rewrites.push(rule);
        self
    }
}

#[cfg(test)]
#[path = "deployment_test.rs"]
mod tests;
