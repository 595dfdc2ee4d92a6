//! Git リポジトリ情報
//!
//! 作業ツリーの探索、`remote.origin.url` の読み込み、リビジョンの解決を担当する。
//! `.git` ファイル（worktree / submodule）も libgit2 側で解決される。

use crate::error::{BrowseError, Result};
use git2::{Config, ErrorCode, Repository};
use log::debug;
use std::path::{Path, PathBuf};

/// remote URL のキー
const REMOTE_URL_KEY: &str = "remote.origin.url";

/// origin のデフォルトブランチを指すシンボリック参照
const ORIGIN_HEAD: &str = "refs/remotes/origin/HEAD";

/// デフォルトブランチが判別できない場合の値
pub const DEFAULT_BRANCH: &str = "master";

/// remote 設定
///
/// 1回の実行につき1度だけ生成され、以降は変更されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRemoteConfig {
    url: String,
    default_branch: String,
}

impl GitRemoteConfig {
    /// 新しいGitRemoteConfigを作成
    pub fn new(url: impl Into<String>, default_branch: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            default_branch: default_branch.into(),
        }
    }

    /// remote URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// デフォルトブランチ名
    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }
}

/// リビジョン解決
pub trait RevisionResolver {
    /// 識別子（ブランチ、タグ、短縮ハッシュ）を完全なコミットハッシュに展開する
    ///
    /// 解決できない場合は `None`。エラーにはしない。
    fn resolve_revision(&self, identifier: &str) -> Option<String>;
}

/// 作業ツリー付きの Git リポジトリ
pub struct GitRepository {
    repo: Repository,
    root: PathBuf,
}

impl GitRepository {
    /// `start` から親方向にリポジトリを探索
    pub fn discover(start: &Path) -> Result<Self> {
        let not_found = || BrowseError::RepositoryNotFound(start.to_path_buf());

        let repo = Repository::discover(start).map_err(|e| {
            debug!("repository discovery failed: {}", e);
            not_found()
        })?;
        let root = repo.workdir().ok_or_else(not_found)?.to_path_buf();

        debug!("repository root: {}", root.display());
        Ok(Self { repo, root })
    }

    /// 作業ツリーのルート
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// リポジトリローカルの設定ファイル
    pub fn config_path(&self) -> PathBuf {
        self.repo.commondir().join("config")
    }

    /// remote 設定を読み込む
    ///
    /// 同一キーの複数定義（`fetch` の複数行など）は許容する。
    pub fn remote_config(&self) -> Result<GitRemoteConfig> {
        let path = self.config_path();
        if !path.is_file() {
            return Err(BrowseError::unreadable(
                &path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "git config file not found"),
            ));
        }

        let config = Config::open(&path).map_err(|e| BrowseError::malformed(&path, e.message()))?;
        let url = match config.get_string(REMOTE_URL_KEY) {
            Ok(url) => url,
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(BrowseError::missing_key(&path, REMOTE_URL_KEY))
            }
            Err(e) => return Err(BrowseError::malformed(&path, e.message())),
        };

        debug!("remote url: {}", url);
        Ok(GitRemoteConfig::new(url, self.default_branch()?))
    }

    /// `refs/remotes/origin/HEAD` の参照先ブランチ（なければ `master`）
    fn default_branch(&self) -> Result<String> {
        let reference = match self.repo.find_reference(ORIGIN_HEAD) {
            Ok(reference) => reference,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(DEFAULT_BRANCH.to_string()),
            Err(e) => return Err(e.into()),
        };

        Ok(reference
            .symbolic_target()
            .and_then(|target| target.strip_prefix("refs/remotes/origin/"))
            .unwrap_or(DEFAULT_BRANCH)
            .to_string())
    }
}

impl RevisionResolver for GitRepository {
    fn resolve_revision(&self, identifier: &str) -> Option<String> {
        let object = self.repo.revparse_single(identifier).ok()?;
        let commit = object.peel_to_commit().ok()?;
        Some(commit.id().to_string())
    }
}

#[cfg(test)]
pub mod fixture;

#[cfg(test)]
#[path = "git_test.rs"]
mod tests;
