//! GitHub

use crate::error::Result;
use crate::focus::FocusObject;
use crate::host::{unsupported, ForgeRepository, HostKind};

const BASE_URL: &str = "https://github.com";

/// GitHub ホスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubHost {
    repo: ForgeRepository,
}

impl GitHubHost {
    /// 新しいGitHubHostを作成
    pub fn new(repo: ForgeRepository) -> Self {
        Self { repo }
    }

    /// リポジトリ識別情報
    #[cfg(test)]
    pub fn repository(&self) -> &ForgeRepository {
        &self.repo
    }

    /// フォーカス対象の URL
    ///
    /// ディレクトリは `tree`、ファイルは `blob` 配下になる。
    pub fn url(&self, focus: &FocusObject) -> Result<String> {
        let root = self.repo.url(BASE_URL);
        let branch = self.repo.default_branch();

        match focus {
            FocusObject::Root => Ok(root),
            FocusObject::Directory(path) => Ok(format!("{}/tree/{}/{}", root, branch, path)),
            FocusObject::File(path) => Ok(format!("{}/blob/{}/{}", root, branch, path)),
            FocusObject::Revision(hash) => Ok(format!("{}/commit/{}", root, hash)),
            FocusObject::ReviewReference(_) => Err(unsupported(HostKind::GitHub.as_str(), focus)),
        }
    }
}

#[cfg(test)]
#[path = "github_test.rs"]
mod tests;
