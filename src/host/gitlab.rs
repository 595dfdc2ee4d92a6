//! GitLab

use crate::error::Result;
use crate::focus::FocusObject;
use crate::host::{unsupported, ForgeRepository, HostKind};

const BASE_URL: &str = "https://gitlab.com";

/// GitLab ホスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitLabHost {
    repo: ForgeRepository,
}

impl GitLabHost {
    /// 新しいGitLabHostを作成
    pub fn new(repo: ForgeRepository) -> Self {
        Self { repo }
    }

    /// フォーカス対象の URL（`/-/` 区切りのルーティング）
    pub fn url(&self, focus: &FocusObject) -> Result<String> {
        let root = self.repo.url(BASE_URL);
        let branch = self.repo.default_branch();

        match focus {
            FocusObject::Root => Ok(root),
            FocusObject::Directory(path) => Ok(format!("{}/-/tree/{}/{}", root, branch, path)),
            FocusObject::File(path) => Ok(format!("{}/-/blob/{}/{}", root, branch, path)),
            FocusObject::Revision(hash) => Ok(format!("{}/-/commit/{}", root, hash)),
            FocusObject::ReviewReference(_) => Err(unsupported(HostKind::GitLab.as_str(), focus)),
        }
    }
}
