//! Bitbucket

use crate::error::Result;
use crate::focus::FocusObject;
use crate::host::{unsupported, ForgeRepository, HostKind};

const BASE_URL: &str = "https://bitbucket.org";

/// Bitbucket ホスト
///
/// ファイルとディレクトリを区別せず、どちらも `src` 配下で表示する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitbucketHost {
    repo: ForgeRepository,
}

impl BitbucketHost {
    pub fn new(repo: ForgeRepository) -> Self {
        Self { repo }
    }

    pub fn url(&self, focus: &FocusObject) -> Result<String> {
        let root = self.repo.url(BASE_URL);

        match focus {
            FocusObject::Root => Ok(root),
            FocusObject::Directory(path) | FocusObject::File(path) => Ok(format!(
                "{}/src/{}/{}",
                root,
                self.repo.default_branch(),
                path
            )),
            FocusObject::Revision(hash) => Ok(format!("{}/commits/{}", root, hash)),
            FocusObject::ReviewReference(_) => {
                Err(unsupported(HostKind::Bitbucket.as_str(), focus))
            }
        }
    }
}
