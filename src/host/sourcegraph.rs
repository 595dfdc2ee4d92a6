//! Sourcegraph overlay
//!
//! ブランチを持たないミラーなので、パスは `/-/tree/` `/-/blob/` の直下に置く。

use crate::deployment::DeploymentConfig;
use crate::error::Result;
use crate::focus::FocusObject;
use crate::host::overlay::OverlayIdentity;
use crate::host::unsupported;
use crate::remote::RemoteMatch;

pub const NAME: &str = "sourcegraph";

/// 公開 Sourcegraph
pub const PUBLIC_URL: &str = "https://sourcegraph.com/";

/// Sourcegraph ホスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcegraphHost {
    identity: OverlayIdentity,
    base_url: String,
}

impl SourcegraphHost {
    /// 照合結果から構築
    ///
    /// 社内 remote の場合はデプロイメント設定の `sourcegraph_url` が必須。
    pub fn create(remote: &RemoteMatch, deployment: &DeploymentConfig) -> Result<Self> {
        let identity = OverlayIdentity::from_match(remote, deployment);
        let base_url = if identity.is_internal() {
            deployment.internal_sourcegraph_url()?
        } else {
            PUBLIC_URL
        };

        Ok(Self {
            base_url: base_url.to_string(),
            identity,
        })
    }

    pub fn url(&self, focus: &FocusObject) -> Result<String> {
        let root = self.identity.url(&self.base_url);

        match focus {
            FocusObject::Root => Ok(root),
            FocusObject::Directory(path) => Ok(format!("{}/-/tree/{}", root, path)),
            FocusObject::File(path) => Ok(format!("{}/-/blob/{}", root, path)),
            FocusObject::Revision(hash) => Ok(format!("{}/-/commit/{}", root, hash)),
            FocusObject::ReviewReference(_) => Err(unsupported(NAME, focus)),
        }
    }
}
