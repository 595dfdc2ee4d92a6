//! Godocs overlay
//!
//! パッケージ（ディレクトリ）単位のドキュメントしかないため、ファイルとコミットは扱えない。

use crate::deployment::DeploymentConfig;
use crate::error::Result;
use crate::focus::FocusObject;
use crate::host::overlay::OverlayIdentity;
use crate::host::unsupported;
use crate::remote::RemoteMatch;

pub const NAME: &str = "godocs";

/// 公開 Go パッケージドキュメント
pub const PUBLIC_URL: &str = "https://pkg.go.dev/";

/// Godocs ホスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GodocsHost {
    identity: OverlayIdentity,
    base_url: String,
}

impl GodocsHost {
    /// 照合結果から構築（社内 remote では `godocs_url` が必須）
    pub fn create(remote: &RemoteMatch, deployment: &DeploymentConfig) -> Result<Self> {
        let identity = OverlayIdentity::from_match(remote, deployment);
        let base_url = if identity.is_internal() {
            deployment.internal_godocs_url()?
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
            FocusObject::Directory(path) => Ok(format!("{}/{}", root, path)),
            FocusObject::File(_) | FocusObject::Revision(_) | FocusObject::ReviewReference(_) => {
                Err(unsupported(NAME, focus))
            }
        }
    }
}
