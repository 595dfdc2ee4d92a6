//! overlay ホスト共通の識別情報

use crate::deployment::DeploymentConfig;
use crate::host::HostKind;
use crate::remote::{strip_git_suffix, RemoteMatch};

/// overlay が載せ替える識別情報（`host/user/repository`）
///
/// どの primary ホストの remote から作られたかを `origin` に保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayIdentity {
    origin: HostKind,
    host: String,
    repository: String,
}

impl OverlayIdentity {
    /// 照合結果から生成
    ///
    /// 書き換えルールがあるホストは `owner/平坦化したリポジトリ名` になる。
    pub fn from_match(remote: &RemoteMatch, deployment: &DeploymentConfig) -> Self {
        let path = remote.raw_path();
        let repository = match deployment.rewrite_for(remote.host()) {
            Some(rule) => format!("{}/{}", rule.owner(), rule.apply(&path)),
            None => strip_git_suffix(&path).to_string(),
        };

        Self {
            origin: remote.provider(),
            host: remote.host().to_string(),
            repository,
        }
    }

    /// 社内デプロイメント由来か
    pub fn is_internal(&self) -> bool {
        self.origin == HostKind::Phabricator
    }

    /// `base/host/repository`
    pub fn url(&self, base: &str) -> String {
        format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            self.host,
            self.repository
        )
    }
}
