//! ホスト別 URL 生成
//!
//! GitHub, Bitbucket, GitLab, Phabricator の primary ホストと、解決済みの識別情報を
//! 別サイトの URL 空間に載せ替える overlay ホスト（Sourcegraph, Godocs）。
//!
//! ## 使い方
//!
//! ```ignore
//! let remote = remote::match_remote("git@github.com:acme/widgets.git", &deployment)?;
//! let host = Host::resolve(&remote, None, &ctx)?;
//! let rendered = host.render(&FocusObject::Root, RenderMode::Url, &ArcCli)?;
//! assert_eq!(rendered.to_string(), "https://github.com/acme/widgets");
//! ```

pub mod bitbucket;
pub mod github;
pub mod gitlab;
pub mod godocs;
pub mod overlay;
pub mod phabricator;
pub mod sourcegraph;

pub use bitbucket::BitbucketHost;
pub use github::GitHubHost;
pub use gitlab::GitLabHost;
pub use godocs::GodocsHost;
pub use phabricator::PhabricatorHost;
pub use sourcegraph::SourcegraphHost;

use crate::arc::ReviewTool;
use crate::deployment::DeploymentConfig;
use crate::error::{BrowseError, Result};
use crate::focus::FocusObject;
use crate::git::GitRemoteConfig;
use crate::remote::RemoteMatch;
use log::debug;
use std::path::Path;

/// ホスト種別
///
/// overlay ホストはどの primary ホストに重ねているかをこの値で保持する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    GitHub,
    Bitbucket,
    GitLab,
    Phabricator,
}

impl HostKind {
    /// ホスト名を返す
    pub fn as_str(&self) -> &'static str {
        match self {
            HostKind::GitHub => "github",
            HostKind::Bitbucket => "bitbucket",
            HostKind::GitLab => "gitlab",
            HostKind::Phabricator => "phabricator",
        }
    }
}

impl std::fmt::Display for HostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// overlay ホスト種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Sourcegraph,
    Godocs,
}

/// レンダリングモード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// URL を生成する
    #[default]
    Url,
    /// 外部ツールのコマンドを生成する（Phabricator のみ）
    Command,
}

/// レンダリング結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Url(String),
    Command(Vec<String>),
}

impl std::fmt::Display for Rendered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rendered::Url(url) => write!(f, "{}", url),
            Rendered::Command(args) => write!(f, "{}", args.join(" ")),
        }
    }
}

/// GitHub / Bitbucket / GitLab 共通のリポジトリ識別情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeRepository {
    user: String,
    repository: String,
    default_branch: String,
}

impl ForgeRepository {
    /// 新しいForgeRepositoryを作成
    pub fn new(
        user: impl Into<String>,
        repository: impl Into<String>,
        default_branch: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            repository: repository.into(),
            default_branch: default_branch.into(),
        }
    }

    /// 照合結果から生成（user グループ必須）
    pub fn from_match(remote: &RemoteMatch, config: &GitRemoteConfig) -> Result<Self> {
        let user = remote
            .user()
            .ok_or_else(|| BrowseError::UnrecognizedRemoteFormat(config.url().to_string()))?;
        Ok(Self::new(user, remote.repository(), config.default_branch()))
    }

    /// オーナー名
    #[cfg(test)]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// リポジトリ名（`.git` 除去済み）
    #[cfg(test)]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// デフォルトブランチ
    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }

    /// `base/user/repository`
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}/{}", base, self.user, self.repository)
    }
}

/// Host 構築に必要な文脈
pub struct HostContext<'a> {
    pub remote: &'a GitRemoteConfig,
    pub repository_root: &'a Path,
    pub deployment: &'a DeploymentConfig,
}

/// 解決済みのホスト
///
/// 構築時にすべてのフィールドが確定する。構築に失敗した場合は何も返さない。
#[derive(Debug, Clone)]
pub enum Host {
    GitHub(GitHubHost),
    Bitbucket(BitbucketHost),
    GitLab(GitLabHost),
    Phabricator(PhabricatorHost),
    Sourcegraph(SourcegraphHost),
    Godocs(GodocsHost),
}

impl Host {
    /// 照合結果からホストを構築
    pub fn resolve(
        remote: &RemoteMatch,
        overlay: Option<OverlayKind>,
        ctx: &HostContext<'_>,
    ) -> Result<Self> {
        let host = match overlay {
            Some(OverlayKind::Sourcegraph) => {
                Host::Sourcegraph(SourcegraphHost::create(remote, ctx.deployment)?)
            }
            Some(OverlayKind::Godocs) => Host::Godocs(GodocsHost::create(remote, ctx.deployment)?),
            None => match remote.provider() {
                HostKind::GitHub => {
                    Host::GitHub(GitHubHost::new(ForgeRepository::from_match(remote, ctx.remote)?))
                }
                HostKind::Bitbucket => Host::Bitbucket(BitbucketHost::new(
                    ForgeRepository::from_match(remote, ctx.remote)?,
                )),
                HostKind::GitLab => {
                    Host::GitLab(GitLabHost::new(ForgeRepository::from_match(remote, ctx.remote)?))
                }
                HostKind::Phabricator => {
                    Host::Phabricator(PhabricatorHost::create(ctx.repository_root)?)
                }
            },
        };

        debug!("resolved host: {}", host.name());
        Ok(host)
    }

    /// ホスト名
    pub fn name(&self) -> &'static str {
        match self {
            Host::GitHub(_) => HostKind::GitHub.as_str(),
            Host::Bitbucket(_) => HostKind::Bitbucket.as_str(),
            Host::GitLab(_) => HostKind::GitLab.as_str(),
            Host::Phabricator(_) => HostKind::Phabricator.as_str(),
            Host::Sourcegraph(_) => sourcegraph::NAME,
            Host::Godocs(_) => godocs::NAME,
        }
    }

    /// ホスト固有のレビュー参照（`D123` など）として解釈できるか
    pub fn matches_review_reference(&self, target: &str) -> bool {
        match self {
            Host::Phabricator(_) => phabricator::is_review_reference(target),
            _ => false,
        }
    }

    /// フォーカス対象を URL（またはコマンド）に変換
    pub fn render(
        &self,
        focus: &FocusObject,
        mode: RenderMode,
        tool: &dyn ReviewTool,
    ) -> Result<Rendered> {
        match self {
            Host::GitHub(host) => host.url(focus).map(Rendered::Url),
            Host::Bitbucket(host) => host.url(focus).map(Rendered::Url),
            Host::GitLab(host) => host.url(focus).map(Rendered::Url),
            Host::Phabricator(host) => host.render(focus, mode, tool),
            Host::Sourcegraph(host) => host.url(focus).map(Rendered::Url),
            Host::Godocs(host) => host.url(focus).map(Rendered::Url),
        }
    }
}

/// 未対応の組み合わせ
pub(crate) fn unsupported(host: &'static str, focus: &FocusObject) -> BrowseError {
    BrowseError::UnsupportedOperation {
        host,
        operation: focus.description(),
    }
}

#[cfg(test)]
#[path = "host_test.rs"]
mod tests;
