//! リモート URL 文法レジストリ
//!
//! remote URL を優先順位付きの文法テーブルに順に照合し、最初に一致した文法から
//! ホスト種別と識別情報（host / user / repository）を取り出す。
//!
//! ## 対応フォーマット
//!
//! - `git@github.com:owner/repo.git` - SCP形式
//! - `https://github.com/owner/repo` - HTTPS
//! - `ssh://git@github.com/owner/repo` - SSH URL
//! - `https://account@bitbucket.org/owner/repo` - Bitbucket のアカウント付きHTTPS
//! - `gitolite@code.example.com:path/to/repo` - gitolite（Phabricator）
//! - `https://code.example.com/owner/repo` - 社内ホストのHTTPS（Phabricator、デプロイメント設定で指定したホストのみ）
//! - `oc://objectconfig/path/to/repo` - object config（Phabricator）
//!
//! GitLab / Bitbucket も GitHub と同じ3形式に対応する。

use crate::deployment::DeploymentConfig;
use crate::error::{BrowseError, Result};
use crate::host::HostKind;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

const USER: &str = r"(?P<user>[\w\.@:/~_-]+)";
const REPOSITORY: &str = r"(?P<repository>[\w\.@:/~_-]+)";
const ACCOUNT: &str = r"(?P<account>[\w\.@:/~_-]+)";
const ANY_HOST: &str = r"(?P<host>[\w\.-]+)";

/// 文法の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    GitHubScp,
    GitHubHttps,
    GitHubSsh,
    BitbucketScp,
    BitbucketAccountHttps,
    BitbucketHttps,
    BitbucketSsh,
    GitLabScp,
    GitLabHttps,
    GitLabSsh,
    PhabricatorHttps,
    GitoliteScp,
    ObjectConfig,
}

/// 照合の優先順位
///
/// 先頭から順に照合し、最初に一致した文法を採用する。
pub const GRAMMARS: [Grammar; 13] = [
    Grammar::GitHubScp,
    Grammar::GitHubHttps,
    Grammar::GitHubSsh,
    Grammar::BitbucketScp,
    Grammar::BitbucketAccountHttps,
    Grammar::BitbucketHttps,
    Grammar::BitbucketSsh,
    Grammar::GitLabScp,
    Grammar::GitLabHttps,
    Grammar::GitLabSsh,
    Grammar::PhabricatorHttps,
    Grammar::GitoliteScp,
    Grammar::ObjectConfig,
];

impl Grammar {
    /// この文法が属するホスト種別
    pub fn provider(&self) -> HostKind {
        match self {
            Grammar::GitHubScp | Grammar::GitHubHttps | Grammar::GitHubSsh => HostKind::GitHub,
            Grammar::BitbucketScp
            | Grammar::BitbucketAccountHttps
            | Grammar::BitbucketHttps
            | Grammar::BitbucketSsh => HostKind::Bitbucket,
            Grammar::GitLabScp | Grammar::GitLabHttps | Grammar::GitLabSsh => HostKind::GitLab,
            Grammar::PhabricatorHttps | Grammar::GitoliteScp | Grammar::ObjectConfig => {
                HostKind::Phabricator
            }
        }
    }

    /// 社内ホストとして登録されたホストにだけ一致させる文法か
    ///
    /// 汎用の HTTPS 形式は任意のホストに一致してしまうため。
    fn requires_internal_host(&self) -> bool {
        matches!(self, Grammar::PhabricatorHttps)
    }

    /// 正規表現パターン
    fn pattern(&self) -> String {
        let domain = match self.provider() {
            HostKind::GitHub => r"(?P<host>github\.com)",
            HostKind::Bitbucket => r"(?P<host>bitbucket\.org)",
            HostKind::GitLab => r"(?P<host>gitlab\.com)",
            HostKind::Phabricator => ANY_HOST,
        };

        match self {
            Grammar::GitHubScp | Grammar::BitbucketScp | Grammar::GitLabScp => {
                format!("git@{}:{}/{}", domain, USER, REPOSITORY)
            }
            Grammar::GitHubHttps
            | Grammar::BitbucketHttps
            | Grammar::GitLabHttps
            | Grammar::PhabricatorHttps => {
                format!("https://{}/{}/{}", domain, USER, REPOSITORY)
            }
            Grammar::GitHubSsh | Grammar::BitbucketSsh | Grammar::GitLabSsh => {
                format!("ssh://git@{}/{}/{}", domain, USER, REPOSITORY)
            }
            Grammar::BitbucketAccountHttps => {
                format!("https://{}@{}/{}/{}", ACCOUNT, domain, USER, REPOSITORY)
            }
            Grammar::GitoliteScp => format!("gitolite@{}:{}", domain, REPOSITORY),
            Grammar::ObjectConfig => format!("oc://{}/{}", domain, REPOSITORY),
        }
    }
}

/// コンパイル済みの文法テーブル（優先順位順）
static REGISTRY: LazyLock<Vec<(Grammar, Regex)>> = LazyLock::new(|| {
    GRAMMARS
        .iter()
        .map(|grammar| {
            let regex = Regex::new(&grammar.pattern()).expect("grammar patterns are static");
            (*grammar, regex)
        })
        .collect()
});

/// 文法の照合結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteMatch {
    grammar: Grammar,
    host: String,
    user: Option<String>,
    repository: String,
}

impl RemoteMatch {
    /// 一致した文法
    #[cfg(test)]
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// 一致した文法のホスト種別
    pub fn provider(&self) -> HostKind {
        self.grammar.provider()
    }

    /// ホスト名（github.com など）
    pub fn host(&self) -> &str {
        &self.host
    }

    /// ユーザー / オーナー（gitolite 系にはない）
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// `user/repository`（user がなければ repository のみ）。`.git` は残す
    pub fn raw_path(&self) -> String {
        match &self.user {
            Some(user) => format!("{}/{}", user, self.repository),
            None => self.repository.clone(),
        }
    }

    /// 末尾の `.git` を除去したリポジトリ名
    pub fn repository(&self) -> &str {
        strip_git_suffix(&self.repository)
    }
}

/// 末尾の `.git` を除去
pub fn strip_git_suffix(repository: &str) -> &str {
    repository.strip_suffix(".git").unwrap_or(repository)
}

/// remote URL を文法テーブルに照合する
///
/// 社内ホストの判定にはデプロイメント設定を使う。
pub fn match_remote(url: &str, deployment: &DeploymentConfig) -> Result<RemoteMatch> {
    for (grammar, regex) in REGISTRY.iter() {
        let Some(captures) = regex.captures(url) else {
            continue;
        };

        let group = |name: &str| captures.name(name).map(|m| m.as_str().to_string());
        let (Some(host), Some(repository)) = (group("host"), group("repository")) else {
            continue;
        };
        if grammar.requires_internal_host() && !deployment.is_internal_host(&host) {
            continue;
        }

        debug!("remote {} matched grammar {:?}", url, grammar);
        return Ok(RemoteMatch {
            grammar: *grammar,
            host,
            user: group("user"),
            repository,
        });
    }

    Err(BrowseError::UnrecognizedRemoteFormat(url.to_string()))
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;

#[cfg(test)]
#[path = "remote_proptests.rs"]
mod proptests;
