//! Phabricator（gitolite / object config 系 remote）
//!
//! remote URL からはリポジトリパスしか取れないため、作業ツリー直下の
//! `.arcconfig` から API ベース URL、callsign、デフォルトブランチを読み込む。

use crate::arc::{self, ReviewTool};
use crate::error::{BrowseError, Result};
use crate::focus::FocusObject;
use crate::git::DEFAULT_BRANCH;
use crate::host::{RenderMode, Rendered};
use log::debug;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

/// サイド設定ファイル名
pub const ARCCONFIG_FILE: &str = ".arcconfig";

const URI_KEY: &str = "phabricator.uri";
const CALLSIGN_KEY: &str = "repository.callsign";

/// Differential リビジョン（`D123`）またはタスク（`T123`）
static REVIEW_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[DT][0-9]+$").expect("static regex"));

/// レビュー参照の構文に一致するか
pub fn is_review_reference(target: &str) -> bool {
    REVIEW_REFERENCE.is_match(target)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// `.arcconfig` の内容（未知のキーは無視）
#[derive(Debug, Deserialize)]
struct ArcConfig {
    #[serde(rename = "phabricator.uri")]
    phabricator_uri: Option<String>,
    conduit_uri: Option<String>,
    #[serde(rename = "repository.callsign")]
    callsign: Option<String>,
    #[serde(rename = "git.default-relative-commit")]
    default_relative_commit: Option<String>,
}

/// Phabricator ホスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhabricatorHost {
    base_url: String,
    callsign: String,
    default_branch: String,
}

impl PhabricatorHost {
    /// 新しいPhabricatorHostを作成
    pub fn new(
        base_url: impl Into<String>,
        callsign: impl Into<String>,
        default_branch: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            callsign: callsign.into(),
            default_branch: default_branch.into(),
        }
    }

    /// `<root>/.arcconfig` から構築
    ///
    /// ファイルがない、JSON として不正、必須キーがない場合はそれぞれ別のエラーになる。
    pub fn create(repository_root: &Path) -> Result<Self> {
        let path = repository_root.join(ARCCONFIG_FILE);
        let content =
            std::fs::read_to_string(&path).map_err(|e| BrowseError::unreadable(&path, e))?;
        let config: ArcConfig =
            serde_json::from_str(&content).map_err(|e| BrowseError::malformed(&path, e))?;

        // 空文字列は未設定と同じ扱い
        let base_url = [&config.phabricator_uri, &config.conduit_uri]
            .into_iter()
            .find_map(|uri| non_empty(uri.as_deref().map(|u| u.trim_end_matches('/'))))
            .ok_or_else(|| BrowseError::missing_key(&path, URI_KEY))?;
        let callsign = non_empty(config.callsign.as_deref())
            .ok_or_else(|| BrowseError::missing_key(&path, CALLSIGN_KEY))?;

        // "origin/master" のような remote/branch 形式はブランチ部分だけを使う
        let default_branch = config
            .default_relative_commit
            .as_deref()
            .map(|commit| commit.split_once('/').map_or(commit, |(_, branch)| branch))
            .filter(|branch| !branch.is_empty())
            .unwrap_or(DEFAULT_BRANCH);

        debug!("loaded {}: callsign {}", path.display(), callsign);
        Ok(Self::new(base_url, callsign, default_branch))
    }

    /// API / ブラウズのベース URL（末尾 `/` なし）
    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    #[cfg(test)]
    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }

    /// URL もしくは `arc browse` コマンドを生成
    pub fn render(
        &self,
        focus: &FocusObject,
        mode: RenderMode,
        tool: &dyn ReviewTool,
    ) -> Result<Rendered> {
        match mode {
            RenderMode::Command => Ok(Rendered::Command(arc::browse_command(
                &Self::browse_object(focus),
            ))),
            RenderMode::Url => self.url(focus, tool).map(Rendered::Url),
        }
    }

    /// `arc browse` に渡すオブジェクト
    fn browse_object(focus: &FocusObject) -> String {
        match focus {
            FocusObject::Root => ".".to_string(),
            FocusObject::Directory(path) | FocusObject::File(path) => path.clone(),
            FocusObject::Revision(hash) => hash.clone(),
            FocusObject::ReviewReference(token) => token.clone(),
        }
    }

    fn url(&self, focus: &FocusObject, tool: &dyn ReviewTool) -> Result<String> {
        let diffusion = format!("{}/diffusion/{}", self.base_url, self.callsign);

        match focus {
            FocusObject::Root => Ok(format!(
                "{}/repository/{}/",
                diffusion, self.default_branch
            )),
            FocusObject::Directory(path) | FocusObject::File(path) => Ok(format!(
                "{}/browse/{}/{}",
                diffusion, self.default_branch, path
            )),
            FocusObject::Revision(hash) => {
                Ok(format!("{}/r{}{}", self.base_url, self.callsign, hash))
            }
            // レビュー URL は arc にしか分からないので echo モードで問い合わせる
            FocusObject::ReviewReference(token) => {
                arc::with_echo_browser(tool, |review| review.browse(token))
            }
        }
    }
}

#[cfg(test)]
#[path = "phabricator_test.rs"]
mod tests;
