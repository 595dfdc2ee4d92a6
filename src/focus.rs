//! ターゲット分類
//!
//! ユーザーが渡したターゲット文字列を、次の順で [`FocusObject`] に分類する。
//!
//! 1. 空文字列 → リポジトリルート
//! 2. 作業ツリー内に存在するパス → ディレクトリ / ファイル
//! 3. リビジョンとして解決できる → 完全なコミットハッシュ
//! 4. ホスト固有のレビュー参照（`D123` など）
//!
//! どれにも当てはまらなければ [`BrowseError::TargetNotFound`]。

use crate::error::{BrowseError, Result};
use crate::git::RevisionResolver;
use crate::host::Host;
use crate::path_ext::PathExt;
use log::debug;
use std::path::{Path, PathBuf};

/// 分類済みのターゲット
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusObject {
    /// リポジトリルート
    Root,
    /// ルートからの相対パス（末尾 `/` 付き）
    Directory(String),
    /// ルートからの相対パス
    File(String),
    /// 完全なコミットハッシュ
    Revision(String),
    /// ホスト固有のレビュー参照
    ReviewReference(String),
}

impl FocusObject {
    /// エラーメッセージ用の種別名
    pub fn description(&self) -> &'static str {
        match self {
            FocusObject::Root => "the repository root",
            FocusObject::Directory(_) => "directories",
            FocusObject::File(_) => "individual files",
            FocusObject::Revision(_) => "commits",
            FocusObject::ReviewReference(_) => "review references",
        }
    }
}

/// 分類に必要な文脈
pub struct ClassifyContext<'a> {
    /// ターゲットのパスを解決する基準ディレクトリ（絶対パス）
    pub search_path: &'a Path,
    pub repository_root: &'a Path,
    pub revisions: &'a dyn RevisionResolver,
    pub host: &'a Host,
}

/// 分類ステップ（一致しなければ `None`）
type Step = fn(&str, &Path, &ClassifyContext<'_>) -> Option<FocusObject>;

/// 評価順
const STEPS: [(&str, Step); 4] = [
    ("empty", classify_empty),
    ("path", classify_path),
    ("revision", classify_revision),
    ("review reference", classify_review_reference),
];

/// ターゲットを分類する
pub fn classify(target: &str, ctx: &ClassifyContext<'_>) -> Result<FocusObject> {
    let candidate = ctx.search_path.join(target).normalize();

    for (name, step) in STEPS {
        if let Some(focus) = step(target, &candidate, ctx) {
            debug!("target {:?} classified by {} step: {:?}", target, name, focus);
            return Ok(focus);
        }
    }

    Err(BrowseError::TargetNotFound(candidate))
}

fn classify_empty(target: &str, _: &Path, _: &ClassifyContext<'_>) -> Option<FocusObject> {
    target.is_empty().then_some(FocusObject::Root)
}

fn classify_path(_: &str, candidate: &Path, ctx: &ClassifyContext<'_>) -> Option<FocusObject> {
    if !candidate.exists() {
        return None;
    }

    // 作業ツリーの外は後続のステップに回す
    let relative: PathBuf = candidate.relative_to(ctx.repository_root)?;
    if relative.as_os_str().is_empty() {
        return Some(FocusObject::Root);
    }

    let path = relative.to_slash_string();
    if candidate.is_dir() {
        Some(FocusObject::Directory(format!("{}/", path)))
    } else {
        Some(FocusObject::File(path))
    }
}

fn classify_revision(target: &str, _: &Path, ctx: &ClassifyContext<'_>) -> Option<FocusObject> {
    ctx.revisions
        .resolve_revision(target)
        .map(FocusObject::Revision)
}

fn classify_review_reference(
    target: &str,
    _: &Path,
    ctx: &ClassifyContext<'_>,
) -> Option<FocusObject> {
    ctx.host
        .matches_review_reference(target)
        .then(|| FocusObject::ReviewReference(target.to_string()))
}

#[cfg(test)]
#[path = "focus_test.rs"]
mod tests;
