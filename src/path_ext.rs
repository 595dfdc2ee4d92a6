//! Path 拡張トレイト
//!
//! 標準ライブラリの `Path` に便利メソッドを追加する。

use std::path::{Component, Path, PathBuf};

/// Path の拡張トレイト
pub trait PathExt {
    /// `.` と `..` を字句的に取り除く
    ///
    /// `canonicalize()` と違い、シンボリックリンクを解決せず、存在しないパスも扱える。
    /// ルートより上には遡らない。
    fn normalize(&self) -> PathBuf;

    /// `/` 区切りの文字列に変換（URL 用）
    fn to_slash_string(&self) -> String;

    /// `base` からの相対パス
    ///
    /// 両方を実体パスに解決してから比較する。`base` の外側、または解決できない場合は `None`。
    fn relative_to(&self, base: &Path) -> Option<PathBuf>;
}

impl PathExt for Path {
    fn normalize(&self) -> PathBuf {
        let mut components = Vec::new();
        for component in self.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match components.last() {
                    Some(Component::Normal(_)) => {
                        components.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => components.push(component),
                },
                _ => components.push(component),
            }
        }

        components.iter().collect()
    }

    fn to_slash_string(&self) -> String {
        self.components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    fn relative_to(&self, base: &Path) -> Option<PathBuf> {
        let path = self.canonicalize().ok()?;
        let base = base.canonicalize().ok()?;
        path.strip_prefix(&base).ok().map(Path::to_path_buf)
    }
}

#[cfg(test)]
#[path = "path_ext_test.rs"]
mod tests;
