//! テスト用リポジトリフィクスチャ

use super::*;
use git2::{Oid, Signature};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

/// 一時ディレクトリ上の Git リポジトリ
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// origin を指定してリポジトリを初期化
    pub fn with_origin(url: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        repo.remote("origin", url).unwrap();
        Self { dir, repo }
    }

    /// 作業ツリーのルート
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// ファイルを作成（親ディレクトリも作成）
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// ファイルを作成してコミット
    pub fn commit_file(&self, relative: &str, content: &str) -> Oid {
        self.write(relative, content);

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(relative)).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let signature = Signature::now("Test", "test@example.com").unwrap();

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, "commit", &tree, &parents)
            .unwrap()
    }

    /// 注釈付きタグを作成
    pub fn tag(&self, name: &str, target: Oid) -> Oid {
        let object = self.repo.find_object(target, None).unwrap();
        let signature = Signature::now("Test", "test@example.com").unwrap();
        self.repo.tag(name, &object, &signature, name, false).unwrap()
    }
}

/// 固定テーブルで解決するリビジョンリゾルバ
#[derive(Default)]
pub struct StaticRevisions {
    revisions: HashMap<String, String>,
}

impl StaticRevisions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解決可能なリビジョンを追加
    pub fn with(mut self, identifier: &str, hash: &str) -> Self {
        self.revisions.insert(identifier.to_string(), hash.to_string());
        self
    }
}

impl RevisionResolver for StaticRevisions {
    fn resolve_revision(&self, identifier: &str) -> Option<String> {
        self.revisions.get(identifier).cloned()
    }
}
