//! CLI integration tests (dry-run only, no browser)

use assert_cmd::prelude::*;
use git2::{Oid, Repository, Signature};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

struct Fixture {
    home: TempDir,
    dir: TempDir,
    repo: Repository,
}

impl Fixture {
    fn new(origin: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        repo.remote("origin", origin).unwrap();
        Self {
            home: TempDir::new().unwrap(),
            dir,
            repo,
        }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn commit(&self, relative: &str, content: &str) -> Oid {
        self.write(relative, content);
        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(relative)).unwrap();
        index.write().unwrap();
        let tree = self.repo.find_tree(index.write_tree().unwrap()).unwrap();
        let signature = Signature::now("Test", "test@example.com").unwrap();
        self.repo
            .commit(Some("HEAD"), &signature, &signature, "initial", &tree, &[])
            .unwrap()
    }

    fn arcconfig(&self) {
        self.write(
            ".arcconfig",
            r#"{"phabricator.uri": "https://example.com/", "repository.callsign": "ABCD"}"#,
        );
    }

    fn deployment(&self, json: &str) {
        let config = self.home.path().join(".git-browse/config.json");
        fs::create_dir_all(config.parent().unwrap()).unwrap();
        fs::write(config, json).unwrap();
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("git-browse").unwrap();
        cmd.current_dir(self.root())
            .env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("GIT_BROWSE_CONFIG")
            .env_remove("GIT_BROWSE_LOG")
            .env_remove("RUST_LOG")
            .arg("--dry-run");
        cmd
    }
}

#[test]
fn test_github_root() {
    let fixture = Fixture::new("git@github.com:acme/widgets.git");

    fixture
        .cmd()
        .assert()
        .success()
        .stdout("https://github.com/acme/widgets\n");
}

#[test]
fn test_github_file() {
    let fixture = Fixture::new("https://github.com/acme/widgets");
    fixture.write("README.md", "# widgets");

    fixture
        .cmd()
        .arg("README.md")
        .assert()
        .success()
        .stdout("https://github.com/acme/widgets/blob/master/README.md\n");
}

#[test]
fn test_bitbucket_directory() {
    let fixture = Fixture::new("git@bitbucket.org:acme/widgets");
    fixture.write("docs/index.md", "docs");

    fixture
        .cmd()
        .arg("docs")
        .assert()
        .success()
        .stdout("https://bitbucket.org/acme/widgets/src/master/docs/\n");
}

#[test]
fn test_target_relative_to_path_option() {
    let fixture = Fixture::new("git@gitlab.com:acme/widgets.git");
    fixture.write("src/host/github.rs", "");

    fixture
        .cmd()
        .args(["--path", "src", "host"])
        .assert()
        .success()
        .stdout("https://gitlab.com/acme/widgets/-/tree/master/src/host/\n");
}

#[test]
fn test_phabricator_root() {
    let fixture = Fixture::new("gitolite@code.example.com:infra/tools");
    fixture.arcconfig();

    fixture
        .cmd()
        .assert()
        .success()
        .stdout("https://example.com/diffusion/ABCD/repository/master/\n");
}

#[test]
fn test_phabricator_https_remote_on_internal_host() {
    let fixture = Fixture::new("https://code.example.com/infra/tools.git");
    fixture.arcconfig();
    fixture.deployment(r#"{"internal_hosts": ["code.example.com"]}"#);

    fixture
        .cmd()
        .assert()
        .success()
        .stdout("https://example.com/diffusion/ABCD/repository/master/
");
}

#[test]
fn test_https_remote_on_unlisted_host_is_unrecognized() {
    let fixture = Fixture::new("https://code.example.com/infra/tools.git");
    fixture.arcconfig();

    fixture
        .cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[VAL001]"));
}

#[test]
fn test_phabricator_revision_uses_full_hash() {
    let fixture = Fixture::new("gitolite@code.example.com:infra/tools");
    fixture.arcconfig();
    let commit = fixture.commit("README.md", "# tools").to_string();

    fixture
        .cmd()
        .arg(&commit[..8])
        .assert()
        .success()
        .stdout(format!("https://example.com/rABCD{}\n", commit));
}

#[test]
fn test_github_tag_resolves_to_commit() {
    let fixture = Fixture::new("git@github.com:acme/widgets.git");
    let commit = fixture.commit("README.md", "# widgets");
    let object = fixture.repo.find_object(commit, None).unwrap();
    let signature = Signature::now("Test", "test@example.com").unwrap();
    fixture
        .repo
        .tag("v1.0", &object, &signature, "v1.0", false)
        .unwrap();

    fixture
        .cmd()
        .arg("v1.0")
        .assert()
        .success()
        .stdout(format!("https://github.com/acme/widgets/commit/{}\n", commit));
}

#[test]
fn test_phabricator_command_mode() {
    let fixture = Fixture::new("gitolite@code.example.com:infra/tools");
    fixture.arcconfig();
    fixture.write("README.md", "# tools");

    fixture
        .cmd()
        .args(["--arc", "README.md"])
        .assert()
        .success()
        .stdout("arc browse README.md\n");
}

#[test]
fn test_phabricator_missing_arcconfig() {
    let fixture = Fixture::new("gitolite@code.example.com:infra/tools");

    fixture
        .cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[CFG001]"));
}

#[test]
fn test_sourcegraph_directory() {
    let fixture = Fixture::new("git@github.com:acme/widgets.git");
    fixture.write("src/lib.rs", "");

    fixture
        .cmd()
        .args(["--sourcegraph", "src"])
        .assert()
        .success()
        .stdout("https://sourcegraph.com/github.com/acme/widgets/-/tree/src/\n");
}

#[test]
fn test_sourcegraph_over_phabricator_uses_deployment_config() {
    let fixture = Fixture::new("gitolite@code.example.internal:infra/tools");
    fixture.deployment(r#"{"sourcegraph_url": "https://sg.example.internal/"}"#);

    fixture
        .cmd()
        .arg("-s")
        .assert()
        .success()
        .stdout("https://sg.example.internal/code.example.internal/infra/tools\n");
}

#[test]
fn test_godocs_rejects_files() {
    let fixture = Fixture::new("git@github.com:acme/widgets.git");
    fixture.write("main.go", "package main");

    fixture
        .cmd()
        .args(["--godocs", "main.go"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[VAL003]"))
        .stderr(predicate::str::contains(
            "Cannot look up individual files in godocs",
        ));
}

#[test]
fn test_overlay_flags_are_mutually_exclusive() {
    let outside = TempDir::new().unwrap();

    // リポジトリ外でも探索前に終了する
    Command::cargo_bin("git-browse")
        .unwrap()
        .current_dir(outside.path())
        .args(["-s", "-g"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sourcegraph and Godocs flags are mutually exclusive",
        ));
}

#[test]
fn test_unrecognized_remote() {
    let fixture = Fixture::new("svn://example.com/widgets");

    fixture
        .cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[VAL001]"))
        .stderr(predicate::str::contains("svn://example.com/widgets"));
}

#[test]
fn test_target_not_found() {
    let fixture = Fixture::new("git@github.com:acme/widgets.git");

    fixture
        .cmd()
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[VAL002]"))
        .stderr(predicate::str::contains("no-such-file.txt"));
}

#[test]
fn test_outside_repository() {
    let outside = TempDir::new().unwrap();

    Command::cargo_bin("git-browse")
        .unwrap()
        .current_dir(outside.path())
        .env("NO_COLOR", "1")
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[GIT001]"));
}

#[test]
fn test_verbose_error_shows_remediation() {
    let fixture = Fixture::new("svn://example.com/widgets");

    fixture
        .cmd()
        .arg("--verbose")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Remediation:"));
}

#[test]
fn test_help() {
    Command::cargo_bin("git-browse")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--sourcegraph"))
        .stdout(predicate::str::contains("--godocs"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version() {
    Command::cargo_bin("git-browse")
        .unwrap()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
