use super::*;
use crate::deployment::RewriteRule;

fn matched(url: &str) -> Result<RemoteMatch> {
    match_remote(url, &DeploymentConfig::default())
}

// === GitHub ===

#[test]
fn test_match_github_scp() {
    let remote = matched("git@github.com:acme/widgets.git").unwrap();
    assert_eq!(remote.grammar(), Grammar::GitHubScp);
    assert_eq!(remote.provider(), HostKind::GitHub);
    assert_eq!(remote.host(), "github.com");
    assert_eq!(remote.user(), Some("acme"));
    assert_eq!(remote.repository(), "widgets");
    assert_eq!(remote.raw_path(), "acme/widgets.git");
}

#[test]
fn test_match_github_https() {
    let remote = matched("https://github.com/acme/widgets").unwrap();
    assert_eq!(remote.grammar(), Grammar::GitHubHttps);
    assert_eq!(remote.user(), Some("acme"));
    assert_eq!(remote.repository(), "widgets");
}

#[test]
fn test_match_github_ssh_url() {
    let remote = matched("ssh://git@github.com/acme/widgets.git").unwrap();
    assert_eq!(remote.grammar(), Grammar::GitHubSsh);
    assert_eq!(remote.user(), Some("acme"));
    assert_eq!(remote.repository(), "widgets");
}

// === Bitbucket ===

#[test]
fn test_match_bitbucket_scp() {
    let remote = matched("git@bitbucket.org:acme/widgets").unwrap();
    assert_eq!(remote.provider(), HostKind::Bitbucket);
    assert_eq!(remote.user(), Some("acme"));
    assert_eq!(remote.repository(), "widgets");
}

#[test]
fn test_match_bitbucket_https_with_account() {
    let remote = matched("https://someone@bitbucket.org/acme/widgets.git").unwrap();
    assert_eq!(remote.grammar(), Grammar::BitbucketAccountHttps);
    assert_eq!(remote.user(), Some("acme"));
    assert_eq!(remote.repository(), "widgets");
}

#[test]
fn test_match_bitbucket_https_without_account() {
    let remote = matched("https://bitbucket.org/acme/widgets").unwrap();
    assert_eq!(remote.grammar(), Grammar::BitbucketHttps);
    assert_eq!(remote.user(), Some("acme"));
}

// === GitLab ===

#[test]
fn test_match_gitlab_subgroup() {
    let remote = matched("git@gitlab.com:group/subgroup/widgets.git").unwrap();
    assert_eq!(remote.provider(), HostKind::GitLab);
    assert_eq!(remote.user(), Some("group/subgroup"));
    assert_eq!(remote.repository(), "widgets");
}

// === Phabricator 系 ===

#[test]
fn test_match_gitolite_has_no_user() {
    let remote = matched("gitolite@code.example.com:infra/widgets").unwrap();
    assert_eq!(remote.grammar(), Grammar::GitoliteScp);
    assert_eq!(remote.provider(), HostKind::Phabricator);
    assert_eq!(remote.host(), "code.example.com");
    assert_eq!(remote.user(), None);
    assert_eq!(remote.repository(), "infra/widgets");
}

#[test]
fn test_match_internal_https_host() {
    let deployment = DeploymentConfig::default().with_internal_host("code.example.com");
    let remote = match_remote("https://code.example.com/infra/widgets.git", &deployment).unwrap();
    assert_eq!(remote.grammar(), Grammar::PhabricatorHttps);
    assert_eq!(remote.provider(), HostKind::Phabricator);
    assert_eq!(remote.user(), Some("infra"));
    assert_eq!(remote.repository(), "widgets");
    assert_eq!(remote.raw_path(), "infra/widgets.git");
}

#[test]
fn test_https_host_not_listed_as_internal_is_unrecognized() {
    let result = matched("https://code.example.com/infra/widgets");
    assert!(matches!(
        result,
        Err(BrowseError::UnrecognizedRemoteFormat(_))
    ));
}

#[test]
fn test_rewrite_host_counts_as_internal() {
    let deployment = DeploymentConfig::default()
        .with_rewrite(RewriteRule::new("code.example.com", "mirror"));
    let remote = match_remote("https://code.example.com/infra/widgets", &deployment).unwrap();
    assert_eq!(remote.provider(), HostKind::Phabricator);
}

#[test]
fn test_internal_host_does_not_shadow_github() {
    let deployment = DeploymentConfig::default().with_internal_host("github.com");
    let remote = match_remote("https://github.com/acme/widgets", &deployment).unwrap();
    assert_eq!(remote.grammar(), Grammar::GitHubHttps);
}

#[test]
fn test_match_object_config() {
    let remote = matched("oc://objectconfig/team/service").unwrap();
    assert_eq!(remote.grammar(), Grammar::ObjectConfig);
    assert_eq!(remote.host(), "objectconfig");
    assert_eq!(remote.repository(), "team/service");
}

// === 優先順位 ===

#[test]
fn test_grammar_order_is_fixed() {
    assert_eq!(GRAMMARS[0], Grammar::GitHubScp);
    assert_eq!(GRAMMARS[GRAMMARS.len() - 1], Grammar::ObjectConfig);
    let gitolite = GRAMMARS.iter().position(|g| *g == Grammar::GitoliteScp).unwrap();
    let github = GRAMMARS.iter().position(|g| *g == Grammar::GitHubHttps).unwrap();
    let internal = GRAMMARS.iter().position(|g| *g == Grammar::PhabricatorHttps).unwrap();
    assert!(github < gitolite);
    assert!(github < internal);
}

#[test]
fn test_account_name_does_not_affect_provider() {
    // アカウント名が github でも Bitbucket として扱う
    let remote = matched("https://github@bitbucket.org/acme/widgets").unwrap();
    assert_eq!(remote.grammar(), Grammar::BitbucketAccountHttps);
}

// === エラーケース ===

#[test]
fn test_unrecognized_remote() {
    let result = matched("svn://example.com/widgets");
    match result {
        Err(BrowseError::UnrecognizedRemoteFormat(url)) => {
            assert_eq!(url, "svn://example.com/widgets")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_empty_remote() {
    assert!(matched("").is_err());
}

#[test]
fn test_strip_git_suffix_only_at_end() {
    assert_eq!(strip_git_suffix("widgets.git"), "widgets");
    assert_eq!(strip_git_suffix("widgets.github"), "widgets.github");
    assert_eq!(strip_git_suffix("widgets"), "widgets");
}
