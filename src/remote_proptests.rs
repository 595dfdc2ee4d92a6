use super::*;
use proptest::prelude::*;

fn matched(url: &str) -> RemoteMatch {
    match_remote(url, &DeploymentConfig::default()).unwrap()
}

/// owner/repo に使える文字列（英数字、ハイフン、アンダースコア）
fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,19}".prop_map(|s| s)
}

fn domain_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("github.com"), Just("gitlab.com"), Just("bitbucket.org")]
}

proptest! {
    /// SCP形式とHTTPS形式で同じ owner/repo が得られる
    #[test]
    fn prop_scp_and_https_produce_same_identity(
        domain in domain_strategy(),
        owner in valid_name_strategy(),
        repo in valid_name_strategy(),
        suffix in prop_oneof![Just(""), Just(".git")],
    ) {
        let scp = matched(&format!("git@{}:{}/{}{}", domain, owner, repo, suffix));
        let https = matched(&format!("https://{}/{}/{}", domain, owner, repo));
        let ssh = matched(&format!("ssh://git@{}/{}/{}{}", domain, owner, repo, suffix));

        prop_assert_eq!(scp.user(), Some(owner.as_str()));
        prop_assert_eq!(scp.user(), https.user());
        prop_assert_eq!(scp.user(), ssh.user());

        prop_assert_eq!(scp.repository(), repo.as_str());
        prop_assert_eq!(scp.repository(), https.repository());
        prop_assert_eq!(scp.repository(), ssh.repository());

        prop_assert_eq!(scp.provider(), https.provider());
        prop_assert_eq!(scp.host(), domain);
    }

    /// `.git` サフィックスは常に除去される
    #[test]
    fn prop_git_suffix_is_stripped(
        domain in domain_strategy(),
        owner in valid_name_strategy(),
        repo in valid_name_strategy(),
    ) {
        let remote = matched(&format!("git@{}:{}/{}.git", domain, owner, repo));
        prop_assert!(!remote.repository().ends_with(".git"));
        prop_assert_eq!(remote.repository(), repo.as_str());
    }

    /// gitolite 形式と社内 HTTPS 形式で同じパスが得られる
    #[test]
    fn prop_gitolite_and_internal_https_share_path(
        owner in valid_name_strategy(),
        repo in valid_name_strategy(),
        suffix in prop_oneof![Just(""), Just(".git")],
    ) {
        let deployment = DeploymentConfig::default().with_internal_host("code.example.com");
        let gitolite = match_remote(&format!("gitolite@code.example.com:{}/{}{}", owner, repo, suffix), &deployment).unwrap();
        let https = match_remote(&format!("https://code.example.com/{}/{}{}", owner, repo, suffix), &deployment).unwrap();

        prop_assert_eq!(gitolite.provider(), HostKind::Phabricator);
        prop_assert_eq!(https.provider(), HostKind::Phabricator);
        let gitolite_path = gitolite.raw_path();
        let https_path = https.raw_path();
        prop_assert_eq!(strip_git_suffix(&gitolite_path), strip_git_suffix(&https_path));
    }
}
