use clap::Parser;
use log::debug;
use std::path::PathBuf;

use crate::arc::ArcCli;
use crate::deployment::DeploymentConfig;
use crate::env::EnvVar;
use crate::error::Result;
use crate::focus::{self, ClassifyContext};
use crate::git::GitRepository;
use crate::host::{Host, HostContext, OverlayKind, RenderMode};
use crate::output::Output;
use crate::path_ext::PathExt;
use crate::remote;

/// `--sourcegraph` と `--godocs` の同時指定
pub const EXCLUSIVE_OVERLAYS: &str = "Sourcegraph and Godocs flags are mutually exclusive";

#[derive(Debug, Parser)]
#[command(name = "git-browse")]
#[command(about = "Open the current repository, a path, a commit or a review in the browser")]
#[command(version, disable_version_flag = true, long_about = None)]
pub struct Cli {
    /// File, directory, revision or review id to open (defaults to the repository root)
    pub target: Option<String>,

    /// Search path used for repository discovery and relative targets
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Print the url without opening the browser
    #[arg(short, long)]
    pub dry_run: bool,

    /// Copy the url to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Open objects in Sourcegraph
    #[arg(short, long)]
    pub sourcegraph: bool,

    /// Open objects in Godocs
    #[arg(short, long)]
    pub godocs: bool,

    /// Open Phabricator objects through `arc browse`
    #[arg(long)]
    pub arc: bool,

    /// Show debug logs and detailed errors
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    /// 選択された overlay（同時指定は呼び出し前に弾く）
    fn overlay(&self) -> Option<OverlayKind> {
        match (self.sourcegraph, self.godocs) {
            (true, _) => Some(OverlayKind::Sourcegraph),
            (_, true) => Some(OverlayKind::Godocs),
            _ => None,
        }
    }

    fn render_mode(&self) -> RenderMode {
        if self.arc {
            RenderMode::Command
        } else {
            RenderMode::Url
        }
    }
}

/// ロガーを初期化
///
/// `GIT_BROWSE_LOG`、`RUST_LOG` の順に参照し、どちらもなければ `--verbose` で debug、通常は warn。
pub fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvVar::get(EnvVar::LOG_FILTER)
        .or_else(|| EnvVar::get(EnvVar::RUST_LOG))
        .unwrap_or_else(|| default.to_string());

    env_logger::builder()
        .parse_filters(&filter)
        .format_timestamp(Some(env_logger::TimestampPrecision::Millis))
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    if cli.sourcegraph && cli.godocs {
        println!("{}", EXCLUSIVE_OVERLAYS);
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let search_path = match &cli.path {
        Some(path) => cwd.join(path).normalize(),
        None => cwd,
    };
    debug!("search path: {}", search_path.display());

    let repo = GitRepository::discover(&search_path)?;
    let remote_config = repo.remote_config()?;
    let deployment = DeploymentConfig::load()?;
    let remote = remote::match_remote(remote_config.url(), &deployment)?;

    let overlay = cli.overlay();

    let host = Host::resolve(
        &remote,
        overlay,
        &HostContext {
            remote: &remote_config,
            repository_root: repo.root(),
            deployment: &deployment,
        },
    )?;

    let target = cli.target.as_deref().unwrap_or_default();
    let focus = focus::classify(
        target,
        &ClassifyContext {
            search_path: &search_path,
            repository_root: repo.root(),
            revisions: &repo,
            host: &host,
        },
    )?;

    let rendered = host.render(&focus, cli.render_mode(), &ArcCli)?;
    debug!("rendered: {}", rendered);

    Output::new(cli.dry_run, cli.copy).emit(&rendered)
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
