//! arc（Phabricator CLI）連携
//!
//! `arc browse` はブラウザ設定を `echo` にすると URL を開かずに標準出力へ書く。
//! この設定変更はユーザー環境への副作用なので、[`EchoBrowserGuard`] で必ず元に戻す。

use crate::error::{BrowseError, Result};
use log::{debug, warn};
use std::process::Command;

const ARC: &str = "arc";

/// 外部レビューツール
pub trait ReviewTool {
    /// `arc set-config browser <browser>`
    fn set_browser(&self, browser: &str) -> Result<()>;

    /// `arc browse <object>` の標準出力（前後の空白は除去）
    fn browse(&self, object: &str) -> Result<String>;
}

/// `arc` コマンド
pub struct ArcCli;

impl ArcCli {
    fn run(&self, args: &[&str]) -> Result<String> {
        debug!("running {} {}", ARC, args.join(" "));

        let output = Command::new(ARC)
            .args(args)
            .output()
            .map_err(|e| BrowseError::ReviewTool(format!("failed to run {}: {}", ARC, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BrowseError::ReviewTool(format!(
                "`{} {}` exited with {}: {}",
                ARC,
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl ReviewTool for ArcCli {
    fn set_browser(&self, browser: &str) -> Result<()> {
        self.run(&["set-config", "browser", browser]).map(|_| ())
    }

    fn browse(&self, object: &str) -> Result<String> {
        self.run(&["browse", object])
    }
}

/// ブラウザ設定を `echo` にしている間だけ生存するガード
///
/// drop 時に設定を空に戻す。戻せなかった場合は警告のみ。
pub struct EchoBrowserGuard<'a> {
    tool: &'a dyn ReviewTool,
}

impl<'a> EchoBrowserGuard<'a> {
    /// ブラウザ設定を `echo` に切り替える
    pub fn acquire(tool: &'a dyn ReviewTool) -> Result<Self> {
        tool.set_browser("echo")?;
        Ok(Self { tool })
    }
}

impl Drop for EchoBrowserGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.tool.set_browser("") {
            warn!("failed to reset arc browser setting: {}", e);
        }
    }
}

/// echo モードで `f` を実行する（成功・失敗にかかわらず設定を戻す）
pub fn with_echo_browser<T>(
    tool: &dyn ReviewTool,
    f: impl FnOnce(&dyn ReviewTool) -> Result<T>,
) -> Result<T> {
    let _guard = EchoBrowserGuard::acquire(tool)?;
    f(tool)
}

/// `arc browse <object>` の引数列
pub fn browse_command(object: &str) -> Vec<String> {
    vec![ARC.to_string(), "browse".to_string(), object.to_string()]
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "arc_test.rs"]
mod tests;
