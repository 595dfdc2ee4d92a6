//! 結果の出力（表示・クリップボード・ブラウザ / コマンド実行）

use crate::error::{BrowseError, Result};
use crate::host::Rendered;
use log::{debug, warn};
use owo_colors::OwoColorize;
use std::io::Write;
use std::process::{Command, Stdio};

type ClipboardCommand = (&'static str, &'static [&'static str]);

/// 先に見つかったものを使う
const CLIPBOARD_COMMANDS: [ClipboardCommand; 3] = [
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
];

/// 出力先の設定
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// 表示のみ（ブラウザ起動・コマンド実行をしない）
    pub dry_run: bool,
    /// クリップボードにもコピーする
    pub copy: bool,
}

impl Output {
    pub fn new(dry_run: bool, copy: bool) -> Self {
        Self { dry_run, copy }
    }

    /// 結果を表示し、必要ならコピーして開く
    pub fn emit(&self, rendered: &Rendered) -> Result<()> {
        let text = rendered.to_string();
        println!("{}", text);

        if self.copy {
            match copy_with(&text, &CLIPBOARD_COMMANDS) {
                Some(tool) => {
                    debug!("copied with {}", tool);
                    eprintln!("{} Copied to clipboard", "✓".green());
                }
                None => warn!("no clipboard command available (tried pbcopy, wl-copy, xclip)"),
            }
        }

        if self.dry_run {
            return Ok(());
        }

        match rendered {
            Rendered::Url(url) => {
                opener::open(url).map_err(|e| BrowseError::BrowserLaunch(e.to_string()))
            }
            Rendered::Command(args) => run_command(args),
        }
    }
}

/// 候補を順に試してテキストを標準入力に流す。成功したコマンド名を返す
fn copy_with(text: &str, commands: &[ClipboardCommand]) -> Option<&'static str> {
    commands.iter().find_map(|(program, args)| {
        let mut child = Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .ok()?;

        let written = child
            .stdin
            .take()
            .map(|mut stdin| stdin.write_all(text.as_bytes()).is_ok())
            .unwrap_or(false);
        let status = child.wait().ok()?;

        (written && status.success()).then_some(*program)
    })
}

/// 引数列をそのまま実行する
fn run_command(args: &[String]) -> Result<()> {
    let (program, rest) = args
        .split_first()
        .ok_or_else(|| BrowseError::ReviewTool("empty command".to_string()))?;

    debug!("running {}", args.join(" "));
    let status = Command::new(program)
        .args(rest)
        .status()
        .map_err(|e| BrowseError::ReviewTool(format!("failed to run {}: {}", program, e)))?;

    if !status.success() {
        return Err(BrowseError::ReviewTool(format!(
            "`{}` exited with {}",
            args.join(" "),
            status
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
