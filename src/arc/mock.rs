//! テスト用の記録付きレビューツール

use super::*;
use std::sync::RwLock;

/// 呼び出しを記録するレビューツール
pub struct RecordingTool {
    calls: RwLock<Vec<String>>,
    browse_output: String,
    fail_browse: bool,
    fail_set_browser: bool,
}

impl RecordingTool {
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            browse_output: String::new(),
            fail_browse: false,
            fail_set_browser: false,
        }
    }

    /// `browse` が返す出力を設定
    pub fn with_browse_output(mut self, output: &str) -> Self {
        self.browse_output = output.to_string();
        self
    }

    /// `browse` を失敗させる
    pub fn failing_browse(mut self) -> Self {
        self.fail_browse = true;
        self
    }

    /// `set_browser` を失敗させる
    pub fn failing_set_browser(mut self) -> Self {
        self.fail_set_browser = true;
        self
    }

    /// 記録された呼び出し（`arc` を除いた引数列）
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.write().unwrap().push(call);
    }
}

impl ReviewTool for RecordingTool {
    fn set_browser(&self, browser: &str) -> Result<()> {
        self.record(format!("set-config browser {}", browser));
        if self.fail_set_browser {
            return Err(BrowseError::ReviewTool("set-config failed".into()));
        }
        Ok(())
    }

    fn browse(&self, object: &str) -> Result<String> {
        self.record(format!("browse {}", object));
        if self.fail_browse {
            return Err(BrowseError::ReviewTool(format!("no such object: {}", object)));
        }
        Ok(self.browse_output.clone())
    }
}
