use std::path::PathBuf;
use crate::error::ConversionError;
use crate::models::sink::{LogSink, ProgressSink};

#[derive(Clone, Debug)]
pub struct ConversionInput {
    pub directory: PathBuf,
    pub delete_originals: bool,
}

// 轉換時可選的回呼與版本標籤，未提供時不做任何事
#[derive(Clone, Default)]
pub struct ConversionOptions {
    pub on_log: Option<LogSink>,
    pub on_progress: Option<ProgressSink>,
    pub version_label: Option<String>,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(mut self, sink: LogSink) -> Self {
        self.on_log = Some(sink);
        self
    }

    pub fn with_progress(mut self, sink: ProgressSink) -> Self {
        self.on_progress = Some(sink);
        self
    }

    pub fn with_version_label(mut self, label: impl Into<String>) -> Self {
        self.version_label = Some(label.into());
        self
    }
}

/// 單次批次轉換的結果
///
/// 欄位只能由轉換流程寫入，回傳後呼叫端只能讀取。
/// 失敗數一律由 `errors` 的長度推得，不另外儲存。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResult {
    total: usize,
    success_count: usize,
    errors: Vec<ConversionError>,
}

impl ConversionResult {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_total(&mut self, total: usize) {
        self.total = total;
    }

    pub(crate) fn set_success_count(&mut self, success_count: usize) {
        self.success_count = success_count;
    }

    pub(crate) fn push_error(&mut self, error: ConversionError) {
        self.errors.push(error);
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn success_count(&self) -> usize {
        self.success_count
    }

    pub fn fail_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ConversionError] {
        &self.errors
    }

    /// 依發生順序回傳錯誤訊息
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn conversion_failure_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_conversion_failure()).count()
    }

    /// 全部檔案皆轉換成功（不含刪除階段）
    pub fn is_full_success(&self) -> bool {
        self.total > 0 && self.success_count == self.total
    }
}
