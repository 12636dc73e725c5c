use std::path::{Path, PathBuf};
use log::warn;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

pub const DIRECTORY_LOG_NAME: &str = "bmp_to_png.log";

/// 將日誌行以 UTF-8 追加到一或多個檔案，每行一筆
#[derive(Debug, Clone, Default)]
pub struct LogFileWriter {
    destinations: Vec<PathBuf>,
}

impl LogFileWriter {
    pub fn new(destinations: Vec<PathBuf>) -> Self {
        LogFileWriter { destinations }
    }

    /// 依設定組出目的地；目錄日誌只在對象目錄存在時啟用
    pub fn from_config(log_file: Option<&Path>, directory: &Path, directory_log: bool) -> Self {
        let mut destinations = Vec::new();
        if let Some(path) = log_file {
            destinations.push(path.to_path_buf());
        }
        if directory_log && directory.is_dir() {
            destinations.push(directory.join(DIRECTORY_LOG_NAME));
        }
        LogFileWriter { destinations }
    }

    pub fn destinations(&self) -> &[PathBuf] {
        &self.destinations
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    // 單一目的地寫入失敗只記警告，不影響其他目的地
    pub async fn append(&self, line: &str) {
        for path in &self.destinations {
            if let Err(e) = append_line(path, line).await {
                warn!("寫入日誌檔 {} 失敗: {}", path.display(), e);
            }
        }
    }
}

async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path).await?;
    file.write_all(format!("{}\n", line).as_bytes()).await?;
    file.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_appends_to_every_destination() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("global.log");
        let target = temp.path().join("pictures");
        std::fs::create_dir(&target).unwrap();

        let writer = LogFileWriter::from_config(Some(&global), &target, true);
        assert_eq!(writer.destinations().len(), 2);

        writer.append("[10:00:00] 第一行").await;
        writer.append("[10:00:01] second").await;

        let expected = "[10:00:00] 第一行\n[10:00:01] second\n";
        assert_eq!(std::fs::read_to_string(&global).unwrap(), expected);
        assert_eq!(std::fs::read_to_string(target.join(DIRECTORY_LOG_NAME)).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("global.log");
        std::fs::write(&global, "old\n").unwrap();

        let writer = LogFileWriter::new(vec![global.clone()]);
        writer.append("new").await;

        assert_eq!(std::fs::read_to_string(&global).unwrap(), "old\nnew\n");
    }

    #[tokio::test]
    async fn test_missing_directory_skips_directory_log() {
        let temp = TempDir::new().unwrap();
        let writer = LogFileWriter::from_config(None, &temp.path().join("missing"), true);
        assert!(writer.is_empty());
    }

    #[tokio::test]
    async fn test_unwritable_destination_does_not_stop_others() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.log");
        let bad = temp.path().join("no-such-dir/bad.log");

        let writer = LogFileWriter::new(vec![bad.clone(), good.clone()]);
        writer.append("line").await;

        assert!(!bad.exists());
        assert_eq!(std::fs::read_to_string(&good).unwrap(), "line\n");
    }
}
