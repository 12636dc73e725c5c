use std::io;
use std::time::Instant;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

/// 日誌行前綴用的時間（時:分:秒）
pub fn timestamp_now() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

pub fn format_log_line(message: &str) -> String {
    format!("[{}] {}", timestamp_now(), message)
}

pub fn app_version_label() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[derive(Clone)]
pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    // 總數要等列出檔案後才知道，先以 0 建立，第一次 update 再設定長度
    pub fn new(no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(0);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len} ({percent}%) ETA: {eta_precise}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn update(&self, completed: usize, total: usize) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        let speed = if elapsed > 0.0 { completed as f64 / elapsed } else { 0.0 };
        self.pb.set_length(total as u64);
        self.pb.set_position(completed as u64);
        self.pb.set_message(format!("轉換中：{:.1} 檔案/秒", speed));
    }

    /// 輸出一行文字而不打斷進度條
    pub fn println(&self, line: &str) {
        if self.no_progress {
            println!("{}", line);
        } else {
            self.pb.println(line);
        }
    }

    pub fn finish(&self, success_count: usize, fail_count: usize) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(format!("完成，成功 {} 個，失敗 {} 個", success_count, fail_count));
    }

    pub fn percent(completed: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            completed as f64 * 100.0 / total as f64
        }
    }
}

pub fn format_file_size(size: u64) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_has_clock_prefix() {
        let line = format_log_line("開始");
        assert!(line.starts_with('['));
        assert_eq!(&line[9..], "] 開始");
        let clock = &line[1..9];
        assert_eq!(clock.matches(':').count(), 2);
        assert!(clock.split(':').all(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "0.50 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_percent() {
        assert_eq!(ProgressManager::percent(0, 0), 0.0);
        assert_eq!(ProgressManager::percent(1, 4), 25.0);
        assert_eq!(ProgressManager::percent(4, 4), 100.0);
    }

    #[test]
    fn test_version_label_names_package() {
        let label = app_version_label();
        assert!(label.starts_with("bmp_to_png v"));
    }

    #[test]
    fn test_hidden_progress_ignores_updates() {
        let pm = ProgressManager::new(true);
        pm.update(1, 2);
        pm.finish(1, 1);
    }
}
