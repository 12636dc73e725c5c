use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "bmp_to_png",
    version,
    about = "將目錄內的 .bmp 圖片批次轉換為 .png",
    long_about = "將指定目錄第一層的所有 .bmp 檔案轉換為同名的 .png 檔案（不進入子目錄）。\n加上 --delete-originals 時，只有在全部檔案都轉換成功後才會刪除原始 .bmp；只要有一個失敗，所有原始檔都會保留。\n不帶任何參數執行時進入互動模式。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 對象目錄
    pub input: String,
    #[arg(short, long, default_value_t = false)]
    pub delete_originals: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    /// 追加寫入所有日誌行的檔案
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// 同時寫入對象目錄內的 bmp_to_png.log
    #[arg(long, default_value_t = false)]
    pub dir_log: bool,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

/// 檢查日誌檔的上層目錄是否存在，避免轉換中途才發現無法寫入
pub fn validate_log_file(log_file: &Option<PathBuf>) -> io::Result<()> {
    if let Some(path) = log_file {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        if !parent.is_dir() {
            log::error!("日誌檔目錄不存在：{}", parent.display());
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("日誌檔目錄 '{}' 不存在", parent.display()),
            ));
        }
        if path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("日誌檔路徑 '{}' 是目錄", path.display()),
            ));
        }
    }
    Ok(())
}
