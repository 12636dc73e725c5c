use std::io;
use std::path::PathBuf;
use crate::models::conversion::ConversionResult;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub directory: String,
    pub delete_originals: bool,
    pub no_progress: bool,
    pub log_file: Option<PathBuf>,
    pub directory_log: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionResult>;
}
