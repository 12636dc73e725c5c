use dialoguer::{Confirm, Input};
use std::io;
use std::path::Path;

use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::models::conversion::ConversionResult;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> io::Result<ConversionResult> {
    setup_logging("info")?;
    println!("=== 歡迎使用互動模式 ===");
    let directory = get_directory_path()?;
    let use_default_config = get_default_config_option()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：保留原始 .bmp，顯示進度，不寫日誌檔");
        Box::new(DefaultConfigAdapter::new(directory))
    } else {
        Box::new(InteractiveConfigAdapter::new(directory))
    };

    let config = ConfigService::new(config_port).get_config()?;
    let result = ConversionAdapter.execute(config.clone())?;
    println!("實際使用的配置：{:#?}", config);
    Ok(result)
}

pub fn get_directory_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入包含 .bmp 檔案的目錄路徑（例如：./pictures）")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_dir() { Ok(()) } else { Err(format!("目錄 '{}' 不存在", input)) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_default_config_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（保留原始 .bmp、顯示進度、不寫日誌檔）")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("預設配置選擇失敗: {}", e)))
}

pub fn get_delete_originals_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("全部轉換成功後是否刪除原始 .bmp 檔案？（任一檔案失敗時一律保留）")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("刪除選項輸入失敗: {}", e)))
}

pub fn get_directory_log_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否將日誌寫入對象目錄內的 bmp_to_png.log？")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌選項輸入失敗: {}", e)))
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    directory: String,
}

impl InteractiveConfigAdapter {
    pub fn new(directory: String) -> Self {
        InteractiveConfigAdapter { directory }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let delete_originals = get_delete_originals_option()?;
        let directory_log = get_directory_log_option()?;

        Ok(AppConfig {
            directory: self.directory.clone(),
            delete_originals,
            no_progress: false,
            log_file: None,
            directory_log,
        })
    }
}
