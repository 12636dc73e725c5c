use std::io;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：保留原始檔、顯示進度、不寫日誌檔
pub struct DefaultConfigAdapter {
    directory: String,
}

impl DefaultConfigAdapter {
    pub fn new(directory: String) -> Self {
        DefaultConfigAdapter { directory }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            directory: self.directory.clone(),
            delete_originals: false,
            no_progress: false,
            log_file: None,
            directory_log: false,
        })
    }
}
