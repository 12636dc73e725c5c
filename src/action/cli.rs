use std::io;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{validate_log_file, Cli};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::models::conversion::ConversionResult;
use crate::service::config_service::ConfigService;
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<ConversionResult> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<ConversionResult> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli.clone())));
    let config = config_service.get_config()?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let result = conversion_port.execute(config.clone())?;

    // 若啟用 --show-config，在轉換後顯示配置
    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    Ok(result)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        // 對象目錄不存在時交由轉換流程回報，這裡只檢查日誌檔路徑
        validate_log_file(&self.cli.log_file)?;

        if self.cli.delete_originals {
            log::warn!("已啟用 --delete-originals：全部轉換成功後將刪除原始 .bmp 檔案");
        }

        Ok(AppConfig {
            directory: self.cli.input.clone(),
            delete_originals: self.cli.delete_originals,
            no_progress: self.cli.no_progress,
            log_file: self.cli.log_file.clone(),
            directory_log: self.cli.dir_log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_adapter_maps_flags() {
        let cli = Cli::try_parse_from(["bmp_to_png", "pictures", "--delete-originals", "--no-progress", "--dir-log"]).unwrap();
        let config = CliConfigAdapter::new(cli).get_config().unwrap();

        assert_eq!(
            config,
            AppConfig {
                directory: "pictures".to_string(),
                delete_originals: true,
                no_progress: true,
                log_file: None,
                directory_log: true,
            }
        );
    }

    #[test]
    fn test_cli_adapter_rejects_log_file_in_missing_directory() {
        let cli = Cli::try_parse_from(["bmp_to_png", "pictures", "--log-file", "/no/such/dir/run.log"]).unwrap();
        let err = CliConfigAdapter::new(cli).get_config().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_cli_adapter_keeps_log_file_path() {
        let cli = Cli::try_parse_from(["bmp_to_png", "pictures", "--log-file", "run.log"]).unwrap();
        let config = CliConfigAdapter::new(cli).get_config().unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
    }
}
