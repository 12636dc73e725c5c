use std::io;
use std::path::Path;
use std::sync::Arc;
use log::{debug, info};
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOptions, ConversionResult};
use crate::models::sink::{LogSink, ProgressSink};
use crate::utils::log_file::LogFileWriter;
use crate::utils::utils::{app_version_label, ProgressManager};

// 轉換執行的適配器：建立 runtime，將日誌與進度接到終端機和日誌檔
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionResult> {
        let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
        let facade: Box<dyn ConversionFacadeTrait> = Box::new(ConversionFacade::with_defaults());
        Ok(runtime.block_on(run_conversion(facade.as_ref(), &config)))
    }
}

pub async fn run_conversion(facade: &dyn ConversionFacadeTrait, config: &AppConfig) -> ConversionResult {
    let directory = Path::new(&config.directory);
    info!(
        "開始轉換，對象目錄：{}，刪除原始檔：{}",
        directory.display(),
        config.delete_originals
    );

    let progress = ProgressManager::new(config.no_progress);
    let writer = Arc::new(LogFileWriter::from_config(
        config.log_file.as_deref(),
        directory,
        config.directory_log,
    ));
    if !writer.is_empty() {
        info!("日誌檔：{:?}", writer.destinations());
    }

    let log_progress = progress.clone();
    let log_writer = Arc::clone(&writer);
    let on_log = LogSink::new_async(move |line: String| {
        let progress = log_progress.clone();
        let writer = Arc::clone(&log_writer);
        async move {
            progress.println(&line);
            writer.append(&line).await;
        }
    });

    let bar = progress.clone();
    let on_progress = ProgressSink::new(move |completed, total| {
        bar.update(completed, total);
        debug!("進度：{:.0}%", ProgressManager::percent(completed, total));
    });

    let options = ConversionOptions::new()
        .with_log(on_log)
        .with_progress(on_progress)
        .with_version_label(app_version_label());
    let input = ConversionInput {
        directory: directory.to_path_buf(),
        delete_originals: config.delete_originals,
    };

    let result = facade.execute_conversion(input, options).await;
    progress.finish(result.success_count(), result.fail_count());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use tempfile::TempDir;
    use crate::utils::log_file::DIRECTORY_LOG_NAME;

    fn config(directory: &Path, log_file: Option<std::path::PathBuf>) -> AppConfig {
        AppConfig {
            directory: directory.to_string_lossy().to_string(),
            delete_originals: true,
            no_progress: true,
            log_file,
            directory_log: true,
        }
    }

    #[tokio::test]
    async fn test_run_conversion_writes_both_logs() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("pictures");
        std::fs::create_dir(&target).unwrap();
        RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]))
            .save_with_format(target.join("a.bmp"), ImageFormat::Bmp)
            .unwrap();
        let global = temp.path().join("global.log");

        let facade = ConversionFacade::with_defaults();
        let result = run_conversion(&facade, &config(&target, Some(global.clone()))).await;

        assert!(result.is_full_success());
        assert!(!target.join("a.bmp").exists());

        let global_log = std::fs::read_to_string(&global).unwrap();
        let directory_log = std::fs::read_to_string(target.join(DIRECTORY_LOG_NAME)).unwrap();
        assert_eq!(global_log, directory_log);
        assert!(global_log.lines().next().unwrap().contains(&app_version_label()));
        assert!(global_log.contains("成功：a.bmp"));
        assert!(global_log.lines().last().unwrap().ends_with("轉換完成。"));
    }

    #[test]
    fn test_adapter_reports_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let result = ConversionAdapter.execute(config(&missing, None)).unwrap();

        assert_eq!(result.total(), 0);
        assert_eq!(result.fail_count(), 1);
    }
}
