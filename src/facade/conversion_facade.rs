use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::debug;
use crate::error::{ConversionError, ImageServiceError};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOptions, ConversionResult};
use crate::models::file::FileCollectInput;
use crate::models::image::{ImageConvertInput, ImageConvertOutput};
use crate::models::sink::{BoxFuture, LogSink};
use crate::service::file::FileService;
use crate::service::image::ImageService;
use crate::service::traits::i_service::{FileServiceTrait, ImageServiceTrait};
use crate::utils::utils::{format_file_size, format_log_line};

pub const SOURCE_EXTENSION: &str = "bmp";
pub const TARGET_EXTENSION: &str = "png";

/// 批次轉換流程：列出 .bmp、逐一轉成 .png，全部成功時才刪除原始檔
///
/// 每個檔案的解碼與編碼在背景 worker 執行，但一次只處理一個檔案，
/// 等待完成後才進行下一個，日誌與進度的順序因此固定。
pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    image_service: Arc<dyn ImageServiceTrait>,
}

impl ConversionFacade {
    pub fn new(file_service: Box<dyn FileServiceTrait>, image_service: Arc<dyn ImageServiceTrait>) -> Self {
        ConversionFacade {
            file_service,
            image_service,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Box::new(FileService::new()), Arc::new(ImageService::new()))
    }

    pub async fn convert(&self, input: ConversionInput, options: ConversionOptions) -> ConversionResult {
        let logger = StepLogger::new(options.on_log.as_ref());
        let directory = input.directory.as_path();
        let mut result = ConversionResult::new();

        match options.version_label.as_deref() {
            Some(label) => logger.log(format!("開始處理（{}）…------------------------------", label)).await,
            None => logger.log("開始處理…------------------------------").await,
        }

        if !directory.is_dir() {
            logger.log(format!("指定的目錄不存在：{}", directory.display())).await;
            result.push_error(ConversionError::DirectoryNotFound {
                directory: directory.to_path_buf(),
            });
            return result;
        }

        let collected = match self.file_service.collect_files(FileCollectInput {
            directory: directory.to_path_buf(),
            extension: SOURCE_EXTENSION.to_string(),
        }) {
            Ok(collected) => collected,
            Err(e) => {
                logger.log(format!("無法讀取目錄 {}：{}", directory.display(), e)).await;
                result.push_error(ConversionError::EnumerationFailed {
                    directory: directory.to_path_buf(),
                    message: e.to_string(),
                });
                return result;
            }
        };

        if collected.files.is_empty() {
            logger.log("找不到對象 .bmp 檔案。").await;
            result.push_error(ConversionError::NoSourceFilesFound {
                directory: directory.to_path_buf(),
            });
            return result;
        }

        let total = collected.files.len();
        result.set_total(total);

        logger.log(format!("對象目錄：{}", directory.display())).await;
        logger.log(format!("對象檔案數：{} 件（{}）", total, format_file_size(collected.total_size))).await;
        logger.log("開始轉換").await;

        let mut converted: Vec<PathBuf> = Vec::with_capacity(total);
        // 每個輸出路徑只能屬於一個來源，否則後者會覆寫前者
        let mut claimed_targets: HashMap<PathBuf, String> = HashMap::with_capacity(total);
        for (index, source) in collected.files.iter().enumerate() {
            let file_name = file_name_of(source);
            logger.log(format!("轉換中：{}", file_name)).await;

            let target = source.with_extension(TARGET_EXTENSION);
            let outcome = match claimed_targets.get(&target) {
                Some(previous) => Err(ImageServiceError::TargetCollision {
                    path: target,
                    previous: previous.clone(),
                }),
                None => {
                    claimed_targets.insert(target.clone(), file_name.clone());
                    self.convert_one(source, target).await
                }
            };

            match outcome {
                Ok(output) => {
                    debug!("{} → {}（{}x{}）", source.display(), output.target_path.display(), output.width, output.height);
                    converted.push(source.clone());
                    logger.log(format!("成功：{}", file_name)).await;
                }
                Err(e) => {
                    logger.log(format!("失敗：{} → {}", file_name, e)).await;
                    result.push_error(ConversionError::ConversionFailure {
                        file: file_name,
                        message: e.to_string(),
                    });
                }
            }

            if let Some(progress) = options.on_progress.as_ref() {
                progress.emit(index + 1, total).await;
            }
        }

        result.set_success_count(converted.len());
        let full_success = result.success_count() == result.total();

        if !input.delete_originals {
            if full_success {
                logger.log("全部轉換成功").await;
            } else {
                logger.log(format!("失敗數：{} 件", result.fail_count())).await;
            }
            logger.log("轉換完成").await;
            return result;
        }

        if full_success {
            logger.log("全部成功，刪除原始 .bmp 檔案…").await;
            for source in &converted {
                let file_name = file_name_of(source);
                match self.file_service.remove_file(source) {
                    Ok(()) => logger.log(format!("刪除：{}", file_name)).await,
                    Err(e) => {
                        logger.log(format!("刪除失敗：{} → {}", file_name, e)).await;
                        result.push_error(ConversionError::DeletionFailure {
                            file: file_name,
                            message: e.to_string(),
                        });
                    }
                }
            }
        } else {
            logger.log(format!("失敗數：{} 件。保留原始 .bmp 檔案。", result.fail_count())).await;
        }

        logger.log("轉換完成。").await;
        result
    }

    // 在 blocking worker 上轉換單一檔案並確認輸出不是空檔
    async fn convert_one(&self, source: &Path, target: PathBuf) -> Result<ImageConvertOutput, ImageServiceError> {
        let image_service = Arc::clone(&self.image_service);
        let input = ImageConvertInput {
            source_path: source.to_path_buf(),
            target_path: target,
        };

        let output = tokio::task::spawn_blocking(move || image_service.convert_to_png(input))
            .await
            .map_err(|e| ImageServiceError::Worker(e.to_string()))??;

        let written = tokio::fs::metadata(&output.target_path).await?.len();
        debug!("{} 大小：{} 位元組", output.target_path.display(), written);
        if written == 0 {
            return Err(ImageServiceError::EmptyOutput {
                path: output.target_path,
            });
        }
        Ok(output)
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: ConversionInput, options: ConversionOptions) -> BoxFuture<'_, ConversionResult> {
        Box::pin(self.convert(input, options))
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

// 為每行加上時間前綴後交給日誌回呼，未提供回呼時不做任何事
struct StepLogger<'a> {
    sink: Option<&'a LogSink>,
}

impl<'a> StepLogger<'a> {
    fn new(sink: Option<&'a LogSink>) -> Self {
        StepLogger { sink }
    }

    async fn log(&self, message: impl Into<String>) {
        if let Some(sink) = self.sink {
            sink.emit(format_log_line(&message.into())).await;
        }
    }
}
