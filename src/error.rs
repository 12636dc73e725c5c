use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 批次轉換過程中記錄在結果內的錯誤，每一筆對應一行錯誤訊息
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 指定的目錄不存在
    #[error("目錄不存在：{}", .directory.display())]
    DirectoryNotFound { directory: PathBuf },

    /// 目錄內沒有任何 .bmp 檔案
    #[error("找不到對象 .bmp 檔案：{}", .directory.display())]
    NoSourceFilesFound { directory: PathBuf },

    /// 無法列出目錄內容
    #[error("無法讀取目錄 {}：{message}", .directory.display())]
    EnumerationFailed { directory: PathBuf, message: String },

    /// 單一檔案轉換失敗
    #[error("{file}: {message}")]
    ConversionFailure { file: String, message: String },

    /// 全部轉換成功後，刪除原始檔案失敗
    #[error("{file} 刪除失敗: {message}")]
    DeletionFailure { file: String, message: String },
}

impl ConversionError {
    /// 是否為轉換階段的失敗（不含刪除失敗與前置條件錯誤）
    pub fn is_conversion_failure(&self) -> bool {
        matches!(self, ConversionError::ConversionFailure { .. })
    }

    pub fn is_deletion_failure(&self) -> bool {
        matches!(self, ConversionError::DeletionFailure { .. })
    }
}

/// 圖片服務在解碼、編碼或寫檔時的錯誤
#[derive(Debug, Error)]
pub enum ImageServiceError {
    #[error("圖片解碼或編碼失敗：{0}")]
    Image(#[from] image::ImageError),

    #[error("檔案存取失敗：{0}")]
    Io(#[from] io::Error),

    #[error("輸出的 PNG 大小為 0 位元組：{}", .path.display())]
    EmptyOutput { path: PathBuf },

    #[error("轉換工作執行失敗：{0}")]
    Worker(String),

    /// 同一批次中另一個來源已寫出相同的 PNG（例如 a.bmp 與 a.BMP）
    #[error("輸出 {} 已由 {previous} 產生", .path.display())]
    TargetCollision { path: PathBuf, previous: String },
}
