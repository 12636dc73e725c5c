use std::io;
use std::path::Path;
use crate::error::ImageServiceError;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::models::image::{ImageConvertInput, ImageConvertOutput};

// File 服務接口，負責列出與刪除來源檔案
pub trait FileServiceTrait: Send + Sync {
    /// 收集目錄第一層中符合副檔名的檔案
    /// # 參數
    /// - input: 目錄與副檔名
    /// # 回傳
    /// - 成功時返回依檔名排序的檔案列表和總大小，失敗時返回 IO 錯誤
    fn collect_files(&self, input: FileCollectInput) -> io::Result<FileCollectOutput>;

    /// 刪除單一檔案
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

// Image 服務接口，負責 BMP 解碼與 PNG 編碼
pub trait ImageServiceTrait: Send + Sync {
    /// 將來源 BMP 轉換為 PNG 並寫入目標路徑
    /// # 參數
    /// - input: 來源與目標路徑
    /// # 回傳
    /// - 成功時返回輸出路徑與圖片尺寸，失敗時返回解碼、編碼或 IO 錯誤
    fn convert_to_png(&self, input: ImageConvertInput) -> Result<ImageConvertOutput, ImageServiceError>;
}
