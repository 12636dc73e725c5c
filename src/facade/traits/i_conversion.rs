use crate::models::conversion::{ConversionInput, ConversionOptions, ConversionResult};
use crate::models::sink::BoxFuture;

// Facade 接口，負責協調整個批次轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 轉換目錄內所有 .bmp 檔案，必要時刪除原始檔
    /// # 參數
    /// - input: 對象目錄與是否刪除原始檔
    /// - options: 日誌、進度回呼與版本標籤
    /// # 回傳
    /// - 永遠返回轉換結果，所有錯誤都記錄在結果內
    fn execute_conversion(&self, input: ConversionInput, options: ConversionOptions) -> BoxFuture<'_, ConversionResult>;
}
