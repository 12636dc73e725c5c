use std::fs::File;
use std::io::{BufWriter, Write};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageEncoder, ImageFormat, ImageReader};
use log::debug;
use crate::error::ImageServiceError;
use crate::models::image::{ImageConvertInput, ImageConvertOutput};
use crate::service::traits::i_service::ImageServiceTrait;

/// 圖片服務，以 image crate 解碼 BMP 並編碼為 PNG
pub struct ImageService {
    compression: CompressionType,
}

impl ImageService {
    pub fn new() -> Self {
        ImageService {
            compression: CompressionType::Default,
        }
    }

    pub fn with_compression(compression: CompressionType) -> Self {
        ImageService { compression }
    }
}

impl Default for ImageService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageServiceTrait for ImageService {
    fn convert_to_png(&self, input: ImageConvertInput) -> Result<ImageConvertOutput, ImageServiceError> {
        // 先完成解碼，解碼失敗時不會留下輸出檔
        let mut reader = ImageReader::open(&input.source_path)?;
        reader.set_format(ImageFormat::Bmp);
        let img = reader.decode()?;

        let file = File::create(&input.target_path)?;
        let mut writer = BufWriter::new(file);
        let encoder = PngEncoder::new_with_quality(&mut writer, self.compression, FilterType::Adaptive);
        encoder.write_image(img.as_bytes(), img.width(), img.height(), img.color().into())?;
        writer.flush()?;

        debug!(
            "已編碼 {} → {}（{}x{}）",
            input.source_path.display(),
            input.target_path.display(),
            img.width(),
            img.height()
        );

        Ok(ImageConvertOutput {
            target_path: input.target_path,
            width: img.width(),
            height: img.height(),
        })
    }
}
