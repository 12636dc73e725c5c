use std::fs;
use std::io;
use std::path::Path;
use log::debug;
use walkdir::WalkDir;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::service::traits::i_service::FileServiceTrait;

/// 檔案服務，只處理目錄第一層，不進入子目錄
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

impl FileServiceTrait for FileService {
    fn collect_files(&self, input: FileCollectInput) -> io::Result<FileCollectOutput> {
        let mut files = Vec::new();
        let mut total_size = 0;

        let walker = WalkDir::new(&input.directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(io::Error::from)?;
            // 指向檔案的符號連結也算；斷掉的連結與目錄略過
            if !has_extension(entry.path(), &input.extension) || !entry.path().is_file() {
                continue;
            }
            total_size += fs::metadata(entry.path())?.len();
            files.push(entry.into_path());
        }

        debug!("在 {} 找到 {} 個 .{} 檔案", input.directory.display(), files.len(), input.extension);
        Ok(FileCollectOutput { files, total_size })
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}
