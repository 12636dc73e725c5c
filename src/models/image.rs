use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ImageConvertInput {
    pub source_path: PathBuf,
    pub target_path: PathBuf,
}

#[derive(Debug)]
pub struct ImageConvertOutput {
    pub target_path: PathBuf,
    pub width: u32,
    pub height: u32,
}
