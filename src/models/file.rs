use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct FileCollectInput {
    pub directory: PathBuf,
    pub extension: String,
}

#[derive(Debug)]
pub struct FileCollectOutput {
    pub files: Vec<PathBuf>,
    pub total_size: u64,
}
