use crate::error::AppError;

pub trait FileSystem {
    fn read_file(&self, path: &str) -> Result<Vec<u8>, AppError>;
    fn file_exists(&self, path: &str) -> bool;
    fn canonicalize_path(&self, path: &str) -> Result<String, AppError>;
}
