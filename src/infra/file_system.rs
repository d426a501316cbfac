use crate::domain::ports::fs::FileSystem;
use crate::error::{AppError, ErrPath};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct FileSystemAdapter;

impl FileSystemAdapter {
    pub fn new() -> Self {
        FileSystemAdapter
    }
}

impl Default for FileSystemAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for FileSystemAdapter {
    fn read_file(&self, path: &str) -> Result<Vec<u8>, AppError> {
        fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AppError::Path(ErrPath::FileNotFound),
            std::io::ErrorKind::PermissionDenied => AppError::Path(ErrPath::AccessDenied),
            _ => AppError::Path(ErrPath::ReadError),
        })
    }

    fn file_exists(&self, path: &str) -> bool {
        // A directory at the artifact location does not count as the artifact.
        Path::new(path).is_file()
    }

    fn canonicalize_path(&self, path: &str) -> Result<String, AppError> {
        let path_buf = PathBuf::from(path);
        match path_buf.canonicalize() {
            Ok(canonical_path) => Ok(canonical_path.to_string_lossy().into_owned()),
            Err(_) => Err(AppError::Path(ErrPath::InvalidPath)),
        }
    }
}
