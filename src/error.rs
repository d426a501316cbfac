use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Path error: {0}")]
    Path(ErrPath),
    #[error("Check error: {0}")]
    Check(ErrCheck),
}

#[derive(Debug, Error)]
pub enum ErrPath {
    #[error("Invalid path")]
    InvalidPath,
    #[error("File not found")]
    FileNotFound,
    #[error("Access denied")]
    AccessDenied,
    #[error("Read error")]
    ReadError,
    #[error("Directory not found")]
    DirectoryNotFound,
    #[error("Empty filename")]
    EmptyFilename,
    #[error("Forbidden characters")]
    ForbiddenCharacters,
}

#[derive(Debug, Error)]
pub enum ErrCheck {
    #[error("Missing artifact: {path}")]
    MissingFile { path: String },
    #[error("Content mismatch: expected {expected}, got {actual}")]
    ContentMismatch { expected: String, actual: String },
}
