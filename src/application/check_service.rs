use std::path::Path;

use zeroize::Zeroize;

use crate::{
    core::check,
    domain::{fixture::ExpectedContent, ports::fs::FileSystem},
    error::{AppError, ErrCheck},
    infra::file_system::FileSystemAdapter,
};

pub struct CheckService {
    fs: FileSystemAdapter,
}

impl CheckService {
    pub fn new(fs: FileSystemAdapter) -> Self {
        Self { fs }
    }

    /// Existence, then exact content. Reader-only: the artifact is never
    /// created, modified or removed here, so re-running the check without an
    /// intervening change to the file yields the same outcome.
    pub fn verify_artifact(
        &self,
        artifact_path: &Path,
        expected: &ExpectedContent,
    ) -> Result<(), AppError> {
        let location = artifact_path.to_string_lossy().into_owned();

        if !self.fs.file_exists(&location) {
            return Err(AppError::Check(ErrCheck::MissingFile { path: location }));
        }

        let mut observed = self.fs.read_file(&location)?;
        let outcome = check::compare(expected.bytes(), &observed);
        observed.zeroize();

        if outcome.is_ok() {
            tracing::debug!("artifact verified: {}", location);
        }
        outcome
    }
}
