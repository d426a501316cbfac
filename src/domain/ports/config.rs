use std::env;
use std::path::PathBuf;

use crate::domain::fixture::FixturePath;
use crate::error::{AppError, ErrPath};

#[derive(Clone)]
pub struct AppConfig {
    pub base_directory: PathBuf,
}

impl AppConfig {
    pub fn new(custom_base_dir: Option<PathBuf>) -> Result<Self, AppError> {
        let base_directory = match custom_base_dir {
            Some(dir) => dir,
            None => {
                if let Some(env_dir) = Self::get_env_base_directory() {
                    env_dir
                } else {
                    Self::get_default_base_directory()?
                }
            }
        };

        Ok(Self { base_directory })
    }

    fn get_env_base_directory() -> Option<PathBuf> {
        env::var_os("CUSTOS_FIXTURE_DIR").map(PathBuf::from)
    }

    fn get_default_base_directory() -> Result<PathBuf, AppError> {
        env::current_dir().map_err(|_| AppError::Path(ErrPath::DirectoryNotFound))
    }

    pub fn get_artifact_path(&self, artifact: &FixturePath) -> PathBuf {
        self.base_directory.join(artifact.name.as_str())
    }
}
