#[cfg(test)]
mod tests {
    use std::{
        env,
        path::PathBuf,
        sync::{Mutex, OnceLock},
    };

    use crate::domain::{fixture::FixturePath, ports::config::AppConfig};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env<'a>() -> std::sync::MutexGuard<'a, ()> {
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("lock poisoned")
    }

    #[test]
    fn uses_env_fixture_dir_when_set() {
        let _guard = lock_env();
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        unsafe {
            env::set_var("CUSTOS_FIXTURE_DIR", temp_dir.path());
        }

        let config = AppConfig::new(None).expect("Failed to build config with env dir");

        unsafe {
            env::remove_var("CUSTOS_FIXTURE_DIR");
        }

        assert_eq!(config.base_directory, PathBuf::from(temp_dir.path()));
    }

    #[test]
    fn custom_dir_wins_over_env() {
        let _guard = lock_env();
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        unsafe {
            env::set_var("CUSTOS_FIXTURE_DIR", "/somewhere/else");
        }

        let config = AppConfig::new(Some(temp_dir.path().to_path_buf()))
            .expect("Failed to build config with custom dir");

        unsafe {
            env::remove_var("CUSTOS_FIXTURE_DIR");
        }

        assert_eq!(config.base_directory, temp_dir.path());
    }

    #[test]
    fn defaults_to_current_directory() {
        let _guard = lock_env();
        unsafe {
            env::remove_var("CUSTOS_FIXTURE_DIR");
        }

        let config = AppConfig::new(None).expect("Failed to build default config");

        assert_eq!(
            config.base_directory,
            env::current_dir().expect("current dir")
        );
    }

    #[test]
    fn artifact_path_joins_base_directory() {
        let _guard = lock_env();
        let config =
            AppConfig::new(Some(PathBuf::from("/srv/fixtures"))).expect("config with custom dir");
        let artifact = FixturePath::new("passwords.txt".to_string()).expect("valid name");

        assert_eq!(
            config.get_artifact_path(&artifact),
            PathBuf::from("/srv/fixtures/passwords.txt")
        );
    }
}
