use custos::application::check_service::CheckService;
use custos::domain::fixture::{ExpectedContent, FixturePath};
use custos::domain::ports::config::AppConfig;
use custos::error::AppError;
use custos::infra::file_system::FileSystemAdapter;
use custos::tracing::init_logging;
use log::info;

const ARTIFACT_NAME: &str = "passwords.txt";
const EXPECTED_SECRET: &str = "my_secret_passwor\n";

fn main() -> Result<(), AppError> {
    init_logging();
    log::info!("(log) Custos lancé");
    tracing::info!("(tracing) Vérification prête");
    // Configuration initiale
    let config = AppConfig::new(None)?;

    let artifact = FixturePath::new(ARTIFACT_NAME.to_string())?;
    let artifact_path = config.get_artifact_path(&artifact);

    let fs_adapter = FileSystemAdapter::new();
    let check_service = CheckService::new(fs_adapter);
    let expected = ExpectedContent::from_literal(EXPECTED_SECRET);

    info!("artifact check started");
    if let Err(e) = check_service.verify_artifact(&artifact_path, &expected) {
        eprintln!("Échec de la vérification : {e}");
        return Err(e);
    }

    println!("Artefact vérifié : {}", artifact_path.display());
    Ok(())
}
