// Serveur HTTP Rocket de démonstration pour le pipeline CI/CD:
// /health, /, /api/, /info, /metrics et des erreurs JSON pour 404/500
use tracing::info;

use cicd_app::AppConfig;
use cicd_app::common::logging::{self, events};

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(config.log_filter())?;

    info!(
        event = events::APP_START,
        environment = %config.mode,
        debug = config.debug(),
        address = %config.address,
        port = config.port,
        msg = %format!("Starting application in {} mode", config.mode),
    );

    // Display marque l'erreur Rocket comme traitée avant son drop
    cicd_app::build(&config)?
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("rocket launch failed: {e}"))?;

    info!(event = events::APP_SHUTDOWN, msg = "Server stopped");
    Ok(())
}
