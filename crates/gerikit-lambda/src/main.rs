use tracing_subscriber::EnvFilter;

use gerikit_criteria::ReferenceTables;
use gerikit_lambda::config::ServiceConfig;
use gerikit_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env();

    let tables = match &config.reference_dir {
        Some(dir) => ReferenceTables::load(dir)?,
        None => {
            tracing::info!("no reference directory configured, using bundled tables");
            ReferenceTables::bundled().clone()
        }
    };

    tracing::info!(
        service = %config.service_name,
        analytics = config.analytics_enabled,
        "starting"
    );

    let app = gerikit_lambda::app(AppState::new(&config, tables));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
