use cicd_demo_service::config::AppConfig;
use cicd_demo_service::metrics::init_metrics;
use cicd_demo_service::observability::init_tracing;
use cicd_demo_service::startup::Application;
use cicd_demo_service::SERVICE_NAME;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(if config.debug { "debug" } else { "info" });

    let metrics_handle = init_metrics();

    tracing::info!("Starting {} v{}", SERVICE_NAME, config.app_version);
    tracing::info!("Environment: {}", config.environment);

    let host = config.host.clone();
    let app = Application::build(config, metrics_handle)
        .await
        .map_err(|e| {
            tracing::error!("Failed to build application: {}", e);
            std::io::Error::other(format!("Startup error: {}", e))
        })?;

    tracing::info!("Listening on {}:{}", host, app.port());

    app.run_until_stopped().await
}
