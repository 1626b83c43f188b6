use std::sync::Arc;

use clap::Parser;
use poem::{listener::TcpListener, Server};

use ewaste_backend::api::build_app;
use ewaste_backend::cli::{self, Cli, Commands};
use ewaste_backend::config::{
    init_logging, BootstrapSettings, DatabaseConnections, RecordRules, SystemEnvironment,
};
use ewaste_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    let bootstrap_settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded settings: {:?}", bootstrap_settings);

    match cli.command() {
        Commands::Migrate => cli::migrate::run_migrations(&bootstrap_settings).await,
        Commands::Analytics => {
            let app_data = init_app_data(&bootstrap_settings).await?;
            cli::analytics::print_analytics(app_data).await
        }
        Commands::Serve => {
            let app_data = init_app_data(&bootstrap_settings).await?;
            serve(app_data, &bootstrap_settings).await
        }
    }
}

/// Connect, migrate and build the shared application data
async fn init_app_data(
    bootstrap_settings: &BootstrapSettings,
) -> Result<Arc<AppData>, Box<dyn std::error::Error>> {
    let connections = DatabaseConnections::init(bootstrap_settings).await?;
    connections.migrate().await?;

    let rules = RecordRules::from_env_provider(Arc::new(SystemEnvironment))?;
    tracing::debug!(
        "Upload limits: image {} bytes, document {} bytes",
        rules.image_max_bytes,
        rules.document_max_bytes
    );

    let app_data = AppData::init(connections, bootstrap_settings, rules).await?;
    Ok(Arc::new(app_data))
}

async fn serve(
    app_data: Arc<AppData>,
    bootstrap_settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(app_data, &bootstrap_settings.api_base_url());
    let address = bootstrap_settings.server_address();

    tracing::info!("Starting server on http://{}", address);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger",
        bootstrap_settings.server_port()
    );

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
