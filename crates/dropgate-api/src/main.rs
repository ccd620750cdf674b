use dropgate_api::{setup, telemetry};
use dropgate_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    telemetry::init_telemetry()?;

    // Load configuration; missing storage credentials is fatal here, not at
    // request time.
    let config = Config::from_env()?;

    // Initialize the application (database, storage, routes)
    let (_state, router) = setup::initialize_app(config.clone()).await?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
