use directory_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenv::dotenv();

    let config = Config::from_env();

    init_logger(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;

    tracing::info!("Starting directory-server (env: {})", config.environment);
    tracing::info!(
        upstream = %config.employee_server_base_url,
        "Upstream employee directory"
    );

    let state = ServerState::initialize(&config);
    let server = Server::with_state(config, state);

    server.run().await
}
