use stablecoin_gateway::catalog::Catalog;
use stablecoin_gateway::config::GatewayConfig;
use stablecoin_gateway::router::create_router;
use stablecoin_gateway::state::AppState;
use stablecoin_gateway::telemetry;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let config = GatewayConfig::from_env()?;
    telemetry::init_tracing(&config.log_filter);

    tracing::info!(service = %config.service_name, "Starting stablecoin API simulator");

    let catalog = Catalog::reference()?;
    let addr = config.socket_addr()?;
    let app = create_router(AppState::new(config, catalog));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
