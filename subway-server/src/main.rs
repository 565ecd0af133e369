use tracing::info;
use tracing_subscriber::EnvFilter;

use subway_server::config::ServerConfig;
use subway_server::store::SubwayStore;
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState::new(SubwayStore::new());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    let addr = listener.local_addr()?;
    info!("Subway server listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET    /health              - Health check");
    info!("  POST   /stations            - Create a station");
    info!("  GET    /stations            - List stations");
    info!("  GET    /stations/:id        - Show a station");
    info!("  DELETE /stations/:id        - Delete a station");
    info!("  POST   /lines               - Create a line");
    info!("  GET    /lines               - List lines");
    info!("  GET    /lines/:id           - Show a line");
    info!("  PUT    /lines/:id           - Update a line");
    info!("  DELETE /lines/:id           - Delete a line");
    info!("  POST   /lines/:id/sections  - Register a section");

    axum::serve(listener, app).await?;
    Ok(())
}
