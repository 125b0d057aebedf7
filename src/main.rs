//! Server binary: reads config from env, prepares the database, serves the API.

use student_registry::{app, connect, ensure_tables, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_registry=info,tower_http=info")),
        )
        .init();

    let pool = connect(&config.database).await?;
    ensure_tables(&pool).await?;
    let state = AppState::new(pool);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(database_url = %config.database.url, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, &config)).await?;
    Ok(())
}
