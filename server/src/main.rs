//! Books server: reads config from the environment, opens the pool, serves the books API.
//!
//! Run from repo root: `cargo run -p books-server`

use books_api::{app, connect, AppConfig, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("books_api=info,books_server=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = connect(&config).await?;
    let state = AppState::new(pool);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("books server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
