use std::env;

use anyhow::Result;
use askbot_api::build_app;
use askbot_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("askbot_api");

    let bind = env::var("ASKBOT_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = build_app()?;

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(bind = %bind, "askbot api started");

    axum::serve(listener, app).await?;
    Ok(())
}
