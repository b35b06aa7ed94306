use std::sync::Arc;

use sentinews::{api, app_state::AppState, config::Config, sentiment::GeminiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let model = GeminiClient::new(
        config.gemini_base_url(),
        config.gemini_model(),
        config.gemini_api_key(),
    );
    let state = AppState::new(Arc::new(model));
    let app = api::router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "news sentiment analyzer listening");
    axum::serve(listener, app).await?;

    Ok(())
}
