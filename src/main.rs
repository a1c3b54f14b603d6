use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use krisai_gateway::{
    config::{GatewayConfig, SYSTEM_INSTRUCTION},
    routes,
    services::gemini::GeminiClient,
    services::session_manager::ChatSession,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,krisai_gateway=debug")),
        )
        .init();

    let config = GatewayConfig::from_env().context("loading configuration")?;
    let provider = GeminiClient::new(&config).context("building Gemini client")?;
    tracing::info!(model = provider.model(), "provider ready");

    let session =
        ChatSession::new(Arc::new(provider), SYSTEM_INSTRUCTION).with_timeout(config.timeout);
    let state = Arc::new(AppState::with_session(session));

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "chat gateway listening");
    axum::serve(listener, app).await.context("serving HTTP")?;
    Ok(())
}
