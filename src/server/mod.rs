pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{ErrorResponse, GenerateRequest};

use crate::{Result, config::Config, llm::GroqClient};
use axum::{
    Router,
    http::{HeaderName, HeaderValue, header},
    routing::any,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Builds the application router. Every response, including 404s and
/// extractor rejections, carries the CORS headers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::generate))
        .route("/api/generate", any(handlers::generate))
        .with_state(state)
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .layer(cors_header(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            "POST, OPTIONS",
        ))
        .layer(cors_header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "Content-Type",
        ))
        .layer(TraceLayer::new_for_http())
}

fn cors_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

pub async fn run(config: Config) -> Result<()> {
    let api_key = config.groq.api_key().map(str::to_string);
    if api_key.is_none() {
        warn!("GROQ_API_KEY is not set; generation requests will fail until it is provided");
    }

    let llm = GroqClient::new(&config.groq);
    info!("Relaying to {} with model {}", llm.url(), llm.model());

    let app = router(AppState::new(api_key, Arc::new(llm)));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
