//! TalentScout - hiring assistant intake interview
//!
//! A Rust backend driving the candidate screening dialogue: profile
//! collection, LLM-generated technical questions, and an anonymised
//! archive of completed interviews.

mod api;
mod archive;
mod classifier;
mod llm;
mod prompt;
mod runtime;
mod state_machine;

use api::{create_router, AppState};
use archive::JsonArchive;
use llm::LlmConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DATA_FILE: &str = "simulated_candidate_data.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine; the real environment still applies
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "talent_scout=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let data_file =
        std::env::var("TALENTSCOUT_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());

    let port: u16 = std::env::var("TALENTSCOUT_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let archive = Arc::new(JsonArchive::new(&data_file));
    tracing::info!(path = %archive.path().display(), "Using candidate archive");

    // Initialize LLM backend
    let llm_config = LlmConfig::from_env();
    let llm = llm_config.build_service();

    match &llm {
        Some(service) => tracing::info!(model = %service.model_id(), "LLM backend initialized"),
        None => tracing::warn!(
            "No LLM configured. Set GEMINI_API_KEY or LLM_GATEWAY; question generation will fail."
        ),
    }

    // Create application state
    let state = AppState::new(llm, archive);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new().gzip(true).br(true);

    let app = create_router(state)
        .layer(cors)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("TalentScout server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
