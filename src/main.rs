use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

mod error;
mod handlers;
mod models;
mod openrouter;
mod prompts;

/// Upper bound on one whole upstream exchange, the only timing policy.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub api_url: String,
    pub api_key: String,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    dotenvy::dotenv().ok();
    let api_key = std::env::var("OPENROUTER_API_KEY")
        .expect("OPENROUTER_API_KEY must be set")
        .trim()
        .to_string();

    if api_key.is_empty() {
        panic!("OPENROUTER_API_KEY cannot be empty");
    }

    let api_url = std::env::var("OPENROUTER_URL")
        .unwrap_or_else(|_| DEFAULT_OPENROUTER_URL.to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());

    // One client for every upstream call; carries the fixed timeout
    let client = reqwest::Client::builder()
        .timeout(UPSTREAM_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client");

    // Create shared state
    let state = Arc::new(AppState {
        client,
        api_url,
        api_key,
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin("*".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::HeaderName::from_static("content-type")]);

    // Build router
    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/chat", post(handlers::chat))
        .layer(cors)
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port.parse::<u16>().expect("Invalid PORT")));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
