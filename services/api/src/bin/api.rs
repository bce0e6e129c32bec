//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{load_catalog, OpenAiChatAdapter},
    config::Config,
    error::ApiError,
    web::{api_router, state::AppState, ApiDoc},
};
use async_openai::{config::OpenAIConfig, Client};
use axum::http::{
    header::{ACCEPT, CONTENT_TYPE},
    HeaderValue, Method,
};
use axum::Router;
use dino_explorer_core::ChatClient;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Load the Catalog ---
    let catalog = load_catalog(&config.catalog_path)?;

    // --- 3. Initialize the Chat Adapter ---
    let chat_client = match config.openai_api_key.as_ref() {
        Some(api_key) => {
            let openai_client = Client::with_config(OpenAIConfig::new().with_api_key(api_key));
            info!("Chat assistant using model {}.", config.chat_model);
            ChatClient::new(Arc::new(OpenAiChatAdapter::new(
                openai_client,
                config.chat_model.clone(),
            )))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; the chat assistant will reply with its unavailable message.");
            ChatClient::unavailable()
        }
    };

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState::new(config.clone(), catalog, chat_client));

    let allowed_origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| ApiError::Internal(format!("Invalid ALLOWED_ORIGIN: {}", e)))?;
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    // --- 5. Create the Web Router ---
    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router(app_state).layer(cors))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
