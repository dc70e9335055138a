// HTTP routes configuration

use super::handlers::{generate_image_handler, generate_images_handler, health_handler};
use crate::config::AppConfig;
use crate::translation::ImageGenerator;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub generator: Arc<dyn ImageGenerator>,
}

pub fn create_router(config: AppConfig, generator: Arc<dyn ImageGenerator>) -> Router {
    let state = AppState { config, generator };

    Router::new()
        .route("/health", get(health_handler))
        .route("/generate-image-from-prompt", post(generate_image_handler))
        .route(
            "/generate-images-from-prompts",
            post(generate_images_handler),
        )
        // Requests carry only text prompts; 1MB is generous.
        .layer(tower_http::limit::RequestBodyLimitLayer::new(1024 * 1024))
        // The frontend is served from a different origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
