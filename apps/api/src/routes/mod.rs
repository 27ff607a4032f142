pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::prompts::handlers as prompts;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Prompt pipeline
        .route("/api/v1/prompts/validate", post(prompts::handle_validate))
        .route("/api/v1/prompts/lint", post(prompts::handle_lint))
        .route("/api/v1/prompts/generate", post(prompts::handle_generate))
        // Template catalog
        .route(
            "/api/v1/prompts/templates",
            get(templates::handle_list_templates),
        )
        .route(
            "/api/v1/prompts/templates/:id",
            get(templates::handle_get_template),
        )
        .with_state(state)
}
