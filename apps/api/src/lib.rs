pub mod config;
pub mod errors;
pub mod prompts;
pub mod routes;
pub mod state;
pub mod templates;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

/// Router with request tracing and CORS applied.
pub fn build_app(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config)?;

    Ok(build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    ))
}

fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let origins = &config.cors_allowed_origins;

    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values = origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
