//! Axum route handlers for the template catalog.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::templates::catalog::{PromptTemplate, TemplateSummary};

/// GET /api/v1/prompts/templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemplateSummary>>, AppError> {
    let templates = state.catalog.list_templates().await?;
    Ok(Json(templates))
}

/// GET /api/v1/prompts/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PromptTemplate>, AppError> {
    let template = state
        .catalog
        .get_template(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))?;
    Ok(Json(template))
}
