//! Axum route handlers for the Prompt API.

use axum::{extract::rejection::JsonRejection, Json};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::prompts::generator::{generate, GenerationResult};
use crate::prompts::linting::{lint, LintResult};
use crate::prompts::models::PromptSchema;
use crate::prompts::validation::{validate, ValidationResult};

/// POST /api/v1/prompts/validate
///
/// Structural correctness check. Always 200; the body says whether the schema is valid.
pub async fn handle_validate(
    payload: Result<Json<PromptSchema>, JsonRejection>,
) -> Result<Json<ValidationResult>, AppError> {
    let Json(schema) = payload?;
    let result = validate(&schema);
    debug!(valid = result.valid, errors = result.errors.len(), "Validated schema");
    Ok(Json(result))
}

/// POST /api/v1/prompts/lint
///
/// Quality warnings and score. Advisory only.
pub async fn handle_lint(
    payload: Result<Json<PromptSchema>, JsonRejection>,
) -> Result<Json<LintResult>, AppError> {
    let Json(schema) = payload?;
    let result = lint(&schema);
    debug!(score = result.score, warnings = result.warnings.len(), "Linted schema");
    Ok(Json(result))
}

/// POST /api/v1/prompts/generate
///
/// Validates first and refuses with 400 (carrying the validation errors) when invalid.
pub async fn handle_generate(
    payload: Result<Json<PromptSchema>, JsonRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let Json(schema) = payload?;

    let validation = validate(&schema);
    if !validation.valid {
        return Err(AppError::InvalidSchema(validation.errors));
    }

    let result = generate(&schema);
    info!(
        sections = result.metadata.sections,
        token_estimate = result.token_estimate,
        "Generated prompt"
    );
    Ok(Json(result))
}
