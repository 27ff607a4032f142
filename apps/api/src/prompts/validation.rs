use serde::{Deserialize, Serialize};

use crate::prompts::models::{PromptSchema, SCHEMA_VERSION};

/// Objectives shorter than this (in characters) fail validation.
pub const MIN_OBJECTIVE_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    Required,
    MinLength,
    InvalidVersion,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: ValidationCode,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>, code: ValidationCode) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            code,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Checks the hard business rules a schema must satisfy before generation.
///
/// Every rule runs; errors accumulate in rule order:
/// - `role` must be non-empty after trimming
/// - `domain` must be non-empty after trimming
/// - `objective` must be at least 10 characters (untrimmed)
/// - `schemaVersion` must equal [`SCHEMA_VERSION`]
pub fn validate(schema: &PromptSchema) -> ValidationResult {
    let mut errors = Vec::new();

    if schema.role.trim().is_empty() {
        errors.push(ValidationError::new(
            "role",
            "Role cannot be empty",
            ValidationCode::Required,
        ));
    }

    if schema.domain.trim().is_empty() {
        errors.push(ValidationError::new(
            "domain",
            "Domain cannot be empty",
            ValidationCode::Required,
        ));
    }

    if schema.objective.chars().count() < MIN_OBJECTIVE_CHARS {
        errors.push(ValidationError::new(
            "objective",
            format!("Objective must be at least {MIN_OBJECTIVE_CHARS} characters"),
            ValidationCode::MinLength,
        ));
    }

    if schema.schema_version != SCHEMA_VERSION {
        errors.push(ValidationError::new(
            "schemaVersion",
            format!("Unsupported schema version: {}", schema.schema_version),
            ValidationCode::InvalidVersion,
        ));
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}
