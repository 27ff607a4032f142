use serde::{Deserialize, Serialize};

use crate::prompts::models::{ExpertiseLevel, PromptSchema, Tone};

/// Objectives shorter than this (in characters) draw a lint warning.
pub const DETAILED_OBJECTIVE_CHARS: usize = 50;

/// Minimum score for a lint run to count as passed.
pub const PASS_THRESHOLD: i32 = 70;

const BRIEF_OBJECTIVE_PENALTY: i32 = 10;
const NO_CONSTRAINTS_PENALTY: i32 = 5;
const NO_CONTEXT_PENALTY: i32 = 5;
const TONE_MISMATCH_PENALTY: i32 = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LintWarning {
    pub field: String,
    pub message: String,
    pub severity: LintSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LintResult {
    pub passed: bool,
    pub warnings: Vec<LintWarning>,
    /// Quality score, 0–100.
    pub score: u8,
}

/// Scores a schema for prompt quality. Advisory only: never blocks generation
/// and does not assume the schema passed validation.
pub fn lint(schema: &PromptSchema) -> LintResult {
    let mut warnings = Vec::new();
    let mut score: i32 = 100;

    if schema.objective.chars().count() < DETAILED_OBJECTIVE_CHARS {
        warnings.push(LintWarning {
            field: "objective".to_string(),
            message: "Objective is brief. Consider adding more detail.".to_string(),
            severity: LintSeverity::Warning,
            suggestion: Some(format!(
                "A detailed objective ({DETAILED_OBJECTIVE_CHARS}+ chars) leads to better outputs."
            )),
        });
        score -= BRIEF_OBJECTIVE_PENALTY;
    }

    if schema.constraints.as_ref().map_or(true, |c| c.is_empty()) {
        warnings.push(LintWarning {
            field: "constraints".to_string(),
            message: "No constraints specified.".to_string(),
            severity: LintSeverity::Info,
            suggestion: Some("Constraints help control output behavior.".to_string()),
        });
        score -= NO_CONSTRAINTS_PENALTY;
    }

    if schema.context.as_deref().map_or(true, str::is_empty) {
        warnings.push(LintWarning {
            field: "context".to_string(),
            message: "No additional context provided.".to_string(),
            severity: LintSeverity::Info,
            suggestion: Some("Context can improve response relevance.".to_string()),
        });
        score -= NO_CONTEXT_PENALTY;
    }

    if schema.output_format.is_none() {
        warnings.push(LintWarning {
            field: "outputFormat".to_string(),
            message: "No output format specified. Defaults will be used.".to_string(),
            severity: LintSeverity::Info,
            suggestion: None,
        });
    }

    if schema.expertise_level == ExpertiseLevel::Beginner && schema.tone == Tone::Strict {
        warnings.push(LintWarning {
            field: "tone".to_string(),
            message: "STRICT tone may be overwhelming for BEGINNER expertise level.".to_string(),
            severity: LintSeverity::Warning,
            suggestion: Some("Consider FRIENDLY or NEUTRAL tone for beginners.".to_string()),
        });
        score -= TONE_MISMATCH_PENALTY;
    }

    let score = score.clamp(0, 100);

    LintResult {
        passed: score >= PASS_THRESHOLD,
        warnings,
        score: score as u8,
    }
}
