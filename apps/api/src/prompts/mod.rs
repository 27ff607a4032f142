//! Prompt pipeline: schema model → validation (hard gate) → linting (advisory) → generation.
//! Validation, linting and generation are pure functions over `PromptSchema`.

pub mod generator;
pub mod handlers;
pub mod linting;
pub mod models;
pub mod validation;
