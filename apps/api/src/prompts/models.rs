use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only schema version this service accepts.
pub const SCHEMA_VERSION: &str = "1.0";

/// Smallest word budget an output format may request.
pub const MIN_MAX_LENGTH: u32 = 50;

/// Construction-time failure of a schema value. Raised while decoding, before
/// any business rule runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("maxLength must be at least {MIN_MAX_LENGTH}, got {0}")]
    MaxLengthTooSmall(u32),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Audience {
    #[serde(rename = "SELF")]
    Myself,
    Client,
    Student,
    General,
    Technical,
    Executive,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Myself => "SELF",
            Audience::Client => "CLIENT",
            Audience::Student => "STUDENT",
            Audience::General => "GENERAL",
            Audience::Technical => "TECHNICAL",
            Audience::Executive => "EXECUTIVE",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpertiseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExpertiseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpertiseLevel::Beginner => "BEGINNER",
            ExpertiseLevel::Intermediate => "INTERMEDIATE",
            ExpertiseLevel::Advanced => "ADVANCED",
            ExpertiseLevel::Expert => "EXPERT",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tone {
    Neutral,
    Professional,
    Friendly,
    Strict,
    Creative,
    Persuasive,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "NEUTRAL",
            Tone::Professional => "PROFESSIONAL",
            Tone::Friendly => "FRIENDLY",
            Tone::Strict => "STRICT",
            Tone::Creative => "CREATIVE",
            Tone::Persuasive => "PERSUASIVE",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WritingStyle {
    StepByStep,
    Concise,
    Detailed,
    StoryDriven,
    Analytical,
}

impl WritingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            WritingStyle::StepByStep => "STEP_BY_STEP",
            WritingStyle::Concise => "CONCISE",
            WritingStyle::Detailed => "DETAILED",
            WritingStyle::StoryDriven => "STORY_DRIVEN",
            WritingStyle::Analytical => "ANALYTICAL",
        }
    }
}

/// Word budget for the generated answer. Always at least [`MIN_MAX_LENGTH`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u32", into = "u32")]
pub struct MaxLength(u32);

impl MaxLength {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for MaxLength {
    type Error = ShapeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < MIN_MAX_LENGTH {
            return Err(ShapeError::MaxLengthTooSmall(value));
        }
        Ok(Self(value))
    }
}

impl From<MaxLength> for u32 {
    fn from(value: MaxLength) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutputFormat {
    #[serde(default = "default_true")]
    pub use_headings: bool,
    #[serde(default = "default_true")]
    pub use_lists: bool,
    #[serde(default)]
    pub use_code_blocks: bool,
    #[serde(default)]
    pub allow_emojis: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<MaxLength>,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            use_headings: true,
            use_lists: true,
            use_code_blocks: false,
            allow_emojis: false,
            max_length: None,
        }
    }
}

/// A structured description of the prompt a caller wants built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromptSchema {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    pub role: String,
    pub domain: String,
    /// Omitted on the wire means GENERAL; an explicit `null` means no audience.
    #[serde(default = "default_audience")]
    pub audience: Option<Audience>,
    pub expertise_level: ExpertiseLevel,
    pub tone: Tone,
    pub writing_style: WritingStyle,
    pub objective: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl PromptSchema {
    /// Minimal schema with the required fields set and every optional field absent.
    pub fn new(
        role: impl Into<String>,
        domain: impl Into<String>,
        expertise_level: ExpertiseLevel,
        tone: Tone,
        writing_style: WritingStyle,
        objective: impl Into<String>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            role: role.into(),
            domain: domain.into(),
            audience: None,
            expertise_level,
            tone,
            writing_style,
            objective: objective.into(),
            constraints: None,
            output_format: None,
            context: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

fn default_audience() -> Option<Audience> {
    Some(Audience::General)
}
