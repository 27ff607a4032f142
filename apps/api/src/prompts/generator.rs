//! Prompt generation: renders a validated schema into the final prompt text.
//!
//! Sections are emitted in a fixed order. Role, Expertise Level, Tone & Style
//! and Objective are always present; Context, Constraints and Output Format
//! appear only when their field is set. A present audience adds a bare
//! "Your audience is" line right after Role, counted as its own section.
//!
//! The generator does not validate. Callers run `validation::validate` first.

use serde::{Deserialize, Serialize};

use crate::prompts::models::{ExpertiseLevel, OutputFormat, PromptSchema};

/// Rough heuristic: one token per four characters.
pub const CHARS_PER_TOKEN: usize = 4;

const SECTION_SEPARATOR: &str = "\n\n";

/// Guidance sentence per expertise level, in declaration order.
const EXPERTISE_GUIDANCE: &[(ExpertiseLevel, &str)] = &[
    (
        ExpertiseLevel::Beginner,
        "Use simple vocabulary, provide thorough explanations, and include basic examples.",
    ),
    (
        ExpertiseLevel::Intermediate,
        "Use standard terminology, provide clear explanations with relevant examples.",
    ),
    (
        ExpertiseLevel::Advanced,
        "Use technical vocabulary freely, focus on depth and nuance.",
    ),
    (
        ExpertiseLevel::Expert,
        "Assume deep domain knowledge. Be precise and technical.",
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    pub schema_version: String,
    /// Number of sections actually emitted.
    pub sections: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub prompt: String,
    pub token_estimate: usize,
    pub metadata: GenerationMetadata,
}

#[derive(Debug, Clone)]
struct Section {
    heading: Option<&'static str>,
    body: String,
}

impl Section {
    fn new(heading: &'static str, body: impl Into<String>) -> Self {
        Self {
            heading: Some(heading),
            body: body.into(),
        }
    }

    /// A bare line, rendered without a heading but still joined and counted as a section.
    fn untitled(body: impl Into<String>) -> Self {
        Self {
            heading: None,
            body: body.into(),
        }
    }

    fn render(&self) -> String {
        match self.heading {
            Some(heading) => format!("## {}\n{}", heading, self.body),
            None => self.body.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

pub fn generate(schema: &PromptSchema) -> GenerationResult {
    let sections = build_sections(schema);

    let prompt = sections
        .iter()
        .map(Section::render)
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR);

    GenerationResult {
        token_estimate: estimate_tokens(&prompt),
        metadata: GenerationMetadata {
            schema_version: schema.schema_version.clone(),
            sections: sections.len(),
        },
        prompt,
    }
}

/// Character count divided by four, truncated.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / CHARS_PER_TOKEN
}

/// Looks up the guidance sentence for an expertise level; empty if unmapped.
pub fn expertise_guidance(level: ExpertiseLevel) -> &'static str {
    EXPERTISE_GUIDANCE
        .iter()
        .find(|(key, _)| *key == level)
        .map_or("", |(_, text)| *text)
}

fn build_sections(schema: &PromptSchema) -> Vec<Section> {
    let mut sections = Vec::with_capacity(7);

    sections.push(Section::new(
        "Role",
        format!(
            "You are a {} with expertise in {}.",
            schema.role, schema.domain
        ),
    ));

    if let Some(audience) = schema.audience {
        sections.push(Section::untitled(format!(
            "Your audience is: {}",
            audience.as_str()
        )));
    }

    sections.push(Section::new(
        "Expertise Level",
        expertise_guidance(schema.expertise_level),
    ));

    sections.push(Section::new(
        "Tone & Style",
        format!(
            "- Tone: {}\n- Writing Style: {}",
            schema.tone.as_str(),
            schema.writing_style.as_str()
        ),
    ));

    sections.push(Section::new("Objective", schema.objective.as_str()));

    if let Some(context) = schema.context.as_deref().filter(|c| !c.is_empty()) {
        sections.push(Section::new("Context", context));
    }

    if let Some(constraints) = schema.constraints.as_ref().filter(|c| !c.is_empty()) {
        sections.push(Section::new(
            "Constraints (Non-negotiable)",
            bullet_list(constraints),
        ));
    }

    if let Some(format) = &schema.output_format {
        let rules = output_format_rules(format);
        if !rules.is_empty() {
            sections.push(Section::new("Output Format", bullet_list(&rules)));
        }
    }

    sections
}

/// Derives the formatting rules, in fixed order. The code-block rule always
/// yields a line; the emoji rule yields one only when emojis are disallowed.
fn output_format_rules(format: &OutputFormat) -> Vec<String> {
    let mut rules = Vec::new();

    if format.use_headings {
        rules.push("Use headings to organize".to_string());
    }
    if format.use_lists {
        rules.push("Use lists where appropriate".to_string());
    }
    if format.use_code_blocks {
        rules.push("Use code blocks for code".to_string());
    } else {
        rules.push("No code blocks".to_string());
    }
    if !format.allow_emojis {
        rules.push("No emojis".to_string());
    }
    if let Some(max_length) = format.max_length {
        rules.push(format!("Maximum {} words", max_length.get()));
    }

    rules
}

fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::models::{Audience, MaxLength, Tone, WritingStyle};

    const OBJECTIVE: &str = "Explain how caching works in distributed systems.";

    fn base_schema() -> PromptSchema {
        PromptSchema::new(
            "engineer",
            "backend systems",
            ExpertiseLevel::Intermediate,
            Tone::Neutral,
            WritingStyle::Concise,
            OBJECTIVE,
        )
    }

    fn format_with(use_code_blocks: bool, allow_emojis: bool) -> OutputFormat {
        OutputFormat {
            use_code_blocks,
            allow_emojis,
            ..OutputFormat::default()
        }
    }

    #[test]
    fn test_minimal_schema_renders_required_sections() {
        let r = generate(&base_schema());
        assert!(!r.prompt.is_empty());
        assert!(r
            .prompt
            .contains("You are a engineer with expertise in backend systems."));
        assert!(r.prompt.contains(OBJECTIVE));
        assert_eq!(r.token_estimate, r.prompt.chars().count() / 4);
        assert_eq!(r.metadata.sections, 4);
        assert_eq!(r.metadata.schema_version, "1.0");
        assert!(!r.prompt.contains("Your audience is"));
        assert!(!r.prompt.contains("## Context"));
        assert!(!r.prompt.contains("## Constraints"));
        assert!(!r.prompt.contains("## Output Format"));
    }

    #[test]
    fn test_minimal_prompt_exact_text() {
        let expected = "## Role\nYou are a engineer with expertise in backend systems.\n\n\
            ## Expertise Level\nUse standard terminology, provide clear explanations with relevant examples.\n\n\
            ## Tone & Style\n- Tone: NEUTRAL\n- Writing Style: CONCISE\n\n\
            ## Objective\nExplain how caching works in distributed systems.";
        assert_eq!(generate(&base_schema()).prompt, expected);
    }

    #[test]
    fn test_audience_is_its_own_counted_section() {
        let mut s = base_schema();
        s.audience = Some(Audience::General);
        let r = generate(&s);
        assert!(r.prompt.starts_with(
            "## Role\nYou are a engineer with expertise in backend systems.\n\nYour audience is: GENERAL\n\n## Expertise Level\n"
        ));
        assert_eq!(r.metadata.sections, 5);
        assert_eq!(r.token_estimate, r.prompt.chars().count() / 4);
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let mut s = base_schema();
        s.context = Some("Team runs Redis.".to_string());
        s.constraints = Some(vec!["Be brief".to_string()]);
        s.output_format = Some(OutputFormat::default());
        s.audience = Some(Audience::Technical);
        let r = generate(&s);
        let order = [
            "## Role",
            "Your audience is: TECHNICAL",
            "## Expertise Level",
            "## Tone & Style",
            "## Objective",
            "## Context",
            "## Constraints (Non-negotiable)",
            "## Output Format",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|h| r.prompt.find(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(r.metadata.sections, 8);
    }

    #[test]
    fn test_constraints_keep_declared_order() {
        let mut s = base_schema();
        s.constraints = Some(vec![
            "Zeta rule".to_string(),
            "Alpha rule".to_string(),
            "Mid rule".to_string(),
        ]);
        let r = generate(&s);
        assert!(r.prompt.contains(
            "## Constraints (Non-negotiable)\n- Zeta rule\n- Alpha rule\n- Mid rule"
        ));
    }

    #[test]
    fn test_empty_constraints_and_context_are_omitted() {
        let mut s = base_schema();
        s.constraints = Some(vec![]);
        s.context = Some(String::new());
        let r = generate(&s);
        assert_eq!(r.metadata.sections, 4);
    }

    #[test]
    fn test_no_code_blocks_and_no_emojis_lines() {
        let mut s = base_schema();
        s.output_format = Some(format_with(false, false));
        let r = generate(&s);
        assert!(r.prompt.contains("- No code blocks"));
        assert!(r.prompt.contains("- No emojis"));
    }

    #[test]
    fn test_allowed_emojis_emit_no_emoji_line() {
        let mut s = base_schema();
        s.output_format = Some(format_with(true, true));
        let r = generate(&s);
        assert!(r.prompt.contains("- Use code blocks for code"));
        assert!(!r.prompt.to_lowercase().contains("emoji"));
    }

    #[test]
    fn test_output_format_rule_order() {
        let format = OutputFormat {
            max_length: Some(MaxLength::try_from(300).unwrap()),
            ..OutputFormat::default()
        };
        assert_eq!(
            output_format_rules(&format),
            vec![
                "Use headings to organize",
                "Use lists where appropriate",
                "No code blocks",
                "No emojis",
                "Maximum 300 words",
            ]
        );
    }

    #[test]
    fn test_code_block_rule_always_present() {
        let format = OutputFormat {
            use_headings: false,
            use_lists: false,
            use_code_blocks: false,
            allow_emojis: true,
            max_length: None,
        };
        assert_eq!(output_format_rules(&format), vec!["No code blocks"]);
    }

    #[test]
    fn test_expertise_table_covers_every_level() {
        for level in [
            ExpertiseLevel::Beginner,
            ExpertiseLevel::Intermediate,
            ExpertiseLevel::Advanced,
            ExpertiseLevel::Expert,
        ] {
            assert!(!expertise_guidance(level).is_empty(), "{level:?}");
        }
        assert!(expertise_guidance(ExpertiseLevel::Beginner).contains("simple vocabulary"));
        assert!(expertise_guidance(ExpertiseLevel::Expert).contains("deep domain knowledge"));
    }

    #[test]
    fn test_token_estimate_truncates() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abc"), 0);
        assert_eq!(estimate_tokens("abcdefg"), 1);
        assert_eq!(estimate_tokens("ééééé"), 1);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let mut s = base_schema();
        s.context = Some("Some context".to_string());
        assert_eq!(generate(&s), generate(&s));
    }
}
