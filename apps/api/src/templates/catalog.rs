use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::prompts::models::PromptSchema;
use crate::templates::store::TemplateStore;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Technical,
    Creative,
    Business,
    Academic,
    #[default]
    General,
}

/// A named schema preset. Identity is the slug `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub category: TemplateCategory,
    pub schema: PromptSchema,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
}

impl From<PromptTemplate> for TemplateSummary {
    fn from(template: PromptTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name,
            description: template.description,
            category: template.category,
        }
    }
}

/// Serves templates from a [`TemplateStore`].
///
/// A document is usable only if it parses, carries every required key, has a
/// slug id, and that id matches the key it is stored under. Anything else is
/// skipped when listing and reported as absent on lookup.
#[derive(Clone)]
pub struct TemplateCatalog {
    store: Arc<dyn TemplateStore>,
}

impl TemplateCatalog {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }

    pub async fn list_templates(&self) -> Result<Vec<TemplateSummary>> {
        let documents = self.store.enumerate().await?;

        Ok(documents
            .into_iter()
            .filter_map(|doc| match parse_template(&doc.key, &doc.contents) {
                Ok(template) => Some(TemplateSummary::from(template)),
                Err(reason) => {
                    warn!("Skipping template '{}': {reason}", doc.key);
                    None
                }
            })
            .collect())
    }

    /// `Ok(None)` when the id is not a slug, unknown, or its document is malformed.
    pub async fn get_template(&self, id: &str) -> Result<Option<PromptTemplate>> {
        if !is_slug(id) {
            return Ok(None);
        }

        let Some(contents) = self.store.fetch(id).await? else {
            return Ok(None);
        };

        match parse_template(id, &contents) {
            Ok(template) => Ok(Some(template)),
            Err(reason) => {
                warn!("Template '{id}' is malformed: {reason}");
                Ok(None)
            }
        }
    }
}

/// Lowercase ASCII alphanumerics separated by single hyphens, e.g. `code-review`.
pub fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

fn parse_template(key: &str, contents: &str) -> std::result::Result<PromptTemplate, String> {
    let template: PromptTemplate = serde_json::from_str(contents).map_err(|e| e.to_string())?;

    if !is_slug(&template.id) {
        return Err(format!("id '{}' is not a valid slug", template.id));
    }
    if template.id != key {
        return Err(format!(
            "id '{}' does not match stored key '{key}'",
            template.id
        ));
    }

    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::models::Tone;
    use crate::templates::store::MemoryTemplateStore;
    use serde_json::json;

    fn template_json(id: &str) -> String {
        json!({
            "id": id,
            "name": "Code Reviewer",
            "description": "Reviews pull requests",
            "category": "technical",
            "schema": {
                "schemaVersion": "1.0",
                "role": "senior engineer",
                "domain": "code review",
                "expertiseLevel": "EXPERT",
                "tone": "PROFESSIONAL",
                "writingStyle": "ANALYTICAL",
                "objective": "Review the diff for correctness and style."
            }
        })
        .to_string()
    }

    fn catalog(store: MemoryTemplateStore) -> TemplateCatalog {
        TemplateCatalog::new(Arc::new(store))
    }

    #[test]
    fn test_slug_rules() {
        assert!(is_slug("code-review"));
        assert!(is_slug("v2"));
        assert!(!is_slug(""));
        assert!(!is_slug("Code-Review"));
        assert!(!is_slug("code--review"));
        assert!(!is_slug("-code"));
        assert!(!is_slug("code_review"));
        assert!(!is_slug("../secrets"));
    }

    #[tokio::test]
    async fn test_list_skips_malformed_documents() {
        let store = MemoryTemplateStore::new()
            .with_document("code-review", template_json("code-review"))
            .with_document("broken", "{ not json");
        let c = catalog(store);

        let listed = c.list_templates().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "code-review");
        assert_eq!(listed[0].category, TemplateCategory::Technical);

        assert_eq!(c.get_template("broken").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_required_key_is_skipped() {
        let mut doc: serde_json::Value =
            serde_json::from_str(&template_json("no-name")).unwrap();
        doc.as_object_mut().unwrap().remove("name");
        let store = MemoryTemplateStore::new().with_document("no-name", doc.to_string());
        let c = catalog(store);

        assert!(c.list_templates().await.unwrap().is_empty());
        assert_eq!(c.get_template("no-name").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_schema_enum_is_skipped() {
        let contents = template_json("odd-tone").replace("PROFESSIONAL", "SARCASTIC");
        let store = MemoryTemplateStore::new().with_document("odd-tone", contents);
        assert!(catalog(store).list_templates().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_key_id_mismatch_is_skipped() {
        let store =
            MemoryTemplateStore::new().with_document("alias", template_json("code-review"));
        let c = catalog(store);
        assert!(c.list_templates().await.unwrap().is_empty());
        assert_eq!(c.get_template("alias").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_category_defaults_to_general() {
        let mut doc: serde_json::Value =
            serde_json::from_str(&template_json("plain")).unwrap();
        doc.as_object_mut().unwrap().remove("category");
        let store = MemoryTemplateStore::new().with_document("plain", doc.to_string());

        let template = catalog(store).get_template("plain").await.unwrap().unwrap();
        assert_eq!(template.category, TemplateCategory::General);
    }

    #[tokio::test]
    async fn test_get_returns_full_schema() {
        let store = MemoryTemplateStore::new()
            .with_document("code-review", template_json("code-review"));
        let template = catalog(store)
            .get_template("code-review")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(template.name, "Code Reviewer");
        assert_eq!(template.schema.tone, Tone::Professional);
        assert_eq!(template.schema.role, "senior engineer");
    }

    #[tokio::test]
    async fn test_unknown_and_non_slug_ids_are_absent() {
        let c = catalog(MemoryTemplateStore::new());
        assert_eq!(c.get_template("nope").await.unwrap(), None);
        assert_eq!(c.get_template("../etc/passwd").await.unwrap(), None);
    }
}
