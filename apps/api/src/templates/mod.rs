//! Template catalog: read-only schema presets served by slug.
//! Storage sits behind the `TemplateStore` trait so the catalog never touches the filesystem directly.

pub mod catalog;
pub mod handlers;
pub mod store;

pub use catalog::{PromptTemplate, TemplateCatalog, TemplateCategory, TemplateSummary};
pub use store::{FsTemplateStore, MemoryTemplateStore, StoredDocument, TemplateStore};
