//! Prompt templates with variable support, and the summary prompt catalog

mod catalog;
mod template;

pub use catalog::{
    INSIGHT_BUDGET_CHARS, OVERALL_BUDGET_CHARS, PromptCatalog, REQUEST_BUDGET_CHARS,
    SECTION_BUDGET_CHARS, section_instructions, truncate_chars,
};
pub use template::{PromptTemplate, PromptVariable, TemplateError};
