//! Domain layer - document structure, prompts and summarization

pub mod credentials;
pub mod document;
pub mod error;
pub mod llm;
pub mod parsing;
pub mod prompt;
pub mod report;
pub mod summary;

pub use credentials::{Credential, CredentialProvider, CredentialType};
pub use document::{
    DocumentSection, DocumentSource, ExtractedDocument, ExtractedText, SectionKind,
    SummaryRequest,
};
pub use error::DomainError;
pub use llm::{LlmClient, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole};
pub use parsing::{SectionBoundary, SectionBoundaryDetector, SectionExtractor, SectionPattern};
pub use prompt::{PromptCatalog, PromptTemplate, TemplateError};
pub use report::{render_document, render_summary};
pub use summary::{
    Completion, Insights, PaperSummarizer, PipelineError, PipelineOutput, PipelineStage,
    SectionSummaries, SummaryPipeline,
};
