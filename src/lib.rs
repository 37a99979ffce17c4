//! Paper Digest
//!
//! Turns academic papers in PDF form into Traditional Chinese summaries:
//! - Text extraction with title and section detection
//! - Per-section, overall and insight summaries through Azure OpenAI
//! - Markdown reports that degrade to placeholders when the model is
//!   unavailable

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use domain::{PaperSummarizer, SummaryPipeline};
use infrastructure::{EnvCredentialProvider, LlmProviderFactory, PdfTextSource};

/// Build the full summary pipeline from configuration and the environment
///
/// Missing Azure credentials leave the summarizer unconfigured rather than
/// failing.
pub async fn create_summary_pipeline(
    config: &AppConfig,
) -> anyhow::Result<SummaryPipeline<PdfTextSource>> {
    let credentials = EnvCredentialProvider::new().with_defaults();
    let client = LlmProviderFactory::resolve(&credentials, &config.llm.client_options()).await?;
    let summarizer = PaperSummarizer::new(client)?;

    Ok(SummaryPipeline::new(PdfTextSource::new(), summarizer)
        .with_patterns(config.parser.patterns.clone()))
}

/// Build a pipeline that only extracts and parses
pub fn create_extraction_pipeline(
    config: &AppConfig,
) -> anyhow::Result<SummaryPipeline<PdfTextSource>> {
    Ok(
        SummaryPipeline::new(PdfTextSource::new(), PaperSummarizer::unconfigured()?)
            .with_patterns(config.parser.patterns.clone()),
    )
}
