//! Summary pipeline
//!
//! `Extract → ParseSections → SummarizeSections → SummarizeOverall →
//! DeriveInsights → AssembleMarkdown`. The first three stages abort the run
//! with a stage-tagged error; the remaining stages degrade to placeholder
//! text and always reach the final Markdown.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::outcome::{Insights, SectionSummaries};
use super::summarizer::PaperSummarizer;
use crate::domain::DomainError;
use crate::domain::document::{DocumentSection, DocumentSource, ExtractedDocument};
use crate::domain::parsing::{SectionExtractor, SectionPattern, detect_title};
use crate::domain::report::{render_section_summaries, render_summary};

/// Stages of a pipeline run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Extract,
    ParseSections,
    SummarizeSections,
    SummarizeOverall,
    DeriveInsights,
    AssembleMarkdown,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extract => "extract",
            Self::ParseSections => "parse_sections",
            Self::SummarizeSections => "summarize_sections",
            Self::SummarizeOverall => "summarize_overall",
            Self::DeriveInsights => "derive_insights",
            Self::AssembleMarkdown => "assemble_markdown",
        }
    }

    /// Whether a failure in this stage aborts the run
    pub fn is_fail_fast(&self) -> bool {
        matches!(
            self,
            Self::Extract | Self::ParseSections | Self::SummarizeSections
        )
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abort-class pipeline failures
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to extract PDF: {0}")]
    Extraction(#[source] DomainError),

    #[error("Failed to parse sections: {0}")]
    Parsing(#[source] DomainError),

    #[error("Failed to summarize sections: {0}")]
    Summarization(#[source] DomainError),
}

impl PipelineError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::Extraction(_) => PipelineStage::Extract,
            Self::Parsing(_) => PipelineStage::ParseSections,
            Self::Summarization(_) => PipelineStage::SummarizeSections,
        }
    }

    /// The wrapped stage error
    pub fn inner(&self) -> &DomainError {
        match self {
            Self::Extraction(e) | Self::Parsing(e) | Self::Summarization(e) => e,
        }
    }
}

/// Everything a completed run produced
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Parsed document with the overall summary attached
    pub document: ExtractedDocument,
    pub section_summaries: SectionSummaries,
    pub overall_summary: String,
    pub insights: Insights,
    pub markdown: String,
}

impl PipelineOutput {
    /// Overall summary followed by every section summary
    pub fn section_report(&self) -> String {
        render_section_summaries(&self.document, &self.section_summaries, &self.overall_summary)
    }
}

/// Runs a document through extraction, parsing and summarization
#[derive(Debug)]
pub struct SummaryPipeline<S: DocumentSource> {
    source: S,
    patterns: Vec<SectionPattern>,
    summarizer: PaperSummarizer,
}

impl<S: DocumentSource> SummaryPipeline<S> {
    pub fn new(source: S, summarizer: PaperSummarizer) -> Self {
        Self {
            source,
            patterns: Vec::new(),
            summarizer,
        }
    }

    /// Custom header patterns; empty keeps the defaults
    pub fn with_patterns(mut self, patterns: Vec<SectionPattern>) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn summarizer(&self) -> &PaperSummarizer {
        &self.summarizer
    }

    /// Extract text, guess the title and wrap everything in one section
    pub async fn extract(&self, path: &Path) -> Result<ExtractedDocument, PipelineError> {
        let text = self
            .source
            .extract_text(path)
            .await
            .map_err(PipelineError::Extraction)?;

        let full_text = text.full_text();
        let title = detect_title(&full_text);

        debug!(
            stage = %PipelineStage::Extract,
            pages = text.page_count(),
            chars = full_text.chars().count(),
            title = title.as_deref().unwrap_or("-"),
            "Text extracted"
        );

        let section = DocumentSection::full_content(full_text).with_page_numbers(text.page_numbers());

        Ok(ExtractedDocument::new(path.display().to_string(), vec![section]).with_optional_title(title))
    }

    /// Split the extracted text into sections
    pub fn parse_sections(
        &self,
        document: ExtractedDocument,
    ) -> Result<ExtractedDocument, PipelineError> {
        let extractor =
            SectionExtractor::with_patterns(&self.patterns).map_err(PipelineError::Parsing)?;
        let document = extractor.parse_document(document);

        info!(
            stage = %PipelineStage::ParseSections,
            sections = document.sections.len(),
            "Sections parsed"
        );

        Ok(document)
    }

    /// Extract and parse without calling the model
    pub async fn extract_document(&self, path: &Path) -> Result<ExtractedDocument, PipelineError> {
        let document = self.extract(path).await?;
        self.parse_sections(document)
    }

    /// Run every stage and assemble the summary report
    pub async fn run(&self, path: &Path) -> Result<PipelineOutput, PipelineError> {
        info!(
            file = %path.display(),
            llm_configured = self.summarizer.is_configured(),
            "Starting summary pipeline"
        );

        let document = self.extract_document(path).await?;

        let section_summaries = self
            .summarizer
            .summarize_all_sections(&document)
            .await
            .map_err(PipelineError::Summarization)?;

        let title = document.title.clone();

        let overall_summary = self
            .summarizer
            .summarize_overall(&section_summaries, title.as_deref())
            .await;
        debug!(stage = %PipelineStage::SummarizeOverall, chars = overall_summary.chars().count(), "Overall summary ready");

        let insights = self.summarizer.derive_insights(&overall_summary).await;
        debug!(stage = %PipelineStage::DeriveInsights, "Insights ready");

        let markdown = render_summary(title.as_deref(), &insights, &overall_summary);
        info!(
            stage = %PipelineStage::AssembleMarkdown,
            chars = markdown.chars().count(),
            "Summary report assembled"
        );

        Ok(PipelineOutput {
            document: document.with_summary_zh(overall_summary.clone()),
            section_summaries,
            overall_summary,
            insights,
            markdown,
        })
    }
}
