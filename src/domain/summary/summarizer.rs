//! Chinese summarization over an optional LLM client

use tracing::{debug, info, warn};

use super::outcome::{
    APPLICATION_IDEAS_PLACEHOLDER, Completion, IMPORTANT_POINTS_PLACEHOLDER, Insights,
    OVERALL_SUMMARY_PLACEHOLDER, SectionSummaries,
};
use crate::domain::DomainError;
use crate::domain::document::{DocumentSection, ExtractedDocument, SummaryRequest};
use crate::domain::llm::LlmClient;
use crate::domain::prompt::{PromptCatalog, TemplateError};

fn template_error(error: TemplateError) -> DomainError {
    DomainError::template(error.to_string())
}

/// Produces section, overall and derived summaries for a paper
///
/// Every call is awaited before the next is issued, so calls reach the model
/// in section order. Whether an LLM is configured is fixed at construction.
#[derive(Debug, Clone)]
pub struct PaperSummarizer {
    client: Option<LlmClient>,
    catalog: PromptCatalog,
}

impl PaperSummarizer {
    pub fn new(client: Option<LlmClient>) -> Result<Self, DomainError> {
        let catalog = PromptCatalog::new().map_err(template_error)?;
        Ok(Self::with_catalog(client, catalog))
    }

    pub fn with_catalog(client: Option<LlmClient>, catalog: PromptCatalog) -> Self {
        Self { client, catalog }
    }

    /// Summarizer that never calls a model
    pub fn unconfigured() -> Result<Self, DomainError> {
        Self::new(None)
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Sections eligible for individual summaries, in document order
    pub fn select_priority_sections(document: &ExtractedDocument) -> Vec<&DocumentSection> {
        document
            .sections
            .iter()
            .filter(|section| section.kind().is_priority())
            .collect()
    }

    async fn complete(&self, prompt: Result<String, TemplateError>) -> Completion {
        let Some(client) = &self.client else {
            return Completion::Unconfigured;
        };

        match prompt {
            Ok(prompt) => Completion::from_result(client.complete(&prompt).await),
            Err(error) => Completion::Failed(template_error(error)),
        }
    }

    /// Summarize one section
    ///
    /// Empty content, a missing LLM and a failed call all yield `""`. Only a
    /// prompt that cannot be rendered is an error.
    pub async fn summarize_section(
        &self,
        section: &DocumentSection,
        paper_title: Option<&str>,
    ) -> Result<String, DomainError> {
        let Some(client) = &self.client else {
            return Ok(String::new());
        };

        if section.content().trim().is_empty() {
            return Ok(String::new());
        }

        let prompt = self
            .catalog
            .section_prompt(section.kind(), section.title(), paper_title, section.content())
            .map_err(template_error)?;

        match client.complete(&prompt).await {
            Ok(summary) => {
                debug!(section = section.title(), chars = summary.chars().count(), "Section summarized");
                Ok(summary)
            }
            Err(error) => {
                warn!(section = section.title(), error = %error, "Section summary failed");
                Ok(String::new())
            }
        }
    }

    /// Summarize every priority section in document order
    ///
    /// Individual failures leave an empty entry; a render failure aborts.
    pub async fn summarize_all_sections(
        &self,
        document: &ExtractedDocument,
    ) -> Result<SectionSummaries, DomainError> {
        let mut summaries = SectionSummaries::new();

        for section in Self::select_priority_sections(document) {
            let summary = self
                .summarize_section(section, document.title.as_deref())
                .await?;
            summaries.insert(section.title(), summary);
        }

        info!(
            sections = summaries.len(),
            generated = summaries.iter().filter(|(_, s)| !s.is_empty()).count(),
            "Section summaries complete"
        );

        Ok(summaries)
    }

    /// Overall summary call outcome
    pub async fn overall_completion(
        &self,
        summaries: &SectionSummaries,
        paper_title: Option<&str>,
    ) -> Completion {
        let prompt = self
            .catalog
            .overall_prompt(paper_title, &summaries.combined());
        self.complete(prompt).await
    }

    /// Overall summary text; never fails
    pub async fn summarize_overall(
        &self,
        summaries: &SectionSummaries,
        paper_title: Option<&str>,
    ) -> String {
        let completion = self.overall_completion(summaries, paper_title).await;

        if let Completion::Failed(error) = &completion {
            warn!(error = %error, "Overall summary failed");
        }

        completion.resolve(OVERALL_SUMMARY_PLACEHOLDER, OVERALL_SUMMARY_PLACEHOLDER)
    }

    /// Top-5 points and application ideas, each degrading on its own
    pub async fn derive_insights(&self, overall_summary: &str) -> Insights {
        let points = self
            .complete(self.catalog.take_away_prompt(overall_summary))
            .await;
        if let Completion::Failed(error) = &points {
            warn!(error = %error, "Important points generation failed");
        }

        let ideas = self
            .complete(self.catalog.ideas_prompt(overall_summary))
            .await;
        if let Completion::Failed(error) = &ideas {
            warn!(error = %error, "Application ideas generation failed");
        }

        Insights::new(
            points.resolve("", IMPORTANT_POINTS_PLACEHOLDER),
            ideas.resolve("", APPLICATION_IDEAS_PLACEHOLDER),
        )
    }

    /// Single-shot summary of raw document content; `""` without an LLM
    pub async fn summarize_request(&self, request: &SummaryRequest) -> Result<String, DomainError> {
        let Some(client) = &self.client else {
            return Ok(String::new());
        };

        let prompt = self
            .catalog
            .request_prompt(request)
            .map_err(template_error)?;

        client.complete(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::llm::MockLlmProvider;
    use crate::domain::prompt::PromptTemplate;

    fn configured(provider: Arc<MockLlmProvider>) -> PaperSummarizer {
        PaperSummarizer::new(Some(LlmClient::new(provider, "gpt-4.1"))).unwrap()
    }

    fn sample_document() -> ExtractedDocument {
        ExtractedDocument::new(
            "/papers/sample.pdf",
            vec![
                DocumentSection::new("Abstract", "Abstract body."),
                DocumentSection::new("Introduction", "Intro body."),
                DocumentSection::new("Methodology", "Methodology body."),
                DocumentSection::new("Method", "Method body."),
                DocumentSection::new("Discussion", "Discussion body."),
                DocumentSection::new("Results", "Results body."),
                DocumentSection::new("Conclusion", "Conclusion body."),
                DocumentSection::new("References", "[1] Ref."),
            ],
        )
        .with_title("Sample Paper")
    }

    #[test]
    fn test_is_configured() {
        assert!(!PaperSummarizer::unconfigured().unwrap().is_configured());
        assert!(configured(Arc::new(MockLlmProvider::new("mock"))).is_configured());
    }

    #[test]
    fn test_select_priority_sections() {
        let document = sample_document();
        let titles: Vec<&str> = PaperSummarizer::select_priority_sections(&document)
            .iter()
            .map(|s| s.title())
            .collect();

        assert_eq!(
            titles,
            vec!["Abstract", "Introduction", "Method", "Results", "Conclusion"]
        );
    }

    #[tokio::test]
    async fn test_unconfigured_sections_are_empty() {
        let summarizer = PaperSummarizer::unconfigured().unwrap();
        let summaries = summarizer
            .summarize_all_sections(&sample_document())
            .await
            .unwrap();

        assert_eq!(summaries.len(), 5);
        assert!(summaries.iter().all(|(_, s)| s.is_empty()));
    }

    #[tokio::test]
    async fn test_sections_summarized_in_document_order() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("摘要"));
        let summarizer = configured(provider.clone());

        let summaries = summarizer
            .summarize_all_sections(&sample_document())
            .await
            .unwrap();

        assert_eq!(
            summaries.titles(),
            vec!["Abstract", "Introduction", "Method", "Results", "Conclusion"]
        );
        assert!(summaries.iter().all(|(_, s)| s == "摘要"));

        let calls = provider.calls();
        assert_eq!(calls.len(), 5);
        assert!(calls[0].contains("章節：Abstract"));
        assert!(calls[0].contains("論文標題：Sample Paper"));
        assert!(calls[2].contains("章節：Method"));
        assert!(calls[4].contains("章節：Conclusion"));
    }

    #[tokio::test]
    async fn test_section_failure_does_not_abort_batch() {
        let provider = Arc::new(
            MockLlmProvider::new("mock")
                .with_response("ok")
                .with_failure_on("章節：Method"),
        );
        let summarizer = configured(provider.clone());

        let summaries = summarizer
            .summarize_all_sections(&sample_document())
            .await
            .unwrap();

        assert_eq!(summaries.get("Method"), Some(""));
        assert_eq!(summaries.get("Results"), Some("ok"));
        assert_eq!(summaries.get("Conclusion"), Some("ok"));
        assert_eq!(provider.call_count(), 5);
    }

    #[tokio::test]
    async fn test_whitespace_section_skips_call() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("ok"));
        let summarizer = configured(provider.clone());

        let summary = summarizer
            .summarize_section(&DocumentSection::new("Abstract", "  \n\t "), None)
            .await
            .unwrap();

        assert_eq!(summary, "");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_render_failure_aborts_batch() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("ok"));
        let catalog = PromptCatalog::new()
            .unwrap()
            .with_section_template(PromptTemplate::parse("${var:unknown}").unwrap());
        let summarizer =
            PaperSummarizer::with_catalog(Some(LlmClient::new(provider.clone(), "m")), catalog);

        let error = summarizer
            .summarize_all_sections(&sample_document())
            .await
            .unwrap_err();

        assert!(error.to_string().contains("unknown"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_overall_summary_combines_non_empty_sections() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("總結"));
        let summarizer = configured(provider.clone());

        let mut summaries = SectionSummaries::new();
        summaries.insert("Abstract", "摘要一");
        summaries.insert("Method", "");
        summaries.insert("Results", "結果一");

        let overall = summarizer
            .summarize_overall(&summaries, Some("Sample Paper"))
            .await;

        assert_eq!(overall, "總結");
        let prompt = &provider.calls()[0];
        assert!(prompt.contains("Abstract:\n摘要一\n\nResults:\n結果一"));
        assert!(!prompt.contains("Method:"));
    }

    #[tokio::test]
    async fn test_overall_summary_failure_degrades() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_error("HTTP 500"));
        let summarizer = configured(provider);

        let overall = summarizer
            .summarize_overall(&SectionSummaries::new(), None)
            .await;
        assert_eq!(overall, OVERALL_SUMMARY_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_overall_summary_unconfigured() {
        let summarizer = PaperSummarizer::unconfigured().unwrap();
        let completion = summarizer
            .overall_completion(&SectionSummaries::new(), None)
            .await;

        assert!(matches!(completion, Completion::Unconfigured));
        assert_eq!(
            summarizer.summarize_overall(&SectionSummaries::new(), None).await,
            OVERALL_SUMMARY_PLACEHOLDER
        );
    }

    #[tokio::test]
    async fn test_insights_unconfigured_are_empty() {
        let summarizer = PaperSummarizer::unconfigured().unwrap();
        assert_eq!(summarizer.derive_insights("總結").await, Insights::default());
    }

    #[tokio::test]
    async fn test_insights_degrade_independently() {
        let provider = Arc::new(
            MockLlmProvider::new("mock")
                .with_failure_on("五個最重要的重點")
                .with_reply_for("應用方向", "1. 應用一"),
        );
        let summarizer = configured(provider.clone());

        let insights = summarizer.derive_insights("總結").await;

        assert_eq!(insights.important_points, IMPORTANT_POINTS_PLACEHOLDER);
        assert_eq!(insights.ideas, "1. 應用一");
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_insights_both_failing() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_error("down"));
        let insights = configured(provider.clone()).derive_insights("總結").await;

        assert_eq!(
            insights,
            Insights::new(IMPORTANT_POINTS_PLACEHOLDER, APPLICATION_IDEAS_PLACEHOLDER)
        );
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_summarize_request() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("這篇論文探討了..."));
        let summarizer = configured(provider.clone());

        let request = SummaryRequest::new("Paper body").with_title("Test Paper");
        let summary = summarizer.summarize_request(&request).await.unwrap();

        assert_eq!(summary, "這篇論文探討了...");
        assert!(provider.calls()[0].contains("main contributions、methodology、results"));
    }

    #[tokio::test]
    async fn test_summarize_request_unconfigured() {
        let summarizer = PaperSummarizer::unconfigured().unwrap();
        let summary = summarizer
            .summarize_request(&SummaryRequest::new("Paper body"))
            .await
            .unwrap();
        assert_eq!(summary, "");
    }
}
