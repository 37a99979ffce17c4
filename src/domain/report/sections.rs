//! Core-section report: overall summary followed by each section summary

use super::summary::CHINESE_SUMMARY_HEADING;
use crate::domain::document::ExtractedDocument;
use crate::domain::summary::{
    OVERALL_SUMMARY_PLACEHOLDER, SECTION_SUMMARY_PLACEHOLDER, SectionSummaries,
};

/// Heading used when no title was detected
pub const UNKNOWN_TITLE: &str = "(Unknown Title)";
/// Attribution line closing the core-section report
pub const SECTION_REPORT_ATTRIBUTION: &str =
    "*Chinese summary generated with Azure OpenAI, core-section summarization mode*";

/// Render the per-section summaries in document order
///
/// Only sections that were summarized appear. An empty summary is shown as
/// the section placeholder.
pub fn render_section_summaries(
    document: &ExtractedDocument,
    summaries: &SectionSummaries,
    overall_summary: &str,
) -> String {
    let title = document
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(UNKNOWN_TITLE);
    let overall = Some(overall_summary)
        .filter(|s| !s.is_empty())
        .unwrap_or(OVERALL_SUMMARY_PLACEHOLDER);

    let mut out = vec![
        format!("# {}", title),
        String::new(),
        CHINESE_SUMMARY_HEADING.to_string(),
        String::new(),
        overall.to_string(),
        String::new(),
    ];

    for section in &document.sections {
        let Some(summary) = summaries.get(section.title()) else {
            continue;
        };

        let summary = if summary.is_empty() {
            SECTION_SUMMARY_PLACEHOLDER
        } else {
            summary
        };

        out.push(format!("## {}", section.title()));
        out.push(String::new());
        out.push(summary.to_string());
        out.push(String::new());
    }

    out.push("---".to_string());
    out.push(String::new());
    out.push(format!("*Extracted from: {}*", document.source_file));
    out.push(SECTION_REPORT_ATTRIBUTION.to_string());

    out.join("\n")
}
