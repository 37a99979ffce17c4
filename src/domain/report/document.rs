//! Sectioned Markdown rendering of an extracted document

use super::summary::{CHINESE_SUMMARY_HEADING, SUMMARY_ATTRIBUTION};
use crate::domain::document::ExtractedDocument;

/// Render a document with every section as a second-level heading
///
/// The `Full Content` section is hidden once real sections exist.
pub fn render_document(document: &ExtractedDocument) -> String {
    let mut out: Vec<String> = Vec::new();

    if let Some(title) = document.title.as_deref().filter(|t| !t.is_empty()) {
        out.push(format!("# {}", title));
        out.push(String::new());
    }

    let summary = document.summary_zh.as_deref().filter(|s| !s.is_empty());
    if let Some(summary) = summary {
        out.push(CHINESE_SUMMARY_HEADING.to_string());
        out.push(String::new());
        out.push(summary.to_string());
        out.push(String::new());
    }

    let structured = document.sections.len() > 1;
    for section in &document.sections {
        if structured && section.is_full_content() {
            continue;
        }

        out.push(format!("## {}", section.title()));
        out.push(String::new());
        out.push(section.content().to_string());
        out.push(String::new());
    }

    out.push("---".to_string());
    out.push(String::new());
    out.push(format!("*Extracted from: {}*", document.source_file));
    if summary.is_some() {
        out.push(SUMMARY_ATTRIBUTION.to_string());
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::DocumentSection;

    #[test]
    fn test_render_sections() {
        let document = ExtractedDocument::new(
            "/papers/a.pdf",
            vec![
                DocumentSection::new("Abstract", "Short abstract."),
                DocumentSection::new("Results", "Numbers."),
            ],
        )
        .with_title("A Paper");

        let markdown = render_document(&document);

        assert_eq!(
            markdown,
            "# A Paper\n\n## Abstract\n\nShort abstract.\n\n## Results\n\nNumbers.\n\n---\n\n*Extracted from: /papers/a.pdf*"
        );
    }

    #[test]
    fn test_full_content_hidden_when_structured() {
        let document = ExtractedDocument::new(
            "/papers/b.pdf",
            vec![
                DocumentSection::full_content("everything"),
                DocumentSection::new("Abstract", "Short abstract."),
            ],
        );

        let markdown = render_document(&document);
        assert!(!markdown.contains("## Full Content"));
        assert!(!markdown.contains("everything"));
    }

    #[test]
    fn test_full_content_shown_alone() {
        let document = ExtractedDocument::new(
            "/papers/c.pdf",
            vec![DocumentSection::full_content("everything")],
        );

        let markdown = render_document(&document);
        assert!(markdown.starts_with("## Full Content\n\neverything"));
    }

    #[test]
    fn test_summary_adds_block_and_attribution() {
        let document = ExtractedDocument::new(
            "/papers/d.pdf",
            vec![DocumentSection::new("Abstract", "text")],
        )
        .with_summary_zh("中文摘要內容");

        let markdown = render_document(&document);

        assert!(markdown.contains(&format!("{}\n\n中文摘要內容", CHINESE_SUMMARY_HEADING)));
        assert!(markdown.ends_with(SUMMARY_ATTRIBUTION));
        assert!(!markdown.starts_with("# "));
    }
}
