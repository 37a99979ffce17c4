//! Document text source trait

use std::path::Path;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

/// Raw text pulled out of a document, one entry per page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pages: Vec<String>,
}

impl ExtractedText {
    pub fn from_pages(pages: Vec<String>) -> Self {
        Self { pages }
    }

    /// Single-page text, for sources without page information
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            pages: vec![text.into()],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Pages joined by newlines, trimmed
    pub fn full_text(&self) -> String {
        self.pages.join("\n").trim().to_string()
    }

    /// 1-based page numbers covered by this text
    pub fn page_numbers(&self) -> Vec<u32> {
        (1..=self.pages.len() as u32).collect()
    }
}

/// Trait for sources that turn a document path into text
///
/// Implementations report a missing path with `DomainError::NotFound` and any
/// other failure with `DomainError::Extraction`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<ExtractedText, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_joins_pages() {
        let text = ExtractedText::from_pages(vec![
            "Page 1 content".to_string(),
            "Page 2 content\n".to_string(),
        ]);

        assert_eq!(text.full_text(), "Page 1 content\nPage 2 content");
        assert_eq!(text.page_count(), 2);
        assert_eq!(text.page_numbers(), vec![1, 2]);
    }

    #[test]
    fn test_empty_text() {
        let text = ExtractedText::default();
        assert_eq!(text.full_text(), "");
        assert!(text.page_numbers().is_empty());
    }

    #[tokio::test]
    async fn test_mock_source() {
        let mut source = MockDocumentSource::new();
        source
            .expect_extract_text()
            .returning(|_| Ok(ExtractedText::from_text("mocked")));

        let text = source.extract_text(Path::new("paper.pdf")).await.unwrap();
        assert_eq!(text.full_text(), "mocked");
    }
}
