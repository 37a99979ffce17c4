use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::domain::DomainError;
use crate::domain::document::{DocumentSource, ExtractedText};

fn extraction_failed(reason: impl std::fmt::Display) -> DomainError {
    DomainError::extraction(format!(
        "Failed to extract text from PDF: {}. Check if the file is corrupted, encrypted, or not a valid PDF.",
        reason
    ))
}

/// Reads the embedded text layer of a PDF, page by page
#[derive(Debug, Clone, Default)]
pub struct PdfTextSource;

impl PdfTextSource {
    pub fn new() -> Self {
        Self
    }

    fn extract_blocking(path: PathBuf) -> Result<Vec<String>, DomainError> {
        let bytes = std::fs::read(&path).map_err(extraction_failed)?;
        pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(extraction_failed)
    }
}

#[async_trait]
impl DocumentSource for PdfTextSource {
    #[instrument(skip(self), fields(path = %path.display()))]
    async fn extract_text(&self, path: &Path) -> Result<ExtractedText, DomainError> {
        // Only a confirmed absence is NotFound; a failed existence check is an extraction error
        let exists = tokio::fs::try_exists(path).await.map_err(extraction_failed)?;
        if !exists {
            return Err(DomainError::not_found(format!(
                "PDF file not found: {}",
                path.display()
            )));
        }

        // The parser is CPU bound and may panic on malformed input
        let owned = path.to_path_buf();
        let pages = tokio::task::spawn_blocking(move || Self::extract_blocking(owned))
            .await
            .map_err(extraction_failed)??;

        debug!(pages = pages.len(), "PDF text extracted");

        Ok(ExtractedText::from_pages(pages))
    }
}
