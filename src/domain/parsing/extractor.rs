//! Section extraction from raw document text

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::boundary::{SectionBoundary, SectionBoundaryDetector, SectionPattern};
use crate::domain::DomainError;
use crate::domain::document::{DocumentSection, ExtractedDocument};

static KEYWORDS_MARKER: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^keywords\s*:")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Splits document text into labeled sections
#[derive(Debug, Clone, Default)]
pub struct SectionExtractor {
    detector: SectionBoundaryDetector,
}

impl SectionExtractor {
    pub fn new(detector: SectionBoundaryDetector) -> Self {
        Self { detector }
    }

    /// Build an extractor from a custom pattern table; empty means defaults
    pub fn with_patterns(patterns: &[SectionPattern]) -> Result<Self, DomainError> {
        if patterns.is_empty() {
            return Ok(Self::default());
        }

        Ok(Self::new(SectionBoundaryDetector::new(patterns)?))
    }

    pub fn detector(&self) -> &SectionBoundaryDetector {
        &self.detector
    }

    /// Extract sections in document order
    ///
    /// Each header owns the lines up to the next header; sections left empty
    /// after trimming are dropped. When no header is found, or every section
    /// came out empty, the whole trimmed text becomes a single `Full Content`
    /// section.
    pub fn extract_sections(&self, text: &str) -> Vec<DocumentSection> {
        let boundaries = self.detector.detect(text);

        if boundaries.is_empty() {
            return vec![DocumentSection::full_content(text.trim())];
        }

        let lines: Vec<&str> = text.split('\n').collect();

        let sections: Vec<DocumentSection> = boundaries
            .iter()
            .enumerate()
            .filter_map(|(i, boundary)| {
                let end = boundaries.get(i + 1).map_or(lines.len(), |next| next.line);
                let content = span_content(boundary, &lines[boundary.line + 1..end]);

                if content.is_empty() {
                    debug!(section = %boundary.name, line = boundary.line, "Dropping empty section");
                    None
                } else {
                    Some(DocumentSection::new(boundary.name.clone(), content))
                }
            })
            .collect();

        if sections.is_empty() {
            debug!(headers = boundaries.len(), "Every section was empty, keeping full content");
            return vec![DocumentSection::full_content(text.trim())];
        }

        sections
    }

    /// Re-parse the first section of a document into structured sections
    ///
    /// Documents without sections are returned unchanged. Title, source file
    /// and summary are preserved.
    pub fn parse_document(&self, document: ExtractedDocument) -> ExtractedDocument {
        let Some(first) = document.sections.first() else {
            return document;
        };

        let mut sections = self.extract_sections(first.content());

        // An unstructured document keeps the page coverage of its source text
        if let ([only], Some(pages)) = (sections.as_mut_slice(), first.page_numbers()) {
            if only.is_full_content() {
                *only = only.clone().with_page_numbers(pages.to_vec());
            }
        }

        debug!(
            source = %document.source_file,
            sections = sections.len(),
            "Parsed document sections"
        );

        document.with_sections(sections)
    }
}

fn span_content(boundary: &SectionBoundary, lines: &[&str]) -> String {
    let lines = if boundary.name.eq_ignore_ascii_case("abstract") {
        let cut = lines
            .iter()
            .position(|line| KEYWORDS_MARKER.is_match(line.trim()))
            .unwrap_or(lines.len());
        &lines[..cut]
    } else {
        lines
    };

    lines.join("\n").trim().to_string()
}
