//! Document domain types
//!
//! This module provides:
//! - `DocumentSection` and `ExtractedDocument`, the structured form of a paper
//! - `SectionKind`, the closed set of section kinds used for prompt selection
//! - `DocumentSource`, the trait for turning a file into text
//! - `SummaryRequest` for single-shot summaries

mod extracted;
mod request;
mod section;
mod source;

pub use extracted::ExtractedDocument;
pub use request::SummaryRequest;
pub use section::{DocumentSection, FULL_CONTENT_TITLE, SectionKind};
pub use source::{DocumentSource, ExtractedText};

#[cfg(test)]
pub use source::MockDocumentSource;
