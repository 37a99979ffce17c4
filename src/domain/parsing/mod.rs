//! Heuristic structure detection for academic papers
//!
//! Title and header detection are pure functions of the input text, kept
//! apart from the LLM-dependent stages.

mod boundary;
mod extractor;
mod title;

pub use boundary::{
    DEFAULT_SECTION_PATTERNS, SectionBoundary, SectionBoundaryDetector, SectionPattern,
};
pub use extractor::SectionExtractor;
pub use title::{MAX_EXAMINED_LINES, MAX_SCANNED_LINES, MAX_TITLE_CHARS, MIN_TITLE_CHARS, detect_title};
