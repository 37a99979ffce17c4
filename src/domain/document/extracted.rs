use serde::{Deserialize, Serialize};

use super::DocumentSection;

/// A paper after text extraction, optionally split into sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub sections: Vec<DocumentSection>,
    pub source_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_zh: Option<String>,
}

impl ExtractedDocument {
    pub fn new(source_file: impl Into<String>, sections: Vec<DocumentSection>) -> Self {
        Self {
            title: None,
            sections,
            source_file: source_file.into(),
            summary_zh: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_optional_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_summary_zh(mut self, summary: impl Into<String>) -> Self {
        self.summary_zh = Some(summary.into());
        self
    }

    /// Replace the sections, keeping title, source and summary
    pub fn with_sections(mut self, sections: Vec<DocumentSection>) -> Self {
        self.sections = sections;
        self
    }

    /// Find a section by title, ignoring case
    pub fn get_section(&self, name: &str) -> Option<&DocumentSection> {
        let needle = name.to_lowercase();
        self.sections
            .iter()
            .find(|s| s.title().to_lowercase() == needle)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.get_section(name).is_some()
    }
}
