use serde::{Deserialize, Serialize};

/// Title given to the single section produced when no headers are found
pub const FULL_CONTENT_TITLE: &str = "Full Content";

/// Section kinds that drive prompt selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Abstract,
    Introduction,
    Method,
    Results,
    Conclusion,
    Other,
}

impl SectionKind {
    /// Map a canonical section title to its kind (exact, case-sensitive match)
    pub fn from_title(title: &str) -> Self {
        match title {
            "Abstract" => Self::Abstract,
            "Introduction" => Self::Introduction,
            "Method" => Self::Method,
            "Results" => Self::Results,
            "Conclusion" => Self::Conclusion,
            _ => Self::Other,
        }
    }

    /// Whether sections of this kind are summarized individually
    pub fn is_priority(&self) -> bool {
        !matches!(self, Self::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abstract => "Abstract",
            Self::Introduction => "Introduction",
            Self::Method => "Method",
            Self::Results => "Results",
            Self::Conclusion => "Conclusion",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled span of document text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSection {
    title: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_numbers: Option<Vec<u32>>,
}

impl DocumentSection {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            page_numbers: None,
        }
    }

    /// Section holding a whole document when no structure was detected
    pub fn full_content(content: impl Into<String>) -> Self {
        Self::new(FULL_CONTENT_TITLE, content)
    }

    pub fn with_page_numbers(mut self, page_numbers: Vec<u32>) -> Self {
        self.page_numbers = Some(page_numbers);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn page_numbers(&self) -> Option<&[u32]> {
        self.page_numbers.as_deref()
    }

    pub fn kind(&self) -> SectionKind {
        SectionKind::from_title(&self.title)
    }

    pub fn is_full_content(&self) -> bool {
        self.title == FULL_CONTENT_TITLE
    }
}
