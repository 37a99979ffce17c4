use serde::{Deserialize, Serialize};

fn default_focus_areas() -> Vec<String> {
    vec![
        "main contributions".to_string(),
        "methodology".to_string(),
        "results".to_string(),
    ]
}

/// Request for a single-shot summary of raw document content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub document_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_focus_areas")]
    pub focus_areas: Vec<String>,
}

impl SummaryRequest {
    pub fn new(document_content: impl Into<String>) -> Self {
        Self {
            document_content: document_content.into(),
            title: None,
            focus_areas: default_focus_areas(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_focus_areas(mut self, focus_areas: Vec<String>) -> Self {
        self.focus_areas = focus_areas;
        self
    }
}
