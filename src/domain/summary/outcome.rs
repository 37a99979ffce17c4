//! Stage result types for the summarization pipeline

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Placeholder used when the overall summary could not be produced
pub const OVERALL_SUMMARY_PLACEHOLDER: &str = "(Failed to generate overall summary)";
/// Placeholder used when the important points call fails
pub const IMPORTANT_POINTS_PLACEHOLDER: &str = "(Failed to generate important points)";
/// Placeholder used when the application ideas call fails
pub const APPLICATION_IDEAS_PLACEHOLDER: &str = "(Failed to generate application ideas)";
/// Shown in the core-section report for a section left without a summary
pub const SECTION_SUMMARY_PLACEHOLDER: &str = "(Failed to generate section summary)";

/// Outcome of a single degradable LLM call
#[derive(Debug)]
pub enum Completion {
    /// The model produced text
    Generated(String),
    /// No LLM is configured; the call was never made
    Unconfigured,
    /// The call was attempted and failed
    Failed(DomainError),
}

impl Completion {
    pub fn from_result(result: Result<String, DomainError>) -> Self {
        match result {
            Ok(text) => Self::Generated(text),
            Err(error) => Self::Failed(error),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// Resolve into text, substituting per-outcome fallbacks
    pub fn resolve(self, unconfigured: &str, failed: &str) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Unconfigured => unconfigured.to_string(),
            Self::Failed(_) => failed.to_string(),
        }
    }
}

/// Section title to summary, in section order
///
/// Inserting an existing title keeps its position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummaries {
    entries: Vec<(String, String)>,
}

impl SectionSummaries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, title: impl Into<String>, summary: impl Into<String>) {
        let title = title.into();
        let summary = summary.into();

        match self.entries.iter_mut().find(|(t, _)| *t == title) {
            Some((_, existing)) => *existing = summary,
            None => self.entries.push((title, summary)),
        }
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, s)| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, s)| (t.as_str(), s.as_str()))
    }

    pub fn titles(&self) -> Vec<&str> {
        self.iter().map(|(t, _)| t).collect()
    }

    /// Non-empty summaries as `"{section}:\n{summary}"` blocks separated by blank lines
    pub fn combined(&self) -> String {
        self.iter()
            .filter(|(_, summary)| !summary.is_empty())
            .map(|(title, summary)| format!("{}:\n{}", title, summary))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Points and ideas derived from the overall summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub important_points: String,
    pub ideas: String,
}

impl Insights {
    pub fn new(important_points: impl Into<String>, ideas: impl Into<String>) -> Self {
        Self {
            important_points: important_points.into(),
            ideas: ideas.into(),
        }
    }
}
