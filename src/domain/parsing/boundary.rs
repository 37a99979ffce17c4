//! Section header detection

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Default header patterns for academic papers, checked in order
pub const DEFAULT_SECTION_PATTERNS: [(&str, &str); 10] = [
    (r"^Abstract\s*$", "Abstract"),
    (r"^Introduction\s*$", "Introduction"),
    (r"^Methods?\s*$", "Method"),
    (r"^Methodology\s*$", "Methodology"),
    (r"^Results?\s*$", "Results"),
    (r"^Experiments?\s*$", "Experiments"),
    (r"^Discussion\s*$", "Discussion"),
    (r"^Conclusions?\s*$", "Conclusion"),
    (r"^References?\s*$", "References"),
    (r"^Bibliography\s*$", "References"),
];

/// A header pattern and the canonical section name it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPattern {
    pub pattern: String,
    pub name: String,
}

impl SectionPattern {
    pub fn new(pattern: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            name: name.into(),
        }
    }

    pub fn defaults() -> Vec<Self> {
        DEFAULT_SECTION_PATTERNS
            .iter()
            .map(|(pattern, name)| Self::new(*pattern, *name))
            .collect()
    }
}

/// A detected section header and the line it sits on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBoundary {
    pub name: String,
    pub line: usize,
}

impl SectionBoundary {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }
}

/// Matches header lines against an ordered, case-insensitive pattern table
#[derive(Debug, Clone)]
pub struct SectionBoundaryDetector {
    patterns: Vec<(Regex, String)>,
}

impl SectionBoundaryDetector {
    /// Compile a pattern table; fails on the first invalid pattern
    pub fn new(patterns: &[SectionPattern]) -> Result<Self, DomainError> {
        let compiled = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(&p.pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| (regex, p.name.clone()))
                    .map_err(|e| {
                        DomainError::validation(format!(
                            "Invalid section pattern '{}' for '{}': {}",
                            p.pattern, p.name, e
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns: compiled })
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(_, name)| name.as_str())
    }

    /// Locate header lines in document order
    ///
    /// Blank lines are skipped; each remaining line is trimmed and matched
    /// against the table in order, the first match winning.
    pub fn detect(&self, text: &str) -> Vec<SectionBoundary> {
        text.split('\n')
            .enumerate()
            .filter_map(|(index, raw)| {
                let line = raw.trim();
                if line.is_empty() {
                    return None;
                }

                self.patterns
                    .iter()
                    .find(|(regex, _)| regex.is_match(line))
                    .map(|(_, name)| SectionBoundary::new(name.clone(), index))
            })
            .collect()
    }
}

impl Default for SectionBoundaryDetector {
    fn default() -> Self {
        let patterns = DEFAULT_SECTION_PATTERNS
            .iter()
            .map(|(pattern, name)| {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .unwrap();
                (regex, name.to_string())
            })
            .collect();

        Self { patterns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(boundaries: &[SectionBoundary]) -> Vec<&str> {
        boundaries.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_default_patterns() {
        let detector = SectionBoundaryDetector::default();
        assert_eq!(detector.pattern_count(), 10);
        assert_eq!(
            detector.section_names().filter(|n| *n == "References").count(),
            2
        );
    }

    #[test]
    fn test_custom_patterns() {
        let detector = SectionBoundaryDetector::new(&[
            SectionPattern::new(r"^Summary\s*$", "Summary"),
            SectionPattern::new(r"^Analysis\s*$", "Analysis"),
        ])
        .unwrap();

        assert_eq!(detector.pattern_count(), 2);
        let names: Vec<&str> = detector.section_names().collect();
        assert_eq!(names, vec!["Summary", "Analysis"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = SectionBoundaryDetector::new(&[SectionPattern::new(r"^(Broken", "Broken")]);
        let error = result.unwrap_err().to_string();
        assert!(error.contains("Invalid section pattern"));
    }

    #[test]
    fn test_detect_basic() {
        let text = "Title\n\nAbstract\nabstract text\n\nIntroduction\nintro\n\nMethods\nmethod text\n\nResults\nresults text\n\nConclusion\ndone";
        let boundaries = SectionBoundaryDetector::default().detect(text);

        assert_eq!(
            names(&boundaries),
            vec!["Abstract", "Introduction", "Method", "Results", "Conclusion"]
        );
        assert_eq!(boundaries[0], SectionBoundary::new("Abstract", 2));
        assert_eq!(boundaries[1], SectionBoundary::new("Introduction", 5));
        assert_eq!(boundaries[3], SectionBoundary::new("Results", 11));
        assert_eq!(boundaries[4], SectionBoundary::new("Conclusion", 14));
    }

    #[test]
    fn test_body_line_matching_a_header_is_a_boundary() {
        let boundaries = SectionBoundaryDetector::default().detect("Results\nresults\nnumbers");

        assert_eq!(names(&boundaries), vec!["Results", "Results"]);
        assert_eq!(boundaries[1].line, 1);
    }

    #[test]
    fn test_detect_case_insensitive_and_indented() {
        let text = "   ABSTRACT   \ncontent\n  introduction\ncontent\n\tMETHOD\ncontent";
        let boundaries = SectionBoundaryDetector::default().detect(text);

        assert_eq!(names(&boundaries), vec!["Abstract", "Introduction", "Method"]);
    }

    #[test]
    fn test_detect_variants() {
        let cases = [
            ("Method", "Method"),
            ("Methods", "Method"),
            ("Methodology", "Methodology"),
            ("Result", "Results"),
            ("Results", "Results"),
            ("Experiment", "Experiments"),
            ("Experiments", "Experiments"),
            ("Discussion", "Discussion"),
            ("Conclusions", "Conclusion"),
            ("Reference", "References"),
            ("Bibliography", "References"),
        ];

        let detector = SectionBoundaryDetector::default();
        for (header, expected) in cases {
            let text = format!("{}\nSome content here", header);
            let boundaries = detector.detect(&text);
            assert_eq!(boundaries.len(), 1, "header {}", header);
            assert_eq!(boundaries[0].name, expected, "header {}", header);
        }
    }

    #[test]
    fn test_detect_requires_whole_line() {
        let text = "The Abstract of this paper\n1. Introduction\nResults show improvement";
        assert!(SectionBoundaryDetector::default().detect(text).is_empty());
    }

    #[test]
    fn test_detect_no_sections() {
        let text = "This is just plain text\nwithout any section headers\nat all.";
        assert!(SectionBoundaryDetector::default().detect(text).is_empty());
    }

    #[test]
    fn test_boundaries_are_in_line_order() {
        let text = "Conclusion\na\n\nAbstract\nb\nReferences\nc\nIntroduction\nd";
        let boundaries = SectionBoundaryDetector::default().detect(text);

        assert_eq!(
            names(&boundaries),
            vec!["Conclusion", "Abstract", "References", "Introduction"]
        );
        assert!(boundaries.windows(2).all(|w| w[0].line < w[1].line));
    }
}
