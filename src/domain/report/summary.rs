//! Final summary report layout

use crate::domain::summary::{Insights, OVERALL_SUMMARY_PLACEHOLDER};

/// Attribution line closing every generated summary
pub const SUMMARY_ATTRIBUTION: &str = "*Chinese summary generated with Azure OpenAI*";

pub const IMPORTANT_POINTS_HEADING: &str = "## Top-5 Important Points";
pub const APPLICATION_IDEAS_HEADING: &str = "## Application Ideas";
pub const CHINESE_SUMMARY_HEADING: &str = "## Chinese Summary";

/// Assemble the summary report
///
/// The title, points and ideas blocks appear only when non-empty. The Chinese
/// summary block is always present, falling back to the overall-summary
/// placeholder.
pub fn assemble_summary_markdown(
    title: Option<&str>,
    important_points: &str,
    ideas: &str,
    overall_summary: Option<&str>,
) -> String {
    let mut lines: Vec<&str> = Vec::new();

    let heading = title.filter(|t| !t.is_empty()).map(|t| format!("# {}", t));
    if let Some(heading) = heading.as_deref() {
        lines.extend([heading, ""]);
    }

    if !important_points.is_empty() {
        lines.extend([IMPORTANT_POINTS_HEADING, "", important_points, ""]);
    }

    if !ideas.is_empty() {
        lines.extend([APPLICATION_IDEAS_HEADING, "", ideas, ""]);
    }

    let summary = overall_summary
        .filter(|s| !s.is_empty())
        .unwrap_or(OVERALL_SUMMARY_PLACEHOLDER);
    lines.extend([CHINESE_SUMMARY_HEADING, "", summary, ""]);

    lines.extend(["---", "", SUMMARY_ATTRIBUTION]);

    lines.join("\n")
}

/// Assemble the report from derived insights and the overall summary
pub fn render_summary(title: Option<&str>, insights: &Insights, overall_summary: &str) -> String {
    assemble_summary_markdown(
        title,
        &insights.important_points,
        &insights.ideas,
        Some(overall_summary),
    )
}
