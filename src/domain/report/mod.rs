//! Markdown report rendering

mod document;
mod sections;
mod summary;

pub use document::render_document;
pub use sections::{SECTION_REPORT_ATTRIBUTION, UNKNOWN_TITLE, render_section_summaries};
pub use summary::{
    APPLICATION_IDEAS_HEADING, CHINESE_SUMMARY_HEADING, IMPORTANT_POINTS_HEADING,
    SUMMARY_ATTRIBUTION, assemble_summary_markdown, render_summary,
};
