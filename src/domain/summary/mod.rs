//! Chinese summarization stages and the pipeline that sequences them

mod outcome;
mod pipeline;
mod summarizer;

pub use outcome::{
    APPLICATION_IDEAS_PLACEHOLDER, Completion, IMPORTANT_POINTS_PLACEHOLDER, Insights,
    OVERALL_SUMMARY_PLACEHOLDER, SECTION_SUMMARY_PLACEHOLDER, SectionSummaries,
};
pub use pipeline::{PipelineError, PipelineOutput, PipelineStage, SummaryPipeline};
pub use summarizer::PaperSummarizer;
