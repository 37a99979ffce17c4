//! Summary command - full pipeline into a Traditional Chinese report

use tracing::{error, info, warn};

use super::{SummaryArgs, emit, init, report_written};
use crate::infrastructure::files::{format_file_size, validate_pdf_file};

pub async fn run(args: SummaryArgs) -> anyhow::Result<()> {
    let config = init();
    let SummaryArgs {
        document: args,
        sections,
    } = args;

    validate_pdf_file(&args.pdf)?;
    info!(
        file = %args.pdf.display(),
        size = %format_file_size(std::fs::metadata(&args.pdf)?.len()),
        "Summarizing paper"
    );

    let pipeline = crate::create_summary_pipeline(&config).await?;
    if !pipeline.summarizer().is_configured() {
        warn!("Azure OpenAI is not configured, the report will contain placeholders only");
    }

    let output = pipeline.run(&args.pdf).await.inspect_err(|e| {
        error!(stage = %e.stage(), error = %e, "Summary pipeline aborted");
    })?;

    let markdown = if sections {
        output.section_report()
    } else {
        output.markdown
    };

    let written = emit(&args, &markdown)?;
    report_written(written.as_deref());

    Ok(())
}
