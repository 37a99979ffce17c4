//! Extract command - sectioned Markdown without summarization

use tracing::info;

use super::{DocumentArgs, emit, init, report_written};
use crate::domain::report::render_document;
use crate::infrastructure::files::validate_pdf_file;

pub async fn run(args: DocumentArgs) -> anyhow::Result<()> {
    let config = init();

    validate_pdf_file(&args.pdf)?;

    let pipeline = crate::create_extraction_pipeline(&config)?;
    let document = pipeline.extract_document(&args.pdf).await?;

    info!(
        sections = document.sections.len(),
        title = document.title.as_deref().unwrap_or("-"),
        "Document extracted"
    );

    let written = emit(&args, &render_document(&document))?;
    report_written(written.as_deref());

    Ok(())
}
