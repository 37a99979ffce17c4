//! Filesystem helpers for input validation and report output

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::DomainError;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Checks that `path` names an existing `.pdf` file
pub fn validate_pdf_file(path: &Path) -> Result<(), DomainError> {
    if !path.exists() {
        return Err(DomainError::not_found(format!(
            "PDF file not found: {}",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(DomainError::validation(format!(
            "Path is not a file: {}",
            path.display()
        )));
    }

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if !is_pdf {
        return Err(DomainError::validation(format!(
            "File must have a .pdf extension: {}",
            path.display()
        )));
    }

    Ok(())
}

/// `paper.pdf` becomes `paper.md` in the same directory
pub fn default_output_path(pdf_path: &Path) -> PathBuf {
    pdf_path.with_extension("md")
}

pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", size, SIZE_UNITS[unit])
}

/// Writes UTF-8 Markdown reports to disk
#[derive(Debug, Clone, Default)]
pub struct MarkdownWriter;

impl MarkdownWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write `content` to `path`, creating missing parent directories
    pub fn write(&self, path: &Path, content: &str) -> Result<(), DomainError> {
        let failed = |e: std::io::Error| {
            DomainError::io(format!(
                "Failed to write Markdown file {}: {}. Please check the output path and permissions.",
                path.display(),
                e
            ))
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(failed)?;
        }

        std::fs::write(path, content).map_err(failed)?;

        info!(
            path = %path.display(),
            size = %format_file_size(content.len() as u64),
            "Markdown written"
        );

        Ok(())
    }
}
