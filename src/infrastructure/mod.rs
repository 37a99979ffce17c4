pub mod credentials;
pub mod files;
pub mod llm;
pub mod logging;
pub mod pdf;

pub use credentials::EnvCredentialProvider;
pub use files::{MarkdownWriter, default_output_path, format_file_size, validate_pdf_file};
pub use llm::{LlmClientOptions, LlmProviderFactory};
pub use logging::{LoggingConfig, init_logging};
pub use pdf::PdfTextSource;
