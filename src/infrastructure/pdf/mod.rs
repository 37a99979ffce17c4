//! PDF text extraction

mod text_source;

pub use text_source::PdfTextSource;
