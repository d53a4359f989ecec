//! PDF writer: turns laid-out pages into a PDF file.

pub mod encoding;
mod options;
mod pdf;

pub use options::RenderOptions;
pub use pdf::{to_bytes, write_file, PdfBuilder, PRODUCER};
