//! # samplepdf
//!
//! Paginated PDF fixture generator.
//!
//! The core is a small document assembler: an ordered list of content
//! blocks (titles, headings, paragraphs, code blocks, spacers, page breaks)
//! is styled through a [`StyleSheet`], flowed top to bottom into pages of a
//! [`PageSetup`], and written as a single PDF. Four built-in
//! [fixtures](fixtures) are assembled this way to serve as retrieval test data.
//!
//! ## Quick Start
//!
//! ```no_run
//! use samplepdf::{render_file, Block, Document};
//!
//! fn main() -> samplepdf::Result<()> {
//!     let doc = Document::with_blocks(vec![
//!         Block::title("Manual"),
//!         Block::heading("Intro", 2),
//!         Block::paragraph("Hello <b>world</b>."),
//!     ]);
//!     let path = render_file(&doc, "manual.pdf")?;
//!     println!("wrote {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Flow layout**: automatic page breaks, paragraphs split at line
//!   boundaries, headings kept with the following block
//! - **Inline markup**: `<b>`, `<strong>`, `<br/>` and character entities
//! - **Standard fonts**: Helvetica and Courier families with WinAnsi text
//! - **Reproducible output**: equal inputs produce byte-identical files
//! - **Fixtures**: four ready-made documents, rendered in parallel with Rayon

pub mod error;
pub mod fixtures;
pub mod inspect;
pub mod layout;
pub mod markup;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use fixtures::{generate_all, Fixture, GenerateOptions, GeneratedFile};
pub use inspect::{PageText, PdfInfo};
pub use layout::{layout_document, LaidOutPage, StandardMetrics, TextMeasure};
pub use model::{
    Alignment, Block, Color, Document, FontFamily, Margins, Metadata, PageSetup, PageSize, Style,
    StyleSheet,
};
pub use render::RenderOptions;

use lopdf::Document as LopdfDocument;
use std::path::{Path, PathBuf};

/// Lay out and build the PDF object graph; returns it with its page count.
fn build_pdf(doc: &Document, options: &RenderOptions) -> Result<(LopdfDocument, usize)> {
    let pages = layout_document(doc, &StandardMetrics::new())?;
    let pdf = render::PdfBuilder::new(&doc.page_setup, &doc.metadata, options).build(&pages)?;
    Ok((pdf, pages.len()))
}

/// Render `doc` to `path` and return the page count.
///
/// Layout runs before the file is opened, so a document that fails to lay
/// out leaves any existing file untouched.
pub(crate) fn write_document(doc: &Document, path: &Path, options: &RenderOptions) -> Result<usize> {
    let (mut pdf, pages) = build_pdf(doc, options)?;
    render::write_file(&mut pdf, path)?;
    log::info!("wrote {} ({} pages)", path.display(), pages);
    Ok(pages)
}

/// Render a document to a PDF file with default options.
///
/// The parent directory must exist. An existing file is replaced.
///
/// # Example
///
/// ```no_run
/// use samplepdf::{render_file, Block, Document};
///
/// let doc = Document::with_blocks(vec![Block::paragraph("Olá")]);
/// let path = render_file(&doc, "ola.pdf").unwrap();
/// assert!(path.exists());
/// ```
pub fn render_file<P: AsRef<Path>>(doc: &Document, path: P) -> Result<PathBuf> {
    render_file_with_options(doc, path, &RenderOptions::default())
}

/// Render a document to a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use samplepdf::{render_file_with_options, Block, Document, RenderOptions};
///
/// let doc = Document::with_blocks(vec![Block::code("fn main() {}")]);
/// let options = RenderOptions::new().uncompressed();
/// render_file_with_options(&doc, "code.pdf", &options).unwrap();
/// ```
pub fn render_file_with_options<P: AsRef<Path>>(
    doc: &Document,
    path: P,
    options: &RenderOptions,
) -> Result<PathBuf> {
    let path = path.as_ref();
    write_document(doc, path, options)?;
    Ok(path.to_path_buf())
}

/// Render a document to PDF bytes; identical to what [`render_file_with_options`] writes.
pub fn render_to_bytes(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    let (mut pdf, _) = build_pdf(doc, options)?;
    render::to_bytes(&mut pdf)
}

/// Builder for assembling block lists into PDFs.
///
/// # Example
///
/// ```no_run
/// use samplepdf::{Assembler, Block, Metadata, PageSetup};
///
/// let path = Assembler::new()
///     .with_page_setup(PageSetup::a4())
///     .with_metadata(Metadata::titled("Notas"))
///     .compress(false)
///     .render(vec![Block::title("Notas"), Block::paragraph("...")], "notas.pdf")?;
/// # Ok::<(), samplepdf::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    page_setup: PageSetup,
    styles: StyleSheet,
    metadata: Metadata,
    options: RenderOptions,
}

impl Assembler {
    /// Create an assembler for Letter pages with the standard style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page size and margins.
    pub fn with_page_setup(mut self, setup: PageSetup) -> Self {
        self.page_setup = setup;
        self
    }

    /// Set the style sheet blocks are resolved against.
    pub fn with_style_sheet(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Set document metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Enable or disable content stream compression.
    pub fn compress(mut self, compress: bool) -> Self {
        self.options = self.options.with_compression(compress);
        self
    }

    /// Replace all render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Combine the configuration with a block list.
    pub fn document(&self, blocks: Vec<Block>) -> Document {
        Document {
            metadata: self.metadata.clone(),
            page_setup: self.page_setup,
            styles: self.styles.clone(),
            blocks,
        }
    }

    /// Lay out blocks without writing anything.
    pub fn layout(&self, blocks: Vec<Block>) -> Result<Vec<LaidOutPage>> {
        layout_document(&self.document(blocks), &StandardMetrics::new())
    }

    /// Render blocks to `path` and return the path.
    pub fn render<P: AsRef<Path>>(&self, blocks: Vec<Block>, path: P) -> Result<PathBuf> {
        render_file_with_options(&self.document(blocks), path, &self.options)
    }

    /// Render blocks to PDF bytes.
    pub fn render_to_bytes(&self, blocks: Vec<Block>) -> Result<Vec<u8>> {
        render_to_bytes(&self.document(blocks), &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembler_defaults() {
        let assembler = Assembler::new();
        assert_eq!(assembler.page_setup, PageSetup::letter());
        assert_eq!(assembler.styles, StyleSheet::standard());
        assert!(assembler.options.compress);
    }

    #[test]
    fn test_assembler_builder_chained() {
        let assembler = Assembler::new()
            .with_page_setup(PageSetup::a4())
            .with_metadata(Metadata::titled("T"))
            .compress(false);
        let doc = assembler.document(vec![Block::paragraph("x")]);
        assert_eq!(doc.page_setup.size, PageSize::A4);
        assert_eq!(doc.metadata.title.as_deref(), Some("T"));
        assert!(!assembler.options.compress);
    }

    #[test]
    fn test_render_to_bytes_header() {
        let bytes = render_to_bytes(
            &Document::with_blocks(vec![Block::paragraph("Hello")]),
            &RenderOptions::default(),
        )
        .unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let assembler = Assembler::new().with_metadata(Metadata::titled("Repetível"));
        let blocks = vec![
            Block::title("Manual"),
            Block::paragraph("Texto com <b>negrito</b> e acentuação."),
            Block::page_break(),
            Block::code("{\n  \"a\": 1\n}"),
        ];
        let first = assembler.render_to_bytes(blocks.clone()).unwrap();
        let second = assembler.render_to_bytes(blocks).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_layout_error_leaves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        std::fs::write(&path, b"previous").unwrap();

        let doc = Document::with_blocks(vec![Block::paragraph("<b>unclosed")]);
        assert!(matches!(render_file(&doc, &path), Err(Error::Markup { block: 0, .. })));
        assert_eq!(std::fs::read(&path).unwrap(), b"previous");
    }

    #[test]
    fn test_missing_parent_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.pdf");
        let doc = Document::with_blocks(vec![Block::paragraph("x")]);
        assert!(matches!(render_file(&doc, &path), Err(Error::Io(_))));
    }
}
