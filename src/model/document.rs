//! Document-level types.

use super::{Block, PageSetup, StyleSheet};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered block sequence plus everything needed to lay it out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Document metadata written to the PDF info dictionary
    pub metadata: Metadata,

    /// Page size and margins
    pub page_setup: PageSetup,

    /// Styles the blocks refer to
    pub styles: StyleSheet,

    /// Content in reading order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create an empty Letter document with the standard style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from a block list.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            ..Self::default()
        }
    }

    /// Parse a document from JSON.
    ///
    /// Accepts either a full document object or a bare array of blocks.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim_start().starts_with('[') {
            let blocks: Vec<Block> = serde_json::from_str(json)?;
            Ok(Self::with_blocks(blocks))
        } else {
            Ok(serde_json::from_str(json)?)
        }
    }

    /// Serialize the document to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the page setup.
    pub fn with_page_setup(mut self, setup: PageSetup) -> Self {
        self.page_setup = setup;
        self
    }

    /// Set the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Set the metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append several blocks.
    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of explicit page breaks; the rendered page count is at least this plus one.
    pub fn page_break_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_page_break()).count()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// Creation date; omitted from the output when unset so renders stay reproducible
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the creation date.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_break_count() {
        let mut doc = Document::new();
        doc.extend([
            Block::paragraph("A"),
            Block::page_break(),
            Block::paragraph("B"),
            Block::page_break(),
        ]);
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.page_break_count(), 2);
    }

    #[test]
    fn test_from_json_block_array() {
        let doc = Document::from_json(r#"[{"type": "paragraph", "text": "Hi"}]"#).unwrap();
        assert_eq!(doc.blocks, vec![Block::paragraph("Hi")]);
        assert_eq!(doc.styles, StyleSheet::standard());
    }

    #[test]
    fn test_json_round_trip_keeps_custom_style() {
        use crate::model::{Color, Style};

        let doc = Document::with_blocks(vec![Block::title("X").with_style("banner")])
            .with_styles(
                StyleSheet::standard()
                    .with_style("banner", Style::new(24.0).with_color(Color::DARK_GREEN)),
            )
            .with_title("Fixture");

        let parsed = Document::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Document::from_json("{not json").is_err());
    }
}
