//! Content blocks: the units a document is assembled from.

use super::StyleSheet;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

fn default_heading_level() -> u8 {
    2
}

/// One unit of document content.
///
/// Text-bearing blocks may contain inline markup (`<b>`, `<br/>`, entities)
/// and may name a style; without one they use the sheet's default for their
/// kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Document or section title
    Title {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },

    /// Section heading
    Heading {
        text: String,
        /// Heading level (1-6)
        #[serde(default = "default_heading_level")]
        level: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },

    /// Body text; whitespace collapses
    Paragraph {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },

    /// Monospace text; whitespace and line breaks are preserved
    CodeBlock {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },

    /// Vertical gap in points
    Spacer { height: f32 },

    /// Forced page break
    PageBreak,
}

impl Block {
    /// Create a title block.
    pub fn title(text: impl Into<String>) -> Self {
        Block::Title {
            text: text.into(),
            style: None,
        }
    }

    /// Create a heading block.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Block::Heading {
            text: text.into(),
            level: level.clamp(1, 6),
            style: None,
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            style: None,
        }
    }

    /// Create a code block.
    pub fn code(text: impl Into<String>) -> Self {
        Block::CodeBlock {
            text: text.into(),
            style: None,
        }
    }

    /// Create a spacer of the given height in points.
    pub fn spacer(height: f32) -> Self {
        Block::Spacer { height }
    }

    /// Create a page break.
    pub fn page_break() -> Self {
        Block::PageBreak
    }

    /// Use a named style instead of the default. No-op on spacers and breaks.
    pub fn with_style(mut self, name: impl Into<String>) -> Self {
        match &mut self {
            Block::Title { style, .. }
            | Block::Heading { style, .. }
            | Block::Paragraph { style, .. }
            | Block::CodeBlock { style, .. } => *style = Some(name.into()),
            Block::Spacer { .. } | Block::PageBreak => {}
        }
        self
    }

    /// Text payload, if this block carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Title { text, .. }
            | Block::Heading { text, .. }
            | Block::Paragraph { text, .. }
            | Block::CodeBlock { text, .. } => Some(text),
            Block::Spacer { .. } | Block::PageBreak => None,
        }
    }

    /// Style this block resolves to, if it carries text.
    pub fn style_name(&self) -> Option<Cow<'_, str>> {
        match self {
            Block::Title { style, .. } => {
                Some(style.as_deref().unwrap_or(StyleSheet::TITLE).into())
            }
            Block::Heading { style, level, .. } => Some(match style {
                Some(name) => Cow::Borrowed(name.as_str()),
                None => Cow::Owned(StyleSheet::heading_name(*level)),
            }),
            Block::Paragraph { style, .. } => {
                Some(style.as_deref().unwrap_or(StyleSheet::BODY).into())
            }
            Block::CodeBlock { style, .. } => {
                Some(style.as_deref().unwrap_or(StyleSheet::CODE).into())
            }
            Block::Spacer { .. } | Block::PageBreak => None,
        }
    }

    /// Check if whitespace in this block is significant.
    pub fn preserves_whitespace(&self) -> bool {
        matches!(self, Block::CodeBlock { .. })
    }

    /// Check if this is a forced page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }

    /// Short name of the block kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Title { .. } => "title",
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::CodeBlock { .. } => "code_block",
            Block::Spacer { .. } => "spacer",
            Block::PageBreak => "page_break",
        }
    }
}
