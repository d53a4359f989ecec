//! Flow pagination: places wrapped lines on pages top to bottom.

use super::metrics::TextMeasure;
use super::wrap::{wrap, Fragment, Line};
use crate::error::{Error, Result};
use crate::markup::{self, Whitespace};
use crate::model::{Alignment, Block, Color, Document, PageSetup, Style};
use log::debug;

const EPSILON: f32 = 1e-3;

/// A line at its final position on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Left edge of the first glyph, in points from the page's left edge
    pub x: f32,
    /// Baseline, in points from the page's bottom edge
    pub baseline: f32,
    pub fragments: Vec<Fragment>,
    pub font_size: f32,
    pub color: Color,
    /// Extra space added to each inter-word space (justified lines only)
    pub word_spacing: f32,
    /// Index of the block the line came from
    pub block: usize,
}

impl PlacedLine {
    /// Text of the line.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

/// One page of laid-out content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    /// 1-based page number
    pub number: usize,
    pub lines: Vec<PlacedLine>,
}

impl LaidOutPage {
    /// Check if the page carries no text.
    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of the page, one line per placed line.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(PlacedLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A block after markup parsing, style resolution and wrapping.
enum Item<'a> {
    Text {
        index: usize,
        style: &'a Style,
        lines: Vec<Line>,
    },
    Spacer(f32),
    PageBreak,
}

impl Item<'_> {
    /// Height the first line needs when it follows other content.
    fn first_line_need(&self) -> Option<f32> {
        match self {
            Item::Text { style, lines, .. } if !lines.is_empty() => {
                Some(style.space_before + style.leading)
            }
            _ => None,
        }
    }
}

fn prepare<'a>(doc: &'a Document, measure: &dyn TextMeasure) -> Result<Vec<Item<'a>>> {
    let setup = &doc.page_setup;
    let mut items = Vec::with_capacity(doc.blocks.len());

    for (index, block) in doc.blocks.iter().enumerate() {
        let item = match block {
            Block::Spacer { height } => {
                if !height.is_finite() || *height < 0.0 {
                    return Err(Error::Layout(format!(
                        "block {}: spacer height must be a non-negative number of points, got {}",
                        index, height
                    )));
                }
                Item::Spacer(*height)
            }
            Block::PageBreak => Item::PageBreak,
            _ => {
                let (Some(name), Some(text)) = (block.style_name(), block.text()) else {
                    continue;
                };
                let style = doc.styles.get(&name)?;
                if style.leading > setup.body_height() + EPSILON {
                    return Err(Error::Layout(format!(
                        "block {}: line height {}pt exceeds the {}pt body height",
                        index,
                        style.leading,
                        setup.body_height()
                    )));
                }
                let width = setup.body_width() - style.left_indent;
                if width <= 0.0 {
                    return Err(Error::Layout(format!(
                        "block {}: indent {}pt leaves no room for text",
                        index, style.left_indent
                    )));
                }

                let (mode, source) = if block.preserves_whitespace() {
                    (Whitespace::Preserve, markup::trim_code(text))
                } else {
                    (Whitespace::Collapse, text)
                };
                let segments =
                    markup::parse(source, mode).map_err(|msg| Error::markup(index, msg))?;
                let lines = wrap(&segments, style, width, measure, mode);
                debug!("block {} ({}) wraps into {} line(s)", index, block.kind(), lines.len());
                Item::Text {
                    index,
                    style,
                    lines,
                }
            }
        };
        items.push(item);
    }
    Ok(items)
}

struct Paginator<'a> {
    setup: &'a PageSetup,
    pages: Vec<LaidOutPage>,
    current: LaidOutPage,
    /// Height consumed on the current page, from the top of the body box
    cursor: f32,
}

impl<'a> Paginator<'a> {
    fn new(setup: &'a PageSetup) -> Self {
        Self {
            setup,
            pages: Vec::new(),
            current: LaidOutPage {
                number: 1,
                lines: Vec::new(),
            },
            cursor: 0.0,
        }
    }

    fn at_top(&self) -> bool {
        self.cursor <= 0.0
    }

    fn remaining(&self) -> f32 {
        self.setup.body_height() - self.cursor
    }

    fn new_page(&mut self) {
        let number = self.current.number + 1;
        let done = std::mem::replace(
            &mut self.current,
            LaidOutPage {
                number,
                lines: Vec::new(),
            },
        );
        debug!("page {} closed with {} lines", done.number, done.lines.len());
        self.pages.push(done);
        self.cursor = 0.0;
    }

    fn place_spacer(&mut self, height: f32) {
        if self.at_top() {
            debug!("spacer of {}pt dropped at top of page {}", height, self.current.number);
        } else if height > self.remaining() + EPSILON {
            debug!("spacer of {}pt ends page {}", height, self.current.number);
            self.new_page();
        } else {
            self.cursor += height;
        }
    }

    fn place_text(&mut self, index: usize, style: &Style, lines: Vec<Line>, next_need: Option<f32>) {
        if lines.is_empty() {
            return;
        }

        if style.keep_with_next && !self.at_top() {
            let own = style.space_before + lines.len() as f32 * style.leading;
            let needed = own + next_need.unwrap_or(0.0);
            if needed > self.remaining() + EPSILON {
                debug!(
                    "block {} kept with next: {}pt needed, {}pt left on page {}",
                    index,
                    needed,
                    self.remaining(),
                    self.current.number
                );
                self.new_page();
            }
        }

        let available = self.setup.body_width() - style.left_indent;
        let mut space_before = style.space_before;
        for line in lines {
            if self.at_top() {
                space_before = 0.0;
            }
            if space_before + style.leading > self.remaining() + EPSILON {
                debug!("block {} continues on page {}", index, self.current.number + 1);
                self.new_page();
                space_before = 0.0;
            }
            self.cursor += space_before;
            space_before = 0.0;

            let placed = self.position(index, style, available, line);
            self.current.lines.push(placed);
            self.cursor += style.leading;
        }
        self.cursor += style.space_after;
    }

    fn position(&self, index: usize, style: &Style, available: f32, line: Line) -> PlacedLine {
        let slack = (available - line.width).max(0.0);
        let mut word_spacing = 0.0;
        let offset = match style.alignment {
            Alignment::Left => 0.0,
            Alignment::Center => slack / 2.0,
            Alignment::Right => slack,
            Alignment::Justify => {
                let spaces = line.space_count();
                if line.wrapped && spaces > 0 {
                    word_spacing = slack / spaces as f32;
                }
                0.0
            }
        };

        PlacedLine {
            x: self.setup.margins.left + style.left_indent + offset,
            baseline: self.setup.body_top() - self.cursor - style.font_size,
            fragments: line.fragments,
            font_size: style.font_size,
            color: style.color,
            word_spacing,
            block: index,
        }
    }

    fn finish(mut self) -> Vec<LaidOutPage> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Lay out a document into pages without writing anything.
///
/// Blocks are processed in order; every markup, style and size problem is
/// reported before any page is produced. An empty document yields one blank
/// page.
pub fn layout_document(doc: &Document, measure: &dyn TextMeasure) -> Result<Vec<LaidOutPage>> {
    doc.page_setup.validate()?;
    doc.styles.validate()?;

    let items = prepare(doc, measure)?;
    let mut paginator = Paginator::new(&doc.page_setup);

    for (i, item) in items.iter().enumerate() {
        match item {
            Item::Spacer(height) => paginator.place_spacer(*height),
            Item::PageBreak => paginator.new_page(),
            Item::Text {
                index,
                style,
                lines,
            } => {
                let next_need = items.get(i + 1).and_then(Item::first_line_need);
                paginator.place_text(*index, style, lines.clone(), next_need);
            }
        }
    }

    let pages = paginator.finish();
    debug!("laid out {} blocks on {} pages", doc.blocks.len(), pages.len());
    Ok(pages)
}

/// Height a single text block consumes when it does not cross a page:
/// `space_before + lines * leading + space_after`.
pub fn measure_height(
    text: &str,
    style: &Style,
    width: f32,
    mode: Whitespace,
    measure: &dyn TextMeasure,
) -> Result<f32> {
    let segments = markup::parse(text, mode).map_err(|msg| Error::markup(0, msg))?;
    let lines = wrap(&segments, style, width - style.left_indent, measure, mode);
    Ok(style.space_before + lines.len() as f32 * style.leading + style.space_after)
}
