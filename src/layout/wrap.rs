//! Greedy line breaking over styled segments.

use super::metrics::TextMeasure;
use crate::markup::{Segment, Whitespace};
use crate::model::{Font, Style};

/// Slack allowed when comparing a line against the available width.
const WIDTH_EPSILON: f32 = 1e-3;

/// A run of text set in one font on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub font: Font,
    /// Advance width in points
    pub width: f32,
}

/// One wrapped line of a block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub fragments: Vec<Fragment>,
    /// Total advance width in points
    pub width: f32,
    /// True when the line ended because the next word did not fit, as
    /// opposed to a forced break or the end of the block.
    pub wrapped: bool,
}

impl Line {
    /// Text of the line without font information.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Number of inter-word spaces (used for justification).
    pub fn space_count(&self) -> usize {
        self.fragments
            .iter()
            .map(|f| f.text.matches(' ').count())
            .sum()
    }

    /// Check if the line has no text.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Piece {
    text: String,
    bold: bool,
}

#[derive(Debug)]
enum Token {
    /// Characters between breakable spaces; may mix weights
    Word(Vec<Piece>),
    /// One or more breakable spaces
    Space(Piece),
    Break,
}

fn tokenize(segments: &[Segment]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word: Vec<Piece> = Vec::new();

    for segment in segments {
        match segment {
            Segment::Text { text, bold } => {
                for c in text.chars() {
                    if c == ' ' {
                        if !word.is_empty() {
                            tokens.push(Token::Word(std::mem::take(&mut word)));
                        }
                        match tokens.last_mut() {
                            Some(Token::Space(piece)) => piece.text.push(' '),
                            _ => tokens.push(Token::Space(Piece {
                                text: " ".to_string(),
                                bold: *bold,
                            })),
                        }
                        continue;
                    }
                    match word.last_mut() {
                        Some(piece) if piece.bold == *bold => piece.text.push(c),
                        _ => word.push(Piece {
                            text: c.to_string(),
                            bold: *bold,
                        }),
                    }
                }
            }
            Segment::LineBreak => {
                if !word.is_empty() {
                    tokens.push(Token::Word(std::mem::take(&mut word)));
                }
                tokens.push(Token::Break);
            }
        }
    }
    if !word.is_empty() {
        tokens.push(Token::Word(word));
    }
    tokens
}

struct LineFiller<'a> {
    style: &'a Style,
    measure: &'a dyn TextMeasure,
    max_width: f32,
    lines: Vec<Line>,
    current: Line,
    pending_space: Option<Piece>,
}

impl<'a> LineFiller<'a> {
    fn width_of(&self, piece: &Piece) -> f32 {
        self.measure
            .text_width(&piece.text, self.style.font(piece.bold), self.style.font_size)
    }

    fn push_piece(&mut self, piece: &Piece) {
        let font = self.style.font(piece.bold);
        let width = self.width_of(piece);
        self.current.width += width;
        match self.current.fragments.last_mut() {
            Some(last) if last.font == font => {
                last.text.push_str(&piece.text);
                last.width += width;
            }
            _ => self.current.fragments.push(Fragment {
                text: piece.text.clone(),
                font,
                width,
            }),
        }
    }

    fn end_line(&mut self, wrapped: bool) {
        self.pending_space = None;
        let mut line = std::mem::take(&mut self.current);
        line.wrapped = wrapped;
        self.lines.push(line);
    }

    fn fits(&self, extra: f32) -> bool {
        self.current.width + extra <= self.max_width + WIDTH_EPSILON
    }

    fn place_word(&mut self, pieces: &[Piece]) {
        let word_width: f32 = pieces.iter().map(|p| self.width_of(p)).sum();
        let space_width = self
            .pending_space
            .as_ref()
            .map_or(0.0, |space| self.width_of(space));

        if !self.current.is_empty() {
            if self.fits(space_width + word_width) {
                if let Some(space) = self.pending_space.take() {
                    self.push_piece(&space);
                }
                pieces.iter().for_each(|p| self.push_piece(p));
                return;
            }
            self.end_line(true);
        }
        self.pending_space = None;

        if self.fits(word_width) {
            pieces.iter().for_each(|p| self.push_piece(p));
        } else {
            self.break_word(pieces);
        }
    }

    /// Place a word wider than the line, one character at a time.
    fn break_word(&mut self, pieces: &[Piece]) {
        let mut buf = [0u8; 4];
        for piece in pieces {
            let font = self.style.font(piece.bold);
            for c in piece.text.chars() {
                let w = self.measure.char_width(c, font, self.style.font_size);
                if !self.current.is_empty() && !self.fits(w) {
                    self.end_line(true);
                }
                self.push_piece(&Piece {
                    text: c.encode_utf8(&mut buf).to_string(),
                    bold: piece.bold,
                });
            }
        }
    }
}

/// Wrap parsed segments into lines no wider than `max_width`.
///
/// Spaces at a wrap point are dropped. In [`Whitespace::Preserve`] mode the
/// spaces at the start of a source line are kept as indentation; every
/// [`Segment::LineBreak`] ends a line, so consecutive breaks yield empty lines.
pub fn wrap(
    segments: &[Segment],
    style: &Style,
    max_width: f32,
    measure: &dyn TextMeasure,
    mode: Whitespace,
) -> Vec<Line> {
    let mut filler = LineFiller {
        style,
        measure,
        max_width,
        lines: Vec::new(),
        current: Line::default(),
        pending_space: None,
    };
    let mut at_source_line_start = true;

    for token in tokenize(segments) {
        match token {
            Token::Word(pieces) => {
                filler.place_word(&pieces);
                at_source_line_start = false;
            }
            Token::Space(space) => {
                if !filler.current.is_empty() {
                    filler.pending_space = Some(space);
                } else if mode == Whitespace::Preserve && at_source_line_start {
                    filler.push_piece(&space);
                }
            }
            Token::Break => {
                filler.end_line(false);
                at_source_line_start = true;
            }
        }
    }
    if !filler.current.is_empty() {
        filler.end_line(false);
    }
    filler.lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StandardMetrics;
    use crate::markup::parse;

    fn wrap_text(text: &str, style: &Style, width: f32, mode: Whitespace) -> Vec<Line> {
        let segments = parse(text, mode).unwrap();
        wrap(&segments, style, width, &StandardMetrics::new(), mode)
    }

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::text).collect()
    }

    #[test]
    fn test_short_text_single_line() {
        let lines = wrap_text("Hello world", &Style::default(), 468.0, Whitespace::Collapse);
        assert_eq!(texts(&lines), vec!["Hello world"]);
        assert!(!lines[0].wrapped);
    }

    #[test]
    fn test_wraps_at_spaces_and_drops_them() {
        // Courier 10pt: 6pt per char, 60pt fits 10 chars
        let style = Style::new(10.0).monospace();
        let lines = wrap_text("aaaa bbbb cccc", &style, 60.0, Whitespace::Collapse);
        assert_eq!(texts(&lines), vec!["aaaa bbbb", "cccc"]);
        assert!(lines[0].wrapped);
        assert!(!lines[1].wrapped);
        assert!((lines[0].width - 54.0).abs() < 1e-3);
    }

    #[test]
    fn test_long_word_breaks_at_characters() {
        let style = Style::new(10.0).monospace();
        let lines = wrap_text("abcdefghijklmnopqrstuvwxy", &style, 60.0, Whitespace::Collapse);
        assert_eq!(texts(&lines), vec!["abcdefghij", "klmnopqrst", "uvwxy"]);
    }

    #[test]
    fn test_bold_runs_become_fragments() {
        let lines = wrap_text("<b>Tela:</b> OLED", &Style::default(), 468.0, Whitespace::Collapse);
        let fonts: Vec<Font> = lines[0].fragments.iter().map(|f| f.font).collect();
        assert_eq!(fonts, vec![Font::HelveticaBold, Font::Helvetica]);
        assert_eq!(lines[0].fragments[1].text, " OLED");
    }

    #[test]
    fn test_forced_breaks_not_wrapped() {
        let lines = wrap_text("um<br/>dois", &Style::default(), 468.0, Whitespace::Collapse);
        assert_eq!(texts(&lines), vec!["um", "dois"]);
        assert!(!lines[0].wrapped);
    }

    #[test]
    fn test_preserve_keeps_indentation_and_blank_lines() {
        let style = Style::new(8.0).monospace();
        let lines = wrap_text("{\n  \"id\": 1,\n\n  \"ok\": true\n}", &style, 400.0, Whitespace::Preserve);
        assert_eq!(
            texts(&lines),
            vec!["{", "  \"id\": 1,", "", "  \"ok\": true", "}"]
        );
    }

    #[test]
    fn test_space_count() {
        let lines = wrap_text("a b <b>c d</b>", &Style::default(), 468.0, Whitespace::Collapse);
        assert_eq!(lines[0].space_count(), 3);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap_text("   ", &Style::default(), 468.0, Whitespace::Collapse).is_empty());
    }
}
