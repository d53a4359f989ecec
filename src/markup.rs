//! Inline markup parsing.
//!
//! Block text may contain a small tag vocabulary:
//!
//! - `<b>...</b>` / `<strong>...</strong>` for bold spans (may nest)
//! - `<br/>`, `<br>`, `<br />` for a forced line break
//! - `&amp;` `&lt;` `&gt;` `&quot;` `&apos;` and numeric `&#N;` / `&#xH;` entities
//!
//! Anything else that looks like a tag is rejected: unknown tags, stray or
//! mismatched closing tags, an unterminated `<`, and bold spans left open at
//! the end of the block. A `&` that does not start a `&name;` sequence is kept
//! literally; a well-formed entity with an unknown name is rejected.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// How whitespace in the source text is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whitespace {
    /// Runs of whitespace (including newlines) become one space; lines are trimmed.
    Collapse,
    /// Spaces are kept and each source newline is a line break.
    Preserve,
}

/// A piece of parsed inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text with uniform weight
    Text { text: String, bold: bool },
    /// Forced line break
    LineBreak,
}

impl Segment {
    /// Plain text run.
    pub fn text(text: impl Into<String>) -> Self {
        Segment::Text {
            text: text.into(),
            bold: false,
        }
    }

    /// Bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Segment::Text {
            text: text.into(),
            bold: true,
        }
    }
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| {
        Regex::new(r"^\s*(/?)\s*([A-Za-z][A-Za-z0-9]*)\s*(/?)\s*$").expect("valid tag regex")
    })
}

fn entity_regex() -> &'static Regex {
    static ENTITY: OnceLock<Regex> = OnceLock::new();
    ENTITY.get_or_init(|| Regex::new(r"^&(#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z][A-Za-z0-9]*);").expect("valid entity regex"))
}

/// Accumulates segments while tracking whitespace state.
struct Builder {
    mode: Whitespace,
    segments: Vec<Segment>,
    current: String,
    bold_stack: Vec<String>,
    /// In collapse mode: true at line start or after a space
    suppress_space: bool,
}

impl Builder {
    fn new(mode: Whitespace) -> Self {
        Self {
            mode,
            segments: Vec::new(),
            current: String::new(),
            bold_stack: Vec::new(),
            suppress_space: true,
        }
    }

    fn bold(&self) -> bool {
        !self.bold_stack.is_empty()
    }

    fn push_char(&mut self, c: char) {
        match self.mode {
            Whitespace::Collapse if c.is_whitespace() => {
                if !self.suppress_space {
                    self.current.push(' ');
                    self.suppress_space = true;
                }
            }
            Whitespace::Collapse => {
                self.current.push(c);
                self.suppress_space = false;
            }
            Whitespace::Preserve => match c {
                '\n' => self.line_break(),
                '\r' => {}
                '\t' => self.current.push_str("    "),
                c if c.is_whitespace() => self.current.push(' '),
                c => self.current.push(c),
            },
        }
    }

    /// Push a decoded entity; never treated as whitespace to collapse.
    fn push_literal(&mut self, c: char) {
        self.current.push(c);
        self.suppress_space = false;
    }

    /// Close the current run before the weight changes.
    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let text: String = std::mem::take(&mut self.current).nfc().collect();
        let bold = self.bold();
        if let Some(Segment::Text { text: prev, bold: b }) = self.segments.last_mut() {
            if *b == bold {
                prev.push_str(&text);
                return;
            }
        }
        self.segments.push(Segment::Text { text, bold });
    }

    fn trim_trailing_space(&mut self) {
        if self.mode != Whitespace::Collapse {
            return;
        }
        if self.current.ends_with(' ') {
            self.current.pop();
            return;
        }
        let mut emptied = false;
        if let Some(Segment::Text { text, .. }) = self.segments.last_mut() {
            if text.ends_with(' ') {
                text.pop();
            }
            emptied = text.is_empty();
        }
        if emptied {
            self.segments.pop();
        }
    }

    fn line_break(&mut self) {
        self.trim_trailing_space();
        self.flush();
        self.segments.push(Segment::LineBreak);
        self.suppress_space = true;
    }

    fn finish(mut self) -> Result<Vec<Segment>, String> {
        if let Some(open) = self.bold_stack.last() {
            return Err(format!("unterminated <{}>", open));
        }
        self.trim_trailing_space();
        self.flush();
        Ok(self.segments)
    }
}

/// Parse block text into styled segments.
///
/// Returns a human-readable message on malformed markup; callers attach the
/// block index.
pub fn parse(text: &str, mode: Whitespace) -> Result<Vec<Segment>, String> {
    let mut builder = Builder::new(mode);
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        match c {
            '<' => {
                let end = rest
                    .find('>')
                    .ok_or_else(|| format!("unterminated tag near '{}'", preview(rest)))?;
                apply_tag(&mut builder, &rest[1..end])?;
                rest = &rest[end + 1..];
            }
            '&' => match entity_regex().find(rest) {
                Some(m) => {
                    let decoded = decode_entity(&m.as_str()[1..m.end() - 1])
                        .ok_or_else(|| format!("unknown entity '{}'", m.as_str()))?;
                    builder.push_literal(decoded);
                    rest = &rest[m.end()..];
                }
                None => {
                    builder.push_literal('&');
                    rest = &rest[1..];
                }
            },
            c => {
                builder.push_char(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    builder.finish()
}

fn apply_tag(builder: &mut Builder, inner: &str) -> Result<(), String> {
    let caps = tag_regex()
        .captures(inner)
        .ok_or_else(|| format!("malformed tag '<{}>'", inner))?;
    let closing = !caps[1].is_empty();
    let self_closing = !caps[3].is_empty();
    let name = caps[2].to_ascii_lowercase();

    match name.as_str() {
        "br" if !closing => {
            builder.line_break();
            Ok(())
        }
        "b" | "strong" if closing && !self_closing => match builder.bold_stack.last() {
            Some(open) if *open == name => {
                builder.flush();
                builder.bold_stack.pop();
                Ok(())
            }
            Some(open) => Err(format!("</{}> closes <{}>", name, open)),
            None => Err(format!("</{}> without matching <{}>", name, name)),
        },
        "b" | "strong" if !closing && !self_closing => {
            builder.flush();
            builder.bold_stack.push(name);
            Ok(())
        }
        _ => Err(format!("unsupported tag '<{}>'", inner.trim())),
    }
}

fn decode_entity(body: &str) -> Option<char> {
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                body.strip_prefix('#')?.parse::<u32>().ok()?
            };
            char::from_u32(code)
        }
    }
}

fn preview(s: &str) -> String {
    s.chars().take(20).collect()
}

/// Plain text of parsed segments, with line breaks as `\n`.
pub fn plain_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match s {
            Segment::Text { text, .. } => text.as_str(),
            Segment::LineBreak => "\n",
        })
        .collect()
}

/// Trim blank lines around code block text while keeping indentation.
pub fn trim_code(text: &str) -> &str {
    let start = text
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .filter(|(_, c)| *c == '\n')
        .last()
        .map_or(0, |(i, _)| i + 1);
    text[start..].trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collapse(text: &str) -> Vec<Segment> {
        parse(text, Whitespace::Collapse).unwrap()
    }

    #[test]
    fn test_bold_span() {
        let segs = collapse("<b>Tela:</b> Super Retina");
        assert_eq!(segs, vec![Segment::bold("Tela:"), Segment::text(" Super Retina")]);
    }

    #[test]
    fn test_whitespace_collapse() {
        let segs = collapse("\n    O iPhone 15 Pro Max\n    representa   o ápice.\n    ");
        assert_eq!(segs, vec![Segment::text("O iPhone 15 Pro Max representa o ápice.")]);
    }

    #[test]
    fn test_line_breaks_trim_around() {
        let segs = collapse("um <br/>\n  dois<br><br />três");
        assert_eq!(
            segs,
            vec![
                Segment::text("um"),
                Segment::LineBreak,
                Segment::text("dois"),
                Segment::LineBreak,
                Segment::LineBreak,
                Segment::text("três"),
            ]
        );
    }

    #[test]
    fn test_nested_bold() {
        let segs = collapse("<b>a <strong>b</strong> c</b> d");
        assert_eq!(segs, vec![Segment::bold("a b c"), Segment::text(" d")]);
    }

    #[test]
    fn test_entities() {
        let segs = collapse("a &lt;b&gt; &amp; &#233; &#xE7; P&D");
        assert_eq!(plain_text(&segs), "a <b> & é ç P&D");
    }

    #[test]
    fn test_unterminated_bold_rejected() {
        let err = parse("<b>never closed", Whitespace::Collapse).unwrap_err();
        assert!(err.contains("unterminated <b>"), "{err}");
    }

    #[test]
    fn test_stray_close_rejected() {
        assert!(parse("text</b>", Whitespace::Collapse).is_err());
        assert!(parse("<b>x</strong>", Whitespace::Collapse).is_err());
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = parse("<i>italic</i>", Whitespace::Collapse).unwrap_err();
        assert!(err.contains("unsupported tag"), "{err}");
        assert!(parse("a < b", Whitespace::Collapse).is_err());
        assert!(parse("open <b", Whitespace::Collapse).is_err());
    }

    #[test]
    fn test_unknown_entity_rejected() {
        assert!(parse("&bogus;", Whitespace::Collapse).is_err());
    }

    #[test]
    fn test_preserve_mode() {
        let segs = parse("{\n  \"id\": 1\n}", Whitespace::Preserve).unwrap();
        assert_eq!(plain_text(&segs), "{\n  \"id\": 1\n}");
        assert_eq!(segs.iter().filter(|s| **s == Segment::LineBreak).count(), 2);
    }

    #[test]
    fn test_nfc_normalization() {
        // "e" + combining acute accent
        let segs = collapse("cafe\u{301}");
        assert_eq!(segs, vec![Segment::text("café")]);
    }

    #[test]
    fn test_trim_code() {
        assert_eq!(trim_code("\n\n  {\n    \"a\": 1\n  }\n    "), "  {\n    \"a\": 1\n  }");
        assert_eq!(trim_code("GET /products"), "GET /products");
        assert_eq!(trim_code("\n   \n"), "");
    }
}
