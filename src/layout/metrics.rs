//! Text measurement.
//!
//! The writer only references the standard Type 1 fonts, so widths come from
//! the Adobe core font metrics (units of 1/1000 em).

use crate::model::Font;
use crate::render::encoding::encode_char;
use unicode_normalization::UnicodeNormalization;

/// Text measurement capability the layout engine depends on.
pub trait TextMeasure {
    /// Advance width of `text` set in `font` at `size` points.
    fn text_width(&self, text: &str, font: Font, size: f32) -> f32;

    /// Advance width of a single character.
    fn char_width(&self, c: char, font: Font, size: f32) -> f32 {
        let mut buf = [0u8; 4];
        self.text_width(c.encode_utf8(&mut buf), font, size)
    }
}

/// Metrics for Helvetica, Helvetica-Bold, Courier and Courier-Bold.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMetrics;

impl StandardMetrics {
    /// Create the standard metrics table.
    pub fn new() -> Self {
        Self
    }

    /// Width of one character in 1/1000 em.
    pub fn glyph_width(c: char, font: Font) -> u16 {
        if font.is_monospace() {
            return 600;
        }
        let bold = font.is_bold();
        if (' '..='~').contains(&c) {
            let idx = c as usize - 32;
            return if bold {
                HELVETICA_BOLD[idx]
            } else {
                HELVETICA[idx]
            };
        }
        if let Some(w) = symbol_width(c, bold) {
            return w;
        }
        // Unmappable characters are written as '?'
        if encode_char(c).is_none() {
            return Self::glyph_width('?', font);
        }
        // Accented letters share the advance of their base letter, except
        // the accented i family which is wider than plain `i`.
        match c.nfd().next() {
            Some('i') if c != 'i' => 278,
            Some(base) if base != c && (' '..='~').contains(&base) => {
                Self::glyph_width(base, font)
            }
            _ => 556,
        }
    }
}

impl TextMeasure for StandardMetrics {
    fn text_width(&self, text: &str, font: Font, size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|c| u32::from(Self::glyph_width(c, font)))
            .sum();
        units as f32 * size / 1000.0
    }
}

fn symbol_width(c: char, bold: bool) -> Option<u16> {
    let w = match c {
        '\u{a0}' => 278,
        '°' => 400,
        '•' => 350,
        '–' => 556,
        '—' => 1000,
        '…' => 1000,
        '‘' | '’' | '‚' => {
            if bold {
                278
            } else {
                222
            }
        }
        '“' | '”' | '„' => {
            if bold {
                500
            } else {
                333
            }
        }
        '€' | '¢' | '£' | '¥' | '§' | 'µ' => 556,
        '×' | '±' | '¬' | '÷' => 584,
        '©' | '®' => 737,
        '·' => 278,
        'ª' => 370,
        'º' => 365,
        '¹' | '²' | '³' => 333,
        '¼' | '½' | '¾' => 834,
        '«' | '»' => 556,
        '¡' => 333,
        '¿' => 611,
        '™' => 1000,
        'ß' => 611,
        'æ' => 889,
        'Æ' => 1000,
        'ø' => 611,
        'Ø' => 778,
        _ => return None,
    };
    Some(w)
}

/// Helvetica advance widths for ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];
