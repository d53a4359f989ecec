//! Styles and the per-document style sheet.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Font family of a style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Proportional sans-serif (Helvetica)
    #[default]
    Helvetica,
    /// Monospace (Courier)
    Courier,
}

/// One of the four standard PDF fonts the writer embeds by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    Courier,
    CourierBold,
}

impl Font {
    /// Every font the writer declares in the page resources.
    pub const ALL: [Font; 4] = [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::Courier,
        Font::CourierBold,
    ];

    /// Pick the face for a family and weight.
    pub fn new(family: FontFamily, bold: bool) -> Self {
        match (family, bold) {
            (FontFamily::Helvetica, false) => Font::Helvetica,
            (FontFamily::Helvetica, true) => Font::HelveticaBold,
            (FontFamily::Courier, false) => Font::Courier,
            (FontFamily::Courier, true) => Font::CourierBold,
        }
    }

    /// PostScript name used as `/BaseFont`.
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::Courier => "Courier",
            Font::CourierBold => "Courier-Bold",
        }
    }

    /// Resource name inside the page's font dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::Courier => "F3",
            Font::CourierBold => "F4",
        }
    }

    /// Check if this is a bold face.
    pub fn is_bold(self) -> bool {
        matches!(self, Font::HelveticaBold | Font::CourierBold)
    }

    /// Check if this is a monospace face.
    pub fn is_monospace(self) -> bool {
        matches!(self, Font::Courier | Font::CourierBold)
    }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_BLUE: Color = Color::rgb(0x00, 0x00, 0x8B);
    pub const DARK_RED: Color = Color::rgb(0x8B, 0x00, 0x00);
    pub const DARK_GREEN: Color = Color::rgb(0x00, 0x64, 0x00);

    /// Create a color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB` or one of the named colors
    /// (`black`, `darkblue`, `darkred`, `darkgreen`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "black" => return Some(Self::BLACK),
            "darkblue" => return Some(Self::DARK_BLUE),
            "darkred" => return Some(Self::DARK_RED),
            "darkgreen" => return Some(Self::DARK_GREEN),
            _ => {}
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channels scaled to 0.0..=1.0 for the `rg` operator.
    pub fn components(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Color::parse(&value).ok_or_else(|| format!("invalid color: {value}"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Horizontal alignment of the lines of a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Visual configuration of a text block. All lengths are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Font family
    pub font_family: FontFamily,

    /// Render the whole block bold
    pub bold: bool,

    /// Font size
    pub font_size: f32,

    /// Baseline-to-baseline distance
    pub leading: f32,

    /// Text color
    pub color: Color,

    /// Line alignment
    pub alignment: Alignment,

    /// Space above the block (dropped at the top of a page)
    pub space_before: f32,

    /// Space below the block
    pub space_after: f32,

    /// Indent from the left margin
    pub left_indent: f32,

    /// Move to the next page rather than end a page with this block
    pub keep_with_next: bool,
}

impl Style {
    /// A regular Helvetica style of the given size with 1.2 leading.
    pub fn new(font_size: f32) -> Self {
        Self::default().with_font_size(font_size)
    }

    /// Set the font size; leading follows at 1.2x.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self.leading = size * 1.2;
        self
    }

    /// Set an explicit leading.
    pub fn with_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    /// Render the block bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Use the monospace family.
    pub fn monospace(mut self) -> Self {
        self.font_family = FontFamily::Courier;
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Center every line.
    pub fn centered(self) -> Self {
        self.with_alignment(Alignment::Center)
    }

    /// Set space above the block.
    pub fn with_space_before(mut self, space: f32) -> Self {
        self.space_before = space;
        self
    }

    /// Set space below the block.
    pub fn with_space_after(mut self, space: f32) -> Self {
        self.space_after = space;
        self
    }

    /// Set the left indent.
    pub fn with_left_indent(mut self, indent: f32) -> Self {
        self.left_indent = indent;
        self
    }

    /// Keep this block on the same page as the first line of the next one.
    pub fn keep_with_next(mut self, keep: bool) -> Self {
        self.keep_with_next = keep;
        self
    }

    /// Font for a run inside this block; `<b>` spans pass `bold = true`.
    pub fn font(&self, bold: bool) -> Font {
        Font::new(self.font_family, self.bold || bold)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !(self.font_size > 0.0) || !(self.leading > 0.0) {
            return Err(Error::InvalidStyle(format!(
                "style '{}' needs a positive font size and leading",
                name
            )));
        }
        if self.space_before < 0.0 || self.space_after < 0.0 || self.left_indent < 0.0 {
            return Err(Error::InvalidStyle(format!(
                "style '{}' has negative spacing",
                name
            )));
        }
        Ok(())
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Helvetica,
            bold: false,
            font_size: 10.0,
            leading: 12.0,
            color: Color::BLACK,
            alignment: Alignment::Left,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            keep_with_next: false,
        }
    }
}

/// Immutable name → style mapping, built once per document.
///
/// Blocks reference styles by name; the sheet is passed explicitly to the
/// layout engine, so two documents never share style state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    styles: BTreeMap<String, Style>,
}

impl StyleSheet {
    /// Style used by title blocks.
    pub const TITLE: &'static str = "title";
    /// Style used by paragraph blocks.
    pub const BODY: &'static str = "body";
    /// Style used by code blocks.
    pub const CODE: &'static str = "code";

    /// An empty sheet.
    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    /// The built-in sheet: `title`, `heading1`..`heading6`, `body`, `code`.
    pub fn standard() -> Self {
        let heading = |size: f32, leading: f32, before: f32, after: f32| {
            Style::new(size)
                .bold()
                .with_leading(leading)
                .with_space_before(before)
                .with_space_after(after)
                .keep_with_next(true)
        };

        Self::empty()
            .with_style(
                Self::TITLE,
                Style::new(18.0)
                    .bold()
                    .with_leading(22.0)
                    .centered()
                    .with_space_after(6.0)
                    .keep_with_next(true),
            )
            .with_style("heading1", heading(18.0, 22.0, 0.0, 6.0))
            .with_style("heading2", heading(14.0, 18.0, 12.0, 6.0))
            .with_style("heading3", heading(12.0, 14.4, 12.0, 6.0))
            .with_style("heading4", heading(10.0, 12.0, 10.0, 4.0))
            .with_style("heading5", heading(9.0, 10.8, 10.0, 4.0))
            .with_style("heading6", heading(7.0, 8.4, 6.0, 2.0))
            .with_style(
                Self::BODY,
                Style::new(10.0).with_leading(12.0).with_space_before(6.0),
            )
            .with_style(
                Self::CODE,
                Style::new(8.0)
                    .monospace()
                    .with_leading(8.8)
                    .with_left_indent(36.0)
                    .with_space_before(4.0)
                    .with_space_after(4.0),
            )
    }

    /// Add or replace a style.
    pub fn with_style(mut self, name: impl Into<String>, style: Style) -> Self {
        self.styles.insert(name.into(), style);
        self
    }

    /// Look up a style by name.
    pub fn get(&self, name: &str) -> Result<&Style> {
        self.styles
            .get(name)
            .ok_or_else(|| Error::UnknownStyle(name.to_string()))
    }

    /// Check if a style is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Number of defined styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the sheet defines no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Name of the default style for a heading level (clamped to 1..=6).
    pub fn heading_name(level: u8) -> String {
        format!("heading{}", level.clamp(1, 6))
    }

    /// Reject styles with non-positive sizes or negative spacing.
    pub fn validate(&self) -> Result<()> {
        for (name, style) in &self.styles {
            style.validate(name)?;
        }
        Ok(())
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sheet_names() {
        let sheet = StyleSheet::standard();
        for name in ["title", "heading1", "heading6", "body", "code"] {
            assert!(sheet.contains(name), "missing {name}");
        }
        assert_eq!(sheet.len(), 9);
        assert!(sheet.get("code").unwrap().font(false).is_monospace());
    }

    #[test]
    fn test_override_replaces_entry() {
        let custom = Style::new(24.0)
            .bold()
            .centered()
            .with_color(Color::DARK_RED);
        let sheet = StyleSheet::standard().with_style(StyleSheet::TITLE, custom.clone());

        assert_eq!(sheet.get("title").unwrap(), &custom);
        // The standard sheet is untouched
        assert_eq!(StyleSheet::standard().get("title").unwrap().font_size, 18.0);
    }

    #[test]
    fn test_unknown_style() {
        let err = StyleSheet::standard().get("sidebar").unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(name) if name == "sidebar"));
    }

    #[test]
    fn test_heading_name_clamps() {
        assert_eq!(StyleSheet::heading_name(0), "heading1");
        assert_eq!(StyleSheet::heading_name(2), "heading2");
        assert_eq!(StyleSheet::heading_name(9), "heading6");
    }

    #[test]
    fn test_font_selection() {
        let body = Style::new(10.0);
        assert_eq!(body.font(false), Font::Helvetica);
        assert_eq!(body.font(true), Font::HelveticaBold);
        assert_eq!(body.clone().bold().font(false), Font::HelveticaBold);
        assert_eq!(body.monospace().font(true), Font::CourierBold);
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("#00008B"), Some(Color::DARK_BLUE));
        assert_eq!(Color::parse("darkgreen"), Some(Color::DARK_GREEN));
        assert_eq!(Color::parse("8b0000"), Some(Color::DARK_RED));
        assert_eq!(Color::parse("#12"), None);
        assert_eq!(Color::DARK_RED.to_string(), "#8B0000");
    }

    #[test]
    fn test_style_json() {
        let json = r##"{"font_size": 24, "leading": 28, "color": "#00008B", "alignment": "center"}"##;
        let style: Style = serde_json::from_str(json).unwrap();
        assert_eq!(style.color, Color::DARK_BLUE);
        assert_eq!(style.alignment, Alignment::Center);
        assert_eq!(style.font_family, FontFamily::Helvetica);
    }

    #[test]
    fn test_validate_rejects_zero_leading() {
        let sheet = StyleSheet::empty().with_style("bad", Style::new(10.0).with_leading(0.0));
        assert!(sheet.validate().is_err());
        assert!(StyleSheet::standard().validate().is_ok());
    }
}
