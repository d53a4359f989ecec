//! Page size and margin configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Points per inch.
pub const INCH: f32 = 72.0;

/// Physical page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// US Letter, 8.5 x 11 in.
    pub const LETTER: PageSize = PageSize::new(612.0, 792.0);
    /// US Legal, 8.5 x 14 in.
    pub const LEGAL: PageSize = PageSize::new(612.0, 1008.0);
    /// ISO A4, 210 x 297 mm.
    pub const A4: PageSize = PageSize::new(595.28, 841.89);

    /// Create a page size from width and height in points.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Swap width and height.
    pub fn landscape(self) -> Self {
        Self::new(self.height, self.width)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::LETTER
    }
}

impl FromStr for PageSize {
    type Err = Error;

    /// Parse `letter`, `legal`, `a4`, or `WIDTHxHEIGHT` in points.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letter" => Ok(Self::LETTER),
            "legal" => Ok(Self::LEGAL),
            "a4" => Ok(Self::A4),
            other => {
                let (w, h) = other
                    .split_once('x')
                    .ok_or_else(|| Error::InvalidPageSetup(format!("unknown page size: {}", s)))?;
                let parse = |v: &str| {
                    v.trim()
                        .parse::<f32>()
                        .map_err(|_| Error::InvalidPageSetup(format!("invalid page size: {}", s)))
                };
                Ok(Self::new(parse(w)?, parse(h)?))
            }
        }
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// Same margin on every side.
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(INCH)
    }
}

/// Page size plus margins; defines the body box text flows into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSetup {
    pub size: PageSize,
    pub margins: Margins,
}

impl PageSetup {
    /// Letter with one-inch margins.
    pub fn letter() -> Self {
        Self::default()
    }

    /// A4 with one-inch margins.
    pub fn a4() -> Self {
        Self::default().with_size(PageSize::A4)
    }

    /// Set the page size.
    pub fn with_size(mut self, size: PageSize) -> Self {
        self.size = size;
        self
    }

    /// Set the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Width available to text.
    pub fn body_width(&self) -> f32 {
        self.size.width - self.margins.left - self.margins.right
    }

    /// Height available to text.
    pub fn body_height(&self) -> f32 {
        self.size.height - self.margins.top - self.margins.bottom
    }

    /// Y coordinate (from the bottom edge) of the top of the body box.
    pub fn body_top(&self) -> f32 {
        self.size.height - self.margins.top
    }

    /// Reject setups whose body box is empty.
    pub fn validate(&self) -> Result<()> {
        let m = &self.margins;
        if m.top < 0.0 || m.right < 0.0 || m.bottom < 0.0 || m.left < 0.0 {
            return Err(Error::InvalidPageSetup("margins must not be negative".into()));
        }
        if !(self.body_width() > 0.0) || !(self.body_height() > 0.0) {
            return Err(Error::InvalidPageSetup(format!(
                "margins leave no room on a {}x{} page",
                self.size.width, self.size.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_body_box() {
        let setup = PageSetup::letter();
        assert_eq!(setup.body_width(), 468.0);
        assert_eq!(setup.body_height(), 648.0);
        assert_eq!(setup.body_top(), 720.0);
        assert!(setup.validate().is_ok());
    }

    #[test]
    fn test_page_size_parse() {
        assert_eq!("Letter".parse::<PageSize>().unwrap(), PageSize::LETTER);
        assert_eq!("a4".parse::<PageSize>().unwrap(), PageSize::A4);
        assert_eq!(
            "300x400".parse::<PageSize>().unwrap(),
            PageSize::new(300.0, 400.0)
        );
        assert!("tabloid".parse::<PageSize>().is_err());
    }

    #[test]
    fn test_margins_too_large() {
        let setup = PageSetup::letter().with_margins(Margins::uniform(400.0));
        assert!(matches!(setup.validate(), Err(Error::InvalidPageSetup(_))));
    }

    #[test]
    fn test_landscape() {
        let size = PageSize::LETTER.landscape();
        assert_eq!(size.width, 792.0);
        assert_eq!(size.height, 612.0);
    }
}
