//! PDF output options.

/// Options controlling how laid-out pages are serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Flate-compress page content streams
    pub compress: bool,

    /// Version written in the `%PDF-` header
    pub pdf_version: String,
}

impl RenderOptions {
    /// Create render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Write content streams uncompressed (readable with a text editor).
    pub fn uncompressed(self) -> Self {
        self.with_compression(false)
    }

    /// Set the PDF header version.
    pub fn with_pdf_version(mut self, version: impl Into<String>) -> Self {
        self.pdf_version = version.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            compress: true,
            pdf_version: "1.5".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.compress);
        assert_eq!(options.pdf_version, "1.5");
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new().uncompressed().with_pdf_version("1.7");
        assert!(!options.compress);
        assert_eq!(options.pdf_version, "1.7");
    }
}
