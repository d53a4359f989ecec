//! Built-in fixture documents and the driver that writes them.
//!
//! Each fixture is a fixed Portuguese content set used as retrieval test
//! data: a smartphone manual, a recipe book, a football manual and a REST
//! API reference.

mod api_docs;
mod football;
mod recipes;
mod smartphone;

use crate::error::{Error, Result};
use crate::model::{Color, Document, Style, StyleSheet};
use crate::render::RenderOptions;
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Directory the driver writes to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "data/pdfs";

/// Style name of the large centered fixture titles.
pub const CUSTOM_TITLE: &str = "custom_title";

/// Standard sheet plus a 24pt bold centered title in `color`.
fn fixture_styles(color: Color) -> StyleSheet {
    StyleSheet::standard().with_style(
        CUSTOM_TITLE,
        Style::new(24.0)
            .bold()
            .with_color(color)
            .centered()
            .with_space_after(30.0)
            .keep_with_next(true),
    )
}

fn standard_document(title_color: Color) -> Document {
    Document::new().with_styles(fixture_styles(title_color))
}

/// One of the built-in fixture documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fixture {
    SmartphoneManual,
    RecipeBook,
    FootballManual,
    ApiReference,
}

impl Fixture {
    /// Every fixture, in generation order.
    pub const ALL: [Fixture; 4] = [
        Fixture::SmartphoneManual,
        Fixture::RecipeBook,
        Fixture::FootballManual,
        Fixture::ApiReference,
    ];

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Fixture::SmartphoneManual => "smartphone",
            Fixture::RecipeBook => "recipes",
            Fixture::FootballManual => "football",
            Fixture::ApiReference => "api",
        }
    }

    /// Output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Fixture::SmartphoneManual => "manual_iphone15.pdf",
            Fixture::RecipeBook => "livro_receitas.pdf",
            Fixture::FootballManual => "manual_futebol.pdf",
            Fixture::ApiReference => "api_documentation.pdf",
        }
    }

    /// One-line description of the content.
    pub fn description(self) -> &'static str {
        match self {
            Fixture::SmartphoneManual => "Manual técnico de smartphone",
            Fixture::RecipeBook => "Receitas culinárias detalhadas",
            Fixture::FootballManual => "Regras e táticas de futebol",
            Fixture::ApiReference => "Documentação técnica de API",
        }
    }

    /// Build the fixture's document.
    pub fn document(self) -> Document {
        match self {
            Fixture::SmartphoneManual => smartphone::document(),
            Fixture::RecipeBook => recipes::document(),
            Fixture::FootballManual => football::document(),
            Fixture::ApiReference => api_docs::document(),
        }
    }

    /// Render the fixture into `dir`, replacing any previous file.
    pub fn render(self, dir: &Path, options: &RenderOptions) -> Result<GeneratedFile> {
        let path = dir.join(self.file_name());
        let pages = crate::write_document(&self.document(), &path, options)?;
        let bytes = fs::metadata(&path)?.len();
        Ok(GeneratedFile {
            fixture: self,
            path,
            pages,
            bytes,
        })
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fixture {
    type Err = Error;

    /// Accepts the short name, the file name, or the file stem.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Fixture::ALL
            .into_iter()
            .find(|f| {
                let file = f.file_name();
                wanted == f.name()
                    || wanted == file
                    || Some(wanted.as_str()) == file.strip_suffix(".pdf")
            })
            .ok_or_else(|| Error::UnknownFixture(s.to_string()))
    }
}

/// A fixture written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub fixture: Fixture,
    pub path: PathBuf,
    /// Number of pages written
    pub pages: usize,
    /// File size in bytes
    pub bytes: u64,
}

/// Options for [`generate`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Render fixtures on the rayon thread pool
    pub parallel: bool,

    /// Fixtures to write, in order
    pub fixtures: Vec<Fixture>,

    /// PDF output options
    pub render: RenderOptions,
}

impl GenerateOptions {
    /// Create generate options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one fixture at a time.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Restrict generation to the given fixtures.
    pub fn with_fixtures(mut self, fixtures: impl IntoIterator<Item = Fixture>) -> Self {
        self.fixtures = fixtures.into_iter().collect();
        self
    }

    /// Set the PDF output options.
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            fixtures: Fixture::ALL.to_vec(),
            render: RenderOptions::default(),
        }
    }
}

/// Write all four fixtures into `dir`, creating it if needed.
pub fn generate_all<P: AsRef<Path>>(dir: P) -> Result<Vec<GeneratedFile>> {
    generate(dir, &GenerateOptions::default())
}

/// Write the selected fixtures into `dir`, creating it if needed.
///
/// Results are returned in the order of `options.fixtures` regardless of
/// whether rendering ran in parallel. The first failure is returned.
pub fn generate<P: AsRef<Path>>(dir: P, options: &GenerateOptions) -> Result<Vec<GeneratedFile>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let files = if options.parallel {
        options
            .fixtures
            .par_iter()
            .map(|fixture| fixture.render(dir, &options.render))
            .collect::<Result<Vec<_>>>()?
    } else {
        options
            .fixtures
            .iter()
            .map(|fixture| fixture.render(dir, &options.render))
            .collect::<Result<Vec<_>>>()?
    };

    info!("generated {} fixture(s) in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_document, StandardMetrics};

    #[test]
    fn test_fixture_names_round_trip() {
        for fixture in Fixture::ALL {
            assert_eq!(fixture.name().parse::<Fixture>().unwrap(), fixture);
            assert_eq!(fixture.file_name().parse::<Fixture>().unwrap(), fixture);
        }
        assert_eq!("manual_futebol".parse::<Fixture>().unwrap(), Fixture::FootballManual);
        assert!(matches!(
            "weather".parse::<Fixture>(),
            Err(Error::UnknownFixture(_))
        ));
    }

    #[test]
    fn test_every_fixture_lays_out() {
        for fixture in Fixture::ALL {
            let doc = fixture.document();
            let pages = layout_document(&doc, &StandardMetrics::new())
                .unwrap_or_else(|e| panic!("{}: {}", fixture, e));
            assert!(pages.len() > doc.page_break_count(), "{}", fixture);
        }
    }

    #[test]
    fn test_fixture_titles_use_custom_style() {
        let doc = Fixture::RecipeBook.document();
        let title = doc.styles.get(CUSTOM_TITLE).unwrap();
        assert_eq!(title.color, Color::DARK_RED);
        assert_eq!(title.font_size, 24.0);
        assert_eq!(
            doc.blocks[0].style_name().as_deref(),
            Some(CUSTOM_TITLE)
        );
    }

    #[test]
    fn test_api_reference_has_code_blocks() {
        let doc = Fixture::ApiReference.document();
        let code_blocks = doc.blocks.iter().filter(|b| b.preserves_whitespace()).count();
        assert_eq!(code_blocks, 4);
        assert_eq!(doc.styles.get(StyleSheet::CODE).unwrap().left_indent, 20.0);
    }

    #[test]
    fn test_generate_options_builder() {
        let options = GenerateOptions::new()
            .sequential()
            .with_fixtures([Fixture::ApiReference]);
        assert!(!options.parallel);
        assert_eq!(options.fixtures, vec![Fixture::ApiReference]);
        assert!(options.render.compress);
    }
}
