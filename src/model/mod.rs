//! Document model types.
//!
//! A [`Document`] is an ordered list of [`Block`]s, a [`StyleSheet`] the
//! blocks refer to by name, and a [`PageSetup`]. It is built in memory,
//! handed to the assembler, and discarded after rendering.

mod block;
mod document;
mod page;
mod style;

pub use block::Block;
pub use document::{Document, Metadata};
pub use page::{Margins, PageSetup, PageSize, INCH};
pub use style::{Alignment, Color, Font, FontFamily, Style, StyleSheet};
