//! Layout engine: text measurement, line wrapping and pagination.
//!
//! Layout is pure; it turns a [`Document`](crate::model::Document) into
//! [`LaidOutPage`]s which the PDF writer then serializes.

mod flow;
mod metrics;
mod wrap;

pub use flow::{layout_document, measure_height, LaidOutPage, PlacedLine};
pub use metrics::{StandardMetrics, TextMeasure};
pub use wrap::{wrap, Fragment, Line};
