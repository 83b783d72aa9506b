// Field layer - what each admin view column pulls off a record, how it is
// labeled, and which formatter renders it
pub mod field;
pub mod grid;
pub mod views;

pub use field::{Extractor, Field, UrlDepth};
pub use grid::render_row;
