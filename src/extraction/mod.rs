//! HTML extraction module
//!
//! This module turns raw article markup into the inputs the analysis core
//! consumes: visible text, word tokens, and a structural census of the
//! document (headings and anchors).

pub mod outline;
pub mod text;

pub use outline::DocumentOutline;
pub use text::TextExtractor;
