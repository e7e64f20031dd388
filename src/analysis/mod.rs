//! SEO analysis module
//!
//! The crate's core: keyword validation, keyword-density analysis, and
//! rule-based SEO scoring. Everything here is synchronous, side-effect-free,
//! and total over arbitrary string input.

pub mod audit;
pub mod density;
pub mod keywords;
pub mod scorer;

pub use audit::{audit, SeoAudit};
pub use density::{DensityAnalyzer, DensityReport, KeywordDensity};
pub use keywords::KeywordSet;
pub use scorer::{ScoreReport, SeoScorer, MAX_SCORE};
