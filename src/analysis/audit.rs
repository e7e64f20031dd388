//! Combined SEO audit
//!
//! The single synchronous entry point the request layer calls: one density
//! pass over the document, whose word count then feeds the scorer. The
//! result aggregates both reports and serializes directly into a structured
//! response.

use serde::{Deserialize, Serialize};

use crate::analysis::density::{DensityAnalyzer, DensityReport};
use crate::analysis::keywords::KeywordSet;
use crate::analysis::scorer::{ScoreReport, SeoScorer};

/// Aggregate analysis result: keyword densities plus the rubric score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoAudit {
    /// Keyword density analysis
    pub density: DensityReport,
    /// Rubric score and recommendations
    pub score: ScoreReport,
}

/// Run the full analysis over an article document.
///
/// Pure and infallible: any string input (empty, malformed, markup-free)
/// yields a report.
pub fn audit(
    html: &str,
    title: &str,
    meta_description: &str,
    keywords: &KeywordSet,
) -> SeoAudit {
    let density = DensityAnalyzer::analyze(html, keywords);
    let score = SeoScorer::score(html, title, meta_description, keywords, density.total_words);
    SeoAudit { density, score }
}
