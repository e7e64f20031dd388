//! Keyword density analysis
//!
//! Computes occurrence counts and density percentages for a keyword list
//! against a document's extracted text. Counting is substring-based, not
//! word-boundary based: a keyword that is a substring of another word still
//! counts. That overcounting is intentional and part of the reported metric.

use serde::{Deserialize, Serialize};

use crate::analysis::keywords::KeywordSet;
use crate::extraction::TextExtractor;

/// Per-keyword density record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensity {
    /// The keyword as supplied by the caller
    pub keyword: String,
    /// Non-overlapping substring occurrences in the document text
    pub count: usize,
    /// Percentage of total words, rounded to 2 decimals
    pub density: f64,
}

/// Density analysis result
///
/// Created fresh per analysis call. `densities` preserves the input keyword
/// order; it is empty when the document has no words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DensityReport {
    /// Total word tokens extracted from the document
    pub total_words: usize,
    /// Per-keyword records, in input order
    pub densities: Vec<KeywordDensity>,
}

/// Keyword density analysis functionality
pub struct DensityAnalyzer;

impl DensityAnalyzer {
    /// Analyze keyword densities in an HTML document.
    ///
    /// Pure function of its inputs: extracts visible text, counts word
    /// tokens, then counts case-insensitive substring occurrences of each
    /// keyword. A zero-word document yields an empty report with no
    /// per-keyword records.
    pub fn analyze(html: &str, keywords: &KeywordSet) -> DensityReport {
        let text = TextExtractor::visible_text(html);
        let total_words = TextExtractor::word_count(&text);
        if total_words == 0 {
            return DensityReport::default();
        }

        let densities = keywords
            .iter()
            .map(|keyword| {
                let needle = keyword.to_lowercase();
                let count = text.matches(needle.as_str()).count();
                let density = round2(count as f64 / total_words as f64 * 100.0);
                KeywordDensity {
                    keyword: keyword.to_string(),
                    count,
                    density,
                }
            })
            .collect();

        DensityReport {
            total_words,
            densities,
        }
    }
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
