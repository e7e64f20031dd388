//! Keyword set validation
//!
//! Keywords arrive as a comma-separated string in caller priority order. The
//! first surviving keyword is the principal keyword; the remainder are
//! secondary. A set with no usable keyword is a validation failure, rejected
//! before any scraping or generation work begins.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Trimmed, non-empty keywords in caller priority order.
///
/// Construction guarantees at least one keyword, so [`KeywordSet::principal`]
/// is always defined. Matching against document text is case-insensitive;
/// the stored keywords keep their original casing for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Parse a comma-separated keyword string.
    ///
    /// Each segment is trimmed; empty segments are dropped. Fails when
    /// nothing survives.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.split(',').map(str::to_string).collect())
    }

    /// Build a keyword set from pre-split keywords, trimming each and
    /// dropping empties.
    pub fn new(keywords: Vec<String>) -> Result<Self, ValidationError> {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(ValidationError::NoKeywords);
        }
        Ok(Self { keywords })
    }

    /// The first keyword, weighted most heavily in scoring.
    pub fn principal(&self) -> &str {
        &self.keywords[0]
    }

    /// Every keyword after the first, checked only for presence.
    pub fn secondary(&self) -> &[String] {
        &self.keywords[1..]
    }

    /// All keywords in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Number of keywords (always at least 1).
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Always false; kept so `len` has its conventional companion.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empties() {
        let set = KeywordSet::parse(" coffee , , arabica beans ,").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.principal(), "coffee");
        assert_eq!(set.secondary(), ["arabica beans"]);
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(KeywordSet::parse("").is_err());
        assert!(KeywordSet::parse(" , ,, ").is_err());
    }

    #[test]
    fn test_single_keyword_has_no_secondary() {
        let set = KeywordSet::parse("seo").unwrap();
        assert_eq!(set.principal(), "seo");
        assert!(set.secondary().is_empty());
        assert!(!set.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let set = KeywordSet::parse("c,b,a").unwrap();
        let collected: Vec<&str> = set.iter().collect();
        assert_eq!(collected, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_casing_is_kept() {
        let set = KeywordSet::parse("Coffee").unwrap();
        assert_eq!(set.principal(), "Coffee");
    }
}
