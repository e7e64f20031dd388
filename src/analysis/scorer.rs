//! Rule-based SEO scoring
//!
//! Applies a fixed rubric of structural, length, and keyword checks against
//! an article document. Each rule is evaluated independently: a pass adds the
//! rule's weight to the score, a failure appends exactly one recommendation —
//! never both. Scoring is total over any string input; missing elements are
//! zero counts, not errors.
//!
//! Rubric weights:
//!
//! | Rule                                   | Weight |
//! |----------------------------------------|--------|
//! | Principal keyword in H1                | 20     |
//! | Word count in range                    | 15     |
//! | SEO title length in range              | 15     |
//! | Meta description length in range       | 10     |
//! | At least 4 links                       | 15     |
//! | At least 3 H2 subheadings              | 15     |
//! | A secondary keyword appears in text    | 10     |
//!
//! The secondary-keyword rule only exists when secondary keywords were
//! supplied; with a single keyword it contributes neither score nor
//! recommendation, capping the attainable score at 90.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::analysis::keywords::KeywordSet;
use crate::extraction::{DocumentOutline, TextExtractor};

/// Weight for the principal-keyword-in-H1 rule
pub const H1_KEYWORD_WEIGHT: u32 = 20;
/// Weight for the word-count rule
pub const WORD_COUNT_WEIGHT: u32 = 15;
/// Weight for the title-length rule
pub const TITLE_LENGTH_WEIGHT: u32 = 15;
/// Weight for the meta-description-length rule
pub const META_LENGTH_WEIGHT: u32 = 10;
/// Weight for the link-count rule
pub const LINK_COUNT_WEIGHT: u32 = 15;
/// Weight for the H2-count rule
pub const H2_COUNT_WEIGHT: u32 = 15;
/// Weight for the secondary-keyword presence rule
pub const SECONDARY_KEYWORD_WEIGHT: u32 = 10;

/// Maximum attainable score when secondary keywords exist
pub const MAX_SCORE: u32 = 100;

/// Accepted word-count range.
///
/// The failure message names the 1200-1500 target the article prompt states,
/// while the check accepts up to 1600; both values ship as-is.
pub const WORD_COUNT_RANGE: RangeInclusive<usize> = 1200..=1600;
/// Accepted SEO title length range, in characters
pub const TITLE_LENGTH_RANGE: RangeInclusive<usize> = 40..=60;
/// Accepted meta-description length range, in characters
pub const META_LENGTH_RANGE: RangeInclusive<usize> = 120..=160;
/// Minimum number of links (internal + external)
pub const MIN_LINKS: usize = 4;
/// Minimum number of H2 subheadings
pub const MIN_H2_HEADINGS: usize = 3;

/// Scoring result
///
/// Created fresh per scoring call. `recommendations` is never empty: when
/// every rule passes it holds a single positive message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Sum of the weights of passing rules
    pub score: u32,
    /// One entry per failing rule, in rule order
    pub recommendations: Vec<String>,
}

/// SEO scoring functionality
pub struct SeoScorer;

impl SeoScorer {
    /// Score an article document against the rubric.
    ///
    /// `total_words` is the word count the density analyzer computed for the
    /// same document; title and meta-description lengths are counted in
    /// Unicode scalar values.
    pub fn score(
        html: &str,
        title: &str,
        meta_description: &str,
        keywords: &KeywordSet,
        total_words: usize,
    ) -> ScoreReport {
        let outline = DocumentOutline::parse(html);
        let mut score = 0;
        let mut recommendations = Vec::new();

        let principal = keywords.principal().to_lowercase();
        let h1_has_principal = outline
            .h1_text
            .as_deref()
            .map(|t| t.to_lowercase().contains(&principal))
            .unwrap_or(false);
        if h1_has_principal {
            score += H1_KEYWORD_WEIGHT;
        } else {
            recommendations
                .push("The principal keyword is missing from the H1 heading.".to_string());
        }

        if WORD_COUNT_RANGE.contains(&total_words) {
            score += WORD_COUNT_WEIGHT;
        } else {
            recommendations.push(format!(
                "Word count ({total_words} words) is outside the 1200-1500 target."
            ));
        }

        let title_len = title.chars().count();
        if TITLE_LENGTH_RANGE.contains(&title_len) {
            score += TITLE_LENGTH_WEIGHT;
        } else {
            recommendations.push(format!(
                "The SEO title ({title_len} chars) is outside the 40-60 target."
            ));
        }

        let meta_len = meta_description.chars().count();
        if META_LENGTH_RANGE.contains(&meta_len) {
            score += META_LENGTH_WEIGHT;
        } else {
            recommendations.push(format!(
                "The meta description ({meta_len} chars) is outside the 120-160 target."
            ));
        }

        if outline.anchor_count >= MIN_LINKS {
            score += LINK_COUNT_WEIGHT;
        } else {
            recommendations
                .push("Aim for at least 4 links (internal + external).".to_string());
        }

        if outline.h2_count >= MIN_H2_HEADINGS {
            score += H2_COUNT_WEIGHT;
        } else {
            recommendations
                .push("Add H2 subheadings to give the article structure.".to_string());
        }

        // Rule absent entirely when no secondary keywords were supplied.
        if !keywords.secondary().is_empty() {
            let text = TextExtractor::visible_text(html);
            let secondary_found = keywords
                .secondary()
                .iter()
                .any(|kw| text.contains(&kw.to_lowercase()));
            if secondary_found {
                score += SECONDARY_KEYWORD_WEIGHT;
            } else {
                recommendations
                    .push("Secondary keywords are barely used in the article.".to_string());
            }
        }

        if recommendations.is_empty() {
            recommendations
                .push("Excellent work! The article follows SEO best practices.".to_string());
        }

        ScoreReport {
            score,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(raw: &str) -> KeywordSet {
        KeywordSet::parse(raw).unwrap()
    }

    /// A document passing the three structural rules: H1 carries "coffee",
    /// three H2s, four anchors.
    fn structural_html() -> &'static str {
        r#"
        <h1>Best Coffee Guide</h1>
        <h2>Beans</h2><h2>Roasting</h2><h2>Brewing</h2>
        <p>Try arabica today.</p>
        <a href="/a">a</a><a href="/b">b</a><a href="/c">c</a><a href="/d">d</a>
        "#
    }

    #[test]
    fn test_h1_rule_passes_on_case_insensitive_match() {
        let report = SeoScorer::score(
            "<h1>Best Coffee Guide</h1>",
            "",
            "",
            &keywords("coffee"),
            0,
        );
        assert!(report.score >= H1_KEYWORD_WEIGHT);
        assert!(!report
            .recommendations
            .iter()
            .any(|r| r.contains("principal keyword")));
    }

    #[test]
    fn test_h1_rule_fails_without_h1() {
        let report = SeoScorer::score("<p>no heading</p>", "", "", &keywords("coffee"), 0);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("principal keyword")));
    }

    #[test]
    fn test_word_count_bounds() {
        let kw = keywords("coffee");
        for (count, passes) in [(1199, false), (1200, true), (1600, true), (1601, false)] {
            let report = SeoScorer::score("", "", "", &kw, count);
            let failed = report
                .recommendations
                .iter()
                .any(|r| r.contains("Word count"));
            assert_eq!(failed, !passes, "word count {count}");
        }
    }

    #[test]
    fn test_word_count_message_interpolates_actual_count() {
        let report = SeoScorer::score("", "", "", &keywords("coffee"), 900);
        let msg = report
            .recommendations
            .iter()
            .find(|r| r.contains("Word count"))
            .unwrap();
        assert!(msg.contains("900"));
        // The displayed target range intentionally reads 1200-1500.
        assert!(msg.contains("1200-1500"));
    }

    #[test]
    fn test_title_length_rule() {
        let kw = keywords("coffee");
        let good_title = "x".repeat(45);
        let report = SeoScorer::score("", &good_title, "", &kw, 0);
        assert!(!report.recommendations.iter().any(|r| r.contains("SEO title")));

        let bad_title = "x".repeat(61);
        let report = SeoScorer::score("", &bad_title, "", &kw, 0);
        let msg = report
            .recommendations
            .iter()
            .find(|r| r.contains("SEO title"))
            .unwrap();
        assert!(msg.contains("61"));
    }

    #[test]
    fn test_title_length_counts_chars_not_bytes() {
        // 45 scalar values, more than 60 bytes
        let title = "é".repeat(45);
        let report = SeoScorer::score("", &title, "", &keywords("coffee"), 0);
        assert!(!report.recommendations.iter().any(|r| r.contains("SEO title")));
    }

    #[test]
    fn test_meta_description_rule() {
        let kw = keywords("coffee");
        let good = "m".repeat(140);
        let report = SeoScorer::score("", "", &good, &kw, 0);
        assert!(!report
            .recommendations
            .iter()
            .any(|r| r.contains("meta description")));

        let report = SeoScorer::score("", "", "too short", &kw, 0);
        let msg = report
            .recommendations
            .iter()
            .find(|r| r.contains("meta description"))
            .unwrap();
        assert!(msg.contains("9 chars"));
    }

    #[test]
    fn test_link_rule_requires_four_anchors() {
        let three = "<a>1</a><a>2</a><a>3</a>";
        let report = SeoScorer::score(three, "", "", &keywords("coffee"), 0);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("at least 4 links")));

        let four = "<a>1</a><a>2</a><a>3</a><a>4</a>";
        let report = SeoScorer::score(four, "", "", &keywords("coffee"), 0);
        assert!(!report
            .recommendations
            .iter()
            .any(|r| r.contains("at least 4 links")));
    }

    #[test]
    fn test_h2_rule_requires_three_subheadings() {
        let two = "<h2>a</h2><h2>b</h2>";
        let report = SeoScorer::score(two, "", "", &keywords("coffee"), 0);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("H2 subheadings")));
    }

    #[test]
    fn test_secondary_rule_passes_on_substring_presence() {
        let html = "<p>our arabica story</p>";
        let report = SeoScorer::score(html, "", "", &keywords("coffee,arabica"), 0);
        assert!(!report
            .recommendations
            .iter()
            .any(|r| r.contains("Secondary keywords")));
    }

    #[test]
    fn test_secondary_rule_fails_when_absent() {
        let html = "<p>plain text</p>";
        let report = SeoScorer::score(html, "", "", &keywords("coffee,arabica"), 0);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("Secondary keywords")));
    }

    #[test]
    fn test_secondary_rule_skipped_with_single_keyword() {
        let report = SeoScorer::score("<p>anything</p>", "", "", &keywords("seo"), 0);
        assert!(!report
            .recommendations
            .iter()
            .any(|r| r.contains("Secondary keywords")));
    }

    #[test]
    fn test_max_score_with_secondary_keywords() {
        let title = "t".repeat(50);
        let meta = "m".repeat(140);
        let report = SeoScorer::score(
            structural_html(),
            &title,
            &meta,
            &keywords("coffee,arabica"),
            1300,
        );
        assert_eq!(report.score, MAX_SCORE);
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.recommendations[0].contains("best practices"));
    }

    #[test]
    fn test_max_score_is_ninety_without_secondary_keywords() {
        let title = "t".repeat(50);
        let meta = "m".repeat(140);
        let report = SeoScorer::score(structural_html(), &title, &meta, &keywords("coffee"), 1300);
        assert_eq!(report.score, 90);
        assert_eq!(report.recommendations.len(), 1);
    }

    #[test]
    fn test_empty_html_produces_failure_recommendations_only() {
        let report = SeoScorer::score("", "", "", &keywords("coffee,arabica"), 0);
        assert_eq!(report.score, 0);
        // All seven rules fail.
        assert_eq!(report.recommendations.len(), 7);
    }

    #[test]
    fn test_recommendations_never_empty() {
        let report = SeoScorer::score("", "", "", &keywords("x"), 0);
        assert!(!report.recommendations.is_empty());
    }
}
