//! Document structure census
//!
//! The scorer's structural rules only need a handful of facts about the
//! document: the first H1's text, how many H2 subheadings exist, and how many
//! anchors exist. One parse collects all of them.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Structural facts about an HTML document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Text of the first H1 element, if any
    pub h1_text: Option<String>,
    /// Number of H2 elements
    pub h2_count: usize,
    /// Number of anchor elements
    pub anchor_count: usize,
}

impl DocumentOutline {
    /// Parse structural facts out of a document.
    ///
    /// Missing elements are zero counts / `None`, never errors, and malformed
    /// markup is handled by the parser's error recovery.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let h1 = Selector::parse("h1").unwrap();
        let h2 = Selector::parse("h2").unwrap();
        let anchor = Selector::parse("a").unwrap();

        let h1_text = document
            .select(&h1)
            .next()
            .map(|el| el.text().collect::<String>());

        Self {
            h1_text,
            h2_count: document.select(&h2).count(),
            anchor_count: document.select(&anchor).count(),
        }
    }
}
