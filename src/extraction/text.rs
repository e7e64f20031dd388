//! Visible text extraction
//!
//! This module strips markup from HTML, yielding the document's visible text
//! (lowercased for case-insensitive matching) and its word tokens.
//!
//! Generated content is not guaranteed well-formed, so extraction is
//! best-effort and total: the underlying html5ever parser recovers from any
//! malformed input, and an empty or markup-free document simply yields zero
//! tokens.

use scraper::{ElementRef, Html};

/// Elements whose subtree text is never visible to a reader.
const INVISIBLE_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Text extraction functionality
pub struct TextExtractor;

impl TextExtractor {
    /// Extract the document's visible text, lowercased.
    ///
    /// Text nodes are concatenated without inserted separators, so inline
    /// markup inside a word (`co<b>ffee</b>`) does not split it. Whatever
    /// whitespace the source carries between blocks is preserved as-is.
    pub fn visible_text(html: &str) -> String {
        let document = Html::parse_document(html);
        let mut out = String::new();
        Self::collect_visible(document.root_element(), &mut out);
        out.to_lowercase()
    }

    /// Tokenize text into word-like substrings.
    ///
    /// A word is a maximal run of `\w` characters (Unicode-aware), matching
    /// how densities relate counts to a total.
    pub fn tokenize(text: &str) -> Vec<&str> {
        let word_re = regex::Regex::new(r"\w+").unwrap();
        word_re.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Count word tokens in text.
    pub fn word_count(text: &str) -> usize {
        let word_re = regex::Regex::new(r"\w+").unwrap();
        word_re.find_iter(text).count()
    }

    fn collect_visible(element: ElementRef, out: &mut String) {
        if INVISIBLE_ELEMENTS.contains(&element.value().name()) {
            return;
        }
        for child in element.children() {
            if let Some(text) = child.value().as_text() {
                out.push_str(text);
            } else if let Some(child_element) = ElementRef::wrap(child) {
                Self::collect_visible(child_element, out);
            }
        }
    }
}
