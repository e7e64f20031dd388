//! Link scraping collaborator
//!
//! Fetches a page and harvests its anchor texts and targets into the bounded,
//! human-readable candidate list the prompt builder embeds. Scraping is a
//! best-effort collaborator: every failure mode degrades to a descriptive
//! placeholder string so a dead or slow URL never aborts article generation.

use std::time::Duration;

use scraper::{Html, Selector};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::ScrapeError;

/// Maximum number of link candidates handed to the prompt builder
pub const MAX_LINKS: usize = 20;

/// Fetch timeout per scraped page
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Desktop User-Agent sent with scrape requests
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

const NO_URL_PLACEHOLDER: &str = "No URL provided.";
const NO_LINKS_PLACEHOLDER: &str = "No relevant links found on the page.";

/// Link scraping functionality
#[derive(Debug, Clone)]
pub struct LinkScraper {
    client: reqwest::Client,
}

impl LinkScraper {
    /// Create a scraper with its own HTTP client (desktop UA, 10 s timeout).
    pub fn new() -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Scrape link candidates from a URL into a newline-joined list.
    ///
    /// Each entry reads `- Link text: '<text>', URL: <absolute>`, bounded to
    /// the first [`MAX_LINKS`] anchors with non-empty text whose target is
    /// neither a fragment nor a `mailto:` address. Never fails upward: a
    /// missing URL, a network error, or a linkless page all return a
    /// placeholder string describing the situation.
    #[instrument(skip(self))]
    pub async fn scrape_links(&self, url: Option<&str>) -> String {
        let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            return NO_URL_PLACEHOLDER.to_string();
        };

        match self.fetch_links(url).await {
            Ok(lines) if lines.is_empty() => NO_LINKS_PLACEHOLDER.to_string(),
            Ok(lines) => {
                debug!(count = lines.len(), "scraped link candidates");
                lines.join("\n")
            }
            Err(e) => {
                warn!(url, error = %e, "link scraping failed");
                format!("Could not analyze URL: {url}.")
            }
        }
    }

    async fn fetch_links(&self, url: &str) -> Result<Vec<String>, ScrapeError> {
        let base = Url::parse(url)?;
        let body = self
            .client
            .get(base.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(Self::extract_links(&body, &base))
    }

    /// Harvest anchor candidates from fetched markup.
    fn extract_links(html: &str, base: &Url) -> Vec<String> {
        let document = Html::parse_document(html);
        let anchors = Selector::parse("a[href]").unwrap();

        let mut lines = Vec::new();
        for element in document.select(&anchors) {
            let text = element.text().collect::<String>().trim().to_string();
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if text.is_empty() || href.starts_with('#') || href.starts_with("mailto:") {
                continue;
            }
            let absolute = base
                .join(href)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| href.to_string());
            lines.push(format!("- Link text: '{text}', URL: {absolute}"));
            if lines.len() == MAX_LINKS {
                break;
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/blog/").unwrap()
    }

    #[test]
    fn test_extract_links_formats_and_absolutizes() {
        let html = r#"<a href="post-1">First post</a> <a href="https://other.org/x">Other</a>"#;
        let lines = LinkScraper::extract_links(html, &base());
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "- Link text: 'First post', URL: https://example.com/blog/post-1"
        );
        assert_eq!(lines[1], "- Link text: 'Other', URL: https://other.org/x");
    }

    #[test]
    fn test_extract_links_filters_fragments_mailto_and_empty_text() {
        let html = r##"
            <a href="#section">Jump</a>
            <a href="mailto:x@example.com">Mail</a>
            <a href="/visible"></a>
            <a href="/kept">Kept</a>
        "##;
        let lines = LinkScraper::extract_links(html, &base());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Kept"));
    }

    #[test]
    fn test_extract_links_bounded_to_max() {
        let html: String = (0..50)
            .map(|i| format!(r#"<a href="/p{i}">Post {i}</a>"#))
            .collect();
        let lines = LinkScraper::extract_links(&html, &base());
        assert_eq!(lines.len(), MAX_LINKS);
    }

    #[tokio::test]
    async fn test_missing_url_yields_placeholder() {
        let scraper = LinkScraper::new().unwrap();
        assert_eq!(scraper.scrape_links(None).await, "No URL provided.");
        assert_eq!(scraper.scrape_links(Some("  ")).await, "No URL provided.");
    }

    #[tokio::test]
    async fn test_invalid_url_degrades_to_placeholder() {
        let scraper = LinkScraper::new().unwrap();
        let result = scraper.scrape_links(Some("not a url")).await;
        assert_eq!(result, "Could not analyze URL: not a url.");
    }
}
