//! Article generation pipeline
//!
//! Orchestrates one request end to end: validate keywords, scrape both link
//! candidate lists, compose the prompt, call the generator, then run the
//! analysis core over the returned article. Collaborator handles are
//! injected at construction; the pipeline itself holds no mutable state and
//! one invocation serves exactly one request.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::analysis::{self, DensityReport, KeywordSet, ScoreReport};
use crate::error::Result;
use crate::generator::{self, ArticleGenerator, Persona};
use crate::scrape::LinkScraper;

/// An inbound article request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRequest {
    /// Writer persona (defaults to Claire)
    #[serde(default)]
    pub author: Persona,
    /// Page whose outbound links seed external linking suggestions
    #[serde(default)]
    pub external_url: Option<String>,
    /// Page whose outbound links seed internal linking suggestions
    #[serde(default)]
    pub internal_url: Option<String>,
    /// Comma-separated keywords, principal first
    pub keywords: String,
}

/// The aggregated result of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    /// Identifier for this generated article
    pub id: Uuid,
    /// Full article body as raw HTML
    pub article_html: String,
    /// Generated SEO title
    pub seo_title: String,
    /// Generated meta description
    pub meta_description: String,
    /// JSON-LD schema, pretty-printed
    pub json_ld_schema: String,
    /// Keyword density analysis of the article body
    pub keyword_analysis: DensityReport,
    /// Follow-up keyword ideas from the generator
    pub keyword_ideas: Vec<String>,
    /// Rubric score and recommendations
    pub seo_score: ScoreReport,
    /// When the article was generated
    pub generated_at: DateTime<Utc>,
}

/// End-to-end article generation pipeline with injected collaborators.
#[derive(Clone)]
pub struct ArticlePipeline {
    generator: Arc<dyn ArticleGenerator>,
    scraper: LinkScraper,
}

impl ArticlePipeline {
    /// Create a pipeline around a generator handle and a link scraper.
    pub fn new(generator: Arc<dyn ArticleGenerator>, scraper: LinkScraper) -> Self {
        Self { generator, scraper }
    }

    /// Run the pipeline for one request.
    ///
    /// Keyword validation failures reject the request before any network
    /// work. Scrape failures degrade to placeholder strings inside the
    /// prompt. Generation failures abort with no partial result. Analysis
    /// and scoring cannot fail.
    #[instrument(skip_all, fields(author = ?request.author))]
    pub async fn run(&self, request: &ArticleRequest) -> Result<ArticleResponse> {
        let keywords = KeywordSet::parse(&request.keywords)?;

        let (external_links, internal_links) = futures::future::join(
            self.scraper.scrape_links(request.external_url.as_deref()),
            self.scraper.scrape_links(request.internal_url.as_deref()),
        )
        .await;

        let prompt = generator::compose(request.author, &keywords, &external_links, &internal_links);
        let article = self.generator.generate(&prompt).await?;

        let audit = analysis::audit(
            &article.html,
            &article.seo_title,
            &article.meta_description,
            &keywords,
        );

        info!(
            words = audit.density.total_words,
            score = audit.score.score,
            "article generated and audited"
        );

        Ok(ArticleResponse {
            id: Uuid::new_v4(),
            json_ld_schema: article.json_ld_pretty(),
            article_html: article.html,
            seo_title: article.seo_title,
            meta_description: article.meta_description,
            keyword_analysis: audit.density,
            keyword_ideas: article.keyword_ideas,
            seo_score: audit.score,
            generated_at: Utc::now(),
        })
    }
}
