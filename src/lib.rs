//! SeoScribe - SEO Article Drafting & Audit Service
//!
//! This crate provides an HTTP service that drafts SEO-optimized blog
//! articles with an LLM generator and audits the result against a fixed
//! rubric of SEO heuristics.
//!
//! # Features
//!
//! - **Keyword Density Analysis**: occurrence counts and density percentages
//!   for caller-supplied keywords
//! - **SEO Scoring**: a seven-rule rubric over document structure, lengths,
//!   and keyword placement, with actionable recommendations
//! - **Link Scraping**: bounded anchor harvesting that seeds the generator's
//!   internal/external linking suggestions
//! - **Article Generation**: OpenAI-compatible structured-output client
//!   behind an injectable trait seam
//!
//! # Architecture
//!
//! ```text
//! HTTP Request ──▶ ArticlePipeline ──▶ LinkScraper ──▶ prompt ──▶ Generator
//!                        │                                            │
//!                        ▼                                            ▼
//!                 ┌────────────┐                             GeneratedArticle
//!                 │  Analysis  │ ◀──────── article HTML ────────────┘
//!                 └─────┬──────┘
//!                       ▼
//!          DensityReport + ScoreReport
//! ```
//!
//! # Quick Start
//!
//! The analysis core is a plain library call, usable without the service:
//!
//! ```rust
//! use seoscribe::analysis::{audit, KeywordSet};
//!
//! let keywords = KeywordSet::parse("coffee, arabica")?;
//! let html = "<h1>Best Coffee Guide</h1><p>All about coffee and arabica.</p>";
//! let result = audit(html, "An SEO title", "A meta description", &keywords);
//!
//! assert_eq!(result.density.densities[0].keyword, "coffee");
//! assert!(!result.score.recommendations.is_empty());
//! # Ok::<(), seoscribe::error::ValidationError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analysis;
pub mod cors;
pub mod error;
pub mod extraction;
pub mod generator;
pub mod handlers;
pub mod pipeline;
pub mod scrape;

// Re-exports for convenience
pub use analysis::{audit, DensityAnalyzer, DensityReport, KeywordSet, ScoreReport, SeoAudit, SeoScorer};
pub use error::{Error, Result};
pub use extraction::{DocumentOutline, TextExtractor};
pub use generator::{ArticleGenerator, GeneratedArticle, OpenAiGenerator, Persona};
pub use pipeline::{ArticlePipeline, ArticleRequest, ArticleResponse};
pub use scrape::LinkScraper;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
