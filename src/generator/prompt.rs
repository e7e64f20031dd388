//! Prompt composition
//!
//! Turns the request inputs (persona, keywords, scraped link candidates) into
//! the single prompt string the generator receives, including the JSON
//! structure contract the completion must follow.

use serde::{Deserialize, Serialize};

use crate::analysis::KeywordSet;

/// Writer persona controlling the article's tone.
///
/// Plain enumerated configuration consumed only by prompt composition; each
/// persona maps to one instruction sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    /// Pedagogical, clear, human, professional
    #[default]
    Claire,
    /// Direct, energetic, marketing-driven
    #[serde(alias = "Chloé")]
    Chloe,
}

impl Persona {
    /// The tone instruction injected into the prompt.
    pub fn instructions(&self) -> &'static str {
        match self {
            Persona::Claire => {
                "Adopt a pedagogical, clear, human and professional tone."
            }
            Persona::Chloe => "Adopt a direct, energetic, marketing-driven tone.",
        }
    }

    /// Display name used in the JSON-LD author field.
    pub fn name(&self) -> &'static str {
        match self {
            Persona::Claire => "Claire",
            Persona::Chloe => "Chloe",
        }
    }
}

/// Example of the JSON object the generator must return. The five keys are
/// the wire contract consumed by [`super::GeneratedArticle`].
const JSON_STRUCTURE_EXAMPLE: &str = r#"
{
  "titre_seo": "An optimized SEO title under 60 characters.",
  "meta_description": "An engaging, optimized meta description under 160 characters.",
  "article_html": "The complete article content as raw HTML.",
  "json_ld_schema": {
    "@context": "https://schema.org",
    "@type": "BlogPosting",
    "headline": "The article's H1 title",
    "author": { "@type": "Person", "name": "The chosen author's name" },
    "keywords": "comma-separated list of the keywords"
  },
  "idees_mots_cles_futurs": [
    "Related keyword idea 1", "Long-tail keyword idea 2", "A question readers ask 3", "An adjacent topic for a future article 4"
  ]
}
"#;

/// Compose the full generation prompt.
///
/// `external_links` and `internal_links` are the scraped candidate lists (or
/// their placeholder strings when scraping degraded).
pub fn compose(
    persona: Persona,
    keywords: &KeywordSet,
    external_links: &str,
    internal_links: &str,
) -> String {
    let principal = keywords.principal();
    let secondary = keywords.secondary().join(", ");

    format!(
        r#"You are a world-class SEO expert and web copywriter. Your task is to generate a complete set of content for a blog article.
Your answer MUST be a single valid JSON object, with no text before or after, following this structure:
{JSON_STRUCTURE_EXAMPLE}

Now, here are the instructions for filling in this JSON:
1. ARTICLE HTML: Persona: {persona_instructions}, Length: 1200-1500 words, SEO: principal keyword "{principal}" and secondary keywords "{secondary}", External linking: 1 link from the list "{external_links}", Internal linking: 3-4 links from the list "{internal_links}".
2. SEO TITLE & META DESCRIPTION: Unique, attractive, max 60/160 characters.
3. JSON-LD SCHEMA: Fill it in with the generated article's details. Author: "{author}".
4. FUTURE KEYWORD IDEAS: Suggest 4 related article ideas based on "{principal}"."#,
        persona_instructions = persona.instructions(),
        author = persona.name(),
    )
}
