//! Generated article wire format
//!
//! The generator is asked to answer with a single JSON object carrying five
//! fixed keys. Deserialization is lenient: any missing key falls back to an
//! empty value so a sparse completion still flows through the pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured article content returned by the generator.
///
/// The wire keys are the generator's output contract and are fixed; the
/// field names are ours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedArticle {
    /// SEO title (wire key `titre_seo`)
    #[serde(rename = "titre_seo", default)]
    pub seo_title: String,

    /// Meta description (wire key `meta_description`)
    #[serde(rename = "meta_description", default)]
    pub meta_description: String,

    /// Full article body as raw HTML (wire key `article_html`)
    #[serde(rename = "article_html", default)]
    pub html: String,

    /// JSON-LD structured-data schema (wire key `json_ld_schema`)
    #[serde(rename = "json_ld_schema", default = "empty_object")]
    pub json_ld: Value,

    /// Follow-up keyword ideas (wire key `idees_mots_cles_futurs`)
    #[serde(rename = "idees_mots_cles_futurs", default)]
    pub keyword_ideas: Vec<String>,
}

impl Default for GeneratedArticle {
    fn default() -> Self {
        Self {
            seo_title: String::new(),
            meta_description: String::new(),
            html: String::new(),
            json_ld: empty_object(),
            keyword_ideas: Vec::new(),
        }
    }
}

impl GeneratedArticle {
    /// The JSON-LD schema pretty-printed for the response payload.
    pub fn json_ld_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.json_ld).unwrap_or_else(|_| "{}".to_string())
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}
