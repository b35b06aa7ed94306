use serde::{Deserialize, Serialize};
use url::Url;

/// Title and body text pulled out of a fetched news page.
///
/// Extraction is best-effort: when nothing recognizable is found the fields
/// hold placeholder strings rather than being absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub url: Url,
    pub title: String,
    pub content: String,
}
