//! Sentiment classification of extracted article text.
//!
//! The model is prompted for a fixed three-line Korean reply format and the
//! free-text answer is parsed back tolerantly: any field the parser cannot
//! find or coerce falls back to its default instead of failing the request.

pub mod gemini;
pub mod parser;
pub mod prompt;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default label when the reply never names a sentiment.
pub const DEFAULT_LABEL: &str = "중립";
/// Default confidence when the score line is absent or unparsable.
pub const DEFAULT_SCORE: f64 = 0.5;

/// Failure of the model invocation itself. Defects in the model's *reply*
/// are not errors; the parser absorbs those into defaults.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("model request failed: {0}")]
    Request(String),

    #[error("model returned http {0}")]
    Http(reqwest::StatusCode),

    #[error("model reply contained no text")]
    EmptyReply,
}

/// A "generate text from prompt" capability. The Gemini client is the real
/// implementation; tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;
}

/// Structured sentiment judgment for one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: String,
    pub score: f64,
    pub rationale: String,
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            score: DEFAULT_SCORE,
            rationale: String::new(),
        }
    }
}

/// Run the sentiment pipeline over already-extracted text: build the prompt,
/// invoke the model, parse its free-text reply.
pub async fn analyze(
    model: &dyn GenerativeModel,
    text: &str,
) -> Result<SentimentResult, AnalysisError> {
    let prompt = prompt::build(text);
    let reply = model.generate(&prompt).await?;
    Ok(parser::parse_reply(&reply))
}
