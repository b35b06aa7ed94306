//! Tolerant line-oriented parser for the model's free-text reply.
//!
//! Each line is matched against the marker set from [`crate::sentiment::prompt`];
//! the value is everything after the FIRST colon on the line, so rationale
//! text containing colons survives intact. A field whose marker never
//! appears, or whose value cannot be coerced, keeps its default. Parsing
//! never fails.

use crate::sentiment::prompt::{LABEL_MARKER, RATIONALE_MARKER, SCORE_MARKER};
use crate::sentiment::{DEFAULT_SCORE, SentimentResult};

pub fn parse_reply(reply: &str) -> SentimentResult {
    let mut result = SentimentResult::default();

    for line in reply.trim().lines() {
        let Some((_, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        if line.contains(LABEL_MARKER) {
            result.label = value.to_string();
        } else if line.contains(SCORE_MARKER) {
            result.score = value.parse().unwrap_or(DEFAULT_SCORE);
        } else if line.contains(RATIONALE_MARKER) {
            result.rationale = value.to_string();
        }
    }

    result
}
