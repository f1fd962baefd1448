//! Language-agnostic tokenizer without highlighting

use super::{Tokenizer, TokenizerError};
use crate::document::Span;

/// Style class of leading indentation
pub const WHITESPACE_CLASS: &str = "whitespace";

/// Style class of unhighlighted text
pub const PLAIN_CLASS: &str = "plain";

/// Splits off leading whitespace and returns the rest of the line as one span
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTokenizer;

impl Tokenizer for PlainTokenizer {
    fn tokenize(&self, line: &str, _language: &str) -> Result<Vec<Span>, TokenizerError> {
        let body = line.trim_start();
        let indent = &line[..line.len() - body.len()];

        let mut spans = Vec::with_capacity(2);
        if !indent.is_empty() {
            spans.push(Span::new(indent, WHITESPACE_CLASS));
        }
        if !body.is_empty() {
            spans.push(Span::new(body, PLAIN_CLASS));
        }
        Ok(spans)
    }
}
