//! Syntax tokenizer boundary
//!
//! The blank parser does not highlight code itself. It hands each stripped
//! line to a [`Tokenizer`] and relies only on its output contract:
//! - the returned spans, concatenated, reproduce the line byte for byte
//! - leading whitespace, if any, is a span of its own
//!
//! Span granularity is otherwise unconstrained. Two tokenizers ship with the
//! crate:
//! - [`PlainTokenizer`]: leading whitespace plus one span for the rest
//! - [`LexicalTokenizer`]: regex-based classification with keyword profiles
//!
//! Hosts with a real highlighting engine implement [`Tokenizer`] over it.

mod lexical;
mod plain;

use crate::config::{CodeblankConfig, TokenizerKind};
use crate::document::Span;
use std::path::Path;
use thiserror::Error;

pub use lexical::{LanguageProfile, LexicalTokenizer};
pub use plain::PlainTokenizer;

/// Errors reported by a tokenizer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// The engine has no grammar for the requested language
    #[error("Unsupported language '{0}'")]
    UnsupportedLanguage(String),

    /// The engine failed for another reason
    #[error("Tokenizer engine error: {0}")]
    Engine(String),
}

/// A syntax-highlighting engine
///
/// Called once per stripped line; calls are independent of each other and may
/// run on several threads at once.
pub trait Tokenizer: Send + Sync {
    /// Classify `line` as ordered spans of `language` source
    fn tokenize(&self, line: &str, language: &str) -> Result<Vec<Span>, TokenizerError>;
}

/// Whether `spans` reproduce `line` exactly
pub fn covers_line(spans: &[Span], line: &str) -> bool {
    let mut rest = line;
    for span in spans {
        match rest.strip_prefix(span.content.as_str()) {
            Some(remaining) => rest = remaining,
            None => return false,
        }
    }
    rest.is_empty()
}

/// Build the tokenizer selected by `config`
pub fn from_config(config: &CodeblankConfig) -> Box<dyn Tokenizer> {
    match config.tokenizer {
        TokenizerKind::Plain => Box::new(PlainTokenizer),
        TokenizerKind::Lexical => {
            Box::new(LexicalTokenizer::new().with_extra_keywords(config.keywords.clone()))
        }
    }
}

/// Guess a language identifier from a file extension
///
/// # Returns
/// * `Some(&str)` - Language id for a known extension
/// * `None` - Unknown or missing extension
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let language = match ext.as_str() {
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" => "cpp",
        "java" => "java",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" => "typescript",
        "py" => "python",
        "rs" => "rust",
        "cs" => "csharp",
        "go" => "go",
        "kt" => "kotlin",
        "swift" => "swift",
        _ => return None,
    };
    Some(language)
}
