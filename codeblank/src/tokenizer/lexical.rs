//! Regex-driven tokenizer with per-language keyword profiles
//!
//! Good enough to highlight short exercise snippets without a full grammar:
//! every character lands in exactly one span, and only keywords, literals
//! and line comments get a class of their own.

use super::plain::WHITESPACE_CLASS;
use super::{Tokenizer, TokenizerError};
use crate::document::Span;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const KEYWORD_CLASS: &str = "keyword";
pub const IDENTIFIER_CLASS: &str = "identifier";
pub const NUMBER_CLASS: &str = "number";
pub const STRING_CLASS: &str = "string";
pub const COMMENT_CLASS: &str = "comment";
pub const PUNCTUATION_CLASS: &str = "punctuation";

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

/// One alternative per token class; the final `.` guarantees a match at
/// every position.
fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| {
        Regex::new(
            r#"(?s)(?P<ws>\s+)|(?P<string>"(?:[^"\\]|\\.)*"?|'(?:[^'\\]|\\.)*'?)|(?P<number>\d[\w.]*)|(?P<word>[\p{L}_][\p{L}\p{N}_]*)|(?P<punct>.)"#,
        )
        .expect("token regex is valid")
    })
}

/// Lexical facts about one language
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    /// Reserved words highlighted as keywords
    pub keywords: &'static [&'static str],
    /// Marker starting a comment that runs to the end of the line
    pub line_comment: Option<&'static str>,
}

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return",
    "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
    "void", "volatile", "while",
];

const CPP_KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "catch", "char", "class", "const", "constexpr",
    "continue", "default", "delete", "do", "double", "else", "enum", "explicit", "false",
    "float", "for", "friend", "if", "inline", "int", "long", "namespace", "new", "nullptr",
    "operator", "private", "protected", "public", "return", "short", "signed", "sizeof",
    "static", "struct", "switch", "template", "this", "throw", "true", "try", "typedef",
    "typename", "unsigned", "using", "virtual", "void", "while",
];

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "boolean", "break", "byte", "case", "catch", "char", "class", "continue",
    "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "new", "null", "package", "private", "protected", "public", "return", "short", "static",
    "super", "switch", "this", "throw", "throws", "true", "try", "var", "void", "while",
];

const JAVASCRIPT_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
    "delete", "do", "else", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "let", "new", "null", "of", "return", "super", "switch",
    "this", "throw", "true", "try", "typeof", "undefined", "var", "void", "while", "yield",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "else", "enum", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

impl LanguageProfile {
    /// Profile for a language id; unknown languages get no keywords and `//`
    /// comments
    pub fn for_language(language: &str) -> Self {
        let slashes = Some("//");
        match language.to_ascii_lowercase().as_str() {
            "c" => Self::new(C_KEYWORDS, slashes),
            "cpp" | "c++" => Self::new(CPP_KEYWORDS, slashes),
            "java" => Self::new(JAVA_KEYWORDS, slashes),
            "javascript" | "js" | "typescript" | "ts" => Self::new(JAVASCRIPT_KEYWORDS, slashes),
            "python" | "py" => Self::new(PYTHON_KEYWORDS, Some("#")),
            "rust" | "rs" => Self::new(RUST_KEYWORDS, slashes),
            _ => Self::new(&[], slashes),
        }
    }

    const fn new(keywords: &'static [&'static str], line_comment: Option<&'static str>) -> Self {
        Self {
            keywords,
            line_comment,
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(&word)
    }
}

/// Tokenizer classifying words, literals and punctuation by regex
#[derive(Debug, Clone, Default)]
pub struct LexicalTokenizer {
    /// Additional keywords per lowercase language id
    extra_keywords: BTreeMap<String, Vec<String>>,
}

impl LexicalTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add keywords on top of the built-in profiles
    pub fn with_extra_keywords(mut self, keywords: BTreeMap<String, Vec<String>>) -> Self {
        for (language, words) in keywords {
            self.extra_keywords
                .entry(language.to_ascii_lowercase())
                .or_default()
                .extend(words);
        }
        self
    }

    fn is_extra_keyword(&self, language: &str, word: &str) -> bool {
        self.extra_keywords
            .get(&language.to_ascii_lowercase())
            .is_some_and(|words| words.iter().any(|w| w == word))
    }
}

impl Tokenizer for LexicalTokenizer {
    fn tokenize(&self, line: &str, language: &str) -> Result<Vec<Span>, TokenizerError> {
        let profile = LanguageProfile::for_language(language);
        let regex = token_regex();
        let mut spans: Vec<Span> = Vec::new();
        let mut pos = 0;

        while pos < line.len() {
            let rest = &line[pos..];
            if profile.line_comment.is_some_and(|marker| rest.starts_with(marker)) {
                spans.push(Span::new(rest, COMMENT_CLASS));
                break;
            }

            let caps = regex
                .captures_at(line, pos)
                .filter(|caps| caps.get(0).is_some_and(|m| m.start() == pos && m.end() > pos))
                .ok_or_else(|| {
                    TokenizerError::Engine(format!("no token at byte {} of {:?}", pos, line))
                })?;
            let text = &caps[0];

            let class = if caps.name("ws").is_some() {
                WHITESPACE_CLASS
            } else if caps.name("string").is_some() {
                STRING_CLASS
            } else if caps.name("number").is_some() {
                NUMBER_CLASS
            } else if caps.name("word").is_some() {
                if profile.is_keyword(text) || self.is_extra_keyword(language, text) {
                    KEYWORD_CLASS
                } else {
                    IDENTIFIER_CLASS
                }
            } else {
                PUNCTUATION_CLASS
            };

            // Runs of punctuation read better as one span
            match spans.last_mut() {
                Some(last)
                    if class == PUNCTUATION_CLASS && last.style_class == PUNCTUATION_CLASS =>
                {
                    last.content.push_str(text);
                }
                _ => spans.push(Span::new(text, class)),
            }
            pos += text.len();
        }

        Ok(spans)
    }
}
