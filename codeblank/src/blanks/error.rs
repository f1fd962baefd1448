//! Error types for blank parsing

use crate::tokenizer::TokenizerError;
use thiserror::Error;

/// Position of a marker in the raw source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// 1-based source line number
    pub line: usize,
    /// 1-based character column within the line
    pub column: usize,
}

impl Location {
    /// Create a location from 1-based line and column numbers
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Resolve a byte offset in `text` to a line/column location
    ///
    /// Lines are counted by `\n`; a `\r` preceding it counts as a column on
    /// its own line, which never matters for markers.
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let before = &text[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors that abort a parse before any document is produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A blank was opened while another one was still open
    #[error("Blank opened at {location} while another blank is still open (blanks cannot be nested)")]
    NestedBlank {
        /// Position of the offending opening marker
        location: Location,
    },

    /// A closing marker appeared with no open blank
    #[error("Closing marker at {location} has no matching opening marker")]
    UnmatchedClose {
        /// Position of the closing marker
        location: Location,
    },

    /// The input ended while a blank was still open
    #[error("Blank opened at {location} is never closed")]
    UnterminatedBlank {
        /// Position of the opening marker that was never closed
        location: Location,
    },

    /// Two blanks touch with nothing but marker characters between them
    #[error("Blank at {location} directly follows the previous blank; separate them with code")]
    AdjacentBlanks {
        /// Position of the second blank's opening marker
        location: Location,
    },

    /// The tokenizer could not classify a line
    #[error("Tokenizer failed on line {line}: {source}")]
    Tokenizer {
        /// 1-based source line number
        line: usize,
        /// Underlying tokenizer failure
        #[source]
        source: TokenizerError,
    },

    /// The tokenizer returned spans that do not reproduce the line
    #[error("Tokenizer output for line {line} does not reproduce the line text")]
    TokenizerMismatch {
        /// 1-based source line number
        line: usize,
    },
}

impl ParseError {
    /// Move a marker error reported against a single line onto `line`
    pub(crate) fn on_line(self, line: usize) -> Self {
        match self {
            Self::NestedBlank { location } => Self::NestedBlank {
                location: Location::new(line, location.column),
            },
            Self::UnmatchedClose { location } => Self::UnmatchedClose {
                location: Location::new(line, location.column),
            },
            Self::UnterminatedBlank { location } => Self::UnterminatedBlank {
                location: Location::new(line, location.column),
            },
            Self::AdjacentBlanks { location } => Self::AdjacentBlanks {
                location: Location::new(line, location.column),
            },
            other => other,
        }
    }

    /// Location of the offending marker, if this is a marker error
    pub fn location(&self) -> Option<Location> {
        match self {
            Self::NestedBlank { location }
            | Self::UnmatchedClose { location }
            | Self::UnterminatedBlank { location }
            | Self::AdjacentBlanks { location } => Some(*location),
            Self::Tokenizer { .. } | Self::TokenizerMismatch { .. } => None,
        }
    }
}
