//! Blank grammar: markers, validation, line scanning and splicing
//!
//! Source text marks each blank with a block-comment pair, `/*` … `*/`.
//! This module holds the stages that turn such text into per-line hole
//! intervals and merge them with highlighted spans:
//! 1. **Validation** over the raw text (nesting, termination, adjacency)
//! 2. **Splitting** into non-empty lines
//! 3. **Scanning** each line, carrying the open-blank state forward
//! 4. **Splicing** hole intervals into the tokenizer's spans

// Submodules
mod error;
mod lines;
mod markers;
mod scanner;
mod splice;
mod validation;

// Re-export public types
pub use error::{Location, ParseError};
pub use lines::{split_lines, LineEnding, SourceLine};
pub use markers::{markers, Marker, MarkerKind, BLANK_CLOSE, BLANK_OPEN};
pub use scanner::{scan_line, scan_lines, HoleInterval, ScannedLine};
pub(crate) use splice::splice;
pub use validation::{check_adjacency, check_nesting, validate};
