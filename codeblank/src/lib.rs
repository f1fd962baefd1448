//! codeblank - fill-in-the-blank source code transform
//!
//! Turns source code whose blanks are marked with block comments into a
//! highlighted [`Document`] of spans and holes, and rebuilds submittable
//! source from that document plus the values a student typed in.
//!
//! ```no_run
//! use codeblank::{parse, reconstruct, LineEnding, PlainTokenizer};
//!
//! let doc = parse("if (/*true*/) {", "c", &PlainTokenizer)?;
//! assert_eq!(doc.hole_count(), 1);
//!
//! let source = reconstruct(&doc, &["x > 0"], LineEnding::Crlf)?;
//! assert_eq!(source, "if (x > 0) {");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod blanks;
pub mod config;
pub mod document;
pub mod pipeline;
pub mod serializer;
pub mod tokenizer;

pub use blanks::{HoleInterval, LineEnding, Location, ParseError};
pub use config::{CodeblankConfig, ConfigError, TokenizerKind};
pub use document::{Document, Element, Hole, Line, Span};
pub use pipeline::parse;
pub use serializer::{reconstruct, to_raw_text, ReconstructError};
pub use tokenizer::{LexicalTokenizer, PlainTokenizer, Tokenizer, TokenizerError};
