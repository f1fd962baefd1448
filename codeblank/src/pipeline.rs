//! Parsing pipeline from annotated source to a [`Document`]
//!
//! Stages, in order:
//! 1. **Validation**: reject malformed blank structure on the raw text
//! 2. **Scanning**: split into lines and strip markers, carrying the
//!    open-blank state from line to line
//! 3. **Highlighting**: tokenize each stripped line and splice its holes
//!    into the spans
//!
//! Stage 3 is independent per line and runs on the rayon pool when the
//! `parallel` feature is enabled.

use crate::blanks::{scan_lines, splice, split_lines, validate, ParseError, ScannedLine};
use crate::config::CodeblankConfig;
use crate::document::{Document, Line};
use crate::tokenizer::{covers_line, Tokenizer};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parse annotated source into a fill-in-the-blank document
///
/// # Parameters
/// * `raw` - Source text with blanks marked as `/*` … `*/`
/// * `language` - Language id handed to the tokenizer
/// * `tokenizer` - Highlighting engine for stripped lines
///
/// # Returns
/// * `Ok(Document)` - One line per non-empty source line
/// * `Err(ParseError)` - Malformed blanks or a tokenizer failure; no partial document
pub fn parse(
    raw: &str,
    language: &str,
    tokenizer: &dyn Tokenizer,
) -> Result<Document, ParseError> {
    validate(raw)?;

    let lines = split_lines(raw);
    let scanned = scan_lines(&lines)?;
    log::debug!("Scanned {} lines of {} source", scanned.len(), language);

    #[cfg(feature = "parallel")]
    let results: Vec<Result<Line, ParseError>> = scanned
        .into_par_iter()
        .map(|line| highlight_line(line, language, tokenizer))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<Line, ParseError>> = scanned
        .into_iter()
        .map(|line| highlight_line(line, language, tokenizer))
        .collect();

    // Report the first failing line, not whichever worker failed first
    let lines = results.into_iter().collect::<Result<Vec<Line>, ParseError>>()?;
    let document = Document::new(lines);
    log::info!(
        "Parsed {} lines with {} blanks",
        document.lines.len(),
        document.hole_count()
    );
    Ok(document)
}

/// Tokenize one scanned line and splice its holes into the spans
fn highlight_line(
    line: ScannedLine,
    language: &str,
    tokenizer: &dyn Tokenizer,
) -> Result<Line, ParseError> {
    let spans = tokenizer
        .tokenize(&line.stripped, language)
        .map_err(|source| ParseError::Tokenizer {
            line: line.number,
            source,
        })?;

    if !covers_line(&spans, &line.stripped) {
        return Err(ParseError::TokenizerMismatch { line: line.number });
    }

    log::debug!(
        "Line {}: {} spans, {} holes",
        line.number,
        spans.len(),
        line.holes.len()
    );
    Ok(Line::new(splice(spans, &line.holes)))
}

/// Outcome of checking one file
#[derive(Debug)]
pub struct FileReport {
    /// Path of the checked file
    pub path: PathBuf,
    /// Number of blanks, or the reason the file was rejected
    pub result: Result<usize, CheckError>,
}

/// Reasons a file fails the check
#[derive(Error, Debug)]
pub enum CheckError {
    /// The file could not be read as UTF-8 text
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The blank structure is malformed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Validate every annotated source file under `root`
///
/// Only the blank structure is checked; nothing is tokenized. Files are
/// filtered by the configured extensions and reported in path order.
///
/// # Returns
/// * `Vec<FileReport>` - One report per visited file
pub fn check_tree(root: &Path, config: &CodeblankConfig) -> Vec<FileReport> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file() && config.accepts_path(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    #[cfg(feature = "parallel")]
    let reports = paths.into_par_iter().map(check_file).collect();

    #[cfg(not(feature = "parallel"))]
    let reports = paths.into_iter().map(check_file).collect();

    reports
}

/// Validate the blank structure of a single file
fn check_file(path: PathBuf) -> FileReport {
    let result = std::fs::read_to_string(&path)
        .map_err(CheckError::from)
        .and_then(|content| {
            validate(&content)?;
            let scanned = scan_lines(&split_lines(&content))?;
            Ok(scanned.iter().map(|line| line.holes.len()).sum::<usize>())
        });
    FileReport { path, result }
}
