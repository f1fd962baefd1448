//! Turning a document back into source text
//!
//! Two independent renderings:
//! - [`to_raw_text`]: holes re-wrapped in blank markers, for previews and
//!   diagnostics. Whitespace that surrounded the original markers is not
//!   restored.
//! - [`reconstruct`]: holes replaced by user-supplied values, producing the
//!   source that gets submitted.

use crate::blanks::{LineEnding, BLANK_CLOSE, BLANK_OPEN};
use crate::document::{Document, Element, Line};
use itertools::Itertools;
use thiserror::Error;

/// Errors that can occur when reconstructing source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconstructError {
    /// Fewer blank values were supplied than the document has holes
    #[error("Document has {holes} blanks but only {supplied} values were supplied")]
    InsufficientBlankValues {
        /// Number of holes in the document
        holes: usize,
        /// Number of values supplied
        supplied: usize,
    },
}

/// Render `doc` as annotated source, each hole wrapped in `/*` `*/`
pub fn to_raw_text(doc: &Document, line_ending: LineEnding) -> String {
    doc.lines
        .iter()
        .map(raw_line)
        .join(line_ending.as_str())
}

fn raw_line(line: &Line) -> String {
    let mut out = String::new();
    for element in &line.elements {
        match element {
            Element::Span(span) => out.push_str(&span.content),
            Element::Hole(hole) => {
                out.push_str(BLANK_OPEN);
                out.push_str(&hole.content);
                out.push_str(BLANK_CLOSE);
            }
        }
    }
    out
}

/// Rebuild complete source from `doc`, filling holes with `blanks`
///
/// Values are consumed in traversal order: line by line, left to right.
/// Surplus values are ignored.
///
/// # Returns
/// * `Ok(String)` - The filled-in source, lines joined by `line_ending`
/// * `Err(ReconstructError)` - Fewer values than holes; nothing is produced
pub fn reconstruct<S: AsRef<str>>(
    doc: &Document,
    blanks: &[S],
    line_ending: LineEnding,
) -> Result<String, ReconstructError> {
    let holes = doc.hole_count();
    if blanks.len() < holes {
        return Err(ReconstructError::InsufficientBlankValues {
            holes,
            supplied: blanks.len(),
        });
    }
    if blanks.len() > holes {
        log::warn!(
            "Ignoring {} surplus blank values ({} supplied for {} blanks)",
            blanks.len() - holes,
            blanks.len(),
            holes
        );
    }

    let mut values = blanks.iter().map(AsRef::<str>::as_ref);
    let source = doc
        .lines
        .iter()
        .map(|line| {
            let mut out = String::new();
            for element in &line.elements {
                match element {
                    Element::Span(span) => out.push_str(&span.content),
                    // Counted above, so a value is always available
                    Element::Hole(_) => out.push_str(values.next().unwrap_or_default()),
                }
            }
            out
        })
        .join(line_ending.as_str());

    Ok(source)
}
