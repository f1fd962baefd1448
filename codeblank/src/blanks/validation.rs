//! Structural checks over the raw, unsplit source
//!
//! Both checks run before any line is scanned so that a malformed input never
//! yields a partial document.

use super::error::{Location, ParseError};
use super::markers::{markers, Marker, MarkerKind};

/// Validate the blank structure of `raw`
///
/// # Returns
/// * `Ok(())` - Every blank is opened, closed, unnested and separated from its neighbours
/// * `Err(ParseError)` - The first structural violation found, left to right
pub fn validate(raw: &str) -> Result<(), ParseError> {
    check_nesting(raw)?;
    check_adjacency(raw)?;
    Ok(())
}

/// Reject nested, unmatched and unterminated blanks
pub fn check_nesting(raw: &str) -> Result<(), ParseError> {
    let mut open: Option<Marker> = None;

    for marker in markers(raw) {
        let location = || Location::from_offset(raw, marker.offset);
        match (marker.kind, open) {
            (MarkerKind::Open, Some(_)) => {
                return Err(ParseError::NestedBlank {
                    location: location(),
                })
            }
            (MarkerKind::Open, None) => open = Some(marker),
            (MarkerKind::Close, None) => {
                return Err(ParseError::UnmatchedClose {
                    location: location(),
                })
            }
            (MarkerKind::Close, Some(_)) => open = None,
        }
    }

    match open {
        Some(marker) => Err(ParseError::UnterminatedBlank {
            location: Location::from_offset(raw, marker.offset),
        }),
        None => Ok(()),
    }
}

/// Reject a blank that reopens right after the previous one closed
///
/// Slashes between the two markers do not count as separating content.
pub fn check_adjacency(raw: &str) -> Result<(), ParseError> {
    let mut last_close: Option<Marker> = None;

    for marker in markers(raw) {
        match marker.kind {
            MarkerKind::Close => last_close = Some(marker),
            MarkerKind::Open => {
                if let Some(close) = last_close.take() {
                    let gap = &raw[close.end()..marker.offset];
                    if gap.chars().all(|c| c == '/') {
                        return Err(ParseError::AdjacentBlanks {
                            location: Location::from_offset(raw, marker.offset),
                        });
                    }
                }
            }
        }
    }

    Ok(())
}
