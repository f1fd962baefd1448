//! Per-line blank scanner
//!
//! Strips blank markers from one line at a time and records where the hidden
//! regions fall in the stripped text. The only state carried between lines is
//! whether a blank is still open, threaded explicitly through [`scan_lines`].

use super::error::{Location, ParseError};
use super::lines::SourceLine;
use super::markers::{markers, MarkerKind};

/// Half-open range of a hole in stripped-line byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleInterval {
    /// Offset of the first hidden byte
    pub start: usize,
    /// Number of hidden bytes
    pub len: usize,
}

impl HoleInterval {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset just past the last hidden byte
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Result of scanning a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    /// 1-based source line number (1 when scanned in isolation)
    pub number: usize,
    /// Line text with every marker removed
    pub stripped: String,
    /// Hidden regions of `stripped`, in increasing order
    pub holes: Vec<HoleInterval>,
    /// Whether a blank is still open at the end of the line
    pub ends_open: bool,
}

/// Scan one line, given whether the previous line left a blank open
///
/// A single cursor walks the raw line: text between markers is appended to
/// the stripped buffer, so the buffer's length is always the stripped-space
/// position of the next marker.
///
/// Every piece of a blank on this line is recorded, even when it hides
/// nothing: a blank opened at the end of the line or closed at its start
/// still leaves a zero-length hole where the learner can type.
///
/// # Returns
/// * `Ok(ScannedLine)` - Stripped text, holes and the carried-over open state
/// * `Err(ParseError)` - A marker that would nest or close nothing, reported on line 1
pub fn scan_line(line: &str, continuation_open: bool) -> Result<ScannedLine, ParseError> {
    let mut stripped = String::with_capacity(line.len());
    let mut holes = Vec::new();
    let mut cursor = 0;
    // Start of the open hole in stripped coordinates
    let mut open: Option<usize> = continuation_open.then_some(0);

    for marker in markers(line) {
        stripped.push_str(&line[cursor..marker.offset]);
        cursor = marker.end();

        let location = || Location::new(1, line[..marker.offset].chars().count() + 1);
        match (marker.kind, open) {
            (MarkerKind::Open, Some(_)) => {
                return Err(ParseError::NestedBlank {
                    location: location(),
                })
            }
            (MarkerKind::Open, None) => open = Some(stripped.len()),
            (MarkerKind::Close, None) => {
                return Err(ParseError::UnmatchedClose {
                    location: location(),
                })
            }
            (MarkerKind::Close, Some(start)) => {
                holes.push(HoleInterval::new(start, stripped.len() - start));
                open = None;
            }
        }
    }
    stripped.push_str(&line[cursor..]);

    if let Some(start) = open {
        holes.push(HoleInterval::new(start, stripped.len() - start));
    }

    Ok(ScannedLine {
        number: 1,
        stripped,
        holes,
        ends_open: open.is_some(),
    })
}

/// Scan every line in order, carrying the open-blank state forward
///
/// # Returns
/// * `Ok(Vec<ScannedLine>)` - One entry per input line
/// * `Err(ParseError)` - The first marker error, located on its source line
pub fn scan_lines(lines: &[SourceLine<'_>]) -> Result<Vec<ScannedLine>, ParseError> {
    let (scanned, _) = lines.iter().try_fold(
        (Vec::with_capacity(lines.len()), false),
        |(mut scanned, continuation_open), line| {
            let mut result =
                scan_line(line.text, continuation_open).map_err(|e| e.on_line(line.number))?;
            result.number = line.number;
            let ends_open = result.ends_open;
            scanned.push(result);
            Ok::<_, ParseError>((scanned, ends_open))
        },
    )?;
    Ok(scanned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blanks::lines::split_lines;

    #[test]
    fn test_single_hole() {
        let scanned = scan_line("if (/*true*/) {", false).unwrap();
        assert_eq!(scanned.stripped, "if (true) {");
        assert_eq!(scanned.holes, vec![HoleInterval::new(4, 4)]);
        assert!(!scanned.ends_open);
    }

    #[test]
    fn test_offsets_account_for_removed_markers() {
        let scanned = scan_line("a = /*b*/ + /*cd*/;", false).unwrap();
        assert_eq!(scanned.stripped, "a = b + cd;");
        assert_eq!(
            scanned.holes,
            vec![HoleInterval::new(4, 1), HoleInterval::new(8, 2)]
        );
        let hidden: Vec<&str> = scanned
            .holes
            .iter()
            .map(|h| &scanned.stripped[h.start..h.end()])
            .collect();
        assert_eq!(hidden, vec!["b", "cd"]);
    }

    #[test]
    fn test_blank_left_open() {
        let scanned = scan_line("int x = /*1 +", false).unwrap();
        assert_eq!(scanned.stripped, "int x = 1 +");
        assert_eq!(scanned.holes, vec![HoleInterval::new(8, 3)]);
        assert!(scanned.ends_open);
    }

    #[test]
    fn test_continuation_without_close_is_one_hole() {
        let scanned = scan_line("  2 + 3", true).unwrap();
        assert_eq!(scanned.stripped, "  2 + 3");
        assert_eq!(scanned.holes, vec![HoleInterval::new(0, 7)]);
        assert!(scanned.ends_open);
    }

    #[test]
    fn test_continuation_closed_mid_line() {
        let scanned = scan_line("  4*/; y = /*5*/;", true).unwrap();
        assert_eq!(scanned.stripped, "  4; y = 5;");
        assert_eq!(
            scanned.holes,
            vec![HoleInterval::new(0, 3), HoleInterval::new(9, 1)]
        );
        assert!(!scanned.ends_open);
    }

    #[test]
    fn test_empty_blank_on_one_line_is_kept() {
        let scanned = scan_line("f(/**/);", false).unwrap();
        assert_eq!(scanned.stripped, "f();");
        assert_eq!(scanned.holes, vec![HoleInterval::new(2, 0)]);
    }

    #[test]
    fn test_empty_fragments_at_line_edges_are_kept() {
        let opened = scan_line("x = /*", false).unwrap();
        assert_eq!(opened.stripped, "x = ");
        assert_eq!(opened.holes, vec![HoleInterval::new(4, 0)]);
        assert!(opened.ends_open);

        let closed = scan_line("*/;", true).unwrap();
        assert_eq!(closed.stripped, ";");
        assert_eq!(closed.holes, vec![HoleInterval::new(0, 0)]);
        assert!(!closed.ends_open);
    }

    #[test]
    fn test_multi_line_blank_with_empty_edges() {
        let lines = split_lines("x = /*\r\n  foo\r\n*/;");
        let scanned = scan_lines(&lines).unwrap();
        let holes: Vec<Vec<HoleInterval>> = scanned.into_iter().map(|l| l.holes).collect();
        assert_eq!(
            holes,
            vec![
                vec![HoleInterval::new(4, 0)],
                vec![HoleInterval::new(0, 5)],
                vec![HoleInterval::new(0, 0)],
            ]
        );
    }

    #[test]
    fn test_nested_marker_in_line() {
        let err = scan_line("a /*b", true).unwrap_err();
        assert_eq!(
            err,
            ParseError::NestedBlank {
                location: Location::new(1, 3)
            }
        );
    }

    #[test]
    fn test_unmatched_close_in_line() {
        assert!(matches!(
            scan_line("a */", false),
            Err(ParseError::UnmatchedClose { .. })
        ));
    }

    #[test]
    fn test_scan_lines_threads_state() {
        let lines = split_lines("int x = /*1 +\r\n\r\n  2*/;\r\nreturn x;");
        let scanned = scan_lines(&lines).unwrap();
        assert_eq!(scanned.len(), 3);
        assert_eq!(scanned[0].holes, vec![HoleInterval::new(8, 3)]);
        assert!(scanned[0].ends_open);
        assert_eq!(scanned[1].number, 3);
        assert_eq!(scanned[1].stripped, "  2;");
        assert_eq!(scanned[1].holes, vec![HoleInterval::new(0, 3)]);
        assert!(!scanned[1].ends_open);
        assert!(scanned[2].holes.is_empty());
    }

    #[test]
    fn test_scan_lines_reports_source_line() {
        let lines = split_lines("a;\r\n\r\nb */");
        let err = scan_lines(&lines).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnmatchedClose {
                location: Location::new(3, 3)
            }
        );
    }
}
