//! Merging hole intervals into tokenizer spans
//!
//! Tokenizer span boundaries and hole boundaries are unrelated, so a hole can
//! start or end in the middle of a span, or swallow several spans whole. The
//! merge walks both sequences once by running offset and never re-derives one
//! set of offsets from the other.

use super::scanner::HoleInterval;
use crate::document::{Element, Span};

/// Splice `holes` into `spans`, producing the elements of one line
///
/// `holes` must be sorted, non-overlapping and lie within the text covered by
/// `spans`, as produced by [`scan_line`](super::scan_line) for the same line.
/// Parts of a span outside every hole survive with the span's style class;
/// the characters inside a hole become exactly one [`Element::Hole`], however
/// many spans they came from. Empty spans are dropped.
pub(crate) fn splice(spans: Vec<Span>, holes: &[HoleInterval]) -> Vec<Element> {
    let mut elements = Vec::with_capacity(spans.len() + holes.len() * 2);
    let mut holes = holes.iter().copied().peekable();
    // Hole currently being filled, with the characters consumed so far
    let mut pending: Option<(HoleInterval, String)> = None;
    let mut offset = 0;

    for span in spans {
        let start = offset;
        let end = start + span.content.len();
        offset = end;
        let mut cursor = start;

        loop {
            if let Some((hole, mut consumed)) = pending.take() {
                let take_to = hole.end().min(end);
                consumed.push_str(&span.content[cursor - start..take_to - start]);
                cursor = take_to;
                if hole.end() > end {
                    pending = Some((hole, consumed));
                    break;
                }
                elements.push(Element::hole(consumed));
            }

            match holes.peek() {
                Some(hole) if hole.start < end => {
                    let hole = *hole;
                    holes.next();
                    debug_assert!(hole.start >= cursor, "holes must be sorted and disjoint");
                    if hole.start > cursor {
                        elements.push(Element::span(
                            &span.content[cursor - start..hole.start - start],
                            span.style_class.as_str(),
                        ));
                    }
                    cursor = hole.start;
                    pending = Some((hole, String::with_capacity(hole.len)));
                }
                _ => {
                    if cursor < end {
                        elements.push(Element::span(
                            &span.content[cursor - start..],
                            span.style_class.as_str(),
                        ));
                    }
                    break;
                }
            }
        }
    }

    // Holes at the very end of the line (or on a line without spans)
    if let Some((_, consumed)) = pending {
        elements.push(Element::hole(consumed));
    }
    for hole in holes {
        debug_assert_eq!(hole.len, 0, "hole extends past the spanned text");
        elements.push(Element::hole(String::new()));
    }

    elements
}
