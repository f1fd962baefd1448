//! Blank marker recognition shared by the validators and the scanner

/// Marker opening a blank
pub const BLANK_OPEN: &str = "/*";

/// Marker closing a blank
pub const BLANK_CLOSE: &str = "*/";

/// Both markers are two ASCII bytes long
pub(crate) const MARKER_LEN: usize = 2;

/// Which side of a blank a marker delimits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Open,
    Close,
}

/// A marker found in the text, with its byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub offset: usize,
}

impl Marker {
    /// Byte offset just past the marker
    pub fn end(&self) -> usize {
        self.offset + MARKER_LEN
    }
}

/// Iterator over the markers of a text, left to right
///
/// At each position the opening marker is tried before the closing one, and
/// a recognised marker consumes both of its characters, so `/*/` is a single
/// opening marker followed by a slash.
pub struct Markers<'a> {
    bytes: &'a [u8],
    pos: usize,
}

/// Locate every blank marker in `text`
pub fn markers(text: &str) -> Markers<'_> {
    Markers {
        bytes: text.as_bytes(),
        pos: 0,
    }
}

impl Iterator for Markers<'_> {
    type Item = Marker;

    fn next(&mut self) -> Option<Marker> {
        while self.pos + 1 < self.bytes.len() {
            let offset = self.pos;
            let kind = match (self.bytes[offset], self.bytes[offset + 1]) {
                (b'/', b'*') => Some(MarkerKind::Open),
                (b'*', b'/') => Some(MarkerKind::Close),
                _ => None,
            };
            match kind {
                Some(kind) => {
                    self.pos += MARKER_LEN;
                    return Some(Marker { kind, offset });
                }
                None => self.pos += 1,
            }
        }
        self.pos = self.bytes.len();
        None
    }
}
