//! Fill-in-the-blank document model
//!
//! A [`Document`] is the parsed form of an annotated source file: one
//! [`Line`] per non-empty source line, each an ordered run of highlighted
//! [`Span`]s and [`Hole`]s. Concatenating the contents of a line's elements
//! always gives back that line with its blank markers removed.

use serde::{Deserialize, Serialize};

/// A run of text classified by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    /// The text covered by the span
    pub content: String,

    /// Opaque style class assigned by the tokenizer
    pub style_class: String,
}

impl Span {
    pub fn new(content: impl Into<String>, style_class: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style_class: style_class.into(),
        }
    }
}

/// A hidden region presented to the user as an input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    /// The hidden original text; used for sizing, never displayed
    pub content: String,
}

impl Hole {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// One element of a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    /// Read-only highlighted text
    Span(Span),
    /// A blank to be filled in
    Hole(Hole),
}

impl Element {
    /// Shorthand for a span element
    pub fn span(content: impl Into<String>, style_class: impl Into<String>) -> Self {
        Element::Span(Span::new(content, style_class))
    }

    /// Shorthand for a hole element
    pub fn hole(content: impl Into<String>) -> Self {
        Element::Hole(Hole::new(content))
    }

    /// The original text this element covers
    pub fn content(&self) -> &str {
        match self {
            Element::Span(span) => &span.content,
            Element::Hole(hole) => &hole.content,
        }
    }

    /// Width of the element in characters
    pub fn width(&self) -> usize {
        self.content().chars().count()
    }

    pub fn is_hole(&self) -> bool {
        matches!(self, Element::Hole(_))
    }
}

/// One source line as a sequence of elements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub elements: Vec<Element>,
}

impl Line {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// The stripped line text
    pub fn text(&self) -> String {
        self.elements.iter().map(Element::content).collect()
    }

    /// Number of holes on this line
    pub fn hole_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_hole()).count()
    }

    /// Iterate over the holes of this line, left to right
    pub fn holes(&self) -> impl Iterator<Item = &Hole> {
        self.elements.iter().filter_map(|e| match e {
            Element::Hole(hole) => Some(hole),
            Element::Span(_) => None,
        })
    }
}

/// A parsed fill-in-the-blank source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub lines: Vec<Line>,
}

impl Document {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Total number of holes, which is the number of blank values a
    /// reconstruction needs
    pub fn hole_count(&self) -> usize {
        self.lines.iter().map(Line::hole_count).sum()
    }

    /// All holes in traversal order: line by line, left to right
    pub fn holes(&self) -> impl Iterator<Item = &Hole> {
        self.lines.iter().flat_map(Line::holes)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(vec![
            Line::new(vec![
                Element::span("if (", "keyword"),
                Element::hole("true"),
                Element::span(") {", "punctuation"),
            ]),
            Line::new(vec![Element::hole("  return 1;")]),
            Line::new(vec![Element::span("}", "punctuation")]),
        ])
    }

    #[test]
    fn test_line_text_and_counts() {
        let doc = sample();
        assert_eq!(doc.lines[0].text(), "if (true) {");
        assert_eq!(doc.lines[0].hole_count(), 1);
        assert_eq!(doc.hole_count(), 2);
        let holes: Vec<&str> = doc.holes().map(|h| h.content.as_str()).collect();
        assert_eq!(holes, vec!["true", "  return 1;"]);
    }

    #[test]
    fn test_width_counts_characters() {
        assert_eq!(Element::hole("größe").width(), 5);
        assert_eq!(Element::span("", "plain").width(), 0);
    }

    #[test]
    fn test_json_shape() {
        let line = Line::new(vec![Element::span("x", "identifier"), Element::hole("1")]);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "elements": [
                    {"kind": "span", "content": "x", "styleClass": "identifier"},
                    {"kind": "hole", "content": "1"}
                ]
            })
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let doc = sample();
        let json = serde_json::to_string(&doc).unwrap();
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}
