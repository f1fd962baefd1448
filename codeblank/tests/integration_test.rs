use codeblank::{
    parse, reconstruct, to_raw_text, Element, LexicalTokenizer, LineEnding, Location, ParseError,
    PlainTokenizer, ReconstructError, Span, Tokenizer, TokenizerError,
};

/// Splits a line after its first word, so hole and span boundaries disagree
struct FirstWordTokenizer;

impl Tokenizer for FirstWordTokenizer {
    fn tokenize(&self, line: &str, _language: &str) -> Result<Vec<Span>, TokenizerError> {
        let split = line.find(' ').unwrap_or(line.len());
        Ok(vec![
            Span::new(&line[..split], "kw"),
            Span::new(&line[split..], "text"),
        ])
    }
}

#[test]
fn test_round_trip_without_blanks() {
    let source = "int main() {\r\n\r\n  return 0;\r\n}\r\n";
    let doc = parse(source, "c", &LexicalTokenizer::new()).unwrap();
    assert_eq!(doc.hole_count(), 0);

    let empty: [&str; 0] = [];
    let rebuilt = reconstruct(&doc, &empty, LineEnding::Crlf).unwrap();
    assert_eq!(rebuilt, "int main() {\r\n  return 0;\r\n}");
}

#[test]
fn test_single_line_single_hole() {
    let doc = parse("if (/*true*/) {", "c", &PlainTokenizer).unwrap();
    assert_eq!(doc.lines.len(), 1);
    assert_eq!(
        doc.lines[0].elements,
        vec![
            Element::span("if (", "plain"),
            Element::hole("true"),
            Element::span(") {", "plain"),
        ]
    );

    let rebuilt = reconstruct(&doc, &["x > 0"], LineEnding::Crlf).unwrap();
    assert_eq!(rebuilt, "if (x > 0) {");
}

#[test]
fn test_multi_line_input_with_one_blank() {
    let source = "if (/*true*/) {\r\n  return 1;\r\n}";
    let doc = parse(source, "c", &PlainTokenizer).unwrap();
    assert_eq!(doc.lines.len(), 3);
    assert_eq!(doc.lines[0].hole_count(), 1);
    assert_eq!(doc.lines[1].hole_count(), 0);
    assert_eq!(doc.lines[2].hole_count(), 0);

    let rebuilt = reconstruct(&doc, &["x > 0"], LineEnding::Crlf).unwrap();
    assert_eq!(rebuilt, "if (x > 0) {\r\n  return 1;\r\n}");
}

#[test]
fn test_nested_blank_rejected() {
    let err = parse("x = /* /* */ */;", "c", &PlainTokenizer).unwrap_err();
    assert!(matches!(err, ParseError::NestedBlank { .. }));
}

#[test]
fn test_unterminated_blank_rejected() {
    let err = parse("int x = /*5;", "c", &PlainTokenizer).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnterminatedBlank {
            location: Location::new(1, 9)
        }
    );
}

#[test]
fn test_adjacent_blanks_rejected() {
    let err = parse("/*a*//*b*/", "c", &PlainTokenizer).unwrap_err();
    assert!(matches!(err, ParseError::AdjacentBlanks { .. }));
}

#[test]
fn test_cross_span_hole() {
    let doc = parse("retur/*n value*/;", "c", &FirstWordTokenizer).unwrap();
    assert_eq!(
        doc.lines[0].elements,
        vec![
            Element::span("retur", "kw"),
            Element::hole("n value"),
            Element::span(";", "text"),
        ]
    );
}

#[test]
fn test_cross_span_hole_through_lexical_tokenizer() {
    let doc = parse("  retur/*n value*/;", "c", &LexicalTokenizer::new()).unwrap();
    assert_eq!(
        doc.lines[0].elements,
        vec![
            Element::span("  ", "whitespace"),
            Element::span("retur", "keyword"),
            Element::hole("n value"),
            Element::span(";", "punctuation"),
        ]
    );
}

#[test]
fn test_multi_line_blank_is_one_hole_per_line() {
    let source = "int total = /*a +\r\n    b +\r\n    c*/;\r\nreturn total;";
    let doc = parse(source, "c", &PlainTokenizer).unwrap();
    assert_eq!(doc.hole_count(), 3);

    let holes: Vec<&str> = doc.holes().map(|h| h.content.as_str()).collect();
    assert_eq!(holes, vec!["a +", "    b +", "    c"]);

    let rebuilt = reconstruct(&doc, &["x +", "  y +", "  z"], LineEnding::Lf).unwrap();
    assert_eq!(rebuilt, "int total = x +\n  y +\n  z;\nreturn total;");
}

#[test]
fn test_multi_line_blank_keeps_empty_edge_holes() {
    let doc = parse("x = /*\r\n  foo\r\n*/;", "c", &PlainTokenizer).unwrap();
    assert_eq!(doc.hole_count(), 3);

    let holes: Vec<&str> = doc.holes().map(|h| h.content.as_str()).collect();
    assert_eq!(holes, vec!["", "  foo", ""]);

    let rebuilt = reconstruct(&doc, &["a", "b", "c"], LineEnding::Lf).unwrap();
    assert_eq!(rebuilt, "x = a\nb\nc;");
    assert_eq!(to_raw_text(&doc, LineEnding::Lf), "x = /**/\n/*  foo*/\n/**/;");
}

#[test]
fn test_insufficient_blank_values() {
    let doc = parse("a = /*1*/;\r\nb = /*2*/;", "c", &PlainTokenizer).unwrap();
    let err = reconstruct(&doc, &["1"], LineEnding::Crlf).unwrap_err();
    assert_eq!(
        err,
        ReconstructError::InsufficientBlankValues {
            holes: 2,
            supplied: 1
        }
    );
}

#[test]
fn test_raw_text_preview() {
    let source = "while (/*i < n*/) {\r\n  i += /*1*/;\r\n}";
    let doc = parse(source, "java", &LexicalTokenizer::new()).unwrap();
    assert_eq!(to_raw_text(&doc, LineEnding::Crlf), source);
}

#[test]
fn test_raw_text_preview_rewraps_each_line_of_a_blank() {
    let doc = parse("x = /*1 +\r\n2*/;", "c", &PlainTokenizer).unwrap();
    assert_eq!(to_raw_text(&doc, LineEnding::Lf), "x = /*1 +*/\n/*2*/;");
}

#[test]
fn test_document_json_for_renderer() {
    let doc = parse("f(/*x*/);", "c", &PlainTokenizer).unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "lines": [{
                "elements": [
                    {"kind": "span", "content": "f(", "styleClass": "plain"},
                    {"kind": "hole", "content": "x"},
                    {"kind": "span", "content": ");", "styleClass": "plain"}
                ]
            }]
        })
    );
}
