//! Line splitting and line separators

use serde::{Deserialize, Serialize};

/// Separator placed between lines when a document is written back out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n`, the canonical separator of submitted source
    #[default]
    Crlf,
    /// `\n`
    Lf,
}

impl LineEnding {
    /// The separator text
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// One non-empty line of the raw source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the raw source
    pub number: usize,
    /// Line text without its separator
    pub text: &'a str,
}

/// Split raw source into its non-empty lines, in order
///
/// Both `\r\n` and bare `\n` terminate a line. Empty lines are dropped but
/// the surviving lines keep their original line numbers.
pub fn split_lines(raw: &str) -> Vec<SourceLine<'_>> {
    raw.split('\n')
        .enumerate()
        .map(|(index, text)| SourceLine {
            number: index + 1,
            text: text.strip_suffix('\r').unwrap_or(text),
        })
        .filter(|line| !line.text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_crlf() {
        let lines = split_lines("if (x) {\r\n  return 1;\r\n}");
        let texts: Vec<&str> = lines.iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["if (x) {", "  return 1;", "}"]);
    }

    #[test]
    fn test_empty_lines_dropped_numbers_kept() {
        let lines = split_lines("a\r\n\r\nb\n\nc\r\n");
        assert_eq!(
            lines,
            vec![
                SourceLine { number: 1, text: "a" },
                SourceLine { number: 3, text: "b" },
                SourceLine { number: 5, text: "c" },
            ]
        );
    }

    #[test]
    fn test_whitespace_only_line_is_kept() {
        let lines = split_lines("a\r\n   \r\nb");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text, "   ");
    }

    #[test]
    fn test_empty_input() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\r\n\r\n").is_empty());
    }

    #[test]
    fn test_line_ending_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            line_ending: LineEnding,
        }
        let parsed: Wrapper = toml::from_str(r#"line_ending = "lf""#).unwrap();
        assert_eq!(parsed.line_ending, LineEnding::Lf);
        assert_eq!(LineEnding::default().as_str(), "\r\n");
    }
}
