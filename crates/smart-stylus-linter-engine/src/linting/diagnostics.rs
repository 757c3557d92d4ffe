use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::classify::is_selector;

/// How strongly a host should present a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Information => "information",
            Severity::Hint => "hint",
        };
        f.write_str(name)
    }
}

/// The convention a diagnostic reports a violation of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    UnwantedColon,
    UnwantedSemicolon,
    UnsortedLine,
}

impl Rule {
    pub fn message(self) -> &'static str {
        match self {
            Rule::UnwantedColon => "Unwanted colon found",
            Rule::UnwantedSemicolon => "Unwanted semicolon found",
            Rule::UnsortedLine => "Unsorted line found",
        }
    }
}

/// Severity reported for each rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSeverities {
    pub colon: Severity,
    pub semicolon: Severity,
    pub unsorted: Severity,
}

impl Default for RuleSeverities {
    fn default() -> Self {
        Self {
            colon: Severity::Error,
            semicolon: Severity::Error,
            unsorted: Severity::Error,
        }
    }
}

impl RuleSeverities {
    pub fn for_rule(&self, rule: Rule) -> Severity {
        match rule {
            Rule::UnwantedColon => self.colon,
            Rule::UnwantedSemicolon => self.semicolon,
            Rule::UnsortedLine => self.unsorted,
        }
    }
}

/// An advisory marker on one line of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Zero-based line index.
    pub line: usize,
    /// Character columns on `line` the diagnostic points at.
    pub columns: Range<usize>,
    pub rule: Rule,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn message(&self) -> &'static str {
        self.rule.message()
    }
}

/// Character column of the first `needle` in `line`.
fn char_column(line: &str, needle: char) -> Option<usize> {
    line.chars().position(|c| c == needle)
}

/// Columns from the end of indentation to the end of the line.
fn content_columns(line: &str) -> Range<usize> {
    let indent = line.chars().take_while(|c| c.is_whitespace()).count();
    indent..line.chars().count()
}

/// Checks a single declaration line against its predecessor.
///
/// Rules are exclusive and tested in order: colon, semicolon, ordering.
fn check_declaration(line: &str, previous: &str) -> Option<(Rule, Range<usize>)> {
    if let Some(col) = char_column(line, ':') {
        return Some((Rule::UnwantedColon, col..col + 1));
    }
    if let Some(col) = char_column(line, ';') {
        return Some((Rule::UnwantedSemicolon, col..col + 1));
    }
    if !is_selector(previous) && line < previous {
        return Some((Rule::UnsortedLine, content_columns(line)));
    }
    None
}

/// Computes diagnostics for a sequence of lines without modifying them.
///
/// Neither the first line, which has no predecessor, nor selector lines
/// receive diagnostics.
pub fn check_lines<S: AsRef<str>>(lines: &[S], severities: &RuleSeverities) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut previous: Option<&str> = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let Some(before) = previous.replace(line) else {
            continue;
        };
        if !is_selector(line)
            && let Some((rule, columns)) = check_declaration(line, before)
        {
            diagnostics.push(Diagnostic {
                line: index,
                columns,
                rule,
                severity: severities.for_rule(rule),
            });
        }
    }

    diagnostics
}

/// Computes diagnostics for a full document text.
pub fn check_text(text: &str, severities: &RuleSeverities) -> Vec<Diagnostic> {
    check_lines(&crate::editing::document_lines(text), severities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn rules(lines: &[&str]) -> Vec<(usize, Rule)> {
        check_lines(lines, &RuleSeverities::default())
            .into_iter()
            .map(|d| (d.line, d.rule))
            .collect()
    }

    #[rstest]
    #[case("  color: red", Rule::UnwantedColon)]
    #[case("  color: red;", Rule::UnwantedColon)]
    #[case("  color red;", Rule::UnwantedSemicolon)]
    fn test_punctuation_rules(#[case] line: &str, #[case] expected: Rule) {
        assert_eq!(rules(&[".x", line]), vec![(1, expected)]);
    }

    #[test]
    fn test_colon_reported_regardless_of_order() {
        // "apple" after "zebra" is unsorted, but the colon wins
        assert_eq!(
            rules(&[".x", "  zebra 1", "  apple: 1"]),
            vec![(2, Rule::UnwantedColon)]
        );
    }

    #[test]
    fn test_unsorted_line_reported_on_second_line() {
        assert_eq!(rules(&["zebra", "apple"]), vec![(1, Rule::UnsortedLine)]);
    }

    #[test]
    fn test_sorted_lines_are_clean() {
        assert_eq!(rules(&[".x", "  apple 1", "  zebra 1"]), vec![]);
    }

    #[test]
    fn test_selector_lines_never_flagged() {
        assert_eq!(rules(&["  zebra 1", "a:hover", "&:focus;"]), vec![]);
    }

    #[test]
    fn test_no_order_check_across_selector() {
        assert_eq!(rules(&[".x", "  zebra 1", ".y", "  apple 1"]), vec![]);
    }

    #[test]
    fn test_no_order_check_after_blank_line() {
        // Blank lines classify as selectors
        assert_eq!(rules(&["  zebra 1", "", "  apple 1"]), vec![]);
    }

    #[rstest]
    #[case(vec!["color: red"])]
    #[case(vec!["zebra"])]
    #[case(vec!["color red;", ".x"])]
    fn test_first_line_never_flagged(#[case] lines: Vec<&str>) {
        assert_eq!(rules(&lines), vec![]);
    }

    #[test]
    fn test_second_line_checked_after_unchecked_first() {
        let found = rules(&["color: red", "  width 1;"]);

        assert_eq!(found, vec![(1, Rule::UnwantedSemicolon)]);
        assert!(found.iter().all(|(line, _)| *line != 0));
    }

    #[test]
    fn test_unsorted_compares_raw_lines_including_indent() {
        // Deeper indentation sorts before shallower indentation
        assert_eq!(rules(&["  zebra 1", "    apple 1"]), vec![(1, Rule::UnsortedLine)]);
        assert_eq!(rules(&["    zebra 1", "  apple 1"]), vec![]);
    }

    #[test]
    fn test_columns() {
        let diagnostics = check_lines(
            &[".x", "  colör: red", "  zebra 1", "  apple 1"],
            &RuleSeverities::default(),
        );

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].columns, 6..7);
        assert_eq!(diagnostics[1].columns, 2..9);
    }

    #[test]
    fn test_severities_applied_per_rule() {
        let severities = RuleSeverities {
            colon: Severity::Warning,
            semicolon: Severity::Hint,
            unsorted: Severity::Information,
        };

        let diagnostics = check_lines(&[".x", "  k: 1", "  c 1;", "  z 1", "  a 1"], &severities);
        let got: Vec<_> = diagnostics.iter().map(|d| d.severity).collect();

        assert_eq!(
            got,
            vec![Severity::Warning, Severity::Hint, Severity::Information]
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(Rule::UnwantedColon.message(), "Unwanted colon found");
        assert_eq!(Rule::UnwantedSemicolon.message(), "Unwanted semicolon found");
        assert_eq!(Rule::UnsortedLine.message(), "Unsorted line found");
    }

    #[test]
    fn test_check_text_splits_lines() {
        let diagnostics = check_text(".x\r\n  zebra 1\r\n  apple 1\r\n", &RuleSeverities::default());

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 2);
        assert_eq!(diagnostics[0].message(), "Unsorted line found");
    }
}
