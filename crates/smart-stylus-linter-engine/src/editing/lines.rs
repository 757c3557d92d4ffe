use xi_rope::Rope;

/// A byte range `[start, end)` into the rope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// A single line in the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of the line content, excluding its terminator.
    pub content: Span,
    /// The line text without `\n` or `\r\n`.
    pub text: String,
}

/// Returns every line of the rope the way an editor counts them.
///
/// A document ending in a newline (or an empty document) has a final empty
/// line, so `"a\n"` yields two lines. Line terminators are never part of the
/// text or the content span.
pub fn lines_with_spans(rope: &Rope) -> Vec<LineRef> {
    let mut lines = Vec::new();
    let mut offset = 0usize;
    let mut ends_open = true;

    for raw in rope.lines_raw(..) {
        let start = offset;
        offset += raw.len();
        ends_open = raw.ends_with('\n');
        let text = raw
            .strip_suffix('\n')
            .map(|t| t.strip_suffix('\r').unwrap_or(t))
            .unwrap_or(&*raw);
        lines.push(LineRef {
            content: Span {
                start,
                end: start + text.len(),
            },
            text: text.to_string(),
        });
    }

    if ends_open {
        lines.push(LineRef {
            content: Span {
                start: offset,
                end: offset,
            },
            text: String::new(),
        });
    }

    lines
}

/// Splits text into editor lines, see [`lines_with_spans`].
pub fn document_lines(text: &str) -> Vec<String> {
    lines_with_spans(&Rope::from(text))
        .into_iter()
        .map(|line| line.text)
        .collect()
}
