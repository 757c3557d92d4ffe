/// Replacement text for one whole line, excluding its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub line: usize,
    pub text: String,
}

impl LineEdit {
    /// One edit per line index, in order.
    pub fn for_lines(lines: Vec<String>) -> Vec<LineEdit> {
        lines
            .into_iter()
            .enumerate()
            .map(|(line, text)| LineEdit { line, text })
            .collect()
    }
}

/// Result of applying a set of line edits
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// Byte ranges in the new buffer whose text changed.
    pub changed: Vec<std::ops::Range<usize>>,
    pub version: u64,
}

impl Patch {
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}
