use super::classify::is_selector;

/// Removes the first `:` and then the first `;` from a declaration line.
pub fn normalize_declaration(line: &str) -> String {
    line.replacen(':', "", 1).replacen(';', "", 1)
}

/// Appends the empty sentinel line unless the lines already end with one.
///
/// The sentinel is a selector, so it closes the final block before sorting.
pub fn with_sentinel<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut out: Vec<String> = lines.iter().map(|l| l.as_ref().to_string()).collect();
    if out.last().is_none_or(|last| !last.is_empty()) {
        out.push(String::new());
    }
    out
}

/// Drops a single trailing empty line, if present.
pub fn strip_sentinel(mut lines: Vec<String>) -> Vec<String> {
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines
}

/// Sorts declarations within each selector-delimited block.
///
/// Declaration lines are normalized with [`normalize_declaration`] and
/// collected until the next selector line, at which point the collected run is
/// sorted by code point and emitted ahead of the selector. Selector lines are
/// emitted unchanged and never move relative to each other.
///
/// A run left open at the end of input is sorted and emitted as well, so no
/// line is lost when the caller did not append a sentinel.
pub fn sort_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut sorted = Vec::with_capacity(lines.len());
    let mut block: Vec<String> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if is_selector(line) {
            block.sort();
            sorted.append(&mut block);
            sorted.push(line.to_string());
        } else {
            block.push(normalize_declaration(line));
        }
    }

    if !block.is_empty() {
        log::debug!("flushing {} declaration(s) after last selector", block.len());
        block.sort();
        sorted.append(&mut block);
    }

    sorted
}
