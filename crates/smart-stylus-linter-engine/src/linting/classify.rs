/// Whether a line opens a new block or belongs to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Block boundary: a tag name, class, id, parent reference or pseudo selector.
    Selector,
    /// Sortable content inside the enclosing block.
    Declaration,
}

/// Prefixes that mark a line as a selector wherever they appear first.
pub const PSEUDO_PREFIXES: [&str; 4] = [".", "&", "#", ":"];

/// HTML tag names recognised as selector prefixes.
///
/// These are literal string prefixes rather than whole words, so `b` also
/// matches `border` and `background` lines. A tag prefix alone is not enough to make a
/// line a selector, see [`is_selector`].
pub const TAG_PREFIXES: [&str; 85] = [
    "a",
    "abbr",
    "address",
    "article",
    "aside",
    "audio",
    "b",
    "blockquote",
    "body",
    "button",
    "canvas",
    "caption",
    "cite",
    "code",
    "col",
    "colgroup",
    "datalist",
    "dd",
    "del",
    "details",
    "dfn",
    "div",
    "dl",
    "dt",
    "em",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "i",
    "iframe",
    "img",
    "input",
    "ins",
    "kbd",
    "label",
    "legend",
    "li",
    "main",
    "map",
    "mark",
    "menu",
    "menuitem",
    "meter",
    "nav",
    "ol",
    "optgroup",
    "option",
    "output",
    "p",
    "pre",
    "progress",
    "q",
    "s",
    "samp",
    "section",
    "select",
    "small",
    "span",
    "strong",
    "sub",
    "summary",
    "sup",
    "table",
    "tbody",
    "td",
    "textarea",
    "tfoot",
    "th",
    "thead",
    "time",
    "tr",
    "u",
    "ul",
    "var",
    "video",
];

/// Every known selector prefix: tag names followed by pseudo prefixes.
fn selector_prefixes() -> impl Iterator<Item = &'static str> {
    TAG_PREFIXES.iter().chain(PSEUDO_PREFIXES.iter()).copied()
}

/// Prefix test shared by both classification steps.
///
/// An empty `text` matches vacuously, so blank lines behave like selectors.
/// Leading whitespace is ignored for the prefix comparison but not for the
/// emptiness check: `"  "` matches nothing.
fn starts_with_any<'a>(text: &str, mut prefixes: impl Iterator<Item = &'a str>) -> bool {
    let stripped = text.trim_start();
    prefixes.any(|prefix| text.is_empty() || stripped.starts_with(prefix))
}

/// Returns true when `line` opens a new selector block.
///
/// A line is a selector when, ignoring indentation, it starts with a pseudo
/// prefix, or it starts with any known prefix and removing the first
/// occurrence of some known prefix leaves text that starts with a pseudo
/// prefix (`div.card`, `a:hover`) or nothing at all (`div`).
pub fn is_selector(line: &str) -> bool {
    let trimmed = line.trim_start();

    if starts_with_any(trimmed, PSEUDO_PREFIXES.iter().copied()) {
        return true;
    }

    if !starts_with_any(trimmed, selector_prefixes()) {
        return false;
    }

    selector_prefixes().any(|prefix| {
        let remainder = trimmed.replacen(prefix, "", 1);
        starts_with_any(&remainder, PSEUDO_PREFIXES.iter().copied())
    })
}

/// Classifies stylesheet lines into selectors and declarations.
pub struct StylusLineClassifier;

impl StylusLineClassifier {
    pub fn classify(&self, line: &str) -> LineKind {
        if is_selector(line) {
            LineKind::Selector
        } else {
            LineKind::Declaration
        }
    }
}
