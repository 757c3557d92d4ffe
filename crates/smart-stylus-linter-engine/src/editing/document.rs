use xi_rope::{Rope, delta::Builder};

use crate::editing::{LineEdit, Patch, lines::lines_with_spans};
use crate::host::DocumentId;

/// An open stylesheet held in memory.
///
/// The whole text lives in a single `xi_rope::Rope`. Edits are line-based and
/// a batch of them is compiled into one `Delta`, so a rewrite is applied as a
/// single transaction and bumps the version exactly once.
///
/// ```rust
/// # use smart_stylus_linter_engine::editing::{LineEdit, TextDocument};
/// let mut doc = TextDocument::from_bytes("main.styl", "stylus", b".a\n  z 1\n  b 1\n").unwrap();
///
/// let patch = doc.apply_line_edits(&[
///     LineEdit { line: 1, text: "  b 1".to_string() },
///     LineEdit { line: 2, text: "  z 1".to_string() },
/// ]);
///
/// assert_eq!(doc.text(), ".a\n  b 1\n  z 1\n");
/// assert_eq!(patch.version, 1);
/// ```
#[derive(Debug, Clone)]
pub struct TextDocument {
    id: DocumentId,
    language_id: String,
    buffer: Rope,
    version: u64,
}

impl TextDocument {
    /// Create a new document from raw bytes
    pub fn from_bytes(
        id: impl Into<DocumentId>,
        language_id: impl Into<String>,
        bytes: &[u8],
    ) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self {
            id: id.into(),
            language_id: language_id.into(),
            buffer: Rope::from(text),
            version: 0,
        })
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Change the language mode, as an editor does when the user picks another one.
    pub fn set_language_id(&mut self, language_id: impl Into<String>) {
        self.language_id = language_id.into();
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.text().into_bytes()
    }

    /// Lines as an editor shows them, see [`lines_with_spans`].
    pub fn lines(&self) -> Vec<String> {
        lines_with_spans(&self.buffer)
            .into_iter()
            .map(|line| line.text)
            .collect()
    }

    pub fn line_count(&self) -> usize {
        lines_with_spans(&self.buffer).len()
    }

    /// Replace the content of each addressed line in one transaction.
    ///
    /// Line terminators are preserved. Edits addressing a line past the end of
    /// the document are dropped, and replacements with identical text are not
    /// recorded as changes.
    pub fn apply_line_edits(&mut self, edits: &[LineEdit]) -> Patch {
        let lines = lines_with_spans(&self.buffer);

        let mut ordered: Vec<&LineEdit> = edits.iter().collect();
        ordered.sort_by_key(|edit| edit.line);
        ordered.dedup_by_key(|edit| edit.line);

        let mut builder = Builder::new(self.buffer.len());
        let mut changed = Vec::new();
        let mut shift: isize = 0;

        for edit in ordered {
            let Some(line) = lines.get(edit.line) else {
                log::warn!(
                    "dropping edit for line {} of {} in {}",
                    edit.line,
                    lines.len(),
                    self.id
                );
                continue;
            };
            if line.text == edit.text {
                continue;
            }

            let start = line.content.start;
            builder.replace(start..line.content.end, Rope::from(edit.text.as_str()));

            let new_start = start.saturating_add_signed(shift);
            changed.push(new_start..new_start + edit.text.len());
            shift += edit.text.len() as isize - line.content.len() as isize;
        }

        if !changed.is_empty() {
            let delta = builder.build();
            self.buffer = delta.apply(&self.buffer);
        }
        self.version += 1;

        Patch {
            changed,
            version: self.version,
        }
    }
}
