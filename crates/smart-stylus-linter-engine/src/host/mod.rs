//! The seam between the linter and the editor (or other program) hosting it.
//!
//! The host owns documents, applies edits and displays results. The linter
//! only reads lines, asks for edits and hands over diagnostics through the
//! [`Host`] trait. Every event is handled to completion before the next one,
//! so the only state kept between events is the [`DiagnosticCollection`]
//! owned by the [`Linter`].

pub mod collection;
pub mod linter;
pub mod memory;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::editing::LineEdit;
use crate::linting::{Diagnostic, RuleSeverities};

pub use collection::DiagnosticCollection;
pub use linter::Linter;
pub use memory::MemoryHost;

/// Identifies a document within a host (a path or URI).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The document shown in the host's active editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    pub id: DocumentId,
    pub language_id: String,
}

/// Something that happened in the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user invoked the sort command.
    SmartLint,
    /// A different editor (or none) became active.
    ActiveEditorChanged,
    /// The text of a document changed. Ignored unless it is the active one.
    DocumentChanged(DocumentId),
}

/// Settings the linter applies to every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOptions {
    /// Only documents with this language id are sorted or diagnosed.
    pub language_id: String,
    pub severities: RuleSeverities,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            language_id: "stylus".to_string(),
            severities: RuleSeverities::default(),
        }
    }
}

/// Services the linter needs from its host.
pub trait Host {
    /// The document in the active editor, if there is one.
    fn active_document(&self) -> Option<ActiveDocument>;

    /// Lines of the active document, without line terminators.
    fn document_lines(&self) -> Option<Vec<String>>;

    /// Apply all edits to the active document as one transaction.
    ///
    /// Returns false when there is no active document to edit.
    fn apply_line_edits(&mut self, edits: &[LineEdit]) -> bool;

    /// Replace every diagnostic shown for `id`.
    fn publish_diagnostics(&mut self, id: &DocumentId, diagnostics: &[Diagnostic]);

    fn clear_diagnostics(&mut self, id: &DocumentId);

    fn show_information(&mut self, message: &str);
}
