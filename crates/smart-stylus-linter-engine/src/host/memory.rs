use std::collections::BTreeMap;

use crate::editing::{LineEdit, Patch, TextDocument};
use crate::host::{ActiveDocument, DocumentId, Host};
use crate::linting::Diagnostic;

/// A host with at most one open document, kept entirely in memory.
///
/// Published diagnostics and information messages are recorded so callers
/// can render them after the event has been handled.
#[derive(Debug, Default)]
pub struct MemoryHost {
    document: Option<TextDocument>,
    published: BTreeMap<DocumentId, Vec<Diagnostic>>,
    messages: Vec<String>,
    last_patch: Option<Patch>,
    edit_count: usize,
}

impl MemoryHost {
    pub fn with_document(document: TextDocument) -> Self {
        Self {
            document: Some(document),
            ..Self::default()
        }
    }

    /// Make `document` the active one, returning the previously active document.
    pub fn open(&mut self, document: TextDocument) -> Option<TextDocument> {
        self.last_patch = None;
        self.document.replace(document)
    }

    pub fn close(&mut self) -> Option<TextDocument> {
        self.document.take()
    }

    pub fn document(&self) -> Option<&TextDocument> {
        self.document.as_ref()
    }

    pub fn text(&self) -> Option<String> {
        self.document.as_ref().map(TextDocument::text)
    }

    pub fn set_language_id(&mut self, language_id: &str) {
        if let Some(document) = self.document.as_mut() {
            document.set_language_id(language_id);
        }
    }

    pub fn published(&self, id: &DocumentId) -> &[Diagnostic] {
        self.published.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Patch produced by the most recent edit of the active document.
    pub fn last_patch(&self) -> Option<&Patch> {
        self.last_patch.as_ref()
    }

    /// Number of edit transactions applied.
    pub fn edit_count(&self) -> usize {
        self.edit_count
    }
}

impl Host for MemoryHost {
    fn active_document(&self) -> Option<ActiveDocument> {
        self.document.as_ref().map(|document| ActiveDocument {
            id: document.id().clone(),
            language_id: document.language_id().to_string(),
        })
    }

    fn document_lines(&self) -> Option<Vec<String>> {
        self.document.as_ref().map(TextDocument::lines)
    }

    fn apply_line_edits(&mut self, edits: &[LineEdit]) -> bool {
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        self.last_patch = Some(document.apply_line_edits(edits));
        self.edit_count += 1;
        true
    }

    fn publish_diagnostics(&mut self, id: &DocumentId, diagnostics: &[Diagnostic]) {
        self.published.insert(id.clone(), diagnostics.to_vec());
    }

    fn clear_diagnostics(&mut self, id: &DocumentId) {
        self.published.remove(id);
    }

    fn show_information(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
