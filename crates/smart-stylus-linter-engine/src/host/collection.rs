use std::collections::BTreeMap;

use crate::host::DocumentId;
use crate::linting::Diagnostic;

/// Diagnostics per document, replaced wholesale on every recompute.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DiagnosticCollection {
    entries: BTreeMap<DocumentId, Vec<Diagnostic>>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full set for `id`.
    pub fn set(&mut self, id: DocumentId, diagnostics: Vec<Diagnostic>) {
        self.entries.insert(id, diagnostics);
    }

    pub fn delete(&mut self, id: &DocumentId) -> Option<Vec<Diagnostic>> {
        self.entries.remove(id)
    }

    pub fn get(&self, id: &DocumentId) -> &[Diagnostic] {
        self.entries.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DocumentId, &[Diagnostic])> {
        self.entries.iter().map(|(id, d)| (id, d.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linting::{Rule, Severity};

    fn diagnostic(line: usize) -> Diagnostic {
        Diagnostic {
            line,
            columns: 0..1,
            rule: Rule::UnwantedColon,
            severity: Severity::Error,
        }
    }

    #[test]
    fn test_set_replaces_previous_entries() {
        let mut collection = DiagnosticCollection::new();
        let id = DocumentId::from("a.styl");

        collection.set(id.clone(), vec![diagnostic(1), diagnostic(2)]);
        collection.set(id.clone(), vec![diagnostic(3)]);

        assert_eq!(collection.get(&id), &[diagnostic(3)]);
    }

    #[test]
    fn test_unknown_document_is_empty() {
        let collection = DiagnosticCollection::new();

        assert!(collection.get(&DocumentId::from("missing.styl")).is_empty());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_delete_and_iterate() {
        let mut collection = DiagnosticCollection::new();
        collection.set("b.styl".into(), vec![diagnostic(0)]);
        collection.set("a.styl".into(), vec![]);

        let ids: Vec<_> = collection.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, vec!["a.styl", "b.styl"]);
        assert!(!collection.is_empty());

        collection.delete(&"b.styl".into());
        assert!(collection.is_empty());
        assert_eq!(collection.iter().count(), 1);
    }
}
