use crate::editing::LineEdit;
use crate::host::{ActiveDocument, DiagnosticCollection, Event, Host, LintOptions};
use crate::linting::{check_lines, sort_lines, strip_sentinel, with_sentinel};

pub const LINTED_MESSAGE: &str = "Stylus file successfully linted!";

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to act on: no active document, another language, empty text,
    /// or a change to a document that is not active.
    Skipped,
    /// The active document was rewritten with sorted lines.
    Rewritten,
    /// Diagnostics for the active document were recomputed and published.
    Diagnosed { count: usize },
    /// Diagnostics for the active document were cleared.
    Cleared,
}

/// Reacts to host events by sorting documents and maintaining diagnostics.
#[derive(Debug, Default)]
pub struct Linter {
    options: LintOptions,
    diagnostics: DiagnosticCollection,
}

impl Linter {
    pub fn new(options: LintOptions) -> Self {
        Self {
            options,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    pub fn options(&self) -> &LintOptions {
        &self.options
    }

    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    pub fn handle(&mut self, event: Event, host: &mut impl Host) -> Outcome {
        log::debug!("handling {event:?}");
        match event {
            Event::SmartLint => self.smart_lint(host),
            Event::ActiveEditorChanged => self.refresh_diagnostics(host),
            Event::DocumentChanged(id) => {
                let is_active = host
                    .active_document()
                    .is_some_and(|document| document.id == id);
                if !is_active {
                    log::debug!("{id} changed but is not the active document");
                    return Outcome::Skipped;
                }
                self.refresh_diagnostics(host)
            }
        }
    }

    fn active_target(&self, host: &impl Host) -> Option<ActiveDocument> {
        let document = host.active_document()?;
        if document.language_id != self.options.language_id {
            log::debug!(
                "{} is {}, not {}",
                document.id,
                document.language_id,
                self.options.language_id
            );
            return None;
        }
        Some(document)
    }

    /// Sort every block of the active document in place.
    pub fn smart_lint(&mut self, host: &mut impl Host) -> Outcome {
        let Some(document) = self.active_target(&*host) else {
            return Outcome::Skipped;
        };
        let Some(lines) = host.document_lines() else {
            return Outcome::Skipped;
        };

        let sorted = strip_sentinel(sort_lines(&with_sentinel(&lines)));
        if sorted.is_empty() {
            log::debug!("{} is empty, nothing to sort", document.id);
            return Outcome::Skipped;
        }

        if !host.apply_line_edits(&LineEdit::for_lines(sorted)) {
            return Outcome::Skipped;
        }
        host.show_information(LINTED_MESSAGE);
        log::info!("sorted {}", document.id);
        Outcome::Rewritten
    }

    /// Recompute diagnostics for the active document and publish them.
    ///
    /// Diagnostics of a document in another language are cleared instead.
    pub fn refresh_diagnostics(&mut self, host: &mut impl Host) -> Outcome {
        let Some(document) = host.active_document() else {
            return Outcome::Skipped;
        };

        if document.language_id != self.options.language_id {
            self.diagnostics.delete(&document.id);
            host.clear_diagnostics(&document.id);
            return Outcome::Cleared;
        }

        let lines = host.document_lines().unwrap_or_default();
        let found = check_lines(&lines, &self.options.severities);
        let count = found.len();

        host.publish_diagnostics(&document.id, &found);
        self.diagnostics.set(document.id, found);
        Outcome::Diagnosed { count }
    }
}
