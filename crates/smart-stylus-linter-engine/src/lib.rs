pub mod editing;
pub mod host;
pub mod io;
pub mod linting;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{LineEdit, Patch, TextDocument};
pub use host::{
    ActiveDocument, DiagnosticCollection, DocumentId, Event, Host, LintOptions, Linter,
    MemoryHost, linter::Outcome,
};
pub use io::*;
pub use linting::{
    Diagnostic, LineKind, Rule, RuleSeverities, Severity, StylusLineClassifier, check_lines,
    check_text, is_selector, sort_lines,
};
pub use models::StylesheetFile;
