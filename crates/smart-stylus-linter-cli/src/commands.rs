use anyhow::Result;
use smart_stylus_linter_config::Config;
use smart_stylus_linter_engine::{
    Diagnostic, Event, Linter, MemoryHost, Outcome, Severity, TextDocument, io,
};

use crate::targets::Target;

/// Result of running the sort command on one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorted {
    pub path: String,
    pub text: String,
    pub changed: bool,
}

/// Diagnostics found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked {
    pub path: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Checked {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }
}

fn load(target: &Target, config: &Config) -> Result<TextDocument> {
    let text = io::read_file(target.file.relative_path(), &target.root)?;
    TextDocument::from_bytes(
        target.display_path(),
        target.language_id(config),
        text.as_bytes(),
    )
}

fn skip_warning(target: &Target, config: &Config) {
    log::warn!(
        "skipping {}: not a {} file",
        target.display_path(),
        config.language_id
    );
}

/// Run the smart-lint command on each target.
///
/// Each file in turn becomes the active document of a single host. Files in
/// another language are skipped. Nothing is written here; callers decide
/// what to do with the sorted text.
pub fn sort(targets: &[Target], config: &Config) -> Result<Vec<Sorted>> {
    let mut linter = Linter::new(config.lint_options());
    let mut host = MemoryHost::default();
    let mut results = Vec::new();

    for target in targets {
        let document = load(target, config)?;
        let original = document.text();
        host.open(document);

        let outcome = linter.handle(Event::SmartLint, &mut host);
        let Some(document) = host.close() else {
            continue;
        };
        match outcome {
            Outcome::Rewritten => {}
            _ if document.language_id() != config.language_id => {
                skip_warning(target, config);
                continue;
            }
            _ => log::debug!("{} left as is", target.display_path()),
        }

        let text = document.text();
        results.push(Sorted {
            path: target.display_path(),
            changed: text != original,
            text,
        });
    }

    Ok(results)
}

/// Write sorted text back to the files that changed.
pub fn write_back(targets: &[Target], sorted: &[Sorted]) -> Result<usize> {
    let mut written = 0;
    for target in targets {
        let path = target.display_path();
        if let Some(result) = sorted.iter().find(|s| s.path == path && s.changed) {
            io::write_file(target.file.relative_path(), &target.root, &result.text)?;
            log::info!("wrote {path}");
            written += 1;
        }
    }
    Ok(written)
}

/// Compute diagnostics for each target as an editor does when it is opened.
///
/// Results come back ordered by path, one entry per file in the configured
/// language.
pub fn lint(targets: &[Target], config: &Config) -> Result<Vec<Checked>> {
    let mut linter = Linter::new(config.lint_options());
    let mut host = MemoryHost::default();

    for target in targets {
        host.open(load(target, config)?);

        match linter.handle(Event::ActiveEditorChanged, &mut host) {
            Outcome::Diagnosed { count } => {
                log::debug!("{}: {count} diagnostics", target.display_path());
            }
            _ => skip_warning(target, config),
        }
    }

    Ok(linter
        .diagnostics()
        .iter()
        .map(|(id, diagnostics)| Checked {
            path: id.to_string(),
            diagnostics: diagnostics.to_vec(),
        })
        .collect())
}
