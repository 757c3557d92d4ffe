use std::io::{IsTerminal, Write};

use crossterm::style::{StyledContent, Stylize};
use smart_stylus_linter_engine::{Diagnostic, Severity};

use crate::commands::Checked;

/// `path:line:col: severity: message`, with one-based line and column.
pub fn format_diagnostic(path: &str, diagnostic: &Diagnostic) -> String {
    format!(
        "{path}:{}:{}: {}: {}",
        diagnostic.line + 1,
        diagnostic.columns.start + 1,
        diagnostic.severity,
        diagnostic.message()
    )
}

fn severity_style(severity: Severity) -> StyledContent<String> {
    let label = severity.to_string();
    match severity {
        Severity::Error => label.red().bold(),
        Severity::Warning => label.yellow().bold(),
        Severity::Information => label.blue(),
        Severity::Hint => label.dark_grey(),
    }
}

/// Print every diagnostic, coloured when stdout is a terminal.
pub fn print_diagnostics(out: &mut impl Write, checked: &[Checked]) -> std::io::Result<()> {
    let styled = std::io::stdout().is_terminal();

    for file in checked {
        for diagnostic in &file.diagnostics {
            if styled {
                writeln!(
                    out,
                    "{}:{}:{}: {}: {}",
                    file.path.clone().bold(),
                    diagnostic.line + 1,
                    diagnostic.columns.start + 1,
                    severity_style(diagnostic.severity),
                    diagnostic.message()
                )?;
            } else {
                writeln!(out, "{}", format_diagnostic(&file.path, diagnostic))?;
            }
        }
    }

    let total: usize = checked.iter().map(|file| file.diagnostics.len()).sum();
    let summary = format!("{total} problem(s) in {} file(s)", checked.len());
    if styled && total > 0 {
        writeln!(out, "{}", summary.red())
    } else if styled {
        writeln!(out, "{}", summary.green())
    } else {
        writeln!(out, "{summary}")
    }
}

/// Print one line per file the sort command changed or would change.
pub fn print_sorted(out: &mut impl Write, paths: &[&str], check: bool) -> std::io::Result<()> {
    let verb = if check { "would sort" } else { "sorted" };
    let styled = std::io::stdout().is_terminal();

    for path in paths {
        if styled {
            writeln!(out, "{} {path}", verb.yellow())?;
        } else {
            writeln!(out, "{verb} {path}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_stylus_linter_engine::Rule;

    #[test]
    fn test_format_is_one_based() {
        let diagnostic = Diagnostic {
            line: 2,
            columns: 7..8,
            rule: Rule::UnwantedSemicolon,
            severity: Severity::Warning,
        };

        assert_eq!(
            format_diagnostic("theme/card.styl", &diagnostic),
            "theme/card.styl:3:8: warning: Unwanted semicolon found"
        );
    }
}
