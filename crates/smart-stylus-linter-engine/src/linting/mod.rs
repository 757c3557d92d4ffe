//! Line-level linting for Stylus stylesheets.
//!
//! Every line is either a selector, which opens a block, or a declaration
//! inside the current block. The three parts here build on that split:
//!
//! - [`classify`]: decides selector vs declaration for a single line
//! - [`sort`]: sorts declarations inside each block, leaving selectors in place
//! - [`diagnostics`]: reports stray punctuation and out-of-order declarations
//!   without touching the text
//!
//! ```
//! use smart_stylus_linter_engine::linting::{sort_lines, strip_sentinel, with_sentinel};
//!
//! let lines = with_sentinel(&["div", "  zebra: 1", "  apple: 2"]);
//! let sorted = strip_sentinel(sort_lines(&lines));
//!
//! assert_eq!(sorted, vec!["div", "  apple 2", "  zebra 1"]);
//! ```

pub mod classify;
pub mod diagnostics;
pub mod sort;

pub use classify::{LineKind, PSEUDO_PREFIXES, StylusLineClassifier, TAG_PREFIXES, is_selector};
pub use diagnostics::{Diagnostic, Rule, RuleSeverities, Severity, check_lines, check_text};
pub use sort::{normalize_declaration, sort_lines, strip_sentinel, with_sentinel};
