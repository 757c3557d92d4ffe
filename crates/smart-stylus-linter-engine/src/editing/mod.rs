//! In-memory document model used by hosts.
//!
//! - **`document`**: `TextDocument`, an xi-rope buffer with a version counter
//! - **`lines`**: editor-style line splitting with byte spans into the rope
//! - **`patch`**: line edits going in, and the `Patch` describing what changed

pub mod document;
pub mod lines;
pub mod patch;

pub use document::TextDocument;
pub use lines::{LineRef, Span, document_lines, lines_with_spans};
pub use patch::{LineEdit, Patch};
