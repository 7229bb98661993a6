//! Error type for invalid API usage.
//!
//! Nothing the engine encounters while decoding a byte stream is fatal (see the
//! error taxonomy in the crate-level docs): malformed escapes, unsupported CSIs,
//! out-of-bounds cursor motion and invalid UTF-8 are all absorbed inside
//! [`crate::Terminal::update`], which never returns `Err`. `TerminalError` exists
//! for a different failure class entirely: invalid parameters to the
//! construction/resize API, which is a programmer error rather than untrusted
//! input.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TerminalError {
    #[error("terminal size must be non-zero, got {rows}x{cols}")]
    InvalidSize { rows: i32, cols: i32 },

    #[error("max_lines must be at least the viewport height ({rows}), got {max_lines}")]
    MaxLinesTooSmall { rows: i32, max_lines: usize },
}
