use crate::palette::NamedPalette;

/// Construction-time configuration for a [`crate::Terminal`].
///
/// There is no on-disk or wire format owned by the core; a host that wants to
/// persist these values does so on its own terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub rows: i32,
    pub cols: i32,
    pub palette: NamedPalette,
    /// Upper bound on total retained lines, viewport included. `None` means unbounded.
    pub max_lines: Option<usize>,
    /// Tokenizer resync threshold: an unterminated escape sequence longer
    /// than this many characters is discarded.
    pub escape_guard_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: 24,
            cols: 80,
            palette: NamedPalette::default(),
            max_lines: None,
            escape_guard_len: 256,
        }
    }
}
