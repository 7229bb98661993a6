//! Streaming ANSI/VT terminal emulator core.
//!
//! Feed raw bytes from a PTY or network stream into [`Terminal::update`] and
//! get back the set of viewport lines that changed, already rendered to
//! HTML, plus any bytes the host should write back (e.g. a Primary Device
//! Attributes reply). The engine never blocks and never fails on untrusted
//! input: malformed escape sequences, unsupported CSIs and invalid UTF-8 are
//! all absorbed rather than surfaced as errors. [`TerminalError`] is reserved
//! for invalid construction/resize parameters, a programmer error rather
//! than something a remote peer can trigger.
//!
//! ```
//! use vtengine::{Terminal, NamedPalette, Event};
//!
//! let mut term = Terminal::new(24, 80, NamedPalette::Putty);
//! let events = term.update(b"hello\x1b[31mworld\x1b[0m");
//! assert!(events.iter().any(|e| matches!(e, Event::LineChanged { .. })));
//! ```

mod attrs;
mod cell;
mod config;
mod decoder;
mod error;
mod event;
mod line;
mod palette;
mod position;
mod render;
mod sgr;
mod terminal;
mod tokenizer;

pub use config::Config;
pub use error::TerminalError;
pub use event::Event;
pub use palette::{NamedPalette, Palette, Rgb};
pub use position::Pos;
pub use terminal::Terminal;
