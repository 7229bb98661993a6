//! Per-cell graphic rendition state.

use crate::palette::Palette;

/// The graphic-rendition state applied to a single cell.
///
/// Equality is structural over every field, including the colors — two cells
/// with the same flags and the same resolved colors collapse into one styled
/// run during rendering (see [`crate::render::render_line`]).
///
/// `reverse` and `cursor_here` never mutate the stored `fg`/`bg` fields;
/// swapping them is a pure rendering-time decision (see [`Attrs::effective_colors`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attrs {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub crossed: bool,
    pub underline: bool,
    pub superscript: bool,
    pub subscript: bool,
    pub reverse: bool,
    pub overline: bool,
    pub cursor_here: bool,

    pub fg: String,
    pub bg: String,
    default_fg: String,
    default_bg: String,
}

impl Attrs {
    /// Construct the initial attribute state for a palette: default fg/bg are
    /// resolved once here and restored verbatim by [`Attrs::reset`] and by SGR RESET.
    pub fn new(palette: &Palette) -> Self {
        let default_fg = palette.fg(7);
        let default_bg = palette.bg(0);
        Attrs {
            bold: false,
            dim: false,
            italic: false,
            crossed: false,
            underline: false,
            superscript: false,
            subscript: false,
            reverse: false,
            overline: false,
            cursor_here: false,
            fg: default_fg.clone(),
            bg: default_bg.clone(),
            default_fg,
            default_bg,
        }
    }

    /// Restore every field to its default, including colors. Used by SGR RESET
    /// and whenever a fresh cell is written (space-fill on scroll/erase).
    pub fn reset(&mut self) {
        let default_fg = self.default_fg.clone();
        let default_bg = self.default_bg.clone();
        *self = Attrs {
            default_fg,
            default_bg,
            ..Attrs::blank()
        };
        self.fg = self.default_fg.clone();
        self.bg = self.default_bg.clone();
    }

    fn blank() -> Self {
        Attrs {
            bold: false,
            dim: false,
            italic: false,
            crossed: false,
            underline: false,
            superscript: false,
            subscript: false,
            reverse: false,
            overline: false,
            cursor_here: false,
            fg: String::new(),
            bg: String::new(),
            default_fg: String::new(),
            default_bg: String::new(),
        }
    }

    /// Set fg/bg back to the palette defaults without touching style flags
    /// (SGR 39/49).
    pub fn reset_fg(&mut self) {
        self.fg = self.default_fg.clone();
    }

    pub fn reset_bg(&mut self) {
        self.bg = self.default_bg.clone();
    }

    /// The (foreground, background) pair to actually render, accounting for
    /// `reverse` and `cursor_here`. The two flags XOR: a cursor drawn over
    /// already-reversed text cancels back out to the stored colors.
    pub fn effective_colors(&self) -> (&str, &str) {
        if self.reverse ^ self.cursor_here {
            (&self.bg, &self.fg)
        } else {
            (&self.fg, &self.bg)
        }
    }
}
