//! Index-to-hex color resolution.
//!
//! An indexed mapping from a palette index (0-255) to a 6-digit RGB hex
//! string. Indices 0-7 are the named base colors, 8-15 their "bright"
//! variants, 16-231 a 6x6x6 color cube and 232-255 a 24-step greyscale ramp.
//! The cube and ramp are computed, not tabulated, and are shared across every
//! named 16-color table below.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEX_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F]{6})$").unwrap();
}

/// An RGB color, rendered as a `#rrggbb` hex string for embedding in styled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` or `rrggbb` string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let cap = HEX_REGEX.captures(hex)?;
        let digits = &cap[1];
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Rgb::new(r, g, b))
    }
}

/// One of the named 16-color tables a [`Palette`] can be built from.
///
/// The base/bright entries differ per terminal emulator convention; the 256
/// color cube and greyscale ramp are identical for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamedPalette {
    #[default]
    Putty,
    XtermL,
    WinXpL,
    VsCodeL,
    Default,
}

const fn base16(colors: [(u8, u8, u8); 16]) -> [Rgb; 16] {
    let mut out = [Rgb::new(0, 0, 0); 16];
    let mut i = 0;
    while i < 16 {
        let (r, g, b) = colors[i];
        out[i] = Rgb::new(r, g, b);
        i += 1;
    }
    out
}

const PUTTY: [Rgb; 16] = base16([
    (0, 0, 0),
    (187, 0, 0),
    (0, 187, 0),
    (187, 187, 0),
    (0, 0, 187),
    (187, 0, 187),
    (0, 187, 187),
    (187, 187, 187),
    (85, 85, 85),
    (255, 85, 85),
    (85, 255, 85),
    (255, 255, 85),
    (85, 85, 255),
    (255, 85, 255),
    (85, 255, 255),
    (255, 255, 255),
]);

const XTERM_L: [Rgb; 16] = base16([
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
]);

const WINXP_L: [Rgb; 16] = base16([
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
]);

const VSCODE_L: [Rgb; 16] = base16([
    (0, 0, 0),
    (205, 49, 49),
    (13, 188, 121),
    (229, 229, 16),
    (36, 114, 200),
    (188, 63, 188),
    (17, 168, 205),
    (229, 229, 229),
    (102, 102, 102),
    (241, 76, 76),
    (35, 209, 139),
    (245, 245, 67),
    (59, 142, 234),
    (214, 112, 214),
    (41, 184, 219),
    (255, 255, 255),
]);

const DEFAULT_16: [Rgb; 16] = base16([
    (0, 0, 0),
    (170, 0, 0),
    (0, 170, 0),
    (170, 85, 0),
    (0, 0, 170),
    (170, 0, 170),
    (0, 170, 170),
    (170, 170, 170),
    (85, 85, 85),
    (255, 85, 85),
    (85, 255, 85),
    (255, 255, 85),
    (85, 85, 255),
    (255, 85, 255),
    (85, 255, 255),
    (255, 255, 255),
]);

const CUBE_STEPS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Resolves palette indices (0-255) to RGB colors for a chosen named 16-color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    base: [Rgb; 16],
    name: NamedPalette,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::named(NamedPalette::default())
    }
}

impl Palette {
    pub fn named(name: NamedPalette) -> Self {
        let base = match name {
            NamedPalette::Putty => PUTTY,
            NamedPalette::XtermL => XTERM_L,
            NamedPalette::WinXpL => WINXP_L,
            NamedPalette::VsCodeL => VSCODE_L,
            NamedPalette::Default => DEFAULT_16,
        };
        Palette { base, name }
    }

    pub fn name(&self) -> NamedPalette {
        self.name
    }

    /// Resolve a 0-255 palette index to RGB. Used identically for fg and bg.
    pub fn color(&self, idx: u8) -> Rgb {
        match idx {
            0..=15 => self.base[idx as usize],
            16..=231 => {
                let n = idx as u32 - 16;
                let r = CUBE_STEPS[(n / 36) as usize % 6];
                let g = CUBE_STEPS[(n / 6) as usize % 6];
                let b = CUBE_STEPS[n as usize % 6];
                Rgb::new(r, g, b)
            }
            232..=255 => {
                let step = (idx as u32 - 232) * 10 + 8;
                let v = step.min(255) as u8;
                Rgb::new(v, v, v)
            }
        }
    }

    /// Foreground hex for palette index `idx`.
    pub fn fg(&self, idx: u8) -> String {
        self.color(idx).to_hex()
    }

    /// Background hex for palette index `idx`. Identical resolution to [`Palette::fg`];
    /// kept as a distinct method since callers pick foreground/background through
    /// different SGR codes.
    pub fn bg(&self, idx: u8) -> String {
        self.color(idx).to_hex()
    }

    /// The "bright" variant index of a base color 0-7.
    pub const fn bright(base_idx: u8) -> u8 {
        base_idx + 8
    }
}
