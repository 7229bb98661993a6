//! Parses a complete escape-sequence token into a typed [`DecodedEscape`].

use crate::sgr::{parse_sgr, SgrParam};

/// The kind of CSI (`ESC [ ... F`) sequence, identified by its final byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiKind {
    CursorUp,
    CursorDown,
    CursorForward,
    CursorBack,
    CursorNextLine,
    CursorPreviousLine,
    CursorHorizontalAbsolute,
    CursorPosition,
    CursorVerticalAbsolute,
    HorizontalVerticalPosition,
    EraseInDisplay,
    EraseInLine,
    InsertLine,
    DeleteLine,
    InsertChar,
    DeleteChar,
    SaveCursorPosition,
    RestoreCursorPosition,
    Sgr,
    PrimaryDeviceAttributes,
    PrivateEnable,
    PrivateDisable,
    Unsupported,
}

impl CsiKind {
    fn from_final_byte(final_byte: char, private: bool) -> Self {
        match final_byte {
            'A' => CsiKind::CursorUp,
            'B' => CsiKind::CursorDown,
            'C' => CsiKind::CursorForward,
            'D' => CsiKind::CursorBack,
            'E' => CsiKind::CursorNextLine,
            'F' => CsiKind::CursorPreviousLine,
            'G' => CsiKind::CursorHorizontalAbsolute,
            'H' => CsiKind::CursorPosition,
            'J' => CsiKind::EraseInDisplay,
            'K' => CsiKind::EraseInLine,
            'L' => CsiKind::InsertLine,
            'M' => CsiKind::DeleteLine,
            'P' => CsiKind::DeleteChar,
            '@' => CsiKind::InsertChar,
            'c' => CsiKind::PrimaryDeviceAttributes,
            'd' => CsiKind::CursorVerticalAbsolute,
            'f' => CsiKind::HorizontalVerticalPosition,
            'h' if private => CsiKind::PrivateEnable,
            'l' if private => CsiKind::PrivateDisable,
            's' => CsiKind::SaveCursorPosition,
            'u' => CsiKind::RestoreCursorPosition,
            'm' => CsiKind::Sgr,
            _ => CsiKind::Unsupported,
        }
    }

    /// Erase-family CSIs (`J`, `K`) default their first parameter to 0;
    /// every other recognized CSI defaults to 1.
    fn default_param(self) -> i32 {
        match self {
            CsiKind::EraseInDisplay | CsiKind::EraseInLine => 0,
            _ => 1,
        }
    }
}

/// The private mode addressed by a `CSI ? N h` / `CSI ? N l` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivateMode {
    /// `?25` - cursor visibility.
    Cursor,
    /// `?2004` - bracketed paste; recognized, no grid effect.
    BracketedPaste,
    Unsupported,
}

impl PrivateMode {
    fn from_code(n: i32) -> Self {
        match n {
            25 => PrivateMode::Cursor,
            2004 => PrivateMode::BracketedPaste,
            _ => PrivateMode::Unsupported,
        }
    }
}

/// A fully parsed CSI sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct CsiSeq {
    pub kind: CsiKind,
    pub n: i32,
    pub m: i32,
    pub private_mode: Option<PrivateMode>,
    pub sgr: Vec<SgrParam>,
}

/// The decoded form of a complete escape-sequence token.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedEscape {
    /// `ESC 7` - DECSC, save cursor position and attributes.
    SaveCursor,
    /// `ESC 8` - DECRC, restore cursor position and attributes.
    RestoreCursor,
    Csi(CsiSeq),
    /// Independent function (`ESC` followed by a byte in 0x60-0x7E).
    Fp,
    /// Private two-character sequence other than DECSC/DECRC.
    Fs,
    /// `ESC ( X` character-set selection; recognized, not acted upon.
    CharsetSelect,
    Unsupported,
}

/// Decode a complete escape-sequence token (as produced by
/// [`crate::tokenizer::Tokenizer`]) into a [`DecodedEscape`].
pub fn decode_escape(seq: &str) -> DecodedEscape {
    let mut chars = seq.chars();
    debug_assert_eq!(chars.next(), Some('\u{1b}'));
    let Some(second) = chars.next() else {
        return DecodedEscape::Unsupported;
    };

    if second == '[' {
        return decode_csi(seq);
    }
    if second == '7' {
        return DecodedEscape::SaveCursor;
    }
    if second == '8' {
        return DecodedEscape::RestoreCursor;
    }
    if second == '(' {
        return DecodedEscape::CharsetSelect;
    }
    if ('\u{30}'..='\u{3f}').contains(&second) {
        return DecodedEscape::Fs;
    }
    if ('\u{60}'..='\u{7e}').contains(&second) {
        return DecodedEscape::Fp;
    }
    log::trace!("unsupported escape sequence: {seq:?}");
    DecodedEscape::Unsupported
}

fn decode_csi(seq: &str) -> DecodedEscape {
    let Some(final_byte) = seq.chars().last() else {
        return DecodedEscape::Unsupported;
    };
    // body: parameter bytes between "ESC [" and the final byte.
    let body: String = seq.chars().skip(2).take(seq.chars().count() - 3).collect();
    let private = body.starts_with('?');
    let body = body.trim_start_matches('?');

    let kind = CsiKind::from_final_byte(final_byte, private);
    if matches!(kind, CsiKind::Unsupported) {
        log::trace!("unsupported CSI sequence: {seq:?}");
    }

    let raw_params: Vec<&str> = body.split([';', ':']).filter(|p| !p.is_empty()).collect();

    let default = kind.default_param();
    let n = raw_params.first().and_then(|p| p.parse().ok()).unwrap_or(default);
    let m = raw_params.get(1).and_then(|p| p.parse().ok()).unwrap_or(default);

    let sgr = if matches!(kind, CsiKind::Sgr) { parse_sgr(&raw_params) } else { Vec::new() };

    let private_mode = matches!(kind, CsiKind::PrivateEnable | CsiKind::PrivateDisable).then(|| PrivateMode::from_code(n));

    DecodedEscape::Csi(CsiSeq { kind, n, m, private_mode, sgr })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decsc_decrc() {
        assert_eq!(decode_escape("\x1b7"), DecodedEscape::SaveCursor);
        assert_eq!(decode_escape("\x1b8"), DecodedEscape::RestoreCursor);
    }

    #[test]
    fn cursor_position_defaults_to_one() {
        let DecodedEscape::Csi(csi) = decode_escape("\x1b[H") else { panic!() };
        assert_eq!(csi.kind, CsiKind::CursorPosition);
        assert_eq!((csi.n, csi.m), (1, 1));
    }

    #[test]
    fn cursor_position_with_params() {
        let DecodedEscape::Csi(csi) = decode_escape("\x1b[5;10H") else { panic!() };
        assert_eq!((csi.n, csi.m), (5, 10));
    }

    #[test]
    fn erase_defaults_to_zero() {
        let DecodedEscape::Csi(csi) = decode_escape("\x1b[J") else { panic!() };
        assert_eq!(csi.n, 0);
        let DecodedEscape::Csi(csi) = decode_escape("\x1b[K") else { panic!() };
        assert_eq!(csi.n, 0);
    }

    #[test]
    fn sgr_params_are_parsed() {
        let DecodedEscape::Csi(csi) = decode_escape("\x1b[31;1m") else { panic!() };
        assert_eq!(csi.kind, CsiKind::Sgr);
        assert_eq!(csi.sgr, vec![SgrParam::FgBase(1), SgrParam::Bold]);
    }

    #[test]
    fn private_mode_enable_disable() {
        let DecodedEscape::Csi(csi) = decode_escape("\x1b[?25h") else { panic!() };
        assert_eq!(csi.kind, CsiKind::PrivateEnable);
        assert_eq!(csi.private_mode, Some(PrivateMode::Cursor));

        let DecodedEscape::Csi(csi) = decode_escape("\x1b[?2004l") else { panic!() };
        assert_eq!(csi.kind, CsiKind::PrivateDisable);
        assert_eq!(csi.private_mode, Some(PrivateMode::BracketedPaste));
    }

    #[test]
    fn primary_device_attributes() {
        let DecodedEscape::Csi(csi) = decode_escape("\x1b[c") else { panic!() };
        assert_eq!(csi.kind, CsiKind::PrimaryDeviceAttributes);
    }

    #[test]
    fn unsupported_final_byte() {
        let DecodedEscape::Csi(csi) = decode_escape("\x1b[5z") else { panic!() };
        assert_eq!(csi.kind, CsiKind::Unsupported);
    }

    #[test]
    fn fp_fs_charset() {
        assert_eq!(decode_escape("\x1bc"), DecodedEscape::Fp);
        assert_eq!(decode_escape("\x1b="), DecodedEscape::Fs);
        assert_eq!(decode_escape("\x1b(B"), DecodedEscape::CharsetSelect);
    }
}
