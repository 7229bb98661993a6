//! Select Graphic Rendition (SGR) parameter parsing.

/// One decoded SGR entry. Parameters are consumed left to right; `38;5;N` /
/// `48;5;N` and `38;2;R;G;B` / `48;2;R;G;B` each fold several raw parameters
/// into a single [`SgrParam`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrParam {
    Reset,
    Bold,
    Dim,
    Italic,
    NotItalic,
    Underline,
    NotUnderline,
    Crossed,
    NotCrossed,
    Superscript,
    Subscript,
    Overline,
    NotOverline,
    NormalIntensity,
    Reverse,
    NotReverse,
    SlowBlink,
    NotBlinking,
    /// Base 3-bit foreground/background, index 0-7.
    FgBase(u8),
    BgBase(u8),
    /// Bright (aixterm) foreground/background, index 0-7 (rendered as palette index + 8).
    FgBright(u8),
    BgBright(u8),
    FgDefault,
    BgDefault,
    /// `38;5;N` / `48;5;N` - 256-color palette index.
    FgIndexed(u8),
    BgIndexed(u8),
    /// `38;2;R;G;B` / `48;2;R;G;B` - recognized, rendering may treat as no-op.
    FgRgb(u8, u8, u8),
    BgRgb(u8, u8, u8),
    /// Syntactically valid but not acted upon (e.g. underline color, framed).
    Unsupported,
}

/// Parse the semicolon-delimited SGR parameter list (already split by the
/// caller, with `:` normalized to `;`). An empty list or a single empty
/// parameter both resolve to [`SgrParam::Reset`].
pub fn parse_sgr(params: &[&str]) -> Vec<SgrParam> {
    if params.is_empty() || (params.len() == 1 && params[0].is_empty()) {
        return vec![SgrParam::Reset];
    }

    let mut out = Vec::new();
    let mut i = 0;
    while i < params.len() {
        let Some(code) = parse_i32(params[i]) else {
            i += 1;
            continue;
        };
        match code {
            0 => out.push(SgrParam::Reset),
            1 => out.push(SgrParam::Bold),
            2 => out.push(SgrParam::Dim),
            3 => out.push(SgrParam::Italic),
            4 => out.push(SgrParam::Underline),
            5 => out.push(SgrParam::SlowBlink),
            7 => out.push(SgrParam::Reverse),
            9 => out.push(SgrParam::Crossed),
            22 => out.push(SgrParam::NormalIntensity),
            23 => out.push(SgrParam::NotItalic),
            24 => out.push(SgrParam::NotUnderline),
            25 => out.push(SgrParam::NotBlinking),
            27 => out.push(SgrParam::NotReverse),
            29 => out.push(SgrParam::NotCrossed),
            30..=37 => out.push(SgrParam::FgBase(code as u8 - 30)),
            38 => {
                let (param, consumed) = parse_extended_color(&params[i..]);
                out.push(param.map_or(SgrParam::Unsupported, |c| c.0));
                i += consumed.saturating_sub(1);
            }
            39 => out.push(SgrParam::FgDefault),
            40..=47 => out.push(SgrParam::BgBase(code as u8 - 40)),
            48 => {
                let (param, consumed) = parse_extended_color(&params[i..]);
                out.push(param.map_or(SgrParam::Unsupported, |c| c.1));
                i += consumed.saturating_sub(1);
            }
            49 => out.push(SgrParam::BgDefault),
            51 | 53 => out.push(if code == 53 { SgrParam::Overline } else { SgrParam::Unsupported }),
            55 => out.push(SgrParam::NotOverline),
            58 | 73 | 74 => out.push(match code {
                73 => SgrParam::Superscript,
                74 => SgrParam::Subscript,
                _ => SgrParam::Unsupported,
            }),
            90..=97 => out.push(SgrParam::FgBright(code as u8 - 90)),
            100..=107 => out.push(SgrParam::BgBright(code as u8 - 100)),
            _ => out.push(SgrParam::Unsupported),
        }
        i += 1;
    }
    out
}

/// Parse the `5;N` / `2;R;G;B` tail following an SGR 38/48 parameter.
/// Returns a (fg, bg) pair sharing the same color so the caller can pick the
/// one it needs, plus the number of raw parameters consumed including the
/// leading 38/48.
fn parse_extended_color(rest: &[&str]) -> (Option<(SgrParam, SgrParam)>, usize) {
    let mode = rest.get(1).and_then(|s| parse_i32(s));
    match mode {
        Some(5) => {
            let n = rest.get(2).and_then(|s| parse_i32(s)).unwrap_or(0).clamp(0, 255) as u8;
            (Some((SgrParam::FgIndexed(n), SgrParam::BgIndexed(n))), 3)
        }
        Some(2) => {
            let r = rest.get(2).and_then(|s| parse_i32(s)).unwrap_or(0).clamp(0, 255) as u8;
            let g = rest.get(3).and_then(|s| parse_i32(s)).unwrap_or(0).clamp(0, 255) as u8;
            let b = rest.get(4).and_then(|s| parse_i32(s)).unwrap_or(0).clamp(0, 255) as u8;
            (Some((SgrParam::FgRgb(r, g, b), SgrParam::BgRgb(r, g, b))), 5)
        }
        _ => (None, 1),
    }
}

fn parse_i32(s: &str) -> Option<i32> {
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_resolves_to_reset() {
        assert_eq!(parse_sgr(&[]), vec![SgrParam::Reset]);
        assert_eq!(parse_sgr(&[""]), vec![SgrParam::Reset]);
    }

    #[test]
    fn simple_codes() {
        assert_eq!(parse_sgr(&["1"]), vec![SgrParam::Bold]);
        assert_eq!(parse_sgr(&["31"]), vec![SgrParam::FgBase(1)]);
        assert_eq!(parse_sgr(&["0", "31"]), vec![SgrParam::Reset, SgrParam::FgBase(1)]);
    }

    #[test]
    fn indexed_256_color_consumes_three_params() {
        assert_eq!(parse_sgr(&["38", "5", "200"]), vec![SgrParam::FgIndexed(200)]);
        assert_eq!(parse_sgr(&["48", "5", "22", "1"]), vec![SgrParam::BgIndexed(22), SgrParam::Bold]);
    }

    #[test]
    fn truecolor_recognized() {
        assert_eq!(parse_sgr(&["38", "2", "10", "20", "30"]), vec![SgrParam::FgRgb(10, 20, 30)]);
    }

    #[test]
    fn bright_colors() {
        assert_eq!(parse_sgr(&["92"]), vec![SgrParam::FgBright(2)]);
        assert_eq!(parse_sgr(&["105"]), vec![SgrParam::BgBright(5)]);
    }
}
