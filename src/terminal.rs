//! Grid + cursor + attribute state: the coordinator that ties the tokenizer,
//! decoder and renderer together behind [`Terminal::update`].

use std::collections::VecDeque;

use crate::attrs::Attrs;
use crate::config::Config;
use crate::decoder::{decode_escape, CsiKind, CsiSeq, DecodedEscape, PrivateMode};
use crate::error::TerminalError;
use crate::event::Event;
use crate::line::Line;
use crate::palette::{NamedPalette, Palette};
use crate::position::Pos;
use crate::render::render_line;
use crate::sgr::SgrParam;
use crate::tokenizer::{Token, Tokenizer};

const BEL: char = '\u{07}';
const BS: char = '\u{08}';
const LF: char = '\n';
const CR: char = '\r';

/// Grid + cursor + attribute state for one terminal screen.
///
/// Owns its grid, cursor, scrollback, tokenizer buffer and pending-response
/// queue. Single-threaded and synchronous: all mutation happens inside
/// [`Terminal::update`], which never blocks and never returns `Err` — every
/// anomaly in the input byte stream is absorbed per the error taxonomy.
pub struct Terminal {
    config: Config,
    palette: Palette,
    tokenizer: Tokenizer,

    rows: i32,
    cols: i32,
    viewport: Vec<Line>,
    scrollback: VecDeque<Line>,
    next_line_id: u64,

    cursor: Pos,
    pending_wrap: bool,
    cursor_visible: bool,
    attrs: Attrs,

    /// DECSC/DECRC slot: position and attributes.
    saved_cursor: Pos,
    saved_attrs: Attrs,
    /// SCOSC/SCORC slot: position only.
    saved_pos: Pos,
}

impl Terminal {
    /// Construct a terminal with the given viewport size and named palette.
    /// Panics only through [`TerminalError`] returned by [`Terminal::with_config`]
    /// are avoided here by clamping to a minimum 1x1 viewport; use
    /// [`Terminal::with_config`] directly if you want construction to fail loudly.
    pub fn new(rows: i32, cols: i32, palette: NamedPalette) -> Self {
        let config = Config {
            rows: rows.max(1),
            cols: cols.max(1),
            palette,
            ..Config::default()
        };
        Self::with_config(config).expect("rows/cols clamped to >= 1 above")
    }

    pub fn with_config(config: Config) -> Result<Self, TerminalError> {
        if config.rows < 1 || config.cols < 1 {
            return Err(TerminalError::InvalidSize { rows: config.rows, cols: config.cols });
        }
        if let Some(max_lines) = config.max_lines {
            if max_lines < config.rows as usize {
                return Err(TerminalError::MaxLinesTooSmall { rows: config.rows, max_lines });
            }
        }

        let palette = Palette::named(config.palette);
        let attrs = Attrs::new(&palette);
        let mut term = Terminal {
            config,
            palette,
            tokenizer: Tokenizer::new(config.escape_guard_len),
            rows: config.rows,
            cols: config.cols,
            viewport: Vec::new(),
            scrollback: VecDeque::new(),
            next_line_id: 0,
            cursor: Pos::new(1, 1),
            pending_wrap: false,
            cursor_visible: false,
            saved_cursor: Pos::new(1, 1),
            saved_attrs: attrs.clone(),
            saved_pos: Pos::new(1, 1),
            attrs,
        };
        term.rebuild_viewport();
        Ok(term)
    }

    fn rebuild_viewport(&mut self) {
        self.viewport = (0..self.rows).map(|_| self.new_line()).collect();
    }

    fn new_line(&mut self) -> Line {
        let line = Line::new(self.next_line_id, self.cols, &self.attrs);
        self.next_line_id += 1;
        line
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    /// Resize the viewport. Existing content is not reflowed; the grid is
    /// reinitialized at the new dimensions, matching a host that would
    /// otherwise just reconstruct the terminal (§6 calls this optional).
    pub fn resize(&mut self, rows: i32, cols: i32) -> Result<(), TerminalError> {
        if rows < 1 || cols < 1 {
            return Err(TerminalError::InvalidSize { rows, cols });
        }
        self.rows = rows;
        self.cols = cols;
        self.config.rows = rows;
        self.config.cols = cols;
        self.scrollback.clear();
        self.cursor = Pos::new(1, 1);
        self.pending_wrap = false;
        self.rebuild_viewport();
        Ok(())
    }

    /// Clear grid, attributes, tokenizer buffer and scrollback.
    pub fn reset(&mut self) {
        self.tokenizer.clear();
        self.attrs = Attrs::new(&self.palette);
        self.saved_attrs = self.attrs.clone();
        self.cursor = Pos::new(1, 1);
        self.saved_cursor = Pos::new(1, 1);
        self.saved_pos = Pos::new(1, 1);
        self.pending_wrap = false;
        self.cursor_visible = false;
        self.scrollback.clear();
        self.next_line_id = 0;
        self.rebuild_viewport();
    }

    fn line_mut(&mut self, row: i32) -> &mut Line {
        &mut self.viewport[row as usize - 1]
    }

    /// Ingest `bytes`, drive the tokenizer/decoder/state machine, and return
    /// the events generated by this call: device-attribute responses and
    /// unsupported-sequence notices in the order they were produced, followed
    /// by the set of lines that changed, sorted oldest id first. Row order is
    /// not id order once a single update both inserts/deletes lines and
    /// scrolls, so the changed lines are explicitly sorted by id rather than
    /// emitted in viewport (row) order.
    pub fn update(&mut self, bytes: &[u8]) -> Vec<Event> {
        self.tokenizer.append(bytes);
        for line in &mut self.viewport {
            line.begin_update();
        }

        let mut events = Vec::new();
        while let Some(token) = self.tokenizer.next_token() {
            match token {
                Token::Text(text) => {
                    for ch in text.chars() {
                        self.write_char(ch);
                    }
                }
                Token::Control(c) => self.handle_control(c),
                Token::Escape(seq) => self.handle_escape(&seq, &mut events),
            }
        }

        if self.cursor_visible {
            let col = self.cursor.column.min(self.cols);
            let pos = Pos::new(self.cursor.row, col);
            self.line_mut(self.cursor.row).set_cursor(pos);
        }

        let mut changed: Vec<&Line> = self.viewport.iter().filter(|line| line.has_changed()).collect();
        changed.sort_by_key(|line| line.id);
        events.extend(changed.into_iter().map(|line| Event::LineChanged { id: line.id, rendered: render_line(line) }));
        events
    }

    fn handle_control(&mut self, c: char) {
        match c {
            BEL => log::trace!("BEL received"),
            BS => self.set_cursor(None, Some(self.cursor.column - 1)),
            CR => self.set_cursor(None, Some(1)),
            LF => self.line_feed(),
            _ => unreachable!("tokenizer only emits BEL/BS/CR/LF control tokens"),
        }
    }

    fn handle_escape(&mut self, seq: &str, events: &mut Vec<Event>) {
        match decode_escape(seq) {
            DecodedEscape::SaveCursor => {
                self.saved_cursor = self.cursor;
                self.saved_attrs = self.attrs.clone();
            }
            DecodedEscape::RestoreCursor => {
                self.cursor = self.saved_cursor;
                self.attrs = self.saved_attrs.clone();
                self.pending_wrap = false;
            }
            DecodedEscape::Csi(csi) => self.handle_csi(seq, csi, events),
            DecodedEscape::Fp | DecodedEscape::Fs | DecodedEscape::CharsetSelect => {}
            DecodedEscape::Unsupported => {
                events.push(Event::Unsupported(format!("unsupported escape sequence: {seq:?}")));
            }
        }
    }

    fn handle_csi(&mut self, seq: &str, csi: CsiSeq, events: &mut Vec<Event>) {
        match csi.kind {
            CsiKind::CursorUp => self.set_cursor(Some(self.cursor.row - csi.n), None),
            CsiKind::CursorDown => self.set_cursor(Some(self.cursor.row + csi.n), None),
            CsiKind::CursorForward => self.set_cursor(None, Some(self.cursor.column + csi.n)),
            CsiKind::CursorBack => self.set_cursor(None, Some(self.cursor.column - csi.n)),
            CsiKind::CursorNextLine => self.set_cursor(Some(self.cursor.row + csi.n), Some(1)),
            CsiKind::CursorPreviousLine => self.set_cursor(Some(self.cursor.row - csi.n), Some(1)),
            CsiKind::CursorHorizontalAbsolute => self.set_cursor(None, Some(csi.n)),
            CsiKind::CursorVerticalAbsolute => self.set_cursor(Some(csi.n), None),
            CsiKind::CursorPosition | CsiKind::HorizontalVerticalPosition => self.set_cursor(Some(csi.n), Some(csi.m)),
            CsiKind::EraseInDisplay => self.erase_in_display(csi.n),
            CsiKind::EraseInLine => {
                let attrs = self.attrs.clone();
                let (row, col) = (self.cursor.row, self.cursor.column);
                self.line_mut(row).erase(col, csi.n as u16, &attrs);
            }
            CsiKind::InsertLine => self.insert_lines(csi.n),
            CsiKind::DeleteLine => self.delete_lines(csi.n),
            CsiKind::InsertChar => {
                let attrs = self.attrs.clone();
                let (row, col) = (self.cursor.row, self.cursor.column);
                self.line_mut(row).insert_chars(col, csi.n, &attrs);
            }
            CsiKind::DeleteChar => {
                let attrs = self.attrs.clone();
                let (row, col) = (self.cursor.row, self.cursor.column);
                self.line_mut(row).delete_chars(col, csi.n, &attrs);
            }
            CsiKind::SaveCursorPosition => self.saved_pos = self.cursor,
            CsiKind::RestoreCursorPosition => {
                self.cursor = self.saved_pos;
                self.pending_wrap = false;
            }
            CsiKind::Sgr => self.apply_sgr(&csi.sgr),
            CsiKind::PrimaryDeviceAttributes => events.push(Event::Response(b"\x1b[?64;c".to_vec())),
            CsiKind::PrivateEnable => self.apply_private_mode(csi.n, csi.private_mode, true, events),
            CsiKind::PrivateDisable => self.apply_private_mode(csi.n, csi.private_mode, false, events),
            CsiKind::Unsupported => {
                events.push(Event::Unsupported(format!("unsupported CSI sequence: {seq:?}")));
            }
        }
    }

    fn apply_private_mode(&mut self, code: i32, mode: Option<PrivateMode>, enable: bool, events: &mut Vec<Event>) {
        match mode {
            Some(PrivateMode::Cursor) => self.cursor_visible = enable,
            Some(PrivateMode::BracketedPaste) => log::trace!("bracketed paste mode {enable} (no grid effect)"),
            Some(PrivateMode::Unsupported) | None => {
                log::trace!("unsupported private mode: ?{code}");
                events.push(Event::Unsupported(format!("unsupported private mode: ?{code}")));
            }
        }
    }

    fn apply_sgr(&mut self, params: &[SgrParam]) {
        for param in params {
            match *param {
                SgrParam::Reset => self.attrs.reset(),
                SgrParam::Bold => self.attrs.bold = true,
                SgrParam::Dim => self.attrs.dim = true,
                SgrParam::Italic => self.attrs.italic = true,
                SgrParam::NotItalic => self.attrs.italic = false,
                SgrParam::Underline => self.attrs.underline = true,
                SgrParam::NotUnderline => self.attrs.underline = false,
                SgrParam::Crossed => self.attrs.crossed = true,
                SgrParam::NotCrossed => self.attrs.crossed = false,
                SgrParam::Superscript => self.attrs.superscript = true,
                SgrParam::Subscript => self.attrs.subscript = true,
                SgrParam::Overline => self.attrs.overline = true,
                SgrParam::NotOverline => self.attrs.overline = false,
                SgrParam::NormalIntensity => {
                    self.attrs.bold = false;
                    self.attrs.dim = false;
                }
                SgrParam::Reverse => self.attrs.reverse = true,
                SgrParam::NotReverse => self.attrs.reverse = false,
                SgrParam::SlowBlink | SgrParam::NotBlinking => {}
                SgrParam::FgBase(idx) => {
                    let idx = if self.attrs.bold { idx + 8 } else { idx };
                    self.attrs.fg = self.palette.fg(idx);
                }
                SgrParam::BgBase(idx) => self.attrs.bg = self.palette.bg(idx),
                SgrParam::FgBright(idx) => self.attrs.fg = self.palette.fg(idx + 8),
                SgrParam::BgBright(idx) => self.attrs.bg = self.palette.bg(idx + 8),
                SgrParam::FgDefault => self.attrs.reset_fg(),
                SgrParam::BgDefault => self.attrs.reset_bg(),
                SgrParam::FgIndexed(n) => self.attrs.fg = self.palette.fg(n),
                SgrParam::BgIndexed(n) => self.attrs.bg = self.palette.bg(n),
                SgrParam::FgRgb(..) | SgrParam::BgRgb(..) | SgrParam::Unsupported => {}
            }
        }
    }

    fn erase_in_display(&mut self, mode: i32) {
        let attrs = self.attrs.clone();
        match mode {
            0 => {
                let (row, col) = (self.cursor.row, self.cursor.column);
                self.line_mut(row).erase(col, 0, &attrs);
                for row in (row + 1)..=self.rows {
                    self.line_mut(row).clear(&attrs);
                }
            }
            1 => {
                let (row, col) = (self.cursor.row, self.cursor.column);
                for r in 1..row {
                    self.line_mut(r).clear(&attrs);
                }
                self.line_mut(row).erase(col, 1, &attrs);
            }
            2 => {
                for row in 1..=self.rows {
                    self.line_mut(row).clear(&attrs);
                }
            }
            _ => self.scrollback.clear(),
        }
    }

    fn insert_lines(&mut self, n: i32) {
        let start = (self.cursor.row - 1) as usize;
        for _ in 0..n.max(0) {
            if start >= self.viewport.len() {
                break;
            }
            self.viewport.pop();
            let fresh = self.new_line();
            self.viewport.insert(start, fresh);
        }
    }

    fn delete_lines(&mut self, n: i32) {
        let start = (self.cursor.row - 1) as usize;
        for _ in 0..n.max(0) {
            if start >= self.viewport.len() {
                break;
            }
            self.viewport.remove(start);
            let fresh = self.new_line();
            self.viewport.push(fresh);
        }
    }

    /// Explicit cursor positioning (C0 controls, CSI cursor motion): clamps
    /// to the viewport and cancels any deferred autowrap.
    fn set_cursor(&mut self, row: Option<i32>, column: Option<i32>) {
        if let Some(r) = row {
            self.cursor.row = r.clamp(1, self.rows);
        }
        if let Some(c) = column {
            self.cursor.column = c.clamp(1, self.cols);
        }
        self.pending_wrap = false;
    }

    fn line_feed(&mut self) {
        if self.cursor.row >= self.rows {
            self.scroll_up();
        } else {
            self.cursor.row += 1;
        }
        self.pending_wrap = false;
    }

    fn scroll_up(&mut self) {
        let top = self.viewport.remove(0);
        self.scrollback.push_back(top);
        let fresh = self.new_line();
        self.viewport.push(fresh);

        if let Some(max_lines) = self.config.max_lines {
            while self.scrollback.len() + self.viewport.len() > max_lines {
                self.scrollback.pop_front();
            }
        }
    }

    /// Write one printable character, deferring autowrap to the next call: a
    /// cell written in the last column leaves the cursor at the `cols + 1`
    /// sentinel and only wraps once another character actually needs the
    /// next row (VT100 "last column" semantics), rather than the
    /// non-wrapping reference behavior of writing past the backing array.
    fn write_char(&mut self, ch: char) {
        if self.pending_wrap {
            self.pending_wrap = false;
            if self.cursor.row >= self.rows {
                self.scroll_up();
            } else {
                self.cursor.row += 1;
            }
            self.cursor.column = 1;
        }

        let attrs = self.attrs.clone();
        let (row, col) = (self.cursor.row, self.cursor.column);
        self.line_mut(row).write(col, ch, attrs);
        self.cursor.column += 1;
        if self.cursor.column > self.cols {
            self.pending_wrap = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line_text(term: &Terminal, row: i32) -> String {
        term.viewport[row as usize - 1].cells().iter().map(|c| c.ch).collect()
    }

    #[test]
    fn s1_sgr_applies_and_resets() {
        let mut term = Terminal::new(24, 80, NamedPalette::Putty);
        term.update(b"A\x1b[31mB\x1b[0mC");
        let text = line_text(&term, 1);
        assert_eq!(&text[0..3], "ABC");
        assert_eq!(term.cursor(), Pos::new(1, 4));

        let cells = term.viewport[0].cells();
        assert_ne!(cells[0].attrs.fg, cells[1].attrs.fg);
        assert_eq!(cells[0].attrs, cells[2].attrs);
    }

    #[test]
    fn s2_cr_does_not_clear() {
        let mut term = Terminal::new(24, 80, NamedPalette::Putty);
        term.update(b"XY\rZ");
        let text = line_text(&term, 1);
        assert_eq!(&text[0..2], "ZY");
        assert_eq!(term.cursor(), Pos::new(1, 2));
    }

    #[test]
    fn s3_clear_and_home() {
        let mut term = Terminal::new(24, 80, NamedPalette::Putty);
        term.update(b"hello world");
        term.update(b"\x1b[2J\x1b[H*");
        assert_eq!(term.cursor(), Pos::new(1, 2));
        let text = line_text(&term, 1);
        assert_eq!(text.chars().next().unwrap(), '*');
        let text24 = line_text(&term, 24);
        assert!(text24.chars().all(|c| c == ' '));
    }

    #[test]
    fn s4_cursor_position_with_params() {
        let mut term = Terminal::new(24, 80, NamedPalette::Putty);
        term.update(b"\x1b[5;10Hhi");
        let text = line_text(&term, 5);
        assert_eq!(&text[9..11], "hi");
        assert_eq!(term.cursor(), Pos::new(5, 12));
    }

    #[test]
    fn s5_cursor_back_overwrites() {
        let mut term = Terminal::new(24, 80, NamedPalette::Putty);
        term.update(b"abc\x1b[2Dx");
        let text = line_text(&term, 1);
        assert_eq!(&text[0..3], "axc");
        assert_eq!(term.cursor().column, 3);
    }

    #[test]
    fn s6_primary_device_attributes_response() {
        let mut term = Terminal::new(24, 80, NamedPalette::Putty);
        let events = term.update(b"\x1b[c");
        assert_eq!(events, vec![Event::Response(b"\x1b[?64;c".to_vec())]);
    }

    #[test]
    fn s7_chunked_escape_matches_single_call() {
        let mut chunked = Terminal::new(24, 80, NamedPalette::Putty);
        chunked.update(b"hi\x1b");
        chunked.update(b"[31mX");

        let mut whole = Terminal::new(24, 80, NamedPalette::Putty);
        whole.update(b"hi\x1b[31mX");

        assert_eq!(line_text(&chunked, 24), line_text(&whole, 24));
        assert_eq!(chunked.cursor(), whole.cursor());
    }

    #[test]
    fn chunk_independence_holds_for_arbitrary_split() {
        let input = b"A\x1b[31mBC\x1b[2K\rZ\n\x1b[5;5Hhi\x1b[c";
        for split in 0..=input.len() {
            let (a, b) = input.split_at(split);
            let mut chunked = Terminal::new(24, 80, NamedPalette::Putty);
            chunked.update(a);
            chunked.update(b);

            let mut whole = Terminal::new(24, 80, NamedPalette::Putty);
            whole.update(input);

            assert_eq!(line_text(&chunked, 24), line_text(&whole, 24), "split at {split}");
            assert_eq!(chunked.cursor(), whole.cursor(), "split at {split}");
        }
    }

    #[test]
    fn cursor_stays_within_documented_bounds() {
        let mut term = Terminal::new(3, 5, NamedPalette::Putty);
        term.update(b"abcdefghij\n\n\n\n\n");
        assert!(term.cursor().row >= 1 && term.cursor().row <= term.rows());
        assert!(term.cursor().column >= 1 && term.cursor().column <= term.cols() + 1);
    }

    #[test]
    fn decsc_decrc_restores_position_and_attrs() {
        let mut term = Terminal::new(24, 80, NamedPalette::Putty);
        term.update(b"\x1b[10;10H\x1b[31m\x1b7");
        let saved = term.cursor();
        let saved_attrs = term.attrs.clone();
        term.update(b"moved text\x1b[5;5H\x1b[0m");
        term.update(b"\x1b8");
        assert_eq!(term.cursor(), saved);
        assert_eq!(term.attrs, saved_attrs);
    }

    #[test]
    fn scroll_up_preserves_scrollback_order_and_ids() {
        let mut term = Terminal::new(3, 5, NamedPalette::Putty);
        let first_bottom_id = term.viewport[2].id;
        term.update(b"a\nb\nc\nd\n");
        assert_eq!(term.scrollback.len(), 2);
        let ids: Vec<u64> = term.scrollback.iter().map(|l| l.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert!(term.viewport.last().unwrap().id > first_bottom_id);
        assert!(term.viewport.last().unwrap().id > *ids.last().unwrap());
    }

    #[test]
    fn max_lines_bounds_total_retained_lines() {
        let mut term = Terminal::with_config(Config {
            rows: 3,
            cols: 5,
            palette: NamedPalette::Putty,
            max_lines: Some(4),
            escape_guard_len: 256,
        })
        .unwrap();
        for _ in 0..20 {
            term.update(b"x\n");
        }
        assert_eq!(term.scrollback.len() + term.viewport.len(), 4);
    }

    #[test]
    fn autowrap_defers_to_next_character() {
        let mut term = Terminal::new(2, 3, NamedPalette::Putty);
        term.update(b"abc");
        assert_eq!(term.cursor(), Pos::new(1, 4));
        term.update(b"d");
        assert_eq!(term.cursor(), Pos::new(2, 2));
        assert_eq!(line_text(&term, 2).chars().next().unwrap(), 'd');
    }

    #[test]
    fn private_mode_toggles_cursor_visibility() {
        let mut term = Terminal::new(24, 80, NamedPalette::Putty);
        assert!(!term.cursor_visible);
        term.update(b"\x1b[?25h");
        assert!(term.cursor_visible);
        term.update(b"\x1b[?25l");
        assert!(!term.cursor_visible);
    }

    #[test]
    fn insert_and_delete_line() {
        let mut term = Terminal::new(4, 5, NamedPalette::Putty);
        term.update(b"1111\r\n2222\r\n3333\r\n4444");
        term.update(b"\x1b[2;1H\x1b[L");
        assert_eq!(line_text(&term, 2).trim(), "");
        assert_eq!(line_text(&term, 3).trim(), "2222");

        term.update(b"\x1b[2;1H\x1b[M");
        assert_eq!(line_text(&term, 2).trim(), "2222");
    }

    #[test]
    fn changed_lines_are_ordered_oldest_id_first() {
        // 4x5 terminal: viewport ids start at 0,1,2,3 for rows 1-4.
        // CSI L at row 3 allocates id 4, splicing it in above row 4;
        // CSI L at row 2 then allocates id 5, splicing it in above that.
        // Row order would report id 5 (row 2) before id 4 (row 3).
        let mut term = Terminal::new(4, 5, NamedPalette::Putty);
        term.update(b"\x1b[3;1H\x1b[L\x1b[2;1H\x1b[L");
        let ids: Vec<u64> = term
            .viewport
            .iter()
            .filter(|line| line.has_changed())
            .map(|line| line.id)
            .collect();
        assert!(ids.contains(&4) && ids.contains(&5));

        let events = term.update(b"\x1b[3;1H\x1b[L\x1b[2;1H\x1b[L");
        let changed_ids: Vec<u64> = events
            .iter()
            .filter_map(|e| match e {
                Event::LineChanged { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        let mut sorted = changed_ids.clone();
        sorted.sort();
        assert_eq!(changed_ids, sorted, "LineChanged events must be oldest-id-first");
    }

    #[test]
    fn unsupported_csi_is_reported() {
        let mut term = Terminal::new(24, 80, NamedPalette::Putty);
        let events = term.update(b"\x1b[5y");
        assert!(matches!(&events[0], Event::Unsupported(msg) if msg.contains("CSI")));
    }

    #[test]
    fn unsupported_private_mode_is_reported() {
        let mut term = Terminal::new(24, 80, NamedPalette::Putty);
        let events = term.update(b"\x1b[?9999h");
        assert!(matches!(&events[0], Event::Unsupported(msg) if msg.contains("?9999")));
    }

    #[test]
    fn reset_clears_everything() {
        let mut term = Terminal::new(24, 80, NamedPalette::Putty);
        term.update(b"hello\x1b[31m\n\n\n");
        term.reset();
        assert_eq!(term.cursor(), Pos::new(1, 1));
        assert!(!term.cursor_visible);
        assert_eq!(term.scrollback.len(), 0);
        assert_eq!(line_text(&term, 1).trim(), "");
    }
}
