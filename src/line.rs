use crate::attrs::Attrs;
use crate::cell::Cell;
use crate::position::Pos;

/// A single row of the viewport or scrollback: a fixed-width array of cells
/// plus the bookkeeping needed to detect whether it changed since the last
/// [`crate::Terminal::update`] call.
#[derive(Debug, Clone)]
pub struct Line {
    cells: Vec<Cell>,
    pub id: u64,
    changed: bool,
    cursor: Option<Pos>,
    old_cursor: Option<Pos>,
}

impl Line {
    pub fn new(id: u64, cols: i32, attrs: &Attrs) -> Self {
        let cells = (0..cols.max(0)).map(|_| Cell::blank(attrs.clone())).collect();
        Line {
            cells,
            id,
            changed: true,
            cursor: None,
            old_cursor: None,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write `ch` at 1-indexed `column`. No-op if out of bounds — callers are
    /// expected to have already clamped/wrapped the cursor.
    pub fn write(&mut self, column: i32, ch: char, attrs: Attrs) {
        if let Some(cell) = self.cells.get_mut(column as usize - 1) {
            *cell = Cell::new(ch, attrs);
            self.changed = true;
        }
    }

    /// Insert `n` blank cells at `column`, shifting the remainder right and
    /// dropping cells that fall off the right edge. Line length never changes.
    pub fn insert_chars(&mut self, column: i32, n: i32, attrs: &Attrs) {
        let original_len = self.cells.len();
        let idx = (column as usize - 1).min(self.cells.len());
        for _ in 0..n.max(0) {
            self.cells.insert(idx, Cell::blank(attrs.clone()));
        }
        self.cells.truncate(original_len);
        self.changed = true;
    }

    /// Delete `n` cells at `column`, shifting the remainder left and filling
    /// the newly exposed right edge with blanks.
    pub fn delete_chars(&mut self, column: i32, n: i32, attrs: &Attrs) {
        let cols = self.cells.len();
        let start = (column as usize - 1).min(cols);
        let count = (n.max(0) as usize).min(cols - start);
        self.cells.drain(start..start + count);
        for _ in 0..count {
            self.cells.push(Cell::blank(attrs.clone()));
        }
        self.changed = true;
    }

    /// Erase within the line. `mode`: 0 = column..end, 1 = start..=column, 2 = whole line.
    pub fn erase(&mut self, column: i32, mode: u16, attrs: &Attrs) {
        let cols = self.cells.len();
        let range: std::ops::Range<usize> = match mode {
            0 => (column as usize - 1).min(cols)..cols,
            1 => 0..(column as usize).min(cols),
            _ => 0..cols,
        };
        for cell in &mut self.cells[range] {
            *cell = Cell::blank(attrs.clone());
        }
        self.changed = true;
    }

    pub fn clear(&mut self, attrs: &Attrs) {
        self.erase(1, 2, attrs);
    }

    /// Record that the cursor currently sits on this line, marking the cell
    /// it occupies so rendering can invert it.
    pub fn set_cursor(&mut self, pos: Pos) {
        self.cursor = Some(pos);
        if let Some(cell) = self.cells.get_mut(pos.column as usize - 1) {
            cell.attrs.cursor_here = true;
        }
        self.changed = true;
    }

    /// Reset per-update bookkeeping: snapshot the previous cursor, clear the
    /// `changed` flag and any `cursor_here` markers left from the prior update.
    pub fn begin_update(&mut self) {
        self.old_cursor = self.cursor;
        self.cursor = None;
        self.changed = false;
        for cell in &mut self.cells {
            cell.attrs.cursor_here = false;
        }
    }

    /// Whether this line changed during the update just applied — either its
    /// cells mutated, or the cursor moved onto/off of it.
    pub fn has_changed(&self) -> bool {
        self.changed || self.cursor != self.old_cursor
    }

}
