//! Fact grid - the rows x cols picture of a multiplication fact
//!
//! The grid is always 9x9 so the frame never changes size between questions;
//! only the top-left `rows x cols` rectangle is active. Active cells are
//! revealed one by one in row-major order, which makes the fill-in read
//! left-to-right, top-to-bottom.

use crate::types::{GRID_SIZE, REVEAL_START_MS, REVEAL_STEP_MS};

const N: usize = GRID_SIZE as usize;

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridCell {
    /// Placeholder outside the fact rectangle
    #[default]
    Empty,
    /// Part of the fact; `reveal_index` is its row-major position among active cells
    Active { glyph: char, reveal_index: u8 },
}

impl GridCell {
    pub fn is_active(&self) -> bool {
        matches!(self, GridCell::Active { .. })
    }

    pub fn glyph(&self) -> Option<char> {
        match self {
            GridCell::Active { glyph, .. } => Some(*glyph),
            GridCell::Empty => None,
        }
    }

    /// When this cell pops in, relative to the question being shown.
    pub fn reveal_delay_ms(&self) -> Option<u32> {
        match self {
            GridCell::Active { reveal_index, .. } => Some(reveal_delay_ms(*reveal_index as u32)),
            GridCell::Empty => None,
        }
    }
}

/// Delay of the `index`-th active cell.
pub fn reveal_delay_ms(index: u32) -> u32 {
    REVEAL_START_MS + index * REVEAL_STEP_MS
}

/// Fixed 9x9 layout for one fact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactGrid {
    rows: u8,
    cols: u8,
    glyph: char,
    cells: [[GridCell; N]; N],
}

impl FactGrid {
    /// Lay out `rows x cols` active cells carrying `glyph`.
    ///
    /// `rows` and `cols` are clamped into 1..=9.
    ///
    /// # Examples
    ///
    /// ```
    /// use times_quiz_core::FactGrid;
    ///
    /// let grid = FactGrid::render(4, 3, '🍎');
    /// assert_eq!(grid.active_count(), 12);
    /// assert!(grid.cell(3, 2).unwrap().is_active());
    /// assert!(!grid.cell(4, 0).unwrap().is_active());
    /// ```
    pub fn render(rows: u8, cols: u8, glyph: char) -> Self {
        let rows = rows.clamp(1, GRID_SIZE);
        let cols = cols.clamp(1, GRID_SIZE);

        let mut cells = [[GridCell::Empty; N]; N];
        let mut reveal_index = 0u8;
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if r < rows as usize && c < cols as usize {
                    *cell = GridCell::Active {
                        glyph,
                        reveal_index,
                    };
                    reveal_index += 1;
                }
            }
        }

        Self {
            rows,
            cols,
            glyph,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn cells(&self) -> &[[GridCell; N]; N] {
        &self.cells
    }

    pub fn cell(&self, row: u8, col: u8) -> Option<GridCell> {
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    pub fn active_count(&self) -> u32 {
        self.rows as u32 * self.cols as u32
    }

    /// Active cells in reveal order as `(row, col, delay_ms)`.
    pub fn reveal_order(&self) -> impl Iterator<Item = (u8, u8, u32)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                cell.reveal_delay_ms()
                    .map(|delay| (r as u8, c as u8, delay))
            })
        })
    }

    /// Number of active cells visible `elapsed_ms` after the question appeared.
    pub fn revealed_count(&self, elapsed_ms: u32) -> u32 {
        if elapsed_ms < REVEAL_START_MS {
            return 0;
        }
        let shown = (elapsed_ms - REVEAL_START_MS) / REVEAL_STEP_MS + 1;
        shown.min(self.active_count())
    }

    pub fn is_fully_revealed(&self, elapsed_ms: u32) -> bool {
        self.revealed_count(elapsed_ms) == self.active_count()
    }

    /// Whether the cell at (row, col) is active and already popped in.
    pub fn is_revealed(&self, row: u8, col: u8, elapsed_ms: u32) -> bool {
        match self.cell(row, col) {
            Some(GridCell::Active { reveal_index, .. }) => {
                (reveal_index as u32) < self.revealed_count(elapsed_ms)
            }
            _ => false,
        }
    }
}

/// Free-function form of [`FactGrid::render`].
pub fn render(rows: u8, cols: u8, glyph: char) -> FactGrid {
    FactGrid::render(rows, cols, glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_cells_match_rectangle_for_all_sizes() {
        for rows in 1..=9u8 {
            for cols in 1..=9u8 {
                let grid = render(rows, cols, '🐶');
                let mut active = 0;
                for r in 0..GRID_SIZE {
                    for c in 0..GRID_SIZE {
                        let cell = grid.cell(r, c).unwrap();
                        let inside = r < rows && c < cols;
                        assert_eq!(cell.is_active(), inside, "rows={} cols={} r={} c={}", rows, cols, r, c);
                        if inside {
                            assert_eq!(cell.glyph(), Some('🐶'));
                            active += 1;
                        } else {
                            assert_eq!(cell.glyph(), None);
                        }
                    }
                }
                assert_eq!(active, rows as u32 * cols as u32);
                assert_eq!(grid.active_count(), active);
            }
        }
    }

    #[test]
    fn test_four_by_three() {
        let grid = render(4, 3, '🍎');
        let active: Vec<(u8, u8)> = grid.reveal_order().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(active.len(), 12);
        assert!(active.iter().all(|&(r, c)| r < 4 && c < 3));
    }

    #[test]
    fn test_reveal_order_is_row_major_and_strictly_increasing() {
        let grid = render(5, 7, '🚀');
        let order: Vec<(u8, u8, u32)> = grid.reveal_order().collect();
        assert_eq!(order[0], (0, 0, REVEAL_START_MS));
        assert_eq!(order[1], (0, 1, REVEAL_START_MS + REVEAL_STEP_MS));
        assert_eq!(order[7], (1, 0, REVEAL_START_MS + 7 * REVEAL_STEP_MS));
        for pair in order.windows(2) {
            assert!(pair[0].2 < pair[1].2);
            assert!((pair[0].0, pair[0].1) < (pair[1].0, pair[1].1));
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(6, 8, '🐼'), render(6, 8, '🐼'));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let grid = render(0, 12, '⚽');
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 9);
        assert_eq!(grid.active_count(), 9);
    }

    #[test]
    fn test_revealed_count_progression() {
        let grid = render(2, 2, '🍓');
        assert_eq!(grid.revealed_count(0), 0);
        assert_eq!(grid.revealed_count(REVEAL_START_MS - 1), 0);
        assert_eq!(grid.revealed_count(REVEAL_START_MS), 1);
        assert_eq!(grid.revealed_count(REVEAL_START_MS + REVEAL_STEP_MS), 2);
        assert!(!grid.is_fully_revealed(REVEAL_START_MS + 2 * REVEAL_STEP_MS));
        assert!(grid.is_fully_revealed(REVEAL_START_MS + 3 * REVEAL_STEP_MS));
        assert_eq!(grid.revealed_count(10_000), 4);
    }

    #[test]
    fn test_is_revealed_follows_row_major_order() {
        let grid = render(2, 3, '🍔');
        let t = REVEAL_START_MS + 2 * REVEAL_STEP_MS;
        assert!(grid.is_revealed(0, 2, t));
        assert!(!grid.is_revealed(1, 0, t));
        assert!(!grid.is_revealed(8, 8, 10_000));
    }
}
