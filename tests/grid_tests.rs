use times_quiz::core::grid::render;
use times_quiz::core::{FactGrid, GridCell};
use times_quiz::types::{REVEAL_START_MS, REVEAL_STEP_MS};

#[test]
fn test_active_rectangle_for_every_fact() {
    for rows in 1..=9u8 {
        for cols in 1..=9u8 {
            let grid = FactGrid::render(rows, cols, '🐼');
            assert_eq!(grid.active_count(), rows as u32 * cols as u32);
            for r in 0..9u8 {
                for c in 0..9u8 {
                    let cell = grid.cell(r, c).unwrap();
                    assert_eq!(cell.is_active(), r < rows && c < cols, "{rows}x{cols} at ({r},{c})");
                }
            }
        }
    }
}

#[test]
fn test_four_by_three_apples() {
    let grid = render(4, 3, '🍎');
    assert_eq!(grid.active_count(), 12);
    assert_eq!(grid.cell(3, 2).unwrap().glyph(), Some('🍎'));
    assert_eq!(grid.cell(4, 0), Some(GridCell::Empty));
    assert_eq!(grid.cell(0, 3), Some(GridCell::Empty));
    assert_eq!(grid.cell(9, 0), None);
}

#[test]
fn test_reveal_delays_increase_row_major() {
    let grid = FactGrid::render(9, 9, '🌟');
    let order: Vec<(u8, u8, u32)> = grid.reveal_order().collect();
    assert_eq!(order.len(), 81);
    assert_eq!(order[0], (0, 0, REVEAL_START_MS));
    assert_eq!(order[1], (0, 1, REVEAL_START_MS + REVEAL_STEP_MS));
    assert_eq!(order[9].0, 1);
    for pair in order.windows(2) {
        assert!(pair[0].2 < pair[1].2);
        assert!((pair[0].0, pair[0].1) < (pair[1].0, pair[1].1));
    }
}

#[test]
fn test_reveal_progress() {
    let grid = FactGrid::render(2, 2, '🚗');
    assert_eq!(grid.revealed_count(0), 0);
    assert_eq!(grid.revealed_count(REVEAL_START_MS), 1);
    assert!(grid.is_revealed(0, 0, REVEAL_START_MS));
    assert!(!grid.is_revealed(0, 1, REVEAL_START_MS));
    assert!(!grid.is_fully_revealed(REVEAL_START_MS + 2 * REVEAL_STEP_MS));
    assert!(grid.is_fully_revealed(REVEAL_START_MS + 3 * REVEAL_STEP_MS));
}

#[test]
fn test_out_of_range_sizes_are_clamped() {
    let grid = FactGrid::render(0, 12, '🍔');
    assert_eq!(grid.rows(), 1);
    assert_eq!(grid.cols(), 9);
    assert_eq!(grid.active_count(), 9);
}
