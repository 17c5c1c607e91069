use dotship::{Direction, LedCursor, LedGrid, GRID_COLS, GRID_ROWS};
use proptest::prelude::*;

/// Cursor that keeps its row mask as a separate field, adjusting it with
/// shifts and resetting it at fixed byte bounds.
struct ShiftedMaskCursor {
    column: i32,
    row: i32,
    row_mask: i32,
}

const MASK_MAX: i32 = 0x7f;
const MASK_MIN: i32 = 0x01;

impl ShiftedMaskCursor {
    fn advance(&mut self, direction: Direction) {
        match direction {
            Direction::East => self.column += 1,
            Direction::West => self.column -= 1,
            Direction::North => {
                self.row_mask >>= 1;
                self.row -= 1;
            }
            Direction::South => {
                self.row_mask <<= 1;
                self.row += 1;
            }
        }
        if self.row_mask > MASK_MAX {
            self.row_mask = MASK_MIN;
        } else if self.row_mask < MASK_MIN {
            self.row_mask = 1 << (GRID_ROWS - 1);
        }
        self.row = self.row.rem_euclid(GRID_ROWS as i32);
        self.column = self.column.rem_euclid(GRID_COLS as i32);
    }
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::South),
        Just(Direction::East),
        Just(Direction::West),
    ]
}

proptest! {
    #[test]
    fn south_full_lap_returns_home(col in 0isize..5, row in 0isize..7) {
        let start = LedCursor::new(col, row);
        let mut c = start;
        for _ in 0..GRID_ROWS {
            c.advance(Direction::South);
        }
        prop_assert_eq!(c, start);
        prop_assert_eq!(c.row_mask::<u8>(), start.row_mask::<u8>());
    }

    #[test]
    fn east_full_lap_returns_home(col in 0isize..5, row in 0isize..7) {
        let start = LedCursor::new(col, row);
        let mut c = start;
        for _ in 0..GRID_COLS {
            c.advance(Direction::East);
        }
        prop_assert_eq!(c, start);
    }

    #[test]
    fn derived_mask_matches_shifted_mask_on_seven_rows(moves in prop::collection::vec(direction(), 0..80)) {
        let mut ours = LedCursor::home();
        let mut shifted = ShiftedMaskCursor {
            column: ours.column() as i32,
            row: ours.row() as i32,
            row_mask: 1 << ours.row(),
        };
        for d in moves {
            ours.advance(d);
            shifted.advance(d);
            prop_assert_eq!(ours.row() as i32, shifted.row);
            prop_assert_eq!(ours.column() as i32, shifted.column);
            prop_assert_eq!(ours.row_mask::<u8>() as i32, shifted.row_mask);
            prop_assert_eq!(ours.row_mask::<u8>(), 1u8 << ours.row());
        }
    }

    #[test]
    fn dragged_marker_tracks_cursor(moves in prop::collection::vec(direction(), 0..80)) {
        let mut cursor = LedCursor::home();
        let mut marker: LedGrid = cursor.mask_grid();
        for d in moves {
            cursor.advance_with_grid(&mut marker, d);
            prop_assert_eq!(marker, cursor.mask_grid());
        }
    }

    #[test]
    fn opposite_moves_cancel(col in 0isize..5, row in 0isize..7, d in direction()) {
        let start = LedCursor::new(col, row);
        let mut c = start;
        c.advance(d);
        c.advance(d.opposite());
        prop_assert_eq!(c, start);
    }
}
