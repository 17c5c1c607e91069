use crate::bitgrid::BitGrid;
use crate::cursor::Cursor;
use crate::ship::ShipType;

/// Columns on the LED matrix.
pub const GRID_COLS: usize = 5;
/// Rows on the LED matrix.
pub const GRID_ROWS: usize = 7;

/// Column the cursor starts on, and returns to after each commit.
pub const DEFAULT_COL: usize = 2;
/// Row the cursor starts on.
pub const DEFAULT_ROW: usize = 3;

pub const NUM_SHIPS: usize = 2;
pub const FLEET: [ShipType; NUM_SHIPS] = [ShipType::new("Cruiser", 3), ShipType::new("Dinghy", 1)];

/// Total number of ship cells, i.e. hits needed to win.
pub const TOTAL_SHIP_CELLS: usize = 3 + 1;

/// Frames the cursor stays dark, then lit, per blink period.
pub const BLINK_OFF_FRAMES: u32 = 5;
pub const BLINK_ON_FRAMES: u32 = 5;

/// Bits of a position byte allocated to the column; the rest hold the row.
pub const COL_BITS: u32 = 4;

/// Grid used on the LED board.
pub type LedGrid = BitGrid<u8, GRID_COLS, GRID_ROWS>;
/// Cursor used on the LED board.
pub type LedCursor = Cursor<GRID_COLS, GRID_ROWS>;

/// Convert a ship name string to the canonical static name used in the
/// configuration. Returns `None` if the name does not match any fleet ship.
pub fn ship_name_static(name: &str) -> Option<&'static str> {
    FLEET.iter().find(|def| def.name() == name).map(|def| def.name())
}
