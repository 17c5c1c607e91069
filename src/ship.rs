//! Ship shapes and the in-place rotation used while placing them.

use log::{debug, trace};
use num_traits::{PrimInt, Unsigned};

use crate::bitgrid::{rotate_column_down, BitGrid};
use crate::common::PlacementError;
use crate::cursor::{Cursor, Direction};
use crate::fleet::Fleet;
use crate::input::FrameInput;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The orientation a rotation leads to.
    pub const fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Cells between the ship's first cell and the cursor. The cursor rides
    /// on the second cell of any ship longer than one.
    pub fn anchor_offset(&self) -> usize {
        if self.length > 1 {
            1
        } else {
            0
        }
    }
}

/// Whether the shape in `grid` may turn from `orientation`.
///
/// A horizontal run touching both the first and last column on the same
/// row wraps around the edge; stood upright it would not be one line.
pub fn can_rotate<T, const W: usize, const H: usize>(
    grid: &BitGrid<T, W, H>,
    orientation: Orientation,
) -> bool
where
    T: PrimInt + Unsigned,
{
    match orientation {
        Orientation::Horizontal => grid.column(0) & grid.column(W - 1) == T::zero(),
        Orientation::Vertical => true,
    }
}

/// Turns the line of `length` cells in `grid` by 90 degrees about the
/// cursor. Returns false, leaving everything untouched, for single-cell
/// ships and for illegal rotations.
pub fn rotate_ship<T, const W: usize, const H: usize>(
    grid: &mut BitGrid<T, W, H>,
    length: usize,
    cursor: &Cursor<W, H>,
    orientation: &mut Orientation,
) -> bool
where
    T: PrimInt + Unsigned,
{
    if length <= 1 {
        return false;
    }
    if !can_rotate(grid, *orientation) {
        trace!("rotation blocked: shape wraps the side edge");
        return false;
    }
    match *orientation {
        Orientation::Horizontal => {
            let row_bit = cursor.row_mask::<T>();
            let gathered = grid
                .columns()
                .iter()
                .fold(0u128, |acc, c| (acc << 1) | u128::from(*c & row_bit != T::zero()));
            if gathered == 0 {
                trace!("rotation skipped: no cells on cursor row {}", cursor.row());
                return false;
            }
            let run = gathered >> gathered.trailing_zeros();
            let Some(run) = num_traits::cast::<u128, T>(run) else {
                return false;
            };
            // lowest cell lands one row above the cursor
            let start = (cursor.row() + H - 1) % H;
            grid.clear();
            grid.set_column(cursor.column(), rotate_column_down(run, start, H));
        }
        Orientation::Vertical => {
            grid.clear();
            for c in 0..length.min(W) {
                grid.set_column(c, cursor.row_mask());
            }
            grid.rotate_columns_right((cursor.column() + W - 1) % W);
        }
    }
    *orientation = orientation.toggled();
    trace!("rotated to {:?} at {:?}", orientation, cursor);
    true
}

/// What a frame of input did to a placement session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementEvent {
    /// No input fired.
    Idle,
    /// Shape moved with the cursor.
    Moved,
    /// Shape turned.
    Rotated,
    /// Rotate pressed but not allowed here.
    RotateRejected,
    /// Shape merged into the fleet.
    Committed,
    /// Confirm pressed on top of a committed ship.
    Collision,
}

/// One ship being positioned: its shape, the cursor dragging it, and
/// the orientation it is currently in.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementSession<T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned,
{
    ship: ShipType,
    grid: BitGrid<T, W, H>,
    cursor: Cursor<W, H>,
    orientation: Orientation,
}

impl<T, const W: usize, const H: usize> PlacementSession<T, W, H>
where
    T: PrimInt + Unsigned,
{
    /// Start placing `ship` horizontally with the cursor at `cursor`.
    pub fn new(ship: ShipType, cursor: Cursor<W, H>) -> Result<Self, PlacementError> {
        let mut grid = BitGrid::try_new()?;
        let len = ship.length();
        if len == 0 {
            return Err(PlacementError::EmptyShip);
        }
        let max = W.min(H);
        if len > max {
            return Err(PlacementError::ShipTooLong { length: len, max });
        }
        for c in 0..len {
            grid.set_column(c, cursor.row_mask());
        }
        grid.rotate_columns_right((cursor.column() + W - ship.anchor_offset()) % W);
        debug!("placing {} (length {}) at {:?}", ship.name(), len, cursor);
        Ok(Self {
            ship,
            grid,
            cursor,
            orientation: Orientation::Horizontal,
        })
    }

    /// Ship being placed.
    pub fn ship(&self) -> ShipType {
        self.ship
    }

    /// Current footprint of the ship.
    pub fn grid(&self) -> &BitGrid<T, W, H> {
        &self.grid
    }

    pub fn cursor(&self) -> Cursor<W, H> {
        self.cursor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Drags the ship one cell with the cursor.
    pub fn advance(&mut self, direction: Direction) {
        self.cursor.advance_with_grid(&mut self.grid, direction);
    }

    /// Whether a rotate command would take effect now.
    pub fn can_rotate(&self) -> bool {
        self.ship.length() > 1 && can_rotate(&self.grid, self.orientation)
    }

    /// Rotates the ship about the cursor; see [`rotate_ship`].
    pub fn rotate(&mut self) -> bool {
        rotate_ship(
            &mut self.grid,
            self.ship.length(),
            &self.cursor,
            &mut self.orientation,
        )
    }

    /// Whether the ship sits on any committed cell.
    pub fn overlaps(&self, fleet: &Fleet<T, W, H>) -> bool {
        fleet.overlaps(&self.grid)
    }

    /// Commits the ship into `fleet` unless it collides.
    pub fn confirm(&self, fleet: &mut Fleet<T, W, H>) -> bool {
        if self.overlaps(fleet) {
            debug!("{} collides with a committed ship", self.ship.name());
            return false;
        }
        fleet.commit(&self.grid);
        debug!("{} committed at {:?}", self.ship.name(), self.cursor);
        true
    }

    /// Applies one frame of input: movement, then rotation, then confirm.
    /// Returns the last thing that happened.
    pub fn handle(&mut self, input: &FrameInput, fleet: &mut Fleet<T, W, H>) -> PlacementEvent {
        let mut event = PlacementEvent::Idle;
        if let Some(direction) = input.direction() {
            self.advance(direction);
            event = PlacementEvent::Moved;
        }
        if input.rotate && self.ship.length() > 1 {
            event = if self.rotate() {
                PlacementEvent::Rotated
            } else {
                PlacementEvent::RotateRejected
            };
        }
        if input.confirm {
            event = if self.confirm(fleet) {
                PlacementEvent::Committed
            } else {
                PlacementEvent::Collision
            };
        }
        event
    }
}

impl<T, const W: usize, const H: usize> core::fmt::Debug for PlacementSession<T, W, H>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PlacementSession {{ ship: \"{}\", orientation: {:?}, cursor: {:?}, grid: {:?} }}",
            self.ship.name(),
            self.orientation,
            self.cursor,
            self.grid,
        )
    }
}

/// Ship names are restored to the configured static names.
#[cfg(feature = "std")]
mod serde_support {
    use super::ShipType;
    use crate::config::ship_name_static;
    use serde::de::{Deserialize, Deserializer, Error};

    #[derive(serde::Deserialize)]
    struct RawShipType {
        name: String,
        length: usize,
    }

    impl<'de> Deserialize<'de> for ShipType {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawShipType::deserialize(deserializer)?;
            let name = ship_name_static(&raw.name)
                .ok_or_else(|| D::Error::custom(format!("unknown ship {:?}", raw.name)))?;
            Ok(ShipType::new(name, raw.length))
        }
    }
}
