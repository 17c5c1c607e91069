//! Common types: placement and position errors, shot outcomes.

use crate::bitgrid::GridError;

/// Result of a shot against a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed on a ship cell.
    Hit,
    /// Shot landed on open water.
    Miss,
}

impl ShotOutcome {
    /// Single-byte reply sent back to the shooter.
    pub const fn to_byte(self) -> u8 {
        match self {
            ShotOutcome::Hit => b'H',
            ShotOutcome::Miss => b'M',
        }
    }

    /// Parses a reply byte; anything other than `H`/`M` is not a reply.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'H' => Some(ShotOutcome::Hit),
            b'M' => Some(ShotOutcome::Miss),
            _ => None,
        }
    }
}

/// Errors raised when configuring a placement session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Underlying grid error (e.g., unsupported dimensions).
    Grid(GridError),
    /// Ship has no cells.
    EmptyShip,
    /// Ship does not fit in both orientations.
    ShipTooLong { length: usize, max: usize },
    /// Random placement found no free spot.
    UnableToPlace,
}

impl From<GridError> for PlacementError {
    fn from(err: GridError) -> Self {
        PlacementError::Grid(err)
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::Grid(e) => write!(f, "Grid error: {}", e),
            PlacementError::EmptyShip => write!(f, "Ship length must be at least one"),
            PlacementError::ShipTooLong { length, max } => {
                write!(f, "Ship length {} exceeds grid limit {}", length, max)
            }
            PlacementError::UnableToPlace => write!(f, "Unable to place ship"),
        }
    }
}

/// Errors decoding a turn-exchange position byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// Zero byte, meaning no message has arrived.
    Empty,
    /// Decoded coordinates fall outside the grid (one-based, as sent).
    OutOfRange { row: u8, col: u8 },
    /// Coordinates cannot be represented in the byte split.
    Unencodable { row: usize, col: usize },
}

impl core::fmt::Display for PositionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PositionError::Empty => write!(f, "No position in message"),
            PositionError::OutOfRange { row, col } => {
                write!(f, "Position row={} col={} is off the grid", row, col)
            }
            PositionError::Unencodable { row, col } => {
                write!(f, "Position row={} col={} does not fit in one byte", row, col)
            }
        }
    }
}
