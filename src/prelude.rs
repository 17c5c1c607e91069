//! Commonly used types and utilities for ease of import.

pub use crate::{
    can_rotate, rotate_ship, BitGrid, Cursor, Direction, Fleet, FrameInput, LedCursor, LedGrid,
    Orientation, PlacementEvent, PlacementSession, ShipType, ShotOutcome, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, TextDisplay};
