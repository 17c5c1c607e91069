//! The committed ship set that shots are resolved against.

use log::debug;
use num_traits::{PrimInt, Unsigned};
use rand::Rng;

use crate::bitgrid::{BitGrid, GridError};
use crate::common::{PlacementError, ShotOutcome};
use crate::cursor::{Cursor, Direction};
use crate::ship::{PlacementSession, ShipType};

/// All ships committed so far, merged into one grid.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet<T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned,
{
    ships: BitGrid<T, W, H>,
    committed: usize,
}

impl<T, const W: usize, const H: usize> Fleet<T, W, H>
where
    T: PrimInt + Unsigned,
{
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self {
            ships: BitGrid::new(),
            committed: 0,
        }
    }

    /// Occupancy of every committed ship.
    pub fn grid(&self) -> &BitGrid<T, W, H> {
        &self.ships
    }

    /// Number of ships merged in so far.
    pub fn ships_committed(&self) -> usize {
        self.committed
    }

    /// Ship cells not yet hit.
    pub fn cells_remaining(&self) -> usize {
        self.ships.count_ones()
    }

    /// Returns `true` once every ship cell has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.committed > 0 && self.ships.is_empty()
    }

    /// Whether `shape` touches any committed cell.
    pub fn overlaps(&self, shape: &BitGrid<T, W, H>) -> bool {
        self.ships.overlaps(shape)
    }

    /// OR-merges a finished shape. Callers check [`Fleet::overlaps`] first.
    pub fn commit(&mut self, shape: &BitGrid<T, W, H>) {
        self.ships.merge(shape);
        self.committed += 1;
    }

    /// Resolve an opponent's shot. A hit cell is cleared, so the same cell
    /// cannot be hit twice.
    pub fn receive_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GridError> {
        if self.ships.get(row, col)? {
            self.ships.unset(row, col)?;
            debug!("hit at row {} col {}, {} cells left", row, col, self.cells_remaining());
            Ok(ShotOutcome::Hit)
        } else {
            Ok(ShotOutcome::Miss)
        }
    }

    /// Returns a placement session for `ship` that does not collide with
    /// the fleet, reached by random cursor moves and rotations.
    pub fn random_session<R: Rng>(
        &self,
        rng: &mut R,
        ship: ShipType,
    ) -> Result<PlacementSession<T, W, H>, PlacementError> {
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let mut session = PlacementSession::new(ship, Cursor::home())?;
            if rng.random() {
                session.rotate();
            }
            for _ in 0..rng.random_range(0..W * H) {
                let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
                session.advance(direction);
            }
            if !session.overlaps(self) {
                return Ok(session);
            }
        }
        Err(PlacementError::UnableToPlace)
    }
}

impl<T, const W: usize, const H: usize> Default for Fleet<T, W, H>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const W: usize, const H: usize> core::fmt::Debug for Fleet<T, W, H>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Fleet {{ committed: {}, ships: {:?} }}",
            self.committed, self.ships
        )
    }
}
