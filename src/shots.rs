//! Hit and miss overlays of the shots fired at the opponent.

use num_traits::{PrimInt, Unsigned};

use crate::bitgrid::BitGrid;
use crate::common::ShotOutcome;
use crate::cursor::Cursor;

/// Public record of our shots against the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotBoard<T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned,
{
    hits: BitGrid<T, W, H>,
    misses: BitGrid<T, W, H>,
}

impl<T, const W: usize, const H: usize> ShotBoard<T, W, H>
where
    T: PrimInt + Unsigned,
{
    pub fn new() -> Self {
        Self {
            hits: BitGrid::new(),
            misses: BitGrid::new(),
        }
    }

    pub fn hits(&self) -> &BitGrid<T, W, H> {
        &self.hits
    }

    pub fn misses(&self) -> &BitGrid<T, W, H> {
        &self.misses
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// Marks the cell under `cursor` with the reply to our shot.
    pub fn record(&mut self, cursor: &Cursor<W, H>, outcome: ShotOutcome) {
        let target = match outcome {
            ShotOutcome::Hit => &mut self.hits,
            ShotOutcome::Miss => &mut self.misses,
        };
        let col = cursor.column();
        target.set_column(col, target.column(col) | cursor.row_mask());
    }

    /// Whether the cell under `cursor` has been fired at before.
    pub fn already_fired(&self, cursor: &Cursor<W, H>) -> bool {
        let fired = self.hits | self.misses;
        fired.overlaps(&cursor.mask_grid())
    }
}

impl<T, const W: usize, const H: usize> Default for ShotBoard<T, W, H>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_land_in_the_right_layer() {
        let mut board = ShotBoard::<u8, 5, 7>::new();
        let c = Cursor::new(4, 6);
        assert!(!board.already_fired(&c));
        board.record(&c, ShotOutcome::Miss);
        board.record(&Cursor::new(0, 0), ShotOutcome::Hit);
        assert!(board.already_fired(&c));
        assert_eq!(board.misses().column(4), 0b0100_0000);
        assert_eq!(board.hits().column(0), 0b0000_0001);
        assert_eq!(board.hit_count(), 1);
    }
}
