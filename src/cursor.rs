//! A wrapping cursor over a `W`×`H` grid, optionally dragging a shape.

use core::fmt;
use num_traits::{PrimInt, Unsigned};

use crate::bitgrid::BitGrid;

/// One directional input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Toward row 0.
    North,
    /// Toward row `H - 1`.
    South,
    /// Toward column `W - 1`.
    East,
    /// Toward column 0.
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Direction that undoes this one.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Position on the grid. Both coordinates always lie in range.
///
/// The row mask is derived from `row` on demand, so the two can never
/// disagree after any sequence of moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cursor<const W: usize, const H: usize> {
    column: usize,
    row: usize,
}

impl<const W: usize, const H: usize> Cursor<W, H> {
    /// Cursor at (`column`, `row`), wrapped into the grid with a true modulo.
    pub fn new(column: isize, row: isize) -> Self {
        Cursor {
            column: wrap(column, W),
            row: wrap(row, H),
        }
    }

    /// Cursor at the board's starting position.
    pub fn home() -> Self {
        Self::new(
            crate::config::DEFAULT_COL as isize,
            crate::config::DEFAULT_ROW as isize,
        )
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Single set bit at position `row`.
    #[inline]
    pub fn row_mask<T: PrimInt + Unsigned>(&self) -> T {
        T::one() << self.row
    }

    /// Grid with only the cursor cell set.
    pub fn mask_grid<T: PrimInt + Unsigned>(&self) -> BitGrid<T, W, H> {
        let mut grid = BitGrid::new();
        grid.set_column(self.column, self.row_mask());
        grid
    }

    /// Moves the cursor one cell, wrapping at every edge.
    pub fn advance(&mut self, direction: Direction) {
        match direction {
            Direction::East => self.column = (self.column + 1) % W,
            Direction::West => self.column = (self.column + W - 1) % W,
            Direction::South => self.row = (self.row + 1) % H,
            Direction::North => self.row = (self.row + H - 1) % H,
        }
    }

    /// Moves the cursor and translates `grid` the same way, so a shape
    /// being positioned follows the cursor.
    pub fn advance_with_grid<T>(&mut self, grid: &mut BitGrid<T, W, H>, direction: Direction)
    where
        T: PrimInt + Unsigned,
    {
        match direction {
            Direction::North => grid.shift_rows_up(1),
            Direction::South => grid.shift_rows_down(1),
            Direction::West => grid.rotate_columns_left(1),
            Direction::East => grid.rotate_columns_right(1),
        }
        self.advance(direction);
    }
}

impl<const W: usize, const H: usize> Default for Cursor<W, H> {
    fn default() -> Self {
        Cursor { column: 0, row: 0 }
    }
}

impl<const W: usize, const H: usize> fmt::Debug for Cursor<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor {{ column: {}, row: {} }}", self.column, self.row)
    }
}

#[inline]
fn wrap(value: isize, modulus: usize) -> usize {
    value.rem_euclid(modulus as isize) as usize
}
