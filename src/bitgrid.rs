//! A fixed-size column-packed bit grid using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. A grid of
//! `W` columns by `H` rows is stored as `[T; W]`, one unsigned word per
//! column, where bit `r` of column `c` is the cell at row `r`. Row 0 is the
//! top of the display. Bits at or above `H` are padding and are kept clear;
//! at least one padding bit is required so a shifted-out row can be caught
//! and wrapped back in.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned};

/// Widest grid whose rows can be gathered into one rotation accumulator.
pub const MAX_COLUMNS: usize = u128::BITS as usize;

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid has no columns or no rows.
    Empty,
    /// `H` leaves no padding bit in the column word `T`.
    HeightTooLarge { height: usize, word_bits: usize },
    /// `W` exceeds [`MAX_COLUMNS`].
    TooWide { width: usize },
    /// Row or column index is out of bounds.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "Empty: grid needs at least one row and column"),
            GridError::HeightTooLarge { height, word_bits } => write!(
                f,
                "HeightTooLarge: H={} leaves no padding bit in a {}-bit column",
                height, word_bits
            ),
            GridError::TooWide { width } => {
                write!(f, "TooWide: W={} exceeds {} columns", width, MAX_COLUMNS)
            }
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// Moves a bit that was shifted up to position `height` back into row 0.
#[inline]
pub fn wrap_overflow_bit<T>(value: T, height: usize) -> T
where
    T: PrimInt + Unsigned,
{
    let overflow = T::one() << height;
    if value & overflow != T::zero() {
        (value & !overflow) | T::one()
    } else {
        value
    }
}

/// Re-inserts row 0 of `before` at row `height - 1` of `shifted`, where
/// `shifted` is `before >> 1`.
#[inline]
pub fn wrap_underflow_bit<T>(before: T, shifted: T, height: usize) -> T
where
    T: PrimInt + Unsigned,
{
    if before & T::one() != T::zero() {
        shifted | (T::one() << (height - 1))
    } else {
        shifted
    }
}

/// One circular step toward higher rows (down the display).
#[inline]
pub fn step_column_down<T>(value: T, height: usize) -> T
where
    T: PrimInt + Unsigned,
{
    wrap_overflow_bit(value << 1, height)
}

/// One circular step toward lower rows (up the display).
#[inline]
pub fn step_column_up<T>(value: T, height: usize) -> T
where
    T: PrimInt + Unsigned,
{
    wrap_underflow_bit(value, value >> 1, height)
}

/// Circularly moves every bit of an `height`-bit column `steps` rows down.
pub fn rotate_column_down<T>(value: T, steps: usize, height: usize) -> T
where
    T: PrimInt + Unsigned,
{
    (0..steps % height).fold(value, |v, _| step_column_down(v, height))
}

/// Circularly moves every bit of an `height`-bit column `steps` rows up.
pub fn rotate_column_up<T>(value: T, steps: usize, height: usize) -> T
where
    T: PrimInt + Unsigned,
{
    (0..steps % height).fold(value, |v, _| step_column_up(v, height))
}

/// A `W`-column by `H`-row bit grid, one word `T` per column.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitGrid<T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned,
{
    columns: [T; W],
}

impl<T, const W: usize, const H: usize> BitGrid<T, W, H>
where
    T: PrimInt + Unsigned,
{
    /// Bits available in one column word.
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Mask of the `H` significant bits of a column.
    #[inline]
    pub fn column_mask() -> T {
        (T::one() << H) - T::one()
    }

    /// Create a new empty grid without the dimension check.
    #[inline]
    pub fn new() -> Self {
        debug_assert!(Self::check_dimensions().is_ok());
        BitGrid {
            columns: [T::zero(); W],
        }
    }

    /// Fallible constructor: rejects dimensions the engine cannot handle.
    pub fn try_new() -> Result<Self, GridError> {
        Self::check_dimensions()?;
        Ok(BitGrid {
            columns: [T::zero(); W],
        })
    }

    fn check_dimensions() -> Result<(), GridError> {
        if W == 0 || H == 0 {
            Err(GridError::Empty)
        } else if H >= Self::WORD_BITS {
            Err(GridError::HeightTooLarge {
                height: H,
                word_bits: Self::WORD_BITS,
            })
        } else if W > MAX_COLUMNS {
            Err(GridError::TooWide { width: W })
        } else {
            Ok(())
        }
    }

    /// Builds a grid from raw column words, masking out padding bits.
    pub fn from_columns(columns: [T; W]) -> Self {
        let mask = Self::column_mask();
        let mut grid = Self::new();
        for (dst, src) in grid.columns.iter_mut().zip(columns) {
            *dst = src & mask;
        }
        grid
    }

    /// Creates a grid from an iterator over `(row, col)` positions.
    pub fn from_cells<I>(cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new();
        for (r, c) in cells {
            grid.set(r, c)?;
        }
        Ok(grid)
    }

    /// Raw column words.
    #[inline]
    pub fn columns(&self) -> &[T; W] {
        &self.columns
    }

    /// Raw word of column `col`, or zero when out of range.
    #[inline]
    pub fn column(&self, col: usize) -> T {
        self.columns.get(col).copied().unwrap_or_else(T::zero)
    }

    /// Overwrites column `col` with `value` (padding masked). Out-of-range
    /// columns are ignored.
    #[inline]
    pub fn set_column(&mut self, col: usize, value: T) {
        if let Some(c) = self.columns.get_mut(col) {
            *c = value & Self::column_mask();
        }
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.columns.iter().map(|c| c.count_ones() as usize).sum()
    }

    /// Returns true if no cell is set.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|c| c.is_zero())
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_bounds(row, col)?;
        Ok((self.columns[col] >> row) & T::one() != T::zero())
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.columns[col] = self.columns[col] | (T::one() << row);
        Ok(())
    }

    /// Clears the cell at (row, col).
    pub fn unset(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.columns[col] = self.columns[col] & !(T::one() << row);
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= H || col >= W {
            Err(GridError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Sets every column to zero.
    #[inline]
    pub fn clear(&mut self) {
        self.columns = [T::zero(); W];
    }

    /// Cyclically rotates the column sequence left: column 0 receives what
    /// was at column `moves`.
    pub fn rotate_columns_left(&mut self, moves: usize) {
        self.columns.rotate_left(moves % W);
    }

    /// Cyclically rotates the column sequence right: column `moves`
    /// receives what was at column 0.
    pub fn rotate_columns_right(&mut self, moves: usize) {
        self.columns.rotate_right(moves % W);
    }

    /// Moves every column's rows toward row 0, row 0 wrapping to row `H-1`.
    pub fn shift_rows_up(&mut self, moves: usize) {
        for c in self.columns.iter_mut() {
            *c = rotate_column_up(*c, moves, H);
        }
    }

    /// Moves every column's rows toward row `H-1`, which wraps to row 0.
    pub fn shift_rows_down(&mut self, moves: usize) {
        for c in self.columns.iter_mut() {
            *c = rotate_column_down(*c, moves, H);
        }
    }

    /// Returns true if any column shares a set bit with `other`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.columns
            .iter()
            .zip(other.columns.iter())
            .any(|(a, b)| *a & *b != T::zero())
    }

    /// OR-merges `other` into this grid.
    pub fn merge(&mut self, other: &Self) {
        for (a, b) in self.columns.iter_mut().zip(other.columns.iter()) {
            *a = *a | *b;
        }
    }

    /// Expands the packed columns into a row-major boolean matrix.
    pub fn to_matrix(&self) -> [[bool; W]; H] {
        let mut matrix = [[false; W]; H];
        for (r, row) in matrix.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (self.columns[c] >> r) & T::one() != T::zero();
            }
        }
        matrix
    }

    /// Iterator over the set cells as `(row, col)`, column by column.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, W, H> {
        SetBits { grid: self, idx: 0 }
    }
}

impl<T, const W: usize, const H: usize> Default for BitGrid<T, W, H>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const W: usize, const H: usize> BitGrid<T, W, H>
where
    T: PrimInt + Unsigned,
{
    fn write_rows(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..H {
            for c in 0..W {
                let cell = if (self.columns[c] >> r) & T::one() != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", cell)?;
            }
            if r + 1 < H {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T, const W: usize, const H: usize> fmt::Debug for BitGrid<T, W, H>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}, {}, {}>:", any::type_name::<T>(), W, H)?;
        self.write_rows(f)?;
        writeln!(f)
    }
}

impl<T, const W: usize, const H: usize> fmt::Display for BitGrid<T, W, H>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rows(f)
    }
}

/// Iterator over the set cells of a grid.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned,
{
    grid: &'a BitGrid<T, W, H>,
    idx: usize,
}

impl<'a, T, const W: usize, const H: usize> Iterator for SetBits<'a, T, W, H>
where
    T: PrimInt + Unsigned,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < W * H {
            let (col, row) = (self.idx / H, self.idx % H);
            self.idx += 1;
            if (self.grid.columns[col] >> row) & T::one() != T::zero() {
                return Some((row, col));
            }
        }
        None
    }
}

/// Macro for compile-time assertion of grid dimensions and creation.
#[macro_export]
macro_rules! bitgrid {
    ($T:ty, $W:expr, $H:expr) => {{
        const _ASSERT: () = assert!(
            $W > 0 && $H > 0 && $H < core::mem::size_of::<$T>() * 8 && $W <= 128,
            "grid dimensions do not fit the column word"
        );
        $crate::BitGrid::<$T, $W, $H>::new()
    }};
}

/// Bitwise AND of two grids.
impl<T, const W: usize, const H: usize> BitAnd for BitGrid<T, W, H>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitand(mut self, rhs: Self) -> Self {
        self &= rhs;
        self
    }
}

/// Bitwise OR of two grids.
impl<T, const W: usize, const H: usize> BitOr for BitGrid<T, W, H>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitor(mut self, rhs: Self) -> Self {
        self.merge(&rhs);
        self
    }
}

impl<T, const W: usize, const H: usize> BitAndAssign for BitGrid<T, W, H>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        for (a, b) in self.columns.iter_mut().zip(rhs.columns) {
            *a = *a & b;
        }
    }
}

impl<T, const W: usize, const H: usize> BitOrAssign for BitGrid<T, W, H>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

/// Serialized as a sequence of `W` column words.
#[cfg(feature = "std")]
mod serde_support {
    use super::BitGrid;
    use num_traits::{PrimInt, Unsigned};
    use serde::de::{Deserialize, Deserializer, Error};
    use serde::ser::{Serialize, SerializeSeq, Serializer};

    impl<T, const W: usize, const H: usize> Serialize for BitGrid<T, W, H>
    where
        T: PrimInt + Unsigned + Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(W))?;
            for c in self.columns() {
                seq.serialize_element(c)?;
            }
            seq.end()
        }
    }

    impl<'de, T, const W: usize, const H: usize> Deserialize<'de> for BitGrid<T, W, H>
    where
        T: PrimInt + Unsigned + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let words = Vec::<T>::deserialize(deserializer)?;
            let len = words.len();
            let columns: [T; W] = words
                .try_into()
                .map_err(|_| D::Error::invalid_length(len, &"one word per grid column"))?;
            Ok(BitGrid::from_columns(columns))
        }
    }
}

/// Convenience aliases for common grid sizes.
pub mod aliases {
    use super::BitGrid;

    /// 8×8 grid in `u16` columns.
    pub type Grid8x8 = BitGrid<u16, 8, 8>;
    /// W×H grid in `u8` columns.
    pub type G8<const W: usize, const H: usize> = BitGrid<u8, W, H>;
    /// W×H grid in `u16` columns.
    pub type G16<const W: usize, const H: usize> = BitGrid<u16, W, H>;
    /// W×H grid in `u32` columns.
    pub type G32<const W: usize, const H: usize> = BitGrid<u32, W, H>;
}
