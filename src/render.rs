//! Column-at-a-time output to a dot-matrix display.

use num_traits::{PrimInt, Unsigned};

use crate::bitgrid::BitGrid;
use crate::config::{BLINK_OFF_FRAMES, BLINK_ON_FRAMES};

/// A display that lights one column of dots per call.
pub trait ColumnDisplay<T> {
    /// Show `bits` (bit `r` = row `r`) in column `col`.
    fn show_column(&mut self, col: usize, bits: T);
}

/// Scans a stack of layers onto a display, one column per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner<const W: usize> {
    column: usize,
}

impl<const W: usize> Scanner<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column the next tick will draw.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Draws the OR of `layers` for the current column and moves on.
    pub fn tick<T, D, const H: usize>(&mut self, layers: &[&BitGrid<T, W, H>], display: &mut D)
    where
        T: PrimInt + Unsigned,
        D: ColumnDisplay<T>,
    {
        let bits = layers
            .iter()
            .fold(T::zero(), |acc, layer| acc | layer.column(self.column));
        display.show_column(self.column, bits);
        self.column = (self.column + 1) % W;
    }

    /// Draws every column once.
    pub fn full_frame<T, D, const H: usize>(&mut self, layers: &[&BitGrid<T, W, H>], display: &mut D)
    where
        T: PrimInt + Unsigned,
        D: ColumnDisplay<T>,
    {
        for _ in 0..W {
            self.tick(layers, display);
        }
    }
}

/// Frame counter for a blinking cursor: dark for a few frames, then lit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blink {
    frame: u32,
}

impl Blink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cursor is lit this frame; advances the counter.
    pub fn tick(&mut self) -> bool {
        let lit = self.frame >= BLINK_OFF_FRAMES;
        self.frame = (self.frame + 1) % (BLINK_OFF_FRAMES + BLINK_ON_FRAMES);
        lit
    }
}

/// In-memory display that renders frames as text.
#[cfg(feature = "std")]
pub struct TextDisplay<T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned,
{
    frame: BitGrid<T, W, H>,
}

#[cfg(feature = "std")]
impl<T, const W: usize, const H: usize> TextDisplay<T, W, H>
where
    T: PrimInt + Unsigned,
{
    pub fn new() -> Self {
        Self {
            frame: BitGrid::new(),
        }
    }

    /// Everything shown so far, one word per column.
    pub fn frame(&self) -> &BitGrid<T, W, H> {
        &self.frame
    }
}

#[cfg(feature = "std")]
impl<T, const W: usize, const H: usize> Default for TextDisplay<T, W, H>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl<T, const W: usize, const H: usize> ColumnDisplay<T> for TextDisplay<T, W, H>
where
    T: PrimInt + Unsigned,
{
    fn show_column(&mut self, col: usize, bits: T) {
        self.frame.set_column(col, bits);
    }
}

#[cfg(feature = "std")]
impl<T, const W: usize, const H: usize> std::fmt::Display for TextDisplay<T, W, H>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.frame)
    }
}
