#![cfg_attr(not(feature = "std"), no_std)]

//! Bit-packed grid engine for dot-matrix battleship: column-word grids,
//! a wrapping cursor, and in-place ship rotation during placement.

#[cfg(feature = "std")]
extern crate std;
mod bitgrid;
mod common;
mod config;
mod cursor;
mod fleet;
mod input;
#[cfg(feature = "std")]
mod logging;
mod position;
pub mod prelude;
mod render;
mod ship;
mod shots;

pub use bitgrid::aliases;
pub use bitgrid::{
    rotate_column_down, rotate_column_up, step_column_down, step_column_up, wrap_overflow_bit,
    wrap_underflow_bit, BitGrid, GridError, SetBits, MAX_COLUMNS,
};
pub use common::*;
pub use config::*;
pub use cursor::*;
pub use fleet::*;
pub use input::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use position::*;
pub use render::*;
pub use ship::*;
pub use shots::*;
