//! Torus lattice: coordinates, extents and Moore neighborhoods on a wrap-around 2D grid.
//!
//! # Invariants
//! - A [`Dimension`] always has positive width and height; it is validated
//!   once at construction and trusted everywhere after.
//! - Wrapping uses a non-negative remainder: a wrapped [`Point`] always lies
//!   in `[0, width) x [0, height)`.
//! - A [`Neighborhood`] always holds nine cells in [`OFFSETS`] order, center
//!   at [`Neighborhood::CENTER_INDEX`].
//!
//! Everything here is plain value arithmetic. Entity behavior, per-cell
//! state and stepping belong to the simulation built on top.

mod dimension;
mod error;
mod neighborhood;
mod point;

pub use dimension::Dimension;
pub use error::{LatticeError, Result};
pub use neighborhood::{Neighborhood, OFFSETS, neighborhood};
pub use point::{Direction, Point};

pub fn crate_info() -> &'static str {
    "torus-lattice v0.1.0"
}
