//! Packed boolean grid primitive used throughout the feasibility design
//! generator: [`grid::BoolGrid`] and its mutable counterpart
//! [`grid::BoolGridMut`].

mod error;
mod grid;

pub use error::{Error, Result};
pub use grid::{BoolGrid, BoolGridMut};
