//! State and turn algebra for a 3x3x3 twisty puzzle.
//!
//! The cube is held two ways that are kept in agreement:
//!
//! - [`FaceletState`], the 54-symbol string exchanged with a solver
//! - [`PieceModel`], 26 cubies each with a grid position and orientation,
//!   which is what a renderer needs
//!
//! Moves are resolved through [`MOVE_TABLE`] into quarter turns, and every
//! mapping between the two representations is derived from
//! [`QuarterTurn::transform()`].
//!
//! Nothing here does I/O or locking. [`CubeController`] adds a move queue
//! with an explicit busy state for callers that animate moves.

#[macro_use]
extern crate lazy_static;

mod controller;
mod error;
mod facelets;
mod geometry;
mod moves;
mod orientation;
mod pieces;
mod sign;
pub mod solver;

pub use controller::{CubeController, OperationKind, Status};
pub use error::CubeError;
pub use facelets::{FACELET_COUNT, FaceletState, SOLVED_STR};
pub use geometry::{Axis, Cell, CubieKind, Face, Facelet};
pub use moves::{
    Amount, LayerTwist, MOVE_TABLE, Move, MoveFamily, MoveSequence, MoveTableEntry,
    UnknownMovePolicy,
};
pub use orientation::{Orientation, QuarterTurn};
pub use pieces::{Cubie, PieceModel, Verification};
pub use sign::Sign;

#[cfg(test)]
mod tests;
