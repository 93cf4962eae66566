//! Shared types for boardsim component boards.
//!
//! This crate defines the data structures used across all boardsim components:
//! - Board coordinates and grid specifications
//! - Component kinds and their capability table
//! - Placed component instances and the cables between them
//! - Board settings and the on-disk board file

mod board;
mod cable;
mod component;
mod grid;
mod kind;
mod point;
mod settings;

pub use board::*;
pub use cable::*;
pub use component::*;
pub use grid::*;
pub use kind::*;
pub use point::*;
pub use settings::*;

/// Default grid cell size (in board units)
pub const GRID_SIZE: f32 = 10.0;
