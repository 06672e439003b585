//! Canvas 2D rendering
//!
//! Pure read of the game state; nothing here mutates the sim.

pub mod canvas;

pub use canvas::{draw, mode_color};
