//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one frame)
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use level::{Level, LevelError};
pub use state::{GameState, Mode, Obstacle, Phase, Player, Portal};
pub use tick::{TickInput, tick};
