//! Cube Rush - a side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, portals, game state)
//! - `renderer`: Canvas 2D drawing adapter (wasm32 only)
//! - `settings`: User preferences persisted to LocalStorage

pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use settings::Settings;

/// Game configuration constants
///
/// Physics values are in pixels per tick (one tick = one 60 Hz frame), so
/// the simulation needs no delta-time scaling.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Player bounding box edge length
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Screen x the camera pins the player to
    pub const PLAYER_SCREEN_X: f32 = 150.0;
    /// World x the player spawns at (camera offset is zero on the first frame)
    pub const PLAYER_SPAWN_X: f32 = 150.0;

    /// Downward acceleration per tick (sign flips in ball mode)
    pub const GRAVITY: f32 = 0.7;
    /// Jump impulse (negative = upward)
    pub const JUMP_POWER: f32 = -14.0;
    /// Ship climb rate as a fraction of scroll speed while the input is held
    pub const SHIP_LIFT: f32 = 0.7;

    /// Horizontal advance per tick
    pub const SCROLL_SPEED: f32 = 6.0;

    /// Thickness of the solid ground band at the bottom of the viewport
    pub const GROUND_BAND: f32 = 80.0;
    /// Fallback ground line for headless runs (600 px viewport)
    pub const DEFAULT_GROUND_Y: f32 = 520.0;

    /// Portal trigger half-width, expressed in ticks of travel
    pub const PORTAL_BAND_TICKS: f32 = 2.0;
    /// Portal render radius
    pub const PORTAL_RADIUS: f32 = 20.0;

    /// Finish line of the built-in level
    pub const LEVEL_END_X: f32 = 3800.0;
}
