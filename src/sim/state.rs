//! Game state and core simulation types
//!
//! All state the simulation mutates lives here, behind one `GameState`
//! struct so ticks can be driven deterministically without a live canvas.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::level::Level;
use crate::consts::*;

/// The player's current shape/physics profile
///
/// Exactly one mode is active at a time; the mode decides jump handling,
/// gravity clamping, and render color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Cube,
    Ship,
    Ball,
    Ufo,
}

impl Mode {
    /// Gravity applied when entering this mode through a portal
    ///
    /// Ball mode starts inverted; every other mode pulls down.
    pub fn entry_gravity(self) -> f32 {
        match self {
            Mode::Ball => -GRAVITY,
            _ => GRAVITY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Cube => "cube",
            Mode::Ship => "ship",
            Mode::Ball => "ball",
            Mode::Ufo => "ufo",
        }
    }
}

/// The player-controlled shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// World position of the top-left corner; x advances every tick
    pub pos: Vec2,
    /// Bounding box size (fixed)
    pub size: Vec2,
    /// Vertical velocity in px/tick
    pub dy: f32,
    /// Signed per-tick acceleration; negative while ball mode is inverted
    pub gravity: f32,
    /// Jump impulse (negative = upward)
    pub jump_power: f32,
    pub on_ground: bool,
    pub mode: Mode,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, 0.0),
            size: Vec2::splat(PLAYER_SIZE),
            dy: 0.0,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            on_ground: false,
            mode: Mode::Cube,
        }
    }
}

impl Player {
    /// Current bounding box in world space
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Restore all scalar fields to their launch values
    pub fn reset(&mut self) {
        *self = Player::default();
    }
}

/// A static ground-flush obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// World x of the left edge
    pub x: f32,
    pub w: f32,
    pub h: f32,
}

impl Obstacle {
    /// World-space rect, flush with the ground line
    pub fn rect(&self, ground_y: f32) -> Rect {
        Rect::new(self.x, ground_y - self.h, self.w, self.h)
    }
}

/// A trigger zone that switches the player's mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Portal {
    /// World x of the trigger center
    pub x: f32,
    pub target: Mode,
}

/// Run lifecycle
///
/// `GameOver` and `LevelComplete` are mutually exclusive terminal states;
/// the simulation is frozen in either until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
    LevelComplete,
}

impl Phase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver | Phase::LevelComplete)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub level: Level,
    pub phase: Phase,
    /// Horizontal advance per tick (constant per run)
    pub scroll_speed: f32,
    /// Y of the ground line (viewport height minus the ground band)
    pub ground_y: f32,
    /// Simulation tick counter; only advances while running
    pub time_ticks: u64,
    /// Runs started after a game over
    pub attempts: u32,
}

impl GameState {
    pub fn new(level: Level, ground_y: f32) -> Self {
        Self {
            player: Player::default(),
            level,
            phase: Phase::Running,
            scroll_speed: SCROLL_SPEED,
            ground_y,
            time_ticks: 0,
            attempts: 1,
        }
    }

    /// Recompute the ground line for a new viewport height
    pub fn set_viewport_height(&mut self, height: f32) {
        self.ground_y = height - GROUND_BAND;
    }

    /// Fraction of the level covered, for the progress bar
    pub fn progress(&self) -> f32 {
        (self.player.pos.x / self.level.end_x).clamp(0.0, 1.0)
    }

    /// Total reset back to launch state
    ///
    /// Rebuilds the level from its layout (object identity replaced),
    /// resets the player in place, and clears both terminal flags. A run
    /// lost to a collision counts as a new attempt; finishing does not.
    pub fn restart(&mut self) {
        if self.phase == Phase::GameOver {
            self.attempts += 1;
        }
        self.level = self.level.regenerate();
        self.player.reset();
        self.phase = Phase::Running;
        self.time_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_gravity_sign() {
        assert_eq!(Mode::Ball.entry_gravity(), -GRAVITY);
        assert_eq!(Mode::Cube.entry_gravity(), GRAVITY);
        assert_eq!(Mode::Ship.entry_gravity(), GRAVITY);
        assert_eq!(Mode::Ufo.entry_gravity(), GRAVITY);
    }

    #[test]
    fn test_obstacle_rect_is_ground_flush() {
        let ob = Obstacle {
            x: 800.0,
            w: 50.0,
            h: 100.0,
        };
        let rect = ob.rect(520.0);
        assert_eq!(rect.pos.y, 420.0);
        assert_eq!(rect.bottom(), 520.0);
    }

    #[test]
    fn test_progress_clamped() {
        let mut state = GameState::new(Level::classic(), DEFAULT_GROUND_Y);
        assert!(state.progress() > 0.0 && state.progress() < 0.1);
        state.player.pos.x = state.level.end_x * 2.0;
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn test_restart_counts_attempts_only_after_game_over() {
        let mut state = GameState::new(Level::classic(), DEFAULT_GROUND_Y);
        assert_eq!(state.attempts, 1);

        state.phase = Phase::GameOver;
        state.restart();
        assert_eq!(state.attempts, 2);
        assert_eq!(state.phase, Phase::Running);

        state.phase = Phase::LevelComplete;
        state.restart();
        assert_eq!(state.attempts, 2);
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_restart_is_total_reset() {
        let mut state = GameState::new(Level::classic(), DEFAULT_GROUND_Y);
        state.player.pos = Vec2::new(2500.0, 130.0);
        state.player.dy = -9.0;
        state.player.mode = Mode::Ship;
        state.player.gravity = -GRAVITY;
        state.player.on_ground = true;
        state.time_ticks = 400;
        state.phase = Phase::GameOver;

        state.restart();

        let fresh = Player::default();
        assert_eq!(state.player.pos, fresh.pos);
        assert_eq!(state.player.dy, fresh.dy);
        assert_eq!(state.player.gravity, fresh.gravity);
        assert_eq!(state.player.mode, fresh.mode);
        assert!(!state.player.on_ground);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.level.obstacles.len(), Level::classic().obstacles.len());
    }
}
