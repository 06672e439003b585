//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the run by exactly one frame. Constants
//! are in px/tick units, so there is no delta-time scaling anywhere: the
//! host decides how often to tick, the sim decides what a tick means.

use super::state::{GameState, Mode, Phase, Player};
use crate::consts::*;

/// Input for a single tick
///
/// `jump` is a level-sensitive latch: the host sets it on keydown /
/// pointer-down and clears it on release, and the sim reads it exactly
/// once per tick. Mode-specific edge semantics (cube jumps once per
/// landing, ufo pulses while airborne) fall out of the per-mode
/// preconditions, not out of input edge detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub jump: bool,
}

/// Advance the game state by one tick
///
/// Order: input → physics → forward travel → collision → portals → win.
/// A terminal state is frozen: no field is mutated until `restart`.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    if input.jump {
        handle_jump(&mut state.player, state.scroll_speed);
    }

    integrate(&mut state.player, state.ground_y);

    // The player advances through a stationary world; the renderer's
    // camera keeps it pinned near the left edge of the screen.
    state.player.pos.x += state.scroll_speed;

    if hits_obstacle(state) {
        state.phase = Phase::GameOver;
        return;
    }

    apply_portals(state);

    if state.player.pos.x >= state.level.end_x {
        state.phase = Phase::LevelComplete;
    }
}

/// Apply the jump input under the active mode's precondition
///
/// The preconditions are what give each shape its feel: cube is a single
/// impulse from the ground, ball flips gravity on any held frame, ufo is a
/// weaker repeatable pulse that only works airborne, ship is a continuous
/// climb with gravity as the only descent.
fn handle_jump(player: &mut Player, scroll_speed: f32) {
    match player.mode {
        Mode::Cube => {
            if player.on_ground {
                player.dy = player.jump_power;
                player.on_ground = false;
            }
        }
        Mode::Ball => {
            player.gravity = -player.gravity;
            player.dy = player.jump_power * player.gravity.signum();
        }
        Mode::Ufo => {
            if !player.on_ground {
                player.dy = player.jump_power / 2.0;
            }
        }
        Mode::Ship => {
            player.dy = -scroll_speed * SHIP_LIFT;
        }
    }
}

/// Semi-implicit Euler step plus the mode's boundary clamp
///
/// Non-ship modes snap to the ground line under normal gravity and to the
/// ceiling under inverted gravity. Ship mode flies unclamped.
fn integrate(player: &mut Player, ground_y: f32) {
    player.dy += player.gravity;
    player.pos.y += player.dy;

    if player.mode == Mode::Ship {
        return;
    }

    let floor_hit = player.gravity > 0.0 && player.pos.y + player.size.y >= ground_y;
    let ceiling_hit = player.gravity < 0.0 && player.pos.y <= 0.0;

    if floor_hit {
        player.pos.y = ground_y - player.size.y;
        player.dy = 0.0;
        player.on_ground = true;
    } else if ceiling_hit {
        player.pos.y = 0.0;
        player.dy = 0.0;
        player.on_ground = true;
    } else {
        player.on_ground = false;
    }
}

/// True if the player overlaps any obstacle this tick
///
/// First overlap ends the run; simultaneous overlaps collapse into the
/// same single terminal transition.
fn hits_obstacle(state: &GameState) -> bool {
    let player = state.player.rect();
    state
        .level
        .obstacles
        .iter()
        .any(|ob| player.overlaps(&ob.rect(state.ground_y)))
}

/// Switch modes on portal proximity
///
/// Portals fire every tick their band is true; reapplying the same mode
/// and entry gravity is idempotent, so lingering in the band is harmless.
fn apply_portals(state: &mut GameState) {
    let band = state.scroll_speed * PORTAL_BAND_TICKS;
    let px = state.player.pos.x;
    for portal in &state.level.portals {
        if (px - portal.x).abs() < band {
            state.player.mode = portal.target;
            state.player.gravity = portal.target.entry_gravity();
        }
    }
}
