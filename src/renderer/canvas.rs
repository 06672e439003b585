//! Frame drawing on a `CanvasRenderingContext2d`
//!
//! Draw order is fixed: clear → ground → player → obstacles → portals →
//! progress bar. World coordinates are translated by a camera offset that
//! keeps the player at a fixed screen x while the level scrolls past.

use web_sys::CanvasRenderingContext2d;

use crate::consts::{GROUND_BAND, PLAYER_SCREEN_X, PORTAL_RADIUS};
use crate::settings::Settings;
use crate::sim::{GameState, Mode};

const GROUND_COLOR: &str = "#222";
const OBSTACLE_COLOR: &str = "#ff3366";
const PROGRESS_COLOR: &str = "#fff";
const PORTAL_RING_COLOR: &str = "#fff";

/// Render color for a player mode (portals use their target's color)
pub fn mode_color(mode: Mode) -> &'static str {
    match mode {
        Mode::Cube => "#00ccff",
        Mode::Ship => "#ff9900",
        Mode::Ball => "#33ff66",
        Mode::Ufo => "#cc33ff",
    }
}

/// Draw one frame of the current state
///
/// `time` is the animation clock in milliseconds (drives the portal
/// pulse, which `reduced_motion` disables).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    settings: &Settings,
    width: f64,
    height: f64,
    time: f64,
) {
    let camera = (state.player.pos.x - PLAYER_SCREEN_X) as f64;
    let ground_y = state.ground_y as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Ground band
    ctx.set_fill_style_str(GROUND_COLOR);
    ctx.fill_rect(0.0, ground_y, width, GROUND_BAND as f64);

    // Player, pinned at its screen x by the camera
    ctx.set_fill_style_str(mode_color(state.player.mode));
    ctx.fill_rect(
        state.player.pos.x as f64 - camera,
        state.player.pos.y as f64,
        state.player.size.x as f64,
        state.player.size.y as f64,
    );

    // Obstacles (cull offscreen ones)
    ctx.set_fill_style_str(OBSTACLE_COLOR);
    for ob in &state.level.obstacles {
        let x = ob.x as f64 - camera;
        if x + ob.w as f64 < 0.0 || x > width {
            continue;
        }
        ctx.fill_rect(x, ground_y - ob.h as f64, ob.w as f64, ob.h as f64);
    }

    // Portals: filled circle in the target mode's color, white ring
    let radius = if settings.reduced_motion {
        PORTAL_RADIUS as f64
    } else {
        PORTAL_RADIUS as f64 + (time * 0.006).sin() * 2.0
    };
    for portal in &state.level.portals {
        let x = portal.x as f64 - camera;
        if x + radius < 0.0 || x - radius > width {
            continue;
        }
        ctx.set_fill_style_str(mode_color(portal.target));
        ctx.begin_path();
        let _ = ctx.arc(x, ground_y - PORTAL_RADIUS as f64, radius, 0.0, std::f64::consts::TAU);
        ctx.fill();
        ctx.set_stroke_style_str(PORTAL_RING_COLOR);
        ctx.stroke();
    }

    // Progress bar along the top edge
    ctx.set_fill_style_str(PROGRESS_COLOR);
    ctx.fill_rect(0.0, 0.0, state.progress() as f64 * width, 3.0);

    if settings.show_hitboxes {
        draw_hitboxes(ctx, state, camera);
    }
}

/// Debug overlay: outline every collision rect
fn draw_hitboxes(ctx: &CanvasRenderingContext2d, state: &GameState, camera: f64) {
    ctx.set_stroke_style_str("#ffff00");
    ctx.set_line_width(1.0);

    let player = state.player.rect();
    ctx.stroke_rect(
        player.pos.x as f64 - camera,
        player.pos.y as f64,
        player.size.x as f64,
        player.size.y as f64,
    );

    for ob in &state.level.obstacles {
        let rect = ob.rect(state.ground_y);
        ctx.stroke_rect(
            rect.pos.x as f64 - camera,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }
}
