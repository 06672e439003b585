//! Level layouts
//!
//! A level is a static list of ground-flush obstacles, a list of mode
//! portals, and a finish line. Layouts are either the hand-placed classic
//! course or an evenly spaced generated one; both are fully deterministic,
//! so a restart can rebuild the exact same course.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::state::{Mode, Obstacle, Portal};
use crate::consts::LEVEL_END_X;

/// Obstacle heights the generated layout cycles through
const HEIGHT_CYCLE: [f32; 4] = [100.0, 140.0, 110.0, 160.0];

/// Default obstacle width in generated layouts
const GEN_OBSTACLE_W: f32 = 50.0;

/// World x of the first generated obstacle
const GEN_START_X: f32 = 800.0;

/// Invalid level configuration, caught at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    EmptyLayout,
    NonPositiveSpacing,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::EmptyLayout => write!(f, "level must contain at least one obstacle"),
            LevelError::NonPositiveSpacing => write!(f, "obstacle spacing must be positive"),
        }
    }
}

impl std::error::Error for LevelError {}

/// How a level's course was produced (kept so restart can rebuild it)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Layout {
    Classic,
    EvenlySpaced { count: u32, spacing: f32 },
}

/// A complete course: obstacles, portals, finish line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub obstacles: Vec<Obstacle>,
    pub portals: Vec<Portal>,
    /// World x of the finish line
    pub end_x: f32,
    layout: Layout,
}

impl Level {
    /// The built-in hand-placed course
    pub fn classic() -> Self {
        let obstacles = vec![
            Obstacle { x: 800.0, w: 50.0, h: 100.0 },
            Obstacle { x: 1200.0, w: 50.0, h: 140.0 },
            Obstacle { x: 1600.0, w: 50.0, h: 110.0 },
            Obstacle { x: 2000.0, w: 50.0, h: 160.0 },
            Obstacle { x: 2600.0, w: 60.0, h: 120.0 },
            Obstacle { x: 3300.0, w: 50.0, h: 100.0 },
        ];
        let portals = vec![
            Portal { x: 1000.0, target: Mode::Ship },
            Portal { x: 2200.0, target: Mode::Ball },
            Portal { x: 3000.0, target: Mode::Ufo },
            Portal { x: 3600.0, target: Mode::Cube },
        ];
        Self {
            obstacles,
            portals,
            end_x: LEVEL_END_X,
            layout: Layout::Classic,
        }
    }

    /// A generated course with `count` obstacles every `spacing` pixels
    ///
    /// Heights cycle through the classic palette; portals are spread at
    /// the quarter points of the course. Invalid parameters are rejected
    /// here rather than surfacing mid-run.
    pub fn evenly_spaced(count: u32, spacing: f32) -> Result<Self, LevelError> {
        if count == 0 {
            return Err(LevelError::EmptyLayout);
        }
        if spacing <= 0.0 {
            return Err(LevelError::NonPositiveSpacing);
        }
        Ok(Self::generate(count, spacing))
    }

    /// Build from validated parameters
    fn generate(count: u32, spacing: f32) -> Self {
        let obstacles: Vec<Obstacle> = (0..count)
            .map(|i| Obstacle {
                x: GEN_START_X + i as f32 * spacing,
                w: GEN_OBSTACLE_W,
                h: HEIGHT_CYCLE[i as usize % HEIGHT_CYCLE.len()],
            })
            .collect();

        let end_x = GEN_START_X + count as f32 * spacing + spacing;
        let span = end_x - GEN_START_X;
        let portals = vec![
            Portal { x: GEN_START_X + span * 0.25, target: Mode::Ship },
            Portal { x: GEN_START_X + span * 0.5, target: Mode::Ball },
            Portal { x: GEN_START_X + span * 0.75, target: Mode::Ufo },
            Portal { x: end_x - spacing * 0.5, target: Mode::Cube },
        ];

        Self {
            obstacles,
            portals,
            end_x,
            layout: Layout::EvenlySpaced { count, spacing },
        }
    }

    /// Rebuild the same course from its layout (fresh object identity)
    pub fn regenerate(&self) -> Self {
        match self.layout {
            Layout::Classic => Self::classic(),
            Layout::EvenlySpaced { count, spacing } => Self::generate(count, spacing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_layout() {
        let level = Level::classic();
        assert_eq!(level.obstacles.len(), 6);
        assert_eq!(level.portals.len(), 4);
        assert_eq!(level.end_x, LEVEL_END_X);
        assert_eq!(level.portals[0].target, Mode::Ship);
        assert_eq!(level.portals[3].target, Mode::Cube);
    }

    #[test]
    fn test_evenly_spaced_rejects_bad_params() {
        assert_eq!(Level::evenly_spaced(0, 400.0), Err(LevelError::EmptyLayout));
        assert_eq!(
            Level::evenly_spaced(5, 0.0),
            Err(LevelError::NonPositiveSpacing)
        );
        assert_eq!(
            Level::evenly_spaced(5, -10.0),
            Err(LevelError::NonPositiveSpacing)
        );
    }

    #[test]
    fn test_evenly_spaced_spacing_and_bounds() {
        let level = Level::evenly_spaced(5, 400.0).expect("valid layout");
        assert_eq!(level.obstacles.len(), 5);
        for pair in level.obstacles.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, 400.0);
        }
        // Finish line is past the last obstacle
        let last = level.obstacles.last().expect("non-empty");
        assert!(level.end_x > last.x + last.w);
        // Portals sit inside the course
        for portal in &level.portals {
            assert!(portal.x > GEN_START_X && portal.x < level.end_x);
        }
    }

    #[test]
    fn test_regenerate_replaces_identity_with_equal_course() {
        let level = Level::evenly_spaced(3, 300.0).expect("valid layout");
        assert_eq!(level.regenerate(), level);
        assert_eq!(Level::classic().regenerate(), Level::classic());
    }
}
