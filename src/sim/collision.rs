//! Collision detection
//!
//! Everything is axis-aligned: the bird is a square, pipes are two
//! rectangles around a gap. All comparisons are strict, so touching an
//! edge is not a crash.

use glam::Vec2;

use super::state::{Bird, CrashCause, Pipe};
use crate::consts::*;

/// Axis-aligned bounding box (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extent: f32) -> Self {
        Self {
            min: center - Vec2::splat(half_extent),
            max: center + Vec2::splat(half_extent),
        }
    }

    /// Strict overlap on the x axis only
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.max.x > left && self.min.x < right
    }
}

/// Bounding box of a bird centered at `(x, y)`
pub fn bird_bounds(x: f32, y: f32) -> Aabb {
    Aabb::from_center(Vec2::new(x, y), Bird::HALF_SIZE)
}

/// Check the bird's vertical extent against the playfield
pub fn out_of_bounds(y: f32) -> Option<CrashCause> {
    if y + Bird::HALF_SIZE > GAME_HEIGHT {
        Some(CrashCause::Ground)
    } else if y - Bird::HALF_SIZE < 0.0 {
        Some(CrashCause::Ceiling)
    } else {
        None
    }
}

/// True if the box overlaps the pipe horizontally without fitting in its gap
pub fn pipe_blocks(bird: &Aabb, pipe: &Pipe) -> bool {
    bird.overlaps_x(pipe.x, pipe.right())
        && (bird.min.y < pipe.gap_top || bird.max.y > pipe.gap_bottom())
}

/// Find what, if anything, the bird at `(x, y)` crashes into.
///
/// Bounds are checked first, then pipes in list order; the first hit wins.
pub fn detect_crash(x: f32, y: f32, pipes: &[Pipe]) -> Option<CrashCause> {
    if let Some(cause) = out_of_bounds(y) {
        return Some(cause);
    }

    let bounds = bird_bounds(x, y);
    pipes
        .iter()
        .find(|pipe| pipe_blocks(&bounds, pipe))
        .map(|pipe| CrashCause::Pipe { id: pipe.id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tangent_to_edges_is_safe() {
        // Top edge exactly at 0
        assert_eq!(out_of_bounds(15.0), None);
        // Bottom edge exactly at GAME_HEIGHT
        assert_eq!(out_of_bounds(785.0), None);
    }

    #[test]
    fn test_one_unit_beyond_edges_crashes() {
        assert_eq!(out_of_bounds(14.0), Some(CrashCause::Ceiling));
        assert_eq!(out_of_bounds(786.0), Some(CrashCause::Ground));
    }

    #[test]
    fn test_bird_inside_gap_is_safe() {
        // Gap spans 300..500, bird spans 385..415
        let pipe = Pipe::new(1, 100.0, 300.0);
        let bounds = bird_bounds(125.0, 400.0);
        assert!(!pipe_blocks(&bounds, &pipe));
    }

    #[test]
    fn test_bird_clipping_upper_segment() {
        // Bird top at 285 is above gap top at 300
        let pipe = Pipe::new(1, 100.0, 300.0);
        let bounds = bird_bounds(125.0, 300.0);
        assert!(pipe_blocks(&bounds, &pipe));
    }

    #[test]
    fn test_bird_clipping_lower_segment() {
        // Bird bottom at 515 is below gap bottom at 500
        let pipe = Pipe::new(1, 100.0, 300.0);
        let bounds = bird_bounds(125.0, 500.0);
        assert!(pipe_blocks(&bounds, &pipe));
    }

    #[test]
    fn test_no_horizontal_overlap_is_safe() {
        // Bird spans x 110..140; pipe right edge touches 110 exactly
        let pipe = Pipe::new(1, 30.0, 300.0);
        let bounds = bird_bounds(125.0, 100.0);
        assert!(!pipe_blocks(&bounds, &pipe));

        // Pipe left edge touches 140 exactly
        let pipe = Pipe::new(2, 140.0, 300.0);
        assert!(!pipe_blocks(&bounds, &pipe));
    }

    #[test]
    fn test_detect_crash_reports_first_pipe_in_order() {
        let pipes = [Pipe::new(4, 100.0, 500.0), Pipe::new(5, 110.0, 500.0)];
        assert_eq!(
            detect_crash(125.0, 400.0, &pipes),
            Some(CrashCause::Pipe { id: 4 })
        );
    }

    #[test]
    fn test_detect_crash_prefers_bounds() {
        let pipes = [Pipe::new(4, 100.0, 500.0)];
        assert_eq!(detect_crash(125.0, 10.0, &pipes), Some(CrashCause::Ceiling));
    }
}
