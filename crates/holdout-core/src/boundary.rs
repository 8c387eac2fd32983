//! Static collision boundaries and movement with axis-sliding avoidance.
//!
//! Obstacles are axis-aligned rectangles on the XZ ground plane. The set is
//! small (a village worth of buildings), so queries are a linear scan.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::WORLD_EXTENT;

/// Axis-aligned obstacle footprint on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionBoundary {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl CollisionBoundary {
    pub fn new(min_x: f64, max_x: f64, min_z: f64, max_z: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Footprint of a building centred at (`x`, `z`).
    pub fn centered(x: f64, z: f64, width: f64, depth: f64) -> Self {
        Self::new(
            x - width / 2.0,
            x + width / 2.0,
            z - depth / 2.0,
            z + depth / 2.0,
        )
    }

    /// Whether a square of half-size `radius` around (`x`, `z`) overlaps this box.
    /// Touching edges do not count.
    pub fn overlaps(&self, x: f64, z: f64, radius: f64) -> bool {
        x + radius > self.min_x
            && x - radius < self.max_x
            && z + radius > self.min_z
            && z - radius < self.max_z
    }
}

/// The level's static geometry as seen by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldLayout {
    pub boundaries: Vec<CollisionBoundary>,
    /// Half-size of the playable ground square.
    pub extent: f64,
}

impl Default for WorldLayout {
    fn default() -> Self {
        Self::village()
    }
}

impl WorldLayout {
    /// Open ground with no obstacles.
    pub fn open(extent: f64) -> Self {
        Self {
            boundaries: Vec::new(),
            extent,
        }
    }

    /// The stock village: a ring of houses and cottages, a barn and a well,
    /// with the square around the player start left clear.
    pub fn village() -> Self {
        let boundaries = vec![
            // Houses
            CollisionBoundary::centered(-20.0, -20.0, 8.0, 10.0),
            CollisionBoundary::centered(20.0, -20.0, 8.0, 10.0),
            CollisionBoundary::centered(-20.0, 20.0, 8.0, 10.0),
            CollisionBoundary::centered(20.0, 20.0, 8.0, 10.0),
            // Cottages
            CollisionBoundary::centered(0.0, -35.0, 6.0, 6.0),
            CollisionBoundary::centered(-35.0, 0.0, 6.0, 6.0),
            CollisionBoundary::centered(35.0, 0.0, 6.0, 6.0),
            // Barn
            CollisionBoundary::centered(0.0, 40.0, 14.0, 10.0),
            // Well
            CollisionBoundary::centered(10.0, 0.0, 2.0, 2.0),
        ];
        Self {
            boundaries,
            extent: WORLD_EXTENT,
        }
    }

    /// Whether a body of half-size `radius` fits at (`x`, `z`).
    pub fn can_occupy(&self, x: f64, z: f64, radius: f64) -> bool {
        !self.boundaries.iter().any(|b| b.overlaps(x, z, radius))
    }

    /// Move from `from` along `direction` by `step` units, sliding along
    /// obstacles. The direction is normalised first; a zero direction is a
    /// no-op. When the diagonal target is blocked, the X-only and Z-only
    /// moves are each tested against the original position and every
    /// unblocked axis is committed.
    pub fn move_with_avoidance(
        &self,
        from: DVec2,
        direction: DVec2,
        step: f64,
        radius: f64,
    ) -> DVec2 {
        let dir = direction.normalize_or_zero();
        if dir == DVec2::ZERO || step <= 0.0 {
            return from;
        }
        let target = from + dir * step;
        if self.can_occupy(target.x, target.y, radius) {
            return target;
        }

        let mut result = from;
        if self.can_occupy(target.x, from.y, radius) {
            result.x = target.x;
        }
        if self.can_occupy(from.x, target.y, radius) {
            result.y = target.y;
        }
        result
    }
}
