use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// An axis-aligned bounding box defined by minimum and maximum points.
///
/// Doubles as the world boundary box and as the extent of cube bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values)
    pub min: Vec3,
    /// Maximum corner (largest x, y, z values)
    pub max: Vec3,
}

impl Aabb {
    /// Creates an AABB from minimum and maximum points
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Returns the center of the AABB
    #[inline]
    pub fn center(self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the full size (extents) of the AABB
    #[inline]
    pub fn size(self) -> Vec3 {
        self.max - self.min
    }

    /// Returns true if this AABB is valid (min <= max in all dimensions)
    #[inline]
    pub fn is_valid(self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Returns a new AABB shrunk by `margin[a]` on both sides of each axis `a`.
    /// Collapses to the center on axes where the box is thinner than `2 * margin`.
    #[inline]
    pub fn shrink(self, margin: Vec3) -> Self {
        let center = self.center();
        let min = (self.min + margin).min(center);
        let max = (self.max - margin).max(center);
        Self { min, max }
    }

    /// Returns the closest point on the AABB to the given point
    #[inline]
    pub fn closest_point(self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Returns the 8 corners of the AABB
    #[inline]
    pub fn corners(self) -> [Vec3; 8] {
        [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ]
    }
}
