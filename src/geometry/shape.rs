use crate::math::{Axis, Vec3};

use super::aabb::Aabb;

/// The type of collision shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Sphere,
    Cube,
}

/// Geometry of a body. Fixed for the body's lifetime.
///
/// Cubes are always treated as axis-aligned by collision and ray queries,
/// whatever orientation the owning body reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A sphere defined by its radius
    Sphere(Sphere),
    /// An axis-aligned box defined by half-extents
    Cube(Cube),
}

impl Shape {
    /// Creates a sphere shape
    #[inline]
    pub fn sphere(radius: f64) -> Self {
        Self::Sphere(Sphere::new(radius))
    }

    /// Creates a cube shape from half-extents
    #[inline]
    pub fn cube(half_extents: Vec3) -> Self {
        Self::Cube(Cube::new(half_extents))
    }

    /// Returns the shape type
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Sphere(_) => ShapeType::Sphere,
            Shape::Cube(_) => ShapeType::Cube,
        }
    }

    /// Distance from the centre to the surface along `axis`
    #[inline]
    pub fn extent(&self, axis: Axis) -> f64 {
        match self {
            Shape::Sphere(s) => s.radius,
            Shape::Cube(c) => c.half_extents[axis],
        }
    }

    /// Half-extents of the shape's bounding box
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        match self {
            Shape::Sphere(s) => Vec3::splat(s.radius),
            Shape::Cube(c) => c.half_extents,
        }
    }

    /// Computes the AABB of this shape centred at `position`
    #[inline]
    pub fn world_aabb(&self, position: Vec3) -> Aabb {
        Aabb::from_center_half_extents(position, self.half_extents())
    }

    /// Closest point on (or in) the shape centred at `position` to `point`
    #[inline]
    pub fn closest_point(&self, position: Vec3, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(s) => {
                let offset = point - position;
                if offset.length_squared() <= s.radius * s.radius {
                    point
                } else {
                    position + offset.normalize() * s.radius
                }
            }
            Shape::Cube(c) => c.world_aabb(position).closest_point(point),
        }
    }

    /// Whether the owning body integrates orientation and takes spin from kicks
    #[inline]
    pub fn tracks_rotation(&self) -> bool {
        matches!(self, Shape::Cube(_))
    }
}

/// A sphere collision shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f64,
}

impl Sphere {
    /// Creates a new sphere with the given radius
    #[inline]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

/// One face of an axis-aligned cube, as a bounded plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePlane {
    /// Axis the face is perpendicular to
    pub axis: Axis,
    /// Outward unit normal
    pub normal: Vec3,
    /// Centre of the face in world space
    pub center: Vec3,
}

/// An axis-aligned box collision shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    /// Half-extents (half the size in each dimension)
    pub half_extents: Vec3,
}

impl Cube {
    /// Creates a new box with the given half-extents
    #[inline]
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }

    /// Returns the full size of the box
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }

    /// Returns the AABB of this box centred at `position`
    #[inline]
    pub fn world_aabb(&self, position: Vec3) -> Aabb {
        Aabb::from_center_half_extents(position, self.half_extents)
    }

    /// The six faces of the box centred at `position`, ordered
    /// +x, -x, +y, -y, +z, -z
    pub fn face_planes(&self, position: Vec3) -> [FacePlane; 6] {
        let face = |axis: Axis, sign: f64| {
            let normal = axis.unit() * sign;
            FacePlane {
                axis,
                normal,
                center: position + normal * self.half_extents[axis],
            }
        };
        [
            face(Axis::X, 1.0),
            face(Axis::X, -1.0),
            face(Axis::Y, 1.0),
            face(Axis::Y, -1.0),
            face(Axis::Z, 1.0),
            face(Axis::Z, -1.0),
        ]
    }

    /// Returns the 8 corners of the box centred at `position`
    #[inline]
    pub fn vertices(&self, position: Vec3) -> [Vec3; 8] {
        self.world_aabb(position).corners()
    }
}
