mod cube;
mod sphere;

pub use cube::cube_cube;
pub use sphere::{sphere_cube, sphere_sphere};

use crate::dynamics::RigidBody;
use crate::geometry::Shape;

use super::contact::{Contact, PairKind};

/// Outcome of a narrow-phase test
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detection {
    /// Shapes do not overlap
    Separated,
    /// Shapes overlap but no contact normal can be derived (coincident
    /// centres). The pair is skipped for this frame.
    Degenerate,
    /// Shapes overlap with a usable contact
    Touching(Contact),
}

impl Detection {
    /// Returns the contact if the shapes touch with a usable normal
    pub fn contact(self) -> Option<Contact> {
        match self {
            Detection::Touching(contact) => Some(contact),
            _ => None,
        }
    }

    /// True for both usable and degenerate overlaps
    pub fn is_overlapping(self) -> bool {
        !matches!(self, Detection::Separated)
    }

    fn flipped(self) -> Self {
        match self {
            Detection::Touching(contact) => Detection::Touching(contact.flipped()),
            other => other,
        }
    }
}

/// Runs the narrow-phase routine matching the two bodies' shapes.
///
/// Any returned contact normal points from `b` towards `a`.
pub fn detect(a: &RigidBody, b: &RigidBody) -> (PairKind, Detection) {
    let (pa, pb) = (a.position(), b.position());
    match (a.shape(), b.shape()) {
        (Shape::Sphere(sa), Shape::Sphere(sb)) => (
            PairKind::SphereSphere,
            sphere_sphere(pa, sa.radius, pb, sb.radius),
        ),
        (Shape::Sphere(s), Shape::Cube(c)) => (
            PairKind::SphereCube,
            sphere_cube(pa, s.radius, pb, c.half_extents),
        ),
        (Shape::Cube(c), Shape::Sphere(s)) => (
            PairKind::SphereCube,
            sphere_cube(pb, s.radius, pa, c.half_extents).flipped(),
        ),
        (Shape::Cube(ca), Shape::Cube(cb)) => (
            PairKind::CubeCube,
            cube_cube(pa, ca.half_extents, pb, cb.half_extents),
        ),
    }
}
