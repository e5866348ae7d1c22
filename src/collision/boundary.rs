use crate::dynamics::RigidBody;
use crate::geometry::Aabb;
use crate::math::Axis;

/// Keeps a body inside the world bounds.
///
/// Each axis is handled on its own: if the body's extent pokes through the
/// min or max wall it is pushed back flush against that wall and its
/// velocity on that axis is reversed and scaled by the body's restitution.
/// A body wedged into a corner gets up to three independent corrections.
/// The walls have infinite mass.
///
/// Returns the number of axis corrections applied.
pub fn resolve_boundary(body: &mut RigidBody, bounds: &Aabb) -> usize {
    let mut corrections = 0;

    for axis in Axis::ALL {
        let extent = body.shape.extent(axis);
        let lo = bounds.min[axis] + extent;
        let hi = bounds.max[axis] - extent;

        if body.position[axis] < lo {
            body.position[axis] = lo;
        } else if body.position[axis] > hi {
            body.position[axis] = hi;
        } else {
            continue;
        }

        body.velocity[axis] = -body.velocity[axis] * body.restitution;
        corrections += 1;
    }

    if corrections > 0 {
        body.refresh_vertices();
    }
    corrections
}
