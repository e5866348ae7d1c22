use crate::collision::contact::Contact;
use crate::geometry::Shape;
use crate::math::consts::DEGENERATE_DISTANCE_SQ;
use crate::math::{Axis, Vec3};

use super::Detection;

/// Sphere A against sphere B.
///
/// Overlap requires `DEGENERATE_DISTANCE_SQ < |a - b|² < (ra + rb)²`; centres
/// closer than the lower bound give no usable normal.
pub fn sphere_sphere(pos_a: Vec3, radius_a: f64, pos_b: Vec3, radius_b: f64) -> Detection {
    let diff = pos_a - pos_b;
    let dist_sq = diff.length_squared();
    let total_radius = radius_a + radius_b;

    if dist_sq >= total_radius * total_radius {
        return Detection::Separated;
    }
    if dist_sq <= DEGENERATE_DISTANCE_SQ {
        return Detection::Degenerate;
    }

    let dist = dist_sq.sqrt();
    match diff.try_div(dist) {
        Ok(normal) => Detection::Touching(Contact::new(normal, total_radius - dist)),
        Err(_) => Detection::Degenerate,
    }
}

/// Sphere A against axis-aligned box B, via the closest point on the box.
///
/// When the sphere centre is inside the box (or within the degenerate
/// distance of its surface) the closest point gives no usable normal, so
/// the sphere is pushed out through the nearest face instead.
pub fn sphere_cube(sphere_pos: Vec3, radius: f64, cube_pos: Vec3, half_extents: Vec3) -> Detection {
    let closest = Shape::cube(half_extents).closest_point(cube_pos, sphere_pos);
    let diff = sphere_pos - closest;
    let dist_sq = diff.length_squared();

    if dist_sq >= radius * radius {
        return Detection::Separated;
    }
    if dist_sq <= DEGENERATE_DISTANCE_SQ {
        return Detection::Touching(nearest_face_exit(sphere_pos - cube_pos, radius, half_extents));
    }

    let dist = dist_sq.sqrt();
    match diff.try_div(dist) {
        Ok(normal) => Detection::Touching(Contact::new(normal, radius - dist)),
        Err(_) => Detection::Degenerate,
    }
}

/// Contact that moves a sphere centred at `offset` from the box centre out
/// through the closest face. Ties keep the first axis.
fn nearest_face_exit(offset: Vec3, radius: f64, half_extents: Vec3) -> Contact {
    let mut axis = Axis::X;
    let mut face_distance = half_extents[Axis::X] - offset[Axis::X].abs();
    for candidate in [Axis::Y, Axis::Z] {
        let d = half_extents[candidate] - offset[candidate].abs();
        if d < face_distance {
            axis = candidate;
            face_distance = d;
        }
    }

    let sign = if offset[axis] >= 0.0 { 1.0 } else { -1.0 };
    Contact::new(axis.unit() * sign, face_distance + radius)
}
