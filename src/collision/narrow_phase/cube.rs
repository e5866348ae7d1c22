use crate::collision::contact::Contact;
use crate::math::{Axis, Vec3};

use super::Detection;

/// Axis-aligned box A against axis-aligned box B.
///
/// Uses the minimum translation vector: the axis with the smallest overlap
/// separates the boxes, and the normal on that axis points from B to A.
/// Exactly touching faces do not count as overlap.
pub fn cube_cube(pos_a: Vec3, half_a: Vec3, pos_b: Vec3, half_b: Vec3) -> Detection {
    let delta = pos_a - pos_b;

    let mut best: Option<(Axis, f64)> = None;
    for axis in Axis::ALL {
        let overlap = half_a[axis] + half_b[axis] - delta[axis].abs();
        if overlap <= 0.0 {
            return Detection::Separated;
        }
        // Strict comparison keeps the first axis on ties
        if best.map_or(true, |(_, min)| overlap < min) {
            best = Some((axis, overlap));
        }
    }

    match best {
        Some((axis, penetration)) => {
            let sign = if delta[axis] >= 0.0 { 1.0 } else { -1.0 };
            Detection::Touching(Contact::new(axis.unit() * sign, penetration))
        }
        None => Detection::Separated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_min_axis_selected() {
        // Deep on x and z, shallow on y
        let hit = cube_cube(
            Vec3::new(0.1, 1.9, 0.0),
            Vec3::ONE,
            Vec3::ZERO,
            Vec3::ONE,
        );
        let contact = hit.contact().unwrap();
        assert_eq!(contact.normal, Vec3::Y);
        assert!((contact.penetration - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_normal_points_from_b_to_a() {
        let hit = cube_cube(
            Vec3::new(-1.5, 0.0, 0.0),
            Vec3::ONE,
            Vec3::ZERO,
            Vec3::ONE,
        );
        assert_eq!(hit.contact().unwrap().normal, -Vec3::X);
    }

    #[test]
    fn test_separated_on_one_axis() {
        let hit = cube_cube(
            Vec3::new(0.0, 0.0, 2.5),
            Vec3::ONE,
            Vec3::ZERO,
            Vec3::ONE,
        );
        assert_eq!(hit, Detection::Separated);

        // Faces exactly touching
        let hit = cube_cube(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE, Vec3::ZERO, Vec3::ONE);
        assert_eq!(hit, Detection::Separated);
    }

    #[test]
    fn test_uneven_extents() {
        let hit = cube_cube(
            Vec3::new(0.0, 0.0, 2.9),
            Vec3::new(0.5, 0.5, 2.0),
            Vec3::ZERO,
            Vec3::splat(1.0),
        );
        let contact = hit.contact().unwrap();
        assert_eq!(contact.normal, Vec3::Z);
        assert!((contact.penetration - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_centres_pick_first_axis() {
        let hit = cube_cube(Vec3::ZERO, Vec3::ONE, Vec3::ZERO, Vec3::ONE);
        let contact = hit.contact().unwrap();
        assert_eq!(contact.normal, Vec3::X);
        assert!((contact.penetration - 2.0).abs() < EPSILON);
    }
}
