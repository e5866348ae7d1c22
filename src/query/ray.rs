//! Ray queries against the bodies of a world.
//!
//! Used for picking: the nearest body along a ray within a maximum distance
//! is reported with the hit point and the surface normal there.

use crate::collision::BodyHandle;
use crate::dynamics::RigidBody;
use crate::error::{PhysicsError, Result};
use crate::geometry::{Cube, Shape};
use crate::math::consts::RAY_PARALLEL_EPSILON;
use crate::math::Vec3;

/// Scalar stand-in for the inverse inertia tensor when a kick spins a cube.
///
/// A crude approximation: real inertia would depend on the cube's mass
/// distribution and orientation.
pub const SIMPLIFIED_INV_INERTIA: f64 = 0.5;

/// A ray defined by origin and unit direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Always unit length
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalising `direction`.
    ///
    /// Fails with [`PhysicsError::ZeroLengthVector`] when the direction is
    /// zero and [`PhysicsError::NonFiniteVector`] when its length is not
    /// finite.
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self> {
        let len = direction.length();
        if !len.is_finite() {
            return Err(PhysicsError::NonFiniteVector {
                context: "Ray::new",
            });
        }
        if len == 0.0 {
            return Err(PhysicsError::ZeroLengthVector {
                context: "Ray::new",
            });
        }
        Ok(Self {
            origin,
            direction: direction.try_div(len)?,
        })
    }

    /// Point along the ray at parameter `t`
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest body hit by a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Body that was hit
    pub body: BodyHandle,
    /// World space hit point
    pub point: Vec3,
    /// Surface normal at hit point
    pub normal: Vec3,
    /// Distance from ray origin
    pub distance: f64,
}

/// Ray against a sphere, geometric solution.
///
/// Returns the nearest non-negative parameter, which is the exit point when
/// the origin is inside the sphere.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f64) -> Option<f64> {
    let l = center - ray.origin;
    let tca = l.dot(ray.direction);
    let d2 = l.dot(l) - tca * tca;
    let r2 = radius * radius;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;
    if t0 >= 0.0 {
        Some(t0)
    } else if t1 >= 0.0 {
        Some(t1)
    } else {
        None
    }
}

/// Ray against the six faces of an axis-aligned box.
///
/// A face counts when the ray is not parallel to it, the plane is ahead of
/// the origin, and the hit lies within the face's other two extents. Returns
/// the nearest parameter and that face's outward normal; the first face in
/// +x, -x, +y, -y, +z, -z order wins ties.
pub fn ray_cube(ray: &Ray, center: Vec3, half_extents: Vec3) -> Option<(f64, Vec3)> {
    let mut best: Option<(f64, Vec3)> = None;
    for face in Cube::new(half_extents).face_planes(center) {
        let denom = ray.direction.dot(face.normal);
        if denom.abs() <= RAY_PARALLEL_EPSILON {
            continue;
        }

        let t = (face.center - ray.origin).dot(face.normal) / denom;
        if t < 0.0 {
            continue;
        }

        let hit = ray.at(t);
        let inside = face
            .axis
            .others()
            .iter()
            .all(|&a| (hit[a] - center[a]).abs() <= half_extents[a]);
        if inside && best.map_or(true, |(best_t, _)| t < best_t) {
            best = Some((t, face.normal));
        }
    }
    best
}

/// Ray against one body. Returns the hit parameter and surface normal.
pub fn ray_body(ray: &Ray, body: &RigidBody) -> Option<(f64, Vec3)> {
    let position = body.position();
    match body.shape() {
        Shape::Sphere(sphere) => {
            let t = ray_sphere(ray, position, sphere.radius)?;
            Some((t, (ray.at(t) - position).normalize()))
        }
        Shape::Cube(cube) => ray_cube(ray, position, cube.half_extents),
    }
}

/// Finds the nearest body hit with `0 < t <= max_distance`.
///
/// Bodies are tested in list order; on equal distances the earlier body
/// wins.
pub fn pick_nearest(bodies: &[RigidBody], ray: &Ray, max_distance: f64) -> Option<RayHit> {
    let mut closest: Option<RayHit> = None;

    for body in bodies {
        let Some((t, normal)) = ray_body(ray, body) else {
            continue;
        };
        if t <= 0.0 || t > max_distance {
            continue;
        }
        if closest.map_or(true, |hit| t < hit.distance) {
            closest = Some(RayHit {
                body: body.handle(),
                point: ray.at(t),
                normal,
                distance: t,
            });
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::RigidBodyDesc;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn bodies(descs: Vec<RigidBodyDesc>) -> Vec<RigidBody> {
        descs
            .iter()
            .enumerate()
            .map(|(i, desc)| {
                let mut body = desc.build();
                body.handle = BodyHandle::new(i as u32);
                body
            })
            .collect()
    }

    #[test]
    fn test_ray_new_normalises() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0)).unwrap();
        assert!(approx_eq(ray.direction.length(), 1.0));
        assert!(approx_eq(ray.direction.z, 0.8));
    }

    #[test]
    fn test_ray_new_rejects_zero_direction() {
        let err = Ray::new(Vec3::ONE, Vec3::ZERO).unwrap_err();
        assert!(matches!(err, PhysicsError::ZeroLengthVector { .. }));
    }

    #[test]
    fn test_ray_new_rejects_non_finite_direction() {
        let err = Ray::new(Vec3::ZERO, Vec3::new(f64::NAN, 0.0, 1.0)).unwrap_err();
        assert!(matches!(err, PhysicsError::NonFiniteVector { .. }));

        let err = Ray::new(Vec3::ZERO, Vec3::new(f64::INFINITY, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, PhysicsError::NonFiniteVector { .. }));
    }

    #[test]
    fn test_ray_sphere_hits_at_distance_minus_radius() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z).unwrap();
        let t = ray_sphere(&ray, Vec3::ZERO, 1.5).unwrap();
        assert!(approx_eq(t, 8.5));
    }

    #[test]
    fn test_ray_sphere_aimed_away_misses() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), -Vec3::Z).unwrap();
        assert!(ray_sphere(&ray, Vec3::ZERO, 1.5).is_none());

        let ray = Ray::new(Vec3::new(0.0, 5.0, -10.0), Vec3::Z).unwrap();
        assert!(ray_sphere(&ray, Vec3::ZERO, 1.5).is_none());
    }

    #[test]
    fn test_ray_sphere_from_inside_returns_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();
        let t = ray_sphere(&ray, Vec3::ZERO, 2.0).unwrap();
        assert!(approx_eq(t, 2.0));
    }

    #[test]
    fn test_ray_cube_face_hit() {
        let ray = Ray::new(Vec3::new(-10.0, 0.5, 0.0), Vec3::X).unwrap();
        let (t, normal) = ray_cube(&ray, Vec3::ZERO, Vec3::ONE).unwrap();
        assert!(approx_eq(t, 9.0));
        assert_eq!(normal, -Vec3::X);
    }

    #[test]
    fn test_ray_cube_misses_outside_face_extent() {
        let ray = Ray::new(Vec3::new(-10.0, 1.5, 0.0), Vec3::X).unwrap();
        assert!(ray_cube(&ray, Vec3::ZERO, Vec3::ONE).is_none());
    }

    #[test]
    fn test_ray_cube_diagonal_entry() {
        let ray = Ray::new(Vec3::new(-4.0, 3.0, 0.0), Vec3::new(1.0, -0.5, 0.0)).unwrap();
        let (t, normal) = ray_cube(&ray, Vec3::ZERO, Vec3::ONE).unwrap();
        // Passes over the -x face and enters through the top
        assert_eq!(normal, Vec3::Y);
        assert!(approx_eq(ray.at(t).y, 1.0));
        assert!(approx_eq(ray.at(t).x, 0.0));
    }

    #[test]
    fn test_pick_nearest_prefers_closer_body() {
        let list = bodies(vec![
            RigidBodyDesc::sphere(1.0).with_position(Vec3::new(0.0, 0.0, 8.0)),
            RigidBodyDesc::cube(Vec3::ONE).with_position(Vec3::new(0.0, 0.0, 4.0)),
            RigidBodyDesc::sphere(1.0).with_position(Vec3::new(5.0, 0.0, 4.0)),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();

        let hit = pick_nearest(&list, &ray, 100.0).unwrap();
        assert_eq!(hit.body, BodyHandle::new(1));
        assert!(approx_eq(hit.distance, 3.0));
        assert_eq!(hit.point, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(hit.normal, -Vec3::Z);
    }

    #[test]
    fn test_pick_nearest_respects_max_distance() {
        let list = bodies(vec![
            RigidBodyDesc::sphere(1.0).with_position(Vec3::new(0.0, 0.0, 8.0)),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();

        assert!(pick_nearest(&list, &ray, 6.5).is_none());
        assert!(pick_nearest(&list, &ray, 7.0).is_some());
    }

    #[test]
    fn test_pick_nearest_tie_keeps_first() {
        let list = bodies(vec![
            RigidBodyDesc::sphere(1.0).with_position(Vec3::new(0.0, 0.0, 5.0)),
            RigidBodyDesc::sphere(1.0).with_position(Vec3::new(0.0, 0.0, 5.0)),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();

        assert_eq!(pick_nearest(&list, &ray, 100.0).unwrap().body, BodyHandle::new(0));
    }

    #[test]
    fn test_pick_nearest_empty() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        assert!(pick_nearest(&[], &ray, 100.0).is_none());
    }
}
