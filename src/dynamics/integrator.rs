use super::rigid_body::RigidBody;

/// Integrates velocities (applies accumulated acceleration to velocity)
pub fn integrate_velocities(body: &mut RigidBody, dt: f64) {
    body.velocity += body.accumulated_force * dt;
}

/// Integrates positions (applies velocities to positions).
///
/// Orientation is advanced only for shapes that track rotation, using the
/// additive quaternion update; the cached cube corners are rebuilt from the
/// new position without applying that orientation.
pub fn integrate_positions(body: &mut RigidBody, dt: f64) {
    body.position += body.velocity * dt;

    if body.shape.tracks_rotation() {
        body.orientation = body.orientation.integrate_additive(body.angular_velocity, dt);
    }

    body.refresh_vertices();
}

/// Performs a full integration step (semi-implicit Euler)
pub fn integrate_semi_implicit_euler(body: &mut RigidBody, dt: f64) {
    // First update velocities (using current forces)
    integrate_velocities(body, dt);

    // Then update positions (using new velocities)
    integrate_positions(body, dt);

    // Clear forces for next frame
    body.clear_forces();
}

#[cfg(test)]
mod tests {
    use crate::dynamics::RigidBodyDesc;
    use crate::math::{Quat, Vec3};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_body_at_rest_stays_put() {
        let mut body = RigidBodyDesc::sphere(1.0)
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .build();

        for dt in [0.0, 1.0 / 60.0, 0.5, 10.0] {
            body.integrate(dt);
        }

        assert_eq!(body.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(body.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_gravity_integration() {
        let gravity = Vec3::new(0.0, -9.81, 0.0);
        let dt = 1.0 / 60.0;
        let steps = 120;

        let mut body = RigidBodyDesc::sphere(1.0).with_mass(3.0).build();
        for _ in 0..steps {
            body.apply_force(gravity * body.mass());
            body.integrate(dt);
        }

        let expected = gravity * (steps as f64 * dt);
        assert!((body.velocity() - expected).length() < EPSILON);
        assert_eq!(body.accumulated_force(), Vec3::ZERO);
    }

    #[test]
    fn test_semi_implicit_order() {
        // Position uses the freshly updated velocity
        let mut body = RigidBodyDesc::sphere(1.0).build();
        body.apply_force(Vec3::new(2.0, 0.0, 0.0));
        body.integrate(0.5);

        assert!((body.velocity().x - 1.0).abs() < EPSILON);
        assert!((body.position().x - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_sphere_orientation_ignored() {
        let mut body = RigidBodyDesc::sphere(1.0)
            .with_angular_velocity(Vec3::new(0.0, 5.0, 0.0))
            .build();
        body.integrate(1.0);
        assert_eq!(body.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn test_cube_orientation_renormalized() {
        let mut body = RigidBodyDesc::cube(Vec3::ONE)
            .with_angular_velocity(Vec3::new(4.0, 1.0, -2.0))
            .build();

        for _ in 0..500 {
            body.integrate(1.0 / 30.0);
            assert!((body.orientation().length() - 1.0).abs() < EPSILON);
        }
        assert_ne!(body.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn test_cube_vertices_refreshed() {
        let mut body = RigidBodyDesc::cube(Vec3::splat(0.5))
            .with_velocity(Vec3::new(1.0, 0.0, 0.0))
            .with_angular_velocity(Vec3::new(0.0, 3.0, 0.0))
            .build();
        body.integrate(1.0);

        // Corners stay axis-aligned around the new centre
        let verts = body.vertices().unwrap();
        assert_eq!(verts[0], Vec3::new(0.5, -0.5, -0.5));
        assert_eq!(verts[7], Vec3::new(1.5, 0.5, 0.5));
    }
}
