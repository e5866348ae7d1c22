use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::collision::BodyHandle;
use crate::geometry::Shape;
use crate::math::{Axis, Quat, Vec3};

use super::integrator::integrate_semi_implicit_euler;

/// Presentation colour carried by a body. The simulation never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a colour from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A rigid body in the physics simulation.
///
/// Bodies are owned by the [`World`](crate::World); outside the crate they
/// are only reachable through shared references, so all state is exposed
/// via read accessors.
#[derive(Debug, Clone)]
pub struct RigidBody {
    pub(crate) handle: BodyHandle,

    // Transform
    pub(crate) position: Vec3,
    pub(crate) orientation: Quat,

    // Velocities
    pub(crate) velocity: Vec3,
    pub(crate) angular_velocity: Vec3,

    /// Accumulated acceleration: forces are divided by mass on entry.
    pub(crate) accumulated_force: Vec3,

    // Mass properties
    pub(crate) mass: f64,
    pub(crate) inv_mass: f64,

    pub(crate) restitution: f64,
    pub(crate) shape: Shape,
    pub(crate) color: Color,

    /// World-space corners, cubes only. Refreshed after every integration.
    pub(crate) vertices: Option<[Vec3; 8]>,
}

impl RigidBody {
    /// Builds a body from a description, clamping invalid parameters
    pub fn from_desc(desc: &RigidBodyDesc) -> Self {
        let mass = sanitize_mass(desc.mass);
        let shape = sanitize_shape(desc.shape);
        let restitution = if desc.restitution.is_finite() {
            desc.restitution.clamp(0.0, 1.0)
        } else {
            warn!(restitution = desc.restitution, "non-finite restitution, using 0");
            0.0
        };

        let mut body = Self {
            handle: BodyHandle::INVALID,
            position: desc.position,
            orientation: desc.orientation.normalize(),
            velocity: desc.velocity,
            angular_velocity: desc.angular_velocity,
            accumulated_force: Vec3::ZERO,
            mass,
            inv_mass: 1.0 / mass,
            restitution,
            shape,
            color: desc.color,
            vertices: None,
        };
        body.refresh_vertices();
        body
    }

    /// Handle of this body within its world
    pub fn handle(&self) -> BodyHandle {
        self.handle
    }

    /// Position of the centre of mass
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Orientation (identity for spheres)
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Linear velocity
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Angular velocity (only changes for cubes)
    pub fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    /// Acceleration that will be applied on the next integration
    pub fn accumulated_force(&self) -> Vec3 {
        self.accumulated_force
    }

    /// Returns the mass (infinity when the inverse mass is zero)
    pub fn mass(&self) -> f64 {
        if self.inv_mass > 0.0 {
            self.mass
        } else {
            f64::INFINITY
        }
    }

    /// Inverse mass (0 for infinite mass)
    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    /// Bounciness in [0, 1]
    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    /// Collision shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Presentation colour
    pub fn color(&self) -> Color {
        self.color
    }

    /// World-space corners of a cube body, `None` for spheres
    pub fn vertices(&self) -> Option<&[Vec3; 8]> {
        self.vertices.as_ref()
    }

    /// Distance from the centre to the surface along `axis`
    pub fn extent(&self, axis: Axis) -> f64 {
        self.shape.extent(axis)
    }

    /// Returns true if this body has finite mass
    pub fn has_finite_mass(&self) -> bool {
        self.inv_mass > 0.0
    }

    /// Accumulates a force for the next integration.
    ///
    /// The force is divided by mass here, so the stored quantity is an
    /// acceleration. Velocity and position are untouched.
    pub fn apply_force(&mut self, force: Vec3) {
        self.accumulated_force += force * self.inv_mass;
    }

    /// Applies an impulse at the center of mass
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse * self.inv_mass;
    }

    /// Advances the body by `dt` seconds (semi-implicit Euler)
    pub fn integrate(&mut self, dt: f64) {
        integrate_semi_implicit_euler(self, dt);
    }

    /// Clears accumulated forces
    pub fn clear_forces(&mut self) {
        self.accumulated_force = Vec3::ZERO;
    }

    /// Recomputes the cached corners of a cube body
    pub(crate) fn refresh_vertices(&mut self) {
        self.vertices = match self.shape {
            Shape::Cube(cube) => Some(cube.vertices(self.position)),
            Shape::Sphere(_) => None,
        };
    }
}

fn sanitize_mass(mass: f64) -> f64 {
    if mass > 0.0 && mass.is_finite() {
        mass
    } else {
        warn!(mass, "invalid mass, falling back to 1.0");
        1.0
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value > 0.0 && value.is_finite() {
        value
    } else {
        warn!(value, "invalid shape extent, falling back to 1.0");
        1.0
    }
}

fn sanitize_shape(shape: Shape) -> Shape {
    match shape {
        Shape::Sphere(s) => Shape::sphere(sanitize_extent(s.radius)),
        Shape::Cube(c) => {
            let h = c.half_extents;
            Shape::cube(Vec3::new(
                sanitize_extent(h.x),
                sanitize_extent(h.y),
                sanitize_extent(h.z),
            ))
        }
    }
}

/// Description for creating a rigid body
#[derive(Debug, Clone)]
pub struct RigidBodyDesc {
    pub shape: Shape,
    pub position: Vec3,
    pub orientation: Quat,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub mass: f64,
    pub restitution: f64,
    pub color: Color,
}

impl Default for RigidBodyDesc {
    fn default() -> Self {
        Self {
            shape: Shape::sphere(0.5),
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: 1.0,
            restitution: 0.3, // Moderate bounce
            color: Color::rgb(200, 200, 200),
        }
    }
}

impl RigidBodyDesc {
    /// Creates a sphere body description
    pub fn sphere(radius: f64) -> Self {
        Self {
            shape: Shape::sphere(radius),
            ..Self::default()
        }
    }

    /// Creates a cube body description from half-extents
    pub fn cube(half_extents: Vec3) -> Self {
        Self {
            shape: Shape::cube(half_extents),
            ..Self::default()
        }
    }

    /// Sets the position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the orientation
    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the initial linear velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the initial angular velocity
    pub fn with_angular_velocity(mut self, angular_velocity: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Sets the mass
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Sets restitution
    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    /// Sets the presentation colour
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builds the body
    pub fn build(&self) -> RigidBody {
        RigidBody::from_desc(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_creation() {
        let body = RigidBodyDesc::sphere(1.0)
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_mass(2.0)
            .build();

        assert_eq!(body.position(), Vec3::new(1.0, 2.0, 3.0));
        assert!((body.inv_mass() - 0.5).abs() < 1e-12);
        assert_eq!(body.mass(), 2.0);
        assert!(body.has_finite_mass());
        assert!(body.vertices().is_none());
    }

    #[test]
    fn test_invalid_parameters_are_clamped() {
        let body = RigidBodyDesc::cube(Vec3::new(-1.0, 0.0, 2.0))
            .with_mass(0.0)
            .with_restitution(3.0)
            .build();

        assert_eq!(body.mass(), 1.0);
        assert_eq!(body.inv_mass(), 1.0);
        assert_eq!(body.restitution(), 1.0);
        assert_eq!(body.shape().extent(Axis::X), 1.0);
        assert_eq!(body.shape().extent(Axis::Y), 1.0);
        assert_eq!(body.shape().extent(Axis::Z), 2.0);

        let body = RigidBodyDesc::sphere(f64::NAN).with_mass(-4.0).build();
        assert_eq!(body.shape().extent(Axis::X), 1.0);
        assert_eq!(body.mass(), 1.0);
    }

    #[test]
    fn test_apply_force_stores_acceleration() {
        let mut body = RigidBodyDesc::sphere(1.0).with_mass(4.0).build();

        body.apply_force(Vec3::new(8.0, 0.0, 0.0));
        body.apply_force(Vec3::new(0.0, 4.0, 0.0));

        assert_eq!(body.accumulated_force(), Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(body.velocity(), Vec3::ZERO);
        assert_eq!(body.position(), Vec3::ZERO);
    }

    #[test]
    fn test_apply_impulse() {
        let mut body = RigidBodyDesc::sphere(1.0).with_mass(2.0).build();
        body.apply_impulse(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(body.velocity(), Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_cube_vertices_follow_position() {
        let body = RigidBodyDesc::cube(Vec3::ONE)
            .with_position(Vec3::new(0.0, 5.0, 0.0))
            .build();
        let verts = body.vertices().unwrap();
        assert_eq!(verts[0], Vec3::new(-1.0, 4.0, -1.0));
        assert_eq!(verts[7], Vec3::new(1.0, 6.0, 1.0));
    }

    #[test]
    fn test_color_passthrough() {
        let body = RigidBodyDesc::sphere(1.0)
            .with_color(Color::rgb(1, 2, 3))
            .build();
        assert_eq!(body.color(), Color::rgb(1, 2, 3));
    }
}
