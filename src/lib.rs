//! # kickbox
//!
//! A small real-time rigid body simulator for spheres and axis-aligned boxes
//! living inside a bounded world.
//!
//! ## Features
//!
//! - **Rigid Body Dynamics**: semi-implicit Euler integration with gravity
//!   and accumulated forces
//! - **Collision Detection**: sphere-sphere, sphere-box and box-box contacts
//!   with positional correction and restitution impulses
//! - **Boundary Walls**: bodies are kept inside the world box
//! - **Ray Picking**: kick the nearest body along a ray, spinning boxes
//! - **Broad Phase**: pluggable; all-pairs by default
//! - **Configuration**: JSON world and scene configs with defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use kickbox::prelude::*;
//!
//! // Create a physics world (floor at y = 0)
//! let mut world = World::default();
//! world.set_gravity(Vec3::new(0.0, -9.81, 0.0));
//!
//! // Drop a ball and a box
//! let ball = world.add_body(
//!     RigidBodyDesc::sphere(0.5)
//!         .with_position(Vec3::new(0.0, 5.0, 0.0))
//!         .with_restitution(0.6),
//! );
//! world.add_body(RigidBodyDesc::cube(Vec3::splat(0.5)).with_position(Vec3::new(2.0, 3.0, 0.0)));
//!
//! // Simulation loop
//! let dt = 1.0 / 60.0;
//! for _ in 0..300 {
//!     world.step(dt);
//! }
//!
//! // Kick whatever is in front of the camera
//! let hit = world
//!     .apply_impulse_along_ray(Vec3::new(0.0, 0.5, -8.0), Vec3::Z, 50.0, 5.0)
//!     .expect("direction is non-zero");
//! assert_eq!(hit.map(|h| h.body), Some(ball));
//! ```

pub mod collision;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod geometry;
pub mod math;
pub mod query;
pub mod scene;
mod world;

pub use error::{PhysicsError, Result};
pub use world::{HitReport, StepStats, World};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collision::{BodyHandle, BroadPhase, Contact};
    pub use crate::config::{SceneConfig, SimConfig, WorldConfig};
    pub use crate::dynamics::{Color, RigidBody, RigidBodyDesc};
    pub use crate::error::PhysicsError;
    pub use crate::geometry::{Aabb, Shape, ShapeType};
    pub use crate::math::{Axis, Quat, Vec3};
    pub use crate::query::{Ray, RayHit};
    pub use crate::scene::populate;
    pub use crate::world::{HitReport, StepStats, World};
}
