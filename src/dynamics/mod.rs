mod integrator;
mod rigid_body;

pub use integrator::{integrate_positions, integrate_semi_implicit_euler, integrate_velocities};
pub use rigid_body::{Color, RigidBody, RigidBodyDesc};
