mod quat;
mod vec3;

pub use quat::{Quat, SPIN_DAMPING};
pub use vec3::{Axis, Vec3};

/// Common math constants
pub mod consts {
    /// Squared distance below which two centres are treated as coincident
    /// and no contact normal can be derived.
    pub const DEGENERATE_DISTANCE_SQ: f64 = 1e-4;

    /// Minimum |direction · normal| for a ray to be considered non-parallel to a face
    pub const RAY_PARALLEL_EPSILON: f64 = 1e-4;
}
