pub mod ray;

pub use ray::{pick_nearest, ray_body, ray_cube, ray_sphere, Ray, RayHit, SIMPLIFIED_INV_INERTIA};
