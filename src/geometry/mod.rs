mod aabb;
mod shape;

pub use aabb::Aabb;
pub use shape::{Cube, FacePlane, Shape, ShapeType, Sphere};
