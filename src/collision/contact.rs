use std::fmt;

use crate::math::Vec3;

/// A handle to a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    /// Invalid/null body handle
    pub const INVALID: Self = Self(u32::MAX);

    /// Creates a new body handle
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the index of this handle
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true if this handle is valid
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for BodyHandle {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which narrow-phase routine a pair goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairKind {
    SphereSphere,
    SphereCube,
    CubeCube,
}

/// Narrow-phase result for two overlapping bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Contact normal (unit length, pointing from B to A)
    pub normal: Vec3,
    /// Penetration depth (positive when overlapping)
    pub penetration: f64,
}

impl Contact {
    /// Creates a new contact
    pub fn new(normal: Vec3, penetration: f64) -> Self {
        Self { normal, penetration }
    }

    /// The same contact seen from the other body
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            penetration: self.penetration,
        }
    }
}
