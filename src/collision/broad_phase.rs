//! Broad-phase pair generation.
//!
//! The world only asks a broad-phase for candidate pairs; the narrow-phase
//! decides whether a pair actually touches. At tens of bodies testing every
//! pair is cheap enough, so [`AllPairs`] is the default. A grid or BVH can be
//! plugged in through [`World::set_broad_phase`](crate::World::set_broad_phase)
//! without touching the narrow-phase.

use crate::dynamics::RigidBody;

use super::contact::BodyHandle;

/// Trait for broad-phase collision detection algorithms.
pub trait BroadPhase {
    /// Find all pairs of bodies that potentially collide.
    ///
    /// Pairs must be returned with the lower handle first and in a
    /// deterministic order, since resolution is order dependent.
    fn query_pairs(&mut self, bodies: &[RigidBody]) -> Vec<(BodyHandle, BodyHandle)>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Brute-force broad-phase: every unordered pair `(i, j)` with `i < j`, in
/// body-list order. O(n²).
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPairs;

impl BroadPhase for AllPairs {
    fn query_pairs(&mut self, bodies: &[RigidBody]) -> Vec<(BodyHandle, BodyHandle)> {
        let n = bodies.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                pairs.push((a.handle(), b.handle()));
            }
        }
        pairs
    }

    fn name(&self) -> &'static str {
        "all-pairs"
    }
}
