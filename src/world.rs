use tracing::{debug, instrument, trace, warn};

use crate::collision::resolve::pair_mut;
use crate::collision::{
    detect, resolve_boundary, resolve_contact, AllPairs, BodyHandle, BroadPhase, Detection,
    PairKind,
};
use crate::config::WorldConfig;
use crate::dynamics::{RigidBody, RigidBodyDesc};
use crate::error::{PhysicsError, Result};
use crate::geometry::Aabb;
use crate::math::Vec3;
use crate::query::{pick_nearest, Ray, RayHit, SIMPLIFIED_INV_INERTIA};

/// Counters describing what one [`World::step`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Candidate pairs handed over by the broad phase
    pub pairs_tested: usize,
    /// Pairs found overlapping, degenerate ones included
    pub contacts_detected: usize,
    /// Contacts that went through positional correction and impulse
    pub contacts_resolved: usize,
    /// Overlapping pairs skipped because no normal could be derived
    pub degenerate_skipped: usize,
    /// Per-axis wall corrections
    pub boundary_corrections: usize,
}

/// Body hit by a kick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitReport {
    /// Body that was hit
    pub body: BodyHandle,
    /// World space hit point
    pub point: Vec3,
    /// Distance from ray origin
    pub distance: f64,
}

/// The physics world: owns every body and advances them frame by frame
pub struct World {
    /// Configuration
    config: WorldConfig,
    /// All rigid bodies, in insertion order
    bodies: Vec<RigidBody>,
    /// Candidate pair generation
    broad_phase: Box<dyn BroadPhase>,
    /// Current simulation time
    time: f64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl World {
    /// Creates a new physics world with the given configuration
    pub fn new(config: WorldConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            broad_phase: Box::new(AllPairs),
            time: 0.0,
        }
    }

    /// Creates a world after validating the configuration
    pub fn try_new(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Creates a new rigid body and returns its handle
    pub fn add_body(&mut self, desc: RigidBodyDesc) -> BodyHandle {
        let handle = BodyHandle::new(self.bodies.len() as u32);
        let mut body = desc.build();
        body.handle = handle;
        trace!(%handle, shape = ?body.shape().shape_type(), "body added");
        self.bodies.push(body);
        handle
    }

    /// Gets a reference to a body
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.index())
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        let count = self.bodies.len();
        self.bodies
            .get_mut(handle.index())
            .ok_or(PhysicsError::InvalidBodyHandle {
                index: handle.index(),
                count,
            })
    }

    /// All bodies, in insertion order
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// Returns an iterator over all body handles
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.bodies.iter().map(|b| b.handle())
    }

    /// Returns the number of bodies in the world
    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    /// Accumulates a force on a body for the next step
    pub fn apply_force(&mut self, handle: BodyHandle, force: Vec3) -> Result<()> {
        self.body_mut(handle)?.apply_force(force);
        Ok(())
    }

    /// Applies an impulse to a body at its center of mass
    pub fn apply_impulse(&mut self, handle: BodyHandle, impulse: Vec3) -> Result<()> {
        self.body_mut(handle)?.apply_impulse(impulse);
        Ok(())
    }

    /// Sets the gravity
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.config.gravity = gravity;
    }

    /// Gets the gravity
    pub fn gravity(&self) -> Vec3 {
        self.config.gravity
    }

    /// Walls every body is kept inside
    pub fn bounds(&self) -> Aabb {
        self.config.bounds
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Replaces the broad phase. Takes effect on the next step.
    pub fn set_broad_phase(&mut self, broad_phase: impl BroadPhase + 'static) {
        debug!(
            from = self.broad_phase.name(),
            to = broad_phase.name(),
            "broad phase replaced"
        );
        self.broad_phase = Box::new(broad_phase);
    }

    /// Name of the active broad phase
    pub fn broad_phase_name(&self) -> &'static str {
        self.broad_phase.name()
    }

    /// Returns the current simulation time
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Steps the simulation by the given time delta.
    ///
    /// Gravity is applied and every body integrated, then each candidate
    /// pair is tested and resolved in broad-phase order, then bodies are
    /// pushed back inside the bounds. `dt` is not clamped; a non-positive
    /// or non-finite `dt` leaves the world untouched.
    #[instrument(level = "trace", skip(self), fields(bodies = self.bodies.len()))]
    pub fn step(&mut self, dt: f64) -> StepStats {
        if !dt.is_finite() || dt <= 0.0 {
            warn!(dt, "ignoring non-positive or non-finite time step");
            return StepStats::default();
        }

        self.integrate(dt);
        let mut stats = self.resolve_collisions();
        stats.boundary_corrections = self.resolve_boundaries();

        self.time += dt;
        stats
    }

    /// Applies gravity and integrates every body
    fn integrate(&mut self, dt: f64) {
        let gravity = self.config.gravity;
        for body in &mut self.bodies {
            body.apply_force(gravity * body.mass);
            body.integrate(dt);
        }
    }

    /// Tests and resolves every candidate pair
    fn resolve_collisions(&mut self) -> StepStats {
        let mut stats = StepStats::default();
        let pairs = self.broad_phase.query_pairs(&self.bodies);

        for (handle_a, handle_b) in pairs {
            stats.pairs_tested += 1;
            let Some((body_a, body_b)) =
                pair_mut(&mut self.bodies, handle_a.index(), handle_b.index())
            else {
                continue;
            };

            let (kind, detection) = detect(body_a, body_b);
            let contact = match detection {
                Detection::Separated => continue,
                Detection::Degenerate => {
                    stats.contacts_detected += 1;
                    stats.degenerate_skipped += 1;
                    trace!(a = %handle_a, b = %handle_b, ?kind, "degenerate contact skipped");
                    continue;
                }
                Detection::Touching(contact) => contact,
            };
            stats.contacts_detected += 1;

            if kind == PairKind::SphereCube && !self.config.resolve_sphere_cube {
                trace!(a = %handle_a, b = %handle_b, "sphere-cube contact detected only");
                continue;
            }

            let resolution = resolve_contact(body_a, body_b, contact);
            stats.contacts_resolved += 1;
            debug!(
                a = %handle_a,
                b = %handle_b,
                ?kind,
                penetration = contact.penetration,
                impulse = resolution.impulse,
                "contact resolved"
            );
        }

        stats
    }

    /// Keeps every body inside the bounds
    fn resolve_boundaries(&mut self) -> usize {
        let bounds = self.config.bounds;
        self.bodies
            .iter_mut()
            .map(|body| resolve_boundary(body, &bounds))
            .sum()
    }

    /// Finds the nearest body along a ray within `max_distance`
    pub fn ray_cast(&self, ray: &Ray, max_distance: f64) -> Option<RayHit> {
        pick_nearest(&self.bodies, ray, max_distance)
    }

    /// Kicks the nearest body along a ray.
    ///
    /// The hit body receives `direction * impulse_magnitude` as a linear
    /// impulse. Cubes also pick up spin from the lever arm between their
    /// centre and the hit point, scaled by [`SIMPLIFIED_INV_INERTIA`].
    /// Returns `Ok(None)` when nothing is hit. `max_distance` must be finite
    /// and positive, `impulse_magnitude` finite.
    pub fn apply_impulse_along_ray(
        &mut self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f64,
        impulse_magnitude: f64,
    ) -> Result<Option<HitReport>> {
        if !max_distance.is_finite() || max_distance <= 0.0 {
            return Err(PhysicsError::InvalidArgument {
                name: "max_distance",
                value: max_distance,
            });
        }
        if !impulse_magnitude.is_finite() {
            return Err(PhysicsError::InvalidArgument {
                name: "impulse_magnitude",
                value: impulse_magnitude,
            });
        }
        let ray = Ray::new(origin, direction)?;
        let Some(hit) = pick_nearest(&self.bodies, &ray, max_distance) else {
            trace!(?origin, ?direction, max_distance, "kick missed");
            return Ok(None);
        };

        let body = self.body_mut(hit.body)?;
        let impulse = ray.direction * impulse_magnitude;
        body.apply_impulse(impulse);

        if body.shape.tracks_rotation() {
            let lever = hit.point - body.position;
            let spin = lever.cross(impulse) * (SIMPLIFIED_INV_INERTIA * body.inv_mass);
            body.angular_velocity += spin;
        }

        debug!(body = %hit.body, distance = hit.distance, impulse_magnitude, "kick applied");
        Ok(Some(HitReport {
            body: hit.body,
            point: hit.point,
            distance: hit.distance,
        }))
    }

    /// Kick with the reach and strength from the world configuration
    pub fn kick(&mut self, origin: Vec3, direction: Vec3) -> Result<Option<HitReport>> {
        let (reach, strength) = (self.config.max_kick_distance, self.config.kick_impulse);
        self.apply_impulse_along_ray(origin, direction, reach, strength)
    }
}
