//! Random scene population.
//!
//! Fills a world with spheres and cubes drawn from a [`SceneConfig`]. The
//! generator is seeded, so the same config always yields the same scene.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::collision::BodyHandle;
use crate::config::{SampleRange, SceneConfig};
use crate::dynamics::{Color, RigidBodyDesc};
use crate::error::Result;
use crate::math::Vec3;
use crate::world::World;

fn sample(rng: &mut StdRng, range: SampleRange) -> f64 {
    rng.gen_range(range.min..=range.max)
}

fn random_direction(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
    )
    .normalize()
}

/// Builds one random body description inside the world bounds
fn random_body(rng: &mut StdRng, world: &World, config: &SceneConfig) -> RigidBodyDesc {
    let desc = if rng.gen_bool(config.cube_ratio) {
        RigidBodyDesc::cube(Vec3::new(
            sample(rng, config.half_extent),
            sample(rng, config.half_extent),
            sample(rng, config.half_extent),
        ))
    } else {
        RigidBodyDesc::sphere(sample(rng, config.radius))
    };

    // Keep the whole body inside the walls
    let area = world.bounds().shrink(desc.shape.half_extents());
    let position = Vec3::new(
        rng.gen_range(area.min.x..=area.max.x),
        rng.gen_range(area.min.y..=area.max.y),
        rng.gen_range(area.min.z..=area.max.z),
    );
    let velocity = random_direction(rng) * sample(rng, config.speed);

    desc.with_position(position)
        .with_velocity(velocity)
        .with_mass(sample(rng, config.mass))
        .with_restitution(sample(rng, config.restitution))
        .with_color(Color::rgb(rng.gen(), rng.gen(), rng.gen()))
}

/// Adds `config.body_count` random bodies to `world`.
///
/// Bodies may start overlapping; the first steps push them apart.
pub fn populate(world: &mut World, config: &SceneConfig) -> Result<Vec<BodyHandle>> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let handles: Vec<BodyHandle> = (0..config.body_count)
        .map(|_| {
            let desc = random_body(&mut rng, world, config);
            world.add_body(desc)
        })
        .collect();

    info!(
        count = handles.len(),
        seed = config.seed,
        total = world.num_bodies(),
        "scene populated"
    );
    Ok(handles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ShapeType;
    use crate::math::Axis;

    fn snapshot(world: &World) -> Vec<(Vec3, Vec3, f64)> {
        world
            .bodies()
            .iter()
            .map(|b| (b.position(), b.velocity(), b.mass()))
            .collect()
    }

    #[test]
    fn test_same_seed_same_scene() {
        let config = SceneConfig::default();

        let mut a = World::default();
        let mut b = World::default();
        populate(&mut a, &config).unwrap();
        populate(&mut b, &config).unwrap();

        assert_eq!(snapshot(&a), snapshot(&b));
    }

    #[test]
    fn test_different_seed_differs() {
        let mut a = World::default();
        let mut b = World::default();
        populate(&mut a, &SceneConfig::default()).unwrap();
        populate(
            &mut b,
            &SceneConfig {
                seed: 7,
                ..SceneConfig::default()
            },
        )
        .unwrap();

        assert_ne!(snapshot(&a), snapshot(&b));
    }

    #[test]
    fn test_bodies_start_inside_bounds() {
        let mut world = World::default();
        let config = SceneConfig {
            body_count: 200,
            ..SceneConfig::default()
        };
        let handles = populate(&mut world, &config).unwrap();
        assert_eq!(handles.len(), 200);

        let bounds = world.bounds();
        for body in world.bodies() {
            for axis in Axis::ALL {
                let e = body.extent(axis);
                assert!(body.position()[axis] - e >= bounds.min[axis] - 1e-9);
                assert!(body.position()[axis] + e <= bounds.max[axis] + 1e-9);
            }
            assert!(body.mass() >= config.mass.min && body.mass() <= config.mass.max);
        }
    }

    #[test]
    fn test_cube_ratio_extremes() {
        let mut world = World::default();
        let config = SceneConfig {
            cube_ratio: 1.0,
            body_count: 10,
            ..SceneConfig::default()
        };
        populate(&mut world, &config).unwrap();
        assert!(world
            .bodies()
            .iter()
            .all(|b| b.shape().shape_type() == ShapeType::Cube));

        let mut world = World::default();
        populate(
            &mut world,
            &SceneConfig {
                cube_ratio: 0.0,
                ..config
            },
        )
        .unwrap();
        assert!(world
            .bodies()
            .iter()
            .all(|b| b.shape().shape_type() == ShapeType::Sphere));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut world = World::default();
        let config = SceneConfig {
            radius: SampleRange::new(2.0, 1.0),
            ..SceneConfig::default()
        };
        assert!(populate(&mut world, &config).is_err());
        assert_eq!(world.num_bodies(), 0);
    }
}
