//! Random scene with periodic kicks
//!
//! Loads a JSON config if a path is given, fills the world with random
//! bodies and kicks whatever sits in front of a fixed camera once a second.
//!
//! Run with: cargo run --example kick_scene [-- config.json]
//! Set RUST_LOG=kickbox=debug to see every contact.

use std::error::Error;

use kickbox::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    let mut world = World::try_new(config.world.clone())?;
    let handles = populate(&mut world, &config.scene)?;
    info!(bodies = handles.len(), "scene ready");

    let bounds = world.bounds();
    let camera = Vec3::new(bounds.center().x, bounds.center().y, bounds.min.z - 5.0);
    let dt = 1.0 / 60.0;

    for frame in 0..600u32 {
        if frame % 60 == 0 {
            // Aim at the lowest body so the kick usually lands
            let target = world
                .bodies()
                .iter()
                .min_by(|a, b| a.position().y.total_cmp(&b.position().y))
                .map(|b| b.position());
            if let Some(target) = target {
                match world.kick(camera, target - camera)? {
                    Some(hit) => info!(body = %hit.body, distance = hit.distance, "kicked"),
                    None => info!("kick missed"),
                }
            }
        }

        let stats = world.step(dt);
        if frame % 120 == 0 {
            info!(
                frame,
                contacts = stats.contacts_resolved,
                walls = stats.boundary_corrections,
                "step"
            );
        }
    }

    let energy: f64 = world
        .bodies()
        .iter()
        .map(|b| 0.5 * b.mass() * b.velocity().length_squared())
        .sum();
    info!(time = world.time(), kinetic_energy = energy, "done");
    Ok(())
}
