//! Basic physics simulation example
//!
//! This example demonstrates a ball and a box falling onto the floor of the
//! world under gravity.

use kickbox::prelude::*;

fn main() {
    println!("kickbox - Basic Simulation Example");
    println!("==================================\n");

    // Default world: floor at Y=0, walls at X/Z = +-10
    let mut world = World::default();
    world.set_gravity(Vec3::new(0.0, -9.81, 0.0));

    let ball = world.add_body(
        RigidBodyDesc::sphere(0.5)
            .with_position(Vec3::new(0.0, 5.0, 0.0))
            .with_restitution(0.6),
    );
    println!("Created ball at Y=5.0 (radius=0.5)");

    let crate_box = world.add_body(
        RigidBodyDesc::cube(Vec3::splat(0.5))
            .with_position(Vec3::new(0.2, 8.0, 0.0))
            .with_mass(2.0),
    );
    println!("Created box at Y=8.0 (half-extent=0.5), it lands on the ball\n");

    // Simulation parameters
    let dt = 1.0 / 60.0;
    let total_time = 3.0;
    let steps = (total_time / dt) as usize;

    println!("Simulating {} seconds ({} steps at {}Hz)...\n", total_time, steps, 1.0 / dt);

    for i in 0..steps {
        let stats = world.step(dt);

        // Print every 30 frames (0.5 seconds)
        if i % 30 == 0 {
            for handle in [ball, crate_box] {
                if let Some(body) = world.body(handle) {
                    let (pos, vel) = (body.position(), body.velocity());
                    println!(
                        "t={:.2}s {}: position=({:.3}, {:.3}, {:.3}), velocity=({:.3}, {:.3}, {:.3})",
                        world.time(),
                        handle,
                        pos.x, pos.y, pos.z,
                        vel.x, vel.y, vel.z
                    );
                }
            }
            println!("      contacts={} walls={}", stats.contacts_resolved, stats.boundary_corrections);
        }
    }

    if let Some(body) = world.body(ball) {
        let p = body.position();
        println!("\nFinal ball position: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
    }
    println!("Expected resting height: ~0.5 (floor at 0 + ball radius 0.5)");
}
