//! Sphere-sphere collision tests and player position correction.

use glam::Vec3;
use procgen::SolarSystem;

/// Two spheres overlap iff their centers are strictly closer than the sum of
/// their radii. Touching exactly at the threshold does not count.
pub fn collides(a_pos: Vec3, a_radius: f32, b_pos: Vec3, b_radius: f32) -> bool {
    a_pos.distance_squared(b_pos) < (a_radius + b_radius) * (a_radius + b_radius)
}

/// Resolve a player move against the sun, every planet, and every asteroid.
///
/// Returns the position the player ends the frame at: `attempted` if it is
/// clear, otherwise `previous` (simple positional revert, no impulse). O(n)
/// over all bodies, which is fine at tens-to-hundreds of bodies.
pub fn resolve_player_movement(
    system: &SolarSystem,
    previous: Vec3,
    attempted: Vec3,
    player_radius: f32,
) -> Vec3 {
    if collides(attempted, player_radius, system.sun.pos, system.sun.radius) {
        return previous;
    }

    for planet in &system.planets {
        let planet_pos = planet.world_position(system.sun.pos);
        if collides(attempted, player_radius, planet_pos, planet.collision_radius) {
            return previous;
        }
    }

    for asteroid in &system.asteroids {
        if collides(attempted, player_radius, asteroid.pos, asteroid.collision_radius) {
            return previous;
        }
    }

    attempted
}
