//! Orbital and rotational kinematics, advanced once per frame.
//!
//! Every angle is a wrapped accumulator and every position is derived: body
//! positions are recomputed in full from (radius, angle) each frame, never
//! integrated, so they cannot drift from their orbital parameters.

use glam::Vec3;
use procgen::{AsteroidPath, Moon, SolarSystem};
use std::f32::consts::TAU;

/// Wrap a radian angle into [0, 2π).
pub fn wrap_radians(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

/// Wrap a degree angle into [0, 360).
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Position on a horizontal circular orbit of `radius` around `center`.
pub fn orbit_position(center: Vec3, radius: f32, angle: f32, y_offset: f32) -> Vec3 {
    center + Vec3::new(angle.cos() * radius, y_offset, angle.sin() * radius)
}

/// World position of a moon around its planet's current position.
pub fn moon_world_position(planet_pos: Vec3, moon: &Moon) -> Vec3 {
    orbit_position(planet_pos, moon.distance, moon.angle, 0.0)
}

/// Advance every celestial body by `dt` seconds.
///
/// Variable-step on purpose: a large `dt` (pause, stall) produces one large
/// visible jump rather than being clamped or subdivided.
pub fn advance_system(system: &mut SolarSystem, dt: f32) {
    for planet in &mut system.planets {
        planet.angle = wrap_radians(planet.angle + planet.speed * dt);
        planet.rotation_angle = wrap_degrees(planet.rotation_angle + planet.rotation_speed * dt);
        for moon in &mut planet.moons {
            moon.angle = wrap_radians(moon.angle + moon.speed * dt);
        }
    }

    for asteroid in &mut system.asteroids {
        match &mut asteroid.path {
            AsteroidPath::Free { angle, speed, .. } => {
                *angle = wrap_radians(*angle + *speed * dt);
            }
            AsteroidPath::Clustered {
                local_angle,
                local_speed,
                ..
            } => {
                *local_angle = wrap_radians(*local_angle + *local_speed * dt);
            }
        }
        asteroid.pos = asteroid.path.position();
    }
}
