//! Background starfield generation.

use glam::Vec3;
use rand::prelude::*;

/// A background star on the celestial shell. Immutable after creation.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Vec3,
    pub brightness: f32,
}

/// Scatter `count` stars on a spherical shell of radius 3000–3400.
///
/// Both angles are sampled uniformly, so the field is denser toward the
/// shell's poles rather than area-uniform. Deliberate; do not "fix".
pub fn generate_stars(count: usize, rng: &mut StdRng) -> Vec<Star> {
    (0..count)
        .map(|_| {
            let theta = (rng.gen_range(0..360) as f32).to_radians();
            let phi = (rng.gen_range(0..180) as f32).to_radians();
            let r = 3000.0 + rng.gen_range(0..4000) as f32 / 10.0;

            Star {
                pos: Vec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                ),
                brightness: 0.3 + rng.gen_range(0..70) as f32 / 100.0,
            }
        })
        .collect()
}
