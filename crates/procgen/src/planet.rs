//! Planet, moon, and biome generation.
//!
//! **Seed-based sampling:** orbit layout is drawn from the shared layout RNG
//! (fresh every generation), but everything derived from a planet's stored
//! `seed` (the 64-sample surface-variation table and the procedural name)
//! is fully deterministic: the same seed always reproduces the same table
//! and the same name.

use crate::rng::{hash_noise_1d, lerp, smoothstep, XorShift32};
use glam::Vec3;
use rand::prelude::*;

/// Number of samples in a planet's surface-variation table.
pub const SURFACE_RESOLUTION: usize = 64;

/// Planet surface category. Cycles Green → Rocky → Ice by planet index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Biome {
    /// Vegetated world with lakes.
    Green,
    /// Barren rock and hills.
    Rocky,
    /// Glaciated world, brighter toward the poles.
    Ice,
}

impl Biome {
    /// Biome for a planet index (cycles through all three).
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Biome::Green,
            1 => Biome::Rocky,
            _ => Biome::Ice,
        }
    }

    /// HUD label for this biome.
    pub fn label(&self) -> &'static str {
        match self {
            Biome::Green => "GREEN",
            Biome::Rocky => "ROCKY",
            Biome::Ice => "ICE",
        }
    }

    /// Roll an axial size for this biome (whole game units).
    pub fn roll_size(&self, rng: &mut StdRng) -> f32 {
        let base = match self {
            Biome::Green => 15,
            Biome::Rocky => 10,
            Biome::Ice => 12,
        };
        (base + rng.gen_range(0..6)) as f32
    }

    /// Base and secondary surface colors for this biome.
    pub fn roll_colors(&self, rng: &mut StdRng) -> (Vec3, Vec3) {
        match self {
            Biome::Green => (
                Vec3::new(0.0, 0.6 + rng.gen_range(0..20) as f32 / 100.0, 0.0),
                Vec3::new(0.0, 0.3, 0.4), // water
            ),
            Biome::Rocky => (Vec3::new(0.5, 0.4, 0.3), Vec3::new(0.3, 0.3, 0.3)),
            Biome::Ice => (Vec3::new(0.8, 0.9, 1.0), Vec3::new(0.6, 0.7, 0.9)),
        }
    }

    /// Shape a raw noise sample in [0, 1] into this biome's surface profile.
    /// `latitude` is the normalized sample position (index / resolution).
    pub fn shape_sample(&self, noise: f32, latitude: f32) -> f32 {
        match self {
            Biome::Green => smoothstep(0.2, 0.8, noise),
            Biome::Rocky => noise.powf(0.6),
            Biome::Ice => lerp(noise, 1.0, latitude * 0.6),
        }
    }
}

/// A moon orbiting a planet. Owned by exactly one [`Planet`].
#[derive(Debug, Clone)]
pub struct Moon {
    /// Orbit distance from the planet center.
    pub distance: f32,
    pub size: f32,
    /// Orbit angular speed in radians per second.
    pub speed: f32,
    /// Current orbit angle in radians.
    pub angle: f32,
}

/// A procedurally generated planet.
#[derive(Debug, Clone)]
pub struct Planet {
    pub biome: Biome,
    /// Base surface color.
    pub color: Vec3,
    /// Secondary surface color (water, shadow rock, deep ice).
    pub secondary_color: Vec3,
    /// Orbit distance from the sun.
    pub distance: f32,
    /// Axial size (render scale).
    pub size: f32,
    /// Orbit angular speed in radians per second.
    pub speed: f32,
    /// Current orbit angle in radians, kept in [0, 2π).
    pub angle: f32,
    pub collision_radius: f32,
    /// Spin speed in degrees per second.
    pub rotation_speed: f32,
    /// Current spin angle in degrees, kept in [0, 360).
    pub rotation_angle: f32,
    /// Vertical offset rolled at generation time (display flavor; the orbit
    /// itself stays in the ecliptic plane).
    pub height: f32,
    /// Seed for surface sampling and naming.
    pub seed: u32,
    /// Fixed-resolution surface-variation table, every sample in [0, 1].
    pub surface_variation: Vec<f32>,
    pub name: String,
    pub scanned: bool,
    pub moons: Vec<Moon>,
}

impl Planet {
    /// Generate the planet at `index` on an orbit of radius `distance`.
    /// Layout randomness comes from `rng`; seed-derived data is deterministic.
    pub fn generate(index: usize, distance: f32, rng: &mut StdRng) -> Self {
        let biome = Biome::from_index(index);
        let size = biome.roll_size(rng);
        let height = rng.gen_range(-120.0..120.0);
        let seed: u32 = rng.gen();

        let surface_variation = build_surface_variation(biome, seed);

        let speed = 0.01 + rng.gen_range(0..50) as f32 / 1000.0;
        let angle = (rng.gen_range(0..360) as f32).to_radians();
        let rotation_speed = (20 + rng.gen_range(0..40)) as f32;
        let (color, secondary_color) = biome.roll_colors(rng);
        let name = generate_planet_name(seed, index);

        let moon_count = 1 + index % 2;
        let moons = (0..moon_count)
            .map(|m| Moon {
                // Each moon sits further out than the last so they never meet
                distance: size + 2.5 + m as f32 * 1.8,
                size: 0.2 + rng.gen_range(0..20) as f32 / 100.0,
                speed: 0.03 + rng.gen_range(0..10) as f32 / 10.0,
                angle: (rng.gen_range(0..360) as f32).to_radians(),
            })
            .collect();

        Self {
            biome,
            color,
            secondary_color,
            distance,
            size,
            speed,
            angle,
            collision_radius: size * 1.5,
            rotation_speed,
            rotation_angle: 0.0,
            height,
            seed,
            surface_variation,
            name,
            scanned: false,
            moons,
        }
    }

    /// World-space position on the current orbit angle, relative to `sun_pos`.
    /// The orbit stays in the ecliptic plane (y = 0).
    pub fn world_position(&self, sun_pos: Vec3) -> Vec3 {
        Vec3::new(
            sun_pos.x + self.angle.cos() * self.distance,
            0.0,
            sun_pos.z + self.angle.sin() * self.distance,
        )
    }

    /// The surface-variation sample the shader highlights, indexed by seed.
    pub fn surface_sample(&self) -> f32 {
        // Table length is fixed and non-zero by construction
        self.surface_variation[self.seed as usize % self.surface_variation.len()]
    }

    /// Resolve a variation sample into a display color for this biome.
    pub fn surface_color(&self, variation: f32) -> Vec3 {
        match self.biome {
            // Green: lakes & grass
            Biome::Green => self.secondary_color.lerp(self.color, variation),
            // Rocky: rocks & hills, slightly compressed mask
            Biome::Rocky => self.secondary_color.lerp(self.color, variation.powf(0.8)),
            Biome::Ice => self.secondary_color.lerp(self.color, variation),
        }
    }
}

/// Build the 64-sample surface-variation table for a biome and seed.
fn build_surface_variation(biome: Biome, seed: u32) -> Vec<f32> {
    (0..SURFACE_RESOLUTION)
        .map(|k| {
            let latitude = k as f32 / SURFACE_RESOLUTION as f32;
            let base = hash_noise_1d(k as i32, seed) * 0.5 + 0.5;
            biome.shape_sample(base, latitude)
        })
        .collect()
}

/// Syllable tables for procedural planet names.
const SYLLABLE_A: [&str; 20] = [
    "AR", "ZA", "XE", "OR", "VE", "KA", "LI", "NO", "RA", "TU", "SA", "MI", "EL", "UN", "DO",
    "CY", "LO", "NE", "VI", "QU",
];
const SYLLABLE_B: [&str; 20] = [
    "LON", "RIN", "THA", "VEX", "MOR", "TAR", "NEX", "SEN", "KAL", "DOR", "VAN", "SOL", "ZEN",
    "KIR", "NAR", "VEL", "RAX", "TOR", "LUX", "PYR",
];
const SYLLABLE_C: [&str; 12] = [
    "IA", "ON", "US", "A", "IS", "OS", "UM", "E", "IX", "AR", "ER", "OR",
];

/// Generate a planet name from its seed and orbit index.
///
/// Three syllables, a 35% chance of a fourth, and a 40% chance of a numeric
/// suffix. Deterministic for a given (seed, index) pair.
pub fn generate_planet_name(seed: u32, index: usize) -> String {
    let mut stream = XorShift32::new(seed ^ (index as u32).wrapping_mul(0x9E37_79B9));

    let a = stream.next_range(0, SYLLABLE_A.len() as u32 - 1) as usize;
    let b = stream.next_range(0, SYLLABLE_B.len() as u32 - 1) as usize;
    let c = stream.next_range(0, SYLLABLE_C.len() as u32 - 1) as usize;

    let add_extra = stream.chance(35);
    let extra = stream.next_range(0, SYLLABLE_A.len() as u32 - 1) as usize;

    let mut name = format!("{}{}{}", SYLLABLE_A[a], SYLLABLE_B[b], SYLLABLE_C[c]);
    if add_extra {
        name.push_str(SYLLABLE_A[extra]);
    }

    if stream.chance(40) {
        name.push_str(&format!("-{}", index + 1));
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn surface_variation_within_unit_interval_for_all_biomes() {
        for biome in [Biome::Green, Biome::Rocky, Biome::Ice] {
            for seed in [0u32, 1, 777, 0xDEAD_BEEF, u32::MAX] {
                let table = build_surface_variation(biome, seed);
                assert_eq!(table.len(), SURFACE_RESOLUTION);
                for (k, &v) in table.iter().enumerate() {
                    assert!(
                        (0.0..=1.0).contains(&v),
                        "{:?} sample[{}] = {} out of range (seed {})",
                        biome,
                        k,
                        v,
                        seed
                    );
                }
            }
        }
    }

    #[test]
    fn surface_variation_deterministic_per_seed() {
        let a = build_surface_variation(Biome::Rocky, 424242);
        let b = build_surface_variation(Biome::Rocky, 424242);
        assert_eq!(a, b);
    }

    #[test]
    fn name_deterministic_for_seed_and_index() {
        assert_eq!(generate_planet_name(9001, 3), generate_planet_name(9001, 3));
    }

    #[test]
    fn name_varies_with_index() {
        let names: Vec<String> = (0..9).map(|i| generate_planet_name(555, i)).collect();
        // At least two distinct names across nine indexes (collisions on all
        // nine would need nine identical draws)
        assert!(names.iter().any(|n| n != &names[0]));
    }

    #[test]
    fn numeric_suffix_uses_orbit_number() {
        // Scan seeds until one rolls the 40% suffix; verify it encodes index + 1
        for seed in 0..200u32 {
            let name = generate_planet_name(seed, 4);
            if let Some(tail) = name.split('-').nth(1) {
                assert_eq!(tail, "5");
                return;
            }
        }
        panic!("no seed in 0..200 produced a numeric suffix");
    }

    #[test]
    fn moon_count_alternates_and_orbits_increase() {
        let mut rng = StdRng::seed_from_u64(7);
        for index in 0..6 {
            let planet = Planet::generate(index, 1500.0, &mut rng);
            assert_eq!(planet.moons.len(), 1 + index % 2);
            for pair in planet.moons.windows(2) {
                assert!(pair[1].distance > pair[0].distance);
            }
            // Innermost moon clears the planet surface
            assert!(planet.moons[0].distance > planet.size);
        }
    }

    #[test]
    fn seed_indexed_sample_resolves_to_a_valid_color() {
        let mut rng = StdRng::seed_from_u64(17);
        let planet = Planet::generate(2, 1500.0, &mut rng);
        let v = planet.surface_sample();
        assert_eq!(
            v,
            planet.surface_variation[planet.seed as usize % SURFACE_RESOLUTION]
        );
        let c = planet.surface_color(v);
        for channel in [c.x, c.y, c.z] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[test]
    fn biome_cycles_by_index() {
        assert_eq!(Biome::from_index(0), Biome::Green);
        assert_eq!(Biome::from_index(1), Biome::Rocky);
        assert_eq!(Biome::from_index(2), Biome::Ice);
        assert_eq!(Biome::from_index(3), Biome::Green);
    }

    #[test]
    fn collision_radius_tracks_size() {
        let mut rng = StdRng::seed_from_u64(99);
        let planet = Planet::generate(0, 1500.0, &mut rng);
        assert!((planet.collision_radius - planet.size * 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn world_position_stays_in_ecliptic_plane() {
        let mut rng = StdRng::seed_from_u64(3);
        let planet = Planet::generate(0, 1500.0, &mut rng);
        let pos = planet.world_position(Vec3::ZERO);
        assert_eq!(pos.y, 0.0);
        let radial = (pos.x * pos.x + pos.z * pos.z).sqrt();
        assert!((radial - planet.distance).abs() < 0.5);
    }
}
