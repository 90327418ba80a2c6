//! Solar-system assembly: sun, planet chain, asteroid population, starfield.

use crate::asteroid::{generate_asteroid_clusters, generate_asteroids, Asteroid};
use crate::planet::Planet;
use crate::starfield::{generate_stars, Star};
use glam::Vec3;
use rand::prelude::*;

/// The central star.
#[derive(Debug, Clone, Copy)]
pub struct Sun {
    pub pos: Vec3,
    pub radius: f32,
}

impl Default for Sun {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            radius: 25.0,
        }
    }
}

/// Tunable inputs for system generation. Defaults reproduce the stock layout.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Fewest planets a system may have.
    pub min_planets: usize,
    /// Most planets a system may have.
    pub max_planets: usize,
    /// Orbit radius of the innermost planet.
    pub min_sun_distance: f32,
    /// Free-orbiting belt asteroid count.
    pub asteroid_count: usize,
    /// Number of asteroid clusters.
    pub cluster_count: usize,
    /// Fewest members per cluster.
    pub cluster_min_population: usize,
    /// Most members per cluster.
    pub cluster_max_population: usize,
    /// Closest a cluster center may sit to the sun.
    pub cluster_min_distance: f32,
    /// Furthest a cluster center may sit from the sun.
    pub cluster_max_distance: f32,
    /// Background star count.
    pub star_count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_planets: 4,
            max_planets: 9,
            min_sun_distance: 1500.0,
            asteroid_count: 120,
            cluster_count: 4,
            cluster_min_population: 25,
            cluster_max_population: 55,
            cluster_min_distance: 300.0,
            cluster_max_distance: 1400.0,
            star_count: 2000,
        }
    }
}

/// A generated solar system. Owns every celestial body; gameplay and
/// presentation only ever borrow from it.
#[derive(Debug)]
pub struct SolarSystem {
    pub sun: Sun,
    pub planets: Vec<Planet>,
    pub asteroids: Vec<Asteroid>,
    pub stars: Vec<Star>,
}

impl SolarSystem {
    /// Generate a fresh system layout from `rng`.
    ///
    /// Re-invokable: every call produces an independent layout (used for a
    /// full "new galaxy" regeneration; the cheap restart path keeps geometry).
    pub fn generate(config: &GenerationConfig, rng: &mut StdRng) -> Self {
        let sun = Sun::default();
        let planets = generate_planet_chain(config, rng);

        let mut asteroids = generate_asteroids(config.asteroid_count, rng);
        asteroids.extend(generate_asteroid_clusters(
            config.cluster_count,
            config.cluster_min_population,
            config.cluster_max_population,
            config.cluster_min_distance,
            config.cluster_max_distance,
            rng,
        ));

        let stars = generate_stars(config.star_count, rng);

        log::info!(
            "System generated: {} planets, {} asteroids, {} stars",
            planets.len(),
            asteroids.len(),
            stars.len()
        );

        Self {
            sun,
            planets,
            asteroids,
            stars,
        }
    }

    /// World position of the planet at `index`, if the handle is live.
    pub fn planet_position(&self, index: usize) -> Option<Vec3> {
        self.planets.get(index).map(|p| p.world_position(self.sun.pos))
    }

    /// Find the nearest planet not yet scanned. Returns (index, distance).
    pub fn nearest_unscanned(&self, from: Vec3) -> Option<(usize, f32)> {
        self.planets
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.scanned)
            .map(|(i, p)| (i, from.distance(p.world_position(self.sun.pos))))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }
}

/// Chain planets outward: each orbit clears the previous planet's surface by
/// a random spacing, so consecutive shells can never overlap.
fn generate_planet_chain(config: &GenerationConfig, rng: &mut StdRng) -> Vec<Planet> {
    let count = rng.gen_range(config.min_planets..=config.max_planets);
    let mut current_distance = config.min_sun_distance;

    (0..count)
        .map(|i| {
            let planet = Planet::generate(i, current_distance, rng);
            let spacing = (80 + rng.gen_range(0..60)) as f32;
            current_distance = planet.distance + planet.size + spacing;
            planet
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::Biome;
    use rand::SeedableRng;

    fn system_with_seed(seed: u64) -> SolarSystem {
        let mut rng = StdRng::seed_from_u64(seed);
        SolarSystem::generate(&GenerationConfig::default(), &mut rng)
    }

    #[test]
    fn planet_count_within_configured_range() {
        for seed in 0..20 {
            let system = system_with_seed(seed);
            assert!((4..=9).contains(&system.planets.len()));
        }
    }

    #[test]
    fn orbital_shells_do_not_overlap() {
        for seed in 0..20 {
            let system = system_with_seed(seed);
            for pair in system.planets.windows(2) {
                assert!(
                    pair[1].distance >= pair[0].distance + pair[0].size,
                    "orbit {} overlaps previous shell",
                    pair[1].distance
                );
            }
        }
    }

    #[test]
    fn innermost_planet_respects_min_sun_distance() {
        let system = system_with_seed(5);
        assert_eq!(system.planets[0].distance, 1500.0);
    }

    #[test]
    fn biomes_cycle_through_the_chain() {
        let system = system_with_seed(8);
        for (i, planet) in system.planets.iter().enumerate() {
            assert_eq!(planet.biome, Biome::from_index(i));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = system_with_seed(1234);
        let b = system_with_seed(1234);
        assert_eq!(a.planets.len(), b.planets.len());
        for (pa, pb) in a.planets.iter().zip(&b.planets) {
            assert_eq!(pa.name, pb.name);
            assert_eq!(pa.distance, pb.distance);
            assert_eq!(pa.surface_variation, pb.surface_variation);
        }
    }

    #[test]
    fn regeneration_with_fresh_entropy_differs() {
        let a = system_with_seed(1);
        let b = system_with_seed(2);
        let names_a: Vec<_> = a.planets.iter().map(|p| p.name.as_str()).collect();
        let names_b: Vec<_> = b.planets.iter().map(|p| p.name.as_str()).collect();
        assert_ne!(names_a, names_b);
    }

    #[test]
    fn nearest_unscanned_skips_scanned_planets() {
        let mut system = system_with_seed(9);
        let origin = Vec3::ZERO;
        let (first, _) = system.nearest_unscanned(origin).unwrap();
        system.planets[first].scanned = true;
        let (second, _) = system.nearest_unscanned(origin).unwrap();
        assert_ne!(first, second);

        for p in &mut system.planets {
            p.scanned = true;
        }
        assert!(system.nearest_unscanned(origin).is_none());
    }
}
