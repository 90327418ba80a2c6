//! Asteroid generation: free-orbiting belt rocks and clustered swarms.

use glam::Vec3;
use rand::prelude::*;

/// How an asteroid moves. The two variants are mutually exclusive by
/// construction: a rock either circles the system origin or circles a fixed
/// cluster center, never both.
#[derive(Debug, Clone)]
pub enum AsteroidPath {
    /// Free orbit around the system origin.
    Free {
        /// Orbit radius from the origin.
        radius: f32,
        /// Angular speed in radians per second.
        speed: f32,
        /// Current orbit angle in radians, kept in [0, 2π).
        angle: f32,
        /// Constant orbit height above the ecliptic.
        height: f32,
    },
    /// Local orbit around a shared cluster center.
    Clustered {
        /// Fixed cluster center in world space.
        center: Vec3,
        /// Local orbit radius around the center.
        local_radius: f32,
        /// Current local angle in radians, kept in [0, 2π).
        local_angle: f32,
        /// Local angular speed in radians per second.
        local_speed: f32,
        /// Constant height offset from the cluster center.
        height: f32,
    },
}

impl AsteroidPath {
    /// World position this path resolves to at its current angles.
    pub fn position(&self) -> Vec3 {
        match *self {
            AsteroidPath::Free {
                radius,
                angle,
                height,
                ..
            } => Vec3::new(angle.cos() * radius, height, angle.sin() * radius),
            AsteroidPath::Clustered {
                center,
                local_radius,
                local_angle,
                height,
                ..
            } => center + Vec3::new(local_angle.cos() * local_radius, height, local_angle.sin() * local_radius),
        }
    }
}

/// A tumbling rock, either belt-orbiting or cluster-bound.
#[derive(Debug, Clone)]
pub struct Asteroid {
    /// Derived world position; recomputed in full every frame from `path`.
    pub pos: Vec3,
    /// Random base rotation angles in degrees (tumble seed for display).
    pub rot: Vec3,
    pub scale: f32,
    pub collision_radius: f32,
    pub path: AsteroidPath,
}

/// Scatter `count` free-orbiting asteroids near the inner system.
pub fn generate_asteroids(count: usize, rng: &mut StdRng) -> Vec<Asteroid> {
    (0..count)
        .map(|_| {
            let radius = 80.0 + rng.gen_range(0..400) as f32 / 10.0;
            let height = (rng.gen_range(0..40) as f32 - 20.0) * 0.15;
            let speed = 0.03 + rng.gen_range(0..15) as f32 / 1000.0;
            let scale = 0.3 + rng.gen_range(0..80) as f32 / 100.0;

            let path = AsteroidPath::Free {
                radius,
                speed,
                angle: (rng.gen_range(0..360) as f32).to_radians(),
                height,
            };
            Asteroid {
                pos: path.position(),
                rot: Vec3::new(
                    rng.gen_range(0..360) as f32,
                    rng.gen_range(0..360) as f32,
                    rng.gen_range(0..360) as f32,
                ),
                scale,
                collision_radius: scale * 0.8,
                path,
            }
        })
        .collect()
}

/// Populate `cluster_count` asteroid clusters.
///
/// Each cluster gets a random center around the sun between the distance
/// bounds, then `min_per..=max_per` members on local polar orbits around it.
pub fn generate_asteroid_clusters(
    cluster_count: usize,
    min_per_cluster: usize,
    max_per_cluster: usize,
    min_cluster_dist: f32,
    max_cluster_dist: f32,
    rng: &mut StdRng,
) -> Vec<Asteroid> {
    let mut asteroids = Vec::new();

    for _ in 0..cluster_count {
        let angle = (rng.gen_range(0..360) as f32).to_radians();
        let span = (max_cluster_dist - min_cluster_dist + 1.0) as u32;
        let dist = min_cluster_dist + rng.gen_range(0..span) as f32;
        let height = (rng.gen_range(0..600) as f32 - 300.0) * 0.05;

        let center = Vec3::new(angle.cos() * dist, height, angle.sin() * dist);

        let count = rng.gen_range(min_per_cluster..=max_per_cluster);
        for _ in 0..count {
            let scale = 0.25 + rng.gen_range(0..90) as f32 / 100.0;

            let path = AsteroidPath::Clustered {
                center,
                local_radius: 6.0 + rng.gen_range(0..220) as f32 / 10.0,
                local_angle: (rng.gen_range(0..360) as f32).to_radians(),
                local_speed: 0.2 + rng.gen_range(0..120) as f32 / 100.0,
                height: (rng.gen_range(0..800) as f32 - 400.0) * 0.02,
            };
            asteroids.push(Asteroid {
                pos: path.position(),
                rot: Vec3::new(
                    rng.gen_range(0..360) as f32,
                    rng.gen_range(0..360) as f32,
                    rng.gen_range(0..360) as f32,
                ),
                scale,
                collision_radius: scale * 0.8,
                path,
            });
        }
    }

    asteroids
}
