//! The simulation context: all mutable game state in one place, owned by the
//! main loop and passed explicitly to update and query code. No globals.

use crate::config::GameConfig;
use crate::hud::{build_hud, HudData};
use crate::player::{PlayerShip, PLAYER_RADIUS};
use crate::scan::{self, ScanOutcome};
use crate::spawner::{self, OrbitingProbe, ProbeSpawner, ProbeWreck};
use crate::state::SurveyState;
use glam::Vec3;
use input::FrameInput;
use procgen::SolarSystem;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Where the player starts relative to the sun.
const PLAYER_START: Vec3 = Vec3::new(0.0, 30.0, 100.0);

/// Everything the simulation owns. Created once at startup; restart resets
/// fields in place rather than rebuilding the world.
pub struct GameContext {
    pub system: SolarSystem,
    pub probes: Vec<OrbitingProbe>,
    pub wrecks: Vec<ProbeWreck>,
    pub player: PlayerShip,
    pub survey: SurveyState,
    spawner: ProbeSpawner,
}

impl GameContext {
    /// Generate a fresh world from OS entropy.
    pub fn new(config: &GameConfig) -> Self {
        Self::build(config, StdRng::from_entropy(), ProbeSpawner::new())
    }

    /// Generate a reproducible world (tests, replay debugging).
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::build(
            config,
            StdRng::seed_from_u64(seed),
            ProbeSpawner::with_seed(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        )
    }

    fn build(config: &GameConfig, mut rng: StdRng, mut spawner: ProbeSpawner) -> Self {
        let system = SolarSystem::generate(&config.generation(), &mut rng);
        let probes = spawner.spawn_for_planets(&system);
        let wrecks = spawner.spawn_wrecks();
        let player = PlayerShip::new(PLAYER_START, config.sensitivity);
        let survey = SurveyState::new(system.planets.len());

        Self {
            system,
            probes,
            wrecks,
            player,
            survey,
            spawner,
        }
    }

    /// Run one frame: player movement, kinematics, targeting/scan, collision
    /// correction. Returns what the scan machine did for the caller to log
    /// or script against.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> ScanOutcome {
        let previous_position = self.player.position;
        self.player.apply_look(input.look_delta);
        self.player.integrate(input, dt);

        sim::advance_system(&mut self.system, dt);
        spawner::update_probes(&mut self.probes, &self.system, dt);

        let outcome = scan::update_survey(
            &mut self.system,
            &self.probes,
            &self.player,
            input,
            &mut self.survey,
            dt,
        );
        if outcome.restarted {
            // Fresh jam layout for the new run; geometry stays
            self.probes = self.spawner.spawn_for_planets(&self.system);
        }

        self.player.position = sim::resolve_player_movement(
            &self.system,
            previous_position,
            self.player.position,
            PLAYER_RADIUS,
        );

        outcome
    }

    /// HUD snapshot for the presentation layer.
    pub fn hud(&self) -> HudData {
        build_hud(&self.system, &self.player, &self.survey)
    }
}
