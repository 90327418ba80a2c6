//! HUD (Heads-Up Display) data for the survey view.
//!
//! Assembles everything the HUD shows (score dots, scan bar, target
//! readout, radar contacts, speedometer) as plain data. Drawing lines and
//! glyphs from it is the presentation layer's job.

use crate::player::PlayerShip;
use crate::scan::AIM_CONE_DEGREES;
use crate::state::SurveyState;
use glam::Vec2;
use procgen::SolarSystem;

/// Radar picks up asteroids within this distance.
pub const RADAR_DETECTION_RANGE: f32 = 150.0;
/// World distance mapped to the radar's edge.
pub const RADAR_DISTANCE_SCALE: f32 = 80.0;
/// Target name/class appears within collision radius + this margin.
pub const NAME_DISPLAY_MARGIN: f32 = 50.0;
/// Scan bar appears within collision radius + this margin.
pub const BAR_DISPLAY_MARGIN: f32 = 30.0;

/// Name plate for the current target.
#[derive(Debug, Clone)]
pub struct TargetReadout {
    pub name: String,
    pub biome_label: &'static str,
    pub jammed: bool,
}

/// One asteroid blip. `offset` is radar-relative: x right / y forward of the
/// player's heading, each clamped to [-1, 1] (1 = radar edge).
#[derive(Debug, Clone, Copy)]
pub struct RadarContact {
    pub offset: Vec2,
}

/// All HUD data for a frame.
#[derive(Debug, Clone)]
pub struct HudData {
    pub score: u32,
    pub scanned_planets: usize,
    pub total_planets: usize,
    pub scan_progress: f32,
    pub is_scanning: bool,
    pub scan_jammed: bool,
    pub survey_complete: bool,
    /// Current speed over boost speed, in [0, 1].
    pub speed_ratio: f32,
    /// Present while an unscanned target should show its name plate.
    pub target: Option<TargetReadout>,
    pub show_scan_bar: bool,
    pub radar_contacts: Vec<RadarContact>,
}

/// Build the HUD snapshot for this frame.
pub fn build_hud(system: &SolarSystem, player: &PlayerShip, survey: &SurveyState) -> HudData {
    let mut target = None;
    let mut show_scan_bar = false;

    if let Some(index) = survey.current_target {
        if let Some(planet) = system.planets.get(index) {
            if !planet.scanned {
                let planet_pos = planet.world_position(system.sun.pos);
                let distance = player.position.distance(planet_pos);
                let aimed = player.is_facing(planet_pos, AIM_CONE_DEGREES);

                let name_range = planet.collision_radius + NAME_DISPLAY_MARGIN;
                if (aimed && distance < name_range) || survey.is_scanning {
                    target = Some(TargetReadout {
                        name: planet.name.clone(),
                        biome_label: planet.biome.label(),
                        jammed: survey.scan_jammed,
                    });
                }

                let bar_range = planet.collision_radius + BAR_DISPLAY_MARGIN;
                show_scan_bar = (aimed && distance < bar_range) || survey.is_scanning;
            }
        }
    }

    HudData {
        score: survey.score,
        scanned_planets: survey.scanned_planets,
        total_planets: survey.total_planets,
        scan_progress: survey.scan_progress,
        is_scanning: survey.is_scanning,
        scan_jammed: survey.scan_jammed,
        survey_complete: survey.survey_complete,
        speed_ratio: player.speed_ratio(),
        target,
        show_scan_bar,
        radar_contacts: radar_contacts(system, player),
    }
}

/// Project nearby asteroids onto the radar disc, relative to player heading.
fn radar_contacts(system: &SolarSystem, player: &PlayerShip) -> Vec<RadarContact> {
    let heading = (player.yaw() + 90.0).to_radians();

    system
        .asteroids
        .iter()
        .filter_map(|asteroid| {
            let offset = asteroid.pos - player.position;
            if offset.length() > RADAR_DETECTION_RANGE {
                return None;
            }

            let bearing = offset.x.atan2(offset.z) - heading;
            let flat_distance = Vec2::new(offset.x, offset.z).length();
            let scale = flat_distance / RADAR_DISTANCE_SCALE;

            Some(RadarContact {
                offset: Vec2::new(
                    (bearing.sin() * scale).clamp(-1.0, 1.0),
                    (bearing.cos() * scale).clamp(-1.0, 1.0),
                ),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use procgen::GenerationConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn world() -> (SolarSystem, SurveyState) {
        let mut rng = StdRng::seed_from_u64(61);
        let system = SolarSystem::generate(&GenerationConfig::default(), &mut rng);
        let survey = SurveyState::new(system.planets.len());
        (system, survey)
    }

    #[test]
    fn radar_sees_only_nearby_asteroids() {
        let (system, survey) = world();
        // Park on top of the first asteroid: guaranteed at least one contact
        let player = PlayerShip::new(system.asteroids[0].pos + Vec3::new(5.0, 0.0, 0.0), 0.1);
        let hud = build_hud(&system, &player, &survey);
        assert!(!hud.radar_contacts.is_empty());
        for contact in &hud.radar_contacts {
            assert!(contact.offset.x.abs() <= 1.0);
            assert!(contact.offset.y.abs() <= 1.0);
        }

        // Far above the ecliptic nothing is in range
        let player = PlayerShip::new(Vec3::new(0.0, 2000.0, 0.0), 0.1);
        let hud = build_hud(&system, &player, &survey);
        assert!(hud.radar_contacts.is_empty());
    }

    #[test]
    fn target_readout_appears_when_aimed_and_near() {
        let (mut system, mut survey) = world();
        survey.current_target = Some(0);
        let planet_pos = system.planets[0].world_position(system.sun.pos);
        let player = PlayerShip::new(
            planet_pos + Vec3::new(0.0, 0.0, system.planets[0].collision_radius + 10.0),
            1.0,
        );

        let hud = build_hud(&system, &player, &survey);
        let readout = hud.target.expect("target plate should be visible");
        assert_eq!(readout.name, system.planets[0].name);
        assert_eq!(readout.biome_label, system.planets[0].biome.label());
        assert!(hud.show_scan_bar);

        // A scanned target shows nothing
        system.planets[0].scanned = true;
        let hud = build_hud(&system, &player, &survey);
        assert!(hud.target.is_none());
        assert!(!hud.show_scan_bar);
    }

    #[test]
    fn no_target_no_plate() {
        let (system, survey) = world();
        let player = PlayerShip::new(Vec3::ZERO, 1.0);
        let hud = build_hud(&system, &player, &survey);
        assert!(hud.target.is_none());
        assert_eq!(hud.scanned_planets, 0);
        assert_eq!(hud.total_planets, system.planets.len());
    }

    #[test]
    fn speed_ratio_is_clamped() {
        let (system, survey) = world();
        let mut player = PlayerShip::new(Vec3::new(0.0, 2000.0, 0.0), 1.0);
        player.velocity = Vec3::new(0.0, 0.0, 500.0);
        let hud = build_hud(&system, &player, &survey);
        assert_eq!(hud.speed_ratio, 1.0);
    }
}
