//! Targeting and scan state machine.
//!
//! Runs once per frame after kinematics. Picks the nearest unscanned planet,
//! tracks aim/range/jam conditions, accumulates scan progress, and handles
//! survey completion, restart, and the force-complete escape hatch.

use crate::player::PlayerShip;
use crate::spawner::OrbitingProbe;
use crate::state::{SurveyState, SCAN_SCORE};
use input::FrameInput;
use procgen::SolarSystem;

/// Half-angle of the aim cone in degrees.
pub const AIM_CONE_DEGREES: f32 = 6.0;
/// Scan range beyond the target's collision radius.
pub const SCAN_RANGE_MARGIN: f32 = 12.0;
/// A probe within this distance of the target jams the scan.
pub const JAM_RADIUS: f32 = 18.0;

/// What the survey update did this frame, for the caller to react to
/// (logging, probe respawn, demo scripting).
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanOutcome {
    /// A planet finished scanning this frame.
    pub scanned_planet: Option<usize>,
    /// The survey transitioned to complete this frame.
    pub survey_completed: bool,
    /// All planets were force-completed this frame.
    pub force_completed: bool,
    /// A restart was accepted this frame; probes need respawning.
    pub restarted: bool,
}

/// Advance the survey state machine by one frame.
pub fn update_survey(
    system: &mut SolarSystem,
    probes: &[OrbitingProbe],
    player: &PlayerShip,
    input: &FrameInput,
    survey: &mut SurveyState,
    dt: f32,
) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    // Retarget every frame; switching targets drops all scan progress
    let new_target = system.nearest_unscanned(player.position).map(|(i, _)| i);
    if new_target != survey.current_target {
        survey.current_target = new_target;
        survey.reset_scan();
    }

    survey.scan_jammed = false;

    if let Some(index) = survey.current_target {
        if let Some(planet) = system.planets.get(index) {
            let target_pos = planet.world_position(system.sun.pos);
            let scan_range = planet.collision_radius + SCAN_RANGE_MARGIN;

            let aimed = player.is_facing(target_pos, AIM_CONE_DEGREES);
            let in_range = player.position.distance(target_pos) < scan_range;

            // Jamming is purely proximity-based, independent of aim or range
            let jammed = probes
                .iter()
                .any(|probe| probe.pos.distance(target_pos) < JAM_RADIUS);
            survey.scan_jammed = jammed;

            survey.is_scanning = !jammed && aimed && in_range && input.scan_held;
        }

        survey.advance_scan(dt);

        if survey.scan_progress >= 1.0 {
            if let Some(planet) = system.planets.get_mut(index) {
                if !planet.scanned {
                    planet.scanned = true;
                    survey.scanned_planets += 1;
                    survey.score += SCAN_SCORE;
                    survey.reset_scan();
                    outcome.scanned_planet = Some(index);
                }
            }
        }
    }

    if survey.scanned_planets == survey.total_planets && !survey.survey_complete {
        survey.survey_complete = true;
        outcome.survey_completed = true;
    }

    // Administrative escape hatch: finish the survey immediately
    if input.force_complete_pressed {
        for planet in &mut system.planets {
            planet.scanned = true;
        }
        survey.scanned_planets = survey.total_planets;
        survey.survey_complete = true;
        survey.reset_scan();
        outcome.force_completed = true;
    }

    if survey.survey_complete && input.restart_pressed {
        survey.reset_for_new_survey();
        for planet in &mut system.planets {
            planet.scanned = false;
        }
        outcome.restarted = true;
    }

    outcome
}
