//! StarSurvey: procedural solar-system survey, headless demo loop.
//!
//! Generates a fresh system, then lets the scripted autopilot fly the survey:
//! scan every planet, restart once, and finish the second run through the
//! force-complete path. The real game wires a window/input/render layer onto
//! the same `GameContext`; nothing here depends on one existing.

use anyhow::Result;
use engine_core::Time;
use game::assets::AssetCatalog;
use game::autopilot::Autopilot;
use game::{GameConfig, GameContext};
use std::path::Path;
use std::time::Duration;

/// Hard wall-clock cap so a wedged demo still exits.
const MAX_DEMO_SECONDS: f32 = 300.0;
/// Seconds between progress reports.
const REPORT_INTERVAL: f32 = 2.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                     StarSurvey                       ║");
    println!("║   procedural system · scan survey · headless demo    ║");
    println!("╚══════════════════════════════════════════════════════╝");

    log::info!("Starting StarSurvey demo");

    let config = GameConfig::load_or_default();
    let assets = AssetCatalog::discover(Path::new("."));
    log::info!(
        "{} of 2 optional models available; simulation runs either way",
        assets.available_count()
    );

    let mut ctx = GameContext::new(&config);
    log::info!(
        "Survey target: {} planets, {} probes in orbit, {} wrecks adrift",
        ctx.survey.total_planets,
        ctx.probes.len(),
        ctx.wrecks.len()
    );

    let mut pilot = Autopilot::new();
    let mut time = Time::new();
    let mut last_report = 0.0f32;

    loop {
        time.update();
        let dt = time.delta_seconds();

        let frame = pilot.frame(&ctx);
        if frame.quit_requested {
            log::info!("Demo script finished, leaving main loop");
            break;
        }

        let outcome = ctx.update(&frame, dt);

        if let Some(index) = outcome.scanned_planet {
            let planet = &ctx.system.planets[index];
            log::info!(
                "Scanned {} [{}] — {}/{} planets, score {}",
                planet.name,
                planet.biome.label(),
                ctx.survey.scanned_planets,
                ctx.survey.total_planets,
                ctx.survey.score
            );
        }
        if outcome.survey_completed {
            log::info!(
                "SURVEY COMPLETE — score {} over {} planets",
                ctx.survey.score,
                ctx.survey.total_planets
            );
        }
        if outcome.force_completed {
            log::info!("Force-complete trigger accepted");
        }
        if outcome.restarted {
            log::info!("Restarted: scan flags cleared, fresh probe layout");
        }

        if time.elapsed_seconds() - last_report >= REPORT_INTERVAL {
            last_report = time.elapsed_seconds();
            let hud = ctx.hud();
            match &hud.target {
                Some(target) => log::info!(
                    "Tracking {} [{}]{} — progress {:>3.0}%, speed {:>3.0}%, {} radar contacts",
                    target.name,
                    target.biome_label,
                    if target.jammed { " (JAMMED)" } else { "" },
                    hud.scan_progress * 100.0,
                    hud.speed_ratio * 100.0,
                    hud.radar_contacts.len()
                ),
                None => log::info!(
                    "In transit — {}/{} scanned, speed {:>3.0}%",
                    hud.scanned_planets,
                    hud.total_planets,
                    hud.speed_ratio * 100.0
                ),
            }
        }

        if time.elapsed_seconds() > MAX_DEMO_SECONDS {
            log::warn!("Demo wall-clock cap reached, exiting");
            break;
        }

        // Frame pacing: the sim is wall-clock driven, no need to spin
        std::thread::sleep(Duration::from_millis(4));
    }

    log::info!(
        "Shut down cleanly after {} frames ({:.1} s)",
        time.frame_count(),
        time.elapsed_seconds()
    );
    Ok(())
}
