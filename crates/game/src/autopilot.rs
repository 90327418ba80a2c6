//! Scripted survey pilot for the headless demo.
//!
//! Flies the ship at the current scan target, holds the scanner, and once
//! the first survey completes, demonstrates the restart and force-complete
//! paths before asking to quit. Produces ordinary [`FrameInput`] frames, so
//! the simulation cannot tell it apart from a player.

use crate::context::GameContext;
use crate::scan::SCAN_RANGE_MARGIN;
use glam::{Vec2, Vec3};
use input::FrameInput;

/// Stop closing in once this far inside the scan range (stays clear of the
/// collision shell).
const APPROACH_SLACK: f32 = 4.0;
/// Thrust frames with zero position change before declaring the ship stuck.
const STALL_FRAMES: u32 = 10;
/// How many frames to fly the escape vector once stuck.
const ESCAPE_FRAMES: u32 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoPhase {
    /// Fly the survey for real.
    FirstSurvey,
    /// Survey done once; restart issued, now demonstrate force-complete.
    SecondSurvey,
}

/// Demo flight controller.
pub struct Autopilot {
    phase: DemoPhase,
    last_position: Vec3,
    stall_frames: u32,
    escape_frames: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            phase: DemoPhase::FirstSurvey,
            last_position: Vec3::splat(f32::MAX),
            stall_frames: 0,
            escape_frames: 0,
        }
    }

    /// Produce this frame's input from the current simulation state.
    pub fn frame(&mut self, ctx: &GameContext) -> FrameInput {
        let mut input = FrameInput::default();

        match self.phase {
            DemoPhase::FirstSurvey => {
                if ctx.survey.survey_complete {
                    input.restart_pressed = true;
                    self.phase = DemoPhase::SecondSurvey;
                } else {
                    self.steer_at_target(ctx, &mut input);
                }
            }
            DemoPhase::SecondSurvey => {
                if ctx.survey.survey_complete {
                    input.quit_requested = true;
                } else {
                    input.force_complete_pressed = true;
                }
            }
        }

        input
    }

    /// Aim at the current target, thrust until inside scan range, hold scan.
    fn steer_at_target(&mut self, ctx: &GameContext, input: &mut FrameInput) {
        let Some(index) = ctx.survey.current_target else {
            return;
        };
        let Some(target_pos) = ctx.system.planet_position(index) else {
            return;
        };

        let to_target = target_pos - ctx.player.position;
        let distance = to_target.length();
        if distance < 1e-3 {
            return;
        }

        // Desired view angles from the offset; emit the look delta that
        // closes the difference this frame
        let desired_yaw = to_target.z.atan2(to_target.x).to_degrees();
        let desired_pitch = (to_target.y / distance).clamp(-1.0, 1.0).asin().to_degrees();
        let yaw_delta = wrap_half_turn(desired_yaw - ctx.player.yaw());
        let pitch_delta = desired_pitch.clamp(-89.0, 89.0) - ctx.player.pitch();
        let sensitivity = ctx.player.sensitivity.max(1e-4);
        input.look_delta = Vec2::new(yaw_delta / sensitivity, pitch_delta / sensitivity);

        input.scan_held = true;

        if self.escape_frames > 0 {
            self.escape_frames -= 1;
            input.movement = self.escape_vector(ctx);
            input.boost = true;
            return;
        }

        let scan_range = ctx
            .system
            .planets
            .get(index)
            .map(|p| p.collision_radius + SCAN_RANGE_MARGIN)
            .unwrap_or(SCAN_RANGE_MARGIN);

        if distance > scan_range - APPROACH_SLACK {
            input.movement = Vec3::new(0.0, 0.0, 1.0);
            // Outer planets can outrun cruise speed; always chase on boost
            input.boost = true;

            // Collision revert freezes the ship in place; if thrust moves us
            // nowhere for a while, fly an escape vector away from the blocker
            if ctx.player.position == self.last_position {
                self.stall_frames += 1;
                if self.stall_frames >= STALL_FRAMES {
                    self.stall_frames = 0;
                    self.escape_frames = ESCAPE_FRAMES;
                }
            } else {
                self.stall_frames = 0;
            }
        }

        self.last_position = ctx.player.position;
    }

    /// Camera-local movement pointing radially away from the nearest planet
    /// (straight up if nothing is close).
    fn escape_vector(&self, ctx: &GameContext) -> Vec3 {
        let nearest = ctx
            .system
            .planets
            .iter()
            .map(|p| p.world_position(ctx.system.sun.pos))
            .min_by(|a, b| {
                let da = ctx.player.position.distance_squared(*a);
                let db = ctx.player.position.distance_squared(*b);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(blocker) = nearest else {
            return Vec3::Y;
        };
        let away = ctx.player.position - blocker;
        if away.length_squared() < 1e-6 {
            return Vec3::Y;
        }
        let away = away.normalize();

        // Project the world-space escape direction onto the input axes
        Vec3::new(
            away.dot(ctx.player.right),
            away.y,
            away.dot(ctx.player.front),
        )
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold a degree difference into [-180, 180] so the turn is the short way.
fn wrap_half_turn(degrees: f32) -> f32 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}
