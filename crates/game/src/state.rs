//! Survey gameplay state: score, scan progress, and completion flags.
//!
//! Mutated exclusively by the scan state machine in `scan.rs`; everyone else
//! (HUD, demo loop) reads it. Created once at scene init and reset in place
//! on restart, never recreated.

/// Scan accumulation rate per second; a clean scan takes 2.5 s.
pub const SCAN_RATE: f32 = 0.4;
/// Score awarded per scanned planet.
pub const SCAN_SCORE: u32 = 100;

/// Gameplay state for the survey run.
#[derive(Debug, Clone)]
pub struct SurveyState {
    pub total_planets: usize,
    pub scanned_planets: usize,
    pub score: u32,
    /// Index of the targeted planet; `None` once everything is scanned.
    pub current_target: Option<usize>,
    /// Scan progress on the current target, in [0, 1].
    pub scan_progress: f32,
    pub is_scanning: bool,
    pub scan_jammed: bool,
    /// Sticky until restart.
    pub survey_complete: bool,
}

impl SurveyState {
    pub fn new(total_planets: usize) -> Self {
        Self {
            total_planets,
            scanned_planets: 0,
            score: 0,
            current_target: None,
            scan_progress: 0.0,
            is_scanning: false,
            scan_jammed: false,
            survey_complete: false,
        }
    }

    /// Drop all per-target scan state. Called on retarget and after a
    /// completed scan.
    pub fn reset_scan(&mut self) {
        self.scan_progress = 0.0;
        self.is_scanning = false;
        self.scan_jammed = false;
    }

    /// Accumulate scan progress for this frame. Frozen (not reset) while the
    /// scan is interrupted or jammed; clamped at 1.0.
    pub fn advance_scan(&mut self, dt: f32) {
        if !self.is_scanning || self.scan_jammed {
            return;
        }
        self.scan_progress = (self.scan_progress + dt * SCAN_RATE).min(1.0);
    }

    /// Zero everything for a fresh survey of the same system.
    pub fn reset_for_new_survey(&mut self) {
        self.score = 0;
        self.scanned_planets = 0;
        self.survey_complete = false;
        self.reset_scan();
    }
}
