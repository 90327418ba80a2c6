//! Per-frame input signals for the simulation core.
//!
//! The windowing/platform layer is a separate collaborator; this crate only
//! defines the data it hands the simulation each frame, plus the [`InputSource`]
//! seam it plugs into. Keeping the types free of any window-system dependency
//! lets the whole game loop run headless (tests, scripted demos, bots).

use glam::{Vec2, Vec3};

/// Everything the simulation consumes from the platform in one frame.
///
/// Movement is expressed in camera-local axes: `x` strafe (right positive),
/// `y` vertical (world up positive), `z` forward (toward the view direction).
/// The flight model normalizes, so magnitudes above 1 carry no extra speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Held movement intent in camera-local axes.
    pub movement: Vec3,
    /// Boost (afterburner) held.
    pub boost: bool,
    /// Mouse-look delta for this frame, in raw units (pre-sensitivity).
    pub look_delta: Vec2,
    /// Scan key held.
    pub scan_held: bool,
    /// Restart trigger (edge, not level); only honored once the survey is complete.
    pub restart_pressed: bool,
    /// Administrative trigger: mark every planet scanned immediately.
    pub force_complete_pressed: bool,
    /// User asked to leave the main loop.
    pub quit_requested: bool,
}

impl FrameInput {
    /// An idle frame: no movement, no look, nothing held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Whether any movement intent is present this frame.
    pub fn has_movement(&self) -> bool {
        self.movement.length_squared() > 0.0
    }
}

/// Source of per-frame input.
///
/// The platform collaborator (window event pump) implements this in the real
/// game; tests and the headless demo implement it with scripted values.
pub trait InputSource {
    /// Produce the input signals for the frame that is about to run.
    fn poll(&mut self) -> FrameInput;
}

/// Replays a fixed input every frame. Handy for tests and soak runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantInput(pub FrameInput);

impl InputSource for ConstantInput {
    fn poll(&mut self) -> FrameInput {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_frame_has_no_movement() {
        let input = FrameInput::idle();
        assert!(!input.has_movement());
        assert!(!input.scan_held);
    }

    #[test]
    fn constant_source_replays_same_frame() {
        let mut source = ConstantInput(FrameInput {
            movement: Vec3::new(0.0, 0.0, 1.0),
            scan_held: true,
            ..FrameInput::default()
        });
        let a = source.poll();
        let b = source.poll();
        assert!(a.has_movement() && b.has_movement());
        assert!(a.scan_held && b.scan_held);
    }
}
