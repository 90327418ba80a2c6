//! Player ship flight model: smoothed thrust toward an input-directed
//! velocity, mouse-look yaw/pitch, and the view basis derived from them.

use glam::{Vec2, Vec3};
use input::FrameInput;

/// Collision radius of the player ship.
pub const PLAYER_RADIUS: f32 = 2.0;

const WORLD_UP: Vec3 = Vec3::Y;

/// The player's pose and velocity. Position is corrected after movement by
/// the collision resolver; everything else is driven by [`FrameInput`].
#[derive(Debug, Clone)]
pub struct PlayerShip {
    pub position: Vec3,
    pub velocity: Vec3,
    /// View direction; unit length.
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    yaw: f32,
    pitch: f32,
    /// Cruise speed in units per second.
    pub cruise_speed: f32,
    /// Boost speed in units per second.
    pub boost_speed: f32,
    /// Maximum velocity change per second.
    pub acceleration: f32,
    /// Mouse-look sensitivity multiplier.
    pub sensitivity: f32,
}

impl PlayerShip {
    pub fn new(position: Vec3, sensitivity: f32) -> Self {
        let mut ship = Self {
            position,
            velocity: Vec3::ZERO,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            cruise_speed: 50.0,
            boost_speed: 120.0,
            acceleration: 40.0,
            sensitivity,
        };
        ship.update_basis();
        ship
    }

    /// Current yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees, clamped to ±89.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply a mouse-look delta (x right, y up) and rebuild the view basis.
    pub fn apply_look(&mut self, delta: Vec2) {
        self.yaw += delta.x * self.sensitivity;
        self.pitch = (self.pitch + delta.y * self.sensitivity).clamp(-89.0, 89.0);
        self.update_basis();
    }

    /// Integrate one frame of thrust. The velocity chases the input-directed
    /// target velocity, limited to `acceleration` units/s of change per second.
    pub fn integrate(&mut self, input: &FrameInput, dt: f32) {
        let dir = self.front * input.movement.z
            + self.right * input.movement.x
            + WORLD_UP * input.movement.y;

        let target_speed = if input.boost {
            self.boost_speed
        } else {
            self.cruise_speed
        };
        let target_velocity = if dir.length_squared() > 0.0 {
            dir.normalize() * target_speed
        } else {
            Vec3::ZERO
        };

        let mut diff = target_velocity - self.velocity;
        let max_step = self.acceleration * dt;
        if diff.length() > max_step {
            diff = diff.normalize() * max_step;
        }

        self.velocity += diff;
        self.position += self.velocity * dt;
    }

    /// Whether `point` lies within `cone_degrees` of the view direction.
    pub fn is_facing(&self, point: Vec3, cone_degrees: f32) -> bool {
        let offset = point - self.position;
        if offset.length_squared() < 1e-6 {
            return true;
        }
        let to_target = offset.normalize();
        self.front.dot(to_target) >= cone_degrees.to_radians().cos()
    }

    /// Current speed as a fraction of boost speed, for the speedometer.
    pub fn speed_ratio(&self) -> f32 {
        (self.velocity.length() / self.boost_speed).clamp(0.0, 1.0)
    }

    fn update_basis(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> PlayerShip {
        PlayerShip::new(Vec3::ZERO, 1.0)
    }

    #[test]
    fn starts_facing_negative_z() {
        let ship = ship();
        assert!((ship.front - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn pitch_clamps_at_89_degrees() {
        let mut ship = ship();
        ship.apply_look(Vec2::new(0.0, 500.0));
        assert_eq!(ship.pitch(), 89.0);
        ship.apply_look(Vec2::new(0.0, -1000.0));
        assert_eq!(ship.pitch(), -89.0);
    }

    #[test]
    fn acceleration_limits_velocity_change() {
        let mut ship = ship();
        let input = FrameInput {
            movement: Vec3::new(0.0, 0.0, 1.0),
            ..FrameInput::default()
        };
        ship.integrate(&input, 0.1);
        // One step from rest can add at most acceleration * dt
        assert!(ship.velocity.length() <= 40.0 * 0.1 + 1e-4);
    }

    #[test]
    fn velocity_converges_to_cruise_speed() {
        let mut ship = ship();
        let input = FrameInput {
            movement: Vec3::new(0.0, 0.0, 1.0),
            ..FrameInput::default()
        };
        for _ in 0..200 {
            ship.integrate(&input, 0.1);
        }
        assert!((ship.velocity.length() - ship.cruise_speed).abs() < 0.5);
        // Thrust follows the view direction
        assert!(ship.velocity.normalize().dot(ship.front) > 0.99);
    }

    #[test]
    fn idle_input_damps_back_to_rest() {
        let mut ship = ship();
        ship.velocity = Vec3::new(0.0, 0.0, -50.0);
        let input = FrameInput::idle();
        for _ in 0..100 {
            ship.integrate(&input, 0.1);
        }
        assert!(ship.velocity.length() < 0.5);
    }

    #[test]
    fn facing_cone_boundary() {
        let ship = ship();
        // Directly ahead
        assert!(ship.is_facing(Vec3::new(0.0, 0.0, -10.0), 6.0));
        // ~5.7° off axis: inside a 6° cone
        assert!(ship.is_facing(Vec3::new(1.0, 0.0, -10.0), 6.0));
        // 45° off axis: well outside
        assert!(!ship.is_facing(Vec3::new(10.0, 0.0, -10.0), 6.0));
    }
}
