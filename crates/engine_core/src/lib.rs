//! Core types shared by every system in the survey simulation:
//! - Frame timing (variable-step delta time)
//! - Common math re-exports

pub mod time;

pub use time::*;

// Re-export commonly used types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
