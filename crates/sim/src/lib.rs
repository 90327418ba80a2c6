//! Per-frame simulation: orbital/rotational kinematics and the sphere
//! collision resolver.

pub mod collision;
pub mod kinematics;

pub use collision::*;
pub use kinematics::*;
