//! Procedural generation for the solar system: planets, moons, asteroid
//! belts and clusters, and the background starfield.

pub mod asteroid;
pub mod planet;
pub mod rng;
pub mod starfield;
pub mod system;

pub use asteroid::*;
pub use planet::*;
pub use rng::*;
pub use starfield::*;
pub use system::*;
