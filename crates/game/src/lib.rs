//! Gameplay core for the solar-system survey: simulation context, targeting
//! and scan state machine, probe population, player flight model, HUD data
//! snapshot, and configuration.
//!
//! The presentation/platform layer sits on the far side of two seams: it
//! feeds [`input::FrameInput`] in and reads immutable snapshots
//! ([`hud::HudData`], the collections on [`context::GameContext`]) out.
//! Nothing here touches a window, a GPU, or an asset file's contents.

pub mod assets;
pub mod autopilot;
pub mod config;
pub mod context;
pub mod hud;
pub mod player;
pub mod scan;
pub mod spawner;
pub mod state;

pub use config::GameConfig;
pub use context::GameContext;
