//! Stack Tower - gameplay core for a stacking tower game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (overlap resolution, platform stack, lifecycle)
//! - `settings`: Data-driven tuning loaded from JSON
//! - `error`: Error types shared by the engine and settings loader
//!
//! Rendering, input polling and camera animation are left to the host,
//! which plugs in through the traits in [`sim::collab`].

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{StackError, StackResult};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Height of every platform slab
    pub const PLATFORM_HEIGHT: f32 = 0.15;
    /// Pause between placing the base and spawning the first mover (seconds)
    pub const SPAWN_DELAY: f32 = 1.0;

    /// Base platform footprint
    pub const BASE_WIDTH: f32 = 1.0;
    pub const BASE_DEPTH: f32 = 1.0;

    /// Reference mover defaults
    pub const MOVER_AMPLITUDE: f32 = 1.5;
    pub const MOVER_SPEED: f32 = 1.2;
}
