//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Axis derived from the platform count, never cached
//! - No rendering, input or platform dependencies (see `collab`)

pub mod collab;
pub mod engine;
pub mod mover;
pub mod overlap;
pub mod platform;
pub mod stack;

pub use collab::{
    HostTermination, LogTermination, LogViewpoint, Mover, MoverFactory, ViewpointNotifier,
};
pub use engine::{CommitOutcome, Phase, StackEngine, StackSnapshot};
pub use mover::{PingPongMover, PingPongMovers};
pub use overlap::{Overlap, Resolution, resolve_overlap};
pub use platform::{Axis, Platform, PlatformKind, PlatformSize, Transform};
pub use stack::PlatformStack;
