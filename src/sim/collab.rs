//! Collaborator contracts
//!
//! The engine never renders, polls input or moves platforms itself. Hosts
//! plug those concerns in through these traits.

use super::platform::{Axis, Transform};

/// Drives the active platform back and forth.
///
/// One mover exists per active platform; the engine asks a [`MoverFactory`]
/// for a fresh one at every spawn.
pub trait Mover {
    /// Axis to oscillate along
    fn set_axis(&mut self, axis: Axis);
    /// Fixed coordinate on the axis perpendicular to the motion
    fn set_offset(&mut self, offset: f32);
    fn start(&mut self);
    /// Freeze in place; the transform stays where it stopped
    fn stop(&mut self);
    fn current_transform(&self) -> Transform;
    /// Advance by one simulation step. Movers animated elsewhere can ignore it.
    fn advance(&mut self, _dt: f32) {}
}

/// Creates a mover for a newly spawned active platform
pub trait MoverFactory {
    type Mover: Mover;

    /// `spawn` holds the level (`y`) and footprint of the new platform
    fn create(&mut self, spawn: &Transform) -> Self::Mover;
}

/// Camera/viewpoint hook, told whenever a resting platform is added
pub trait ViewpointNotifier {
    fn on_platform_count_changed(&mut self, count: usize, animate: bool);
}

/// Told exactly once, when a commit misses the stack
pub trait HostTermination {
    fn notify_game_over(&mut self);
}

/// Viewpoint that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct LogViewpoint;

impl ViewpointNotifier for LogViewpoint {
    fn on_platform_count_changed(&mut self, count: usize, animate: bool) {
        log::debug!("Viewpoint: {} platforms (animate={})", count, animate);
    }
}

/// Termination handler that logs and records that the game ended
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTermination {
    pub game_over: bool,
}

impl HostTermination for LogTermination {
    fn notify_game_over(&mut self) {
        self.game_over = true;
        log::info!("Game Over!");
    }
}
