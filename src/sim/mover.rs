//! Reference mover: ping-pong travel along one axis
//!
//! Starts at `-amplitude` on its axis and bounces between the two ends.
//! The perpendicular coordinate is pinned to the spawn offset.

use glam::Vec3;

use super::collab::{Mover, MoverFactory};
use super::platform::{Axis, PlatformSize, Transform};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct PingPongMover {
    axis: Axis,
    offset: f32,
    level: f32,
    size: PlatformSize,
    /// Coordinate along the axis of motion
    travel: f32,
    /// +1 or -1
    heading: f32,
    amplitude: f32,
    speed: f32,
    moving: bool,
}

impl PingPongMover {
    pub fn new(spawn: &Transform, amplitude: f32, speed: f32) -> Self {
        Self {
            axis: Axis::X,
            offset: 0.0,
            level: spawn.position.y,
            size: spawn.size,
            travel: -amplitude,
            heading: 1.0,
            amplitude,
            speed,
            moving: false,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }
}

impl Mover for PingPongMover {
    fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    fn start(&mut self) {
        self.moving = true;
    }

    fn stop(&mut self) {
        self.moving = false;
    }

    fn current_transform(&self) -> Transform {
        let pinned = self.axis.perpendicular().with(Vec3::new(0.0, self.level, 0.0), self.offset);
        Transform::new(self.axis.with(pinned, self.travel), self.size)
    }

    fn advance(&mut self, dt: f32) {
        if !self.moving {
            return;
        }
        self.travel += self.heading * self.speed * dt;
        if self.travel > self.amplitude {
            self.travel = 2.0 * self.amplitude - self.travel;
            self.heading = -1.0;
        } else if self.travel < -self.amplitude {
            self.travel = -2.0 * self.amplitude - self.travel;
            self.heading = 1.0;
        }
    }
}

/// Builds [`PingPongMover`]s with shared tuning
#[derive(Debug, Clone, Copy)]
pub struct PingPongMovers {
    pub amplitude: f32,
    pub speed: f32,
}

impl PingPongMovers {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            amplitude: settings.mover_amplitude,
            speed: settings.mover_speed,
        }
    }
}

impl MoverFactory for PingPongMovers {
    type Mover = PingPongMover;

    fn create(&mut self, spawn: &Transform) -> PingPongMover {
        PingPongMover::new(spawn, self.amplitude, self.speed)
    }
}
