//! Stack engine: spawn, commit and terminate
//!
//! Lifecycle: `Initializing` (base placed, waiting out the spawn delay)
//! -> `AwaitingCommit` (an active platform is moving) -> `Terminated`.
//! Every successful commit places a resting platform and spawns the next
//! active one, staying in `AwaitingCommit`. A miss terminates for good.
//!
//! The engine is single-writer: every mutation goes through `&mut self`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collab::{HostTermination, Mover, MoverFactory, ViewpointNotifier};
use super::overlap::{Resolution, resolve_overlap};
use super::platform::{Axis, Platform, PlatformKind, PlatformSize, Transform};
use super::stack::PlatformStack;
use crate::error::{StackError, StackResult};
use crate::settings::Settings;

/// Current lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Before the first active platform exists
    Initializing,
    /// An active platform is moving and a commit is expected
    AwaitingCommit,
    /// Game over; nothing changes any more
    Terminated,
}

/// What a call to [`StackEngine::commit`] did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommitOutcome {
    /// Not awaiting a commit; nothing changed
    Ignored,
    /// The cut landed: `placed` now rests on the stack and `discarded` fell off
    Placed {
        placed: Platform,
        discarded: Platform,
    },
    /// The active platform missed and fell off whole
    GameOver { discarded: Platform },
}

/// Serializable view of the engine for presentation layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackSnapshot {
    pub phase: Phase,
    pub count: usize,
    pub axis: Axis,
    pub platforms: Vec<Platform>,
    pub discarded: Vec<Platform>,
}

pub struct StackEngine<F, V, H>
where
    F: MoverFactory,
    V: ViewpointNotifier,
    H: HostTermination,
{
    settings: Settings,
    stack: PlatformStack,
    phase: Phase,
    /// Seconds left before the first spawn (armed by `initialize`)
    spawn_timer: Option<f32>,
    movers: F,
    mover: Option<F::Mover>,
    viewpoint: V,
    host: H,
    /// Cut-off pieces not yet collected by the presentation layer
    discarded: Vec<Platform>,
}

impl<F, V, H> StackEngine<F, V, H>
where
    F: MoverFactory,
    V: ViewpointNotifier,
    H: HostTermination,
{
    pub fn new(settings: Settings, movers: F, viewpoint: V, host: H) -> Self {
        Self {
            settings,
            stack: PlatformStack::new(),
            phase: Phase::Initializing,
            spawn_timer: None,
            movers,
            mover: None,
            viewpoint,
            host,
            discarded: Vec::new(),
        }
    }

    /// Place the base platform and arm the first spawn
    pub fn initialize(&mut self) {
        if !self.stack.is_empty() {
            log::warn!("initialize called twice; ignoring");
            return;
        }

        let base = Platform::new(PlatformKind::Static, Vec3::ZERO, self.settings.base_size());
        self.stack.append(base);
        self.viewpoint
            .on_platform_count_changed(self.stack.resting_count(), false);
        self.spawn_timer = Some(self.settings.spawn_delay);

        log::info!(
            "Stack initialized, first platform in {:.2}s",
            self.settings.spawn_delay
        );
    }

    /// Advance by one fixed timestep
    pub fn tick(&mut self, dt: f32) {
        if self.phase == Phase::Terminated {
            return;
        }

        if let Some(remaining) = self.spawn_timer.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.spawn_timer = None;
                self.spawn_active(self.settings.base_size(), 0.0);
            }
        }

        if let Some(mover) = self.mover.as_mut() {
            mover.advance(dt);
            let live = mover.current_transform();
            if let Some(active) = self.stack.active_mut() {
                active.position = live.position;
            }
        }
    }

    /// Spawn a new active platform one level above the stack
    pub(crate) fn spawn_active(&mut self, size: PlatformSize, offset: f32) {
        if self.phase == Phase::Terminated || self.stack.is_empty() {
            log::warn!("spawn requested in phase {:?}; ignoring", self.phase);
            return;
        }
        if self.stack.active().is_some() {
            log::warn!("spawn requested while a platform is still moving; ignoring");
            return;
        }

        let count = self.stack.count();
        let axis = Axis::for_count(count);
        let level = count as f32 * self.settings.platform_height;
        let position = axis
            .perpendicular()
            .with(Vec3::new(0.0, level, 0.0), offset);
        let spawn = Transform::new(position, size);

        let mut mover = self.movers.create(&spawn);
        mover.set_axis(axis);
        mover.set_offset(offset);
        mover.start();

        let current = mover.current_transform();
        self.stack
            .append(Platform::new(PlatformKind::Active, current.position, size));
        self.mover = Some(mover);
        self.phase = Phase::AwaitingCommit;

        log::debug!(
            "Spawned platform {} on {:?} at y={:.2} ({:.3} x {:.3}, offset {:.3})",
            count,
            axis,
            level,
            size.width,
            size.depth,
            offset
        );
    }

    /// Freeze the active platform and cut it against the one beneath
    pub fn commit(&mut self) -> StackResult<CommitOutcome> {
        if self.phase != Phase::AwaitingCommit {
            log::debug!("commit ignored in phase {:?}", self.phase);
            return Ok(CommitOutcome::Ignored);
        }

        // Unchanged since the matching spawn, so spawn and commit agree on the axis
        let axis = self.current_axis();

        let (resting, active) = match self.stack.top(2) {
            [resting, active] if active.kind == PlatformKind::Active => {
                (resting.transform(), active.transform())
            }
            _ => {
                return Err(StackError::MissingPlatforms {
                    found: self.stack.count(),
                });
            }
        };

        let frozen = match self.mover.take() {
            Some(mut mover) => {
                mover.stop();
                mover.current_transform()
            }
            None => active,
        };

        let removed = self
            .stack
            .remove_active()
            .ok_or(StackError::MissingPlatforms {
                found: self.stack.count(),
            })?;

        match resolve_overlap(&resting, &frozen, axis) {
            Resolution::Overlap(overlap) => {
                let placed = Platform::new(
                    PlatformKind::Static,
                    overlap.static_position,
                    overlap.static_size,
                );
                self.stack.append(placed);
                self.viewpoint
                    .on_platform_count_changed(self.stack.resting_count(), false);

                let discarded = Platform::new(
                    PlatformKind::Discarded,
                    overlap.cut_position,
                    overlap.cut_size,
                );
                self.discarded.push(discarded);

                log::debug!(
                    "Cut on {:?}: kept {:.3}, dropped {:.3}",
                    axis,
                    overlap.overlap_extent(axis),
                    overlap.cut_extent(axis)
                );

                self.spawn_active(overlap.static_size, axis.of(overlap.static_position));
                Ok(CommitOutcome::Placed { placed, discarded })
            }
            Resolution::NoOverlap => {
                let discarded = Platform {
                    position: frozen.position,
                    size: frozen.size,
                    ..removed
                }
                .into_discarded();
                self.discarded.push(discarded);
                self.phase = Phase::Terminated;

                log::info!(
                    "Missed the stack, game over at {} platforms",
                    self.stack.resting_count()
                );
                self.host.notify_game_over();
                Ok(CommitOutcome::GameOver { discarded })
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// The tower. The Active record's position is refreshed on every `tick`;
    /// use [`Self::active_transform`] for the mover's position between ticks.
    pub fn stack(&self) -> &PlatformStack {
        &self.stack
    }

    /// Retained platforms (resting plus the active one)
    pub fn count(&self) -> usize {
        self.stack.count()
    }

    /// Axis of the current (or next) active platform
    pub fn current_axis(&self) -> Axis {
        Axis::for_count(self.stack.resting_count())
    }

    /// Live transform of the active platform, straight from its mover
    pub fn active_transform(&self) -> Option<Transform> {
        self.mover.as_ref().map(|m| m.current_transform())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn viewpoint(&self) -> &V {
        &self.viewpoint
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Hand over the pieces cut off since the last call.
    ///
    /// Pieces accumulate until drained, so hosts should call this once per
    /// frame (or after every commit).
    pub fn take_discarded(&mut self) -> Vec<Platform> {
        std::mem::take(&mut self.discarded)
    }

    pub fn snapshot(&self) -> StackSnapshot {
        let mut platforms: Vec<Platform> = self.stack.iter().copied().collect();
        if let Some(top) = platforms.last_mut()
            && top.kind == PlatformKind::Active
            && let Some(live) = self.active_transform()
        {
            top.position = live.position;
        }
        StackSnapshot {
            phase: self.phase,
            count: self.count(),
            axis: self.current_axis(),
            platforms,
            discarded: self.discarded.clone(),
        }
    }
}
