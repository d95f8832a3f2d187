//! Platform records and the alternating axis
//!
//! A platform is a slab with a center position and a footprint
//! (width along x, depth along z). Height is the same for every slab.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Horizontal axis a platform moves along and gets cut on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Left/right
    X,
    /// Forward/back
    Z,
}

impl Axis {
    /// Axis for a given platform count: odd counts move along X, even along Z.
    ///
    /// Always derive from the count; never store the result.
    #[inline]
    pub fn for_count(count: usize) -> Self {
        if count % 2 == 1 { Axis::X } else { Axis::Z }
    }

    #[inline]
    pub fn is_x(self) -> bool {
        self == Axis::X
    }

    /// The other horizontal axis
    #[inline]
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Component of a position along this axis
    #[inline]
    pub fn of(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Z => v.z,
        }
    }

    /// Copy of `v` with the component along this axis replaced
    #[inline]
    pub fn with(self, v: Vec3, value: f32) -> Vec3 {
        match self {
            Axis::X => Vec3::new(value, v.y, v.z),
            Axis::Z => Vec3::new(v.x, v.y, value),
        }
    }
}

/// Footprint of a platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSize {
    /// Extent along x
    pub width: f32,
    /// Extent along z
    pub depth: f32,
}

impl PlatformSize {
    pub fn new(width: f32, depth: f32) -> Self {
        Self { width, depth }
    }

    /// Extent along an axis
    #[inline]
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Z => self.depth,
        }
    }

    /// Copy with the extent along `axis` replaced
    #[inline]
    pub fn with_along(&self, axis: Axis, extent: f32) -> Self {
        match axis {
            Axis::X => Self::new(extent, self.depth),
            Axis::Z => Self::new(self.width, extent),
        }
    }
}

/// Position and footprint, as reported by a mover or stored on a platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub size: PlatformSize,
}

impl Transform {
    pub fn new(position: Vec3, size: PlatformSize) -> Self {
        Self { position, size }
    }

    /// Interval covered along an axis (min, max)
    pub fn span(&self, axis: Axis) -> (f32, f32) {
        let center = axis.of(self.position);
        let half = self.size.along(axis) / 2.0;
        (center - half, center + half)
    }
}

/// Role of a platform record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Committed, load-bearing
    Static,
    /// Currently oscillating, not yet committed
    Active,
    /// Cut-off remainder, visual only
    Discarded,
}

/// A single slab of the tower
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub position: Vec3,
    pub size: PlatformSize,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(kind: PlatformKind, position: Vec3, size: PlatformSize) -> Self {
        Self {
            position,
            size,
            kind,
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.size)
    }

    /// Same geometry, kind flipped to Discarded
    pub fn into_discarded(self) -> Self {
        Self {
            kind: PlatformKind::Discarded,
            ..self
        }
    }
}
