//! Ordered platform stack
//!
//! Index 0 is the base. At most one Active platform, always on top.

use serde::{Deserialize, Serialize};

use super::platform::{Platform, PlatformKind};

/// The tower, bottom to top
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformStack {
    platforms: Vec<Platform>,
}

impl PlatformStack {
    pub fn new() -> Self {
        Self {
            platforms: Vec::new(),
        }
    }

    /// Number of retained platforms (Static and Active)
    pub fn count(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Number of resting platforms, i.e. `count` excluding the Active one
    pub fn resting_count(&self) -> usize {
        self.platforms
            .iter()
            .filter(|p| p.kind == PlatformKind::Static)
            .count()
    }

    /// The last `n` platforms (fewer if the stack is shorter)
    pub fn top(&self, n: usize) -> &[Platform] {
        let start = self.platforms.len().saturating_sub(n);
        &self.platforms[start..]
    }

    pub fn base(&self) -> Option<&Platform> {
        self.platforms.first()
    }

    /// The Active platform, if one is on top
    pub fn active(&self) -> Option<&Platform> {
        self.platforms
            .last()
            .filter(|p| p.kind == PlatformKind::Active)
    }

    pub fn active_mut(&mut self) -> Option<&mut Platform> {
        self.platforms
            .last_mut()
            .filter(|p| p.kind == PlatformKind::Active)
    }

    pub fn append(&mut self, platform: Platform) {
        self.platforms.push(platform);
    }

    /// Remove the platform at `index`. The base (index 0) is never removed.
    pub fn remove(&mut self, index: usize) -> Option<Platform> {
        if index == 0 || index >= self.platforms.len() {
            return None;
        }
        Some(self.platforms.remove(index))
    }

    /// Remove and return the Active platform
    pub fn remove_active(&mut self) -> Option<Platform> {
        self.active()?;
        self.remove(self.platforms.len() - 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::platform::PlatformSize;
    use glam::Vec3;

    fn slab(kind: PlatformKind, y: f32) -> Platform {
        Platform::new(kind, Vec3::new(0.0, y, 0.0), PlatformSize::new(1.0, 1.0))
    }

    #[test]
    fn test_append_and_top() {
        let mut stack = PlatformStack::new();
        assert!(stack.is_empty());
        assert!(stack.top(2).is_empty());

        stack.append(slab(PlatformKind::Static, 0.0));
        stack.append(slab(PlatformKind::Static, 0.15));
        stack.append(slab(PlatformKind::Active, 0.3));

        assert_eq!(stack.count(), 3);
        assert_eq!(stack.resting_count(), 2);
        let top = stack.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].position.y, 0.15);
        assert_eq!(top[1].kind, PlatformKind::Active);
        assert_eq!(stack.top(10).len(), 3);
    }

    #[test]
    fn test_base_never_removed() {
        let mut stack = PlatformStack::new();
        stack.append(slab(PlatformKind::Static, 0.0));
        assert!(stack.remove(0).is_none());
        assert!(stack.remove_active().is_none());
        assert_eq!(stack.count(), 1);
    }

    #[test]
    fn test_remove_active() {
        let mut stack = PlatformStack::new();
        stack.append(slab(PlatformKind::Static, 0.0));
        stack.append(slab(PlatformKind::Active, 0.15));
        assert!(stack.active().is_some());

        let removed = stack.remove_active().unwrap();
        assert_eq!(removed.kind, PlatformKind::Active);
        assert!(stack.active().is_none());
        assert_eq!(stack.count(), 1);
    }
}
