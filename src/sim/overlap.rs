//! Overlap resolution between the active platform and the one beneath it
//!
//! Each cut shrinks exactly one axis. The overlapping part becomes the new
//! resting platform; the rest falls off as a discarded piece.
//!
//! Algorithm:
//! 1. distance = |active - static| along the axis
//! 2. no overlap if distance > (active extent + static extent) / 2 (touching counts)
//! 3. overlap extent = active extent - distance, perpendicular extent unchanged
//! 4. direction = -1 if the active platform sits on the negative side, else +1
//! 5. new static sits at static + direction * (static extent - overlap) / 2
//! 6. cut piece sits at static + direction * (overlap / 2 + cut extent)

use glam::Vec3;

use super::platform::{Axis, PlatformSize, Transform};

/// Geometry produced by a successful cut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Shift of the new static platform relative to the old one, along the axis
    pub static_offset: f32,
    pub static_size: PlatformSize,
    pub static_position: Vec3,
    /// Shift of the cut piece relative to the old static platform, along the axis
    pub cut_offset: f32,
    pub cut_size: PlatformSize,
    pub cut_position: Vec3,
}

impl Overlap {
    /// Overlapping extent along the cut axis
    pub fn overlap_extent(&self, axis: Axis) -> f32 {
        self.static_size.along(axis)
    }

    /// Non-overlapping extent along the cut axis
    pub fn cut_extent(&self, axis: Axis) -> f32 {
        self.cut_size.along(axis)
    }
}

/// Outcome of resolving a commit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Overlap(Overlap),
    /// The active platform missed the stack entirely
    NoOverlap,
}

/// Sign of the side the active platform landed on.
///
/// Compares both horizontal axes, not only the cut axis. The perpendicular
/// coordinates agree during play, so this matches a per-axis comparison.
#[inline]
fn direction(static_pos: Vec3, active_pos: Vec3) -> f32 {
    if active_pos.x < static_pos.x || active_pos.z < static_pos.z {
        -1.0
    } else {
        1.0
    }
}

/// Resolve the overlap of `active` over `resting` along `axis`
pub fn resolve_overlap(resting: &Transform, active: &Transform, axis: Axis) -> Resolution {
    let distance = (axis.of(active.position) - axis.of(resting.position)).abs();
    let active_extent = active.size.along(axis);
    let resting_extent = resting.size.along(axis);

    let allowed = (active_extent + resting_extent) / 2.0;
    if distance > allowed {
        return Resolution::NoOverlap;
    }

    let overlap_extent = active_extent - distance;
    let cut_extent = active_extent - overlap_extent;
    let dir = direction(resting.position, active.position);

    let static_offset = dir * (resting_extent - overlap_extent) / 2.0;
    let cut_offset = dir * (overlap_extent / 2.0 + cut_extent);

    // Perpendicular from the resting platform, height from the active one
    let anchor = Vec3::new(resting.position.x, active.position.y, resting.position.z);
    let anchor_axis = axis.of(resting.position);

    Resolution::Overlap(Overlap {
        static_offset,
        static_size: active.size.with_along(axis, overlap_extent),
        static_position: axis.with(anchor, anchor_axis + static_offset),
        cut_offset,
        cut_size: active.size.with_along(axis, cut_extent),
        cut_position: axis.with(anchor, anchor_axis + cut_offset),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn unit(x: f32, y: f32, z: f32) -> Transform {
        Transform::new(Vec3::new(x, y, z), PlatformSize::new(1.0, 1.0))
    }

    fn expect_overlap(resolution: Resolution) -> Overlap {
        match resolution {
            Resolution::Overlap(overlap) => overlap,
            Resolution::NoOverlap => panic!("expected an overlap"),
        }
    }

    #[test]
    fn test_half_overlap_on_x() {
        let resting = unit(0.0, 0.0, 0.0);
        let active = unit(0.5, 0.15, 0.0);

        let overlap = expect_overlap(resolve_overlap(&resting, &active, Axis::X));
        assert!((overlap.static_size.width - 0.5).abs() < EPS);
        assert!((overlap.static_size.depth - 1.0).abs() < EPS);
        assert!((overlap.static_offset - 0.25).abs() < EPS);
        assert!((overlap.static_position.x - 0.25).abs() < EPS);
        assert!((overlap.static_position.y - 0.15).abs() < EPS);
        assert!((overlap.cut_size.width - 0.5).abs() < EPS);
        assert!((overlap.cut_position.x - 0.75).abs() < EPS);
    }

    #[test]
    fn test_negative_side_on_z() {
        let resting = unit(0.25, 0.15, 0.0);
        let active = Transform::new(Vec3::new(0.25, 0.3, -0.4), PlatformSize::new(0.5, 1.0));

        let overlap = expect_overlap(resolve_overlap(&resting, &active, Axis::Z));
        assert!((overlap.static_size.depth - 0.6).abs() < EPS);
        assert!((overlap.static_size.width - 0.5).abs() < EPS);
        assert!((overlap.static_offset + 0.2).abs() < EPS);
        assert!((overlap.static_position.z + 0.2).abs() < EPS);
        // Perpendicular carried from the resting platform
        assert!((overlap.static_position.x - 0.25).abs() < EPS);
        assert!((overlap.cut_size.depth - 0.4).abs() < EPS);
        assert!((overlap.cut_position.z + 0.7).abs() < EPS);
    }

    #[test]
    fn test_miss_is_no_overlap() {
        let resting = unit(0.0, 0.0, 0.0);
        let active = unit(2.0, 0.15, 0.0);
        assert_eq!(resolve_overlap(&resting, &active, Axis::X), Resolution::NoOverlap);
    }

    #[test]
    fn test_exact_touch_counts_as_overlap() {
        let resting = unit(0.0, 0.0, 0.0);
        let active = unit(1.0, 0.15, 0.0);

        let overlap = expect_overlap(resolve_overlap(&resting, &active, Axis::X));
        assert!(overlap.overlap_extent(Axis::X).abs() < EPS);
        assert!((overlap.cut_extent(Axis::X) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_perfect_stack_leaves_empty_cut() {
        let resting = unit(0.0, 0.0, 0.0);
        let active = unit(0.0, 0.15, 0.0);

        let overlap = expect_overlap(resolve_overlap(&resting, &active, Axis::Z));
        assert_eq!(overlap.static_size, PlatformSize::new(1.0, 1.0));
        assert_eq!(overlap.cut_extent(Axis::Z), 0.0);
        assert_eq!(overlap.static_offset, 0.0);
    }

    #[test]
    fn test_only_the_cut_axis_is_measured() {
        // Far away on z, but the cut is along x
        let resting = unit(0.0, 0.0, 0.0);
        let active = unit(0.2, 0.15, 5.0);
        assert!(matches!(
            resolve_overlap(&resting, &active, Axis::X),
            Resolution::Overlap(_)
        ));
    }

    #[test]
    fn test_side_sign_checks_both_axes() {
        // Right of the resting platform on x, but slightly behind it on z:
        // the z comparison alone flips the anchor to the negative side.
        let resting = unit(0.0, 0.0, 0.0);
        let active = unit(0.3, 0.15, -0.1);

        let overlap = expect_overlap(resolve_overlap(&resting, &active, Axis::X));
        assert!((overlap.overlap_extent(Axis::X) - 0.7).abs() < EPS);
        assert!(overlap.static_offset < 0.0);
        assert!((overlap.static_offset + 0.15).abs() < EPS);
        assert!(overlap.cut_position.x < 0.0);
        assert!((overlap.cut_position.x + 0.65).abs() < EPS);
        assert_eq!(overlap.static_position.z, 0.0);
    }

    fn axis_strategy() -> impl Strategy<Value = Axis> {
        prop_oneof![Just(Axis::X), Just(Axis::Z)]
    }

    /// Resting and active share a footprint and the perpendicular coordinate,
    /// as they do during play.
    fn aligned(axis: Axis, extent: f32, other: f32, center: f32, shift: f32) -> (Transform, Transform) {
        let size = PlatformSize::new(0.0, 0.0)
            .with_along(axis, extent)
            .with_along(axis.perpendicular(), other);
        let base = Vec3::new(center, 0.0, center);
        let resting = Transform::new(base, size);
        let active = Transform::new(axis.with(base + Vec3::Y * 0.15, center + shift), size);
        (resting, active)
    }

    proptest! {
        #[test]
        fn prop_within_reach_overlaps(
            axis in axis_strategy(),
            extent in 0.05f32..4.0,
            other in 0.05f32..4.0,
            center in -5.0f32..5.0,
            frac in -0.999f32..0.999,
        ) {
            let (resting, active) = aligned(axis, extent, other, center, frac * extent);
            let overlap = match resolve_overlap(&resting, &active, axis) {
                Resolution::Overlap(o) => o,
                Resolution::NoOverlap => return Err(TestCaseError::fail("expected overlap")),
            };
            let kept = overlap.overlap_extent(axis);
            prop_assert!(kept > 0.0 && kept <= extent + EPS);
            // One axis shrinks per cut
            prop_assert!((overlap.static_size.along(axis.perpendicular()) - other).abs() < EPS);
            prop_assert!((overlap.cut_size.along(axis.perpendicular()) - other).abs() < EPS);
            // Kept plus cut is the whole active extent
            prop_assert!((kept + overlap.cut_extent(axis) - extent).abs() < EPS);
        }

        #[test]
        fn prop_out_of_reach_misses(
            axis in axis_strategy(),
            extent in 0.05f32..4.0,
            center in -5.0f32..5.0,
            excess in 0.01f32..10.0,
            negative in any::<bool>(),
        ) {
            let shift = (extent + excess) * if negative { -1.0 } else { 1.0 };
            let (resting, active) = aligned(axis, extent, 1.0, center, shift);
            prop_assert_eq!(resolve_overlap(&resting, &active, axis), Resolution::NoOverlap);
        }

        #[test]
        fn prop_static_and_cut_do_not_intersect(
            axis in axis_strategy(),
            extent in 0.05f32..4.0,
            center in -5.0f32..5.0,
            frac in -0.999f32..0.999,
        ) {
            let (resting, active) = aligned(axis, extent, 1.0, center, frac * extent);
            if let Resolution::Overlap(overlap) = resolve_overlap(&resting, &active, axis) {
                let placed = Transform::new(overlap.static_position, overlap.static_size).span(axis);
                let cut = Transform::new(overlap.cut_position, overlap.cut_size).span(axis);
                let disjoint = placed.1 <= cut.0 + EPS || cut.1 <= placed.0 + EPS;
                prop_assert!(disjoint, "placed {:?} cut {:?}", placed, cut);
            }
        }

        #[test]
        fn prop_new_static_stays_on_resting(
            axis in axis_strategy(),
            extent in 0.05f32..4.0,
            center in -5.0f32..5.0,
            frac in -0.999f32..0.999,
        ) {
            let (resting, active) = aligned(axis, extent, 1.0, center, frac * extent);
            if let Resolution::Overlap(overlap) = resolve_overlap(&resting, &active, axis) {
                let below = resting.span(axis);
                let placed = Transform::new(overlap.static_position, overlap.static_size).span(axis);
                prop_assert!(placed.0 >= below.0 - EPS && placed.1 <= below.1 + EPS);
            }
        }
    }
}
