//! Rebuild gating for one gradient instance.
//!
//! Native shader and layer objects are expensive to allocate, and animated
//! props arrive every frame with most fields unchanged. The tracker records
//! *why* cached output went stale and only reports a rebuild as possible once
//! the surface has had a non-zero layout.
//!
//! State machine:
//!
//! ```text
//!            mark(reason) / bounds change
//!   Clean ───────────────────────────────▶ Dirty
//!     ▲                                      │
//!     └──── mark_clean(bounds) ◀─────────────┘
//!           (after a successful resolve + publish)
//! ```
//!
//! Instances start `Dirty` with [`DirtyReasons::INITIAL`].

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

use crate::coords::SurfaceSize;

/// Cache state of an instance.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DirtyState {
    Clean,
    Dirty,
}

/// Set of reasons accumulated since the last successful resolve.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct DirtyReasons(u8);

impl DirtyReasons {
    pub const NONE: DirtyReasons = DirtyReasons(0);
    /// Never resolved yet.
    pub const INITIAL: DirtyReasons = DirtyReasons(1 << 0);
    pub const COLORS: DirtyReasons = DirtyReasons(1 << 1);
    pub const POSITIONS: DirtyReasons = DirtyReasons(1 << 2);
    /// Any effective geometry input (`start`, `end`, `angle`, `center`,
    /// `radius`, `startAngle`, `endAngle`).
    pub const GEOMETRY: DirtyReasons = DirtyReasons(1 << 3);
    /// Width or height differs from the bounds last resolved against.
    pub const BOUNDS: DirtyReasons = DirtyReasons(1 << 4);

    #[inline]
    pub const fn contains(self, other: DirtyReasons) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when a stop list needs recomputing (colors or positions changed,
    /// or nothing was ever resolved).
    #[inline]
    pub const fn affects_stops(self) -> bool {
        self.0 & (Self::INITIAL.0 | Self::COLORS.0 | Self::POSITIONS.0) != 0
    }
}

impl BitOr for DirtyReasons {
    type Output = DirtyReasons;
    #[inline]
    fn bitor(self, rhs: DirtyReasons) -> DirtyReasons {
        DirtyReasons(self.0 | rhs.0)
    }
}

impl BitOrAssign for DirtyReasons {
    #[inline]
    fn bitor_assign(&mut self, rhs: DirtyReasons) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for DirtyReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(DirtyReasons, &str); 5] = [
            (DirtyReasons::INITIAL, "INITIAL"),
            (DirtyReasons::COLORS, "COLORS"),
            (DirtyReasons::POSITIONS, "POSITIONS"),
            (DirtyReasons::GEOMETRY, "GEOMETRY"),
            (DirtyReasons::BOUNDS, "BOUNDS"),
        ];
        let mut list = f.debug_set();
        for (flag, name) in NAMES {
            if self.contains(flag) {
                list.entry(&format_args!("{name}"));
            }
        }
        list.finish()
    }
}

/// Per-instance dirtiness state machine.
#[derive(Debug, Clone)]
pub struct DirtyTracker {
    reasons: DirtyReasons,
    /// Latest bounds reported by the host.
    bounds: SurfaceSize,
    /// Bounds used by the last successful resolve.
    resolved_bounds: Option<SurfaceSize>,
    /// Latched once the host reports a non-zero layout; never reset.
    has_valid_bounds: bool,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self {
            reasons: DirtyReasons::INITIAL,
            bounds: SurfaceSize::zero(),
            resolved_bounds: None,
            has_valid_bounds: false,
        }
    }

    #[inline]
    pub fn state(&self) -> DirtyState {
        if self.reasons.is_empty() { DirtyState::Clean } else { DirtyState::Dirty }
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.state() == DirtyState::Dirty
    }

    #[inline]
    pub fn reasons(&self) -> DirtyReasons {
        self.reasons
    }

    #[inline]
    pub fn bounds(&self) -> SurfaceSize {
        self.bounds
    }

    #[inline]
    pub fn has_valid_bounds(&self) -> bool {
        self.has_valid_bounds
    }

    #[inline]
    pub fn mark(&mut self, reason: DirtyReasons) {
        self.reasons |= reason;
    }

    /// Records the bounds from a layout pass.
    ///
    /// Marks [`DirtyReasons::BOUNDS`] when they differ from the bounds last
    /// resolved against, and latches `has_valid_bounds` on the first
    /// non-zero layout. Returns whether the instance became dirtier.
    pub fn observe_bounds(&mut self, bounds: SurfaceSize) -> bool {
        self.bounds = bounds;
        if bounds.is_valid() {
            self.has_valid_bounds = true;
        }

        if self.resolved_bounds != Some(bounds) && !self.reasons.contains(DirtyReasons::BOUNDS) {
            self.reasons |= DirtyReasons::BOUNDS;
            return true;
        }
        false
    }

    /// True when dirty and the current bounds can be resolved against.
    ///
    /// A dirty instance with zero-area bounds stays dirty but defers.
    #[inline]
    pub fn can_rebuild(&self) -> bool {
        self.is_dirty() && self.has_valid_bounds && self.bounds.is_valid()
    }

    /// Transition to `Clean` after a successful resolve-and-publish against `bounds`.
    pub fn mark_clean(&mut self, bounds: SurfaceSize) {
        self.reasons = DirtyReasons::NONE;
        self.resolved_bounds = Some(bounds);
    }
}

impl Default for DirtyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: SurfaceSize = SurfaceSize::new(200.0, 100.0);

    fn clean_at(size: SurfaceSize) -> DirtyTracker {
        let mut t = DirtyTracker::new();
        t.observe_bounds(size);
        t.mark_clean(size);
        t
    }

    // ── initial state ─────────────────────────────────────────────────────

    #[test]
    fn starts_dirty_without_bounds() {
        let t = DirtyTracker::new();
        assert_eq!(t.state(), DirtyState::Dirty);
        assert_eq!(t.reasons(), DirtyReasons::INITIAL);
        assert!(!t.has_valid_bounds());
        assert!(!t.can_rebuild());
    }

    #[test]
    fn first_valid_layout_enables_rebuild() {
        let mut t = DirtyTracker::new();
        t.observe_bounds(SIZE);
        assert!(t.has_valid_bounds());
        assert!(t.can_rebuild());
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn zero_layout_defers() {
        let mut t = DirtyTracker::new();
        t.observe_bounds(SurfaceSize::zero());
        assert!(t.is_dirty());
        assert!(!t.has_valid_bounds());
        assert!(!t.can_rebuild());
    }

    #[test]
    fn same_bounds_keep_clean() {
        let mut t = clean_at(SIZE);
        assert!(!t.observe_bounds(SIZE));
        assert_eq!(t.state(), DirtyState::Clean);
    }

    #[test]
    fn resized_bounds_dirty() {
        let mut t = clean_at(SIZE);
        assert!(t.observe_bounds(SurfaceSize::new(201.0, 100.0)));
        assert!(t.reasons().contains(DirtyReasons::BOUNDS));
        assert!(t.can_rebuild());
    }

    #[test]
    fn resize_back_before_resolve_stays_dirty() {
        let mut t = clean_at(SIZE);
        t.observe_bounds(SurfaceSize::new(300.0, 100.0));
        t.observe_bounds(SIZE);
        // Still flagged; the resolve that follows is cheap and idempotent.
        assert!(t.is_dirty());
    }

    #[test]
    fn valid_latch_survives_shrink_to_zero() {
        let mut t = clean_at(SIZE);
        t.observe_bounds(SurfaceSize::zero());
        assert!(t.has_valid_bounds());
        assert!(t.is_dirty());
        // Current bounds are empty, so no rebuild is attempted.
        assert!(!t.can_rebuild());
    }

    // ── reasons ───────────────────────────────────────────────────────────

    #[test]
    fn reasons_accumulate_until_clean() {
        let mut t = clean_at(SIZE);
        t.mark(DirtyReasons::COLORS);
        t.mark(DirtyReasons::GEOMETRY);
        assert!(t.reasons().contains(DirtyReasons::COLORS | DirtyReasons::GEOMETRY));
        assert!(t.reasons().affects_stops());
        t.mark_clean(SIZE);
        assert_eq!(t.reasons(), DirtyReasons::NONE);
    }

    #[test]
    fn geometry_only_does_not_affect_stops() {
        assert!(!(DirtyReasons::GEOMETRY | DirtyReasons::BOUNDS).affects_stops());
    }

    #[test]
    fn debug_lists_flags() {
        let r = DirtyReasons::COLORS | DirtyReasons::BOUNDS;
        assert_eq!(format!("{r:?}"), "{COLORS, BOUNDS}");
    }
}
