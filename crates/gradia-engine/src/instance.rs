//! One live gradient surface: prop state, resolved cache and dirty tracking.
//!
//! Lifecycle, as driven by the view host:
//!
//! 1. [`GradientInstance::create`] when the surface is instantiated
//! 2. [`set_bounds`](GradientInstance::set_bounds) on every layout pass
//! 3. [`apply`](GradientInstance::apply) for prop changes on the owning
//!    thread, or [`UpdateSender::push`] from an animation driver elsewhere
//! 4. [`resolve`](GradientInstance::resolve) before each draw
//! 5. [`destroy`](GradientInstance::destroy) when the surface is torn down
//!
//! All state is owned by the instance and mutated on one thread; only the
//! mailbox is shared, and only through [`UpdateSender`].

use crate::coords::{SurfaceSize, Vector2};
use crate::dirty::{DirtyReasons, DirtyState, DirtyTracker};
use crate::geometry::{ResolvedGeometry, resolve_geometry};
use crate::paint::{
    Argb, ColorStop, ColorStops, GradientKind, GradientParams, LinearParams, RadialParams, ShapeParams,
    StopSource, SweepParams, resolve_stops,
};
use crate::update::{GradientUpdate, Mailbox, MailboxStats, UpdateSender};

/// Host policy knobs for an instance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InstanceConfig {
    /// Stops handed to the rasterizer when no colors were supplied.
    pub empty_fallback: [Argb; 2],
}

impl InstanceConfig {
    pub fn with_empty_fallback(mut self, first: Argb, last: Argb) -> Self {
        self.empty_fallback = [first, last];
        self
    }
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self { empty_fallback: [Argb::TRANSPARENT, Argb::TRANSPARENT] }
    }
}

/// Counters for diagnostics.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct InstanceStats {
    pub applies: u64,
    pub resolves: u64,
    pub rebuilds: u64,
    /// Resolves that found the instance dirty but the bounds unusable.
    pub deferred: u64,
    pub mailbox: MailboxStats,
}

/// Output of [`GradientInstance::resolve`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Resolved<'a> {
    pub geometry: ResolvedGeometry,
    /// Never empty; see [`StopSource::NoColors`].
    pub stops: &'a [ColorStop],
    pub stop_source: StopSource,
    /// Bounds the geometry was resolved against.
    pub size: SurfaceSize,
    /// True only when this call recomputed the cache; the host rebuilds its
    /// native shader/layer exactly then.
    pub was_rebuilt: bool,
}

/// A gradient instance bound to one surface.
#[derive(Debug)]
pub struct GradientInstance {
    config: InstanceConfig,
    params: GradientParams,
    tracker: DirtyTracker,
    geometry: ResolvedGeometry,
    stops: ColorStops,
    mailbox: Mailbox,
    stats: InstanceStats,
}

impl GradientInstance {
    pub fn create(kind: GradientKind) -> Self {
        Self::with_config(kind, InstanceConfig::default())
    }

    pub fn with_config(kind: GradientKind, config: InstanceConfig) -> Self {
        log::trace!("creating {} gradient instance", kind.name());
        Self {
            config,
            params: GradientParams::new(kind),
            tracker: DirtyTracker::new(),
            geometry: ResolvedGeometry::degenerate(kind, SurfaceSize::zero()),
            stops: ColorStops::no_colors().or_fallback(config.empty_fallback),
            mailbox: Mailbox::new(),
            stats: InstanceStats::default(),
        }
    }

    #[inline]
    pub fn kind(&self) -> GradientKind {
        self.params.kind()
    }

    #[inline]
    pub fn params(&self) -> &GradientParams {
        &self.params
    }

    #[inline]
    pub fn config(&self) -> &InstanceConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> DirtyState {
        self.tracker.state()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    #[inline]
    pub fn dirty_reasons(&self) -> DirtyReasons {
        self.tracker.reasons()
    }

    #[inline]
    pub fn has_valid_bounds(&self) -> bool {
        self.tracker.has_valid_bounds()
    }

    #[inline]
    pub fn bounds(&self) -> SurfaceSize {
        self.tracker.bounds()
    }

    pub fn stats(&self) -> InstanceStats {
        InstanceStats { mailbox: self.mailbox.stats(), ..self.stats }
    }

    /// Handle for pushing updates from another thread.
    pub fn sender(&self) -> UpdateSender {
        self.mailbox.sender()
    }

    /// Layout pass. Called by the host whenever bounds are (re)computed.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.set_size(SurfaceSize::new(width, height));
    }

    pub fn set_size(&mut self, size: SurfaceSize) {
        self.drain_mailbox();
        if self.tracker.observe_bounds(size) {
            log::trace!("{} gradient bounds now {}x{}", self.kind().name(), size.width, size.height);
        }
    }

    /// Applies a partial update on the owning thread.
    ///
    /// Only present fields are compared, and only changes to inputs that are
    /// currently in effect dirty the instance. Anything pushed through an
    /// [`UpdateSender`] before this call is applied first, so `update` wins
    /// over older pushes. Returns the reasons this call added.
    pub fn apply(&mut self, update: GradientUpdate) -> DirtyReasons {
        let drained = self.drain_mailbox();
        drained | self.apply_fields(update)
    }

    /// Applies whatever the mailbox holds. Must run before any direct write
    /// so the mailbox never carries a value older than the instance state.
    fn drain_mailbox(&mut self) -> DirtyReasons {
        match self.mailbox.take() {
            Some(update) => self.apply_fields(update),
            None => DirtyReasons::NONE,
        }
    }

    fn apply_fields(&mut self, update: GradientUpdate) -> DirtyReasons {
        self.stats.applies += 1;
        let kind = self.kind();
        let mut changed = DirtyReasons::NONE;

        let GradientUpdate {
            colors,
            positions,
            start,
            end,
            angle,
            center,
            radius,
            start_angle,
            end_angle,
        } = update;

        if let Some(colors) = colors.resolve_with(Vec::new) {
            if colors != self.params.stops.colors {
                self.params.stops.colors = colors;
                changed |= DirtyReasons::COLORS;
            }
        }

        if let Some(positions) = positions.into_change() {
            if !same_positions(self.params.stops.positions.as_deref(), positions.as_deref()) {
                self.params.stops.positions = positions;
                changed |= DirtyReasons::POSITIONS;
            }
        }

        let mut ignored: Vec<&'static str> = Vec::new();
        match &mut self.params.shape {
            ShapeParams::Linear(p) => {
                // Angle first: the precedence check below must see this call's angle.
                if let Some(angle) = angle.into_change() {
                    if !same_opt_f64(p.angle, angle) {
                        p.angle = angle;
                        changed |= DirtyReasons::GEOMETRY;
                    }
                }
                let points_active = p.angle.is_none();

                if let Some(start) = start.resolve_with(|| LinearParams::DEFAULT_START) {
                    if start != p.start {
                        p.start = start;
                        if points_active {
                            changed |= DirtyReasons::GEOMETRY;
                        }
                    }
                }
                if let Some(end) = end.resolve_with(|| LinearParams::DEFAULT_END) {
                    if end != p.end {
                        p.end = end;
                        if points_active {
                            changed |= DirtyReasons::GEOMETRY;
                        }
                    }
                }

                collect_ignored(&mut ignored, "center", center.is_present());
                collect_ignored(&mut ignored, "radius", radius.is_present());
                collect_ignored(&mut ignored, "start_angle", start_angle.is_present());
                collect_ignored(&mut ignored, "end_angle", end_angle.is_present());
            }
            ShapeParams::Radial(p) => {
                if let Some(center) = center.resolve_with(Vector2::center) {
                    if center != p.center {
                        p.center = center;
                        changed |= DirtyReasons::GEOMETRY;
                    }
                }
                if let Some(radius) = radius.resolve_with(|| RadialParams::DEFAULT_RADIUS) {
                    if radius != p.radius {
                        p.radius = radius;
                        changed |= DirtyReasons::GEOMETRY;
                    }
                }

                collect_ignored(&mut ignored, "start", start.is_present());
                collect_ignored(&mut ignored, "end", end.is_present());
                collect_ignored(&mut ignored, "angle", angle.is_present());
                collect_ignored(&mut ignored, "start_angle", start_angle.is_present());
                collect_ignored(&mut ignored, "end_angle", end_angle.is_present());
            }
            ShapeParams::Sweep(p) => {
                if let Some(center) = center.resolve_with(Vector2::center) {
                    if center != p.center {
                        p.center = center;
                        changed |= DirtyReasons::GEOMETRY;
                    }
                }
                if let Some(a) = start_angle.resolve_with(|| SweepParams::DEFAULT_START_ANGLE) {
                    if a.to_bits() != p.start_angle.to_bits() {
                        p.start_angle = a;
                        changed |= DirtyReasons::GEOMETRY;
                    }
                }
                if let Some(a) = end_angle.resolve_with(|| SweepParams::DEFAULT_END_ANGLE) {
                    if a.to_bits() != p.end_angle.to_bits() {
                        p.end_angle = a;
                        changed |= DirtyReasons::GEOMETRY;
                    }
                }

                collect_ignored(&mut ignored, "start", start.is_present());
                collect_ignored(&mut ignored, "end", end.is_present());
                collect_ignored(&mut ignored, "angle", angle.is_present());
                collect_ignored(&mut ignored, "radius", radius.is_present());
            }
        }

        if !ignored.is_empty() {
            log::debug!("{} gradient ignores {}", kind.name(), ignored.join(", "));
        }
        if !changed.is_empty() {
            log::trace!("{} gradient changed: {:?}", kind.name(), changed);
            self.tracker.mark(changed);
        }
        changed
    }

    /// Resolves geometry and stops for the next draw.
    ///
    /// Drains the mailbox first. Clean instances return the cache untouched.
    /// Dirty instances with unusable bounds return degenerate geometry, stay
    /// dirty, and report `was_rebuilt = false`.
    pub fn resolve(&mut self) -> Resolved<'_> {
        self.drain_mailbox();
        self.stats.resolves += 1;

        if !self.tracker.is_dirty() {
            return self.output(false);
        }

        let kind = self.kind();
        let reasons = self.tracker.reasons();
        let size = self.tracker.bounds();

        if reasons.affects_stops() {
            self.stops = resolve_stops(&self.params.stops.colors, self.params.stops.positions.as_deref())
                .or_fallback(self.config.empty_fallback);
        }

        if !self.tracker.can_rebuild() {
            self.stats.deferred += 1;
            log::trace!("{} gradient deferred: bounds {}x{}", kind.name(), size.width, size.height);
            self.geometry = ResolvedGeometry::degenerate(kind, size);
            return self.output(false);
        }

        self.geometry = resolve_geometry(&self.params.shape, size);
        self.tracker.mark_clean(size);
        self.stats.rebuilds += 1;
        log::debug!(
            "rebuilt {} gradient at {}x{} ({:?}, {} stops)",
            kind.name(),
            size.width,
            size.height,
            reasons,
            self.stops.len()
        );
        self.output(true)
    }

    /// Releases the instance. Pending and future pushes are dropped.
    pub fn destroy(self) {
        log::trace!("destroying {} gradient instance", self.kind().name());
        drop(self);
    }

    fn output(&self, was_rebuilt: bool) -> Resolved<'_> {
        Resolved {
            geometry: self.geometry,
            stops: self.stops.as_slice(),
            stop_source: self.stops.source(),
            size: self.tracker.bounds(),
            was_rebuilt,
        }
    }
}

impl Drop for GradientInstance {
    fn drop(&mut self) {
        self.mailbox.close();
    }
}

fn collect_ignored(ignored: &mut Vec<&'static str>, name: &'static str, present: bool) {
    if present {
        ignored.push(name);
    }
}

fn same_opt_f64(a: Option<f64>, b: Option<f64>) -> bool {
    a.map(f64::to_bits) == b.map(f64::to_bits)
}

/// Byte-level equality, so re-sending identical positions (NaN included) is a no-op.
fn same_positions(a: Option<&[f64]>, b: Option<&[f64]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits()),
        _ => false,
    }
}
