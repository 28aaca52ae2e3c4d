use crate::coords::{RadiusValue, Vector2};
use crate::paint::Argb;

use super::Patch;

/// A partial prop update for one gradient instance.
///
/// Carries any subset of the gradient props. Fields that do not apply to the
/// receiving instance's kind are ignored. Build with the chained setters:
///
/// ```
/// use gradia_engine::update::GradientUpdate;
///
/// let u = GradientUpdate::new()
///     .colors([0xFFFF0000u32, 0xFF0000FF])
///     .angle(45.0)
///     .clear_positions();
/// assert!(!u.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientUpdate {
    pub colors: Patch<Vec<Argb>>,
    pub positions: Patch<Vec<f64>>,
    pub start: Patch<Vector2>,
    pub end: Patch<Vector2>,
    pub angle: Patch<f64>,
    pub center: Patch<Vector2>,
    pub radius: Patch<RadiusValue>,
    pub start_angle: Patch<f64>,
    pub end_angle: Patch<f64>,
}

impl GradientUpdate {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors<I, C>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Argb>,
    {
        self.colors = Patch::Set(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn clear_colors(mut self) -> Self {
        self.colors = Patch::Cleared;
        self
    }

    pub fn positions(mut self, positions: impl Into<Vec<f64>>) -> Self {
        self.positions = Patch::Set(positions.into());
        self
    }

    pub fn clear_positions(mut self) -> Self {
        self.positions = Patch::Cleared;
        self
    }

    pub fn start(mut self, start: impl Into<Vector2>) -> Self {
        self.start = Patch::Set(start.into());
        self
    }

    pub fn clear_start(mut self) -> Self {
        self.start = Patch::Cleared;
        self
    }

    pub fn end(mut self, end: impl Into<Vector2>) -> Self {
        self.end = Patch::Set(end.into());
        self
    }

    pub fn clear_end(mut self) -> Self {
        self.end = Patch::Cleared;
        self
    }

    pub fn angle(mut self, degrees: f64) -> Self {
        self.angle = Patch::Set(degrees);
        self
    }

    pub fn clear_angle(mut self) -> Self {
        self.angle = Patch::Cleared;
        self
    }

    pub fn center(mut self, center: impl Into<Vector2>) -> Self {
        self.center = Patch::Set(center.into());
        self
    }

    pub fn clear_center(mut self) -> Self {
        self.center = Patch::Cleared;
        self
    }

    pub fn radius(mut self, radius: impl Into<RadiusValue>) -> Self {
        self.radius = Patch::Set(radius.into());
        self
    }

    pub fn clear_radius(mut self) -> Self {
        self.radius = Patch::Cleared;
        self
    }

    pub fn start_angle(mut self, degrees: f64) -> Self {
        self.start_angle = Patch::Set(degrees);
        self
    }

    pub fn clear_start_angle(mut self) -> Self {
        self.start_angle = Patch::Cleared;
        self
    }

    pub fn end_angle(mut self, degrees: f64) -> Self {
        self.end_angle = Patch::Set(degrees);
        self
    }

    pub fn clear_end_angle(mut self) -> Self {
        self.end_angle = Patch::Cleared;
        self
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.present_fields().next().is_none()
    }

    /// Names of the present fields, in declaration order.
    pub fn present_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        [
            ("colors", self.colors.is_present()),
            ("positions", self.positions.is_present()),
            ("start", self.start.is_present()),
            ("end", self.end.is_present()),
            ("angle", self.angle.is_present()),
            ("center", self.center.is_present()),
            ("radius", self.radius.is_present()),
            ("start_angle", self.start_angle.is_present()),
            ("end_angle", self.end_angle.is_present()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
    }

    /// Coalesces `newer` on top of `self`, field by field. Present fields in
    /// `newer` win; absent ones keep the older value.
    pub fn merge(self, newer: GradientUpdate) -> GradientUpdate {
        GradientUpdate {
            colors: self.colors.merge(newer.colors),
            positions: self.positions.merge(newer.positions),
            start: self.start.merge(newer.start),
            end: self.end.merge(newer.end),
            angle: self.angle.merge(newer.angle),
            center: self.center.merge(newer.center),
            radius: self.radius.merge(newer.radius),
            start_angle: self.start_angle.merge(newer.start_angle),
            end_angle: self.end_angle.merge(newer.end_angle),
        }
    }
}
