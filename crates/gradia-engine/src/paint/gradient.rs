use crate::coords::{AxisHint, RadiusValue, Vector2};

use super::Argb;

/// A single resolved gradient stop.
///
/// `location` is expected in `[0, 1]` but is neither clamped nor sorted:
/// callers may pass out-of-order locations and the rasterizer gets them as-is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub color: Argb,
    pub location: f64,
}

impl ColorStop {
    #[inline]
    pub const fn new(color: Argb, location: f64) -> Self {
        Self { color, location }
    }
}

/// Gradient family of an instance. Fixed at creation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientKind {
    Linear,
    Radial,
    Sweep,
}

impl GradientKind {
    pub const fn name(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Sweep => "sweep",
        }
    }
}

/// Color inputs shared by every gradient kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopInputs {
    pub colors: Vec<Argb>,
    /// Explicit stop locations. `None` (or empty) means evenly spaced.
    pub positions: Option<Vec<f64>>,
}

/// How the endpoints of a linear gradient are chosen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LinearAxis {
    Points { start: Vector2, end: Vector2 },
    Angle(f64),
}

/// Linear gradient geometry inputs.
///
/// `start` and `end` are always retained, but while `angle` is set they are
/// ignored: [`LinearParams::axis`] reports the angle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearParams {
    pub start: Vector2,
    pub end: Vector2,
    pub angle: Option<f64>,
}

impl LinearParams {
    /// Default start: top-left corner.
    pub const DEFAULT_START: Vector2 = Vector2::percent(0.0, 0.0);
    /// Default end: top-right corner (a full-width left-to-right line).
    pub const DEFAULT_END: Vector2 = Vector2::percent(100.0, 0.0);

    /// The geometry source in effect: the angle wins whenever it is present.
    #[inline]
    pub fn axis(&self) -> LinearAxis {
        match self.angle {
            Some(a) => LinearAxis::Angle(a),
            None => LinearAxis::Points { start: self.start, end: self.end },
        }
    }
}

impl Default for LinearParams {
    fn default() -> Self {
        Self { start: Self::DEFAULT_START, end: Self::DEFAULT_END, angle: None }
    }
}

/// Radial gradient geometry inputs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadialParams {
    pub center: Vector2,
    pub radius: RadiusValue,
}

impl RadialParams {
    /// `"50%"` of `min(width, height)`, i.e. half the shorter side.
    pub const DEFAULT_RADIUS: RadiusValue = RadiusValue::percent(50.0, AxisHint::Implicit);
}

impl Default for RadialParams {
    fn default() -> Self {
        Self { center: Vector2::center(), radius: Self::DEFAULT_RADIUS }
    }
}

/// Sweep (conic) gradient geometry inputs. Angles are in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SweepParams {
    pub center: Vector2,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl SweepParams {
    pub const DEFAULT_START_ANGLE: f64 = 0.0;
    pub const DEFAULT_END_ANGLE: f64 = 360.0;
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            center: Vector2::center(),
            start_angle: Self::DEFAULT_START_ANGLE,
            end_angle: Self::DEFAULT_END_ANGLE,
        }
    }
}

/// Kind-specific geometry inputs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeParams {
    Linear(LinearParams),
    Radial(RadialParams),
    Sweep(SweepParams),
}

impl ShapeParams {
    pub fn default_for(kind: GradientKind) -> Self {
        match kind {
            GradientKind::Linear => ShapeParams::Linear(LinearParams::default()),
            GradientKind::Radial => ShapeParams::Radial(RadialParams::default()),
            GradientKind::Sweep => ShapeParams::Sweep(SweepParams::default()),
        }
    }

    pub fn kind(&self) -> GradientKind {
        match self {
            ShapeParams::Linear(_) => GradientKind::Linear,
            ShapeParams::Radial(_) => GradientKind::Radial,
            ShapeParams::Sweep(_) => GradientKind::Sweep,
        }
    }
}

/// Full prop state of one gradient instance.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientParams {
    pub stops: StopInputs,
    pub shape: ShapeParams,
}

impl GradientParams {
    pub fn new(kind: GradientKind) -> Self {
        Self { stops: StopInputs::default(), shape: ShapeParams::default_for(kind) }
    }

    #[inline]
    pub fn kind(&self) -> GradientKind {
        self.shape.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_overrides_points() {
        let mut p = LinearParams { start: Vector2::percent(10.0, 10.0), ..LinearParams::default() };
        assert!(matches!(p.axis(), LinearAxis::Points { .. }));

        p.angle = Some(45.0);
        assert_eq!(p.axis(), LinearAxis::Angle(45.0));

        p.angle = None;
        assert_eq!(p.axis(), LinearAxis::Points { start: Vector2::percent(10.0, 10.0), end: LinearParams::DEFAULT_END });
    }

    #[test]
    fn defaults_per_kind() {
        assert_eq!(GradientParams::new(GradientKind::Radial).kind(), GradientKind::Radial);
        match ShapeParams::default_for(GradientKind::Sweep) {
            ShapeParams::Sweep(s) => {
                assert_eq!(s.center, Vector2::center());
                assert_eq!((s.start_angle, s.end_angle), (0.0, 360.0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
