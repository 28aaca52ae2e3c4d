use crate::coords::{Point, SurfaceSize};
use crate::paint::{GradientKind, LinearAxis, ShapeParams};

use super::{resolve_angle_to_endpoints, resolve_radius, resolve_vector};

/// Linear gradient line in surface pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LinearGeometry {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl LinearGeometry {
    #[inline]
    pub fn from_points(start: Point, end: Point) -> Self {
        Self { x0: start.x, y0: start.y, x1: end.x, y1: end.y }
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }

    /// Endpoints as fractions of the surface, for rasterizers that take
    /// unit-space start/end points. Zero on an invalid surface.
    pub fn normalized(&self, size: SurfaceSize) -> (Point, Point) {
        if !size.is_valid() {
            return (Point::zero(), Point::zero());
        }
        let scale = |p: Point| Point::new(p.x / size.width, p.y / size.height);
        (scale(self.start()), scale(self.end()))
    }
}

/// Radial gradient circle in surface pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RadialGeometry {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl RadialGeometry {
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}

/// Sweep gradient center in surface pixels and angular range in radians.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SweepGeometry {
    pub cx: f64,
    pub cy: f64,
    pub start: f64,
    pub end: f64,
}

impl SweepGeometry {
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Angular span in radians (`end - start`).
    #[inline]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Pixel-space output of geometry resolution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ResolvedGeometry {
    Linear(LinearGeometry),
    Radial(RadialGeometry),
    Sweep(SweepGeometry),
}

impl ResolvedGeometry {
    /// Zero-extent geometry at the surface center, used whenever the
    /// surface cannot be resolved against.
    pub fn degenerate(kind: GradientKind, size: SurfaceSize) -> Self {
        let c = size.center();
        match kind {
            GradientKind::Linear => ResolvedGeometry::Linear(LinearGeometry::from_points(c, c)),
            GradientKind::Radial => ResolvedGeometry::Radial(RadialGeometry { cx: c.x, cy: c.y, r: 0.0 }),
            GradientKind::Sweep => {
                ResolvedGeometry::Sweep(SweepGeometry { cx: c.x, cy: c.y, start: 0.0, end: 0.0 })
            }
        }
    }

    pub fn kind(&self) -> GradientKind {
        match self {
            ResolvedGeometry::Linear(_) => GradientKind::Linear,
            ResolvedGeometry::Radial(_) => GradientKind::Radial,
            ResolvedGeometry::Sweep(_) => GradientKind::Sweep,
        }
    }

    /// True when there is nothing a rasterizer could draw.
    pub fn is_degenerate(&self) -> bool {
        match self {
            ResolvedGeometry::Linear(g) => g.length() == 0.0,
            ResolvedGeometry::Radial(g) => g.r <= 0.0,
            ResolvedGeometry::Sweep(g) => g.span() == 0.0,
        }
    }

    /// `[a, b, c, d]` packing used by GPU uniforms:
    /// linear `x0 y0 x1 y1`, radial `cx cy r 0`, sweep `cx cy start end`.
    pub fn to_f32x4(&self) -> [f32; 4] {
        match *self {
            ResolvedGeometry::Linear(g) => [g.x0 as f32, g.y0 as f32, g.x1 as f32, g.y1 as f32],
            ResolvedGeometry::Radial(g) => [g.cx as f32, g.cy as f32, g.r as f32, 0.0],
            ResolvedGeometry::Sweep(g) => [g.cx as f32, g.cy as f32, g.start as f32, g.end as f32],
        }
    }
}

/// Resolves kind-specific inputs against `size`.
///
/// Degenerate on an invalid surface. For linear gradients a present angle
/// always wins over `start` / `end`.
pub fn resolve_geometry(shape: &ShapeParams, size: SurfaceSize) -> ResolvedGeometry {
    if !size.is_valid() {
        return ResolvedGeometry::degenerate(shape.kind(), size);
    }

    match shape {
        ShapeParams::Linear(p) => {
            let (start, end) = match p.axis() {
                LinearAxis::Angle(a) => resolve_angle_to_endpoints(a, size),
                LinearAxis::Points { start, end } => (resolve_vector(start, size), resolve_vector(end, size)),
            };
            ResolvedGeometry::Linear(LinearGeometry::from_points(start, end))
        }
        ShapeParams::Radial(p) => {
            let c = resolve_vector(p.center, size);
            ResolvedGeometry::Radial(RadialGeometry { cx: c.x, cy: c.y, r: resolve_radius(p.radius, size) })
        }
        ShapeParams::Sweep(p) => {
            let c = resolve_vector(p.center, size);
            ResolvedGeometry::Sweep(SweepGeometry {
                cx: c.x,
                cy: c.y,
                start: p.start_angle.to_radians(),
                end: p.end_angle.to_radians(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{RadiusValue, Vector2};
    use crate::geometry::assert_close;
    use crate::paint::{LinearParams, RadialParams, SweepParams};

    const SIZE: SurfaceSize = SurfaceSize::new(200.0, 100.0);

    #[test]
    fn linear_points_resolve_per_axis() {
        let shape = ShapeParams::Linear(LinearParams {
            start: ("10%", "0%").into(),
            end: (150.0, "100%").into(),
            angle: None,
        });
        let ResolvedGeometry::Linear(g) = resolve_geometry(&shape, SIZE) else { panic!() };
        assert_eq!(g, LinearGeometry { x0: 20.0, y0: 0.0, x1: 150.0, y1: 100.0 });
    }

    #[test]
    fn linear_default_spans_top_edge() {
        let shape = ShapeParams::Linear(LinearParams::default());
        let ResolvedGeometry::Linear(g) = resolve_geometry(&shape, SIZE) else { panic!() };
        assert_eq!((g.start(), g.end()), (Point::new(0.0, 0.0), Point::new(200.0, 0.0)));
    }

    #[test]
    fn angle_wins_over_points() {
        let shape = ShapeParams::Linear(LinearParams {
            start: Vector2::percent(0.0, 0.0),
            end: Vector2::percent(0.0, 100.0),
            angle: Some(45.0),
        });
        let (s, e) = resolve_angle_to_endpoints(45.0, SIZE);
        assert_eq!(resolve_geometry(&shape, SIZE), ResolvedGeometry::Linear(LinearGeometry::from_points(s, e)));
    }

    #[test]
    fn radial_defaults_to_centered_half_min() {
        let size = SurfaceSize::new(100.0, 100.0);
        let g = resolve_geometry(&ShapeParams::Radial(RadialParams::default()), size);
        assert_eq!(g, ResolvedGeometry::Radial(RadialGeometry { cx: 50.0, cy: 50.0, r: 50.0 }));
    }

    #[test]
    fn radial_explicit_radius() {
        let shape = ShapeParams::Radial(RadialParams { center: (0.0, 0.0).into(), radius: RadiusValue::parse("80w%") });
        let ResolvedGeometry::Radial(g) = resolve_geometry(&shape, SIZE) else { panic!() };
        assert_eq!(g.r, 160.0);
        assert_eq!(g.center(), Point::zero());
    }

    #[test]
    fn sweep_converts_to_radians() {
        let shape = ShapeParams::Sweep(SweepParams { start_angle: 90.0, end_angle: 270.0, ..SweepParams::default() });
        let ResolvedGeometry::Sweep(g) = resolve_geometry(&shape, SIZE) else { panic!() };
        assert_eq!(g.center(), Point::new(100.0, 50.0));
        assert_close(g.start, core::f64::consts::FRAC_PI_2);
        assert_close(g.span(), core::f64::consts::PI);
    }

    #[test]
    fn invalid_surface_is_degenerate_for_every_kind() {
        for kind in [GradientKind::Linear, GradientKind::Radial, GradientKind::Sweep] {
            let g = resolve_geometry(&ShapeParams::default_for(kind), SurfaceSize::new(0.0, 50.0));
            assert!(g.is_degenerate(), "{kind:?}");
            assert_eq!(g.kind(), kind);
        }
    }

    #[test]
    fn normalized_linear() {
        let g = LinearGeometry { x0: 0.0, y0: 50.0, x1: 200.0, y1: 50.0 };
        assert_eq!(g.normalized(SIZE), (Point::new(0.0, 0.5), Point::new(1.0, 0.5)));
        assert_eq!(g.normalized(SurfaceSize::zero()), (Point::zero(), Point::zero()));
    }
}
