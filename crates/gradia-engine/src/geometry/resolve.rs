use crate::coords::{Axis, AxisHint, CoordinateValue, Point, RadiusValue, SurfaceSize, Vector2};

/// Resolves one coordinate to pixels.
///
/// `Absolute` passes through. `Percent(n, hint)` is `n / 100` of:
/// - width for `Width`, height for `Height`
/// - for `Implicit`, the dimension `axis` names (see [`Axis`])
#[inline]
pub fn resolve_coordinate(value: CoordinateValue, axis: Axis, size: SurfaceSize) -> f64 {
    match value {
        CoordinateValue::Absolute(px) => px,
        CoordinateValue::Percent(n, hint) => {
            let basis = match (hint, axis) {
                (AxisHint::Width, _) | (AxisHint::Implicit, Axis::X) => size.width,
                (AxisHint::Height, _) | (AxisHint::Implicit, Axis::Y) => size.height,
                (AxisHint::Implicit, Axis::Radial) => size.min_dimension(),
            };
            n / 100.0 * basis
        }
    }
}

/// Resolves a vector: `x` on the X axis, `y` on the Y axis.
#[inline]
pub fn resolve_vector(value: Vector2, size: SurfaceSize) -> Point {
    Point::new(
        resolve_coordinate(value.x, Axis::X, size),
        resolve_coordinate(value.y, Axis::Y, size),
    )
}

/// Resolves a radius to pixels.
///
/// Implicit percentages are relative to `min(width, height)`. The result is
/// never negative, and is `0` on an invalid surface.
#[inline]
pub fn resolve_radius(value: RadiusValue, size: SurfaceSize) -> f64 {
    if !size.is_valid() {
        return 0.0;
    }
    // `max` also maps NaN to 0.
    resolve_coordinate(value.value(), Axis::Radial, size).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SIZE: SurfaceSize = SurfaceSize::new(200.0, 100.0);

    // ── coordinates ───────────────────────────────────────────────────────

    #[test]
    fn absolute_passes_through() {
        assert_eq!(resolve_coordinate(CoordinateValue::Absolute(37.5), Axis::X, SIZE), 37.5);
        assert_eq!(resolve_coordinate(CoordinateValue::Absolute(-4.0), Axis::Y, SIZE), -4.0);
    }

    #[test]
    fn implicit_follows_axis() {
        let v = CoordinateValue::parse("50%");
        assert_eq!(resolve_coordinate(v, Axis::X, SIZE), 100.0);
        assert_eq!(resolve_coordinate(v, Axis::Y, SIZE), 50.0);
        assert_eq!(resolve_coordinate(v, Axis::Radial, SIZE), 50.0);
    }

    #[test]
    fn explicit_hint_overrides_axis() {
        assert_eq!(resolve_coordinate("10h%".into(), Axis::X, SIZE), 10.0);
        assert_eq!(resolve_coordinate("20w%".into(), Axis::Y, SIZE), 40.0);
    }

    #[test]
    fn malformed_resolves_to_zero() {
        for s in ["50", "abc%", "50%w", "", "%"] {
            for axis in [Axis::X, Axis::Y, Axis::Radial] {
                assert_eq!(resolve_coordinate(s.into(), axis, SIZE), 0.0, "{s:?}");
            }
        }
    }

    #[test]
    fn vector_mixes_units() {
        let p = resolve_vector(("25%", 10.0).into(), SIZE);
        assert_eq!(p, Point::new(50.0, 10.0));
    }

    // ── radius ────────────────────────────────────────────────────────────

    #[test]
    fn radius_implicit_uses_min_dimension() {
        assert_eq!(resolve_radius(RadiusValue::parse("50%"), SIZE), 50.0);
        assert_eq!(resolve_radius(RadiusValue::parse("50w%"), SIZE), 100.0);
        assert_eq!(resolve_radius(RadiusValue::parse("50h%"), SIZE), 50.0);
        assert_eq!(resolve_radius(RadiusValue::absolute(12.0), SIZE), 12.0);
    }

    #[test]
    fn radius_is_clamped_and_degenerate_on_empty_surface() {
        assert_eq!(resolve_radius(RadiusValue::absolute(-3.0), SIZE), 0.0);
        assert_eq!(resolve_radius(RadiusValue::absolute(30.0), SurfaceSize::new(0.0, 10.0)), 0.0);
        assert_eq!(resolve_radius(RadiusValue::absolute(f64::NAN), SIZE), 0.0);
    }

    proptest! {
        #[test]
        fn percent_strings_scale_dimensions(
            n in -1000i32..1000,
            w in 1.0f64..4000.0,
            h in 1.0f64..4000.0,
        ) {
            let size = SurfaceSize::new(w, h);
            let n = n as f64 / 4.0;
            let implicit = CoordinateValue::parse(&format!("{n}%"));
            let width = CoordinateValue::parse(&format!("{n}w%"));
            let height = CoordinateValue::parse(&format!("{n}h%"));

            prop_assert_eq!(resolve_coordinate(implicit, Axis::X, size), n / 100.0 * w);
            prop_assert_eq!(resolve_coordinate(implicit, Axis::Y, size), n / 100.0 * h);
            prop_assert_eq!(resolve_coordinate(width, Axis::X, size), n / 100.0 * w);
            prop_assert_eq!(resolve_coordinate(height, Axis::X, size), n / 100.0 * h);
        }

        #[test]
        fn malformed_never_errors(s in "[a-zA-Z ]{0,8}%?", w in 1.0f64..500.0) {
            let size = SurfaceSize::new(w, w);
            let v = CoordinateValue::parse(&s);
            let r = resolve_coordinate(v, Axis::X, size);
            // Letters only: either no terminator or a non-numeric prefix.
            // "inf"/"nan" spellings parse as non-finite and fall back too.
            prop_assert_eq!(r, 0.0);
        }
    }
}
