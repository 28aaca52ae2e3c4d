use super::CoordinateValue;

/// A gradient endpoint or center: one [`CoordinateValue`] per axis.
///
/// `x` resolves against the width and `y` against the height unless the
/// value carries an explicit `w` / `h` hint.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Vector2 {
    pub x: CoordinateValue,
    pub y: CoordinateValue,
}

impl Vector2 {
    #[inline]
    pub const fn new(x: CoordinateValue, y: CoordinateValue) -> Self {
        Self { x, y }
    }

    /// Both components as absolute pixels.
    #[inline]
    pub const fn absolute(x: f64, y: f64) -> Self {
        Self::new(CoordinateValue::Absolute(x), CoordinateValue::Absolute(y))
    }

    /// Both components as implicit percentages.
    #[inline]
    pub const fn percent(x: f64, y: f64) -> Self {
        Self::new(CoordinateValue::percent(x), CoordinateValue::percent(y))
    }

    /// `(50%, 50%)`, the default center for radial and sweep gradients.
    #[inline]
    pub const fn center() -> Self {
        Self::percent(50.0, 50.0)
    }
}

impl<X, Y> From<(X, Y)> for Vector2
where
    X: Into<CoordinateValue>,
    Y: Into<CoordinateValue>,
{
    #[inline]
    fn from((x, y): (X, Y)) -> Self {
        Vector2::new(x.into(), y.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_tuple_conversion() {
        let v: Vector2 = ("50%", 10.0).into();
        assert_eq!(v.x, CoordinateValue::percent(50.0));
        assert_eq!(v.y, CoordinateValue::Absolute(10.0));
    }

    #[test]
    fn equality_is_per_component() {
        assert_eq!(Vector2::from(("50%", "50%")), Vector2::center());
        assert_ne!(Vector2::from(("50%", "50h%")), Vector2::center());
    }
}
