use super::Point;

/// Surface bounds reported by the view host on every layout pass.
///
/// Read-only input to the engine. A size with either dimension `<= 0` (or
/// non-finite) is *invalid*: geometry cannot be resolved against it and
/// rasterization must be skipped.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { width: 0.0, height: 0.0 }
    }

    /// True when both dimensions are finite and strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Smaller of the two dimensions; the basis for implicit radius percentages.
    #[inline]
    pub fn min_dimension(self) -> f64 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl From<(f64, f64)> for SurfaceSize {
    #[inline]
    fn from((width, height): (f64, f64)) -> Self {
        SurfaceSize::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_invalid() {
        assert!(!SurfaceSize::zero().is_valid());
        assert!(!SurfaceSize::new(0.0, 10.0).is_valid());
        assert!(!SurfaceSize::new(10.0, 0.0).is_valid());
    }

    #[test]
    fn negative_is_invalid() {
        assert!(!SurfaceSize::new(-5.0, 10.0).is_valid());
    }

    #[test]
    fn non_finite_is_invalid() {
        assert!(!SurfaceSize::new(f64::INFINITY, 10.0).is_valid());
        assert!(!SurfaceSize::new(10.0, f64::NAN).is_valid());
    }

    #[test]
    fn min_dimension_and_center() {
        let s = SurfaceSize::new(200.0, 100.0);
        assert!(s.is_valid());
        assert_eq!(s.min_dimension(), 100.0);
        assert_eq!(s.center(), Point::new(100.0, 50.0));
    }
}
