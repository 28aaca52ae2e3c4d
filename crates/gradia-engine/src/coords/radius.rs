use core::fmt;

use super::{AxisHint, CoordinateValue};

/// Radius input for radial gradients.
///
/// Same grammar as [`CoordinateValue`], but an implicit percentage is a
/// fraction of `min(width, height)`: `"50%"` on a 200×100 surface is 50px.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RadiusValue(pub CoordinateValue);

impl RadiusValue {
    #[inline]
    pub const fn absolute(px: f64) -> Self {
        RadiusValue(CoordinateValue::Absolute(px))
    }

    #[inline]
    pub const fn percent(value: f64, hint: AxisHint) -> Self {
        RadiusValue(CoordinateValue::Percent(value, hint))
    }

    #[inline]
    pub fn parse(s: &str) -> Self {
        RadiusValue(CoordinateValue::parse(s))
    }

    #[inline]
    pub const fn value(self) -> CoordinateValue {
        self.0
    }
}

impl From<CoordinateValue> for RadiusValue {
    #[inline]
    fn from(v: CoordinateValue) -> Self {
        RadiusValue(v)
    }
}

impl From<f64> for RadiusValue {
    #[inline]
    fn from(px: f64) -> Self {
        RadiusValue::absolute(px)
    }
}

impl From<&str> for RadiusValue {
    #[inline]
    fn from(s: &str) -> Self {
        RadiusValue::parse(s)
    }
}

impl fmt::Display for RadiusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
