use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

/// Dimension a percentage refers to.
///
/// `Implicit` defers to the [`Axis`] the value is resolved on; `Width` and
/// `Height` are explicit overrides parsed from a `w` / `h` suffix placed
/// before the `%` terminator (`"25w%"`, `"40h%"`).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum AxisHint {
    #[default]
    Implicit,
    Width,
    Height,
}

/// The role a coordinate plays when it is resolved.
///
/// Decides what an [`AxisHint::Implicit`] percentage is a fraction of:
/// - `X` → surface width
/// - `Y` → surface height
/// - `Radial` → `min(width, height)` (a radius has no natural single axis)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Radial,
}

/// A single coordinate input: an absolute pixel offset or a percentage.
///
/// Absolute values are taken as-is; density scaling is a host concern.
///
/// Parsing is lenient. Anything that is not `<number>%`, `<number>w%` or
/// `<number>h%` becomes `Percent(0.0, Implicit)`, which resolves to zero.
/// Hosts observe that zero, so the fallback must stay exactly this.
#[derive(Debug, Copy, Clone)]
pub enum CoordinateValue {
    Absolute(f64),
    Percent(f64, AxisHint),
}

impl CoordinateValue {
    /// Fallback produced for every malformed percentage string.
    pub const MALFORMED: CoordinateValue = CoordinateValue::Percent(0.0, AxisHint::Implicit);

    #[inline]
    pub const fn absolute(px: f64) -> Self {
        CoordinateValue::Absolute(px)
    }

    #[inline]
    pub const fn percent(value: f64) -> Self {
        CoordinateValue::Percent(value, AxisHint::Implicit)
    }

    #[inline]
    pub const fn percent_of_width(value: f64) -> Self {
        CoordinateValue::Percent(value, AxisHint::Width)
    }

    #[inline]
    pub const fn percent_of_height(value: f64) -> Self {
        CoordinateValue::Percent(value, AxisHint::Height)
    }

    /// Parses a percentage string. Never fails; see the type docs for the fallback.
    pub fn parse(s: &str) -> Self {
        let Some(body) = s.strip_suffix('%') else {
            return Self::MALFORMED;
        };

        let (number, hint) = if let Some(n) = body.strip_suffix('w') {
            (n, AxisHint::Width)
        } else if let Some(n) = body.strip_suffix('h') {
            (n, AxisHint::Height)
        } else {
            (body, AxisHint::Implicit)
        };

        match number.parse::<f64>() {
            Ok(v) if v.is_finite() => CoordinateValue::Percent(v, hint),
            _ => Self::MALFORMED,
        }
    }

    #[inline]
    pub fn is_percent(self) -> bool {
        matches!(self, CoordinateValue::Percent(..))
    }
}

impl Default for CoordinateValue {
    fn default() -> Self {
        CoordinateValue::Absolute(0.0)
    }
}

// Bitwise on the float payload so equality stays reflexive for NaN inputs;
// the dirtiness check relies on `x == x` always holding.
impl PartialEq for CoordinateValue {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (CoordinateValue::Absolute(a), CoordinateValue::Absolute(b)) => a.to_bits() == b.to_bits(),
            (CoordinateValue::Percent(a, ha), CoordinateValue::Percent(b, hb)) => {
                a.to_bits() == b.to_bits() && ha == hb
            }
            _ => false,
        }
    }
}

impl Eq for CoordinateValue {}

impl From<f64> for CoordinateValue {
    #[inline]
    fn from(px: f64) -> Self {
        CoordinateValue::Absolute(px)
    }
}

impl From<&str> for CoordinateValue {
    #[inline]
    fn from(s: &str) -> Self {
        CoordinateValue::parse(s)
    }
}

impl FromStr for CoordinateValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoordinateValue::parse(s))
    }
}

impl fmt::Display for CoordinateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CoordinateValue::Absolute(px) => write!(f, "{px}"),
            CoordinateValue::Percent(v, AxisHint::Implicit) => write!(f, "{v}%"),
            CoordinateValue::Percent(v, AxisHint::Width) => write!(f, "{v}w%"),
            CoordinateValue::Percent(v, AxisHint::Height) => write!(f, "{v}h%"),
        }
    }
}
