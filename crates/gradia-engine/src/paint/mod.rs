//! Paint model: packed host colors, premultiplied GPU colors, gradient
//! parameters and color-stop resolution.
//!
//! Geometry types remain in `coords`; resolved pixel geometry in `geometry`.

pub mod color;
pub mod gradient;
pub mod stops;
pub mod uniform;

pub use color::{Argb, Color};
pub use gradient::{
    ColorStop, GradientKind, GradientParams, LinearAxis, LinearParams, RadialParams, ShapeParams,
    StopInputs, SweepParams,
};
pub use stops::{ColorStops, StopSource, resolve_stops};
pub use uniform::{GradientUniform, MAX_UNIFORM_STOPS};
