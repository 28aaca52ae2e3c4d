//! Geometry resolution.
//!
//! Turns symbolic inputs (percentages, angles) plus the current
//! [`SurfaceSize`](crate::coords::SurfaceSize) into pixel-space geometry.
//! Every function here is pure and total: malformed inputs have already been
//! mapped to zero by parsing, and an invalid surface yields degenerate
//! geometry instead of an error.

mod angle;
mod resolve;
mod resolved;

pub use angle::resolve_angle_to_endpoints;
pub use resolve::{resolve_coordinate, resolve_radius, resolve_vector};
pub use resolved::{LinearGeometry, RadialGeometry, ResolvedGeometry, SweepGeometry, resolve_geometry};

#[cfg(test)]
pub(crate) fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}
