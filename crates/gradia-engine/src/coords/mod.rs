//! Coordinate types shared by the resolvers and the instance cache.
//!
//! Canonical space:
//! - Surface pixels, as reported by the view host (no density scaling here)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Inputs arrive either as absolute pixel offsets or as percentage strings
//! (`"50%"`, `"25w%"`, `"10h%"`). Percentages stay symbolic until a
//! [`SurfaceSize`] is known, so the same input resolves differently after
//! every layout pass.

mod point;
mod radius;
mod size;
mod value;
mod vector;

pub use point::Point;
pub use radius::RadiusValue;
pub use size::SurfaceSize;
pub use value::{Axis, AxisHint, CoordinateValue};
pub use vector::Vector2;
