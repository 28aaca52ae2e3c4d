//! Angle → gradient line.
//!
//! Convention: degrees, clockwise from the +x axis in screen space (y down).
//! `0` runs left→right, `90` top→bottom, `180` right→left, `270` bottom→top.
//!
//! The gradient line passes through the surface center. Its start point is
//! where the line meets the perpendicular through the corner the gradient
//! starts from, so the first and last stops land exactly on opposite corners
//! (the CSS `linear-gradient` construction). The end point mirrors the start
//! about the center.

use crate::coords::{Point, SurfaceSize};

/// Resolves `angle_degrees` to pixel-space `(start, end)` endpoints.
///
/// Angles are normalized into `[0, 360)`, so `a` and `a + 360` give the same
/// line. On an invalid surface both endpoints are the surface center
/// (a zero-length line).
pub fn resolve_angle_to_endpoints(angle_degrees: f64, size: SurfaceSize) -> (Point, Point) {
    let center = size.center();
    if !size.is_valid() || !angle_degrees.is_finite() {
        return (center, center);
    }

    // The corner construction below works in cartesian space (+y up), where
    // angles grow counter-clockwise. Mirror the screen angle into it.
    let screen = angle_degrees.rem_euclid(360.0);
    let cartesian = if screen == 0.0 { 0.0 } else { 360.0 - screen };

    let rel = start_offset(cartesian, size.width / 2.0, size.height / 2.0);

    // Back to screen space: flip y.
    let start = Point::new(center.x + rel.x, center.y - rel.y);
    let end = Point::new(center.x - rel.x, center.y + rel.y);
    (start, end)
}

/// Start point relative to the center, cartesian space.
///
/// `angle` must already be in `[0, 360)`.
fn start_offset(angle: f64, half_w: f64, half_h: f64) -> Point {
    // Slopes are undefined on the axes.
    if angle % 90.0 == 0.0 {
        return axis_aligned_start(angle, half_w, half_h);
    }

    let slope = angle.to_radians().tan();
    let perpendicular = -1.0 / slope;
    let corner = start_corner(angle, half_w, half_h);

    // y = perpendicular * x + b through the corner.
    let b = corner.y - perpendicular * corner.x;

    // Intersection with y = slope * x.
    let x = b / (slope - perpendicular);
    Point::new(x, slope * x)
}

fn axis_aligned_start(angle: f64, half_w: f64, half_h: f64) -> Point {
    if angle == 0.0 {
        Point::new(-half_w, 0.0) // left → right
    } else if angle == 90.0 {
        Point::new(0.0, -half_h) // bottom → top
    } else if angle == 180.0 {
        Point::new(half_w, 0.0) // right → left
    } else {
        Point::new(0.0, half_h) // top → bottom
    }
}

/// The corner opposite the quadrant the gradient points into.
fn start_corner(angle: f64, half_w: f64, half_h: f64) -> Point {
    if angle < 90.0 {
        Point::new(-half_w, -half_h) // bottom-left
    } else if angle < 180.0 {
        Point::new(half_w, -half_h) // bottom-right
    } else if angle < 270.0 {
        Point::new(half_w, half_h) // top-right
    } else {
        Point::new(-half_w, half_h) // top-left
    }
}
