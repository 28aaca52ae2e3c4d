//! Gradia engine crate.
//!
//! Platform-neutral core of a gradient view: parses coordinate strings,
//! resolves linear / radial / sweep geometry against the laid-out surface,
//! resolves color stops, and caches the result until an input that is
//! actually in effect changes. Hosts drive it through
//! [`GradientInstance`] (or [`GradientSurface`] with a [`Rasterizer`]) and
//! may stream animated updates from another thread via [`UpdateSender`].

pub mod coords;
pub mod dirty;
pub mod geometry;
pub mod instance;
pub mod logging;
pub mod paint;
pub mod surface;
pub mod update;

pub use coords::{CoordinateValue, RadiusValue, SurfaceSize, Vector2};
pub use dirty::{DirtyReasons, DirtyState};
pub use geometry::ResolvedGeometry;
pub use instance::{GradientInstance, InstanceConfig, InstanceStats, Resolved};
pub use paint::{Argb, ColorStop, GradientKind, GradientUniform, StopSource};
pub use surface::{FrameOutcome, GradientSurface, Rasterizer};
pub use update::{GradientUpdate, SendError, UpdateSender};
