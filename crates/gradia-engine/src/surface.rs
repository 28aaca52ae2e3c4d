//! Host-side draw loop glue.
//!
//! A [`GradientSurface`] pairs one [`GradientInstance`] with the host's
//! [`Rasterizer`] and enforces the publication rule: the rasterizer only
//! rebuilds when a resolve actually recomputed something, and nothing is
//! drawn while the surface has no usable area.

use crate::coords::SurfaceSize;
use crate::geometry::ResolvedGeometry;
use crate::instance::{GradientInstance, InstanceConfig};
use crate::paint::{ColorStop, GradientKind};
use crate::update::{GradientUpdate, UpdateSender};

/// Native shader / layer owned by the host.
pub trait Rasterizer {
    /// Replace the native gradient with freshly resolved parameters.
    fn rebuild(&mut self, geometry: &ResolvedGeometry, stops: &[ColorStop], size: SurfaceSize);

    /// Paint the current native gradient. Hosts whose layer composites on
    /// its own can leave this empty.
    fn draw(&mut self, _size: SurfaceSize) {}
}

/// What one call to [`GradientSurface::frame`] did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// Parameters changed; the rasterizer was rebuilt, then drawn.
    Rebuilt,
    /// Cache was clean; drawn with the existing native gradient.
    Reused,
    /// Nothing to draw: no area yet, or a rebuild is still deferred.
    Skipped,
}

/// One gradient instance bound to the rasterizer that draws it.
///
/// Owns both; [`destroy`](GradientSurface::destroy) hands the rasterizer back.
pub struct GradientSurface<R> {
    instance: GradientInstance,
    rasterizer: R,
}

impl<R: Rasterizer> GradientSurface<R> {
    pub fn new(kind: GradientKind, rasterizer: R) -> Self {
        Self::with_config(kind, InstanceConfig::default(), rasterizer)
    }

    pub fn with_config(kind: GradientKind, config: InstanceConfig, rasterizer: R) -> Self {
        Self { instance: GradientInstance::with_config(kind, config), rasterizer }
    }

    pub fn sender(&self) -> UpdateSender {
        self.instance.sender()
    }

    pub fn layout(&mut self, width: f64, height: f64) {
        self.instance.set_bounds(width, height);
    }

    pub fn apply(&mut self, update: GradientUpdate) {
        self.instance.apply(update);
    }

    /// Resolves, rebuilds the rasterizer if needed, and draws.
    pub fn frame(&mut self) -> FrameOutcome {
        let resolved = self.instance.resolve();
        let size = resolved.size;
        let rebuilt = resolved.was_rebuilt;

        if rebuilt {
            self.rasterizer.rebuild(&resolved.geometry, resolved.stops, size);
        } else if self.instance.is_dirty() || !size.is_valid() {
            return FrameOutcome::Skipped;
        }

        self.rasterizer.draw(size);
        if rebuilt { FrameOutcome::Rebuilt } else { FrameOutcome::Reused }
    }

    #[inline]
    pub fn instance(&self) -> &GradientInstance {
        &self.instance
    }

    #[inline]
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    #[inline]
    pub fn rasterizer_mut(&mut self) -> &mut R {
        &mut self.rasterizer
    }

    /// Tears down the instance and hands the rasterizer back to the host.
    pub fn destroy(self) -> R {
        self.instance.destroy();
        self.rasterizer
    }
}
