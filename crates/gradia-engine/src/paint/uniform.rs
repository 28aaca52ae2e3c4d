use bytemuck::{Pod, Zeroable};

use crate::coords::SurfaceSize;
use crate::geometry::ResolvedGeometry;

use super::{ColorStop, GradientKind};

/// Maximum stops a [`GradientUniform`] carries.
pub const MAX_UNIFORM_STOPS: usize = 8;

/// Resolved gradient packed for upload to a GPU rasterizer.
///
/// Layout (std140-compatible, 192 bytes):
/// - `geometry`: see [`ResolvedGeometry::to_f32x4`]
/// - `size`: surface width/height in pixels
/// - `kind`: 0 linear, 1 radial, 2 sweep
/// - `colors`: premultiplied RGBA per stop
/// - `offsets`: stop locations, four per vec4
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct GradientUniform {
    pub geometry: [f32; 4],
    pub size: [f32; 2],
    pub kind: u32,
    pub stop_count: u32,
    pub colors: [[f32; 4]; MAX_UNIFORM_STOPS],
    pub offsets: [[f32; 4]; MAX_UNIFORM_STOPS / 4],
}

impl GradientUniform {
    /// Packs resolved output.
    ///
    /// Stop lists longer than [`MAX_UNIFORM_STOPS`] keep the first
    /// `MAX_UNIFORM_STOPS - 1` stops plus the last one; a debug message is
    /// emitted the first time per `warned_truncated` flag.
    pub fn pack(
        geometry: &ResolvedGeometry,
        stops: &[ColorStop],
        size: SurfaceSize,
        warned_truncated: &mut bool,
    ) -> Self {
        let mut u = GradientUniform::zeroed();
        u.geometry = geometry.to_f32x4();
        u.size = [size.width as f32, size.height as f32];
        u.kind = kind_index(geometry.kind());

        let picked: Vec<&ColorStop> = if stops.len() > MAX_UNIFORM_STOPS {
            if !*warned_truncated {
                log::debug!(
                    "gradient has {} stops; uniform carries {}, dropping interior stops",
                    stops.len(),
                    MAX_UNIFORM_STOPS
                );
                *warned_truncated = true;
            }
            stops[..MAX_UNIFORM_STOPS - 1].iter().chain(stops.last()).collect()
        } else {
            stops.iter().collect()
        };

        for (i, stop) in picked.iter().enumerate() {
            u.colors[i] = stop.color.to_premul().to_array();
            u.offsets[i / 4][i % 4] = stop.location as f32;
        }
        u.stop_count = picked.len() as u32;
        u
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn kind_index(kind: GradientKind) -> u32 {
    match kind {
        GradientKind::Linear => 0,
        GradientKind::Radial => 1,
        GradientKind::Sweep => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LinearGeometry, RadialGeometry};
    use crate::paint::Argb;

    #[test]
    fn size_is_std140_friendly() {
        assert_eq!(std::mem::size_of::<GradientUniform>(), 192);
        assert_eq!(std::mem::size_of::<GradientUniform>() % 16, 0);
    }

    #[test]
    fn packs_two_stop_linear() {
        let g = ResolvedGeometry::Linear(LinearGeometry { x0: 0.0, y0: 50.0, x1: 200.0, y1: 50.0 });
        let stops = [ColorStop::new(Argb(0xFFFF_0000), 0.0), ColorStop::new(Argb(0xFF00_00FF), 1.0)];
        let mut warned = false;
        let u = GradientUniform::pack(&g, &stops, SurfaceSize::new(200.0, 100.0), &mut warned);

        assert_eq!(u.kind, 0);
        assert_eq!(u.stop_count, 2);
        assert_eq!(u.geometry, [0.0, 50.0, 200.0, 50.0]);
        assert_eq!(u.colors[0], [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(u.colors[1], [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(u.offsets[0], [0.0, 1.0, 0.0, 0.0]);
        assert!(!warned);
        assert_eq!(u.as_bytes().len(), 192);
    }

    #[test]
    fn truncation_keeps_last_stop_and_warns_once() {
        let g = ResolvedGeometry::Radial(RadialGeometry { cx: 5.0, cy: 5.0, r: 5.0 });
        let stops: Vec<ColorStop> =
            (0..12).map(|i| ColorStop::new(Argb::WHITE, i as f64 / 11.0)).collect();
        let mut warned = false;

        let u = GradientUniform::pack(&g, &stops, SurfaceSize::new(10.0, 10.0), &mut warned);
        assert!(warned);
        assert_eq!(u.kind, 1);
        assert_eq!(u.stop_count, MAX_UNIFORM_STOPS as u32);
        assert_eq!(u.offsets[1][3], 1.0);

        // Second pack with the flag already set stays quiet and identical.
        let again = GradientUniform::pack(&g, &stops, SurfaceSize::new(10.0, 10.0), &mut warned);
        assert_eq!(again.as_bytes(), u.as_bytes());
    }
}
