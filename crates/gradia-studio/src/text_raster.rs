//! Terminal stand-in for a native gradient layer.
//!
//! Rebuilds pack the resolved output into a [`GradientUniform`], exactly what
//! a GPU host would upload; draws shade one character per cell from it.

use gradia_engine::paint::{GradientUniform, MAX_UNIFORM_STOPS};
use gradia_engine::{ColorStop, Rasterizer, ResolvedGeometry, SurfaceSize};

const RAMP: &[u8] = b" .:-=+*#%@";

#[derive(Debug, Default)]
pub struct TextRasterizer {
    uniform: Option<GradientUniform>,
    warned_truncated: bool,
    pub rebuilds: u64,
    pub draws: u64,
}

impl TextRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the current uniform as rows of text, one cell per pixel.
    pub fn render(&self) -> Vec<String> {
        let Some(u) = &self.uniform else { return Vec::new() };
        let (w, h) = (u.size[0] as usize, u.size[1] as usize);

        (0..h)
            .map(|y| {
                (0..w)
                    .map(|x| {
                        let t = gradient_t(u, x as f32 + 0.5, y as f32 + 0.5);
                        shade(luminance(sample(u, t)))
                    })
                    .collect()
            })
            .collect()
    }
}

impl Rasterizer for TextRasterizer {
    fn rebuild(&mut self, geometry: &ResolvedGeometry, stops: &[ColorStop], size: SurfaceSize) {
        self.uniform = Some(GradientUniform::pack(geometry, stops, size, &mut self.warned_truncated));
        self.rebuilds += 1;
    }

    fn draw(&mut self, _size: SurfaceSize) {
        self.draws += 1;
    }
}

/// Gradient parameter for a pixel, before clamping.
fn gradient_t(u: &GradientUniform, px: f32, py: f32) -> f32 {
    let [a, b, c, d] = u.geometry;
    match u.kind {
        0 => {
            let (dx, dy) = (c - a, d - b);
            let len2 = dx * dx + dy * dy;
            if len2 == 0.0 { 0.0 } else { ((px - a) * dx + (py - b) * dy) / len2 }
        }
        1 => {
            if c <= 0.0 { 1.0 } else { ((px - a).powi(2) + (py - b).powi(2)).sqrt() / c }
        }
        _ => {
            let span = d - c;
            if span == 0.0 {
                return 0.0;
            }
            let angle = (py - b).atan2(px - a).rem_euclid(std::f32::consts::TAU);
            (angle - c).rem_euclid(std::f32::consts::TAU) / span
        }
    }
}

/// Premultiplied color at `t`, clamping to the end stops.
fn sample(u: &GradientUniform, t: f32) -> [f32; 4] {
    let n = (u.stop_count as usize).min(MAX_UNIFORM_STOPS);
    if n == 0 {
        return [0.0; 4];
    }
    let offset = |i: usize| u.offsets[i / 4][i % 4];

    if t <= offset(0) {
        return u.colors[0];
    }
    for i in 1..n {
        let (o0, o1) = (offset(i - 1), offset(i));
        if t <= o1 {
            let f = if o1 > o0 { (t - o0) / (o1 - o0) } else { 1.0 };
            let (c0, c1) = (u.colors[i - 1], u.colors[i]);
            return std::array::from_fn(|k| c0[k] + (c1[k] - c0[k]) * f);
        }
    }
    u.colors[n - 1]
}

fn luminance(c: [f32; 4]) -> f32 {
    0.2126 * c[0] + 0.7152 * c[1] + 0.0722 * c[2]
}

fn shade(l: f32) -> char {
    let i = (l.clamp(0.0, 1.0) * (RAMP.len() - 1) as f32).round() as usize;
    RAMP[i] as char
}
