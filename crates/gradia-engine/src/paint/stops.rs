//! Color-stop resolution.
//!
//! Maps raw `colors` plus optional `positions` to the stop list handed to a
//! rasterizer. Pure and total: mismatched lengths truncate, missing positions
//! are synthesized, and an empty color list becomes a [`StopSource::NoColors`]
//! sentinel that the host replaces with its own fallback.

use super::{Argb, ColorStop};

/// Where the stop locations came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StopSource {
    /// Zipped from caller-supplied positions.
    Explicit,
    /// Synthesized as `i / max(1, n - 1)`.
    EvenlySpaced,
    /// No colors were supplied. Stops are empty until a fallback is applied.
    NoColors,
}

/// Resolved stop list plus its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStops {
    stops: Vec<ColorStop>,
    source: StopSource,
}

impl ColorStops {
    /// The "no colors supplied" sentinel.
    pub fn no_colors() -> Self {
        Self { stops: Vec::new(), source: StopSource::NoColors }
    }

    #[inline]
    pub fn source(&self) -> StopSource {
        self.source
    }

    #[inline]
    pub fn is_no_colors(&self) -> bool {
        self.source == StopSource::NoColors
    }

    #[inline]
    pub fn as_slice(&self) -> &[ColorStop] {
        &self.stops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Replaces the sentinel with a two-stop `[fallback[0] @ 0, fallback[1] @ 1]` list.
    ///
    /// No-op for any other source. The source stays `NoColors` so the host can
    /// still tell a fallback apart from real input.
    pub fn or_fallback(mut self, fallback: [Argb; 2]) -> Self {
        if self.source == StopSource::NoColors && self.stops.is_empty() {
            self.stops = vec![ColorStop::new(fallback[0], 0.0), ColorStop::new(fallback[1], 1.0)];
        }
        self
    }
}

/// Resolves stops from colors and optional explicit positions.
///
/// - Non-empty `positions`: zipped positionally, truncated to the shorter input.
/// - Absent or empty `positions`: evenly spaced over `[0, 1]`.
/// - Nothing to emit: the [`StopSource::NoColors`] sentinel.
///
/// Locations are not sorted or clamped.
pub fn resolve_stops(colors: &[Argb], positions: Option<&[f64]>) -> ColorStops {
    if colors.is_empty() {
        return ColorStops::no_colors();
    }

    match positions {
        Some(positions) if !positions.is_empty() => {
            let stops: Vec<ColorStop> = colors
                .iter()
                .zip(positions)
                .map(|(&c, &p)| ColorStop::new(c, p))
                .collect();
            if stops.len() != colors.len() {
                log::trace!(
                    "stop count mismatch: {} colors, {} positions; using {}",
                    colors.len(),
                    positions.len(),
                    stops.len()
                );
            }
            ColorStops { stops, source: StopSource::Explicit }
        }
        _ => ColorStops { stops: evenly_spaced(colors), source: StopSource::EvenlySpaced },
    }
}

fn evenly_spaced(colors: &[Argb]) -> Vec<ColorStop> {
    let step = 1.0 / (colors.len().saturating_sub(1).max(1)) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, &c)| ColorStop::new(c, i as f64 * step))
        .collect()
}
