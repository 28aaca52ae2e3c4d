use core::fmt;

/// Packed 32-bit color as delivered by the host: `0xAARRGGBB`, straight alpha.
///
/// String decoding (`"#ff0000"`, named colors, platform color objects) happens
/// on the host side before values reach the engine.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Premultiplied float color for GPU rasterizers.
    #[inline]
    pub fn to_premul(self) -> Color {
        Color::from_srgb_u8(self.r(), self.g(), self.b(), self.a())
    }
}

impl From<u32> for Argb {
    #[inline]
    fn from(v: u32) -> Self {
        Argb(v)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(c: Argb) -> Self {
        c.0
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb(#{:08X})", self.0)
    }
}

/// Premultiplied RGBA color in `[0, 1]`.
///
/// Invariant: `r`, `g`, `b` are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    /// Creates a premultiplied color from straight sRGB bytes.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Argb> for Color {
    #[inline]
    fn from(c: Argb) -> Self {
        c.to_premul()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_split() {
        let c = Argb(0x80FF_4020);
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (0x80, 0xFF, 0x40, 0x20));
        assert_eq!(Argb::new(0x80, 0xFF, 0x40, 0x20), c);
    }

    #[test]
    fn opaque_red_premul() {
        let c = Argb(0xFFFF_0000).to_premul();
        assert_eq!(c, Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 });
    }

    #[test]
    fn half_alpha_is_premultiplied() {
        let c = Argb::new(0x80, 0xFF, 0xFF, 0xFF).to_premul();
        assert!((c.r - c.a).abs() < 1e-6);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn premul_clamps_and_packs_rgba() {
        let c = Argb::new(0x00, 0xFF, 0x80, 0x00).to_premul();
        assert_eq!(c.to_array(), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(Color::from_straight(2.0, -1.0, 0.5, 1.0).to_array(), [1.0, 0.0, 0.5, 1.0]);
    }
}
