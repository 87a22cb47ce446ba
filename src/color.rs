//! Color value types.
//!
//! [`Color`] and [`FColor`] share the memory layout of the native
//! `SDL_Color` and `SDL_FColor`, so slices of them can be passed straight to
//! native palette and vertex APIs.

/// Fully opaque 8-bit alpha.
pub const ALPHA_OPAQUE: u8 = 255;

/// Fully opaque float alpha.
pub const ALPHA_OPAQUE_FLOAT: f32 = 1.0;

/// Fully transparent 8-bit alpha.
pub const ALPHA_TRANSPARENT: u8 = 0;

/// Fully transparent float alpha.
pub const ALPHA_TRANSPARENT_FLOAT: f32 = 0.0;

/// An 8-bit per channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Opaque white, the initial value of every palette entry.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create a color from four channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, ALPHA_OPAQUE)
    }

    /// Squared RGBA distance to another color.
    #[must_use]
    pub const fn distance_squared(self, other: Self) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        let da = self.a.abs_diff(other.a) as u32;
        dr * dr + dg * dg + db * db + da * da
    }
}

/// A float RGBA color, nominally in `0.0..=1.0` (HDR content may exceed 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct FColor {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl FColor {
    /// Create a color from four channels.
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for FColor {
    fn from(c: Color) -> Self {
        Self {
            r: f32::from(c.r) / 255.0,
            g: f32::from(c.g) / 255.0,
            b: f32::from(c.b) / 255.0,
            a: f32::from(c.a) / 255.0,
        }
    }
}

impl From<FColor> for Color {
    /// Clamps each channel to `0.0..=1.0` and rounds to the nearest step.
    fn from(c: FColor) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        fn quantize(v: f32) -> u8 {
            // NaN clamps to NaN, which `as` maps to 0
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self {
            r: quantize(c.r),
            g: quantize(c.g),
            b: quantize(c.b),
            a: quantize(c.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_native() {
        assert_eq!(std::mem::size_of::<Color>(), 4);
        assert_eq!(std::mem::size_of::<FColor>(), 16);
        assert_eq!(std::mem::align_of::<FColor>(), 4);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Color::rgb(1, 2, 3), Color::rgba(1, 2, 3, ALPHA_OPAQUE));
        assert_eq!(Color::WHITE, Color::rgba(255, 255, 255, 255));
        assert_eq!(Color::default(), Color::rgba(0, 0, 0, ALPHA_TRANSPARENT));
    }

    #[test]
    fn test_distance_squared() {
        let a = Color::rgba(10, 20, 30, 40);
        assert_eq!(a.distance_squared(a), 0);
        assert_eq!(a.distance_squared(Color::rgba(13, 16, 30, 40)), 9 + 16);
        assert_eq!(Color::BLACK.distance_squared(Color::WHITE), 3 * 255 * 255);
    }

    #[test]
    fn test_color_to_fcolor() {
        let f = FColor::from(Color::rgba(255, 0, 51, 255));
        assert!((f.r - 1.0).abs() < f32::EPSILON);
        assert!(f.g.abs() < f32::EPSILON);
        assert!((f.b - 0.2).abs() < 1e-6);
        assert!((f.a - ALPHA_OPAQUE_FLOAT).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fcolor_to_color_clamps() {
        let c = Color::from(FColor::rgba(1.5, -0.25, 0.5, f32::NAN));
        assert_eq!(c, Color::rgba(255, 0, 128, 0));
    }

    #[test]
    fn test_color_round_trip_through_float() {
        for v in [0u8, 1, 127, 128, 200, 255] {
            let c = Color::rgba(v, v, v, v);
            assert_eq!(Color::from(FColor::from(c)), c);
        }
    }
}
