//! Color palettes for indexed pixel formats.
//!
//! [`Palette`] is an owned, pure-Rust palette with the same update rules as
//! the native one. [`NativePalette`] is an opaque handle to a palette
//! allocated by the native library, for handing to native surfaces.
//!
//! # Example
//!
//! ```
//! use lienzo::color::Color;
//! use lienzo::palette::Palette;
//!
//! let mut palette = Palette::new(4)?;
//! palette.set_colors(1, &[Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)])?;
//! assert_eq!(palette.nearest(Color::rgb(250, 10, 0)), 1);
//! # Ok::<(), lienzo::Error>(())
//! ```
//!
//! # Handle Lifetime
//!
//! A `NativePalette` owns exactly one native allocation. It is created by
//! [`NativePalette::upload`] and released exactly once when dropped.
//!
//! # Falsification Claims
//!
//! - F041: New palettes are opaque white
//! - F042: Writes past the end are clamped, not rejected
//! - F043: Version changes on every write and never returns to 0
//! - F044: Native palettes report NotAvailable without the native library

use crate::color::Color;
use crate::error::{Error, Result};
use crate::ffi::sdl::PaletteHandle;
use tracing::{debug, instrument, warn};

/// An owned color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    version: u32,
}

impl Palette {
    /// Create a palette of `ncolors` opaque white entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `ncolors` is zero.
    pub fn new(ncolors: usize) -> Result<Self> {
        if ncolors == 0 {
            return Err(Error::invalid_input("palette needs at least one color"));
        }
        Ok(Self {
            colors: vec![Color::WHITE; ncolors],
            version: 1,
        })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes hold at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All entries.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Entry at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Change counter, bumped on every write. Never 0.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Overwrite entries starting at `first`.
    ///
    /// Colors that would land past the end are dropped. Returns the number
    /// of entries written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `first` is past the end.
    pub fn set_colors(&mut self, first: usize, colors: &[Color]) -> Result<usize> {
        if first > self.colors.len() {
            return Err(Error::invalid_input(format!(
                "first color {first} out of range for palette of {}",
                self.colors.len()
            )));
        }

        let count = colors.len().min(self.colors.len() - first);
        if count < colors.len() {
            warn!(
                requested = colors.len(),
                written = count,
                "palette write clamped"
            );
        }
        self.colors[first..first + count].copy_from_slice(&colors[..count]);

        self.version = self.version.wrapping_add(1);
        if self.version == 0 {
            self.version = 1;
        }
        Ok(count)
    }

    /// Index of the closest entry by squared RGBA distance.
    ///
    /// The first exact match wins. Indices past 255 wrap, like the 8-bit
    /// native lookup.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn nearest(&self, color: Color) -> u8 {
        let mut best = 0;
        let mut smallest = u32::MAX;
        for (i, entry) in self.colors.iter().enumerate() {
            let distance = entry.distance_squared(color);
            if distance < smallest {
                best = i;
                if distance == 0 {
                    break;
                }
                smallest = distance;
            }
        }
        best as u8
    }
}

/// A palette owned by the native library.
///
/// # Thread Safety
///
/// This type is `!Send` and `!Sync`; native palettes are not synchronised.
pub struct NativePalette {
    handle: PaletteHandle,
}

impl NativePalette {
    /// Allocate a native palette holding a copy of `palette`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAvailable`] when built without the `native`
    /// feature, or [`Error::Native`] if the native allocation fails.
    #[instrument(level = "debug", skip(palette), fields(ncolors = palette.len()))]
    pub fn upload(palette: &Palette) -> Result<Self> {
        let mut handle = PaletteHandle::create(palette.len())?;
        handle.set_colors(0, palette.colors())?;
        debug!("native palette uploaded");
        Ok(Self { handle })
    }

    /// Overwrite native entries starting at `first`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `first` is past the end, or
    /// [`Error::Native`] if the native call fails.
    pub fn update(&mut self, first: usize, colors: &[Color]) -> Result<()> {
        if first > self.len() {
            return Err(Error::invalid_input(format!(
                "first color {first} out of range for palette of {}",
                self.len()
            )));
        }
        self.handle.set_colors(first, colors)
    }

    /// Number of native entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handle.len()
    }

    /// Always false; native palettes hold at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether the native library is linked in.
    #[must_use]
    pub const fn is_available() -> bool {
        crate::ffi::sdl::is_linked()
    }
}

impl std::fmt::Debug for NativePalette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativePalette")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    // F041: New palettes are opaque white
    #[test]
    fn test_new_palette_is_white() {
        let palette = Palette::new(16).unwrap();
        assert_eq!(palette.len(), 16);
        assert!(!palette.is_empty());
        assert!(palette.colors().iter().all(|&c| c == Color::WHITE));
        assert_eq!(palette.version(), 1);
    }

    #[test]
    fn test_new_rejects_zero() {
        let err = Palette::new(0).unwrap_err();
        assert!(err.to_string().contains("at least one color"));
    }

    #[test]
    fn test_set_colors() {
        let mut palette = Palette::new(4).unwrap();
        let red = Color::rgb(255, 0, 0);
        let written = palette.set_colors(2, &[red]).unwrap();
        assert_eq!(written, 1);
        assert_eq!(palette.get(2), Some(red));
        assert_eq!(palette.get(1), Some(Color::WHITE));
        assert_eq!(palette.version(), 2);
    }

    // F042: Writes past the end are clamped, not rejected
    #[traced_test]
    #[test]
    fn test_set_colors_clamps() {
        let mut palette = Palette::new(3).unwrap();
        let colors = [Color::BLACK; 5];
        assert_eq!(palette.set_colors(1, &colors).unwrap(), 2);
        assert_eq!(palette.get(0), Some(Color::WHITE));
        assert_eq!(palette.get(2), Some(Color::BLACK));
        assert!(logs_contain("palette write clamped"));

        // Starting exactly at the end writes nothing but still succeeds
        assert_eq!(palette.set_colors(3, &colors).unwrap(), 0);
    }

    #[test]
    fn test_set_colors_rejects_first_past_end() {
        let mut palette = Palette::new(3).unwrap();
        let err = palette.set_colors(4, &[Color::BLACK]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
        assert_eq!(palette.version(), 1);
    }

    // F043: Version changes on every write and never returns to 0
    #[test]
    fn test_version_skips_zero() {
        let mut palette = Palette::new(1).unwrap();
        palette.version = u32::MAX;
        palette.set_colors(0, &[Color::BLACK]).unwrap();
        assert_eq!(palette.version(), 1);
    }

    #[test]
    fn test_nearest() {
        let mut palette = Palette::new(4).unwrap();
        palette
            .set_colors(
                0,
                &[
                    Color::BLACK,
                    Color::rgb(255, 0, 0),
                    Color::rgb(0, 255, 0),
                    Color::rgb(0, 0, 255),
                ],
            )
            .unwrap();
        assert_eq!(palette.nearest(Color::rgb(10, 10, 10)), 0);
        assert_eq!(palette.nearest(Color::rgb(200, 30, 30)), 1);
        assert_eq!(palette.nearest(Color::rgb(0, 0, 255)), 3);
    }

    #[test]
    fn test_nearest_prefers_first_of_ties() {
        let palette = Palette::new(3).unwrap();
        assert_eq!(palette.nearest(Color::WHITE), 0);
        assert_eq!(palette.nearest(Color::BLACK), 0);
    }

    // F044: Native palettes report NotAvailable without the native library
    #[cfg(not(feature = "native"))]
    #[test]
    fn test_native_palette_unavailable() {
        use crate::error::Subsystem;

        assert!(!NativePalette::is_available());
        let palette = Palette::new(2).unwrap();
        let err = NativePalette::upload(&palette).unwrap_err();
        assert_eq!(err, Error::not_available(Subsystem::Video));
    }
}
