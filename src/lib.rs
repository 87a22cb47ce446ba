//! Lienzo: Safe Rust Interfaces for SDL3 Pixel Data
//!
//! Lienzo provides the value-level half of the SDL3 video API in pure Rust:
//! pixel format and colorspace codecs, color and palette types, and
//! rectangle geometry. Every type is bit-for-bit compatible with its native
//! counterpart, so values can cross the FFI boundary unchanged.
//!
//! # Design Philosophy
//!
//! - **ABI fidelity**: format and colorspace values are the native `u32`s
//! - **Popperian Falsification**: each module lists claims its tests try to refute
//! - **Zero unsafe in public API**: All FFI quarantined in internal modules
//!
//! # Modules
//!
//! | Module | Contents | Needs native library |
//! |--------|----------|----------------------|
//! | [`pixel_format`] | Pixel format codec, named formats, masks | No |
//! | [`details`] | Channel layout, pixel <-> color mapping | No |
//! | [`colorspace`] | Colorspace codec, named colorspaces | No |
//! | [`color`] | `Color` / `FColor` | No |
//! | [`palette`] | Owned palettes | No |
//! | [`palette::NativePalette`] | Native palette handles | Yes (`native`) |
//! | [`rect`] | Integer and float rectangles, line clipping | No |
//!
//! # Quick Start
//!
//! ```
//! use lienzo::pixel_format::PixelFormat;
//! use lienzo::rect::{Point, Rect};
//!
//! let format = PixelFormat::ARGB8888;
//! assert_eq!(format.bits_per_pixel(), 32);
//! assert_eq!(format.name(), "SDL_PIXELFORMAT_ARGB8888");
//!
//! let screen = Rect::new(0, 0, 640, 480);
//! let clipped = screen.line_intersection(Point::new(-100, 240), Point::new(800, 240));
//! assert_eq!(clipped, Some((Point::new(0, 240), Point::new(639, 240))));
//! ```
//!
//! # Feature Flags
//!
//! - `native` - Link `SDL3` and enable native palette handles
//! - `full` - Enable all features
//!
//! # Safety Guarantees
//!
//! This crate uses `#![deny(unsafe_code)]` at the library level. All FFI
//! code is quarantined in the internal `ffi` module, which is not exported.
//!
//! # Error Handling
//!
//! All operations that can fail return [`Result<T, Error>`]. Codec and
//! geometry operations never fail: unknown values decode to `Unknown`
//! buckets and "no intersection" is `None`.
//!
//! # Graceful Degradation
//!
//! Without the `native` feature, native handles fail with
//! [`Error::NotAvailable`] instead of failing to link.
//!
//! ```
//! use lienzo::palette::{NativePalette, Palette};
//!
//! let palette = Palette::new(16)?;
//! let native = NativePalette::upload(&palette).ok(); // None without `native`
//! assert_eq!(native.is_some(), lienzo::is_native_available());
//! # Ok::<(), lienzo::Error>(())
//! ```

// SAFETY: This crate denies unsafe code at the library level.
// All unsafe FFI code is quarantined in src/ffi/, which is not exported.
// We use deny (not forbid) so it can be overridden in the ffi module.
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)] // Allow FourCC, YUY2, etc. without backticks

pub mod color;
pub mod colorspace;
pub mod details;
pub mod error;
pub mod palette;
pub mod pixel_format;
pub mod rect;

// FFI module is internal only - not exported
mod ffi;

// Re-export main types for convenience
pub use color::{Color, FColor};
pub use colorspace::Colorspace;
pub use details::PixelFormatDetails;
pub use error::{Error, Result, Subsystem};
pub use palette::{NativePalette, Palette};
pub use pixel_format::PixelFormat;
pub use rect::{FPoint, FRect, Point, Rect};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check if the native library is linked into this build.
#[must_use]
pub const fn is_native_available() -> bool {
    ffi::sdl::is_linked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_native_availability_matches_feature() {
        assert_eq!(is_native_available(), cfg!(feature = "native"));
        assert_eq!(NativePalette::is_available(), is_native_available());
    }

    #[test]
    fn test_error_reexport() {
        let err = Error::not_available(Subsystem::Video);
        assert!(err.is_not_available());
    }

    #[test]
    fn test_geometry_reexport() {
        let r = Rect::new(0, 0, 2, 2);
        assert!(r.contains_point(Point::new(1, 1)));
        assert_eq!(r.to_frect(), FRect::new(0.0, 0.0, 2.0, 2.0));
        assert!(FRect::new(0.0, 0.0, 1.0, 1.0).contains_point(FPoint::new(1.0, 1.0)));
    }

    #[test]
    fn test_codec_reexport() {
        assert_eq!(PixelFormat::RGBA8888.to_string(), "SDL_PIXELFORMAT_RGBA8888");
        assert_eq!(Colorspace::RGB_DEFAULT, Colorspace::SRGB);
        assert_eq!(Color::from(FColor::rgba(1.0, 1.0, 1.0, 1.0)), Color::WHITE);
    }
}
