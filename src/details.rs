//! Per-channel layout of a pixel format, and pixel <-> color mapping.
//!
//! [`PixelFormatDetails`] expands a [`PixelFormat`] into its channel masks,
//! bit counts and shifts once, so pixels can be packed and unpacked without
//! decoding the format again.
//!
//! # Example
//!
//! ```
//! use lienzo::color::Color;
//! use lienzo::details::PixelFormatDetails;
//! use lienzo::pixel_format::PixelFormat;
//!
//! let details = PixelFormatDetails::new(PixelFormat::RGB565)?;
//! let pixel = details.map_rgb(None, 255, 0, 0)?;
//! assert_eq!(pixel, 0xF800);
//! assert_eq!(details.get_rgb(pixel, None), (255, 0, 0));
//! # Ok::<(), lienzo::Error>(())
//! ```
//!
//! # Falsification Claims
//!
//! - F031: Shifts and bit counts reproduce the masks
//! - F032: Mapping then unmapping a full-intensity channel is lossless
//! - F033: Formats without alpha decode as opaque

use crate::color::{Color, ALPHA_OPAQUE};
use crate::error::{Error, Result};
use crate::palette::Palette;
use crate::pixel_format::PixelFormat;
use tracing::{instrument, trace, warn};

/// Where one channel lives inside a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Channel {
    /// Bits belonging to the channel.
    pub mask: u32,
    /// Width of the channel in bits.
    pub bits: u8,
    /// Position of the lowest channel bit.
    pub shift: u8,
}

impl Channel {
    #[allow(clippy::cast_possible_truncation)]
    const fn from_mask(mask: u32) -> Self {
        if mask == 0 {
            return Self {
                mask,
                bits: 0,
                shift: 0,
            };
        }
        let shift = mask.trailing_zeros();
        Self {
            mask,
            bits: (mask >> shift).trailing_ones() as u8,
            shift: shift as u8,
        }
    }

    /// Scale an 8-bit value to the channel width and move it into place.
    fn pack(self, value: u8) -> u32 {
        let v = u32::from(value);
        let scaled = match self.bits {
            0 => 0,
            bits @ 1..=8 => v >> (8 - bits),
            // Replicate the high bits into the extra low bits
            bits => (v << (bits - 8)) | (v >> (16 - u32::from(bits).min(16))),
        };
        (scaled << self.shift) & self.mask
    }

    /// Extract the channel from a pixel and scale it to 8 bits.
    #[allow(clippy::cast_possible_truncation)]
    fn unpack(self, pixel: u32) -> u8 {
        let v = (pixel & self.mask) >> self.shift;
        match self.bits {
            0 => 0,
            bits @ 1..=7 => expand_to_byte(v, bits),
            bits => (v >> (bits - 8)) as u8,
        }
    }
}

/// Widen a `bits`-wide value to 8 bits by repeating its bit pattern, so the
/// maximum maps to 255.
#[allow(clippy::cast_possible_truncation)]
fn expand_to_byte(v: u32, bits: u8) -> u8 {
    let bits = i32::from(bits);
    let mut out = 0u32;
    let mut shift = 8 - bits;
    while shift > -bits {
        out |= if shift >= 0 { v << shift } else { v >> -shift };
        shift -= bits;
    }
    (out & 0xFF) as u8
}

/// Channel layout of a pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormatDetails {
    /// The format these details describe.
    pub format: PixelFormat,
    /// Bits per pixel as reported by the mask query.
    pub bits_per_pixel: u8,
    /// `(bits_per_pixel + 7) / 8`.
    pub bytes_per_pixel: u8,
    /// Red channel.
    pub r: Channel,
    /// Green channel.
    pub g: Channel,
    /// Blue channel.
    pub b: Channel,
    /// Alpha channel.
    pub a: Channel,
}

impl PixelFormatDetails {
    /// Compute the channel layout of `format`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the format has no mask table or
    /// an impossible bit depth.
    #[instrument(level = "debug")]
    pub fn new(format: PixelFormat) -> Result<Self> {
        let masks = format.masks().map_err(|err| {
            warn!(%err, "pixel format details unavailable");
            err
        })?;
        let bits_per_pixel =
            u8::try_from(masks.bpp).map_err(|_| Error::unsupported_format(format.raw()))?;
        let bytes_per_pixel = bits_per_pixel.div_ceil(8);

        let details = Self {
            format,
            bits_per_pixel,
            bytes_per_pixel,
            r: Channel::from_mask(masks.r),
            g: Channel::from_mask(masks.g),
            b: Channel::from_mask(masks.b),
            a: Channel::from_mask(masks.a),
        };
        trace!(?details, "pixel format details");
        Ok(details)
    }

    /// Map an opaque color to a pixel value.
    ///
    /// # Errors
    ///
    /// See [`PixelFormatDetails::map_rgba`].
    pub fn map_rgb(&self, palette: Option<&Palette>, r: u8, g: u8, b: u8) -> Result<u32> {
        self.map_rgba(palette, r, g, b, ALPHA_OPAQUE)
    }

    /// Map a color to a pixel value.
    ///
    /// Indexed formats pick the nearest palette entry. Other formats truncate
    /// each channel to its width; alpha is dropped when the format has none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an indexed format without a
    /// palette.
    pub fn map_rgba(
        &self,
        palette: Option<&Palette>,
        r: u8,
        g: u8,
        b: u8,
        a: u8,
    ) -> Result<u32> {
        if self.format.is_indexed() {
            let palette = palette
                .ok_or_else(|| Error::invalid_input("indexed format requires a palette"))?;
            return Ok(u32::from(palette.nearest(Color::rgba(r, g, b, a))));
        }
        Ok(self.r.pack(r) | self.g.pack(g) | self.b.pack(b) | self.a.pack(a))
    }

    /// [`PixelFormatDetails::map_rgba`] taking a [`Color`].
    ///
    /// # Errors
    ///
    /// See [`PixelFormatDetails::map_rgba`].
    pub fn map_color(&self, palette: Option<&Palette>, color: Color) -> Result<u32> {
        self.map_rgba(palette, color.r, color.g, color.b, color.a)
    }

    /// Decode the color channels of a pixel, ignoring alpha.
    #[must_use]
    pub fn get_rgb(&self, pixel: u32, palette: Option<&Palette>) -> (u8, u8, u8) {
        let c = self.get_rgba(pixel, palette);
        (c.r, c.g, c.b)
    }

    /// Decode a pixel to a color.
    ///
    /// Channels are widened to 8 bits so that a full channel decodes to 255.
    /// Formats without alpha decode as opaque. Indexed pixels outside the
    /// palette, or without one, decode to all zeros.
    #[must_use]
    pub fn get_rgba(&self, pixel: u32, palette: Option<&Palette>) -> Color {
        if self.format.is_indexed() {
            return palette
                .and_then(|p| usize::try_from(pixel).ok().and_then(|i| p.get(i)))
                .unwrap_or_default();
        }
        let a = if self.a.mask == 0 {
            ALPHA_OPAQUE
        } else {
            self.a.unpack(pixel)
        };
        Color::rgba(
            self.r.unpack(pixel),
            self.g.unpack(pixel),
            self.b.unpack(pixel),
            a,
        )
    }
}

impl TryFrom<PixelFormat> for PixelFormatDetails {
    type Error = Error;

    fn try_from(format: PixelFormat) -> Result<Self> {
        Self::new(format)
    }
}
