//! Pixel format bit-field codec.
//!
//! A pixel format is a 32-bit value. Non-FourCC formats pack five fields
//! under a flag nibble of `1`:
//!
//! ```text
//!  31..28  27..24  23..20  19..16  15..8            7..0
//!  flag=1  type    order   layout  bits per pixel   bytes per pixel
//! ```
//!
//! FourCC formats (YUV layouts and friends) are instead four raw ASCII bytes,
//! first character in the lowest byte. They are told apart by the flag nibble
//! being anything other than `1`.
//!
//! Every value is bit-for-bit identical to the native `SDL_PixelFormat`, so a
//! [`PixelFormat`] can be handed across the FFI boundary unchanged.
//!
//! # Example
//!
//! ```
//! use lienzo::pixel_format::{PackedLayout, PackedOrder, PixelFormat, PixelType};
//!
//! let format = PixelFormat::define(
//!     PixelType::Packed32,
//!     PackedOrder::Argb as u8,
//!     PackedLayout::L8888,
//!     32,
//!     4,
//! );
//! assert_eq!(format, PixelFormat::ARGB8888);
//! assert!(format.has_alpha());
//! assert_eq!(format.bytes_per_pixel(), 4);
//! ```
//!
//! # Falsification Claims
//!
//! - F001: Encoding matches the native macro for every named format
//! - F002: Decoding is the exact inverse of encoding
//! - F003: No encoded format is mistaken for FourCC
//! - F004: Endianness aliases follow the host byte order

use crate::error::{Error, Result};
use std::fmt;

/// Flag nibble carried by every field-packed (non-FourCC) format.
pub const PIXEL_FLAG: u32 = 1;

/// Pack four characters into a FourCC code, first character lowest.
#[must_use]
pub const fn fourcc(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) | ((b as u32) << 8) | ((c as u32) << 16) | ((d as u32) << 24)
}

/// Storage class of a pixel format (bits 24..27).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PixelType {
    /// Unknown or unused.
    #[default]
    Unknown = 0,
    /// 1 bit palette index.
    Index1 = 1,
    /// 4 bit palette index.
    Index4 = 2,
    /// 8 bit palette index.
    Index8 = 3,
    /// Channels packed in an 8 bit word.
    Packed8 = 4,
    /// Channels packed in a 16 bit word.
    Packed16 = 5,
    /// Channels packed in a 32 bit word.
    Packed32 = 6,
    /// Array of `u8` channels.
    ArrayU8 = 7,
    /// Array of `u16` channels.
    ArrayU16 = 8,
    /// Array of `u32` channels.
    ArrayU32 = 9,
    /// Array of half-float channels.
    ArrayF16 = 10,
    /// Array of `f32` channels.
    ArrayF32 = 11,
    /// 2 bit palette index (appended after the array types).
    Index2 = 12,
}

impl PixelType {
    /// Decode a type nibble. Values without a variant map to `Unknown`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Index1,
            2 => Self::Index4,
            3 => Self::Index8,
            4 => Self::Packed8,
            5 => Self::Packed16,
            6 => Self::Packed32,
            7 => Self::ArrayU8,
            8 => Self::ArrayU16,
            9 => Self::ArrayU32,
            10 => Self::ArrayF16,
            11 => Self::ArrayF32,
            12 => Self::Index2,
            _ => Self::Unknown,
        }
    }
}

/// Bit order of indexed (bitmap) formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BitmapOrder {
    /// No order.
    #[default]
    None = 0,
    /// Least significant bit first.
    Order4321 = 1,
    /// Most significant bit first.
    Order1234 = 2,
}

impl BitmapOrder {
    /// Decode an order nibble. Values without a variant map to `None`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Order4321,
            2 => Self::Order1234,
            _ => Self::None,
        }
    }
}

/// Channel order of packed formats, most significant channel first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PackedOrder {
    /// No order.
    #[default]
    None = 0,
    /// Unused, red, green, blue.
    Xrgb = 1,
    /// Red, green, blue, unused.
    Rgbx = 2,
    /// Alpha, red, green, blue.
    Argb = 3,
    /// Red, green, blue, alpha.
    Rgba = 4,
    /// Unused, blue, green, red.
    Xbgr = 5,
    /// Blue, green, red, unused.
    Bgrx = 6,
    /// Alpha, blue, green, red.
    Abgr = 7,
    /// Blue, green, red, alpha.
    Bgra = 8,
}

impl PackedOrder {
    /// Decode an order nibble. Values without a variant map to `None`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Xrgb,
            2 => Self::Rgbx,
            3 => Self::Argb,
            4 => Self::Rgba,
            5 => Self::Xbgr,
            6 => Self::Bgrx,
            7 => Self::Abgr,
            8 => Self::Bgra,
            _ => Self::None,
        }
    }

    /// True for the four orders that carry an alpha channel.
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Argb | Self::Rgba | Self::Abgr | Self::Bgra)
    }
}

/// Channel order of array formats, in memory order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ArrayOrder {
    /// No order.
    #[default]
    None = 0,
    /// Red, green, blue.
    Rgb = 1,
    /// Red, green, blue, alpha.
    Rgba = 2,
    /// Alpha, red, green, blue.
    Argb = 3,
    /// Blue, green, red.
    Bgr = 4,
    /// Blue, green, red, alpha.
    Bgra = 5,
    /// Alpha, blue, green, red.
    Abgr = 6,
}

impl ArrayOrder {
    /// Decode an order nibble. Values without a variant map to `None`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Rgb,
            2 => Self::Rgba,
            3 => Self::Argb,
            4 => Self::Bgr,
            5 => Self::Bgra,
            6 => Self::Abgr,
            _ => Self::None,
        }
    }

    /// True for the four orders that carry an alpha channel.
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Argb | Self::Rgba | Self::Abgr | Self::Bgra)
    }
}

/// Bit widths of the channels of a packed format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PackedLayout {
    /// No layout.
    #[default]
    None = 0,
    /// 3-3-2.
    L332 = 1,
    /// 4-4-4-4.
    L4444 = 2,
    /// 1-5-5-5.
    L1555 = 3,
    /// 5-5-5-1.
    L5551 = 4,
    /// 5-6-5.
    L565 = 5,
    /// 8-8-8-8.
    L8888 = 6,
    /// 2-10-10-10.
    L2101010 = 7,
    /// 10-10-10-2.
    L1010102 = 8,
}

impl PackedLayout {
    /// Decode a layout nibble. Values without a variant map to `None`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::L332,
            2 => Self::L4444,
            3 => Self::L1555,
            4 => Self::L5551,
            5 => Self::L565,
            6 => Self::L8888,
            7 => Self::L2101010,
            8 => Self::L1010102,
            _ => Self::None,
        }
    }
}

/// The five fields of a field-packed pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelFormatDescriptor {
    /// Storage class.
    pub pixel_type: PixelType,
    /// Raw 4-bit order; interpret with the order enum matching `pixel_type`.
    pub order: u8,
    /// Packed channel layout.
    pub layout: PackedLayout,
    /// Significant bits per pixel.
    pub bits_per_pixel: u8,
    /// Storage bytes per pixel.
    pub bytes_per_pixel: u8,
}

impl PixelFormatDescriptor {
    /// Encode the descriptor into a pixel format value.
    #[must_use]
    pub const fn encode(&self) -> PixelFormat {
        PixelFormat::define(
            self.pixel_type,
            self.order,
            self.layout,
            self.bits_per_pixel,
            self.bytes_per_pixel,
        )
    }
}

/// Red, green, blue and alpha channel masks of a pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelMasks {
    /// Bits per pixel as reported by the native mask query.
    pub bpp: u32,
    /// Red mask.
    pub r: u32,
    /// Green mask.
    pub g: u32,
    /// Blue mask.
    pub b: u32,
    /// Alpha mask.
    pub a: u32,
}

/// A 32-bit pixel format value, ABI-compatible with `SDL_PixelFormat`.
///
/// Any `u32` is accepted; accessors on out-of-range values fall into the
/// `Unknown`/`None` buckets of the field enums rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct PixelFormat(pub u32);

impl PixelFormat {
    /// Pack the five descriptor fields under the non-FourCC flag.
    ///
    /// `order` must fit in 4 bits.
    #[must_use]
    pub const fn define(
        pixel_type: PixelType,
        order: u8,
        layout: PackedLayout,
        bits: u8,
        bytes: u8,
    ) -> Self {
        Self(
            (PIXEL_FLAG << 28)
                | ((pixel_type as u32) << 24)
                | ((order as u32) << 20)
                | ((layout as u32) << 16)
                | ((bits as u32) << 8)
                | (bytes as u32),
        )
    }

    /// Build a FourCC format from four characters.
    #[must_use]
    pub const fn define_fourcc(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self(fourcc(a, b, c, d))
    }

    /// Wrap a raw value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw 32-bit value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Top nibble: `1` for field-packed formats.
    #[must_use]
    pub const fn flag(self) -> u32 {
        (self.0 >> 28) & 0x0F
    }

    /// Raw type nibble.
    #[must_use]
    pub const fn type_bits(self) -> u32 {
        (self.0 >> 24) & 0x0F
    }

    /// Raw order nibble.
    #[must_use]
    pub const fn order_bits(self) -> u32 {
        (self.0 >> 20) & 0x0F
    }

    /// Raw layout nibble.
    #[must_use]
    pub const fn layout_bits(self) -> u32 {
        (self.0 >> 16) & 0x0F
    }

    /// Decoded storage class.
    #[must_use]
    pub const fn pixel_type(self) -> PixelType {
        PixelType::from_raw(self.type_bits())
    }

    /// Decoded packed layout.
    #[must_use]
    pub const fn layout(self) -> PackedLayout {
        PackedLayout::from_raw(self.layout_bits())
    }

    /// Bitmap order, for indexed formats only.
    #[must_use]
    pub const fn bitmap_order(self) -> Option<BitmapOrder> {
        if self.is_indexed() {
            Some(BitmapOrder::from_raw(self.order_bits()))
        } else {
            None
        }
    }

    /// Packed channel order, for packed formats only.
    #[must_use]
    pub const fn packed_order(self) -> Option<PackedOrder> {
        if self.is_packed() {
            Some(PackedOrder::from_raw(self.order_bits()))
        } else {
            None
        }
    }

    /// Array channel order, for array formats only.
    #[must_use]
    pub const fn array_order(self) -> Option<ArrayOrder> {
        if self.is_array() {
            Some(ArrayOrder::from_raw(self.order_bits()))
        } else {
            None
        }
    }

    /// True for non-zero values whose flag nibble is not `1`.
    #[must_use]
    pub const fn is_fourcc(self) -> bool {
        self.0 != 0 && self.flag() != PIXEL_FLAG
    }

    /// Significant bits per pixel; 0 for FourCC formats.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn bits_per_pixel(self) -> u8 {
        if self.is_fourcc() {
            0
        } else {
            ((self.0 >> 8) & 0xFF) as u8
        }
    }

    /// Storage bytes per pixel.
    ///
    /// FourCC formats report 2 for the interleaved 16-bit layouts (YUY2,
    /// UYVY, YVYU, P010) and 1 for everything else.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn bytes_per_pixel(self) -> u8 {
        if self.is_fourcc() {
            match self {
                Self::YUY2 | Self::UYVY | Self::YVYU | Self::P010 => 2,
                _ => 1,
            }
        } else {
            (self.0 & 0xFF) as u8
        }
    }

    /// Palette-indexed formats (1, 2, 4 or 8 bit indices).
    #[must_use]
    pub const fn is_indexed(self) -> bool {
        !self.is_fourcc()
            && matches!(
                self.pixel_type(),
                PixelType::Index1 | PixelType::Index2 | PixelType::Index4 | PixelType::Index8
            )
    }

    /// Channels packed into an 8, 16 or 32 bit word.
    #[must_use]
    pub const fn is_packed(self) -> bool {
        !self.is_fourcc()
            && matches!(
                self.pixel_type(),
                PixelType::Packed8 | PixelType::Packed16 | PixelType::Packed32
            )
    }

    /// Channels stored as an array of scalars.
    #[must_use]
    pub const fn is_array(self) -> bool {
        !self.is_fourcc()
            && matches!(
                self.pixel_type(),
                PixelType::ArrayU8
                    | PixelType::ArrayU16
                    | PixelType::ArrayU32
                    | PixelType::ArrayF16
                    | PixelType::ArrayF32
            )
    }

    /// 32-bit packed with a 2-10-10-10 layout.
    #[must_use]
    pub const fn is_10bit(self) -> bool {
        !self.is_fourcc()
            && matches!(self.pixel_type(), PixelType::Packed32)
            && matches!(self.layout(), PackedLayout::L2101010)
    }

    /// Half-float or float array channels.
    #[must_use]
    pub const fn is_float(self) -> bool {
        !self.is_fourcc() && matches!(self.pixel_type(), PixelType::ArrayF16 | PixelType::ArrayF32)
    }

    /// Packed or array formats whose order includes an alpha channel.
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        (self.is_packed() && PackedOrder::from_raw(self.order_bits()).has_alpha())
            || (self.is_array() && ArrayOrder::from_raw(self.order_bits()).has_alpha())
    }

    /// Decompose into descriptor fields. `None` for FourCC formats.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn descriptor(self) -> Option<PixelFormatDescriptor> {
        if self.is_fourcc() {
            return None;
        }
        Some(PixelFormatDescriptor {
            pixel_type: self.pixel_type(),
            order: self.order_bits() as u8,
            layout: self.layout(),
            bits_per_pixel: self.bits_per_pixel(),
            bytes_per_pixel: self.bytes_per_pixel(),
        })
    }

    /// The four characters of a FourCC format. `None` otherwise.
    #[must_use]
    pub const fn fourcc_bytes(self) -> Option<[u8; 4]> {
        if self.is_fourcc() {
            Some(self.0.to_le_bytes())
        } else {
            None
        }
    }

    /// Channel masks of the format, as the native mask query reports them.
    ///
    /// Indexed, array (other than 24-bit RGB/BGR) and FourCC formats have no
    /// masks and report all-zero masks. Interleaved 4:2:2 FourCC formats
    /// still report a 32 bit depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for packed formats whose layout or
    /// order has no mask table.
    pub fn masks(self) -> Result<PixelMasks> {
        if self.is_fourcc() {
            // Interleaved YUV still declares a storage depth
            let bpp = match self {
                Self::YUY2 | Self::UYVY | Self::YVYU => 32,
                _ => 0,
            };
            return Ok(PixelMasks {
                bpp,
                ..PixelMasks::default()
            });
        }

        let bytes = self.bytes_per_pixel();
        let bpp = if bytes <= 2 {
            u32::from(self.bits_per_pixel())
        } else {
            u32::from(bytes) * 8
        };
        let mut masks = PixelMasks {
            bpp,
            ..PixelMasks::default()
        };

        if self == Self::RGB24 || self == Self::BGR24 {
            // Masks describe the bytes once loaded into a native-endian word
            let (low, high) = if cfg!(target_endian = "little") == (self == Self::RGB24) {
                (&mut masks.r, &mut masks.b)
            } else {
                (&mut masks.b, &mut masks.r)
            };
            *low = 0x0000_00FF;
            *high = 0x00FF_0000;
            masks.g = 0x0000_FF00;
            return Ok(masks);
        }

        if !self.is_packed() {
            return Ok(masks);
        }

        let table: [u32; 4] = match self.layout() {
            PackedLayout::L332 => [0x0000_0000, 0x0000_00E0, 0x0000_001C, 0x0000_0003],
            PackedLayout::L4444 => [0x0000_F000, 0x0000_0F00, 0x0000_00F0, 0x0000_000F],
            PackedLayout::L1555 => [0x0000_8000, 0x0000_7C00, 0x0000_03E0, 0x0000_001F],
            PackedLayout::L5551 => [0x0000_F800, 0x0000_07C0, 0x0000_003E, 0x0000_0001],
            PackedLayout::L565 => [0x0000_0000, 0x0000_F800, 0x0000_07E0, 0x0000_001F],
            PackedLayout::L8888 => [0xFF00_0000, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF],
            PackedLayout::L2101010 => [0xC000_0000, 0x3FF0_0000, 0x000F_FC00, 0x0000_03FF],
            PackedLayout::L1010102 => [0xFFC0_0000, 0x003F_F000, 0x0000_0FFC, 0x0000_0003],
            PackedLayout::None => return Err(Error::unsupported_format(self.0)),
        };

        match PackedOrder::from_raw(self.order_bits()) {
            PackedOrder::Xrgb => (masks.r, masks.g, masks.b) = (table[1], table[2], table[3]),
            PackedOrder::Rgbx => (masks.r, masks.g, masks.b) = (table[0], table[1], table[2]),
            PackedOrder::Argb => {
                (masks.a, masks.r, masks.g, masks.b) = (table[0], table[1], table[2], table[3]);
            }
            PackedOrder::Rgba => {
                (masks.r, masks.g, masks.b, masks.a) = (table[0], table[1], table[2], table[3]);
            }
            PackedOrder::Xbgr => (masks.b, masks.g, masks.r) = (table[1], table[2], table[3]),
            PackedOrder::Bgrx => (masks.b, masks.g, masks.r) = (table[0], table[1], table[2]),
            PackedOrder::Bgra => {
                (masks.b, masks.g, masks.r, masks.a) = (table[0], table[1], table[2], table[3]);
            }
            PackedOrder::Abgr => {
                (masks.a, masks.b, masks.g, masks.r) = (table[0], table[1], table[2], table[3]);
            }
            PackedOrder::None => return Err(Error::unsupported_format(self.0)),
        }

        Ok(masks)
    }

    /// Find the format matching a bit depth and channel masks.
    ///
    /// Returns [`PixelFormat::UNKNOWN`] when nothing matches.
    #[must_use]
    pub const fn from_masks(bpp: u32, r: u32, g: u32, b: u32, a: u32) -> Self {
        let masks = (r, g, b, a);
        match bpp {
            1 => Self::INDEX1MSB,
            2 => Self::INDEX2MSB,
            4 => Self::INDEX4MSB,
            8 => match masks {
                (0xE0, 0x1C, 0x03, 0) => Self::RGB332,
                _ => Self::INDEX8,
            },
            12 => match masks {
                (0, _, _, _) | (0x0F00, 0x00F0, 0x000F, 0) => Self::XRGB4444,
                (0x000F, 0x00F0, 0x0F00, 0) => Self::XBGR4444,
                _ => Self::UNKNOWN,
            },
            15 if r == 0 => Self::XRGB1555,
            15 | 16 => match masks {
                (0, _, _, _) => Self::RGB565,
                (0x7C00, 0x03E0, 0x001F, 0) => Self::XRGB1555,
                (0x001F, 0x03E0, 0x7C00, 0) => Self::XBGR1555,
                (0x0F00, 0x00F0, 0x000F, 0xF000) => Self::ARGB4444,
                (0xF000, 0x0F00, 0x00F0, 0x000F) => Self::RGBA4444,
                (0x000F, 0x00F0, 0x0F00, 0xF000) => Self::ABGR4444,
                (0x00F0, 0x0F00, 0xF000, 0x000F) => Self::BGRA4444,
                (0x7C00, 0x03E0, 0x001F, 0x8000) => Self::ARGB1555,
                (0xF800, 0x07C0, 0x003E, 0x0001) => Self::RGBA5551,
                (0x001F, 0x03E0, 0x7C00, 0x8000) => Self::ABGR1555,
                (0x003E, 0x07C0, 0xF800, 0x0001) => Self::BGRA5551,
                (0xF800, 0x07E0, 0x001F, 0) | (0x003F, 0x07C0, 0xF800, 0) => Self::RGB565,
                (0x001F, 0x07E0, 0xF800, 0) => Self::BGR565,
                _ => Self::UNKNOWN,
            },
            24 => match r {
                0 | 0x00FF_0000 => Self::RED_HIGH_24,
                0x0000_00FF => Self::RED_LOW_24,
                _ => Self::UNKNOWN,
            },
            30 | 32 => match masks {
                (0x3FF0_0000, 0x000F_FC00, 0x0000_03FF, 0) => Self::XRGB2101010,
                (0x0000_03FF, 0x000F_FC00, 0x3FF0_0000, 0) => Self::XBGR2101010,
                (0, _, _, _) | (0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0) => Self::XRGB8888,
                (0xFF00_0000, 0x00FF_0000, 0x0000_FF00, 0) => Self::RGBX8888,
                (0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0) => Self::XBGR8888,
                (0x0000_FF00, 0x00FF_0000, 0xFF00_0000, 0) => Self::BGRX8888,
                (0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000) => Self::ARGB8888,
                (0xFF00_0000, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF) => Self::RGBA8888,
                (0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000) => Self::ABGR8888,
                (0x0000_FF00, 0x00FF_0000, 0xFF00_0000, 0x0000_00FF) => Self::BGRA8888,
                (0x3FF0_0000, 0x000F_FC00, 0x0000_03FF, 0xC000_0000) => Self::ARGB2101010,
                (0x0000_03FF, 0x000F_FC00, 0x3FF0_0000, 0xC000_0000) => Self::ABGR2101010,
                _ => Self::UNKNOWN,
            },
            _ => Self::UNKNOWN,
        }
    }

    /// Native name of the format, e.g. `"SDL_PIXELFORMAT_ARGB8888"`.
    ///
    /// Unrecognised values report `"SDL_PIXELFORMAT_UNKNOWN"`. Endianness
    /// aliases report the name of the format they resolve to.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::INDEX1LSB => "SDL_PIXELFORMAT_INDEX1LSB",
            Self::INDEX1MSB => "SDL_PIXELFORMAT_INDEX1MSB",
            Self::INDEX2LSB => "SDL_PIXELFORMAT_INDEX2LSB",
            Self::INDEX2MSB => "SDL_PIXELFORMAT_INDEX2MSB",
            Self::INDEX4LSB => "SDL_PIXELFORMAT_INDEX4LSB",
            Self::INDEX4MSB => "SDL_PIXELFORMAT_INDEX4MSB",
            Self::INDEX8 => "SDL_PIXELFORMAT_INDEX8",
            Self::RGB332 => "SDL_PIXELFORMAT_RGB332",
            Self::XRGB4444 => "SDL_PIXELFORMAT_XRGB4444",
            Self::XBGR4444 => "SDL_PIXELFORMAT_XBGR4444",
            Self::XRGB1555 => "SDL_PIXELFORMAT_XRGB1555",
            Self::XBGR1555 => "SDL_PIXELFORMAT_XBGR1555",
            Self::ARGB4444 => "SDL_PIXELFORMAT_ARGB4444",
            Self::RGBA4444 => "SDL_PIXELFORMAT_RGBA4444",
            Self::ABGR4444 => "SDL_PIXELFORMAT_ABGR4444",
            Self::BGRA4444 => "SDL_PIXELFORMAT_BGRA4444",
            Self::ARGB1555 => "SDL_PIXELFORMAT_ARGB1555",
            Self::RGBA5551 => "SDL_PIXELFORMAT_RGBA5551",
            Self::ABGR1555 => "SDL_PIXELFORMAT_ABGR1555",
            Self::BGRA5551 => "SDL_PIXELFORMAT_BGRA5551",
            Self::RGB565 => "SDL_PIXELFORMAT_RGB565",
            Self::BGR565 => "SDL_PIXELFORMAT_BGR565",
            Self::RGB24 => "SDL_PIXELFORMAT_RGB24",
            Self::BGR24 => "SDL_PIXELFORMAT_BGR24",
            Self::XRGB8888 => "SDL_PIXELFORMAT_XRGB8888",
            Self::RGBX8888 => "SDL_PIXELFORMAT_RGBX8888",
            Self::XBGR8888 => "SDL_PIXELFORMAT_XBGR8888",
            Self::BGRX8888 => "SDL_PIXELFORMAT_BGRX8888",
            Self::ARGB8888 => "SDL_PIXELFORMAT_ARGB8888",
            Self::RGBA8888 => "SDL_PIXELFORMAT_RGBA8888",
            Self::ABGR8888 => "SDL_PIXELFORMAT_ABGR8888",
            Self::BGRA8888 => "SDL_PIXELFORMAT_BGRA8888",
            Self::XRGB2101010 => "SDL_PIXELFORMAT_XRGB2101010",
            Self::XBGR2101010 => "SDL_PIXELFORMAT_XBGR2101010",
            Self::ARGB2101010 => "SDL_PIXELFORMAT_ARGB2101010",
            Self::ABGR2101010 => "SDL_PIXELFORMAT_ABGR2101010",
            Self::RGB48 => "SDL_PIXELFORMAT_RGB48",
            Self::BGR48 => "SDL_PIXELFORMAT_BGR48",
            Self::RGBA64 => "SDL_PIXELFORMAT_RGBA64",
            Self::ARGB64 => "SDL_PIXELFORMAT_ARGB64",
            Self::BGRA64 => "SDL_PIXELFORMAT_BGRA64",
            Self::ABGR64 => "SDL_PIXELFORMAT_ABGR64",
            Self::RGB48_FLOAT => "SDL_PIXELFORMAT_RGB48_FLOAT",
            Self::BGR48_FLOAT => "SDL_PIXELFORMAT_BGR48_FLOAT",
            Self::RGBA64_FLOAT => "SDL_PIXELFORMAT_RGBA64_FLOAT",
            Self::ARGB64_FLOAT => "SDL_PIXELFORMAT_ARGB64_FLOAT",
            Self::BGRA64_FLOAT => "SDL_PIXELFORMAT_BGRA64_FLOAT",
            Self::ABGR64_FLOAT => "SDL_PIXELFORMAT_ABGR64_FLOAT",
            Self::RGB96_FLOAT => "SDL_PIXELFORMAT_RGB96_FLOAT",
            Self::BGR96_FLOAT => "SDL_PIXELFORMAT_BGR96_FLOAT",
            Self::RGBA128_FLOAT => "SDL_PIXELFORMAT_RGBA128_FLOAT",
            Self::ARGB128_FLOAT => "SDL_PIXELFORMAT_ARGB128_FLOAT",
            Self::BGRA128_FLOAT => "SDL_PIXELFORMAT_BGRA128_FLOAT",
            Self::ABGR128_FLOAT => "SDL_PIXELFORMAT_ABGR128_FLOAT",
            Self::YV12 => "SDL_PIXELFORMAT_YV12",
            Self::IYUV => "SDL_PIXELFORMAT_IYUV",
            Self::YUY2 => "SDL_PIXELFORMAT_YUY2",
            Self::UYVY => "SDL_PIXELFORMAT_UYVY",
            Self::YVYU => "SDL_PIXELFORMAT_YVYU",
            Self::NV12 => "SDL_PIXELFORMAT_NV12",
            Self::NV21 => "SDL_PIXELFORMAT_NV21",
            Self::P010 => "SDL_PIXELFORMAT_P010",
            Self::EXTERNAL_OES => "SDL_PIXELFORMAT_EXTERNAL_OES",
            Self::MJPG => "SDL_PIXELFORMAT_MJPG",
            _ => "SDL_PIXELFORMAT_UNKNOWN",
        }
    }
}

// Names spell out type, channel order and bit widths.
#[allow(missing_docs)]
impl PixelFormat {
    /// Unknown or unset.
    pub const UNKNOWN: Self = Self(0);

    /// 1 bit indices, least significant bit first.
    pub const INDEX1LSB: Self =
        Self::define(PixelType::Index1, BitmapOrder::Order4321 as u8, PackedLayout::None, 1, 0);
    /// 1 bit indices, most significant bit first.
    pub const INDEX1MSB: Self =
        Self::define(PixelType::Index1, BitmapOrder::Order1234 as u8, PackedLayout::None, 1, 0);
    /// 2 bit indices, least significant bits first.
    pub const INDEX2LSB: Self =
        Self::define(PixelType::Index2, BitmapOrder::Order4321 as u8, PackedLayout::None, 2, 0);
    /// 2 bit indices, most significant bits first.
    pub const INDEX2MSB: Self =
        Self::define(PixelType::Index2, BitmapOrder::Order1234 as u8, PackedLayout::None, 2, 0);
    /// 4 bit indices, least significant nibble first.
    pub const INDEX4LSB: Self =
        Self::define(PixelType::Index4, BitmapOrder::Order4321 as u8, PackedLayout::None, 4, 0);
    /// 4 bit indices, most significant nibble first.
    pub const INDEX4MSB: Self =
        Self::define(PixelType::Index4, BitmapOrder::Order1234 as u8, PackedLayout::None, 4, 0);
    /// 8 bit indices.
    pub const INDEX8: Self = Self::define(PixelType::Index8, 0, PackedLayout::None, 8, 1);

    /// 3-3-2 packed RGB.
    pub const RGB332: Self =
        Self::define(PixelType::Packed8, PackedOrder::Xrgb as u8, PackedLayout::L332, 8, 1);

    pub const XRGB4444: Self =
        Self::define(PixelType::Packed16, PackedOrder::Xrgb as u8, PackedLayout::L4444, 12, 2);
    pub const XBGR4444: Self =
        Self::define(PixelType::Packed16, PackedOrder::Xbgr as u8, PackedLayout::L4444, 12, 2);
    pub const XRGB1555: Self =
        Self::define(PixelType::Packed16, PackedOrder::Xrgb as u8, PackedLayout::L1555, 15, 2);
    pub const XBGR1555: Self =
        Self::define(PixelType::Packed16, PackedOrder::Xbgr as u8, PackedLayout::L1555, 15, 2);
    pub const ARGB4444: Self =
        Self::define(PixelType::Packed16, PackedOrder::Argb as u8, PackedLayout::L4444, 16, 2);
    pub const RGBA4444: Self =
        Self::define(PixelType::Packed16, PackedOrder::Rgba as u8, PackedLayout::L4444, 16, 2);
    pub const ABGR4444: Self =
        Self::define(PixelType::Packed16, PackedOrder::Abgr as u8, PackedLayout::L4444, 16, 2);
    pub const BGRA4444: Self =
        Self::define(PixelType::Packed16, PackedOrder::Bgra as u8, PackedLayout::L4444, 16, 2);
    pub const ARGB1555: Self =
        Self::define(PixelType::Packed16, PackedOrder::Argb as u8, PackedLayout::L1555, 16, 2);
    pub const RGBA5551: Self =
        Self::define(PixelType::Packed16, PackedOrder::Rgba as u8, PackedLayout::L5551, 16, 2);
    pub const ABGR1555: Self =
        Self::define(PixelType::Packed16, PackedOrder::Abgr as u8, PackedLayout::L1555, 16, 2);
    pub const BGRA5551: Self =
        Self::define(PixelType::Packed16, PackedOrder::Bgra as u8, PackedLayout::L5551, 16, 2);
    pub const RGB565: Self =
        Self::define(PixelType::Packed16, PackedOrder::Xrgb as u8, PackedLayout::L565, 16, 2);
    pub const BGR565: Self =
        Self::define(PixelType::Packed16, PackedOrder::Xbgr as u8, PackedLayout::L565, 16, 2);

    /// 8 bit red, green, blue bytes in memory order.
    pub const RGB24: Self =
        Self::define(PixelType::ArrayU8, ArrayOrder::Rgb as u8, PackedLayout::None, 24, 3);
    /// 8 bit blue, green, red bytes in memory order.
    pub const BGR24: Self =
        Self::define(PixelType::ArrayU8, ArrayOrder::Bgr as u8, PackedLayout::None, 24, 3);

    pub const XRGB8888: Self =
        Self::define(PixelType::Packed32, PackedOrder::Xrgb as u8, PackedLayout::L8888, 24, 4);
    pub const RGBX8888: Self =
        Self::define(PixelType::Packed32, PackedOrder::Rgbx as u8, PackedLayout::L8888, 24, 4);
    pub const XBGR8888: Self =
        Self::define(PixelType::Packed32, PackedOrder::Xbgr as u8, PackedLayout::L8888, 24, 4);
    pub const BGRX8888: Self =
        Self::define(PixelType::Packed32, PackedOrder::Bgrx as u8, PackedLayout::L8888, 24, 4);
    pub const ARGB8888: Self =
        Self::define(PixelType::Packed32, PackedOrder::Argb as u8, PackedLayout::L8888, 32, 4);
    pub const RGBA8888: Self =
        Self::define(PixelType::Packed32, PackedOrder::Rgba as u8, PackedLayout::L8888, 32, 4);
    pub const ABGR8888: Self =
        Self::define(PixelType::Packed32, PackedOrder::Abgr as u8, PackedLayout::L8888, 32, 4);
    pub const BGRA8888: Self =
        Self::define(PixelType::Packed32, PackedOrder::Bgra as u8, PackedLayout::L8888, 32, 4);
    pub const XRGB2101010: Self =
        Self::define(PixelType::Packed32, PackedOrder::Xrgb as u8, PackedLayout::L2101010, 32, 4);
    pub const XBGR2101010: Self =
        Self::define(PixelType::Packed32, PackedOrder::Xbgr as u8, PackedLayout::L2101010, 32, 4);
    pub const ARGB2101010: Self =
        Self::define(PixelType::Packed32, PackedOrder::Argb as u8, PackedLayout::L2101010, 32, 4);
    pub const ABGR2101010: Self =
        Self::define(PixelType::Packed32, PackedOrder::Abgr as u8, PackedLayout::L2101010, 32, 4);

    pub const RGB48: Self =
        Self::define(PixelType::ArrayU16, ArrayOrder::Rgb as u8, PackedLayout::None, 48, 6);
    pub const BGR48: Self =
        Self::define(PixelType::ArrayU16, ArrayOrder::Bgr as u8, PackedLayout::None, 48, 6);
    pub const RGBA64: Self =
        Self::define(PixelType::ArrayU16, ArrayOrder::Rgba as u8, PackedLayout::None, 64, 8);
    pub const ARGB64: Self =
        Self::define(PixelType::ArrayU16, ArrayOrder::Argb as u8, PackedLayout::None, 64, 8);
    pub const BGRA64: Self =
        Self::define(PixelType::ArrayU16, ArrayOrder::Bgra as u8, PackedLayout::None, 64, 8);
    pub const ABGR64: Self =
        Self::define(PixelType::ArrayU16, ArrayOrder::Abgr as u8, PackedLayout::None, 64, 8);

    pub const RGB48_FLOAT: Self =
        Self::define(PixelType::ArrayF16, ArrayOrder::Rgb as u8, PackedLayout::None, 48, 6);
    pub const BGR48_FLOAT: Self =
        Self::define(PixelType::ArrayF16, ArrayOrder::Bgr as u8, PackedLayout::None, 48, 6);
    pub const RGBA64_FLOAT: Self =
        Self::define(PixelType::ArrayF16, ArrayOrder::Rgba as u8, PackedLayout::None, 64, 8);
    pub const ARGB64_FLOAT: Self =
        Self::define(PixelType::ArrayF16, ArrayOrder::Argb as u8, PackedLayout::None, 64, 8);
    pub const BGRA64_FLOAT: Self =
        Self::define(PixelType::ArrayF16, ArrayOrder::Bgra as u8, PackedLayout::None, 64, 8);
    pub const ABGR64_FLOAT: Self =
        Self::define(PixelType::ArrayF16, ArrayOrder::Abgr as u8, PackedLayout::None, 64, 8);

    pub const RGB96_FLOAT: Self =
        Self::define(PixelType::ArrayF32, ArrayOrder::Rgb as u8, PackedLayout::None, 96, 12);
    pub const BGR96_FLOAT: Self =
        Self::define(PixelType::ArrayF32, ArrayOrder::Bgr as u8, PackedLayout::None, 96, 12);
    pub const RGBA128_FLOAT: Self =
        Self::define(PixelType::ArrayF32, ArrayOrder::Rgba as u8, PackedLayout::None, 128, 16);
    pub const ARGB128_FLOAT: Self =
        Self::define(PixelType::ArrayF32, ArrayOrder::Argb as u8, PackedLayout::None, 128, 16);
    pub const BGRA128_FLOAT: Self =
        Self::define(PixelType::ArrayF32, ArrayOrder::Bgra as u8, PackedLayout::None, 128, 16);
    pub const ABGR128_FLOAT: Self =
        Self::define(PixelType::ArrayF32, ArrayOrder::Abgr as u8, PackedLayout::None, 128, 16);

    /// Planar Y, V, U (4:2:0).
    pub const YV12: Self = Self::define_fourcc(b'Y', b'V', b'1', b'2');
    /// Planar Y, U, V (4:2:0).
    pub const IYUV: Self = Self::define_fourcc(b'I', b'Y', b'U', b'V');
    /// Packed Y0, U0, Y1, V0.
    pub const YUY2: Self = Self::define_fourcc(b'Y', b'U', b'Y', b'2');
    /// Packed U0, Y0, V0, Y1.
    pub const UYVY: Self = Self::define_fourcc(b'U', b'Y', b'V', b'Y');
    /// Packed Y0, V0, Y1, U0.
    pub const YVYU: Self = Self::define_fourcc(b'Y', b'V', b'Y', b'U');
    /// Planar Y plus interleaved U/V.
    pub const NV12: Self = Self::define_fourcc(b'N', b'V', b'1', b'2');
    /// Planar Y plus interleaved V/U.
    pub const NV21: Self = Self::define_fourcc(b'N', b'V', b'2', b'1');
    /// Planar Y plus interleaved U/V, 10 bits in 16.
    pub const P010: Self = Self::define_fourcc(b'P', b'0', b'1', b'0');
    /// Android external OES texture.
    pub const EXTERNAL_OES: Self = Self::define_fourcc(b'O', b'E', b'S', b' ');
    /// Motion JPEG.
    pub const MJPG: Self = Self::define_fourcc(b'M', b'J', b'P', b'G');

    // Byte-order aliases: name the bytes in memory order, resolved per host.
    #[cfg(target_endian = "big")]
    pub const RGBA32: Self = Self::RGBA8888;
    #[cfg(target_endian = "big")]
    pub const ARGB32: Self = Self::ARGB8888;
    #[cfg(target_endian = "big")]
    pub const BGRA32: Self = Self::BGRA8888;
    #[cfg(target_endian = "big")]
    pub const ABGR32: Self = Self::ABGR8888;
    #[cfg(target_endian = "big")]
    pub const RGBX32: Self = Self::RGBX8888;
    #[cfg(target_endian = "big")]
    pub const XRGB32: Self = Self::XRGB8888;
    #[cfg(target_endian = "big")]
    pub const BGRX32: Self = Self::BGRX8888;
    #[cfg(target_endian = "big")]
    pub const XBGR32: Self = Self::XBGR8888;

    #[cfg(target_endian = "little")]
    pub const RGBA32: Self = Self::ABGR8888;
    #[cfg(target_endian = "little")]
    pub const ARGB32: Self = Self::BGRA8888;
    #[cfg(target_endian = "little")]
    pub const BGRA32: Self = Self::ARGB8888;
    #[cfg(target_endian = "little")]
    pub const ABGR32: Self = Self::RGBA8888;
    #[cfg(target_endian = "little")]
    pub const RGBX32: Self = Self::XBGR8888;
    #[cfg(target_endian = "little")]
    pub const XRGB32: Self = Self::BGRX8888;
    #[cfg(target_endian = "little")]
    pub const BGRX32: Self = Self::XRGB8888;
    #[cfg(target_endian = "little")]
    pub const XBGR32: Self = Self::RGBX8888;

    // 24-bit array format whose red byte is the low (or high) byte of a word
    #[cfg(target_endian = "big")]
    const RED_LOW_24: Self = Self::BGR24;
    #[cfg(target_endian = "big")]
    const RED_HIGH_24: Self = Self::RGB24;
    #[cfg(target_endian = "little")]
    const RED_LOW_24: Self = Self::RGB24;
    #[cfg(target_endian = "little")]
    const RED_HIGH_24: Self = Self::BGR24;
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<u32> for PixelFormat {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<PixelFormat> for u32 {
    fn from(format: PixelFormat) -> Self {
        format.0
    }
}
