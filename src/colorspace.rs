//! Colorspace bit-field codec.
//!
//! A colorspace packs six fields into 32 bits with non-uniform widths:
//!
//! ```text
//!  31..28  27..24  23..20  19..15  14..10     9..5      4..0
//!  type    range   chroma  unused  primaries  transfer  matrix
//! ```
//!
//! Values are bit-for-bit identical to the native `SDL_Colorspace`.
//!
//! # Example
//!
//! ```
//! use lienzo::colorspace::{Colorspace, MatrixCoefficients};
//!
//! let cs = Colorspace::BT709_LIMITED;
//! assert_eq!(cs.matrix(), MatrixCoefficients::Bt709);
//! assert!(cs.is_limited_range());
//! ```

use std::fmt;

/// Broad color model (bits 28..31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ColorType {
    /// Unknown.
    #[default]
    Unknown = 0,
    /// RGB.
    Rgb = 1,
    /// Y'CbCr.
    YCbCr = 2,
}

impl ColorType {
    /// Decode a raw nibble; unassigned values are `Unknown`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Rgb,
            2 => Self::YCbCr,
            _ => Self::Unknown,
        }
    }
}

/// Quantization range (bits 24..27).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ColorRange {
    /// Unknown.
    #[default]
    Unknown = 0,
    /// Narrow range, e.g. 16-235 for 8-bit Y'.
    Limited = 1,
    /// Full 0-255 range.
    Full = 2,
}

impl ColorRange {
    /// Decode a raw nibble; unassigned values are `Unknown`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Limited,
            2 => Self::Full,
            _ => Self::Unknown,
        }
    }
}

/// Chroma sample siting (bits 20..23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ChromaLocation {
    /// RGB, no chroma sampling.
    #[default]
    None = 0,
    /// Co-sited with the left luma sample (MPEG-2, 4:2:0 default).
    Left = 1,
    /// Centered between luma samples (JPEG).
    Center = 2,
    /// Co-sited with the top-left luma sample (HEVC, BT.2020).
    TopLeft = 3,
}

impl ChromaLocation {
    /// Decode a raw nibble; unassigned values are `None`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Left,
            2 => Self::Center,
            3 => Self::TopLeft,
            _ => Self::None,
        }
    }
}

/// Color primaries, H.273 numbering (bits 10..14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum ColorPrimaries {
    #[default]
    Unknown = 0,
    Bt709 = 1,
    Unspecified = 2,
    Bt470M = 4,
    Bt470Bg = 5,
    Bt601 = 6,
    Smpte240 = 7,
    GenericFilm = 8,
    Bt2020 = 9,
    Xyz = 10,
    Smpte431 = 11,
    Smpte432 = 12,
    Ebu3213 = 22,
    Custom = 31,
}

impl ColorPrimaries {
    /// Decode a raw 5-bit field; unassigned values are `Unknown`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Bt470M,
            5 => Self::Bt470Bg,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::GenericFilm,
            9 => Self::Bt2020,
            10 => Self::Xyz,
            11 => Self::Smpte431,
            12 => Self::Smpte432,
            22 => Self::Ebu3213,
            31 => Self::Custom,
            _ => Self::Unknown,
        }
    }
}

/// Transfer characteristics, H.273 numbering (bits 5..9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TransferCharacteristics {
    /// Unknown.
    #[default]
    Unknown = 0,
    /// Rec. ITU-R BT.709-6 / BT.1361.
    Bt709 = 1,
    /// Unspecified.
    Unspecified = 2,
    /// Assumed display gamma 2.2.
    Gamma22 = 4,
    /// Assumed display gamma 2.8.
    Gamma28 = 5,
    /// BT.601-7, same curve as BT.709.
    Bt601 = 6,
    /// SMPTE ST 240M.
    Smpte240 = 7,
    /// Linear.
    Linear = 8,
    /// Logarithmic, 100:1 range.
    Log100 = 9,
    /// Logarithmic, 100 * sqrt(10) : 1 range.
    Log100Sqrt10 = 10,
    /// IEC 61966-2-4.
    Iec61966 = 11,
    /// BT.1361 extended gamut.
    Bt1361 = 12,
    /// sRGB.
    Srgb = 13,
    /// BT.2020 10-bit.
    Bt2020TenBit = 14,
    /// BT.2020 12-bit.
    Bt2020TwelveBit = 15,
    /// SMPTE ST 2084 perceptual quantizer (HDR10).
    Pq = 16,
    /// SMPTE ST 428-1.
    Smpte428 = 17,
    /// Hybrid log-gamma (ARIB STD-B67).
    Hlg = 18,
    /// Application defined.
    Custom = 31,
}

impl TransferCharacteristics {
    /// Decode a raw 5-bit field; unassigned values are `Unknown`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Gamma22,
            5 => Self::Gamma28,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::Linear,
            9 => Self::Log100,
            10 => Self::Log100Sqrt10,
            11 => Self::Iec61966,
            12 => Self::Bt1361,
            13 => Self::Srgb,
            14 => Self::Bt2020TenBit,
            15 => Self::Bt2020TwelveBit,
            16 => Self::Pq,
            17 => Self::Smpte428,
            18 => Self::Hlg,
            31 => Self::Custom,
            _ => Self::Unknown,
        }
    }
}

/// Y'CbCr matrix coefficients, H.273 numbering (bits 0..4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum MatrixCoefficients {
    /// Identity matrix, i.e. plain RGB. Also the bucket for unassigned values.
    #[default]
    Identity = 0,
    Bt709 = 1,
    Unspecified = 2,
    Fcc = 4,
    /// Same matrix as BT.601.
    Bt470Bg = 5,
    Bt601 = 6,
    Smpte240 = 7,
    YCgCo = 8,
    Bt2020Ncl = 9,
    Bt2020Cl = 10,
    Smpte2085 = 11,
    ChromaDerivedNcl = 12,
    ChromaDerivedCl = 13,
    ICtCp = 14,
    Custom = 31,
}

impl MatrixCoefficients {
    /// Decode a raw 5-bit field; unassigned values are `Identity`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Fcc,
            5 => Self::Bt470Bg,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::YCgCo,
            9 => Self::Bt2020Ncl,
            10 => Self::Bt2020Cl,
            11 => Self::Smpte2085,
            12 => Self::ChromaDerivedNcl,
            13 => Self::ChromaDerivedCl,
            14 => Self::ICtCp,
            31 => Self::Custom,
            _ => Self::Identity,
        }
    }
}

/// The six fields of a colorspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorspaceDescriptor {
    /// Color model.
    pub color_type: ColorType,
    /// Quantization range.
    pub range: ColorRange,
    /// Chroma siting.
    pub chroma: ChromaLocation,
    /// Primaries.
    pub primaries: ColorPrimaries,
    /// Transfer function.
    pub transfer: TransferCharacteristics,
    /// Matrix coefficients.
    pub matrix: MatrixCoefficients,
}

impl ColorspaceDescriptor {
    /// Encode into a colorspace value.
    #[must_use]
    pub const fn encode(&self) -> Colorspace {
        Colorspace::define(
            self.color_type,
            self.range,
            self.primaries,
            self.transfer,
            self.matrix,
            self.chroma,
        )
    }
}

/// A 32-bit colorspace value, ABI-compatible with `SDL_Colorspace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Colorspace(pub u32);

impl Colorspace {
    /// Unknown colorspace.
    pub const UNKNOWN: Self = Self(0);

    /// sRGB, the default for RGB surfaces.
    pub const SRGB: Self = Self::define(
        ColorType::Rgb,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Srgb,
        MatrixCoefficients::Identity,
        ChromaLocation::None,
    );

    /// Linear-light sRGB primaries, the default for float surfaces.
    pub const SRGB_LINEAR: Self = Self::define(
        ColorType::Rgb,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Linear,
        MatrixCoefficients::Identity,
        ChromaLocation::None,
    );

    /// BT.2020 primaries with the PQ transfer function.
    pub const HDR10: Self = Self::define(
        ColorType::Rgb,
        ColorRange::Full,
        ColorPrimaries::Bt2020,
        TransferCharacteristics::Pq,
        MatrixCoefficients::Identity,
        ChromaLocation::None,
    );

    /// Full range BT.601 Y'CbCr, as used by JPEG.
    pub const JPEG: Self = Self::define(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Bt601,
        MatrixCoefficients::Bt601,
        ChromaLocation::None,
    );

    /// Limited range BT.601, the default for YUV surfaces.
    pub const BT601_LIMITED: Self = Self::define(
        ColorType::YCbCr,
        ColorRange::Limited,
        ColorPrimaries::Bt601,
        TransferCharacteristics::Bt601,
        MatrixCoefficients::Bt601,
        ChromaLocation::Left,
    );

    /// Full range BT.601.
    pub const BT601_FULL: Self = Self::define(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt601,
        TransferCharacteristics::Bt601,
        MatrixCoefficients::Bt601,
        ChromaLocation::Left,
    );

    /// Limited range BT.709.
    pub const BT709_LIMITED: Self = Self::define(
        ColorType::YCbCr,
        ColorRange::Limited,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Bt709,
        MatrixCoefficients::Bt709,
        ChromaLocation::Left,
    );

    /// Full range BT.709.
    pub const BT709_FULL: Self = Self::define(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt709,
        TransferCharacteristics::Bt709,
        MatrixCoefficients::Bt709,
        ChromaLocation::Left,
    );

    /// Limited range BT.2020 (non-constant luminance) with PQ.
    pub const BT2020_LIMITED: Self = Self::define(
        ColorType::YCbCr,
        ColorRange::Limited,
        ColorPrimaries::Bt2020,
        TransferCharacteristics::Pq,
        MatrixCoefficients::Bt2020Ncl,
        ChromaLocation::Left,
    );

    /// Full range BT.2020 (non-constant luminance) with PQ.
    pub const BT2020_FULL: Self = Self::define(
        ColorType::YCbCr,
        ColorRange::Full,
        ColorPrimaries::Bt2020,
        TransferCharacteristics::Pq,
        MatrixCoefficients::Bt2020Ncl,
        ChromaLocation::Left,
    );

    /// Default colorspace for RGB surfaces.
    pub const RGB_DEFAULT: Self = Self::SRGB;

    /// Default colorspace for YUV surfaces.
    pub const YUV_DEFAULT: Self = Self::BT601_LIMITED;

    /// Pack the six fields. Note the argument order differs from the bit order.
    #[must_use]
    pub const fn define(
        color_type: ColorType,
        range: ColorRange,
        primaries: ColorPrimaries,
        transfer: TransferCharacteristics,
        matrix: MatrixCoefficients,
        chroma: ChromaLocation,
    ) -> Self {
        Self(
            ((color_type as u32) << 28)
                | ((range as u32) << 24)
                | ((chroma as u32) << 20)
                | ((primaries as u32) << 10)
                | ((transfer as u32) << 5)
                | (matrix as u32),
        )
    }

    /// The raw 32-bit value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Raw type nibble.
    #[must_use]
    pub const fn type_bits(self) -> u32 {
        (self.0 >> 28) & 0x0F
    }

    /// Raw range nibble.
    #[must_use]
    pub const fn range_bits(self) -> u32 {
        (self.0 >> 24) & 0x0F
    }

    /// Raw chroma nibble.
    #[must_use]
    pub const fn chroma_bits(self) -> u32 {
        (self.0 >> 20) & 0x0F
    }

    /// Raw 5-bit primaries field.
    #[must_use]
    pub const fn primaries_bits(self) -> u32 {
        (self.0 >> 10) & 0x1F
    }

    /// Raw 5-bit transfer field.
    #[must_use]
    pub const fn transfer_bits(self) -> u32 {
        (self.0 >> 5) & 0x1F
    }

    /// Raw 5-bit matrix field.
    #[must_use]
    pub const fn matrix_bits(self) -> u32 {
        self.0 & 0x1F
    }

    /// Color model.
    #[must_use]
    pub const fn color_type(self) -> ColorType {
        ColorType::from_raw(self.type_bits())
    }

    /// Quantization range.
    #[must_use]
    pub const fn range(self) -> ColorRange {
        ColorRange::from_raw(self.range_bits())
    }

    /// Chroma siting.
    #[must_use]
    pub const fn chroma(self) -> ChromaLocation {
        ChromaLocation::from_raw(self.chroma_bits())
    }

    /// Color primaries.
    #[must_use]
    pub const fn primaries(self) -> ColorPrimaries {
        ColorPrimaries::from_raw(self.primaries_bits())
    }

    /// Transfer characteristics.
    #[must_use]
    pub const fn transfer(self) -> TransferCharacteristics {
        TransferCharacteristics::from_raw(self.transfer_bits())
    }

    /// Matrix coefficients.
    #[must_use]
    pub const fn matrix(self) -> MatrixCoefficients {
        MatrixCoefficients::from_raw(self.matrix_bits())
    }

    /// Decode all six fields.
    ///
    /// Unassigned codes decode to their enum's fallback, so re-encoding is
    /// lossy for them. The `*_bits` accessors keep the exact values.
    #[must_use]
    pub const fn descriptor(self) -> ColorspaceDescriptor {
        ColorspaceDescriptor {
            color_type: self.color_type(),
            range: self.range(),
            chroma: self.chroma(),
            primaries: self.primaries(),
            transfer: self.transfer(),
            matrix: self.matrix(),
        }
    }

    /// BT.601 matrix (BT.470BG uses the same coefficients).
    #[must_use]
    pub const fn is_matrix_bt601(self) -> bool {
        matches!(self.matrix(), MatrixCoefficients::Bt601 | MatrixCoefficients::Bt470Bg)
    }

    /// BT.709 matrix.
    #[must_use]
    pub const fn is_matrix_bt709(self) -> bool {
        matches!(self.matrix(), MatrixCoefficients::Bt709)
    }

    /// BT.2020 non-constant luminance matrix.
    #[must_use]
    pub const fn is_matrix_bt2020_ncl(self) -> bool {
        matches!(self.matrix(), MatrixCoefficients::Bt2020Ncl)
    }

    /// Anything but full range, including unknown.
    #[must_use]
    pub const fn is_limited_range(self) -> bool {
        !self.is_full_range()
    }

    /// Full range.
    #[must_use]
    pub const fn is_full_range(self) -> bool {
        matches!(self.range(), ColorRange::Full)
    }
}

impl fmt::Display for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.descriptor();
        let fields: [(&dyn fmt::Debug, u32, u32, &str); 6] = [
            (&d.color_type, d.color_type as u32, self.type_bits(), "Type"),
            (&d.range, d.range as u32, self.range_bits(), "Range"),
            (&d.primaries, d.primaries as u32, self.primaries_bits(), "Primaries"),
            (&d.transfer, d.transfer as u32, self.transfer_bits(), "Transfer"),
            (&d.matrix, d.matrix as u32, self.matrix_bits(), "Matrix"),
            (&d.chroma, d.chroma as u32, self.chroma_bits(), "Chroma"),
        ];
        for (i, (decoded, code, bits, label)) in fields.into_iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            // Unassigned codes print as their raw value
            if code == bits {
                write!(f, "{decoded:?}")?;
            } else {
                write!(f, "{label}({bits})")?;
            }
        }
        Ok(())
    }
}

impl From<u32> for Colorspace {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Colorspace> for u32 {
    fn from(cs: Colorspace) -> Self {
        cs.0
    }
}
