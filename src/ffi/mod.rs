//! FFI Quarantine Zone - All unsafe code isolated here.
//!
//! # Safety Architecture
//!
//! This module contains ALL unsafe code in the lienzo crate. The crate root
//! uses `#![deny(unsafe_code)]`, so no unsafe code can leak into the
//! user-facing modules.
//!
//! ## Safety Rules
//!
//! - S1: Every `unsafe` block has a `// SAFETY:` comment
//! - S2: No raw pointers escape the FFI module
//! - S3: Native strings are copied out before the next native call
//! - S4: Every native create has exactly one matching destroy
//!
//! # Module Structure
//!
//! ```text
//! ffi/
//! ├── mod.rs   # This file - module router and stubs
//! └── sdl.rs   # SDL3 video bindings (feature = "native")
//! ```

// Allow unsafe in this module only - quarantine zone
#![allow(unsafe_code)]

#[cfg(feature = "native")]
pub mod sdl;

// Stub module when the native library is not linked
#[cfg(not(feature = "native"))]
pub mod sdl {
    //! Stub SDL module for builds without the `native` feature.

    use crate::color::Color;
    use crate::error::{Error, Result, Subsystem};

    /// Stub: the native library is never linked.
    pub const fn is_linked() -> bool {
        false
    }

    /// Stub palette handle; cannot be constructed.
    #[allow(dead_code)]
    pub struct PaletteHandle {
        _private: (),
    }

    impl PaletteHandle {
        /// Stub: always `NotAvailable`.
        pub fn create(_ncolors: usize) -> Result<Self> {
            Err(Error::not_available(Subsystem::Video))
        }

        /// Stub: always `NotAvailable`.
        pub fn set_colors(&mut self, _first: usize, _colors: &[Color]) -> Result<()> {
            Err(Error::not_available(Subsystem::Video))
        }

        /// Stub: always 0.
        pub const fn len(&self) -> usize {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_compiles() {
        // Consistent with the feature the crate was built with
        assert_eq!(super::sdl::is_linked(), cfg!(feature = "native"));
    }
}
