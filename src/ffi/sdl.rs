//! SDL3 video bindings.
//!
//! # Safety
//!
//! This module contains unsafe FFI code. All unsafe blocks are documented
//! with SAFETY comments explaining why they are sound.
//!
//! # Thread Safety
//!
//! Native palettes are not synchronised. [`PaletteHandle`] holds a raw
//! pointer and is therefore `!Send` and `!Sync`.

use crate::color::Color;
use crate::error::{Error, Result};
use std::ffi::{c_char, c_int, CStr};
use std::ptr::NonNull;
use tracing::{trace, warn};

/// Native `SDL_Palette` layout.
#[repr(C)]
pub struct SdlPalette {
    /// Number of entries in `colors`.
    pub ncolors: c_int,
    /// Entry storage, owned by the native library.
    pub colors: *mut Color,
    /// Bumped by the native library on every write.
    pub version: u32,
    /// Native reference count.
    pub refcount: c_int,
}

#[link(name = "SDL3")]
extern "C" {
    fn SDL_CreatePalette(ncolors: c_int) -> *mut SdlPalette;
    fn SDL_SetPaletteColors(
        palette: *mut SdlPalette,
        colors: *const Color,
        firstcolor: c_int,
        ncolors: c_int,
    ) -> bool;
    fn SDL_DestroyPalette(palette: *mut SdlPalette);
    fn SDL_GetError() -> *const c_char;
}

/// The native library is linked in this build.
pub const fn is_linked() -> bool {
    true
}

/// Copy the thread's current native error message.
fn last_error() -> String {
    // SAFETY: SDL_GetError never returns null; the string stays valid until the
    // next native call on this thread, and we copy it out immediately.
    let message = unsafe { CStr::from_ptr(SDL_GetError()) };
    message.to_string_lossy().into_owned()
}

/// RAII wrapper for a native palette.
///
/// Destroys the palette exactly once on drop.
pub struct PaletteHandle {
    // NonNull keeps the handle !Send and !Sync
    palette: NonNull<SdlPalette>,
}

impl PaletteHandle {
    /// Allocate a native palette of `ncolors` white entries.
    ///
    /// # Errors
    ///
    /// Returns an error if `ncolors` does not fit a C int or the native
    /// allocation fails.
    pub fn create(ncolors: usize) -> Result<Self> {
        let count = c_int::try_from(ncolors)
            .map_err(|_| Error::invalid_input(format!("{ncolors} colors exceeds C int range")))?;

        // SAFETY: SDL_CreatePalette has no preconditions; it returns null on
        // failure and sets the native error string.
        let raw = unsafe { SDL_CreatePalette(count) };

        let palette = NonNull::new(raw).ok_or_else(|| {
            let message = last_error();
            warn!(%message, "SDL_CreatePalette failed");
            Error::native(message)
        })?;
        trace!(ncolors, "native palette created");
        Ok(Self { palette })
    }

    /// Write `colors` starting at entry `first`.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments do not fit a C int or the native
    /// call fails.
    pub fn set_colors(&mut self, first: usize, colors: &[Color]) -> Result<()> {
        let first = c_int::try_from(first)
            .map_err(|_| Error::invalid_input("first color exceeds C int range"))?;
        let count = c_int::try_from(colors.len())
            .map_err(|_| Error::invalid_input("color count exceeds C int range"))?;

        // SAFETY: palette is a live allocation owned by this handle; colors
        // points to `count` initialised #[repr(C)] Colors. The native call
        // clamps the write to the palette length and copies the data.
        let ok = unsafe { SDL_SetPaletteColors(self.palette.as_ptr(), colors.as_ptr(), first, count) };

        if ok {
            Ok(())
        } else {
            Err(Error::native(last_error()))
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        // SAFETY: palette is a live allocation owned by this handle, and
        // ncolors is never changed after creation.
        let ncolors = unsafe { self.palette.as_ref().ncolors };
        usize::try_from(ncolors).unwrap_or(0)
    }
}

impl Drop for PaletteHandle {
    fn drop(&mut self) {
        // SAFETY: palette came from SDL_CreatePalette and is released only here.
        unsafe {
            SDL_DestroyPalette(self.palette.as_ptr());
        }
        trace!("native palette destroyed");
    }
}
