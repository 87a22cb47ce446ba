//! Native Palette Example
//!
//! Builds a grayscale palette and hands it to the native library.
//!
//! Run with: cargo run --example `native_palette` --features native

use lienzo::color::Color;
use lienzo::details::PixelFormatDetails;
use lienzo::palette::{NativePalette, Palette};
use lienzo::pixel_format::PixelFormat;

fn main() -> Result<(), lienzo::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::DEBUG.into())
                .from_env_lossy(),
        )
        .init();

    let grays: Vec<Color> = (0..=255u8).map(|v| Color::rgb(v, v, v)).collect();
    let mut palette = Palette::new(grays.len())?;
    palette.set_colors(0, &grays)?;
    println!("Palette: {} entries, version {}", palette.len(), palette.version());

    let details = PixelFormatDetails::new(PixelFormat::INDEX8)?;
    let index = details.map_rgb(Some(&palette), 200, 90, 40)?;
    println!("Nearest gray to (200, 90, 40): index {index}");

    if !NativePalette::is_available() {
        println!("❌ Native library not linked.");
        println!("   Rebuild with: --features native");
        return Ok(());
    }

    let mut native = NativePalette::upload(&palette)?;
    native.update(0, &[Color::rgb(255, 0, 0)])?;
    println!("✓ Native palette with {} entries", native.len());

    Ok(())
}
