//! Pixel Format Example
//!
//! Decodes the named pixel formats and shows how colors map into them.
//!
//! Run with: cargo run --example `pixel_formats`

use lienzo::color::Color;
use lienzo::colorspace::Colorspace;
use lienzo::details::PixelFormatDetails;
use lienzo::pixel_format::PixelFormat;

fn main() -> Result<(), lienzo::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║          LIENZO - Pixel Formats                            ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    let formats = [
        PixelFormat::INDEX8,
        PixelFormat::RGB332,
        PixelFormat::RGB565,
        PixelFormat::ARGB1555,
        PixelFormat::RGB24,
        PixelFormat::XRGB8888,
        PixelFormat::ARGB8888,
        PixelFormat::RGBA32,
        PixelFormat::ARGB2101010,
        PixelFormat::RGBA64_FLOAT,
        PixelFormat::YUY2,
        PixelFormat::NV12,
    ];

    println!("{:<34} {:>10} {:>4} {:>5} {:>6}", "Format", "Value", "bpp", "Bytes", "Alpha");
    println!("{}", "─".repeat(64));
    for format in formats {
        println!(
            "{:<34} 0x{:08X} {:>4} {:>5} {:>6}",
            format.name(),
            format.raw(),
            format.bits_per_pixel(),
            format.bytes_per_pixel(),
            if format.has_alpha() { "yes" } else { "no" },
        );
    }
    println!();

    let orange = Color::rgba(255, 128, 0, 200);
    println!("Mapping {orange:?}:");
    for format in [PixelFormat::RGB565, PixelFormat::ARGB4444, PixelFormat::ARGB8888] {
        let details = PixelFormatDetails::new(format)?;
        let pixel = details.map_color(None, orange)?;
        let back = details.get_rgba(pixel, None);
        println!("  {:<28} -> 0x{pixel:08X} -> {back:?}", format.name());
    }
    println!();

    for cs in [Colorspace::SRGB, Colorspace::HDR10, Colorspace::BT709_LIMITED] {
        println!("Colorspace 0x{:08X}: {cs}", cs.raw());
    }

    Ok(())
}
