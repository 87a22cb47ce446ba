//! Benchmarks for the codec and geometry hot paths.
//!
//! These benchmarks verify performance requirements:
//! - F091: Format and colorspace decoding compile to a few shifts
//! - F092: No allocations in geometry or pixel mapping

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lienzo::colorspace::Colorspace;
use lienzo::details::PixelFormatDetails;
use lienzo::pixel_format::PixelFormat;
use lienzo::rect::{FPoint, FRect, Point, Rect};

fn bench_pixel_format_decode(c: &mut Criterion) {
    let format = PixelFormat::ARGB8888;

    c.bench_function("pixel_format_decode", |b| {
        b.iter(|| {
            let f = black_box(format);
            black_box((f.pixel_type(), f.bits_per_pixel(), f.has_alpha(), f.is_fourcc()))
        });
    });
}

fn bench_pixel_format_name(c: &mut Criterion) {
    let format = PixelFormat::BGRA5551;

    c.bench_function("pixel_format_name", |b| {
        b.iter(|| black_box(black_box(format).name()));
    });
}

fn bench_colorspace_descriptor(c: &mut Criterion) {
    let cs = Colorspace::BT709_LIMITED;

    c.bench_function("colorspace_descriptor", |b| {
        b.iter(|| black_box(black_box(cs).descriptor()));
    });
}

fn bench_map_rgba(c: &mut Criterion) {
    let Ok(details) = PixelFormatDetails::new(PixelFormat::RGB565) else {
        return;
    };

    c.bench_function("map_rgba_rgb565", |b| {
        b.iter(|| black_box(details.map_rgba(None, black_box(200), 100, 50, 255)));
    });
}

fn bench_rect_intersection(c: &mut Criterion) {
    let a = Rect::new(0, 0, 640, 480);
    let r = Rect::new(600, 400, 100, 100);

    c.bench_function("rect_intersection", |b| {
        b.iter(|| black_box(black_box(a).intersection(&r)));
    });
}

fn bench_enclosing_points(c: &mut Criterion) {
    let points: Vec<Point> = (0..256).map(|i| Point::new(i * 7 % 640, i * 13 % 480)).collect();
    let clip = Rect::new(100, 100, 400, 300);

    c.bench_function("enclosing_points_256", |b| {
        b.iter(|| black_box(Rect::enclosing_points(black_box(&points), Some(&clip))));
    });
}

fn bench_line_clip(c: &mut Criterion) {
    let screen = Rect::new(0, 0, 640, 480);

    c.bench_function("line_intersection_diagonal", |b| {
        b.iter(|| {
            black_box(screen.line_intersection(
                black_box(Point::new(-200, -100)),
                black_box(Point::new(900, 700)),
            ))
        });
    });
}

fn bench_line_clip_float(c: &mut Criterion) {
    let screen = FRect::new(0.0, 0.0, 640.0, 480.0);

    c.bench_function("line_intersection_diagonal_float", |b| {
        b.iter(|| {
            black_box(screen.line_intersection(
                black_box(FPoint::new(-200.0, -100.0)),
                black_box(FPoint::new(900.0, 700.0)),
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_pixel_format_decode,
    bench_pixel_format_name,
    bench_colorspace_descriptor,
    bench_map_rgba,
    bench_rect_intersection,
    bench_enclosing_points,
    bench_line_clip,
    bench_line_clip_float,
);

criterion_main!(benches);
