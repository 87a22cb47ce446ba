//! Line Clipping Example
//!
//! Clips segments against a viewport and shows the integer/float boundary
//! differences.
//!
//! Run with: cargo run --example `line_clipping`

use lienzo::rect::{FPoint, FRect, Point, Rect};

fn main() {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║          LIENZO - Rectangle Geometry                       ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    let viewport = Rect::new(0, 0, 320, 240);
    println!("Viewport: {viewport:?}");
    println!();

    let segments = [
        (Point::new(10, 10), Point::new(100, 200)),
        (Point::new(-50, 120), Point::new(400, 120)),
        (Point::new(160, -10), Point::new(160, 500)),
        (Point::new(-100, -100), Point::new(500, 400)),
        (Point::new(-10, 300), Point::new(-5, 400)),
    ];
    for (start, end) in segments {
        match viewport.line_intersection(start, end) {
            Some((a, b)) => println!(
                "  ({:>4},{:>4})-({:>4},{:>4})  ->  ({:>4},{:>4})-({:>4},{:>4})",
                start.x, start.y, end.x, end.y, a.x, a.y, b.x, b.y
            ),
            None => println!(
                "  ({:>4},{:>4})-({:>4},{:>4})  ->  outside",
                start.x, start.y, end.x, end.y
            ),
        }
    }
    println!();

    let windows = [Rect::new(300, 200, 50, 50), Rect::new(320, 0, 10, 10)];
    for w in windows {
        println!(
            "{w:?} overlaps viewport: {:?}",
            viewport.intersection(&w)
        );
    }
    println!();

    // Edge behaviour differs between pixel and float rects
    let fviewport = viewport.to_frect();
    let edge = FPoint::new(320.0, 240.0);
    println!(
        "Point (320, 240) in int viewport: {}, in float viewport: {}",
        viewport.contains_point(Point::new(320, 240)),
        fviewport.contains_point(edge)
    );
    println!(
        "Zero-width rect empty? int: {}, float: {}",
        Rect::new(0, 0, 0, 10).is_empty(),
        FRect::new(0.0, 0.0, 0.0, 10.0).is_empty()
    );

    let clicks = [Point::new(12, 40), Point::new(300, 10), Point::new(80, 230), Point::new(999, 5)];
    if let Some(bounds) = Rect::enclosing_points(&clicks, Some(&viewport)) {
        println!("Bounds of clicks inside viewport: {bounds:?}");
    }
}
