//! Axis-aligned rectangle and point geometry.
//!
//! [`Rect`] and [`Point`] are generic over the coordinate type, with `i32`
//! (the default) and `f32` supported. Both share the memory layout of the
//! native `SDL_Rect`/`SDL_FRect` and `SDL_Point`/`SDL_FPoint`.
//!
//! # Integer vs Float Boundaries
//!
//! The two coordinate types deliberately disagree at the edges:
//!
//! | Operation | `i32` | `f32` |
//! |-----------|-------|-------|
//! | point containment | `[x, x + w)` half-open | `[x, x + w]` closed |
//! | emptiness | `w <= 0 \|\| h <= 0` | `w < 0 \|\| h < 0` |
//! | intersection | touching edges do not intersect | touching edges intersect |
//!
//! Integer rectangles cover whole pixels; a float rectangle with zero width
//! is still a line that can be hit.
//!
//! # Example
//!
//! ```
//! use lienzo::rect::{Point, Rect};
//!
//! let a = Rect::new(0, 0, 10, 10);
//! let b = Rect::new(5, 5, 10, 10);
//! assert_eq!(a.intersection(&b), Some(Rect::new(5, 5, 5, 5)));
//! assert!(a.contains_point(Point::new(9, 9)));
//! assert!(!a.contains_point(Point::new(10, 9)));
//! ```
//!
//! # Falsification Claims
//!
//! - F021: Integer containment is half-open, float containment closed
//! - F022: Intersection of disjoint rects is None
//! - F023: Union contains both operands
//! - F024: Clipped line endpoints lie inside the rect
//! - F025: Integer rects near the `i32` limits are refused, never wrapped

use bitflags::bitflags;
use std::fmt::Debug;
use std::ops::{Add, Sub};

/// Machine epsilon for `f32`, the default tolerance of float rect equality.
pub const FLT_EPSILON: f32 = f32::EPSILON;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
}

/// A coordinate type usable in [`Rect`] and [`Point`].
///
/// Sealed; implemented for `i32` and `f32` only.
pub trait Coord:
    sealed::Sealed + Copy + PartialOrd + Default + Debug + Add<Output = Self> + Sub<Output = Self>
{
    /// Extent of one covered sample: 1 for pixel cells, 0 for float points.
    const CELL: Self;

    /// Whether a width or height makes a rectangle empty.
    fn is_empty_extent(extent: Self) -> bool;

    /// Whether `v` lies past the far edge of the span `origin..origin + extent`.
    fn beyond(v: Self, origin: Self, extent: Self) -> bool;

    /// `a1 + (a2 - a1) * (b - b1) / (b2 - b1)`, evaluated in a wider type.
    fn interpolate(a1: Self, a2: Self, b1: Self, b2: Self, b: Self) -> Self;

    /// Whether edge arithmetic on `rect` could leave the coordinate range.
    ///
    /// Rectangle operations refuse such rectangles instead of wrapping.
    fn can_overflow(rect: &Rect<Self>) -> bool;

    /// `a + b`, or `None` outside the coordinate range.
    fn checked_sum(a: Self, b: Self) -> Option<Self>;

    /// `a - b`, or `None` outside the coordinate range.
    fn checked_diff(a: Self, b: Self) -> Option<Self>;

    /// `a + b`, clamped to the coordinate range.
    fn saturating_sum(a: Self, b: Self) -> Self;
}

impl Coord for i32 {
    const CELL: Self = 1;

    fn is_empty_extent(extent: Self) -> bool {
        extent <= 0
    }

    fn beyond(v: Self, origin: Self, extent: Self) -> bool {
        i64::from(v) >= i64::from(origin) + i64::from(extent)
    }

    // Two 33-bit differences can multiply past i64.
    #[allow(clippy::cast_possible_truncation)]
    fn interpolate(a1: Self, a2: Self, b1: Self, b2: Self, b: Self) -> Self {
        let (a1, a2) = (i128::from(a1), i128::from(a2));
        let (b1, b2, b) = (i128::from(b1), i128::from(b2), i128::from(b));
        (a1 + (a2 - a1) * (b - b1) / (b2 - b1)) as Self
    }

    fn can_overflow(rect: &Rect<Self>) -> bool {
        const LOW: i32 = i32::MIN / 2;
        const HIGH: i32 = i32::MAX / 2;
        rect.x <= LOW
            || rect.x >= HIGH
            || rect.y <= LOW
            || rect.y >= HIGH
            || rect.w >= HIGH
            || rect.h >= HIGH
    }

    fn checked_sum(a: Self, b: Self) -> Option<Self> {
        a.checked_add(b)
    }

    fn checked_diff(a: Self, b: Self) -> Option<Self> {
        a.checked_sub(b)
    }

    fn saturating_sum(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }
}

impl Coord for f32 {
    const CELL: Self = 0.0;

    fn is_empty_extent(extent: Self) -> bool {
        extent < 0.0
    }

    fn beyond(v: Self, origin: Self, extent: Self) -> bool {
        v > origin + extent
    }

    #[allow(clippy::cast_possible_truncation)]
    fn interpolate(a1: Self, a2: Self, b1: Self, b2: Self, b: Self) -> Self {
        (f64::from(a1) + f64::from(a2 - a1) * f64::from(b - b1) / f64::from(b2 - b1)) as Self
    }

    fn can_overflow(_rect: &Rect<Self>) -> bool {
        false
    }

    fn checked_sum(a: Self, b: Self) -> Option<Self> {
        Some(a + b)
    }

    fn checked_diff(a: Self, b: Self) -> Option<Self> {
        Some(a - b)
    }

    fn saturating_sum(a: Self, b: Self) -> Self {
        a + b
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Point<T = i32> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a point.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with its origin at the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rect<T = i32> {
    /// Left edge.
    pub x: T,
    /// Top edge.
    pub y: T,
    /// Width.
    pub w: T,
    /// Height.
    pub h: T,
}

/// Float point.
pub type FPoint = Point<f32>;

/// Float rectangle.
pub type FRect = Rect<f32>;

bitflags! {
    /// Cohen-Sutherland region of a point relative to a rectangle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct OutCode: u8 {
        const BOTTOM = 1;
        const TOP = 2;
        const LEFT = 4;
        const RIGHT = 8;
    }
}

/// Running min/max over a set of points.
struct Bounds<T> {
    min: Point<T>,
    max: Point<T>,
}

impl<T: Coord> Bounds<T> {
    const fn at(p: Point<T>) -> Self {
        Self { min: p, max: p }
    }

    fn extend(&mut self, p: Point<T>) {
        if p.x < self.min.x {
            self.min.x = p.x;
        } else if p.x > self.max.x {
            self.max.x = p.x;
        }
        if p.y < self.min.y {
            self.min.y = p.y;
        } else if p.y > self.max.y {
            self.max.y = p.y;
        }
    }
}

impl<T> Rect<T> {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(x: T, y: T, w: T, h: T) -> Self {
        Self { x, y, w, h }
    }
}

impl<T: Coord> Rect<T> {
    /// `x + w`, saturating for integer rectangles.
    #[must_use]
    pub fn right(&self) -> T {
        T::saturating_sum(self.x, self.w)
    }

    /// `y + h`, saturating for integer rectangles.
    #[must_use]
    pub fn bottom(&self) -> T {
        T::saturating_sum(self.y, self.h)
    }

    /// Whether the rectangle covers no area (see the module table).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        T::is_empty_extent(self.w) || T::is_empty_extent(self.h)
    }

    /// Whether `p` lies inside (see the module table for edge handling).
    #[must_use]
    pub fn contains_point(&self, p: Point<T>) -> bool {
        p.x >= self.x
            && !T::beyond(p.x, self.x, self.w)
            && p.y >= self.y
            && !T::beyond(p.y, self.y, self.h)
    }

    /// Whether the two rectangles overlap. Empty rectangles never do.
    ///
    /// Integer rectangles reaching half the `i32` range are refused and
    /// report no overlap.
    #[must_use]
    pub fn has_intersection(&self, other: &Self) -> bool {
        if T::can_overflow(self) || T::can_overflow(other) {
            return false;
        }
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (x0, x1) = overlap(self.x, self.w, other.x, other.w);
        if x1 - T::CELL < x0 {
            return false;
        }
        let (y0, y1) = overlap(self.y, self.h, other.y, other.h);
        y1 - T::CELL >= y0
    }

    /// The overlapping region, or `None` if there is none or either
    /// rectangle is refused by [`Coord::can_overflow`].
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if T::can_overflow(self) || T::can_overflow(other) {
            return None;
        }
        if self.is_empty() || other.is_empty() {
            return None;
        }
        let (x0, x1) = overlap(self.x, self.w, other.x, other.w);
        let (y0, y1) = overlap(self.y, self.h, other.y, other.h);
        let result = Self::new(x0, y0, x1 - x0, y1 - y0);
        (!result.is_empty()).then_some(result)
    }

    /// The smallest rectangle containing both.
    ///
    /// An empty operand contributes nothing; two empty operands give the
    /// zero rectangle. Returns `None` if either rectangle is refused by
    /// [`Coord::can_overflow`] or the result does not fit the coordinate type.
    #[must_use]
    pub fn union(&self, other: &Self) -> Option<Self> {
        if T::can_overflow(self) || T::can_overflow(other) {
            return None;
        }
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return Some(Self::default()),
            (true, false) => return Some(*other),
            (false, true) => return Some(*self),
            (false, false) => {}
        }
        let (x0, x1) = span(self.x, self.w, other.x, other.w);
        let (y0, y1) = span(self.y, self.h, other.y, other.h);
        Some(Self::new(x0, y0, T::checked_diff(x1, x0)?, T::checked_diff(y1, y0)?))
    }

    /// The smallest rectangle enclosing `points`.
    ///
    /// With a `clip` rectangle, points outside it are ignored. Returns `None`
    /// if there are no points, the clip is empty or refused by
    /// [`Coord::can_overflow`], every point was clipped, or the enclosing
    /// extent does not fit the coordinate type. Integer results include the
    /// far pixel, so a single point yields a 1x1 rectangle.
    #[must_use]
    pub fn enclosing_points(points: &[Point<T>], clip: Option<&Self>) -> Option<Self> {
        let bounds = match clip {
            Some(clip) => {
                if T::can_overflow(clip) || clip.is_empty() {
                    return None;
                }
                let max_x = clip.x + clip.w - T::CELL;
                let max_y = clip.y + clip.h - T::CELL;
                let mut bounds: Option<Bounds<T>> = None;
                for &p in points {
                    if p.x < clip.x || p.x > max_x || p.y < clip.y || p.y > max_y {
                        continue;
                    }
                    match bounds.as_mut() {
                        Some(b) => b.extend(p),
                        None => bounds = Some(Bounds::at(p)),
                    }
                }
                bounds?
            }
            None => {
                let (&first, rest) = points.split_first()?;
                let mut bounds = Bounds::at(first);
                for &p in rest {
                    bounds.extend(p);
                }
                bounds
            }
        };

        let extent =
            |lo: T, hi: T| T::checked_diff(hi, lo).and_then(|d| T::checked_sum(d, T::CELL));
        Some(Self::new(
            bounds.min.x,
            bounds.min.y,
            extent(bounds.min.x, bounds.max.x)?,
            extent(bounds.min.y, bounds.max.y)?,
        ))
    }

    /// Clip the segment `start..end` to the rectangle.
    ///
    /// Returns the surviving segment, or `None` if no part of it lies inside
    /// or the rectangle is refused by [`Coord::can_overflow`]. Endpoints may
    /// lie anywhere in the coordinate range.
    #[must_use]
    pub fn line_intersection(&self, start: Point<T>, end: Point<T>) -> Option<(Point<T>, Point<T>)> {
        if T::can_overflow(self) || self.is_empty() {
            return None;
        }

        let Point { x: mut x1, y: mut y1 } = start;
        let Point { x: mut x2, y: mut y2 } = end;
        let left = self.x;
        let top = self.y;
        let right = self.x + self.w - T::CELL;
        let bottom = self.y + self.h - T::CELL;

        let inside_x = |x: T| x >= left && x <= right;
        let inside_y = |y: T| y >= top && y <= bottom;
        if inside_x(x1) && inside_x(x2) && inside_y(y1) && inside_y(y2) {
            return Some((start, end));
        }

        if (x1 < left && x2 < left)
            || (x1 > right && x2 > right)
            || (y1 < top && y2 < top)
            || (y1 > bottom && y2 > bottom)
        {
            return None;
        }

        let clamp = |v: T, lo: T, hi: T| {
            if v < lo {
                lo
            } else if v > hi {
                hi
            } else {
                v
            }
        };

        if y1 == y2 {
            // Horizontal
            let a = Point::new(clamp(x1, left, right), y1);
            let b = Point::new(clamp(x2, left, right), y2);
            return Some((a, b));
        }

        if x1 == x2 {
            // Vertical
            let a = Point::new(x1, clamp(y1, top, bottom));
            let b = Point::new(x2, clamp(y2, top, bottom));
            return Some((a, b));
        }

        let mut code1 = self.out_code(x1, y1);
        let mut code2 = self.out_code(x2, y2);
        while !code1.is_empty() || !code2.is_empty() {
            if code1.intersects(code2) {
                return None;
            }

            let code = if code1.is_empty() { code2 } else { code1 };
            let (x, y) = if code.contains(OutCode::TOP) {
                (T::interpolate(x1, x2, y1, y2, top), top)
            } else if code.contains(OutCode::BOTTOM) {
                (T::interpolate(x1, x2, y1, y2, bottom), bottom)
            } else if code.contains(OutCode::LEFT) {
                (left, T::interpolate(y1, y2, x1, x2, left))
            } else {
                (right, T::interpolate(y1, y2, x1, x2, right))
            };

            if code1.is_empty() {
                (x2, y2) = (x, y);
                code2 = self.out_code(x, y);
            } else {
                (x1, y1) = (x, y);
                code1 = self.out_code(x, y);
            }
        }

        Some((Point::new(x1, y1), Point::new(x2, y2)))
    }

    fn out_code(&self, x: T, y: T) -> OutCode {
        let mut code = OutCode::empty();
        if y < self.y {
            code |= OutCode::TOP;
        } else if T::beyond(y, self.y, self.h) {
            code |= OutCode::BOTTOM;
        }
        if x < self.x {
            code |= OutCode::LEFT;
        } else if T::beyond(x, self.x, self.w) {
            code |= OutCode::RIGHT;
        }
        code
    }
}

impl Rect<f32> {
    /// Field-wise equality within an absolute tolerance.
    #[must_use]
    pub fn equals_epsilon(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.w - other.w).abs() <= epsilon
            && (self.h - other.h).abs() <= epsilon
    }

    /// [`Rect::equals_epsilon`] with [`FLT_EPSILON`].
    #[must_use]
    pub fn equals_float(&self, other: &Self) -> bool {
        self.equals_epsilon(other, FLT_EPSILON)
    }
}

impl Rect<i32> {
    /// Convert to a float rectangle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_frect(&self) -> FRect {
        FRect::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }
}

impl From<Rect<i32>> for FRect {
    fn from(r: Rect<i32>) -> Self {
        r.to_frect()
    }
}

/// Overlap of two spans as `(start, end)`. Operands passed [`Coord::can_overflow`].
fn overlap<T: Coord>(a: T, a_len: T, b: T, b_len: T) -> (T, T) {
    let a_end = a + a_len;
    let b_end = b + b_len;
    let start = if b > a { b } else { a };
    let end = if b_end < a_end { b_end } else { a_end };
    (start, end)
}

/// Smallest span covering both, as `(start, end)`. Operands passed [`Coord::can_overflow`].
fn span<T: Coord>(a: T, a_len: T, b: T, b_len: T) -> (T, T) {
    let a_end = a + a_len;
    let b_end = b + b_len;
    let start = if b < a { b } else { a };
    let end = if b_end > a_end { b_end } else { a_end };
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    // F021: Integer containment is half-open, float containment closed
    #[test]
    fn test_contains_point_int_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains_point(Point::new(5, 5)));
        assert!(r.contains_point(Point::new(0, 0)));
        assert!(!r.contains_point(Point::new(10, 5)));
        assert!(!r.contains_point(Point::new(5, 10)));
        assert!(!r.contains_point(Point::new(-1, 5)));
    }

    #[test]
    fn test_contains_point_float_closed() {
        let r = FRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(FPoint::new(10.0, 10.0)));
        assert!(r.contains_point(FPoint::new(0.0, 0.0)));
        assert!(!r.contains_point(FPoint::new(10.001, 5.0)));
        assert!(!r.contains_point(FPoint::new(f32::NAN, 5.0)));
    }

    #[test]
    fn test_is_empty_int() {
        assert!(Rect::new(0, 0, 0, 5).is_empty());
        assert!(Rect::new(0, 0, 5, -1).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn test_is_empty_float_strict() {
        assert!(!FRect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(FRect::new(0.0, 0.0, -0.0001, 5.0).is_empty());
        assert!(FRect::new(0.0, 0.0, 5.0, -1.0).is_empty());
    }

    #[test]
    fn test_equality() {
        assert_eq!(Rect::new(1, 2, 3, 4), Rect::new(1, 2, 3, 4));
        assert_ne!(Rect::new(1, 2, 3, 4), Rect::new(1, 2, 3, 5));

        let a = FRect::new(0.0, 0.0, 1.0, 1.0);
        assert!(a.equals_float(&FRect::new(0.0, 0.0, 1.0 + FLT_EPSILON, 1.0)));
        assert!(!a.equals_float(&FRect::new(0.0, 0.0, 1.01, 1.0)));
        assert!(a.equals_epsilon(&FRect::new(0.0, 0.0, 1.01, 1.0), 0.02));
    }

    #[test]
    fn test_has_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.has_intersection(&Rect::new(5, 5, 10, 10)));
        assert!(!a.has_intersection(&Rect::new(10, 0, 5, 5)));
        assert!(!a.has_intersection(&Rect::new(2, 2, 0, 5)));

        // Float rects sharing an edge touch
        let f = FRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(f.has_intersection(&FRect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!f.has_intersection(&FRect::new(10.5, 0.0, 5.0, 5.0)));
    }

    // F022: Intersection of disjoint rects is None
    #[test]
    fn test_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(a.intersection(&Rect::new(5, 5, 10, 10)), Some(Rect::new(5, 5, 5, 5)));
        assert_eq!(Rect::new(0, 0, 5, 5).intersection(&Rect::new(10, 10, 5, 5)), None);
        assert_eq!(a.intersection(&Rect::new(10, 0, 5, 5)), None);
        assert_eq!(a.intersection(&Rect::default()), None);
        assert_eq!(a.intersection(&a), Some(a));
    }

    #[test]
    fn test_intersection_float_edge() {
        let a = FRect::new(0.0, 0.0, 10.0, 10.0);
        let b = FRect::new(10.0, 2.0, 5.0, 5.0);
        assert_eq!(a.intersection(&b), Some(FRect::new(10.0, 2.0, 0.0, 5.0)));
    }

    // F023: Union contains both operands
    #[test]
    fn test_union() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 10, 5, 5);
        assert_eq!(a.union(&b), Some(Rect::new(0, 0, 15, 15)));
        assert_eq!(a.union(&Rect::new(3, 3, 0, 0)), Some(a));
        assert_eq!(Rect::new(3, 3, 0, 0).union(&b), Some(b));
        assert_eq!(
            Rect::new(3, 3, 0, 0).union(&Rect::new(1, 1, -1, 2)),
            Some(Rect::default())
        );
    }

    #[test]
    fn test_union_wider_than_i32() {
        let left = Rect::new(-1_000_000_000, 0, 10, 10);
        let right = Rect::new(1_000_000_000, 0, 1_000_000_000, 10);
        assert_eq!(left.union(&right), None);
    }

    #[test]
    fn test_can_overflow_threshold() {
        let half = i32::MAX / 2;
        assert!(<i32 as Coord>::can_overflow(&Rect::new(half, 0, 1, 1)));
        assert!(<i32 as Coord>::can_overflow(&Rect::new(0, i32::MIN / 2, 1, 1)));
        assert!(<i32 as Coord>::can_overflow(&Rect::new(0, 0, 1, half)));
        assert!(!<i32 as Coord>::can_overflow(&Rect::new(
            half - 1,
            i32::MIN / 2 + 1,
            half - 1,
            half - 1
        )));
        // Negative extents are empty, not overflow-prone
        assert!(!<i32 as Coord>::can_overflow(&Rect::new(0, 0, i32::MIN, -5)));
        assert!(!<f32 as Coord>::can_overflow(&FRect::new(f32::MAX, 0.0, f32::MAX, 1.0)));
    }

    // F025: Integer rects near the i32 limits are refused, never wrapped
    #[test]
    fn test_operations_refuse_rects_near_i32_limits() {
        let a = Rect::new(0, 0, 10, 10);
        let near_max = Rect::new(i32::MAX - 5, 0, 10, 10);
        let near_min = Rect::new(0, i32::MIN + 3, 10, 10);
        let huge = Rect::new(0, 0, i32::MAX, i32::MAX);

        for r in [near_max, near_min, huge] {
            assert!(!r.has_intersection(&a));
            assert!(!a.has_intersection(&r));
            assert_eq!(r.intersection(&a), None);
            assert_eq!(a.intersection(&r), None);
            assert_eq!(r.union(&a), None);
            assert_eq!(a.union(&r), None);
            assert_eq!(Rect::enclosing_points(&[Point::new(1, 1)], Some(&r)), None);
            assert_eq!(r.line_intersection(Point::new(0, 0), Point::new(5, 5)), None);
        }
    }

    #[test]
    fn test_extremes_without_overflow() {
        let r = Rect::new(i32::MAX - 5, 0, 10, 10);
        assert!(r.contains_point(Point::new(i32::MAX, 5)));
        assert!(!r.contains_point(Point::new(i32::MAX - 6, 5)));
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(Rect::new(i32::MIN, 0, -5, 1).right(), i32::MIN);

        let spread = [Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)];
        assert_eq!(Rect::enclosing_points(&spread, None), None);
        let spread = [Point::new(i32::MIN, i32::MIN), Point::new(-2, -2)];
        assert_eq!(
            Rect::enclosing_points(&spread, None),
            Some(Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX))
        );
    }

    #[test]
    fn test_enclosing_points() {
        let points = [Point::new(1, 2), Point::new(5, -3), Point::new(3, 7)];
        assert_eq!(Rect::enclosing_points(&points, None), Some(Rect::new(1, -3, 5, 11)));
        assert_eq!(Rect::enclosing_points(&points[..1], None), Some(Rect::new(1, 2, 1, 1)));
        assert_eq!(Rect::<i32>::enclosing_points(&[], None), None);
    }

    #[test]
    fn test_enclosing_points_clipped() {
        let points = [Point::new(1, 2), Point::new(5, -3), Point::new(3, 7), Point::new(9, 9)];
        let clip = Rect::new(0, 0, 10, 10);
        assert_eq!(Rect::enclosing_points(&points, Some(&clip)), Some(Rect::new(1, 2, 9, 8)));

        // Far edge is exclusive for integer clips
        let clip = Rect::new(0, 0, 9, 9);
        assert_eq!(Rect::enclosing_points(&points, Some(&clip)), Some(Rect::new(1, 2, 3, 6)));

        let clip = Rect::new(20, 20, 5, 5);
        assert_eq!(Rect::enclosing_points(&points, Some(&clip)), None);
        assert_eq!(Rect::enclosing_points(&points, Some(&Rect::new(0, 0, 0, 10))), None);
    }

    #[test]
    fn test_enclosing_points_float() {
        let points = [FPoint::new(0.5, 1.5), FPoint::new(2.5, 0.5)];
        assert_eq!(
            FRect::enclosing_points(&points, None),
            Some(FRect::new(0.5, 0.5, 2.0, 1.0))
        );
        // Float clips include their far edge
        let clip = FRect::new(0.0, 0.0, 2.5, 2.0);
        assert_eq!(
            FRect::enclosing_points(&points, Some(&clip)),
            Some(FRect::new(0.5, 0.5, 2.0, 1.0))
        );
    }

    #[test]
    fn test_line_fully_inside() {
        let r = Rect::new(0, 0, 10, 10);
        let (a, b) = (Point::new(1, 1), Point::new(8, 9));
        assert_eq!(r.line_intersection(a, b), Some((a, b)));
    }

    #[test]
    fn test_line_fully_outside() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(r.line_intersection(Point::new(-5, -1), Point::new(-1, 20)), None);
        assert_eq!(r.line_intersection(Point::new(10, 0), Point::new(15, 5)), None);
        assert_eq!(
            Rect::new(0, 0, 0, 10).line_intersection(Point::new(0, 0), Point::new(1, 1)),
            None
        );
    }

    #[test]
    fn test_line_horizontal_and_vertical() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(
            r.line_intersection(Point::new(-5, 3), Point::new(20, 3)),
            Some((Point::new(0, 3), Point::new(9, 3)))
        );
        assert_eq!(
            r.line_intersection(Point::new(4, 15), Point::new(4, -2)),
            Some((Point::new(4, 9), Point::new(4, 0)))
        );
    }

    // F024: Clipped line endpoints lie inside the rect
    #[test]
    fn test_line_diagonal() {
        let r = Rect::new(0, 0, 10, 10);
        let clipped = r.line_intersection(Point::new(-5, -5), Point::new(15, 15));
        assert_eq!(clipped, Some((Point::new(0, 0), Point::new(9, 9))));

        // Passes just outside the top-left corner
        assert_eq!(r.line_intersection(Point::new(-5, 4), Point::new(4, -5)), None);

        // Grazes the corner pixel
        assert_eq!(
            r.line_intersection(Point::new(-5, 5), Point::new(5, -5)),
            Some((Point::new(0, 0), Point::new(0, 0)))
        );
    }

    #[test]
    fn test_line_far_endpoints() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(
            r.line_intersection(Point::new(-2_000_000_000, -5), Point::new(2_000_000_000, 15)),
            Some((Point::new(0, 5), Point::new(9, 5)))
        );
        assert_eq!(
            r.line_intersection(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX)),
            Some((Point::new(0, 0), Point::new(9, 9)))
        );

        // Interpolation products here exceed i64
        let far = Rect::new(1_000_000_000, 1_000_000_000, 10, 10);
        assert_eq!(
            far.line_intersection(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX)),
            Some((
                Point::new(1_000_000_000, 1_000_000_000),
                Point::new(1_000_000_009, 1_000_000_009)
            ))
        );
    }

    #[test]
    fn test_line_float() {
        let r = FRect::new(0.0, 0.0, 10.0, 10.0);
        let clipped = r.line_intersection(FPoint::new(-10.0, 5.0), FPoint::new(10.0, 15.0));
        assert_eq!(clipped, Some((FPoint::new(0.0, 10.0), FPoint::new(0.0, 10.0))));

        let clipped = r.line_intersection(FPoint::new(-5.0, 0.0), FPoint::new(15.0, 10.0));
        assert_eq!(clipped, Some((FPoint::new(0.0, 2.5), FPoint::new(10.0, 7.5))));
    }

    #[test]
    fn test_to_frect() {
        let f = Rect::new(1, -2, 3, 4).to_frect();
        assert_eq!(f, FRect::new(1.0, -2.0, 3.0, 4.0));
        assert_eq!(FRect::from(Rect::new(0, 0, 1, 1)), FRect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_layout_matches_native() {
        assert_eq!(std::mem::size_of::<Rect>(), 16);
        assert_eq!(std::mem::size_of::<FRect>(), 16);
        assert_eq!(std::mem::size_of::<Point>(), 8);
        assert_eq!(std::mem::size_of::<FPoint>(), 8);
    }
}
