//! Geometry primitives and the committed canvas camera.
//!
//! Screen space is measured in device-independent pixels with the origin at
//! the top-left of the viewport. Document space is the integer coordinate
//! system placed items live in, with its origin at the viewport center.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        Point { x: self.x + rhs.dx, y: self.y + rhs.dy }
    }
}

impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, rhs: Offset) -> Point {
        Point { x: self.x - rhs.dx, y: self.y - rhs.dy }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        Offset { dx: self.x - rhs.x, dy: self.y - rhs.y }
    }
}

/// A 2D displacement. Used for gesture translations (screen pixels) and for
/// pan and item offsets (document units), depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset { dx: self.dx + rhs.dx, dy: self.dy + rhs.dy }
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset { dx: self.dx - rhs.dx, dy: self.dy - rhs.dy }
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Offset) {
        self.dx += rhs.dx;
        self.dy += rhs.dy;
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset { dx: -self.dx, dy: -self.dy }
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;

    fn mul(self, rhs: f64) -> Offset {
        Offset { dx: self.dx * rhs, dy: self.dy * rhs }
    }
}

impl Div<f64> for Offset {
    type Output = Offset;

    fn div(self, rhs: f64) -> Offset {
        Offset { dx: self.dx / rhs, dy: self.dy / rhs }
    }
}

/// Width and height of a viewport or image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are strictly positive.
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// The center of a rectangle of this size anchored at the origin.
    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.width / 2.0, y: self.height / 2.0 }
    }
}

/// An integer position in document space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DocPoint {
    pub x: i32,
    pub y: i32,
}

impl DocPoint {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Nearest integer point to a document-space offset from the origin.
    /// Out-of-range values saturate.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn round(offset: Offset) -> Self {
        Self { x: offset.dx.round() as i32, y: offset.dy.round() as i32 }
    }
}

/// Committed canvas transform.
///
/// `pan` is stored in document units so that zooming keeps the same document
/// point under the viewport center. `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pan: Offset,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan: Offset::ZERO, zoom: 1.0 }
    }
}

impl Camera {
    /// The camera that fits an image of `image` size into `viewport`,
    /// preserving aspect ratio. Returns `None` when either has zero area.
    #[must_use]
    pub fn fit(image: Size, viewport: Size) -> Option<Self> {
        if !image.has_area() || !viewport.has_area() {
            return None;
        }
        let h_zoom = viewport.width / image.width;
        let v_zoom = viewport.height / image.height;
        Some(Self { pan: Offset::ZERO, zoom: h_zoom.min(v_zoom) })
    }
}
