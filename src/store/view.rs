use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point or offset on the canvas plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other - self).norm()
    }

    pub fn scale(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        self.scale(k)
    }
}

/// Pan and zoom of the canvas. Substance positions live in space
/// coordinates; the renderer draws in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub origin_offset: Point,
    pub zoom: f64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            origin_offset: Point::ORIGIN,
            zoom: 1.0,
        }
    }
}

impl View {
    pub fn to_view(&self, p: Point) -> Point {
        p * self.zoom + self.origin_offset
    }

    pub fn to_space(&self, p: Point) -> Point {
        (p - self.origin_offset).scale(1.0 / self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(a + Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(a - a, Point::ORIGIN);
        assert_eq!(a * 2.0, Point::new(6.0, 8.0));
        assert_eq!(Point::ORIGIN.distance(a), 5.0);
    }

    #[test]
    fn default_view_is_identity() {
        let v = View::default();
        let p = Point::new(-2.5, 7.0);
        assert_eq!(v.to_view(p), p);
        assert_eq!(v.to_space(p), p);
    }

    #[test]
    fn view_and_space_are_inverse() {
        let v = View {
            origin_offset: Point::new(100.0, -40.0),
            zoom: 2.0,
        };
        let p = Point::new(3.0, 5.0);
        assert_eq!(v.to_view(p), Point::new(106.0, -30.0));
        assert_eq!(v.to_space(v.to_view(p)), p);
    }

    #[test]
    fn view_serializes_camel_case() {
        let json = serde_json::to_value(View::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "originOffset": { "x": 0.0, "y": 0.0 }, "zoom": 1.0 })
        );
    }
}
