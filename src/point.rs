use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;

/// A location or displacement in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point{
    pub x: f64,
    pub y: f64,
}

/// Same type, read as a displacement.
pub type Vector = Point;

impl Point {
    pub fn new(x: f64, y: f64) -> Self { Point{x, y} }
    pub fn from_x(x: f64)     -> Self { Point{x, y: 0.0} }
    pub fn origin()           -> Self { Point::default() }

    pub fn r (&self) -> f64 { self.r2().powf(0.5) }
    pub fn r2(&self) -> f64 { self.dot(*self) }

    /// Polar angle in radians, in `(-π, π]`.
    pub fn angle(&self) -> f64 { self.y.atan2(self.x) }

    /// Counter-clockwise rotation about the origin by `theta` radians.
    pub fn rotate(&self, theta: f64) -> Point {
        let (s, c) = theta.sin_cos();
        Point{ x: self.x * c - self.y * s
             , y: self.x * s + self.y * c}
    }

    /// `x₁x₂ + y₁y₂`
    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the cross product of `(x₁, y₁, 0)` and `(x₂, y₂, 0)`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`. The magnitude
    /// is twice the area of the triangle spanned by the origin, `self` and
    /// `other`.
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

pub fn dot  (a: Point, b: Point) -> f64 { a.dot  (b) }
pub fn cross(a: Point, b: Point) -> f64 { a.cross(b) }

impl From<(f64, f64)> for Point {
    fn from((re, im): (f64, f64)) -> Self { Point::new(re, im) }
}

impl From<[f64; 2]> for Point {
    fn from([re, im]: [f64; 2]) -> Self { Point::new(re, im) }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self { (p.x, p.y) }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Point> for Point {
    type Output = Self;

    fn add(self, rhs: Point) -> Self::Output {
        Point{ x: self.x + rhs.x
             , y: self.y + rhs.y}
    }
}

impl Add<f64> for Point {
    type Output = Self;

    fn add(self, rhs: f64) -> Self::Output {
        Point{ x: self.x + rhs
             , y: self.y + rhs}
    }
}

impl Sub<Point> for Point {
    type Output = Self;

    fn sub(self, rhs: Point) -> Self::Output {
        Point{ x: self.x - rhs.x
             , y: self.y - rhs.y}
    }
}

impl Sub<f64> for Point {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self::Output {
        Point{ x: self.x - rhs
             , y: self.y - rhs}
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Point{ x: self.x * rhs
             , y: self.y * rhs}
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Point{ x: -self.x
             , y: -self.y}
    }
}

impl Zero for Point {
    fn zero()        -> Self { Point::origin() }
    fn is_zero(&self) -> bool { self.x.is_zero() && self.y.is_zero() }
}
