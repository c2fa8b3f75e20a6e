//! arithmetic operators
//!
//! All of them are componentwise. Division by a zero scalar is not guarded
//! and yields infinity or NaN like plain `f64` division.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::*;

/// `v1 + v2`
pub fn add(v1: Vector2, v2: Vector2) -> Vector2 {
    Vector2::new(v1.x + v2.x, v1.y + v2.y)
}

/// `v1 - v2`
pub fn sub(v1: Vector2, v2: Vector2) -> Vector2 {
    Vector2::new(v1.x - v2.x, v1.y - v2.y)
}

/// `v * scalar`
pub fn scale(v: Vector2, scalar: f64) -> Vector2 {
    Vector2::new(v.x * scalar, v.y * scalar)
}

/// `v / scalar`
pub fn divide(v: Vector2, scalar: f64) -> Vector2 {
    #[cfg(feature = "tracing")]
    if scalar == 0.0 {
        tracing::debug!(target: "tvector::vector2", "divide {:?} by zero scalar", v);
    }
    Vector2::new(v.x / scalar, v.y / scalar)
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        add(self, rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = add(*self, rhs);
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        sub(self, rhs)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = sub(*self, rhs);
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: f64) -> Vector2 {
        scale(self, rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Vector2 {
        scale(rhs, self)
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = scale(*self, rhs);
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    fn div(self, rhs: f64) -> Vector2 {
        divide(self, rhs)
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        *self = divide(*self, rhs);
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}
