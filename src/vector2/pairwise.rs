//! operations taking a pair of vectors, none of them modify their input

use super::*;

/// Angle between `v1` and `v2`, in radians within `[0, π]`
///
/// Works on normalized copies. The unit dot product is clamped into
/// `[-1, 1]` before `acos`, rounding on (anti)parallel input would
/// otherwise give NaN. A zero vector stays zero through normalization
/// so any angle against it reads as `π/2`.
pub fn angle_between(v1: Vector2, v2: Vector2) -> f64 {
    let mut n1 = v1;
    let mut n2 = v2;
    n1.normalize();
    n2.normalize();
    dot(n1, n2).clamp(-1.0, 1.0).acos()
}

/// 2d cross product, `v1.x * v2.y - v1.y * v2.x`
///
/// Signed area of the parallelogram spanned by the two vectors, positive
/// when `v2` lies counterclockwise of `v1`
pub fn cross(v1: Vector2, v2: Vector2) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Euclidean distance between two points
pub fn distance(v1: Vector2, v2: Vector2) -> f64 {
    let dx = v2.x - v1.x;
    let dy = v2.y - v1.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn dot(v1: Vector2, v2: Vector2) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}
