//! two dimensional vector value type

mod approx;
mod ops;
mod pairwise;
mod text;

pub use self::ops::*;
pub use self::pairwise::*;

/// mathmatic 2d vector, coord stored as double precision float
///
/// Copied on assignment. Operations with `&mut self` change the vector in
/// place, everything else returns a new value. Degenerate input is never
/// reported as an error, it comes back as NaN or infinity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// `(0, 0)`, same as `Vector2::default()`
    pub fn zero() -> Self {
        Vector2 { x: 0.0, y: 0.0 }
    }

    /// Euclidean length, `sqrt(x² + y²)`
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rescale to length `new_value` keeping direction
    ///
    /// The vector is normalized first, so a zero vector stays zero whatever
    /// value is assigned. A negative value flips the direction.
    pub fn set_magnitude(&mut self, new_value: f64) {
        self.normalize();
        self.x *= new_value;
        self.y *= new_value;
    }

    /// Angle in radians between `v1` and `v2`, see [`angle_between`]
    pub fn angle_between(v1: Vector2, v2: Vector2) -> f64 {
        pairwise::angle_between(v1, v2)
    }

    /// `x * v.y + y * v.x`
    ///
    /// Note the addition: this is NOT the 2d cross product. The standard
    /// signed area form is the free function [`cross`](crate::cross).
    /// Both exist and callers rely on each of them as written.
    pub fn cross(&self, v: Vector2) -> f64 {
        self.x * v.y + self.y * v.x
    }

    pub fn distance(&self, v: Vector2) -> f64 {
        pairwise::distance(*self, v)
    }

    pub fn dot(&self, v: Vector2) -> f64 {
        pairwise::dot(*self, v)
    }

    /// angle to the positive x axis, `atan2(y, x)`, in `(-π, π]`
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Move toward `v` by `amount`
    ///
    /// `amount` is not clamped, values outside `[0, 1]` extrapolate
    pub fn lerp(&mut self, v: Vector2, amount: f64) {
        self.x += (v.x - self.x) * amount;
        self.y += (v.y - self.y) * amount;
    }

    /// Rescale to exactly `mag`
    ///
    /// Unlike a clamp this also stretches vectors shorter than `mag`.
    pub fn limit(&mut self, mag: f64) {
        self.normalize();
        self.x *= mag;
        self.y *= mag;
    }

    /// Scale to unit length, a zero vector is left untouched
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if mag != 0.0 {
            self.x /= mag;
            self.y /= mag;
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "tvector::vector2",
                "normalize on zero vector, left unchanged"
            );
        }
    }

    /// rotate counterclockwise by `theta` radians
    pub fn rotate(&mut self, theta: f64) {
        let (sin, cos) = theta.sin_cos();
        let temp = self.x;
        self.x = self.x * cos - self.y * sin;
        self.y = temp * sin + self.y * cos;
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from(value: (f64, f64)) -> Self {
        Vector2::new(value.0, value.1)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(value: [f64; 2]) -> Self {
        Vector2::new(value[0], value[1])
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(value: Vector2) -> Self {
        (value.x, value.y)
    }
}

#[cfg(test)]
mod test_vector2 {
    use super::*;
    use float_cmp::{ApproxEq, F64Margin};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    const MARGIN: F64Margin = F64Margin {
        epsilon: 1e-9,
        ulps: 4,
    };

    fn samples() -> Vec<Vector2> {
        vec![
            Vector2::new(3.0, 4.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, -2.5),
            Vector2::new(-7.25, 3.5),
            Vector2::new(-1.0, -1.0),
            Vector2::new(1e-12, 2e-12),
            Vector2::new(12345.0, -6789.0),
        ]
    }

    #[test]
    fn test_construct() {
        let v = Vector2::new(1.5, -2.0);
        assert_eq!(v.x, 1.5);
        assert_eq!(v.y, -2.0);
        assert_eq!(Vector2::zero(), Vector2::default());
        assert_eq!(Vector2::zero(), Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vector2::zero().magnitude(), 0.0);
        for v in samples() {
            assert!(v.dot(v).approx_eq(v.magnitude() * v.magnitude(), MARGIN));
        }
    }

    #[test]
    fn test_set_magnitude() {
        let mut v = Vector2::new(3.0, 4.0);
        v.set_magnitude(10.0);
        assert!(v.approx_eq(Vector2::new(6.0, 8.0), MARGIN));

        let mut zero = Vector2::zero();
        zero.set_magnitude(5.0);
        assert_eq!(zero, Vector2::zero());

        let mut flipped = Vector2::new(0.0, 2.0);
        flipped.set_magnitude(-3.0);
        assert!(flipped.approx_eq(Vector2::new(0.0, -3.0), MARGIN));
    }

    #[test]
    fn test_instance_cross_is_additive() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(3.0, 4.0);
        assert_eq!(v1.cross(v2), 10.0);
        assert_eq!(pairwise::cross(v1, v2), -2.0);
        assert_eq!(crate::cross(v1, v2), -2.0);
    }

    #[test]
    fn test_instance_distance_and_dot() {
        let v1 = Vector2::new(1.0, 1.0);
        let v2 = Vector2::new(4.0, 5.0);
        assert_eq!(v1.distance(v2), 5.0);
        assert_eq!(v2.distance(v1), 5.0);
        assert_eq!(v1.dot(v2), 9.0);
        assert_eq!(v1.distance(v1), 0.0);
    }

    #[test]
    fn test_heading() {
        assert_eq!(Vector2::new(1.0, 0.0).heading(), 0.0);
        assert!(Vector2::new(0.0, 2.0).heading().approx_eq(FRAC_PI_2, MARGIN));
        assert!(Vector2::new(-1.0, 0.0).heading().approx_eq(PI, MARGIN));
        assert!(Vector2::new(0.0, -1.0).heading().approx_eq(-FRAC_PI_2, MARGIN));
    }

    #[test]
    fn test_lerp() {
        let target = Vector2::new(10.0, -4.0);
        for v in samples() {
            let mut start = v;
            start.lerp(target, 0.0);
            assert!(start.approx_eq(v, MARGIN));

            let mut end = v;
            end.lerp(target, 1.0);
            assert!(end.approx_eq(target, MARGIN));
        }

        let mut half = Vector2::new(0.0, 0.0);
        half.lerp(Vector2::new(2.0, 4.0), 0.5);
        assert_eq!(half, Vector2::new(1.0, 2.0));

        // amounts outside [0, 1] extrapolate
        let mut beyond = Vector2::new(0.0, 0.0);
        beyond.lerp(Vector2::new(2.0, 4.0), 1.5);
        assert_eq!(beyond, Vector2::new(3.0, 6.0));
    }

    #[test]
    fn test_limit_always_rescales() {
        let mut short = Vector2::new(2.0, 0.0);
        short.limit(5.0);
        assert_eq!(short, Vector2::new(5.0, 0.0));

        let mut long = Vector2::new(30.0, 40.0);
        long.limit(5.0);
        assert!(long.approx_eq(Vector2::new(3.0, 4.0), MARGIN));

        let mut zero = Vector2::zero();
        zero.limit(5.0);
        assert_eq!(zero, Vector2::zero());
    }

    #[test]
    fn test_normalize() {
        for v in samples() {
            let mut n = v;
            n.normalize();
            assert!(n.magnitude().approx_eq(1.0, MARGIN));
            assert!(n.heading().approx_eq(v.heading(), MARGIN));
        }

        let mut zero = Vector2::zero();
        zero.normalize();
        assert_eq!(zero, Vector2::zero());

        // no epsilon, tiny vectors still normalize
        let mut tiny = Vector2::new(0.0, 1e-150);
        tiny.normalize();
        assert!(tiny.approx_eq(Vector2::new(0.0, 1.0), MARGIN));
    }

    #[test]
    fn test_rotate() {
        let mut v = Vector2::new(1.0, 1.0);
        v.rotate(PI);
        assert!(v.approx_eq(Vector2::new(-1.0, -1.0), MARGIN));

        let mut quarter = Vector2::new(1.0, 0.0);
        quarter.rotate(FRAC_PI_2);
        assert!(quarter.approx_eq(Vector2::new(0.0, 1.0), MARGIN));

        for v in samples() {
            for theta in [0.3, -1.2, FRAC_PI_3, 2.0 * PI, 7.5] {
                let mut r = v;
                r.rotate(theta);
                assert!(r.magnitude().approx_eq(v.magnitude(), MARGIN));
                r.rotate(-theta);
                assert!(r.approx_eq(v, MARGIN));
            }
        }
    }

    #[test]
    fn test_conversions() {
        let v: Vector2 = (1.0, 2.0).into();
        assert_eq!(v, Vector2::new(1.0, 2.0));
        assert_eq!(Vector2::from([3.0, -4.0]), Vector2::new(3.0, -4.0));
        let t: (f64, f64) = Vector2::new(5.0, 6.0).into();
        assert_eq!(t, (5.0, 6.0));
    }

    #[test]
    fn test_copy_semantics() {
        let original = Vector2::new(3.0, 4.0);
        let mut copy = original;
        copy.normalize();
        assert_eq!(original, Vector2::new(3.0, 4.0));
        assert_ne!(copy, original);
    }
}
