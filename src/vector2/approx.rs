use float_cmp::{ApproxEq, F64Margin};

use super::*;

/// componentwise approximate equality, both `x` and `y` must be within `margin`
impl ApproxEq for Vector2 {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}

impl Vector2 {
    /// [`ApproxEq::approx_eq`] with `F64Margin::default()`
    pub fn approx_eq_default(&self, other: Vector2) -> bool {
        (*self).approx_eq(other, F64Margin::default())
    }
}
