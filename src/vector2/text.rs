//! text form of a vector, `(x, y)`

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::*;
use crate::vector_error::VectorError;

impl Display for Vector2 {
    /// `(x, y)`, a precision like `{:.2}` applies to both coords
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

fn parse_coord(s: &str, axis: &str) -> Result<f64, VectorError> {
    let coord = s.trim();
    coord.parse::<f64>().map_err(|err| {
        vector_err!(&format!("not valid {} coord `{}`: {}", axis, coord, err))
    })
}

impl FromStr for Vector2 {
    type Err = VectorError;

    /// accepts `(x, y)` or bare `x, y`, whitespace around any part is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = match (trimmed.strip_prefix('('), trimmed.ends_with(')')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => trimmed,
            _ => {
                return Err(vector_err!(&format!(
                    "unbalanced parenthesis in vector `{}`",
                    trimmed
                )))
            }
        };

        let mut parts = body.split(',');
        let (x, y) = match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => (x, y),
            _ => {
                return Err(vector_err!(&format!(
                    "vector need exactly two comma separated coords, got `{}`",
                    trimmed
                )))
            }
        };

        Ok(Vector2::new(parse_coord(x, "x")?, parse_coord(y, "y")?))
    }
}
