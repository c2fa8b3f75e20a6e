//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error reported when text can not be read back as a vector
///
/// Numeric operations never produce this, degenerate math shows up as
/// NaN or infinity in the result instead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorError {
    err: String,
}

impl VectorError {
    pub fn new(err: &str) -> VectorError {
        VectorError {
            err: err.to_string(),
        }
    }

    /// error message without the `[VectorError]` prefix
    pub fn message(&self) -> &str {
        &self.err
    }
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[VectorError]: {}", self.err)
    }
}

impl Error for VectorError {}

#[macro_export]
macro_rules! vector_err {
    ( $x:expr ) => {{
        $crate::vector_error::VectorError::new(
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}
