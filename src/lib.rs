//! Two dimensional vector kit
//!
//! A plain `f64` vector value type with the geometric operations graphics,
//! physics and animation code reach for: magnitude, normalize, dot and cross
//! product, rotation, lerp, heading and angle between two vectors.
//!
//! ```
//! use tvector::Vector2;
//!
//! let mut v = Vector2::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! v.limit(10.0);
//! assert_eq!(v, Vector2::new(6.0, 8.0));
//!
//! let sum = v + Vector2::new(1.0, 1.0) * 2.0;
//! assert_eq!(sum, Vector2::new(8.0, 10.0));
//! assert_eq!(tvector::cross(Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)), 1.0);
//! ```
//!
//! Nothing here returns an error or panics on bad numbers, degenerate input
//! (zero divisor, NaN coords) flows through as IEEE special values. The only
//! fallible operation is reading a vector back from text.
//!
//! # Features
//!
//! - `serde`: derive `Serialize` and `Deserialize` for [`Vector2`]
//! - `tracing`: emit [tracing](https://docs.rs/tracing) debug events on
//!   degenerate operations such as normalizing a zero vector

#[macro_use]
pub mod vector_error;
pub mod vector2;

pub use vector2::*;
pub use vector_error::VectorError;
