//! Convenience re-exports.
//!
//! ```
//! use bezier_function::prelude::*;
//!
//! let curve = Curve::new(1, [0.0, 2.0])?;
//! assert_eq!(curve.interpolate(0.25), vec![0.5]);
//! # Ok::<(), CurveError>(())
//! ```

pub use crate::config::{DEFAULT_THRESHOLD, InverseConfig};
pub use crate::curve::Curve;
pub use crate::error::{CurveError, ErrorKind};
pub use crate::inverse::InverseFunction;
