//! N-dimensional Bezier curves and their inverse functions
//!
//! This crate evaluates Bezier curves of any degree in any number of
//! dimensions, and approximates the inverse mapping of a curve that is
//! monotonic along one axis, treating it as `y = f(x)`.
//!
//! # Overview
//!
//! - [`Curve`]: immutable control polygon, evaluated with the de Casteljau
//!   algorithm (repeated linear interpolation, no polynomial coefficients)
//! - [`InverseFunction`]: bisects the curve parameter until the chosen
//!   target axis matches a query value
//! - [`InverseConfig`]: serde-friendly settings for the inverse search
//!
//! # Thread Safety
//!
//! Both [`Curve`] and [`InverseFunction`] are immutable and `Send + Sync`.
//! Every evaluation allocates its own scratch buffers, so one instance can
//! serve concurrent callers without locking.
//!
//! # Example
//!
//! ```
//! use bezier_function::{Curve, InverseFunction};
//!
//! // Cubic ease curve through (0,0) and (1,1)
//! let curve = Curve::new(2, [0.0, 0.0, 0.5, 0.0, 0.5, 1.0, 1.0, 1.0])?;
//!
//! // Forward evaluation at a parameter
//! let point = curve.interpolate(0.5);
//! assert_eq!(point, vec![0.5, 0.5]);
//!
//! // Inverse evaluation: y for a given x
//! let function = InverseFunction::planar(curve, 1e-9)?;
//! let y = function.evaluate(0.5)?;
//! assert!((y - 0.5).abs() < 1e-6);
//! # Ok::<(), bezier_function::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod curve;
pub mod error;
pub mod inverse;
pub mod prelude;

pub use config::{DEFAULT_THRESHOLD, InverseConfig};
pub use curve::Curve;
pub use error::{CurveError, ErrorKind, Result};
pub use inverse::InverseFunction;
