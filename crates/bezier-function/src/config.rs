//! Serializable settings for building an [`InverseFunction`](crate::InverseFunction).

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, Result};

/// Default convergence threshold of the inverse search.
pub const DEFAULT_THRESHOLD: f64 = 1e-6;

/// Inverse search configuration.
///
/// Every field has a default, so an empty document deserializes to
/// `threshold = 1e-6` and `target_axis = 0`.
///
/// # Example
///
/// ```
/// use bezier_function::InverseConfig;
///
/// let config: InverseConfig = serde_json::from_str(r#"{ "threshold": 1e-9 }"#)?;
/// assert_eq!(config.target_axis, 0);
/// assert!(config.validate().is_ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InverseConfig {
    /// Width of the parameter interval at which the search stops.
    pub threshold: f64,
    /// Axis treated as the independent variable by
    /// [`InverseFunction::evaluate_point`](crate::InverseFunction::evaluate_point).
    pub target_axis: usize,
}

impl InverseConfig {
    /// Check that the threshold is strictly positive.
    ///
    /// The target axis can only be checked against a curve, which
    /// [`InverseFunction::from_config`](crate::InverseFunction::from_config)
    /// does.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidThreshold`] if the threshold is zero, negative or
    /// NaN.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)
    }
}

impl Default for InverseConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            target_axis: 0,
        }
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    // NaN fails the comparison as well
    if threshold > 0.0 {
        Ok(())
    } else {
        Err(CurveError::InvalidThreshold { threshold })
    }
}
