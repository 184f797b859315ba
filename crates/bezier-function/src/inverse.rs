//! Binary-search inversion of a parametric curve into `y = f(x)`.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::{DEFAULT_THRESHOLD, InverseConfig, validate_threshold};
use crate::curve::Curve;
use crate::error::{CurveError, Result};

/// Parametric curve viewed as a function of one of its axes.
///
/// Given `x`, the search bisects the curve parameter `t` until the
/// parameter interval is no wider than `threshold`, and returns the curve
/// point where the target axis is (approximately) `x`. Lower thresholds are
/// more precise and slower; the number of curve evaluations grows with
/// `log2(width / threshold)`.
///
/// # Bracketing
///
/// The initial parameter interval is `[min(x, 0), max(x, 1)]`. It always
/// covers the conventional domain `[0, 1]` and the query itself, which is
/// enough when the target axis spans roughly `[0, 1]` over that domain. It
/// is a heuristic, not a containment proof: curves whose target axis runs
/// far outside `[0, 1]` may have their root outside the bracket.
///
/// # Monotonicity
///
/// Results are only meaningful when the target axis is monotonically
/// increasing in `t` over the bracket. Nothing checks this; for other curves
/// the search converges to some parameter, not necessarily a root.
///
/// # Example
///
/// ```
/// use bezier_function::{Curve, InverseFunction};
///
/// let curve = Curve::new(2, [0.0, 0.0, 0.5, 0.0, 0.5, 1.0, 1.0, 1.0])?;
/// let function = InverseFunction::new(curve.clone());
///
/// let point = curve.interpolate(0.3);
/// let y = function.evaluate(point[0])?;
/// assert!((y - point[1]).abs() < 1e-5);
/// # Ok::<(), bezier_function::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InverseFunction {
    curve: Arc<Curve>,
    threshold: f64,
    target_axis: usize,
}

/// Why a search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchExit {
    /// The bracket shrank to the threshold.
    Converged,
    /// The target axis matched `x` exactly.
    ExactMatch,
    /// `x` or the evaluated component is NaN.
    Unordered,
    /// The midpoint no longer falls strictly inside the bracket.
    Exhausted,
}

impl InverseFunction {
    /// Wrap a curve with the default threshold (`1e-6`) and target axis 0.
    pub fn new(curve: impl Into<Arc<Curve>>) -> Self {
        Self {
            curve: curve.into(),
            threshold: DEFAULT_THRESHOLD,
            target_axis: 0,
        }
    }

    /// Wrap a curve with a custom threshold.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidThreshold`] if `threshold` is not strictly
    /// positive.
    pub fn with_threshold(curve: impl Into<Arc<Curve>>, threshold: f64) -> Result<Self> {
        validate_threshold(threshold).inspect_err(|_| {
            debug!(threshold, "Rejected inverse function threshold");
        })?;

        Ok(Self {
            curve: curve.into(),
            threshold,
            target_axis: 0,
        })
    }

    /// Wrap a 2D curve, rejecting any other dimensionality up front.
    ///
    /// With a planar function [`evaluate`](Self::evaluate) cannot fail.
    ///
    /// # Errors
    ///
    /// * [`CurveError::InvalidThreshold`] if `threshold` is not strictly positive
    /// * [`CurveError::DimensionMismatch`] if the curve is not 2D
    pub fn planar(curve: impl Into<Arc<Curve>>, threshold: f64) -> Result<Self> {
        let function = Self::with_threshold(curve, threshold)?;
        function.require_planar()?;
        Ok(function)
    }

    /// Build from a deserialized [`InverseConfig`].
    ///
    /// # Errors
    ///
    /// * [`CurveError::InvalidThreshold`] if the configured threshold is not
    ///   strictly positive
    /// * [`CurveError::AxisOutOfBounds`] if the configured target axis is not
    ///   a component of the curve
    pub fn from_config(curve: impl Into<Arc<Curve>>, config: &InverseConfig) -> Result<Self> {
        let mut function = Self::with_threshold(curve, config.threshold)?;
        function.check_axis(config.target_axis)?;
        function.target_axis = config.target_axis;
        Ok(function)
    }

    /// The wrapped curve.
    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    /// Convergence threshold of the parameter search.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Axis searched by [`evaluate_point`](Self::evaluate_point).
    pub fn target_axis(&self) -> usize {
        self.target_axis
    }

    /// Approximate `y` for a given `x` on a 2D curve.
    ///
    /// Axis 0 is searched and axis 1 is returned.
    ///
    /// # Errors
    ///
    /// [`CurveError::DimensionMismatch`] if the curve is not 2D.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        self.require_planar()?;
        self.search(x, 0)
            .get(1)
            .copied()
            .ok_or(CurveError::DimensionMismatch {
                expected: 2,
                actual: self.curve.dimensions(),
            })
    }

    /// Find the curve point whose `target_axis` component is `x`.
    ///
    /// The whole point is returned so any other axis can be read from it.
    ///
    /// # Errors
    ///
    /// [`CurveError::AxisOutOfBounds`] if `target_axis` is not less than the
    /// curve's dimensionality.
    pub fn evaluate_axis(&self, x: f64, target_axis: usize) -> Result<Vec<f64>> {
        self.check_axis(target_axis)?;
        Ok(self.search(x, target_axis))
    }

    /// Find the curve point whose configured target axis component is `x`.
    pub fn evaluate_point(&self, x: f64) -> Vec<f64> {
        self.search(x, self.target_axis)
    }

    fn require_planar(&self) -> Result<()> {
        let actual = self.curve.dimensions();
        if actual == 2 {
            Ok(())
        } else {
            Err(CurveError::DimensionMismatch {
                expected: 2,
                actual,
            })
        }
    }

    fn check_axis(&self, axis: usize) -> Result<()> {
        let dimensions = self.curve.dimensions();
        if axis < dimensions {
            Ok(())
        } else {
            Err(CurveError::AxisOutOfBounds { axis, dimensions })
        }
    }

    /// Bisect the parameter range. `axis` must be a component of the curve.
    fn search(&self, x: f64, axis: usize) -> Vec<f64> {
        let mut start = x.min(0.0);
        let mut end = x.max(1.0);
        // The search always starts at t = 0.5, however far the bracket widens
        let mut middle = 0.5;

        let mut point = vec![0.0; self.curve.dimensions()];
        let mut iterations = 0u32;
        let mut exit = SearchExit::Converged;

        while (end - start).abs() > self.threshold {
            self.curve.de_casteljau(middle, &mut point);
            iterations = iterations.saturating_add(1);

            let Some(&value) = point.get(axis) else {
                break;
            };
            match value.partial_cmp(&x) {
                Some(Ordering::Equal) => {
                    trace!(
                        x,
                        axis,
                        t = middle,
                        iterations,
                        exit = ?SearchExit::ExactMatch,
                        "Inverse search finished"
                    );
                    return point;
                }
                Some(Ordering::Less) => start = middle,
                Some(Ordering::Greater) => end = middle,
                None => {
                    exit = SearchExit::Unordered;
                    break;
                }
            }

            let next = start.midpoint(end);
            if next <= start || next >= end {
                exit = SearchExit::Exhausted;
                break;
            }
            middle = next;
        }

        if iterations == 0 {
            self.curve.de_casteljau(middle, &mut point);
        }

        debug!(
            x,
            axis,
            t = middle,
            iterations,
            residual = point.get(axis).map_or(f64::NAN, |v| v - x),
            exit = ?exit,
            "Inverse search finished"
        );
        point
    }
}
