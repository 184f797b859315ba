//! N-dimensional Bezier curve evaluated with the de Casteljau algorithm.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CurveError, Result};

/// Multi-dimensional Bezier curve.
///
/// A curve is defined by `point_count` control points of `dimensions`
/// components each, stored flattened: `data[i * dimensions + d]` is component
/// `d` of control point `i`. A curve with `point_count` control points has
/// degree `point_count - 1`.
///
/// The curve is immutable once built. All invariants are checked by
/// [`Curve::new`] (and by deserialization, which goes through the same
/// validation), so every `Curve` value has at least one dimension and at
/// least two complete control points.
///
/// # Example
///
/// ```
/// use bezier_function::Curve;
///
/// // Quadratic 2D curve: three control points of two components each.
/// let curve = Curve::new(2, [0.0, 0.0, 0.5, 1.0, 1.0, 0.0])?;
/// assert_eq!(curve.point_count(), 3);
///
/// let point = curve.interpolate(0.5);
/// assert_eq!(point, vec![0.5, 0.5]);
/// # Ok::<(), bezier_function::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCurve", into = "RawCurve")]
pub struct Curve {
    dimensions: usize,
    data: Vec<f64>,
}

/// Unvalidated serde shape of a [`Curve`].
#[derive(Serialize, Deserialize)]
struct RawCurve {
    dimensions: usize,
    data: Vec<f64>,
}

impl Curve {
    /// Create a curve from flattened control point coordinates.
    ///
    /// # Arguments
    ///
    /// * `dimensions` - Number of components per control point (at least 1)
    /// * `data` - Flattened coordinates, a multiple of `dimensions` long and
    ///   holding at least two control points
    ///
    /// # Errors
    ///
    /// * [`CurveError::ZeroDimensions`] if `dimensions` is 0
    /// * [`CurveError::UnevenData`] if `data` does not split into whole points
    /// * [`CurveError::TooFewControlPoints`] if fewer than two points are given
    pub fn new(dimensions: usize, data: impl Into<Vec<f64>>) -> Result<Self> {
        let data = data.into();

        if dimensions == 0 {
            debug!("Rejected curve with zero dimensions");
            return Err(CurveError::ZeroDimensions);
        }
        if data.len() % dimensions != 0 {
            debug!(len = data.len(), dimensions, "Rejected curve with uneven data");
            return Err(CurveError::UnevenData {
                len: data.len(),
                dimensions,
            });
        }

        let points = data.len() / dimensions;
        if points < 2 {
            debug!(points, "Rejected curve with too few control points");
            return Err(CurveError::TooFewControlPoints { points });
        }

        Ok(Self { dimensions, data })
    }

    /// Number of components per control point.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of control points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.data.len() / self.dimensions
    }

    /// Flattened control point coordinates.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over the control points, one `dimensions`-long slice each.
    pub fn control_points(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.dimensions)
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// `t` is not clamped: values outside `[0, 1]` extrapolate the repeated
    /// linear interpolation beyond the end points. NaN and infinities
    /// propagate through the arithmetic.
    pub fn interpolate(&self, t: f64) -> Vec<f64> {
        let mut point = vec![0.0; self.dimensions];
        self.de_casteljau(t, &mut point);
        point
    }

    /// Evaluate the curve at parameter `t`, writing the point into
    /// `out[offset..offset + dimensions]`.
    ///
    /// Values of `out` outside that range are left untouched.
    ///
    /// # Errors
    ///
    /// [`CurveError::OutputBufferTooSmall`] if `out` has fewer than
    /// `dimensions` values starting at `offset`.
    pub fn interpolate_into(&self, t: f64, out: &mut [f64], offset: usize) -> Result<()> {
        let len = out.len();
        let required = self.dimensions;
        let target = offset
            .checked_add(required)
            .and_then(|end| out.get_mut(offset..end))
            .ok_or(CurveError::OutputBufferTooSmall {
                len,
                offset,
                required,
            })?;

        self.de_casteljau(t, target);
        Ok(())
    }

    /// Reduce the control polygon one point per round until one remains.
    ///
    /// Round `k` turns `point_count - k` points into `point_count - k - 1`
    /// by interpolating each consecutive pair. The first round reads the
    /// control points directly; later rounds alternate between two scratch
    /// buffers, so at most `(2 * point_count - 3) * dimensions` values are
    /// allocated per call.
    ///
    /// Writes the first `dimensions` values of `out`.
    pub(crate) fn de_casteljau(&self, t: f64, out: &mut [f64]) {
        let stride = self.dimensions;
        let mut live = self.data.len().saturating_sub(stride);

        let mut front = vec![0.0; live];
        lerp_round(&self.data, &mut front, stride, live, t);

        let mut back = vec![0.0; live.saturating_sub(stride)];
        while live > stride {
            live -= stride;
            lerp_round(&front, &mut back, stride, live, t);
            std::mem::swap(&mut front, &mut back);
        }

        for (dst, src) in out.iter_mut().zip(&front) {
            *dst = *src;
        }
    }
}

/// One de Casteljau round: `target[i] = lerp(source[i], source[i + stride])`
/// for the first `count` values.
#[inline]
fn lerp_round(source: &[f64], target: &mut [f64], stride: usize, count: usize, t: f64) {
    let pairs = source.iter().zip(source.iter().skip(stride));
    for (dst, (a, b)) in target.iter_mut().zip(pairs).take(count) {
        *dst = lerp(*a, *b, t);
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

impl TryFrom<RawCurve> for Curve {
    type Error = CurveError;

    fn try_from(raw: RawCurve) -> Result<Self> {
        Self::new(raw.dimensions, raw.data)
    }
}

impl From<Curve> for RawCurve {
    fn from(curve: Curve) -> Self {
        Self {
            dimensions: curve.dimensions,
            data: curve.data,
        }
    }
}
