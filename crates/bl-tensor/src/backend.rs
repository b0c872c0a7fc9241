use std::fmt::Debug;

use crate::error::Result;

/// Trait for pluggable compute backends.
///
/// All operations work on contiguous row-major f32 slices. Data is passed in
/// as slices and returned as owned vectors.
pub trait ComputeBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "cpu").
    fn name(&self) -> &str;

    /// Batched bilinear form.
    ///
    /// For every row `r < n` and output channel `o < out`:
    ///
    /// ```text
    /// y[r, o] = sum_i sum_j x1[r, i] * weight[o, i, j] * x2[r, j] + bias[o]
    /// ```
    ///
    /// - `x1`: shape [n, in1]
    /// - `x2`: shape [n, in2]
    /// - `weight`: shape [out, in1, in2]
    /// - `bias`: optional, shape [out]
    /// - Returns: shape [n, out]
    #[allow(clippy::too_many_arguments)]
    fn bilinear(
        &self,
        x1: &[f32],
        x2: &[f32],
        weight: &[f32],
        bias: Option<&[f32]>,
        n: usize,
        in1: usize,
        in2: usize,
        out: usize,
    ) -> Result<Vec<f32>>;
}
