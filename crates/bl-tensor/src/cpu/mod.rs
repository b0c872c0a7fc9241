pub mod bilinear;

use crate::backend::ComputeBackend;
use crate::error::Result;

/// Pure-Rust CPU compute backend.
///
/// Implements all operations with straightforward loops optimized for
/// correctness rather than peak performance. Intended as a reference
/// implementation and fallback.
#[derive(Debug, Clone)]
pub struct CpuBackend;

impl CpuBackend {
    /// Create a new CPU backend.
    pub fn new() -> Self {
        CpuBackend
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
    }

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
    ) -> Result<Vec<f32>> {
        bilinear::bilinear(x1, x2, weight, bias, n, in1, in2, out)
    }
}
