use rand::Rng;
use rand_distr::{Distribution, StandardNormal, Uniform};

use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::storage::CpuStorage;

/// A tensor backed by CPU storage.
///
/// Holds contiguous, row-major f32 data with an associated shape.
/// Computation is dispatched to a `ComputeBackend` by the layers that own
/// the tensors.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    storage: CpuStorage,
    shape: Shape,
}

impl Tensor {
    /// Create a new tensor from f32 data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != shape.numel()`. Use [`Tensor::try_new`] for
    /// data that has not been validated.
    pub fn new(data: Vec<f32>, shape: impl Into<Shape>) -> Self {
        match Self::try_new(data, shape) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible counterpart of [`Tensor::new`].
    pub fn try_new(data: Vec<f32>, shape: impl Into<Shape>) -> Result<Self> {
        let shape = shape.into();
        let storage = CpuStorage::from_f32_vec(data);
        if storage.len() != shape.numel() {
            return Err(TensorError::LengthMismatch {
                op: "tensor",
                name: "data",
                expected: shape.numel(),
                got: storage.len(),
            });
        }
        Ok(Tensor { storage, shape })
    }

    fn from_parts(data: Vec<f32>, shape: Shape) -> Self {
        Tensor {
            storage: CpuStorage::from_f32_vec(data),
            shape,
        }
    }

    /// Create a zero-filled tensor with the given shape.
    pub fn zeros(shape: impl Into<Shape>) -> Self {
        Self::full(shape, 0.0)
    }

    /// Create a tensor filled with ones with the given shape.
    pub fn ones(shape: impl Into<Shape>) -> Self {
        Self::full(shape, 1.0)
    }

    /// Create a tensor with every element set to `value`.
    pub fn full(shape: impl Into<Shape>, value: f32) -> Self {
        let shape = shape.into();
        Self::from_parts(vec![value; shape.numel()], shape)
    }

    /// Sample every element from the standard normal distribution N(0, 1).
    pub fn randn<R: Rng + ?Sized>(shape: impl Into<Shape>, rng: &mut R) -> Self {
        let shape = shape.into();
        let data: Vec<f32> = StandardNormal
            .sample_iter(&mut *rng)
            .take(shape.numel())
            .collect();
        Self::from_parts(data, shape)
    }

    /// Sample every element uniformly from `[low, high)`.
    ///
    /// # Errors
    /// Returns `InvalidValue` unless `low < high` and both bounds are finite.
    pub fn rand_uniform<R: Rng + ?Sized>(
        shape: impl Into<Shape>,
        low: f32,
        high: f32,
        rng: &mut R,
    ) -> Result<Self> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(TensorError::InvalidValue {
                label: "rand_uniform bounds",
                reason: format!("need finite low < high, got [{}, {})", low, high),
            });
        }
        let shape = shape.into();
        let dist = Uniform::new(low, high);
        let data: Vec<f32> = dist.sample_iter(&mut *rng).take(shape.numel()).collect();
        Ok(Self::from_parts(data, shape))
    }

    /// Returns a reference to the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Same as [`Tensor::shape`]; both spellings are common in tensor APIs.
    pub fn size(&self) -> &Shape {
        &self.shape
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Returns the underlying data as an f32 slice.
    pub fn data_f32(&self) -> &[f32] {
        self.storage.as_f32_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_tensor() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], [2, 3]);
        assert_eq!(t.shape().dims(), &[2, 3]);
        assert_eq!(t.numel(), 6);
        assert_eq!(t.data_f32(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    #[should_panic]
    fn test_new_shape_mismatch_panics() {
        let _t = Tensor::new(vec![1.0, 2.0], [3]);
    }

    #[test]
    fn test_try_new_mismatch() {
        assert!(matches!(
            Tensor::try_new(vec![1.0, 2.0], [3]),
            Err(TensorError::LengthMismatch { expected: 3, got: 2, .. })
        ));
        assert!(Tensor::try_new(vec![1.0, 2.0, 3.0], [3]).is_ok());
    }

    #[test]
    fn test_fill_constructors() {
        assert_eq!(Tensor::zeros([2, 3]).data_f32(), &[0.0; 6]);
        assert_eq!(Tensor::ones([3]).data_f32(), &[1.0, 1.0, 1.0]);
        assert_eq!(Tensor::full([2], -0.5).data_f32(), &[-0.5, -0.5]);
    }

    #[test]
    fn test_size_equals_shape() {
        let t = Tensor::zeros([128, 40]);
        assert_eq!(t.size(), t.shape());
        assert_eq!(t.size().to_string(), "[128, 40]");
    }

    #[test]
    fn test_randn_shape_and_seed() {
        let a = Tensor::randn([128, 20], &mut StdRng::seed_from_u64(7));
        let b = Tensor::randn([128, 20], &mut StdRng::seed_from_u64(7));
        assert_eq!(a.shape().dims(), &[128, 20]);
        assert_eq!(a.numel(), 2560);
        assert_eq!(a, b);

        // Sample mean of 2560 N(0,1) draws stays well inside +-0.2.
        let mean: f32 = a.data_f32().iter().sum::<f32>() / a.numel() as f32;
        assert!(mean.abs() < 0.2, "mean = {}", mean);
    }

    #[test]
    fn test_rand_uniform_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let t = Tensor::rand_uniform([10, 10], -0.25, 0.25, &mut rng).unwrap();
        assert!(t.data_f32().iter().all(|v| (-0.25..0.25).contains(v)));
        assert!(Tensor::rand_uniform([2], 1.0, 1.0, &mut rng).is_err());
        assert!(Tensor::rand_uniform([2], f32::NEG_INFINITY, 0.0, &mut rng).is_err());
    }
}
