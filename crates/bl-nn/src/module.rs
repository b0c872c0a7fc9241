use bl_tensor::{ComputeBackend, Tensor};

/// Trait for layers that combine two inputs into one output.
///
/// Implementations hold their own parameters and dispatch the arithmetic to
/// the supplied backend, so the same layer can run on any `ComputeBackend`.
pub trait PairwiseModule: Send + Sync {
    /// Returns the name of this layer (e.g., "bilinear").
    fn name(&self) -> &str;

    /// Run the layer on `x1` and `x2`.
    ///
    /// Both inputs share their leading (batch) dimensions; the output keeps
    /// those leading dimensions and replaces the feature axis with
    /// [`PairwiseModule::out_features`].
    fn forward(
        &self,
        x1: &Tensor,
        x2: &Tensor,
        backend: &dyn ComputeBackend,
    ) -> crate::Result<Tensor>;

    /// Size of the output feature axis.
    fn out_features(&self) -> usize;

    /// Total number of learnable scalars.
    fn num_parameters(&self) -> usize;
}
