use bl_tensor::Shape;

use crate::error::{NnError, Result};

/// Hyperparameters of a [`crate::Bilinear`] layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BilinearConfig {
    /// Size of each first input sample.
    pub in1_features: usize,
    /// Size of each second input sample.
    pub in2_features: usize,
    /// Number of output channels, i.e. matrices `A(o)` in the weight stack.
    pub out_features: usize,
    /// Whether an additive bias of length `out_features` is learned.
    pub bias: bool,
}

impl BilinearConfig {
    /// A config with bias enabled.
    pub fn new(in1_features: usize, in2_features: usize, out_features: usize) -> Self {
        BilinearConfig {
            in1_features,
            in2_features,
            out_features,
            bias: true,
        }
    }

    pub fn with_bias(mut self, bias: bool) -> Self {
        self.bias = bias;
        self
    }

    /// Checks that every feature count is non-zero.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("in1_features", self.in1_features),
            ("in2_features", self.in2_features),
            ("out_features", self.out_features),
        ] {
            if value == 0 {
                return Err(NnError::InvalidConfig(format!("{} must be > 0", name)));
            }
        }
        Ok(())
    }

    /// Shape of the weight stack: `[out_features, in1_features, in2_features]`.
    pub fn weight_shape(&self) -> Shape {
        Shape::from([self.out_features, self.in1_features, self.in2_features])
    }

    /// Weight elements plus bias elements.
    pub fn num_parameters(&self) -> usize {
        let bias = if self.bias { self.out_features } else { 0 };
        self.weight_shape().numel() + bias
    }

    /// Half-width `k` of the `U(-k, k)` init range, `1 / sqrt(in1_features)`.
    pub fn init_bound(&self) -> f32 {
        1.0 / (self.in1_features as f32).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = BilinearConfig::new(20, 30, 40);
        assert!(c.bias);
        assert!(c.validate().is_ok());
        assert_eq!(c.weight_shape().dims(), &[40, 20, 30]);
        assert_eq!(c.num_parameters(), 40 * 20 * 30 + 40);
    }

    #[test]
    fn test_without_bias() {
        let c = BilinearConfig::new(2, 3, 4).with_bias(false);
        assert_eq!(c.num_parameters(), 24);
    }

    #[test]
    fn test_zero_features_rejected() {
        let err = BilinearConfig::new(20, 0, 40).validate().unwrap_err();
        assert!(err.to_string().contains("in2_features"));
        assert!(BilinearConfig::new(1, 1, 0).validate().is_err());
    }

    #[test]
    fn test_init_bound() {
        assert!((BilinearConfig::new(4, 1, 1).init_bound() - 0.5).abs() < 1e-7);
    }
}
