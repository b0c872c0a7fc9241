use std::fmt;

use bl_tensor::{ComputeBackend, Shape, Tensor};
use rand::Rng;
use tracing::debug;

use crate::config::BilinearConfig;
use crate::error::{NnError, Result};
use crate::module::PairwiseModule;

/// Bilinear transform `y = x1ᵗ A x2 + b`.
///
/// The weight is a stack of `out_features` matrices, stored row-major as
/// `[out_features, in1_features, in2_features]`. Output channel `o` is the
/// quadratic form `x1ᵗ A(o) x2 + b(o)`.
#[derive(Debug, Clone)]
pub struct Bilinear {
    config: BilinearConfig,
    weight: Tensor,
    bias: Option<Tensor>,
}

impl Bilinear {
    /// Create a layer with parameters drawn from `U(-k, k)`, `k = 1/sqrt(in1_features)`.
    pub fn new<R: Rng + ?Sized>(config: BilinearConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let (weight, bias) = Self::init_parameters(&config, rng)?;
        debug!(
            in1 = config.in1_features,
            in2 = config.in2_features,
            out = config.out_features,
            bias = config.bias,
            "initialized bilinear layer"
        );
        Ok(Bilinear {
            config,
            weight,
            bias,
        })
    }

    /// Build a layer from explicit parameters.
    ///
    /// `weight` must be 3-D `[out, in1, in2]` with non-zero dims; `bias`, when
    /// present, must be `[out]`.
    pub fn from_parts(weight: Tensor, bias: Option<Tensor>) -> Result<Self> {
        let dims = weight.shape().dims();
        if dims.len() != 3 {
            return Err(NnError::InvalidInput(format!(
                "weight must be 3-D [out, in1, in2], got {:?}",
                dims
            )));
        }
        let config = BilinearConfig::new(dims[1], dims[2], dims[0]).with_bias(bias.is_some());
        config.validate()?;

        if let Some(b) = &bias {
            if b.shape().dims() != [config.out_features] {
                return Err(NnError::ParameterShape {
                    name: "bias",
                    expected: vec![config.out_features],
                    got: b.shape().dims().to_vec(),
                });
            }
        }

        Ok(Bilinear {
            config,
            weight,
            bias,
        })
    }

    /// Re-draw weight and bias from the default init distribution.
    pub fn reset_parameters<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let (weight, bias) = Self::init_parameters(&self.config, rng)?;
        self.weight = weight;
        self.bias = bias;
        Ok(())
    }

    fn init_parameters<R: Rng + ?Sized>(
        config: &BilinearConfig,
        rng: &mut R,
    ) -> Result<(Tensor, Option<Tensor>)> {
        let k = config.init_bound();
        let weight = Tensor::rand_uniform(config.weight_shape(), -k, k, rng)?;
        let bias = if config.bias {
            Some(Tensor::rand_uniform([config.out_features], -k, k, rng)?)
        } else {
            None
        };
        Ok((weight, bias))
    }

    pub fn config(&self) -> &BilinearConfig {
        &self.config
    }

    pub fn weight(&self) -> &Tensor {
        &self.weight
    }

    pub fn bias(&self) -> Option<&Tensor> {
        self.bias.as_ref()
    }

    /// Validates one input and returns its leading (batch) shape.
    fn batch_shape(input: &'static str, x: &Tensor, features: usize) -> Result<Shape> {
        let got = x
            .shape()
            .last()
            .ok_or_else(|| NnError::InvalidInput(format!("{} must have at least 1 dim", input)))?;
        if got != features {
            return Err(NnError::FeatureMismatch {
                input,
                expected: features,
                got,
            });
        }
        Ok(x.shape().leading(1)?)
    }
}

impl PairwiseModule for Bilinear {
    fn name(&self) -> &str {
        "bilinear"
    }

    /// `x1` is `(*, in1)`, `x2` is `(*, in2)`, the result is `(*, out)`.
    ///
    /// The leading dims must match exactly; they are not broadcast.
    fn forward(
        &self,
        x1: &Tensor,
        x2: &Tensor,
        backend: &dyn ComputeBackend,
    ) -> Result<Tensor> {
        let cfg = &self.config;
        let batch = Self::batch_shape("input1", x1, cfg.in1_features)?;
        let batch2 = Self::batch_shape("input2", x2, cfg.in2_features)?;
        if batch != batch2 {
            return Err(NnError::BatchMismatch {
                a: batch.dims().to_vec(),
                b: batch2.dims().to_vec(),
            });
        }

        let n = batch.numel();
        debug!(backend = backend.name(), rows = n, "bilinear forward");
        let y = backend.bilinear(
            x1.data_f32(),
            x2.data_f32(),
            self.weight.data_f32(),
            self.bias.as_ref().map(|b| b.data_f32()),
            n,
            cfg.in1_features,
            cfg.in2_features,
            cfg.out_features,
        )?;
        Ok(Tensor::try_new(y, batch.push(cfg.out_features))?)
    }

    fn out_features(&self) -> usize {
        self.config.out_features
    }

    fn num_parameters(&self) -> usize {
        self.config.num_parameters()
    }
}

impl fmt::Display for Bilinear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bilinear(in1_features={}, in2_features={}, out_features={}, bias={})",
            self.config.in1_features,
            self.config.in2_features,
            self.config.out_features,
            self.config.bias
        )
    }
}
