//! `bl-nn` - Two-input neural network layers for bilinear-runtime.
//!
//! The main type is [`Bilinear`], which maps a pair of feature vectors
//! `(x1, x2)` to `x1ᵗ A(o) x2 + b(o)` for each output channel `o`.

pub mod bilinear;
pub mod config;
pub mod error;
pub mod module;

pub use bilinear::Bilinear;
pub use config::BilinearConfig;
pub use error::{NnError, Result};
pub use module::PairwiseModule;
