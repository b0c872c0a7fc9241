//! `bl-tensor` - Tensor library with pluggable compute backends for bilinear-runtime.
//!
//! This crate provides:
//! - A `Tensor` type backed by CPU storage, with random constructors
//! - A `ComputeBackend` trait for pluggable compute
//! - A reference `CpuBackend` implementation of the bilinear kernel
//! - Shape utilities for splitting batch and feature dimensions

pub mod backend;
pub mod cpu;
pub mod error;
pub mod shape;
pub mod storage;
pub mod tensor;

// Re-export primary types at the crate root for convenience.
pub use backend::ComputeBackend;
pub use cpu::CpuBackend;
pub use error::{Result, TensorError};
pub use shape::Shape;
pub use storage::CpuStorage;
pub use tensor::Tensor;
