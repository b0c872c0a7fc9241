use thiserror::Error;

#[derive(Error, Debug)]
pub enum TensorError {
    #[error("invalid axis {axis} for tensor with {ndim} dimensions")]
    InvalidAxis { axis: usize, ndim: usize },
    #[error("{op}: {name}.len()={got} but expected {expected}")]
    LengthMismatch {
        op: &'static str,
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid value for {label}: {reason}")]
    InvalidValue { label: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, TensorError>;
