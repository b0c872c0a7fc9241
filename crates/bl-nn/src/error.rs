use thiserror::Error;

#[derive(Error, Debug)]
pub enum NnError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{input} has {got} features, expected {expected}")]
    FeatureMismatch {
        input: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("batch dims differ: input1 {a:?} vs input2 {b:?}")]
    BatchMismatch { a: Vec<usize>, b: Vec<usize> },
    #[error("invalid parameter {name}: expected shape {expected:?}, got {got:?}")]
    ParameterShape {
        name: &'static str,
        expected: Vec<usize>,
        got: Vec<usize>,
    },
    #[error("tensor error: {0}")]
    TensorError(#[from] bl_tensor::TensorError),
}

pub type Result<T> = std::result::Result<T, NnError>;
