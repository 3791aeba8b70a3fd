use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} nodes with stride {y_stride}, y has {y_len} samples")]
    UnequalLength { x_len: usize, y_len: usize, y_stride: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("near-duplicate x-values detected: {x1} and {x2}; repeat a node exactly to mark it confluent")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be non-decreasing")]
    NonIncreasingX,

    #[error("evaluation point {got} out of bounds in ({x_min}, {x_max})")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64},

    #[error("invalid y_stride {got}, must be at least 1")]
    InvalidStride { got: usize },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 }
}
