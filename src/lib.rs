pub mod ops;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("Vector component index {index} out of range for dimension {dimension}")]
    OutOfRange { index: usize, dimension: usize },
    #[error("Vector is not 3D: dimension {0}")]
    VectorNot3D(usize),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use ops::{cross_product, dot_product, max_component_count, scale, subtract, sum};
pub use vector::Vector;
