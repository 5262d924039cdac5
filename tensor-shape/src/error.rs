use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Invalid dimension of {dimension} for {op}. Tensor has {rank} dimensions.")]
    InvalidDimension {
        op: &'static str,
        dimension: usize,
        rank: usize,
    },

    #[error("Invalid tensor shape slice argument: [{start}, {end}) for tensor with {rank} dimensions.")]
    InvalidSlice {
        start: usize,
        end: usize,
        rank: usize,
    },

    #[error("Buffer of length {actual} is too small to hold {needed} dimensions.")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("Element count of shape {shape} overflows a 64-bit integer.")]
    Overflow { shape: String },
}
