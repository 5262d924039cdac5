//! Library crate for tensor_shape
//!

use small_vec::SmallVec;

mod constructive;
mod display;
mod error;
mod math;
mod misc;
mod slicing;
mod symbolic;
mod view;

pub use crate::error::ShapeError;
pub use crate::symbolic::{SymbolicDim, SymbolicShape};

pub type Result<T> = std::result::Result<T, error::ShapeError>;

/// Represents the shape of a multi-dimensional tensor: an ordered sequence of per-axis extents.
///
/// A non-negative extent is the concrete size of its axis. A negative extent (canonically `-1`)
/// marks an axis whose size is not statically known. Every size query propagates that: as soon
/// as an unknown axis is part of the queried range, the result is `-1`.
///
/// A shape is an immutable value. Its rank is fixed at construction and slicing always produces
/// a new shape. Extents are stored inline for ranks up to N and spill to the heap beyond that.
#[derive(Clone)]
pub struct Shape<const N: usize = 6> {
    dims: SmallVec<i64, N>,
}
