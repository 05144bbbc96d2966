//! Error types for nditertools.

use thiserror::Error;

use crate::device::Device;
use crate::scalar::DType;

/// Errors that can occur in tensor combinatorics operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TensorError {
    /// Shape mismatch between data length and expected size.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Operation requires specific tensor rank.
    #[error("expected tensor of rank {expected}, got rank {actual}")]
    RankMismatch { expected: usize, actual: usize },

    /// Index out of bounds.
    #[error("index out of bounds: index {index} is out of range for dimension {dim_size}")]
    IndexOutOfBounds { index: usize, dim_size: usize },

    /// Wrong number of indices provided.
    #[error("wrong number of indices: expected {expected}, got {actual}")]
    WrongNumberOfIndices { expected: usize, actual: usize },

    /// Requested permutation length is larger than the input set.
    #[error("permutation length {r} exceeds the number of input elements {n}")]
    InvalidLength { r: usize, n: usize },

    /// A row is not a permutation of `0..len`.
    #[error("row {row} is not a permutation of 0..{len}: {values:?}")]
    InvalidPermutation {
        row: usize,
        values: Vec<i64>,
        len: usize,
    },

    /// Malformed argument that has no more specific variant.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Requested element type does not match the tensor element type.
    #[error("dtype mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: DType, actual: DType },

    /// Input tensor lives on a different device than requested.
    #[error("device mismatch: expected {expected}, got {actual}")]
    DeviceMismatch { expected: Device, actual: Device },
}

impl TensorError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        TensorError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether this error belongs to the invalid-argument family
    /// (malformed shapes, out-of-range lengths, malformed permutations).
    ///
    /// Type and device mismatches are reported separately.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            TensorError::TypeMismatch { .. } | TensorError::DeviceMismatch { .. }
        )
    }
}
