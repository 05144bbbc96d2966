//! Indexed read/write backend trait.

use crate::error::TensorError;
use crate::scalar::{IndexScalar, Scalar};
use crate::tensor::DenseTensor;

/// Backend trait for gather/scatter kernels.
///
/// Batched kernels work on `(K, N)` matrices, one batch item per row, and
/// index along the last axis. Callers flatten leading batch dimensions
/// into `K` before dispatching.
///
/// Implementations:
/// - `GenericBackend`: naive loops (always available)
pub trait IndexBackend {
    /// Flat gather: `dest[i] = src[indices[i]]` over storage order.
    ///
    /// `dest` and `indices` must have the same number of elements; `src`
    /// is read as a flat sequence.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` or `InvalidArgument` (negative index) if an index
    /// does not address `src`.
    fn take_into<T: Scalar, I: IndexScalar>(
        dest: &mut DenseTensor<T>,
        src: &DenseTensor<T>,
        indices: &DenseTensor<I>,
    ) -> Result<(), TensorError>;

    /// Row-wise gather: `dest[k, j] = src[k, index[k, j]]`.
    ///
    /// `dest` and `index` are `(K, M)`, `src` is `(K, N)`.
    fn gather_last_into<T: Scalar, I: IndexScalar>(
        dest: &mut DenseTensor<T>,
        src: &DenseTensor<T>,
        index: &DenseTensor<I>,
    ) -> Result<(), TensorError>;

    /// Row-wise scatter of one broadcast row:
    /// `dest[k, index[k, j]] = row_values[j]`.
    ///
    /// `dest` and `index` are `(K, N)` and `row_values` has length `N`.
    /// The broadcast row is never materialised `K` times.
    fn scatter_last_into<T: Scalar, I: IndexScalar>(
        dest: &mut DenseTensor<T>,
        index: &DenseTensor<I>,
        row_values: &[T],
    ) -> Result<(), TensorError>;
}
