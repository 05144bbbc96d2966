//! Inverse permutations.
//!
//! ```text
//! invert_permutation(perm)            # perm: (..., N)
//!     → view as (K, N), K = product of batch dims
//!     → validate every row
//!     → scatter identity row 0..N at positions perm[k, :]
//!     → reshape back to (..., N)
//! ```

use crate::backend::{GenericBackend, IndexBackend};
use crate::error::TensorError;
use crate::operations::gather::is_permutation;
use crate::scalar::IndexScalar;
use crate::strides::split_last;
use crate::tensor::DenseTensor;

/// Inverse of every permutation along the last axis.
///
/// For each row `perm` of length `N`, returns the unique `iperm` with
/// `iperm[perm[j]] = j` for all `j`. Output has the shape, dtype and device
/// of the input. Applying `perm` and then `iperm` as gathers restores the
/// original order: `a[perm][iperm] == a`.
///
/// # Errors
///
/// - `RankMismatch` if `perm` is 0-dim
/// - `InvalidPermutation` if a row has duplicate or out-of-range values
///
/// # Examples
///
/// ```
/// use nditertools::IndexTensor;
/// use nditertools::operations::invert_permutation;
///
/// let perm: IndexTensor = vec![0, 2, 3, 1].into();
/// let iperm = invert_permutation(&perm).unwrap();
/// assert_eq!(iperm.data(), &[0, 3, 1, 2]);
/// ```
pub fn invert_permutation<I: IndexScalar>(
    perm: &DenseTensor<I>,
) -> Result<DenseTensor<I>, TensorError> {
    let (k, n) = split_last(perm.shape()).ok_or(TensorError::RankMismatch {
        expected: 1,
        actual: 0,
    })?;
    let rows = perm.reshape(&[k, n])?;
    validate_rows(&rows, k, n)?;

    tracing::debug!(batch = k, len = n, "inverting permutations");

    let identity: Vec<I> = (0..n).map(I::from_index).collect();
    let mut iperm = DenseTensor::zeros(&[k, n]);
    GenericBackend::scatter_last_into(&mut iperm, &rows, &identity)?;

    iperm.reshape(perm.shape())
}

fn validate_rows<I: IndexScalar>(
    rows: &DenseTensor<I>,
    k: usize,
    n: usize,
) -> Result<(), TensorError> {
    let data = rows.data();
    let mut row_buf = Vec::with_capacity(n);
    for row in 0..k {
        row_buf.clear();
        row_buf.extend((0..n).map(|j| data[row + j * k]));
        if !is_permutation(&row_buf) {
            tracing::trace!(row, len = n, "malformed permutation row");
            return Err(TensorError::InvalidPermutation {
                row,
                values: row_buf.iter().map(|v| v.to_i64()).collect(),
                len: n,
            });
        }
    }
    Ok(())
}
