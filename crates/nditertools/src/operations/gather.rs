//! Gather operations: reading tensor elements through index tensors.

use crate::backend::{GenericBackend, IndexBackend};
use crate::error::TensorError;
use crate::scalar::{IndexScalar, Scalar};
use crate::strides::split_last;
use crate::tensor::DenseTensor;

/// Read `src` at every storage position in `indices`.
///
/// Positions address the storage order of `src`; callers wanting logical
/// order pass a [`DenseTensor::flatten`]ed source.
///
/// The result has the shape of `indices`: `out[...] = src[indices[...]]`.
///
/// # Errors
///
/// `IndexOutOfBounds` or `InvalidArgument` (negative index) if an index
/// does not address `src`.
///
/// # Examples
///
/// ```
/// use nditertools::{DenseTensor, IndexTensor};
/// use nditertools::operations::take;
///
/// let src: DenseTensor<f64> = vec![1.0, 2.0, 3.0].into();
/// let idx: IndexTensor = vec![2, 2, 0].into();
/// assert_eq!(take(&src, &idx).unwrap().data(), &[3.0, 3.0, 1.0]);
/// ```
pub fn take<T: Scalar, I: IndexScalar>(
    src: &DenseTensor<T>,
    indices: &DenseTensor<I>,
) -> Result<DenseTensor<T>, TensorError> {
    let mut result = DenseTensor::zeros(indices.shape());
    GenericBackend::take_into(&mut result, src, indices)?;
    Ok(result)
}

/// Apply permutations along the last axis: `out[..., j] = values[..., perm[..., j]]`.
///
/// `perm` is either 1-D (applied to every batch item of `values`) or has
/// the same leading batch shape as `values`. This is `a[perm]` for a
/// single vector `a`, batched.
///
/// `perm` is not required to be a true permutation; any valid positions
/// are gathered.
///
/// # Errors
///
/// - `RankMismatch` if `values` or `perm` is 0-dim
/// - `ShapeMismatch` if the batch shapes differ
/// - `IndexOutOfBounds` if a position exceeds the last axis of `values`
///
/// # Examples
///
/// ```
/// use nditertools::{DenseTensor, IndexTensor};
/// use nditertools::operations::apply_permutation;
///
/// let a: DenseTensor<i32> = vec![10, 20, 30, 40].into();
/// let perm: IndexTensor = vec![0, 2, 3, 1].into();
/// assert_eq!(apply_permutation(&a, &perm).unwrap().data(), &[10, 30, 40, 20]);
/// ```
pub fn apply_permutation<T: Scalar, I: IndexScalar>(
    values: &DenseTensor<T>,
    perm: &DenseTensor<I>,
) -> Result<DenseTensor<T>, TensorError> {
    let (k, n) = split_last(values.shape()).ok_or(TensorError::RankMismatch {
        expected: 1,
        actual: 0,
    })?;
    let (perm_k, m) = split_last(perm.shape()).ok_or(TensorError::RankMismatch {
        expected: 1,
        actual: 0,
    })?;

    let leading = &values.shape()[..values.ndim() - 1];
    let index = if perm.ndim() == 1 {
        broadcast_rows(perm, k)?
    } else if &perm.shape()[..perm.ndim() - 1] == leading {
        perm.reshape(&[perm_k, m])?
    } else {
        return Err(TensorError::ShapeMismatch {
            expected: k * m,
            actual: perm.len(),
        });
    };

    let src = values.reshape(&[k, n])?;
    let mut result = DenseTensor::zeros(&[k, m]);
    GenericBackend::gather_last_into(&mut result, &src, &index)?;

    let mut out_shape = leading.to_vec();
    out_shape.push(m);
    result.reshape(&out_shape)
}

/// Repeat a 1-D index tensor as the `k` rows of a `(k, m)` tensor.
fn broadcast_rows<I: IndexScalar>(
    row: &DenseTensor<I>,
    k: usize,
) -> Result<DenseTensor<I>, TensorError> {
    let data: Vec<I> = row
        .data()
        .iter()
        .flat_map(|&v| std::iter::repeat_n(v, k))
        .collect();
    DenseTensor::from_vec(data, &[k, row.len()])
}

/// Whether `row` contains every position in `0..row.len()` exactly once.
///
/// # Examples
///
/// ```
/// use nditertools::operations::is_permutation;
///
/// assert!(is_permutation(&[2i64, 0, 1]));
/// assert!(!is_permutation(&[0i64, 0, 1]));
/// assert!(!is_permutation(&[0i64, 3, 1]));
/// ```
pub fn is_permutation<I: IndexScalar>(row: &[I]) -> bool {
    let n = row.len();
    let mut seen = vec![false; n];
    row.iter().all(|&v| match v.to_index() {
        Some(i) if i < n && !seen[i] => {
            seen[i] = true;
            true
        }
        _ => false,
    })
}
