//! Tensor conversion operations.

use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Convert a 2D tensor to a nested `Vec<Vec<T>>`.
///
/// Returns data in row-major format (outer vec is rows, inner vec is
/// columns), the natural reading of a product or permutation table.
///
/// # Errors
///
/// Returns error if the tensor is not 2D.
///
/// # Example
///
/// ```
/// use nditertools::Tensor;
/// use nditertools::operations::to_nested_vec_2d;
///
/// // Column-major storage: data = [1, 2, 3, 4, 5, 6] for shape [2, 3]
/// let t = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
/// let nested = to_nested_vec_2d(&t).unwrap();
/// assert_eq!(nested, vec![vec![1, 3, 5], vec![2, 4, 6]]);
/// ```
pub fn to_nested_vec_2d<ElT: Scalar>(
    tensor: &DenseTensor<ElT>,
) -> Result<Vec<Vec<ElT>>, TensorError> {
    Ok(tensor.rows()?.collect())
}
