//! Dense n-dimensional tensor type.
//!
//! A tensor is a flat, device-tagged storage plus a shape interpreted in
//! column-major order. Reshaping is zero-copy; mutation through a shared
//! view detaches it first. Flattening follows the logical row-major order
//! and only copies when that differs from storage order.

use crate::device::Device;
use crate::error::TensorError;
use crate::scalar::{DType, IndexScalar, Scalar};
use crate::storage::Dense;
use crate::strides::{cartesian_to_linear, checked_numel, compute_strides, linear_to_cartesian};

/// A dense n-dimensional tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<ElT: Scalar> {
    storage: Dense<ElT>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

/// Dense tensor; the only storage layout this crate provides.
pub type DenseTensor<ElT> = Tensor<ElT>;

/// Tensor of `i64` positions, the canonical permutation/index tensor.
pub type IndexTensor = Tensor<i64>;

fn expected_len(shape: &[usize]) -> Result<usize, TensorError> {
    checked_numel(shape).ok_or_else(|| {
        TensorError::invalid_argument(format!("shape {shape:?} overflows usize"))
    })
}

impl<ElT: Scalar> Tensor<ElT> {
    /// Create a new tensor with the given shape, zero-initialized.
    ///
    /// # Panics
    ///
    /// Panics if the element count of `shape` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nditertools::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::zeros(&[2, 3, 4]);
    /// assert_eq!(t.shape(), &[2, 3, 4]);
    /// assert_eq!(t.len(), 24);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, ElT::zero())
    }

    /// Create a tensor filled with a constant value.
    ///
    /// # Panics
    ///
    /// Panics if the element count of `shape` overflows `usize`, like
    /// `vec!` does for an impossible capacity.
    pub fn full(shape: &[usize], value: ElT) -> Self {
        let len = checked_numel(shape)
            .unwrap_or_else(|| panic!("shape {shape:?} overflows usize"));
        Self {
            storage: Dense::from_vec(vec![value; len]),
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    /// Create tensor from data and shape.
    ///
    /// Data is expected to be in column-major order.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::ShapeMismatch` if data length doesn't match shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use nditertools::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(t.get(&[1, 0]), Some(&2)); // column-major
    /// assert_eq!(t.get(&[0, 1]), Some(&3));
    /// ```
    pub fn from_vec(data: Vec<ElT>, shape: &[usize]) -> Result<Self, TensorError> {
        let expected = expected_len(shape)?;
        if data.len() != expected {
            return Err(TensorError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            storage: Dense::from_vec(data),
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        })
    }

    /// Build a 2-D tensor from rows of equal length.
    ///
    /// An empty slice of rows yields shape `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::ShapeMismatch` if the rows are ragged, and
    /// `InvalidArgument` if the element count overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use nditertools::Tensor;
    ///
    /// let t = Tensor::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(t.shape(), &[2, 3]);
    /// assert_eq!(t.get(&[1, 0]), Some(&4));
    /// ```
    pub fn from_rows<R: AsRef<[ElT]>>(rows: &[R]) -> Result<Self, TensorError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let len = expected_len(&[nrows, ncols])?;
        let mut data = vec![ElT::zero(); len];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(TensorError::ShapeMismatch {
                    expected: ncols,
                    actual: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                data[i + j * nrows] = value;
            }
        }
        Self::from_vec(data, &[nrows, ncols])
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the rank (number of dimensions).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Get total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Device holding the tensor's elements.
    #[inline]
    pub fn device(&self) -> Device {
        self.storage.device()
    }

    #[inline]
    pub fn dtype(&self) -> DType {
        ElT::DTYPE
    }

    /// Underlying data in storage (column-major) order.
    #[inline]
    pub fn data(&self) -> &[ElT] {
        self.storage.as_slice()
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [ElT] {
        self.storage.as_mut_slice()
    }

    /// Consume the tensor and return its data in storage order.
    pub fn into_vec(self) -> Vec<ElT> {
        self.storage.into_vec()
    }

    #[inline]
    pub fn get_linear(&self, i: usize) -> Option<&ElT> {
        self.data().get(i)
    }

    fn check_indices(&self, indices: &[usize]) -> Result<usize, TensorError> {
        if indices.len() != self.ndim() {
            return Err(TensorError::WrongNumberOfIndices {
                expected: self.ndim(),
                actual: indices.len(),
            });
        }
        for (&index, &dim_size) in indices.iter().zip(&self.shape) {
            if index >= dim_size {
                return Err(TensorError::IndexOutOfBounds { index, dim_size });
            }
        }
        Ok(cartesian_to_linear(indices, &self.strides))
    }

    /// Get element by cartesian indices.
    ///
    /// Returns `None` if indices are out of bounds or of the wrong arity.
    pub fn get(&self, indices: &[usize]) -> Option<&ElT> {
        let linear = self.check_indices(indices).ok()?;
        self.get_linear(linear)
    }

    /// Set element by cartesian indices.
    ///
    /// # Errors
    ///
    /// Returns error if indices are out of bounds or of the wrong arity.
    pub fn set(&mut self, indices: &[usize], value: ElT) -> Result<(), TensorError> {
        let linear = self.check_indices(indices)?;
        self.data_mut()[linear] = value;
        Ok(())
    }

    pub fn fill(&mut self, value: ElT) {
        self.data_mut().fill(value);
    }

    /// Reshape the tensor to a new shape (zero-copy view).
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the total number of elements changes.
    ///
    /// # Example
    ///
    /// ```
    /// use nditertools::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let t3x2 = t.reshape(&[3, 2]).unwrap();
    /// assert_eq!(t3x2.shape(), &[3, 2]);
    /// assert!(t.shares_storage_with(&t3x2));
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self, TensorError> {
        let new_len = expected_len(new_shape)?;
        if new_len != self.len() {
            return Err(TensorError::ShapeMismatch {
                expected: self.len(),
                actual: new_len,
            });
        }
        Ok(Self {
            storage: self.storage.view(),
            shape: new_shape.to_vec(),
            strides: compute_strides(new_shape),
        })
    }

    /// Flatten to 1-D in row-major order: the last index varies fastest.
    ///
    /// This is the order in which [`Tensor::from_rows`] lists elements. When
    /// at most one dimension has extent greater than one, row-major and
    /// storage order agree and the result is a zero-copy view.
    ///
    /// # Example
    ///
    /// ```
    /// use nditertools::Tensor;
    ///
    /// let t = Tensor::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(t.flatten().data(), &[1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn flatten(&self) -> Self {
        let len = self.len();
        if self.shape.iter().filter(|&&d| d > 1).count() <= 1 {
            return Self {
                storage: self.storage.view(),
                shape: vec![len],
                strides: vec![1],
            };
        }

        let reversed: Vec<usize> = self.shape.iter().rev().copied().collect();
        let data = self.data();
        let flat: Vec<ElT> = (0..len)
            .map(|i| {
                let mut index = linear_to_cartesian(i, &reversed);
                index.reverse();
                data[cartesian_to_linear(&index, &self.strides)]
            })
            .collect();
        Self::from(flat)
    }

    /// Check if this tensor shares storage with another tensor.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        self.storage
            .buffer()
            .shares_storage_with(other.storage.buffer())
    }

    /// Check if other tensors are views onto this tensor's data.
    pub fn is_view(&self) -> bool {
        self.storage.buffer().is_shared()
    }

    fn matrix_dims(&self) -> Result<(usize, usize), TensorError> {
        match self.shape[..] {
            [nrows, ncols] => Ok((nrows, ncols)),
            _ => Err(TensorError::RankMismatch {
                expected: 2,
                actual: self.ndim(),
            }),
        }
    }

    /// Copy out row `i` of a 2-D tensor.
    ///
    /// # Errors
    ///
    /// `RankMismatch` if the tensor is not 2-D, `IndexOutOfBounds` if `i`
    /// is not a row.
    pub fn row(&self, i: usize) -> Result<Vec<ElT>, TensorError> {
        let (nrows, ncols) = self.matrix_dims()?;
        if i >= nrows {
            return Err(TensorError::IndexOutOfBounds {
                index: i,
                dim_size: nrows,
            });
        }
        let data = self.data();
        Ok((0..ncols).map(|j| data[i + j * nrows]).collect())
    }

    /// Iterate over the rows of a 2-D tensor.
    ///
    /// # Errors
    ///
    /// `RankMismatch` if the tensor is not 2-D.
    ///
    /// # Examples
    ///
    /// ```
    /// use nditertools::Tensor;
    ///
    /// let t = Tensor::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// let rows: Vec<Vec<i32>> = t.rows().unwrap().collect();
    /// assert_eq!(rows, vec![vec![1, 2], vec![3, 4]]);
    /// ```
    pub fn rows(&self) -> Result<impl Iterator<Item = Vec<ElT>> + '_, TensorError> {
        let (nrows, ncols) = self.matrix_dims()?;
        let data = self.data();
        Ok((0..nrows).map(move |i| (0..ncols).map(|j| data[i + j * nrows]).collect()))
    }
}

impl<I: IndexScalar> Tensor<I> {
    /// The 1-D tensor `[0, 1, ..., n - 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nditertools::IndexTensor;
    ///
    /// let t = IndexTensor::arange(4);
    /// assert_eq!(t.data(), &[0, 1, 2, 3]);
    /// ```
    pub fn arange(n: usize) -> Self {
        let data = (0..n).map(I::from_index).collect();
        Self {
            storage: Dense::from_vec(data),
            shape: vec![n],
            strides: vec![1],
        }
    }
}

impl<ElT: Scalar> From<Vec<ElT>> for Tensor<ElT> {
    fn from(data: Vec<ElT>) -> Self {
        let n = data.len();
        Self {
            storage: Dense::from_vec(data),
            shape: vec![n],
            strides: vec![1],
        }
    }
}

impl<ElT: Scalar> From<&[ElT]> for Tensor<ElT> {
    fn from(data: &[ElT]) -> Self {
        Self::from(data.to_vec())
    }
}

impl<ElT: Scalar, const N: usize> From<[ElT; N]> for Tensor<ElT> {
    fn from(data: [ElT; N]) -> Self {
        Self::from(data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_zeros_generic<T: Scalar>() {
        let t: Tensor<T> = Tensor::zeros(&[2, 3]);
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t.ndim(), 2);
        assert_eq!(t.len(), 6);
        assert_eq!(t.strides(), &[1, 2]);
        assert_eq!(t.dtype(), T::DTYPE);
        for i in 0..6 {
            assert_eq!(*t.get_linear(i).unwrap(), T::zero());
        }
    }

    #[test]
    fn test_zeros_f64() {
        test_zeros_generic::<f64>();
    }

    #[test]
    fn test_zeros_i64() {
        test_zeros_generic::<i64>();
    }

    #[test]
    fn test_zeros_u8() {
        test_zeros_generic::<u8>();
    }

    #[test]
    fn test_scalar_tensor() {
        let t: Tensor<f64> = Tensor::zeros(&[]);
        assert_eq!(t.ndim(), 0);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(&[]), Some(&0.0));
    }

    #[test]
    fn test_zero_sized_tensor() {
        let t: Tensor<i64> = Tensor::zeros(&[0, 3]);
        assert_eq!(t.shape(), &[0, 3]);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
        assert_eq!(t.rows().unwrap().count(), 0);
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        let result = Tensor::<f64>::from_vec(vec![1.0, 2.0, 3.0], &[2, 3]);
        assert_eq!(
            result,
            Err(TensorError::ShapeMismatch {
                expected: 6,
                actual: 3
            })
        );
        assert!(Tensor::<f64>::from_vec(vec![], &[0]).is_ok());
    }

    #[test]
    fn test_from_rows() {
        let t = Tensor::from_rows(&[vec![1, 3], vec![1, 4], vec![2, 3]]).unwrap();
        assert_eq!(t.shape(), &[3, 2]);
        // Column-major: first column stored first.
        assert_eq!(t.data(), &[1, 1, 2, 3, 4, 3]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Tensor::from_rows(&[vec![1, 2], vec![3]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: [[f64; 0]; 0] = [];
        let t = Tensor::from_rows(&rows).unwrap();
        assert_eq!(t.shape(), &[0, 0]);
    }

    #[test]
    fn test_get_set() {
        let mut t: Tensor<i32> = Tensor::zeros(&[2, 3]);
        t.set(&[1, 2], 42).unwrap();
        assert_eq!(t.get(&[1, 2]), Some(&42));
        assert_eq!(t.get(&[2, 0]), None);
        assert_eq!(t.get(&[0]), None);
        assert_eq!(
            t.set(&[0, 3], 1),
            Err(TensorError::IndexOutOfBounds {
                index: 3,
                dim_size: 3
            })
        );
        assert_eq!(
            t.set(&[0], 1),
            Err(TensorError::WrongNumberOfIndices {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_fill_and_full() {
        let mut t: Tensor<f32> = Tensor::zeros(&[2, 2]);
        t.fill(5.0);
        assert_eq!(t, Tensor::full(&[2, 2], 5.0));
    }

    #[test]
    fn test_reshape_shares_storage() {
        let t = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        let t1d = t.reshape(&[6]).unwrap();
        let t3x2 = t.reshape(&[3, 2]).unwrap();

        assert!(t.shares_storage_with(&t1d));
        assert!(t1d.shares_storage_with(&t3x2));
        assert!(t.is_view());
    }

    #[test]
    fn test_reshape_copy_on_write() {
        let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let mut flat = t.reshape(&[4]).unwrap();
        assert!(t.shares_storage_with(&flat));

        flat.set(&[0], 100.0).unwrap();
        assert!(!t.shares_storage_with(&flat));
        assert_eq!(*t.get_linear(0).unwrap(), 1.0);
        assert_eq!(*flat.get_linear(0).unwrap(), 100.0);
    }

    #[test]
    fn test_reshape_invalid_size() {
        let t = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        assert!(t.reshape(&[5]).is_err());
        assert!(t.reshape(&[2, 2]).is_err());
    }

    #[test]
    fn test_flatten_row_major() {
        let t = Tensor::from_rows(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!(t.data(), &[1, 3, 2, 4]);

        let flat = t.flatten();
        assert_eq!(flat.shape(), &[4]);
        assert_eq!(flat.data(), &[1, 2, 3, 4]);
        assert!(!t.shares_storage_with(&flat));
    }

    #[test]
    fn test_flatten_rank3_last_index_fastest() {
        let mut t: Tensor<i64> = Tensor::zeros(&[2, 3, 4]);
        for a in 0..2 {
            for b in 0..3 {
                for c in 0..4 {
                    t.set(&[a, b, c], ((a * 3 + b) * 4 + c) as i64).unwrap();
                }
            }
        }
        let expected: Vec<i64> = (0..24).collect();
        assert_eq!(t.flatten().data(), expected.as_slice());
    }

    #[test]
    fn test_flatten_single_extent_is_view() {
        let t = Tensor::from_vec(vec![1, 2, 3], &[1, 3, 1]).unwrap();
        let flat = t.flatten();
        assert_eq!(flat.data(), &[1, 2, 3]);
        assert!(t.shares_storage_with(&flat));
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_full_overflow_panics() {
        let _ = Tensor::full(&[usize::MAX, 2], 0u8);
    }

    #[test]
    fn test_flatten_scalar() {
        let t = Tensor::from_vec(vec![7i64], &[]).unwrap();
        let flat = t.flatten();
        assert_eq!(flat.shape(), &[1]);
        assert_eq!(flat.data(), &[7]);
    }

    #[test]
    fn test_row_access() {
        let t = Tensor::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(t.row(1).unwrap(), vec![4, 5, 6]);
        assert!(t.row(2).is_err());
        assert_eq!(
            t.flatten().row(0),
            Err(TensorError::RankMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_arange_i32() {
        let t: Tensor<i32> = Tensor::arange(3);
        assert_eq!(t.shape(), &[3]);
        assert_eq!(t.data(), &[0, 1, 2]);
    }

    #[test]
    fn test_from_conversions() {
        let a: Tensor<f64> = vec![1.0, 2.0].into();
        let b: Tensor<f64> = [1.0, 2.0][..].into();
        let c: Tensor<f64> = [1.0, 2.0].into();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.shape(), &[2]);
        assert_eq!(a.device(), Device::Cpu);
    }
}
