//! Generic (naive loop-based) backend implementation.

use crate::backend::IndexBackend;
use crate::error::TensorError;
use crate::scalar::{IndexScalar, Scalar};
use crate::tensor::DenseTensor;

/// Generic backend using naive loop-based implementations.
///
/// This backend is always available and serves as a fallback.
pub struct GenericBackend;

/// Resolve a stored index against a dimension of size `dim_size`.
#[inline]
fn resolve_index<I: IndexScalar>(value: I, dim_size: usize) -> Result<usize, TensorError> {
    let index = value.to_index().ok_or_else(|| {
        TensorError::invalid_argument(format!("negative index {}", value.to_i64()))
    })?;
    if index >= dim_size {
        return Err(TensorError::IndexOutOfBounds { index, dim_size });
    }
    Ok(index)
}

fn matrix_dims<T: Scalar>(t: &DenseTensor<T>) -> Result<(usize, usize), TensorError> {
    match t.shape() {
        &[k, n] => Ok((k, n)),
        shape => Err(TensorError::RankMismatch {
            expected: 2,
            actual: shape.len(),
        }),
    }
}

fn expect_shape(expected: (usize, usize), actual: (usize, usize)) -> Result<(), TensorError> {
    if expected != actual {
        return Err(TensorError::ShapeMismatch {
            expected: expected.0 * expected.1,
            actual: actual.0 * actual.1,
        });
    }
    Ok(())
}

impl IndexBackend for GenericBackend {
    fn take_into<T: Scalar, I: IndexScalar>(
        dest: &mut DenseTensor<T>,
        src: &DenseTensor<T>,
        indices: &DenseTensor<I>,
    ) -> Result<(), TensorError> {
        if dest.len() != indices.len() {
            return Err(TensorError::ShapeMismatch {
                expected: indices.len(),
                actual: dest.len(),
            });
        }
        let src_data = src.data();
        let out = dest.data_mut();
        for (slot, &idx) in out.iter_mut().zip(indices.data()) {
            *slot = src_data[resolve_index(idx, src_data.len())?];
        }
        Ok(())
    }

    fn gather_last_into<T: Scalar, I: IndexScalar>(
        dest: &mut DenseTensor<T>,
        src: &DenseTensor<T>,
        index: &DenseTensor<I>,
    ) -> Result<(), TensorError> {
        let (k, m) = matrix_dims(index)?;
        let (src_k, n) = matrix_dims(src)?;
        expect_shape((k, m), matrix_dims(dest)?)?;
        if src_k != k {
            return Err(TensorError::ShapeMismatch {
                expected: k,
                actual: src_k,
            });
        }

        let src_data = src.data();
        let idx_data = index.data();
        let out = dest.data_mut();
        // Column-major (K, _): element [row, col] lives at row + col * K.
        for col in 0..m {
            for row in 0..k {
                let j = resolve_index(idx_data[row + col * k], n)?;
                out[row + col * k] = src_data[row + j * k];
            }
        }
        Ok(())
    }

    fn scatter_last_into<T: Scalar, I: IndexScalar>(
        dest: &mut DenseTensor<T>,
        index: &DenseTensor<I>,
        row_values: &[T],
    ) -> Result<(), TensorError> {
        let (k, n) = matrix_dims(index)?;
        expect_shape((k, n), matrix_dims(dest)?)?;
        if row_values.len() != n {
            return Err(TensorError::ShapeMismatch {
                expected: n,
                actual: row_values.len(),
            });
        }

        let idx_data = index.data();
        let out = dest.data_mut();
        for (col, &value) in row_values.iter().enumerate() {
            for row in 0..k {
                let j = resolve_index(idx_data[row + col * k], n)?;
                out[row + j * k] = value;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::IndexTensor;

    #[test]
    fn test_take_into() {
        let src: DenseTensor<f64> = vec![10.0, 20.0, 30.0].into();
        let indices = IndexTensor::from_rows(&[[2, 0], [1, 1]]).unwrap();
        let mut dest: DenseTensor<f64> = DenseTensor::zeros(&[2, 2]);

        GenericBackend::take_into(&mut dest, &src, &indices).unwrap();

        assert_eq!(dest.row(0).unwrap(), vec![30.0, 10.0]);
        assert_eq!(dest.row(1).unwrap(), vec![20.0, 20.0]);
    }

    #[test]
    fn test_take_into_out_of_bounds() {
        let src: DenseTensor<f64> = vec![1.0, 2.0].into();
        let indices: IndexTensor = vec![0, 2].into();
        let mut dest: DenseTensor<f64> = DenseTensor::zeros(&[2]);

        assert_eq!(
            GenericBackend::take_into(&mut dest, &src, &indices),
            Err(TensorError::IndexOutOfBounds {
                index: 2,
                dim_size: 2
            })
        );
    }

    #[test]
    fn test_take_into_negative() {
        let src: DenseTensor<f64> = vec![1.0, 2.0].into();
        let indices: IndexTensor = vec![-1].into();
        let mut dest: DenseTensor<f64> = DenseTensor::zeros(&[1]);

        let err = GenericBackend::take_into(&mut dest, &src, &indices).unwrap_err();
        assert!(matches!(err, TensorError::InvalidArgument { .. }));
    }

    #[test]
    fn test_gather_last_into() {
        let src = DenseTensor::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        let index = IndexTensor::from_rows(&[[2, 1, 0], [0, 0, 2]]).unwrap();
        let mut dest: DenseTensor<i32> = DenseTensor::zeros(&[2, 3]);

        GenericBackend::gather_last_into(&mut dest, &src, &index).unwrap();

        assert_eq!(dest.row(0).unwrap(), vec![3, 2, 1]);
        assert_eq!(dest.row(1).unwrap(), vec![4, 4, 6]);
    }

    #[test]
    fn test_gather_last_into_batch_mismatch() {
        let src: DenseTensor<i32> = DenseTensor::zeros(&[3, 2]);
        let index: IndexTensor = IndexTensor::zeros(&[2, 2]);
        let mut dest: DenseTensor<i32> = DenseTensor::zeros(&[2, 2]);

        assert!(GenericBackend::gather_last_into(&mut dest, &src, &index).is_err());
    }

    #[test]
    fn test_scatter_last_into() {
        let index = IndexTensor::from_rows(&[[0, 2, 3, 1], [3, 2, 1, 0]]).unwrap();
        let mut dest: IndexTensor = IndexTensor::zeros(&[2, 4]);

        GenericBackend::scatter_last_into(&mut dest, &index, &[0, 1, 2, 3]).unwrap();

        assert_eq!(dest.row(0).unwrap(), vec![0, 3, 1, 2]);
        assert_eq!(dest.row(1).unwrap(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_scatter_last_into_wrong_row_len() {
        let index = IndexTensor::from_rows(&[[0, 1]]).unwrap();
        let mut dest: IndexTensor = IndexTensor::zeros(&[1, 2]);

        assert!(GenericBackend::scatter_last_into(&mut dest, &index, &[0, 1, 2]).is_err());
    }

    #[test]
    fn test_rank_checked() {
        let index: IndexTensor = vec![0, 1].into();
        let mut dest: IndexTensor = IndexTensor::zeros(&[2]);

        assert_eq!(
            GenericBackend::scatter_last_into(&mut dest, &index, &[0, 1]),
            Err(TensorError::RankMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
