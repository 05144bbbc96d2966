//! Random permutation construction.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::TensorError;
use crate::scalar::IndexScalar;
use crate::strides::checked_numel;
use crate::tensor::Tensor;

impl<I: IndexScalar> Tensor<I> {
    /// A uniformly random permutation of `0..n`.
    ///
    /// # Example
    ///
    /// ```
    /// use nditertools::IndexTensor;
    /// use nditertools::operations::is_permutation;
    ///
    /// let perm = IndexTensor::random_permutation(6);
    /// assert_eq!(perm.shape(), &[6]);
    /// assert!(is_permutation(perm.data()));
    /// ```
    pub fn random_permutation(n: usize) -> Self {
        Self::random_permutation_with_rng(n, &mut rand::rng())
    }

    /// A uniformly random permutation of `0..n` using a specific RNG.
    ///
    /// This is useful for reproducible results with a seeded RNG.
    ///
    /// # Example
    ///
    /// ```
    /// use nditertools::IndexTensor;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let p1 = IndexTensor::random_permutation_with_rng(8, &mut rng);
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let p2 = IndexTensor::random_permutation_with_rng(8, &mut rng);
    ///
    /// assert_eq!(p1, p2);
    /// ```
    pub fn random_permutation_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut data: Vec<I> = (0..n).map(I::from_index).collect();
        data.shuffle(rng);
        Self::from(data)
    }

    /// Independent random permutations of `0..n`, one per batch item.
    ///
    /// The result has shape `batch_shape ++ [n]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the total size overflows.
    pub fn random_permutations_with_rng<R: Rng + ?Sized>(
        batch_shape: &[usize],
        n: usize,
        rng: &mut R,
    ) -> Result<Self, TensorError> {
        let mut shape = batch_shape.to_vec();
        shape.push(n);
        let total = checked_numel(&shape).ok_or_else(|| {
            TensorError::invalid_argument(format!("shape {shape:?} overflows usize"))
        })?;
        let k = if n == 0 { 0 } else { total / n };

        let mut data = vec![I::zero(); total];
        let mut row: Vec<I> = (0..n).map(I::from_index).collect();
        for b in 0..k {
            row.shuffle(rng);
            for (j, &v) in row.iter().enumerate() {
                data[b + j * k] = v;
            }
        }
        Self::from_vec(data, &shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::is_permutation;
    use crate::tensor::IndexTensor;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_permutation_valid() {
        let perm = IndexTensor::random_permutation(20);
        assert_eq!(perm.len(), 20);
        assert!(is_permutation(perm.data()));
    }

    #[test]
    fn test_random_permutation_empty() {
        let perm: Tensor<i32> = Tensor::random_permutation(0);
        assert_eq!(perm.shape(), &[0]);
    }

    #[test]
    fn test_random_permutation_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(12345);
        let p1: Tensor<i32> = Tensor::random_permutation_with_rng(10, &mut rng1);

        let mut rng2 = StdRng::seed_from_u64(12345);
        let p2: Tensor<i32> = Tensor::random_permutation_with_rng(10, &mut rng2);

        assert_eq!(p1.data(), p2.data());
    }

    #[test]
    fn test_random_permutations_batch() {
        let mut rng = StdRng::seed_from_u64(7);
        let perms = IndexTensor::random_permutations_with_rng(&[2, 3], 5, &mut rng).unwrap();
        assert_eq!(perms.shape(), &[2, 3, 5]);

        let rows = perms.reshape(&[6, 5]).unwrap();
        for row in rows.rows().unwrap() {
            assert!(is_permutation(&row));
        }
    }

    #[test]
    fn test_random_permutations_empty_batch() {
        let mut rng = StdRng::seed_from_u64(7);
        let perms = IndexTensor::random_permutations_with_rng(&[0], 4, &mut rng).unwrap();
        assert_eq!(perms.shape(), &[0, 4]);
        assert!(perms.is_empty());
    }
}
