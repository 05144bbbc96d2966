//! r-length permutations of a tensor's elements.
//!
//! ```text
//! permutations(input, r)
//!     → flatten input row-major (n elements), r defaults to n
//!     → enumerate injective index tuples in lexicographic order
//!     → take(input, index_rows)
//! ```
//!
//! Index tuples come from a backtracking generator, so only the `n!/(n-r)!`
//! surviving rows are ever materialised rather than all `n^r` rows of the
//! index product. The row order is the same as filtering that product down
//! to rows without repeated indices.

use crate::error::TensorError;
use crate::operations::gather::take;
use crate::scalar::Scalar;
use crate::tensor::{DenseTensor, IndexTensor};

/// Number of r-length permutations of n elements, `n! / (n - r)!`.
///
/// Returns `None` if `r > n` or the count overflows.
///
/// # Examples
///
/// ```
/// use nditertools::operations::permutation_count;
///
/// assert_eq!(permutation_count(3, 2), Some(6));
/// assert_eq!(permutation_count(4, 4), Some(24));
/// assert_eq!(permutation_count(5, 0), Some(1));
/// assert_eq!(permutation_count(2, 3), None);
/// ```
pub fn permutation_count(n: usize, r: usize) -> Option<usize> {
    if r > n {
        return None;
    }
    ((n - r + 1)..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// Iterator over r-length injective index tuples drawn from `0..n`, in
/// lexicographic order.
///
/// # Examples
///
/// ```
/// use nditertools::operations::PermutationIndices;
///
/// let all: Vec<Vec<usize>> = PermutationIndices::new(3, 2).collect();
/// assert_eq!(all, vec![
///     vec![0, 1], vec![0, 2],
///     vec![1, 0], vec![1, 2],
///     vec![2, 0], vec![2, 1],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct PermutationIndices {
    n: usize,
    indices: Vec<usize>,
    used: Vec<bool>,
    started: bool,
    done: bool,
}

impl PermutationIndices {
    /// Tuples of length `r` over `0..n`. Empty when `r > n`; a single empty
    /// tuple when `r == 0`.
    pub fn new(n: usize, r: usize) -> Self {
        let done = r > n;
        let indices: Vec<usize> = if done { Vec::new() } else { (0..r).collect() };
        let mut used = vec![false; n];
        for &i in &indices {
            used[i] = true;
        }
        Self {
            n,
            indices,
            used,
            started: false,
            done,
        }
    }

    /// Step to the lexicographic successor; `false` once exhausted.
    fn advance(&mut self) -> bool {
        let r = self.indices.len();
        for pos in (0..r).rev() {
            let current = self.indices[pos];
            self.used[current] = false;

            let Some(next) = (current + 1..self.n).find(|&v| !self.used[v]) else {
                continue;
            };
            self.indices[pos] = next;
            self.used[next] = true;

            // Refill the tail with the smallest free values.
            let mut candidate = 0;
            for slot in pos + 1..r {
                while self.used[candidate] {
                    candidate += 1;
                }
                self.indices[slot] = candidate;
                self.used[candidate] = true;
            }
            return true;
        }
        false
    }
}

impl Iterator for PermutationIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.indices.clone())
    }
}

/// All r-length permutations of the flattened `input`, as a `(k, r)` tensor
/// with `k = n! / (n - r)!`.
///
/// `r` defaults to the number of elements `n`. Each row is a distinct
/// ordered selection of elements without repetition; rows appear in the
/// lexicographic order of the positions they select. `r == 0` yields one
/// empty row.
///
/// # Errors
///
/// - `InvalidLength` if `r > n`
/// - `InvalidArgument` if `k * r` overflows
///
/// # Examples
///
/// ```
/// use nditertools::DenseTensor;
/// use nditertools::operations::permutations;
///
/// let input: DenseTensor<i64> = vec![5, 6, 7].into();
/// let p = permutations(&input, Some(2)).unwrap();
///
/// assert_eq!(p.shape(), &[6, 2]);
/// assert_eq!(p.row(0).unwrap(), vec![5, 6]);
/// assert_eq!(p.row(5).unwrap(), vec![7, 6]);
/// ```
pub fn permutations<T: Scalar>(
    input: &DenseTensor<T>,
    r: Option<usize>,
) -> Result<DenseTensor<T>, TensorError> {
    let flat = input.flatten();
    let n = flat.len();
    let r = r.unwrap_or(n);
    if r > n {
        tracing::trace!(n, r, "permutation length exceeds input");
        return Err(TensorError::InvalidLength { r, n });
    }

    let k = permutation_count(n, r)
        .filter(|k| k.checked_mul(r).is_some())
        .ok_or_else(|| {
            TensorError::invalid_argument(format!(
                "{r}-permutations of {n} elements do not fit in memory"
            ))
        })?;

    tracing::debug!(n, r, rows = k, "enumerating permutations");

    let mut index_data = vec![0i64; k * r];
    for (row, tuple) in PermutationIndices::new(n, r).enumerate() {
        for (col, &i) in tuple.iter().enumerate() {
            index_data[row + col * k] = i as i64;
        }
    }
    let indices = IndexTensor::from_vec(index_data, &[k, r])?;

    take(&flat, &indices)
}
