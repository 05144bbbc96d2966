//! Layout helpers.
//!
//! Tensors are stored in column-major (Fortran) order: the first index
//! varies fastest in memory. Row `i` of a `(k, r)` matrix is therefore the
//! strided sequence `i, i + k, i + 2k, ...`.

/// Number of elements described by `shape`.
///
/// A 0-dim shape describes a single element; any zero-sized dimension
/// makes the tensor empty.
///
/// # Examples
///
/// ```
/// use nditertools::strides::numel;
///
/// assert_eq!(numel(&[2, 3]), 6);
/// assert_eq!(numel(&[]), 1);
/// assert_eq!(numel(&[4, 0]), 0);
/// ```
#[inline]
pub fn numel(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Like [`numel`], `None` on overflow.
pub fn checked_numel(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

/// Compute column-major strides from shape.
///
/// For shape `[d0, d1, d2, ...]`, returns `[1, d0, d0*d1, ...]`.
///
/// # Examples
///
/// ```
/// use nditertools::strides::compute_strides;
///
/// assert_eq!(compute_strides(&[3, 4, 5]), vec![1, 3, 12]);
/// assert_eq!(compute_strides(&[5]), vec![1]);
/// assert!(compute_strides(&[]).is_empty());
/// ```
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    shape
        .iter()
        .scan(1usize, |stride, &dim| {
            let current = *stride;
            *stride *= dim;
            Some(current)
        })
        .collect()
}

/// Convert cartesian indices to a linear storage offset.
#[inline]
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides)
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}

/// Convert a linear storage offset to cartesian indices.
///
/// `linear` must be smaller than `numel(shape)`.
pub fn linear_to_cartesian(mut linear: usize, shape: &[usize]) -> Vec<usize> {
    shape
        .iter()
        .map(|&dim| {
            let idx = linear % dim;
            linear /= dim;
            idx
        })
        .collect()
}

/// Split a shape `[..., n]` into `(batch, n)`, where `batch` is the product
/// of all leading dimensions.
///
/// Returns `None` for a 0-dim shape, which has no last axis.
///
/// # Examples
///
/// ```
/// use nditertools::strides::split_last;
///
/// assert_eq!(split_last(&[2, 3, 4]), Some((6, 4)));
/// assert_eq!(split_last(&[5]), Some((1, 5)));
/// assert_eq!(split_last(&[]), None);
/// ```
pub fn split_last(shape: &[usize]) -> Option<(usize, usize)> {
    let (&last, leading) = shape.split_last()?;
    Some((numel(leading), last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numel() {
        assert_eq!(numel(&[3, 4, 5]), 60);
        assert_eq!(numel(&[]), 1);
        assert_eq!(numel(&[0]), 0);
        assert_eq!(numel(&[3, 0, 2]), 0);
    }

    #[test]
    fn test_checked_numel_overflow() {
        assert_eq!(checked_numel(&[2, 3]), Some(6));
        assert_eq!(checked_numel(&[usize::MAX, 2]), None);
        assert_eq!(checked_numel(&[usize::MAX, 0]), Some(0));
    }

    #[test]
    fn test_compute_strides_2d() {
        assert_eq!(compute_strides(&[2, 3]), vec![1, 2]);
    }

    #[test]
    fn test_compute_strides_zero_dim() {
        assert_eq!(compute_strides(&[0, 3]), vec![1, 0]);
    }

    #[test]
    fn test_cartesian_to_linear() {
        let strides = compute_strides(&[3, 4, 5]);
        assert_eq!(cartesian_to_linear(&[0, 0, 0], &strides), 0);
        assert_eq!(cartesian_to_linear(&[1, 0, 0], &strides), 1);
        assert_eq!(cartesian_to_linear(&[0, 1, 0], &strides), 3);
        assert_eq!(cartesian_to_linear(&[0, 0, 1], &strides), 12);
        assert_eq!(
            cartesian_to_linear(&[2, 3, 4], &strides),
            2 + 3 * 3 + 4 * 12
        );
    }

    #[test]
    fn test_linear_cartesian_roundtrip() {
        let shape = [3, 4, 5];
        let strides = compute_strides(&shape);
        for linear in 0..numel(&shape) {
            let cartesian = linear_to_cartesian(linear, &shape);
            assert_eq!(cartesian_to_linear(&cartesian, &strides), linear);
        }
    }

    #[test]
    fn test_split_last() {
        assert_eq!(split_last(&[2, 0, 4]), Some((0, 4)));
        assert_eq!(split_last(&[2, 3, 0]), Some((6, 0)));
    }
}
