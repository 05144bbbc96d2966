//! Cartesian product of tensors.
//!
//! ```text
//! product(inputs, options)
//!     → check device/dtype of every input
//!     → flatten inputs (row-major), concatenate the list `repeat` times
//!     → allocate (rows, arity) output
//!     → fill column by column (last input varies fastest)
//! ```

use crate::device::{Device, TensorOptions};
use crate::error::TensorError;
use crate::scalar::{DType, Scalar};
use crate::tensor::DenseTensor;

/// Options for [`product`].
///
/// Defaults: `repeat = 1`, device `Cpu`, dtype inherited from the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductOptions {
    /// How many times the whole input list is repeated.
    pub repeat: usize,
    pub tensor: TensorOptions,
}

impl Default for ProductOptions {
    fn default() -> Self {
        Self {
            repeat: 1,
            tensor: TensorOptions::default(),
        }
    }
}

impl ProductOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn device(mut self, device: Device) -> Self {
        self.tensor = self.tensor.device(device);
        self
    }

    pub fn dtype(mut self, dtype: DType) -> Self {
        self.tensor = self.tensor.dtype(dtype);
        self
    }
}

/// Number of rows of the product of sets with the given lengths, repeated
/// `repeat` times. `None` on overflow.
///
/// The product of zero sets (no lengths, or `repeat == 0`) has one row.
///
/// # Examples
///
/// ```
/// use nditertools::operations::product_len;
///
/// assert_eq!(product_len(&[2, 3], 1), Some(6));
/// assert_eq!(product_len(&[2, 3], 2), Some(36));
/// assert_eq!(product_len(&[4], 0), Some(1));
/// assert_eq!(product_len(&[2, 0], 3), Some(0));
/// ```
pub fn product_len(lengths: &[usize], repeat: usize) -> Option<usize> {
    let once = lengths
        .iter()
        .try_fold(1usize, |acc, &len| acc.checked_mul(len))?;
    let repeat = u32::try_from(repeat).ok();
    match repeat {
        Some(repeat) => once.checked_pow(repeat),
        // Only 0 and 1 survive an exponent this large.
        None if once <= 1 => Some(once),
        None => None,
    }
}

/// Cartesian product of the flattened `inputs`, the input list repeated
/// `options.repeat` times.
///
/// Returns a `(rows, arity)` tensor with `arity = inputs.len() * repeat`.
/// Rows enumerate every combination once, the first input varying slowest
/// and the last input fastest. An empty input gives zero rows; an empty
/// input list (or `repeat == 0`) gives a single row of length zero.
///
/// # Errors
///
/// - `DeviceMismatch` if an input is not on `options.tensor.device`
/// - `TypeMismatch` if `options.tensor.dtype` differs from `T`
/// - `InvalidArgument` if the output size overflows
///
/// # Examples
///
/// ```
/// use nditertools::DenseTensor;
/// use nditertools::operations::{ProductOptions, product};
///
/// let a: DenseTensor<i64> = vec![1, 2].into();
/// let b: DenseTensor<i64> = vec![3, 4].into();
/// let p = product(&[a, b], &ProductOptions::default()).unwrap();
///
/// assert_eq!(p.shape(), &[4, 2]);
/// assert_eq!(p.row(0).unwrap(), vec![1, 3]);
/// assert_eq!(p.row(1).unwrap(), vec![1, 4]);
/// assert_eq!(p.row(2).unwrap(), vec![2, 3]);
/// assert_eq!(p.row(3).unwrap(), vec![2, 4]);
/// ```
pub fn product<T: Scalar>(
    inputs: &[DenseTensor<T>],
    options: &ProductOptions,
) -> Result<DenseTensor<T>, TensorError> {
    options.tensor.check::<T>(options.tensor.device)?;
    for input in inputs {
        options.tensor.check::<T>(input.device())?;
    }

    let lengths: Vec<usize> = inputs.iter().map(|t| t.len()).collect();
    let too_large = || {
        TensorError::invalid_argument(format!(
            "product of sets with lengths {lengths:?} repeated {} times is too large",
            options.repeat
        ))
    };
    let arity = inputs.len().checked_mul(options.repeat).ok_or_else(too_large)?;
    let nrows = product_len(&lengths, options.repeat)
        .filter(|rows| rows.checked_mul(arity).is_some())
        .ok_or_else(too_large)?;

    tracing::debug!(
        inputs = inputs.len(),
        repeat = options.repeat,
        arity,
        rows = nrows,
        "cartesian product"
    );

    let mut result = DenseTensor::zeros(&[nrows, arity]);
    if nrows == 0 || arity == 0 {
        return Ok(result);
    }

    let flat: Vec<DenseTensor<T>> = inputs.iter().map(DenseTensor::flatten).collect();
    let sets: Vec<&[T]> = (0..options.repeat)
        .flat_map(|_| flat.iter().map(|t| t.data()))
        .collect();

    // Column c holds each element of set c repeated `inner` times, the
    // whole pattern tiled to fill the column; `inner` is the row count of
    // the product of the sets to the right of c.
    let data = result.data_mut();
    let mut inner = nrows;
    for (column, set) in data.chunks_exact_mut(nrows).zip(&sets) {
        inner /= set.len();
        for (i, slot) in column.iter_mut().enumerate() {
            *slot = set[(i / inner) % set.len()];
        }
    }

    Ok(result)
}

/// Shorthand for [`product`] with default options and the given repeat.
pub fn product_repeat<T: Scalar>(
    inputs: &[DenseTensor<T>],
    repeat: usize,
) -> Result<DenseTensor<T>, TensorError> {
    product(inputs, &ProductOptions::new().repeat(repeat))
}
