//! Element types for tensors.

use std::fmt::{self, Debug};

/// Runtime tag for a tensor element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    U8,
    I32,
    I64,
    F32,
    F64,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::U8 => "u8",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::F32 => "f32",
            DType::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// Trait for element types supported by nditertools.
///
/// Combinatorics only moves elements around, so no arithmetic is required:
/// elements are copied, compared and gathered.
pub trait Scalar: Copy + Debug + PartialEq + Default + Send + Sync + 'static {
    /// Runtime tag of this element type.
    const DTYPE: DType;

    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }
}

impl Scalar for u8 {
    const DTYPE: DType = DType::U8;
}

impl Scalar for i32 {
    const DTYPE: DType = DType::I32;
}

impl Scalar for i64 {
    const DTYPE: DType = DType::I64;
}

impl Scalar for f32 {
    const DTYPE: DType = DType::F32;
}

impl Scalar for f64 {
    const DTYPE: DType = DType::F64;
}

/// Integer element types that can hold positions into another tensor.
///
/// Permutations and gather indices are stored with these types. The
/// canonical index type is `i64`.
pub trait IndexScalar: Scalar + Eq {
    /// Convert to a position, `None` if negative.
    fn to_index(self) -> Option<usize>;

    /// Convert a position into this type.
    ///
    /// Positions are bounded by tensor lengths, which always fit.
    fn from_index(index: usize) -> Self;

    /// Widen to `i64`, used for error reporting.
    fn to_i64(self) -> i64;
}

impl IndexScalar for i64 {
    #[inline]
    fn to_index(self) -> Option<usize> {
        usize::try_from(self).ok()
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        index as i64
    }

    #[inline]
    fn to_i64(self) -> i64 {
        self
    }
}

impl IndexScalar for i32 {
    #[inline]
    fn to_index(self) -> Option<usize> {
        usize::try_from(self).ok()
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        index as i32
    }

    #[inline]
    fn to_i64(self) -> i64 {
        i64::from(self)
    }
}
