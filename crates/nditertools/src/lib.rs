//! nditertools - itertools-style combinatorics over dense tensors
//!
//! This crate provides Cartesian products, permutation enumeration and
//! permutation inversion for n-dimensional numeric tensors, the way
//! Python's `itertools` provides them for scalar iterables.
//!
//! # Architecture
//!
//! ```text
//! Level 1: High-level API (operations module)
//!     → product, permutations, invert_permutation, apply_permutation
//!
//! Level 2: Index generation and validation
//!     → column fill for products, PermutationIndices, row validation
//!
//! Level 3: Backend implementation (backend module)
//!     → GenericBackend (naive gather/scatter loops)
//! ```
//!
//! Every operation is pure: inputs are borrowed, a fresh tensor is
//! returned on the same device as the inputs.
//!
//! # Example
//!
//! ```
//! use nditertools::{DenseTensor, IndexTensor};
//! use nditertools::operations::{
//!     ProductOptions, apply_permutation, invert_permutation, permutations, product,
//! };
//!
//! // Cartesian product
//! let a: DenseTensor<i64> = vec![1, 2].into();
//! let b: DenseTensor<i64> = vec![3, 4].into();
//! let p = product(&[a, b], &ProductOptions::default()).unwrap();
//! assert_eq!(p.shape(), &[4, 2]);
//!
//! // 2-permutations of three values
//! let x: DenseTensor<i64> = vec![5, 6, 7].into();
//! let perms = permutations(&x, Some(2)).unwrap();
//! assert_eq!(perms.shape(), &[6, 2]);
//!
//! // Inverse permutation undoes a gather
//! let perm: IndexTensor = vec![0, 2, 3, 1].into();
//! let iperm = invert_permutation(&perm).unwrap();
//! let v: DenseTensor<f64> = vec![0.1, 0.2, 0.3, 0.4].into();
//! let back = apply_permutation(&apply_permutation(&v, &perm).unwrap(), &iperm).unwrap();
//! assert_eq!(back, v);
//! ```

pub mod backend;
pub mod device;
pub mod error;
pub mod operations;
pub mod random;
pub mod scalar;
pub mod storage;
pub mod strides;
pub mod tensor;

pub use device::{Device, TensorOptions};
pub use error::TensorError;
pub use operations::{ProductOptions, invert_permutation, permutations, product};
pub use scalar::{DType, IndexScalar, Scalar};
pub use storage::Dense;
pub use tensor::{DenseTensor, IndexTensor, Tensor};
