//! Tensor combinatorics operations.
//!
//! Each operation validates its inputs, allocates a fresh output and
//! dispatches indexed reads/writes to the backend:
//!
//! ```text
//! product              → column fill (no backend call)
//! permutations         → index generator → take
//! invert_permutation   → validate → scatter_last_into
//! apply_permutation    → gather_last_into
//! ```

mod convert;
mod gather;
mod invert;
mod permutations;
mod product;

pub use convert::to_nested_vec_2d;
pub use gather::{apply_permutation, is_permutation, take};
pub use invert::invert_permutation;
pub use permutations::{PermutationIndices, permutation_count, permutations};
pub use product::{ProductOptions, product, product_len, product_repeat};
