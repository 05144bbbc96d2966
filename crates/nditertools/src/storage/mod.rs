//! Storage types for tensor data.
//!
//! ```text
//! Dense<T>
//! └── CpuBuffer<T>: DataBuffer<T>   - host memory, copy-on-write
//! ```
//!
//! Storage is always a flat vector; shape and strides come from the
//! `Tensor` wrapper.

mod buffer;
mod dense;

pub use buffer::{CpuBuffer, DataBuffer};
pub use dense::Dense;
