//! Backend abstraction for indexed tensor kernels.
//!
//! # Backends
//!
//! - `GenericBackend`: Naive loop-based implementation (always available)
//!
//! Operations allocate their outputs and dispatch the gather/scatter work
//! here, so a vectorised or device backend only has to provide
//! [`IndexBackend`].

mod generic;
mod index;

pub use generic::GenericBackend;
pub use index::IndexBackend;
