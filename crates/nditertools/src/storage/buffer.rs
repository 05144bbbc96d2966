//! Data buffer abstraction for device-tagged storage.
//!
//! `DataBuffer` separates where elements live from how a tensor interprets
//! them. `CpuBuffer` is the host implementation.

use std::sync::Arc;

use crate::device::Device;
use crate::scalar::Scalar;

/// Trait for device-tagged element storage.
pub trait DataBuffer<T: Scalar>: Clone + std::fmt::Debug + PartialEq {
    /// Create buffer from existing vector.
    fn from_vec(data: Vec<T>) -> Self;

    /// Device holding the elements.
    fn device(&self) -> Device;

    /// Length of buffer (number of elements).
    fn len(&self) -> usize;

    /// Check if buffer is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get immutable slice of data.
    fn as_slice(&self) -> &[T];

    /// Get mutable slice of data, detaching from other views first.
    fn as_mut_slice(&mut self) -> &mut [T];
}

/// Host buffer backed by a reference-counted `Vec<T>`.
///
/// Clones share the allocation; the first mutation through a shared
/// buffer copies it (copy-on-write).
#[derive(Debug, Clone, PartialEq)]
pub struct CpuBuffer<T: Scalar> {
    data: Arc<Vec<T>>,
}

impl<T: Scalar> CpuBuffer<T> {
    /// Create a new CpuBuffer from a Vec.
    #[inline]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// Whether two buffers point to the same allocation.
    #[inline]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Whether other buffers share this allocation.
    #[inline]
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.data) > 1
    }

    /// Consume the buffer and return the elements, copying only if shared.
    pub fn into_vec(self) -> Vec<T> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| shared.as_ref().clone())
    }
}

impl<T: Scalar> DataBuffer<T> for CpuBuffer<T> {
    #[inline]
    fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    #[inline]
    fn device(&self) -> Device {
        Device::Cpu
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }
}
