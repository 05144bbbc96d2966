//! Dense storage for tensor data.

use crate::device::Device;
use crate::scalar::Scalar;
use crate::storage::buffer::{CpuBuffer, DataBuffer};

/// Dense storage - contiguous array of elements in column-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<ElT: Scalar> {
    buffer: CpuBuffer<ElT>,
}

impl<ElT: Scalar> Dense<ElT> {
    /// Create dense storage from existing vector (takes ownership).
    pub fn from_vec(data: Vec<ElT>) -> Self {
        Self {
            buffer: CpuBuffer::from_vec(data),
        }
    }

    /// A second handle onto the same elements.
    #[inline]
    pub fn view(&self) -> Self {
        self.clone()
    }

    #[inline]
    pub fn buffer(&self) -> &CpuBuffer<ElT> {
        &self.buffer
    }

    #[inline]
    pub fn device(&self) -> Device {
        self.buffer.device()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ElT] {
        self.buffer.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [ElT] {
        self.buffer.as_mut_slice()
    }

    pub fn into_vec(self) -> Vec<ElT> {
        self.buffer.into_vec()
    }
}
