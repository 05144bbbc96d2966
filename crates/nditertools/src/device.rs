//! Device tags and tensor construction options.

use std::fmt;

use crate::error::TensorError;
use crate::scalar::{DType, Scalar};

/// Compute device a tensor's data lives on.
///
/// Only host memory is implemented; the enum is non-exhaustive so that
/// accelerator buffers can be added next to `CpuBuffer`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Device {
    #[default]
    Cpu,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => f.write_str("cpu"),
        }
    }
}

/// Device and dtype requested for an operation's output.
///
/// Defaults: `device = Device::Cpu`, `dtype = None` (inherit the element
/// type of the inputs).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TensorOptions {
    pub device: Device,
    pub dtype: Option<DType>,
}

impl TensorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub fn dtype(mut self, dtype: DType) -> Self {
        self.dtype = Some(dtype);
        self
    }

    /// Check that elements of type `T` placed on `device` satisfy these options.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if a dtype was requested and differs from `T::DTYPE`,
    /// `DeviceMismatch` if `device` is not the requested device.
    pub fn check<T: Scalar>(&self, device: Device) -> Result<(), TensorError> {
        if let Some(dtype) = self.dtype {
            if dtype != T::DTYPE {
                return Err(TensorError::TypeMismatch {
                    expected: dtype,
                    actual: T::DTYPE,
                });
            }
        }
        if device != self.device {
            return Err(TensorError::DeviceMismatch {
                expected: self.device,
                actual: device,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = TensorOptions::default();
        assert_eq!(opts.device, Device::Cpu);
        assert_eq!(opts.dtype, None);
        assert_eq!(Device::default().to_string(), "cpu");
    }

    #[test]
    fn test_check_inherits_dtype() {
        let opts = TensorOptions::new();
        assert!(opts.check::<f32>(Device::Cpu).is_ok());
        assert!(opts.check::<i64>(Device::Cpu).is_ok());
    }

    #[test]
    fn test_check_dtype_mismatch() {
        let opts = TensorOptions::new().dtype(DType::I64);
        assert!(opts.check::<i64>(Device::Cpu).is_ok());
        assert_eq!(
            opts.check::<f64>(Device::Cpu),
            Err(TensorError::TypeMismatch {
                expected: DType::I64,
                actual: DType::F64,
            })
        );
    }
}
