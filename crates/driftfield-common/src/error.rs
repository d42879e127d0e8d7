//! Error types for Driftfield.

use thiserror::Error;

/// Top-level error type for Driftfield operations.
#[derive(Debug, Error)]
pub enum DriftfieldError {
    /// GPU-related errors
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// GPU-specific errors.
#[derive(Debug, Error)]
pub enum GpuError {
    /// No suitable GPU adapter was found
    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    /// Device request failed
    #[error("GPU device request failed: {0}")]
    DeviceRequest(String),

    /// Surface creation failed
    #[error("surface creation failed: {0}")]
    SurfaceCreate(String),

    /// Surface texture acquisition failed
    #[error("surface texture acquisition failed: {0}")]
    SurfaceAcquire(String),
}

/// Result type alias for Driftfield operations.
pub type DriftfieldResult<T> = Result<T, DriftfieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_error_wraps_into_top_level() {
        let err: DriftfieldError = GpuError::AdapterNotFound.into();
        assert!(matches!(err, DriftfieldError::Gpu(_)));
    }

    #[test]
    fn test_error_display() {
        let err = DriftfieldError::Config("bad opacity".to_string());
        assert_eq!(err.to_string(), "Config error: bad opacity");
    }
}
