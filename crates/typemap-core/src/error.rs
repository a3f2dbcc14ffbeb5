//! Error types for native buffer handling
//!
//! Mapping resolution never fails at runtime: an unmapped (backend, scalar)
//! pair is a compile error. The errors here come from handing concrete
//! buffers across to a backend's native representation.

use thiserror::Error;

/// Core error type for typemap operations
#[derive(Error, Debug)]
pub enum Error {
    /// Source and destination buffers disagree on element count
    #[error("Length mismatch in {context}: expected {expected} elements, got {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// A buffer could not be reinterpreted as the native element type
    #[error("Cannot view {from} as {to}: {reason}")]
    Cast {
        from: &'static str,
        to: &'static str,
        reason: String,
    },

    /// Native type width disagrees with what the backend documents
    #[error("Width mismatch for {type_name}: expected {expected} bytes, got {actual}")]
    WidthMismatch {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a failed slice reinterpretation
    pub fn cast<S, T>(err: bytemuck::PodCastError) -> Self {
        Self::Cast {
            from: std::any::type_name::<S>(),
            to: std::any::type_name::<T>(),
            reason: format!("{err:?}"),
        }
    }

    /// Create an error for buffers of different lengths
    pub fn length_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::LengthMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }

    /// Create an error for a native type of unexpected width
    pub fn width_mismatch(type_name: &'static str, expected: usize, actual: usize) -> Self {
        Self::WidthMismatch {
            type_name,
            expected,
            actual,
        }
    }
}
