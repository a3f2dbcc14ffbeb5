//! Core traits for mapping logical scalars onto solver backend native types
//!
//! Generic sparse solver code is written against logical scalars (`f64`,
//! `Complex<f32>`, `i32`, ...). Each backend integration declares, per
//! logical scalar, the exact type its native routines take and, for
//! floating point scalars, the real magnitude type used for norms and
//! thresholds.
//!
//! # Design
//!
//! - **Closed table**: one trait impl per (backend, scalar) pair. A missing
//!   pair is a compile error, never a fallback.
//! - **Build-time switches**: complex entries exist only with the `complex`
//!   feature; platform `long` is resolved from `size_of` comparisons.
//! - **No runtime state**: backend tags are zero-sized. Descriptors and
//!   buffer views are thin helpers layered over the type-level table.
//!
//! # Example
//!
//! ```rust
//! use typemap_core::{describe, Backend, NativeOf, TypeMap};
//!
//! #[derive(Clone, Copy, Debug, Default)]
//! struct Dense;
//!
//! impl Backend for Dense {
//!     const NAME: &'static str = "dense";
//! }
//!
//! impl TypeMap<i32> for Dense {
//!     type Type = i32;
//! }
//!
//! impl TypeMap<i64> for Dense {
//!     type Type = i64;
//! }
//!
//! let nnz: NativeOf<Dense, i32> = 12;
//! let descriptor = describe::<Dense, i32>();
//! assert_eq!(descriptor.native.size, 4);
//!
//! // Platform `long` comes for free once both integer widths are mapped
//! let _ = describe::<Dense, typemap_core::CLong>();
//! # let _ = nnz;
//! ```

pub mod assertions;
pub mod convert;
pub mod descriptor;
pub mod error;
pub mod logical;
pub mod traits;
pub mod width;

pub use error::{Error, Result};

pub use traits::{Backend, MagnitudeOf, NativeOf, ScalarTypeMap, TypeMap};

pub use logical::{CLong, Logical, ScalarKind};

pub use width::{LongWidth, PlatformLong, ResolveLong, LONG_IS_WIDER};

pub use descriptor::{describe, describe_scalar, NativeLayout, TypeDescriptor};

pub use convert::{as_native, as_native_mut, copy_to_native, from_native, to_native};

#[cfg(feature = "complex")]
pub use num_complex::{Complex, Complex32, Complex64};

/// Without the `complex` feature there is no complex logical scalar.
///
/// ```compile_fail
/// let _z = typemap_core::Complex::new(1.0f64, 2.0);
/// ```
///
/// ```compile_fail
/// use typemap_core::Logical;
///
/// fn kind<S: Logical>() -> typemap_core::ScalarKind {
///     S::KIND
/// }
///
/// let _ = kind::<typemap_core::Complex64>();
/// ```
#[cfg(not(feature = "complex"))]
mod complex_disabled {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Backend, CLong, Logical, MagnitudeOf, NativeOf, Result, ScalarKind, ScalarTypeMap,
        TypeMap,
    };

    pub use crate::error::Error;

    #[cfg(feature = "complex")]
    pub use crate::{Complex32, Complex64};
}
