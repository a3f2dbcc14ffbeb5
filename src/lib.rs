//! Compile-time scalar type mapping for sparse direct solver backends
//!
//! Re-exports the mapping contract from `typemap-core` and the MKL
//! Cluster Sparse Solver / PARDISO tables from `typemap-mkl`.
//!
//! ```rust
//! use sparse_typemap::prelude::*;
//!
//! fn native_values<S>(values: &[S]) -> sparse_typemap::Result<&[NativeOf<CssMkl, S>]>
//! where
//!     CssMkl: TypeMap<S>,
//!     S: bytemuck::Pod,
//!     NativeOf<CssMkl, S>: bytemuck::Pod,
//! {
//!     sparse_typemap::convert::as_native::<CssMkl, S>(values)
//! }
//!
//! let values = [1.0f64, 2.0, 4.0];
//! assert_eq!(native_values(&values).unwrap(), &values);
//! ```

pub use typemap_core::*;

pub use typemap_mkl::{backends, types};
pub use typemap_mkl::{
    CssMkl, MklComplex16, MklComplex8, MklDouble, MklInt, MklReal, PardisoMkl, TypeTable,
    INTEGER_INTERFACE,
};

/// With the `complex` feature off, no complex type is re-exported.
///
/// ```compile_fail
/// let _z = sparse_typemap::Complex::new(1.0f32, 0.0);
/// ```
#[cfg(not(feature = "complex"))]
mod complex_disabled {}

/// Prelude module for convenient imports
pub mod prelude {
    pub use typemap_core::prelude::*;
    pub use typemap_mkl::{CssMkl, MklComplex16, MklComplex8, MklInt, PardisoMkl};
}
