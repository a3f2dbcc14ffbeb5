//! MKL Cluster Sparse Solver and PARDISO scalar type mappings
//!
//! Declares, for each logical scalar a generic solver may use, the exact
//! type Intel MKL's sparse direct solvers expect in their signatures.
//!
//! | logical scalar     | native type    | magnitude |
//! |--------------------|----------------|-----------|
//! | `f32`              | `f32`          | `f32`     |
//! | `f64`              | `f64`          | `f64`     |
//! | `Complex<f32>`     | `MklComplex8`  | `f32`     |
//! | `Complex<f64>`     | `MklComplex16` | `f64`     |
//! | `MklComplex8`      | `MklComplex8`  | `f32`     |
//! | `MklComplex16`     | `MklComplex16` | `f64`     |
//! | `i32`              | `MklInt`       |           |
//! | `i64`              | `i64`          |           |
//! | `CLong`            | `i64` or `MklInt`, by width of `long` | |
//!
//! Complex rows require the `complex` feature (on by default). `MklInt` is
//! `i32`, or `i64` with the `ilp64` feature.
//!
//! ```rust
//! use typemap_mkl::{describe_scalar, CssMkl, MagnitudeOf, NativeOf};
//!
//! let tol: MagnitudeOf<CssMkl, f64> = 1e-13;
//! let first_row: NativeOf<CssMkl, i32> = 0;
//!
//! let descriptor = describe_scalar::<CssMkl, f64>();
//! assert_eq!(descriptor.native.size, 8);
//! assert_eq!(descriptor.magnitude.map(|m| m.size), Some(8));
//! # let _ = (tol, first_row);
//! ```
//!
//! Types without a row do not compile:
//!
//! ```compile_fail
//! use typemap_mkl::{CssMkl, NativeOf};
//!
//! let _flag: NativeOf<CssMkl, bool> = true;
//! ```
//!
//! ```compile_fail
//! use typemap_mkl::{CssMkl, NativeOf};
//!
//! struct Unrelated;
//! fn take(_: Option<NativeOf<CssMkl, Unrelated>>) {}
//! ```
//!
//! Integers have no magnitude:
//!
//! ```compile_fail
//! use typemap_mkl::{CssMkl, MagnitudeOf};
//!
//! let _tol: MagnitudeOf<CssMkl, i32> = 0;
//! ```

pub mod backends;
pub mod types;

pub use backends::{CssMkl, PardisoMkl, TypeTable};
pub use types::{
    MklComplex16, MklComplex8, MklDouble, MklInt, MklReal, INTEGER_INTERFACE,
};

pub use typemap_core::{
    describe, describe_scalar, Backend, CLong, MagnitudeOf, NativeOf, ScalarTypeMap, TypeMap,
};

/// With the `complex` feature off the complex rows must not exist.
///
/// ```compile_fail
/// use typemap_mkl::{CssMkl, MklComplex16, NativeOf};
///
/// let _z: NativeOf<CssMkl, MklComplex16> = MklComplex16::ZERO;
/// ```
#[cfg(not(feature = "complex"))]
mod complex_disabled {}
