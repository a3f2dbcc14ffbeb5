//! The backend/scalar mapping contract
//!
//! A backend integration is a zero-sized tag type implementing [`Backend`]
//! plus one [`TypeMap`] impl per logical scalar it accepts. Lookup is a
//! trait projection, so a missing pair is a compile error at the point where
//! generic code is instantiated, never a runtime branch.
//!
//! ```rust
//! use typemap_core::{Backend, NativeOf, MagnitudeOf, ScalarTypeMap, TypeMap};
//!
//! #[derive(Clone, Copy, Debug, Default)]
//! struct Reference;
//!
//! impl Backend for Reference {
//!     const NAME: &'static str = "reference";
//! }
//!
//! impl TypeMap<f64> for Reference {
//!     type Type = f64;
//! }
//!
//! impl ScalarTypeMap<f64> for Reference {
//!     type Magnitude = f64;
//! }
//!
//! let value: NativeOf<Reference, f64> = 1.5;
//! let tol: MagnitudeOf<Reference, f64> = 1e-12;
//! assert!(tol < value);
//! ```
//!
//! Pairs without an impl are rejected by the compiler:
//!
//! ```compile_fail
//! use typemap_core::{Backend, NativeOf, TypeMap};
//!
//! #[derive(Clone, Copy, Debug, Default)]
//! struct Reference;
//!
//! impl Backend for Reference {
//!     const NAME: &'static str = "reference";
//! }
//!
//! impl TypeMap<f64> for Reference {
//!     type Type = f64;
//! }
//!
//! let flag: NativeOf<Reference, bool> = true;
//! ```

use bytemuck::Pod;
use num_traits::Float;
use std::fmt::Debug;

/// Marker for a solver backend integration
///
/// Implementors are zero-sized tags; they carry no state and are never
/// constructed by the mapping itself.
pub trait Backend: Copy + Default + Debug + Send + Sync + 'static {
    /// Human readable backend name
    const NAME: &'static str;
}

/// Native type a backend expects for the logical scalar `S`
pub trait TypeMap<S>: Backend {
    /// The type the backend's routines take in their signatures
    type Type: Copy + Debug + 'static;
}

/// Floating point mapping with an associated magnitude type
///
/// Integers only implement [`TypeMap`]; asking for their magnitude does not
/// compile.
pub trait ScalarTypeMap<S>: TypeMap<S> {
    /// Real type used for norms and thresholds
    type Magnitude: Float + Pod + Debug + 'static;
}

/// Native type of `S` under backend `B`
pub type NativeOf<B, S> = <B as TypeMap<S>>::Type;

/// Magnitude type of `S` under backend `B`
pub type MagnitudeOf<B, S> = <B as ScalarTypeMap<S>>::Magnitude;
