//! Logical scalar types
//!
//! These are the types generic solver code is written against. Each one
//! carries a [`ScalarKind`] tag so descriptors and diagnostics can talk about
//! it without naming a backend.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;
use std::ffi::c_long;
use std::fmt;

/// The closed set of logical scalar kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    /// Single precision real
    Real32,
    /// Double precision real
    Real64,
    /// Single precision complex
    Complex32,
    /// Double precision complex
    Complex64,
    /// Default width integer (`int`)
    Int,
    /// Fixed 64-bit integer (`long long`)
    WideInt,
    /// Platform `long`, whose width depends on the target ABI
    Long,
}

impl ScalarKind {
    /// Every logical kind, in declaration order
    pub const ALL: [ScalarKind; 7] = [
        ScalarKind::Real32,
        ScalarKind::Real64,
        ScalarKind::Complex32,
        ScalarKind::Complex64,
        ScalarKind::Int,
        ScalarKind::WideInt,
        ScalarKind::Long,
    ];

    pub const fn is_complex(self) -> bool {
        matches!(self, ScalarKind::Complex32 | ScalarKind::Complex64)
    }

    pub const fn is_integer(self) -> bool {
        matches!(self, ScalarKind::Int | ScalarKind::WideInt | ScalarKind::Long)
    }

    /// Real kind backing this kind's magnitude, `None` for integers
    pub const fn real_counterpart(self) -> Option<ScalarKind> {
        match self {
            ScalarKind::Real32 | ScalarKind::Complex32 => Some(ScalarKind::Real32),
            ScalarKind::Real64 | ScalarKind::Complex64 => Some(ScalarKind::Real64),
            ScalarKind::Int | ScalarKind::WideInt | ScalarKind::Long => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Real32 => "real32",
            ScalarKind::Real64 => "real64",
            ScalarKind::Complex32 => "complex32",
            ScalarKind::Complex64 => "complex64",
            ScalarKind::Int => "int",
            ScalarKind::WideInt => "wide_int",
            ScalarKind::Long => "long",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type generic code may request a mapping for
pub trait Logical: Copy + 'static {
    const KIND: ScalarKind;
}

impl Logical for f32 {
    const KIND: ScalarKind = ScalarKind::Real32;
}

impl Logical for f64 {
    const KIND: ScalarKind = ScalarKind::Real64;
}

impl Logical for i32 {
    const KIND: ScalarKind = ScalarKind::Int;
}

impl Logical for i64 {
    const KIND: ScalarKind = ScalarKind::WideInt;
}

impl Logical for CLong {
    const KIND: ScalarKind = ScalarKind::Long;
}

#[cfg(feature = "complex")]
impl Logical for num_complex::Complex<f32> {
    const KIND: ScalarKind = ScalarKind::Complex32;
}

#[cfg(feature = "complex")]
impl Logical for num_complex::Complex<f64> {
    const KIND: ScalarKind = ScalarKind::Complex64;
}

/// Platform `long` as a distinct logical type
///
/// `std::ffi::c_long` is an alias for `i32` or `i64`, so it cannot key a
/// mapping of its own. This wrapper has the same layout and its own
/// [`TypeMap`](crate::TypeMap) entry, resolved by
/// [`width`](crate::width).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct CLong(pub c_long);

impl CLong {
    pub const fn new(value: c_long) -> Self {
        Self(value)
    }

    pub const fn get(self) -> c_long {
        self.0
    }
}

impl From<c_long> for CLong {
    fn from(value: c_long) -> Self {
        Self(value)
    }
}

impl From<CLong> for i64 {
    fn from(value: CLong) -> Self {
        i64::from(value.0)
    }
}

// Mirrors the targets where std defines c_long as i32
#[cfg(any(windows, target_pointer_width = "32"))]
impl From<CLong> for i32 {
    fn from(value: CLong) -> Self {
        value.0
    }
}

const _: () = crate::assertions::assert_width::<CLong>(std::mem::size_of::<c_long>());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let complex: Vec<_> = ScalarKind::ALL.iter().filter(|k| k.is_complex()).collect();
        let integer: Vec<_> = ScalarKind::ALL.iter().filter(|k| k.is_integer()).collect();
        assert_eq!(complex, [&ScalarKind::Complex32, &ScalarKind::Complex64]);
        assert_eq!(integer.len(), 3);
        assert!(ScalarKind::ALL.iter().all(|k| !(k.is_complex() && k.is_integer())));
    }

    #[test]
    fn test_real_counterpart() {
        assert_eq!(ScalarKind::Complex32.real_counterpart(), Some(ScalarKind::Real32));
        assert_eq!(ScalarKind::Complex64.real_counterpart(), Some(ScalarKind::Real64));
        assert_eq!(ScalarKind::Real64.real_counterpart(), Some(ScalarKind::Real64));
        assert_eq!(ScalarKind::Long.real_counterpart(), None);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ScalarKind::WideInt).unwrap();
        assert_eq!(json, "\"wide_int\"");
        assert_eq!(ScalarKind::WideInt.to_string(), "wide_int");
    }

    #[test]
    fn test_logical_kinds() {
        assert_eq!(<f32 as Logical>::KIND, ScalarKind::Real32);
        assert_eq!(<i64 as Logical>::KIND, ScalarKind::WideInt);
        assert_eq!(<CLong as Logical>::KIND, ScalarKind::Long);
    }

    #[cfg(feature = "complex")]
    #[test]
    fn test_complex_logical_kinds() {
        use num_complex::Complex;
        assert_eq!(<Complex<f32> as Logical>::KIND, ScalarKind::Complex32);
        assert_eq!(<Complex<f64> as Logical>::KIND, ScalarKind::Complex64);
    }

    #[test]
    fn test_clong_conversions() {
        let v = CLong::from(-42);
        assert_eq!(v.get(), -42);
        assert_eq!(i64::from(v), -42);
        assert_eq!(std::mem::size_of::<CLong>(), std::mem::size_of::<c_long>());
    }
}
