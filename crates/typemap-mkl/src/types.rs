//! Native MKL scalar and integer types
//!
//! Layout-compatible Rust counterparts of the declarations in
//! `mkl_types.h`. Complex values are `{ real, imag }` structs of two
//! floats, and `MKL_INT` is 32-bit under the LP64 interface and 64-bit
//! under ILP64.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;
use typemap_core::assertions::assert_width;
use typemap_core::{Logical, ScalarKind};

/// `float`
pub type MklReal = f32;

/// `double`
pub type MklDouble = f64;

/// `MKL_INT` under the LP64 interface
#[cfg(not(feature = "ilp64"))]
pub type MklInt = i32;

/// `MKL_INT` under the ILP64 interface
#[cfg(feature = "ilp64")]
pub type MklInt = i64;

/// Name of the integer interface this build links against
pub const INTEGER_INTERFACE: &str = if cfg!(feature = "ilp64") { "ilp64" } else { "lp64" };

macro_rules! impl_mkl_complex {
    ($name:ident, $float:ty, $c_name:literal, $kind:expr) => {
        #[doc = concat!("`", $c_name, "`: interleaved `", stringify!($float), "` real and imaginary parts")]
        #[repr(C)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize)]
        pub struct $name {
            pub real: $float,
            pub imag: $float,
        }

        impl $name {
            pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

            pub const ONE: Self = Self { real: 1.0, imag: 0.0 };

            #[inline]
            pub const fn new(real: $float, imag: $float) -> Self {
                Self { real, imag }
            }

            /// Modulus `sqrt(real² + imag²)`
            #[inline]
            pub fn norm(self) -> $float {
                self.real.hypot(self.imag)
            }

            #[inline]
            pub fn conj(self) -> Self {
                Self::new(self.real, -self.imag)
            }
        }

        impl Logical for $name {
            const KIND: ScalarKind = $kind;
        }

        impl From<$float> for $name {
            fn from(real: $float) -> Self {
                Self::new(real, 0.0)
            }
        }

        #[cfg(feature = "complex")]
        impl From<num_complex::Complex<$float>> for $name {
            fn from(value: num_complex::Complex<$float>) -> Self {
                Self::new(value.re, value.im)
            }
        }

        #[cfg(feature = "complex")]
        impl From<$name> for num_complex::Complex<$float> {
            fn from(value: $name) -> Self {
                num_complex::Complex::new(value.real, value.imag)
            }
        }
    };
}

impl_mkl_complex!(MklComplex8, f32, "MKL_Complex8", ScalarKind::Complex32);
impl_mkl_complex!(MklComplex16, f64, "MKL_Complex16", ScalarKind::Complex64);

const _: () = assert_width::<MklComplex8>(8);
const _: () = assert_width::<MklComplex16>(16);
#[cfg(not(feature = "ilp64"))]
const _: () = assert_width::<MklInt>(4);
#[cfg(feature = "ilp64")]
const _: () = assert_width::<MklInt>(8);
