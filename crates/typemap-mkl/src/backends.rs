//! MKL backend tags and their type tables
//!
//! Both solvers consume the same MKL type declarations, so one macro
//! produces both tables. Platform `long` gets no impl here: it is resolved
//! by `typemap_core::width` from the `i32` and `i64` rows.

#[cfg(feature = "complex")]
use crate::types::{MklComplex16, MklComplex8};
use crate::types::{MklDouble, MklInt, MklReal};
use typemap_core::{
    describe, describe_scalar, Backend, CLong, ScalarTypeMap, TypeDescriptor, TypeMap,
};

/// Every row a backend declares, as descriptors
pub trait TypeTable: Backend {
    fn table() -> Vec<TypeDescriptor>;
}

/// MKL Cluster Sparse Solver (distributed memory)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CssMkl;

impl Backend for CssMkl {
    const NAME: &'static str = "CssMKL";
}

/// MKL PARDISO (shared memory)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PardisoMkl;

impl Backend for PardisoMkl {
    const NAME: &'static str = "PardisoMKL";
}

macro_rules! impl_mkl_type_map {
    ($backend:ty) => {
        impl TypeMap<f32> for $backend {
            type Type = MklReal;
        }

        impl ScalarTypeMap<f32> for $backend {
            type Magnitude = MklReal;
        }

        impl TypeMap<f64> for $backend {
            type Type = MklDouble;
        }

        impl ScalarTypeMap<f64> for $backend {
            type Magnitude = MklDouble;
        }

        #[cfg(feature = "complex")]
        impl TypeMap<num_complex::Complex<f32>> for $backend {
            type Type = MklComplex8;
        }

        #[cfg(feature = "complex")]
        impl ScalarTypeMap<num_complex::Complex<f32>> for $backend {
            type Magnitude = MklReal;
        }

        #[cfg(feature = "complex")]
        impl TypeMap<num_complex::Complex<f64>> for $backend {
            type Type = MklComplex16;
        }

        #[cfg(feature = "complex")]
        impl ScalarTypeMap<num_complex::Complex<f64>> for $backend {
            type Magnitude = MklDouble;
        }

        // Callers already holding MKL complex values
        #[cfg(feature = "complex")]
        impl TypeMap<MklComplex8> for $backend {
            type Type = MklComplex8;
        }

        #[cfg(feature = "complex")]
        impl ScalarTypeMap<MklComplex8> for $backend {
            type Magnitude = MklReal;
        }

        #[cfg(feature = "complex")]
        impl TypeMap<MklComplex16> for $backend {
            type Type = MklComplex16;
        }

        #[cfg(feature = "complex")]
        impl ScalarTypeMap<MklComplex16> for $backend {
            type Magnitude = MklDouble;
        }

        impl TypeMap<i32> for $backend {
            type Type = MklInt;
        }

        // MKL has no distinct wide integer type
        impl TypeMap<i64> for $backend {
            type Type = i64;
        }

        impl TypeTable for $backend {
            fn table() -> Vec<TypeDescriptor> {
                let mut rows = vec![
                    describe_scalar::<$backend, f32>(),
                    describe_scalar::<$backend, f64>(),
                ];
                #[cfg(feature = "complex")]
                rows.extend([
                    describe_scalar::<$backend, num_complex::Complex<f32>>(),
                    describe_scalar::<$backend, num_complex::Complex<f64>>(),
                    describe_scalar::<$backend, MklComplex8>(),
                    describe_scalar::<$backend, MklComplex16>(),
                ]);
                rows.extend([
                    describe::<$backend, i32>(),
                    describe::<$backend, i64>(),
                    describe::<$backend, CLong>(),
                ]);
                log::debug!("{} declares {} type rows", <$backend>::NAME, rows.len());
                rows
            }
        }
    };
}

impl_mkl_type_map!(CssMkl);
impl_mkl_type_map!(PardisoMkl);
