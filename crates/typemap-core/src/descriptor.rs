//! Runtime descriptions of resolved mappings
//!
//! Resolution itself is purely type level. Descriptors capture its outcome
//! as plain data for logging, diagnostics and checks against what a loaded
//! native library reports about itself.

use crate::error::{Error, Result};
use crate::logical::{Logical, ScalarKind};
use crate::traits::{Backend, MagnitudeOf, NativeOf, ScalarTypeMap, TypeMap};
use serde::Serialize;
use std::fmt;

/// Name and layout of a concrete type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NativeLayout {
    pub type_name: &'static str,
    pub size: usize,
    pub align: usize,
}

impl NativeLayout {
    pub fn of<T>() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            size: std::mem::size_of::<T>(),
            align: std::mem::align_of::<T>(),
        }
    }
}

impl fmt::Display for NativeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} bytes, align {})",
            self.type_name, self.size, self.align
        )
    }
}

/// The resolved (native, magnitude) pair for one backend and logical scalar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub backend: &'static str,
    pub logical: ScalarKind,
    pub native: NativeLayout,
    /// Absent for integer mappings
    pub magnitude: Option<NativeLayout>,
}

impl TypeDescriptor {
    /// Check the native width against an externally reported size
    pub fn check_native_width(&self, expected: usize) -> Result<()> {
        if self.native.size != expected {
            return Err(Error::width_mismatch(
                self.native.type_name,
                expected,
                self.native.size,
            ));
        }
        Ok(())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.backend, self.logical, self.native)?;
        if let Some(magnitude) = &self.magnitude {
            write!(f, ", magnitude {}", magnitude.type_name)?;
        }
        Ok(())
    }
}

/// Describe the native mapping of `S` under `B`
pub fn describe<B, S>() -> TypeDescriptor
where
    B: TypeMap<S>,
    S: Logical,
{
    let descriptor = TypeDescriptor {
        backend: B::NAME,
        logical: S::KIND,
        native: NativeLayout::of::<NativeOf<B, S>>(),
        magnitude: None,
    };
    log::debug!("resolved {descriptor}");
    descriptor
}

/// Describe the native and magnitude mapping of a floating point `S`
pub fn describe_scalar<B, S>() -> TypeDescriptor
where
    B: ScalarTypeMap<S>,
    S: Logical,
{
    let magnitude = NativeLayout::of::<MagnitudeOf<B, S>>();
    log::trace!(
        "{} magnitude for {} is {}",
        <B as Backend>::NAME,
        S::KIND,
        magnitude.type_name
    );
    TypeDescriptor {
        magnitude: Some(magnitude),
        ..describe::<B, S>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, Default)]
    struct Tag;

    impl Backend for Tag {
        const NAME: &'static str = "tag";
    }

    impl TypeMap<f64> for Tag {
        type Type = f64;
    }

    impl ScalarTypeMap<f64> for Tag {
        type Magnitude = f64;
    }

    impl TypeMap<i32> for Tag {
        type Type = i32;
    }

    #[test]
    fn test_describe_integer() {
        let d = describe::<Tag, i32>();
        assert_eq!(d.backend, "tag");
        assert_eq!(d.logical, ScalarKind::Int);
        assert_eq!(d.native, NativeLayout { type_name: "i32", size: 4, align: 4 });
        assert!(d.magnitude.is_none());
        assert_eq!(d.to_string(), "tag: int -> i32 (4 bytes, align 4)");
    }

    #[test]
    fn test_describe_scalar_has_magnitude() {
        let d = describe_scalar::<Tag, f64>();
        assert_eq!(d.magnitude.map(|m| m.size), Some(8));
        assert!(d.to_string().ends_with(", magnitude f64"));
    }

    #[test]
    fn test_check_native_width() {
        let d = describe::<Tag, i32>();
        assert!(d.check_native_width(4).is_ok());
        let err = d.check_native_width(8).unwrap_err();
        assert!(matches!(
            err,
            Error::WidthMismatch { expected: 8, actual: 4, .. }
        ));
        assert_eq!(err.to_string(), "Width mismatch for i32: expected 8 bytes, got 4");
    }

    #[test]
    fn test_descriptor_serializes() {
        let value = serde_json::to_value(describe_scalar::<Tag, f64>()).unwrap();
        assert_eq!(value["backend"], "tag");
        assert_eq!(value["logical"], "real64");
        assert_eq!(value["native"]["size"], 8);
        assert_eq!(value["magnitude"]["type_name"], "f64");
    }
}
