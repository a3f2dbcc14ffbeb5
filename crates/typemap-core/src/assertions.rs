//! Static assertions over resolved types
//!
//! Mapping checks belong in `const` items so a wrong mapping breaks the
//! build rather than a test run:
//!
//! ```rust
//! use typemap_core::assertions::{assert_same, assert_width};
//!
//! const _: () = assert_same::<u32, u32>();
//! const _: () = assert_width::<u64>(8);
//! ```
//!
//! ```compile_fail
//! use typemap_core::assertions::assert_same;
//!
//! const _: () = assert_same::<u32, i32>();
//! ```

use std::any::TypeId;

/// Implemented only when `Self` and `T` are the same type
pub trait Same<T: ?Sized> {}

impl<T: ?Sized> Same<T> for T {}

/// Compiles only if `A` and `B` are the same type
pub const fn assert_same<A, B>()
where
    A: Same<B>,
{
}

/// Fails const evaluation unless `T` is exactly `bytes` wide
pub const fn assert_width<T>(bytes: usize) {
    assert!(std::mem::size_of::<T>() == bytes, "unexpected native type width");
}

/// Runtime type equality, for use where a type is chosen by cfg
pub fn same_type<A: ?Sized + 'static, B: ?Sized + 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

#[cfg(test)]
mod tests {
    use super::*;

    const _: () = assert_same::<f64, f64>();
    const _: () = assert_width::<f32>(4);
    const _: () = assert_width::<[f64; 2]>(16);

    #[test]
    fn test_same_type() {
        assert!(same_type::<i64, i64>());
        assert!(!same_type::<i64, u64>());
        assert!(same_type::<str, str>());
    }

    #[test]
    #[should_panic(expected = "unexpected native type width")]
    fn test_width_assertion_at_runtime() {
        assert_width::<u8>(2);
    }
}
