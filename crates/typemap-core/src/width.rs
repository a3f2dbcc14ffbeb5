//! Width resolution for platform `long`
//!
//! `long` is 8 bytes on LP64 targets and 4 bytes on LLP64 (Windows) and
//! 32-bit targets. Rather than giving it a native binding of its own, it
//! reuses whichever fixed-width mapping it matches: the wide-integer entry
//! when it is wider than `int`, the default-integer entry otherwise.
//!
//! The comparison is a const expression feeding a const generic, so the
//! choice is made once per build:
//!
//! ```rust
//! use typemap_core::width::{LongWidth, PlatformLong, LONG_IS_WIDER};
//! use typemap_core::assertions::same_type;
//!
//! assert!(same_type::<PlatformLong, LongWidth<{ LONG_IS_WIDER }>>());
//! ```

use crate::logical::CLong;
use crate::traits::{NativeOf, TypeMap};
use std::ffi::{c_int, c_long};

/// Selector for the platform-long mapping
///
/// `LongWidth<true>` resolves through the wide-integer (`i64`) mapping,
/// `LongWidth<false>` through the default-integer (`i32`) mapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct LongWidth<const WIDER: bool>;

/// Type-level resolution of the platform-long entry for backend `B`
pub trait ResolveLong<B> {
    type Type: Copy + std::fmt::Debug + 'static;
}

impl<B: TypeMap<i64>> ResolveLong<B> for LongWidth<true> {
    type Type = NativeOf<B, i64>;
}

impl<B: TypeMap<i32>> ResolveLong<B> for LongWidth<false> {
    type Type = NativeOf<B, i32>;
}

/// `true` when `B` is strictly wider than `A`
pub const fn is_wider<A, B>() -> bool {
    std::mem::size_of::<A>() < std::mem::size_of::<B>()
}

/// Whether this target's `long` is wider than its `int`
pub const LONG_IS_WIDER: bool = is_wider::<c_int, c_long>();

/// The selector for the target being compiled
pub type PlatformLong = LongWidth<{ is_wider::<c_int, c_long>() }>;

/// Any backend mapping both integer widths gets the `long` entry for free
impl<B> TypeMap<CLong> for B
where
    B: TypeMap<i32> + TypeMap<i64>,
    PlatformLong: ResolveLong<B>,
{
    type Type = <PlatformLong as ResolveLong<B>>::Type;
}
