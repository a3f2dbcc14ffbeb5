//! Moving values between logical and native representations
//!
//! Solver drivers hold matrix values and indices as logical scalars but must
//! pass native arrays to the backend. When both sides are plain old data of
//! identical width the slice can be reinterpreted in place; otherwise values
//! are converted element by element through `From`.

use crate::error::{Error, Result};
use crate::traits::{NativeOf, TypeMap};
use bytemuck::{Pod, PodCastError};
use std::mem::size_of;

fn check_same_width<S, N>() -> Result<()> {
    if size_of::<S>() != size_of::<N>() {
        return Err(Error::cast::<S, N>(PodCastError::SizeMismatch));
    }
    Ok(())
}

/// View logical values as the backend's native type without copying
///
/// Fails when the element widths differ (a width change would silently
/// split or merge elements) or when the slice is not aligned for the
/// native type.
pub fn as_native<B, S>(values: &[S]) -> Result<&[NativeOf<B, S>]>
where
    B: TypeMap<S>,
    S: Pod,
    NativeOf<B, S>: Pod,
{
    check_same_width::<S, NativeOf<B, S>>()?;
    bytemuck::try_cast_slice(values).map_err(Error::cast::<S, NativeOf<B, S>>)
}

/// Mutable counterpart of [`as_native`], for output buffers
pub fn as_native_mut<B, S>(values: &mut [S]) -> Result<&mut [NativeOf<B, S>]>
where
    B: TypeMap<S>,
    S: Pod,
    NativeOf<B, S>: Pod,
{
    check_same_width::<S, NativeOf<B, S>>()?;
    bytemuck::try_cast_slice_mut(values).map_err(Error::cast::<S, NativeOf<B, S>>)
}

/// Convert logical values into a freshly allocated native buffer
pub fn to_native<B, S>(values: &[S]) -> Vec<NativeOf<B, S>>
where
    B: TypeMap<S>,
    S: Copy,
    NativeOf<B, S>: From<S>,
{
    log::trace!("converting {} values for {}", values.len(), B::NAME);
    values.iter().copied().map(Into::into).collect()
}

/// Convert native results back into logical values
pub fn from_native<B, S>(values: &[NativeOf<B, S>]) -> Vec<S>
where
    B: TypeMap<S>,
    S: From<NativeOf<B, S>>,
{
    values.iter().copied().map(S::from).collect()
}

/// Convert into an existing native buffer of the same length
pub fn copy_to_native<B, S>(src: &[S], dst: &mut [NativeOf<B, S>]) -> Result<()>
where
    B: TypeMap<S>,
    S: Copy,
    NativeOf<B, S>: From<S>,
{
    if src.len() != dst.len() {
        return Err(Error::length_mismatch(src.len(), dst.len(), B::NAME));
    }
    for (out, &value) in dst.iter_mut().zip(src) {
        *out = value.into();
    }
    Ok(())
}
