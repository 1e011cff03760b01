// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::mem::MaybeUninit;

/// Reserves an uninitialized buffer of exactly `capacity` slots.
///
/// Returns [`Error::AllocationFailure`] instead of aborting when the
/// reservation cannot be satisfied.
pub(crate) fn alloc_buffer(capacity: usize) -> Result<Box<[MaybeUninit<i32>]>, Error> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity)
        .map_err(|_| Error::AllocationFailure)?;
    v.resize(capacity, MaybeUninit::uninit());
    Ok(v.into_boxed_slice())
}
