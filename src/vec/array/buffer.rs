// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

/// Reserves a zero-filled buffer of exactly `capacity` slots.
///
/// Uses `try_reserve_exact`, so a request the allocator cannot satisfy (or one
/// whose byte size overflows) returns [`Error::AllocationFailure`] instead of
/// aborting.
pub(crate) fn alloc_buffer(capacity: usize) -> Result<Box<[i32]>, Error> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity)
        .map_err(|_| Error::AllocationFailure)?;
    v.resize(capacity, 0);
    Ok(v.into_boxed_slice())
}
