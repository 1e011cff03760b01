// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `DynamicArray`.
//!
//! These errors represent allocation, growth and bounds conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`DynamicArray`](crate::DynamicArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The backing buffer could not be reserved, or the requested capacity
    /// overflowed `usize`.
    AllocationFailure,
    /// An index was outside the range accepted by the operation.
    ///
    /// For [`get`](crate::DynamicArray::get) that range is `0..size`; for
    /// [`insert_at`](crate::DynamicArray::insert_at) it is also `0..size`
    /// (inserting at `size` is rejected, use `push_back`).
    IndexOutOfRange,
    /// The array was full and the growth increment was zero.
    CannotGrow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailure => f.write_str("memory allocation failed"),
            Self::IndexOutOfRange => f.write_str("index out of range"),
            Self::CannotGrow => f.write_str("array is full and growth increment is zero"),
        }
    }
}

impl CoreError for Error {}
