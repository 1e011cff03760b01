// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

impl DynamicArray {
    /// Appends `value` and returns the size after the append.
    ///
    /// If the array is full, capacity first grows by exactly `grow_by` slots.
    ///
    /// - Returns [`Error::CannotGrow`] if full and `grow_by == 0`.
    /// - Returns [`Error::AllocationFailure`] if the grown buffer cannot be reserved.
    ///
    /// The array is unchanged on error.
    #[inline]
    pub fn push_back(&mut self, value: i32, grow_by: usize) -> Result<usize, Error> {
        self.grow_if_full(grow_by)?;
        self.buf[self.len] = value;
        self.len += 1;
        Ok(self.len)
    }
}
