// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

impl DynamicArray {
    /// Inserts `value` at `index`, shifting `[index..size)` one slot right,
    /// and returns `index`.
    ///
    /// - Returns [`Error::IndexOutOfRange`] if `index >= size`. Note that
    ///   `index == size` is rejected too: appending goes through
    ///   [`push_back`](DynamicArray::push_back).
    /// - If the array is full, capacity first grows by exactly `grow_by`
    ///   slots, as in `push_back`, with the same [`Error::CannotGrow`] and
    ///   [`Error::AllocationFailure`] outcomes.
    ///
    /// The array is unchanged on error. Uses `copy_within` for overlap-safe shifting.
    #[inline]
    pub fn insert_at(
        &mut self,
        index: usize,
        value: i32,
        grow_by: usize,
    ) -> Result<usize, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange);
        }
        self.grow_if_full(grow_by)?;
        let len = self.len;

        // Shift right: [index..len) -> [index+1..len+1)
        self.buf.copy_within(index..len, index + 1);
        self.buf[index] = value;

        self.len = len + 1;
        Ok(index)
    }
}
