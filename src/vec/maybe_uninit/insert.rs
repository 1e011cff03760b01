// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

impl DynamicArray {
    /// Inserts `value` at `index`, shifting `[index..size)` one slot right,
    /// and returns `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= size` (including
    /// `index == size`). Grows like [`push_back`](DynamicArray::push_back)
    /// when full. The array is unchanged on error.
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

        // Shift right: [index..len) -> [index+1..len+1). Only initialized slots
        // are read, and slot `len` is in bounds after growth.
        self.buf.copy_within(index..len, index + 1);
        self.buf[index].write(value);

        self.len = len + 1;
        Ok(index)
    }
}
