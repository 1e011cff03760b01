// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

impl DynamicArray {
    /// Returns the logical elements as a shared slice (`&self.buf[..size]`).
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.buf[..self.len]
    }

    /// Returns the logical elements as a mutable slice (`&mut self.buf[..size]`).
    ///
    /// Elements can be overwritten in place; size and capacity cannot change.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        let len = self.len;
        &mut self.buf[..len]
    }
}
