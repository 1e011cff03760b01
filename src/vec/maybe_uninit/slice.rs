// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

impl DynamicArray {
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= buf.len()`, so this creates a valid shared slice of `i32`.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr() as *const i32, self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= buf.len()`. We have exclusive access via `&mut self`, so
        // it is sound to create a mutable slice over `buf[..self.len]`.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr() as *mut i32, self.len) }
    }
}
