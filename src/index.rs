// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`DynamicArray`](crate::DynamicArray).
//!
//! `a[i]` mirrors slice behavior and panics when `i >= size`. Use
//! [`DynamicArray::get`] for the checked variant. Spare capacity beyond
//! `size` is never reachable through indexing.

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::ops::{Index, IndexMut};

impl Index<usize> for DynamicArray {
    type Output = i32;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl IndexMut<usize> for DynamicArray {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
