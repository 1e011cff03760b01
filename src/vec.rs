// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicArray` type and its inherent API.
//!
//! `DynamicArray` is a heap-backed array of `i32` values with an explicit
//! capacity. It owns a single contiguous buffer and tracks a logical size.
//! Growth is additive and caller-controlled: a full array grows by exactly the
//! `grow_by` slots passed to the operation that needs room.

#[cfg(not(feature = "unsafe-maybe-uninit"))]
mod array;
#[cfg(feature = "unsafe-maybe-uninit")]
mod maybe_uninit;

#[cfg(not(feature = "unsafe-maybe-uninit"))]
use array::alloc_buffer;
#[cfg(feature = "unsafe-maybe-uninit")]
use maybe_uninit::alloc_buffer;

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// A resizable array of `i32` values with caller-controlled additive growth.
///
/// `DynamicArray` owns a buffer of `capacity` slots and tracks a logical size
/// `size ∈ 0..=capacity`. Only the prefix `buf[..size]` is visible through
/// the API; the tail is spare capacity.
///
/// # Layout and invariants
///
/// Internally, `DynamicArray` maintains:
///
/// - a boxed backing buffer whose length **is** the capacity (either
///   `Box<[i32]>` or `Box<[MaybeUninit<i32>]>`, depending on the backend); and
/// - a logical size `len` with `0 <= len <= capacity`.
///
/// Every operation leaves `size <= capacity` true, including on error paths,
/// where the array is left unchanged.
///
/// # Growth
///
/// [`push_back`](DynamicArray::push_back) and
/// [`insert_at`](DynamicArray::insert_at) share one growth step. When the
/// array is full before the call:
///
/// 1. the new capacity is `capacity + grow_by` (never multiplied);
/// 2. a new buffer of that capacity is reserved;
/// 3. the `size` live elements are copied over in order;
/// 4. the new buffer replaces the old one, which is released.
///
/// A zero `grow_by` on a full array returns [`Error::CannotGrow`]; a capacity
/// that overflows `usize` or cannot be reserved returns
/// [`Error::AllocationFailure`].
///
/// # Complexity
///
/// - `get`, `size`, `capacity`, `pop_back`, `occupancy`: `O(1)`.
/// - `push_back`: `O(1)` without growth, `O(size)` on the growth step.
/// - `insert_at`, `remove_from`: `O(size - index)` shifting, plus growth.
/// - `find`: `O(size)`.
///
/// # Examples
///
/// ```rust
/// use dyn_int_array::{DynamicArray, Error};
///
/// let mut a = DynamicArray::create(3).unwrap();
/// for v in [5, 3, 5] {
///     a.push_back(v, 1).unwrap();
/// }
/// assert_eq!(a.find(5), Some(2));
/// assert_eq!(a.insert_at(1, 9, 1), Ok(1));
/// assert_eq!(a.as_slice(), &[5, 9, 3, 5]);
/// assert_eq!(a.insert_at(4, 0, 1), Err(Error::IndexOutOfRange));
/// assert_eq!(a.remove_from(0), 3);
/// assert_eq!(a.get(0), Ok(9));
/// ```
#[cfg(not(feature = "unsafe-maybe-uninit"))]
#[derive(Clone)]
pub struct DynamicArray {
    pub(crate) buf: Box<[i32]>,
    pub(crate) len: usize,
}
#[cfg(feature = "unsafe-maybe-uninit")]
#[derive(Clone)]
pub struct DynamicArray {
    pub(crate) buf: Box<[core::mem::MaybeUninit<i32>]>,
    pub(crate) len: usize,
}

impl DynamicArray {
    /// Creates an empty array with room for `capacity` elements.
    ///
    /// `capacity` may be `0`; no memory is reserved in that case.
    ///
    /// Returns [`Error::AllocationFailure`] if the buffer cannot be reserved.
    pub fn create(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: alloc_buffer(capacity)?,
            len: 0,
        })
    }

    /// Releases the array and its buffer.
    ///
    /// Equivalent to dropping it. Taking `self` by value means the array
    /// cannot be used afterwards.
    #[inline]
    pub fn destroy(self) {}

    /// Returns the number of logical elements.
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if `size == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `size == capacity`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// Returns `capacity - size`, the number of pushes possible without growth.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Returns the element at `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= size`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<i32, Error> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange)
    }

    /// Drops the last element if any and returns the resulting size.
    ///
    /// No-op on an empty array. The slot's contents are left in place.
    #[inline]
    pub fn pop_back(&mut self) -> usize {
        if self.len > 0 {
            self.len -= 1;
        }
        self.len
    }

    /// Returns the index of the **last** element equal to `target`, if any.
    pub fn find(&self, target: i32) -> Option<usize> {
        self.as_slice().iter().rposition(|&x| x == target)
    }

    /// Removes the element at `index`, shifting the tail one slot left, and
    /// returns the resulting size.
    ///
    /// An `index >= size` is a no-op and returns the size unchanged.
    pub fn remove_from(&mut self, index: usize) -> usize {
        if index < self.len {
            let len = self.len;
            // Shift left: [index+1..len) -> [index..len-1)
            self.buf.copy_within(index + 1..len, index);
            self.len = len - 1;
        }
        self.len
    }

    /// Returns `size / capacity` in `[0, 1]`.
    ///
    /// A full array reports exactly `1.0`. This includes the empty
    /// zero-capacity array, where the ratio itself would be `0 / 0`.
    pub fn occupancy(&self) -> f64 {
        let capacity = self.capacity();
        if self.len < capacity {
            self.len as f64 / capacity as f64
        } else {
            1.0
        }
    }

    /// Makes room for one more element, growing by exactly `grow_by` slots
    /// when the array is full. Leaves the array untouched on error.
    fn grow_if_full(&mut self, grow_by: usize) -> Result<(), Error> {
        if self.len < self.buf.len() {
            return Ok(());
        }
        if grow_by == 0 {
            return Err(Error::CannotGrow);
        }
        let new_capacity = self
            .buf
            .len()
            .checked_add(grow_by)
            .ok_or(Error::AllocationFailure)?;

        let mut grown = alloc_buffer(new_capacity)?;
        let len = self.len;
        grown[..len].copy_from_slice(&self.buf[..len]);

        // The old buffer is released here.
        self.buf = grown;
        Ok(())
    }
}

impl Default for DynamicArray {
    /// An empty array with zero capacity.
    fn default() -> Self {
        Self {
            buf: Box::default(),
            len: 0,
        }
    }
}

impl TryFrom<&[i32]> for DynamicArray {
    type Error = Error;

    /// Builds an array holding a copy of `src`, with `capacity == src.len()`.
    fn try_from(src: &[i32]) -> Result<Self, Error> {
        let mut a = Self::create(src.len())?;
        for &x in src {
            a.push_back(x, 0)?;
        }
        Ok(a)
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("size", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Renders as `(Size: 3, Capacity: 4) { 10 20 30 }`.
impl fmt::Display for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Size: {}, Capacity: {}) {{ ", self.len, self.capacity())?;
        for x in self.as_slice() {
            write!(f, "{x} ")?;
        }
        f.write_str("}")
    }
}

// Equality and hashing look at the logical elements only, not at capacity.
impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl Eq for DynamicArray {}
impl Hash for DynamicArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl AsRef<[i32]> for DynamicArray {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}
impl AsMut<[i32]> for DynamicArray {
    fn as_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}
