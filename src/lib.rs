// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dyn-int-array`
//!
//! A `no_std` + `alloc`, heap-backed resizable array of `i32` values with
//! **caller-controlled additive growth**, and **no `unsafe` by default**.
//!
//! The core type, [`DynamicArray`], owns a contiguous buffer of `capacity`
//! slots and tracks a logical size `size ∈ 0..=capacity`. Unlike `Vec`, it
//! never picks a growth factor on its own: every call that may need room
//! ([`DynamicArray::push_back`], [`DynamicArray::insert_at`]) takes a
//! `grow_by` argument, and a full array grows by exactly that many slots.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want allocation behavior you can predict call by call.
//! - You need the growth step to be additive rather than multiplicative.
//! - You are in a `no_std` environment with an allocator.
//!
//! It may not be the best fit if:
//!
//! - You push many elements with a small `grow_by` (each growth step copies
//!   the whole array, so tiny increments make appends `O(n)`).
//! - You need elements other than `i32`.
//!
//! ## Backends and safety
//!
//! Two internal backends are selected by the `unsafe-maybe-uninit`
//! feature flag:
//!
//! - **Default backend (safe)**:
//!   - Storage is `Box<[i32]>`.
//!   - The crate is `#![forbid(unsafe_code)]`.
//!   - Fresh slots are zero-filled on every allocation, which is `O(capacity)`.
//!
//! - **`unsafe-maybe-uninit` backend**:
//!   - Storage is `Box<[core::mem::MaybeUninit<i32>]>`.
//!   - A small amount of internal `unsafe` is used to treat only the
//!     `[0..size)` prefix as initialized, so the spare tail is never written.
//!
//! In both backends, the **public API is fully safe**.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `DynamicArray` as a sequence
//!     of its logical elements.
//!
//! - `unsafe-maybe-uninit`
//!   - Switches the internal storage to `Box<[MaybeUninit<i32>]>`.
//!
//! ## Error behavior
//!
//! - Allocation failures never abort: they return [`Error::AllocationFailure`]
//!   and leave the array unchanged.
//! - Appending to a full array with `grow_by == 0` returns
//!   [`Error::CannotGrow`].
//! - [`DynamicArray::get`] and [`DynamicArray::insert_at`] return
//!   [`Error::IndexOutOfRange`] for indices `>= size`.
//! - [`DynamicArray::pop_back`] on an empty array and
//!   [`DynamicArray::remove_from`] with an out-of-range index are silent
//!   no-ops that report the unchanged size.
//! - Indexing (`a[i]`) **panics** on out-of-range, exactly like slices.
//!
//! ## Example
//!
//! ```rust
//! use dyn_int_array::DynamicArray;
//!
//! let mut a = DynamicArray::create(2).unwrap();
//! a.push_back(10, 2).unwrap();
//! a.push_back(20, 2).unwrap();
//! assert_eq!(a.capacity(), 2);
//!
//! // Full: grows by exactly 2 slots before appending.
//! assert_eq!(a.push_back(30, 2), Ok(3));
//! assert_eq!(a.capacity(), 4);
//! assert_eq!(a.as_slice(), &[10, 20, 30]);
//! ```

#![cfg_attr(not(feature = "unsafe-maybe-uninit"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use vec::DynamicArray;
