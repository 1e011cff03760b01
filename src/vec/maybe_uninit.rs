// Invariants for the `unsafe-maybe-uninit` backend:
// - `buf.len()` is the capacity, and `0 <= len <= buf.len()` always holds.
// - Elements in `buf[..len]` are initialized `i32` values.
// - Elements in `buf[len..]` are logically uninitialized and must never be
//   read as `i32`.
// - All public methods maintain these invariants.

mod buffer;
mod insert;
mod push;
mod slice;

pub(crate) use buffer::alloc_buffer;
