// Invariants for the default (safe) backend:
// - `buf.len()` is the capacity, and `0 <= len <= buf.len()` always holds.
// - Every slot holds a valid `i32`; slots in `buf[len..]` are zero or stale
//   values left behind by `pop_back`/`remove_from` and are never exposed.

mod buffer;
mod insert;
mod push;
mod slice;

pub(crate) use buffer::alloc_buffer;
