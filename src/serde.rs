// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynamicArray`](crate::DynamicArray).
//!
//! - **Serialize**: as a sequence of the logical elements (length `size`).
//!   Capacity is not part of the serialized form.
//! - **Deserialize**: from any sequence of `i32`. The array starts at the
//!   sequence's size hint (if any) and, whenever it fills up, grows by its
//!   current capacity (at least one slot).

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl Serialize for DynamicArray {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

// Upper bound on slots reserved up front from an untrusted size hint.
const MAX_PREALLOC: usize = 4096;

struct ArrayVisitor;

impl<'de> de::Visitor<'de> for ArrayVisitor {
    type Value = DynamicArray;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of 32-bit integers")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let capacity = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out =
            DynamicArray::create(capacity).map_err(<A::Error as de::Error>::custom)?;
        while let Some(elem) = a.next_element::<i32>()? {
            let grow_by = out.capacity().max(1);
            out.push_back(elem, grow_by)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for DynamicArray {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor)
    }
}
