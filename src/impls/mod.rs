/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The bit stream and its serialization formats.

[`BitStream`] owns a growable bit buffer packed MSB-first into 64-bit words
and moves through the two-state lifecycle

```text
new() ──► WRITING ──rewind_for_read()──► READING
             ▲                              │
             └────────erase_for_write()─────┘
```

Writes append at the end of the stream; reads consume bits at a cursor that
[`rewind`](BitStream::rewind) resets. Calling a write operation while
reading, or a read operation while writing, fails with
[`WrongMode`](crate::error::Error::WrongMode).

Serialization comes in three forms:

- a `'0'`/`'1'` string, via [`Display`](core::fmt::Display) and
  [`from_string`](BitStream::from_string);
- packed big-endian bytes whose bit length travels out of band, via
  [`to_raw`](BitStream::to_raw) and [`from_raw`](BitStream::from_raw);
- a store format of optional caller header lines, an eight-byte big-endian
  bit length, and the raw payload, via
  [`write_store`](BitStream::write_store) and
  [`read_store`](BitStream::read_store).

*/

mod bit_stream;
pub use bit_stream::{BitStream, Mode};

mod serialize;
