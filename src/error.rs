/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The crate-wide error type.
//!
//! Every fallible operation in this crate returns [`Result`]. Errors are
//! fatal to the operation that raised them, but never to the stream: a
//! failed write persists nothing and a failed read does not advance the
//! position, so the caller may retry or switch codes.

use thiserror::Error;

use crate::impls::Mode;

/// Errors returned by stream and code operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A write was attempted while reading, or a read while writing.
    #[error("cannot {op} while the stream is {mode}")]
    WrongMode {
        /// The operation that was attempted.
        op: &'static str,
        /// The mode the stream was in.
        mode: Mode,
    },

    /// A read moved past the end of the stream.
    #[error("read underflow: {requested} bits requested at position {pos} of {len}")]
    Underflow {
        /// Bits the operation needed. Zero when scanning for a terminator
        /// that never arrived.
        requested: u64,
        /// Position the read started from.
        pos: u64,
        /// Length of the stream in bits.
        len: u64,
    },

    /// An argument outside the domain of the operation: a bit width not in
    /// `[1, W]`, a value that does not fit its field, or an invalid code
    /// parameter.
    #[error("bad argument: {0}")]
    BadArgument(String),

    /// The value exceeds the largest one representable by a bounded code.
    #[error("{code} overflow: value {value} exceeds the maximum {max}")]
    Overflow {
        /// Name of the code.
        code: &'static str,
        /// The value that was passed.
        value: u64,
        /// The largest representable value.
        max: u64,
    },

    /// Registry lookup miss.
    #[error("unknown code: {0:?}")]
    UnknownCode(String),

    /// A codeword malformed for the declared code.
    #[error("corrupt stream: {0}")]
    Corruption(&'static str),

    /// File I/O failure in the store layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for [`core::result::Result`] with this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
