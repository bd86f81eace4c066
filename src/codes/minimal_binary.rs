/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Minimal binary codes.
//!
//! A minimal binary code with upper bound *u* > 0 (AKA [truncated binary
//! encoding](https://en.wikipedia.org/wiki/Truncated_binary_encoding)) is
//! an optimal prefix-free code for the first *u* natural numbers with
//! uniform distribution. Let *s* = ⌈log₂ *u*⌉; the short codewords come
//! first: *x* < 2*ˢ* − *u* is coded as *x* in *s* − 1 bits, and any other
//! *x* as *x* + 2*ˢ* − *u* in *s* bits.
//!
//! This is the remainder code of the [Golomb](super::golomb) family; it is
//! not prefixed by a length, so it is not a universal code by itself.

use crate::error::Result;
use crate::traits::*;

/// Returns the length of the minimal binary code for `n` with upper bound
/// `max`.
#[must_use]
#[inline]
pub fn len_minimal_binary(n: u64, max: u64) -> usize {
    if max <= 1 {
        return 0;
    }
    let l = max.ilog2();
    let limit = (1_u128 << (l + 1)) - max as u128;
    if (n as u128) < limit {
        l as usize
    } else {
        l as usize + 1
    }
}

/// Trait for reading minimal binary codes.
pub trait MinimalBinaryRead: BitRead {
    #[inline]
    fn read_minimal_binary(&mut self, max: u64) -> Result<u64> {
        if max <= 1 {
            return Ok(0);
        }
        let l = max.ilog2();
        let limit = (1_u128 << (l + 1)) - max as u128;
        let prefix = self.read_bits(l as usize)?;

        if (prefix as u128) < limit {
            Ok(prefix)
        } else {
            let extended = ((prefix as u128) << 1) | self.read_bits(1)? as u128;
            Ok((extended - limit) as u64)
        }
    }
}

/// Trait for writing minimal binary codes.
pub trait MinimalBinaryWrite: BitWrite {
    #[inline]
    fn write_minimal_binary(&mut self, n: u64, max: u64) -> Result<usize> {
        if max <= 1 {
            return Ok(0);
        }
        let l = max.ilog2();
        let limit = (1_u128 << (l + 1)) - max as u128;

        if (n as u128) < limit {
            self.write_bits(n, l as usize)
        } else {
            let to_write = n as u128 + limit;
            self.write_bits((to_write >> 1) as u64, l as usize)?;
            self.write_bits((to_write & 1) as u64, 1)?;
            Ok(l as usize + 1)
        }
    }
}

impl<B: BitRead + ?Sized> MinimalBinaryRead for B {}
impl<B: BitWrite + ?Sized> MinimalBinaryWrite for B {}
