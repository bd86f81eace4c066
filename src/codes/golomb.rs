/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Golomb codes.
//!
//! Given a modulus `m ≥ 1`, the Golomb code of `x` is `⌊x / m⌋` in unary
//! code followed by the [minimal binary code](super::minimal_binary) of
//! `x mod m` with upper bound `m`.
//!
//! For natural numbers distributed geometrically with base `p`, the optimal
//! code is a Golomb code with `m = ⌈−log(2 − p) / log(1 − p)⌉`.
//!
//! For a faster, less precise alternative, see [Rice codes](super::rice).

use super::minimal_binary::{len_minimal_binary, MinimalBinaryRead, MinimalBinaryWrite};
use crate::error::{Error, Result};
use crate::traits::*;

/// Returns the length of the Golomb code for `n` with modulus `m`.
#[must_use]
#[inline]
pub fn len_golomb(n: u64, m: u64) -> usize {
    (n / m) as usize + 1 + len_minimal_binary(n % m, m)
}

/// Fails unless `1 ≤ m ≤ 2^W − 1`, so the remainder field always fits the
/// stream.
pub(crate) fn check_modulus(m: u64, mask: u64) -> Result<()> {
    if m == 0 || m > mask {
        return Err(Error::BadArgument(format!(
            "Golomb modulus {m} outside [1, {mask}]"
        )));
    }
    Ok(())
}

/// Trait for reading Golomb codes.
pub trait GolombRead: BitRead + MinimalBinaryRead {
    fn read_golomb(&mut self, m: u64) -> Result<u64> {
        guarded_read(self, |backend| default_read_golomb(backend, m))
    }
}

/// Trait for writing Golomb codes.
pub trait GolombWrite: BitWrite + MinimalBinaryWrite {
    fn write_golomb(&mut self, n: u64, m: u64) -> Result<usize> {
        guarded_write(self, |backend| default_write_golomb(backend, n, m))
    }
}

fn default_read_golomb<B: BitRead + ?Sized>(backend: &mut B, m: u64) -> Result<u64> {
    check_modulus(m, backend.mask())?;
    let quotient = backend.read_unary()?;
    let remainder = backend.read_minimal_binary(m)?;
    quotient
        .checked_mul(m)
        .and_then(|q| q.checked_add(remainder))
        .filter(|&value| value <= backend.mask())
        .ok_or(Error::Corruption(
            "Golomb codeword decodes beyond the stream width",
        ))
}

fn default_write_golomb<B: BitWrite + ?Sized>(backend: &mut B, n: u64, m: u64) -> Result<usize> {
    check_modulus(m, backend.mask())?;
    backend.check_value(n)?;
    Ok(backend.write_unary(n / m)? + backend.write_minimal_binary(n % m, m)?)
}

impl<B: BitRead + ?Sized> GolombRead for B {}
impl<B: BitWrite + ?Sized> GolombWrite for B {}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_bits() -> Result<()> {
        // modulus 3: remainders code as 0, 10, 11
        for (value, expected) in [
            (0, "10"),
            (1, "110"),
            (2, "111"),
            (3, "010"),
            (5, "0111"),
            (9, "00010"),
        ] {
            let mut stream = BitStream::with_max_bits(64)?;
            assert_eq!(stream.write_golomb(value, 3)?, expected.len());
            assert_eq!(len_golomb(value, 3), expected.len());
            assert_eq!(stream.to_string(), expected);
            stream.rewind_for_read();
            assert_eq!(stream.read_golomb(3)?, value);
        }
        Ok(())
    }

    #[test]
    fn test_bad_modulus() -> Result<()> {
        let mut stream = BitStream::with_max_bits(16)?;
        assert!(matches!(
            stream.write_golomb(0, 0),
            Err(Error::BadArgument(_))
        ));
        assert!(matches!(
            stream.write_golomb(0, 1 << 16),
            Err(Error::BadArgument(_))
        ));
        assert!(stream.is_empty());
        Ok(())
    }
}
