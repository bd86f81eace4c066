/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Levenstein's code.
//!
//! The code of 0 is `0`. The code of a positive integer `n` is built by
//! chaining: strip the most significant bit of `n` and keep the remaining
//! `⌊log₂ n⌋` bits as a payload, then recurse on `⌊log₂ n⌋` until it
//! reaches 1. The codeword is the count of chain steps in
//! [inverted unary](crate::traits::BitWrite::write_unary1) followed by the
//! payloads from the innermost out, each telling the length of the next.
//!
//! The public operations are indexed from 0 by encoding `n + 1`, so the
//! bare `0` codeword never appears in a well-formed stream and decodes as
//! corruption. The chain arithmetic runs in `u128`, which makes the
//! all-ones value of any stream width an ordinary codeword.

use crate::error::{Error, Result};
use crate::traits::*;

/// Returns the length of the Levenstein code for `n`.
#[must_use]
#[inline]
pub fn len_levenstein(n: u64) -> usize {
    let mut payload = 0;
    let mut count = 1_u64;
    let mut m = n as u128 + 1;
    while m > 1 {
        let l = m.ilog2();
        payload += l as usize;
        count += 1;
        m = l as u128;
    }
    payload + count as usize + 1
}

/// Trait for reading Levenstein codes.
pub trait LevensteinRead: BitRead {
    fn read_levenstein(&mut self) -> Result<u64> {
        guarded_read(self, default_read_levenstein)
    }
}

/// Trait for writing Levenstein codes.
pub trait LevensteinWrite: BitWrite {
    fn write_levenstein(&mut self, n: u64) -> Result<usize> {
        guarded_write(self, |backend| default_write_levenstein(backend, n))
    }
}

fn default_read_levenstein<B: BitRead + ?Sized>(backend: &mut B) -> Result<u64> {
    let width = backend.max_bits();
    let count = backend.read_unary1()?;
    if count == 0 {
        return Err(Error::Corruption("Levenstein codeword for the value zero"));
    }
    let mut m: u128 = 1;
    for _ in 1..count {
        if m > width as u128 {
            return Err(Error::Corruption(
                "Levenstein block longer than the stream width",
            ));
        }
        let block = backend.read_bits(m as usize)?;
        m = (1_u128 << m) | block as u128;
    }
    let value = m - 1;
    if value > backend.mask() as u128 {
        return Err(Error::Corruption(
            "Levenstein codeword decodes beyond the stream width",
        ));
    }
    Ok(value as u64)
}

fn default_write_levenstein<B: BitWrite + ?Sized>(backend: &mut B, n: u64) -> Result<usize> {
    backend.check_value(n)?;
    let mut payloads: Vec<(u64, u32)> = Vec::new();
    let mut m = n as u128 + 1;
    while m > 1 {
        let l = m.ilog2();
        payloads.push(((m & ((1_u128 << l) - 1)) as u64, l));
        m = l as u128;
    }
    let mut written = backend.write_unary1(payloads.len() as u64 + 1)?;
    for &(payload, l) in payloads.iter().rev() {
        written += backend.write_bits(payload, l as usize)?;
    }
    Ok(written)
}

impl<B: BitRead + ?Sized> LevensteinRead for B {}
impl<B: BitWrite + ?Sized> LevensteinWrite for B {}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_bits() -> Result<()> {
        for (value, expected) in [
            (0, "10"),
            (1, "1100"),
            (2, "1101"),
            (3, "1110000"),
            (4, "1110001"),
            (7, "11101000"),
            (15, "111100000000"),
            (99, "11110010100100"),
        ] {
            let mut stream = BitStream::with_max_bits(64)?;
            assert_eq!(stream.write_levenstein(value)?, expected.len());
            assert_eq!(len_levenstein(value), expected.len());
            assert_eq!(stream.to_string(), expected);
            stream.rewind_for_read();
            assert_eq!(stream.read_levenstein()?, value);
        }
        Ok(())
    }

    #[test]
    fn test_sentinel() -> Result<()> {
        for width in [16, 32, 64] {
            let mut stream = BitStream::with_max_bits(width)?;
            let mask = BitWrite::mask(&stream);
            stream.write_levenstein(mask)?;
            stream.rewind_for_read();
            assert_eq!(stream.read_levenstein()?, mask);
        }
        Ok(())
    }

    #[test]
    fn test_zero_count_is_corrupt() -> Result<()> {
        let mut stream = BitStream::with_max_bits(64)?;
        stream.write_bits(0, 1)?;
        stream.rewind_for_read();
        assert!(matches!(
            stream.read_levenstein(),
            Err(Error::Corruption(_))
        ));
        Ok(())
    }
}
