/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Rice codes.
//!
//! Rice codes (AKA Golomb–Rice codes) are [Golomb codes](super::golomb)
//! whose modulus is a power of two `2^k`: the quotient `⌊x / 2^k⌋` goes out
//! in unary and the remainder is exactly the low `k` bits, so encoding and
//! decoding need no division. The parameter must satisfy `0 ≤ k ≤ W`.
//!
//! # References
//!
//! Robert F. Rice, “Some practical universal noiseless coding techniques”.
//! Jet Propulsion Laboratory, Pasadena, CA, Tech. Rep. JPL-79-22, March
//! 1979.

use crate::error::{Error, Result};
use crate::traits::*;

/// Returns the length of the Rice code for `n` with parameter `k`.
#[must_use]
#[inline(always)]
pub fn len_rice(n: u64, k: usize) -> usize {
    let quotient = if k >= 64 { 0 } else { n >> k };
    quotient as usize + 1 + k
}

pub(crate) fn check_log(k: usize, max_bits: u32) -> Result<()> {
    if k > max_bits as usize {
        return Err(Error::BadArgument(format!(
            "Rice parameter {k} larger than the stream width {max_bits}"
        )));
    }
    Ok(())
}

/// Trait for reading Rice codes.
pub trait RiceRead: BitRead {
    fn read_rice(&mut self, k: usize) -> Result<u64> {
        guarded_read(self, |backend| default_read_rice(backend, k))
    }
}

/// Trait for writing Rice codes.
pub trait RiceWrite: BitWrite {
    fn write_rice(&mut self, n: u64, k: usize) -> Result<usize> {
        guarded_write(self, |backend| default_write_rice(backend, n, k))
    }
}

fn default_read_rice<B: BitRead + ?Sized>(backend: &mut B, k: usize) -> Result<u64> {
    check_log(k, backend.max_bits())?;
    let quotient = backend.read_unary()? as u128;
    let remainder = if k == 0 { 0 } else { backend.read_bits(k)? };
    let value = (quotient << k) + remainder as u128;
    if value > backend.mask() as u128 {
        return Err(Error::Corruption(
            "Rice codeword decodes beyond the stream width",
        ));
    }
    Ok(value as u64)
}

fn default_write_rice<B: BitWrite + ?Sized>(backend: &mut B, n: u64, k: usize) -> Result<usize> {
    check_log(k, backend.max_bits())?;
    backend.check_value(n)?;
    let quotient = if k >= 64 { 0 } else { n >> k };
    let mut written = backend.write_unary(quotient)?;
    if k > 0 {
        written += backend.write_bits(n & low_mask(k as u32), k)?;
    }
    Ok(written)
}

impl<B: BitRead + ?Sized> RiceRead for B {}
impl<B: BitWrite + ?Sized> RiceWrite for B {}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_bits() -> Result<()> {
        for (value, k, expected) in [
            (0, 0, "1"),
            (0, 2, "100"),
            (3, 2, "111"),
            (4, 2, "0100"),
            (11, 2, "00111"),
            (11, 3, "01011"),
        ] {
            let mut stream = BitStream::with_max_bits(64)?;
            assert_eq!(stream.write_rice(value, k)?, expected.len());
            assert_eq!(len_rice(value, k), expected.len());
            assert_eq!(stream.to_string(), expected);
            stream.rewind_for_read();
            assert_eq!(stream.read_rice(k)?, value);
        }
        Ok(())
    }

    #[test]
    fn test_rice_matches_golomb() -> Result<()> {
        for k in 0..6 {
            for n in 0..200 {
                let mut rice = BitStream::with_max_bits(32)?;
                let mut golomb = BitStream::with_max_bits(32)?;
                rice.write_rice(n, k)?;
                golomb.write_golomb(n, 1 << k)?;
                assert_eq!(rice.to_string(), golomb.to_string());
            }
        }
        Ok(())
    }
}
