/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Exponential Golomb codes.
//!
//! The exponential Golomb code with parameter `k` of a natural number `x`
//! is `⌊x / 2^k⌋` in [γ code](super::gamma) followed by `x mod 2^k` in `k`
//! bits: a [Rice code](super::rice) whose unary quotient is replaced by γ.
//! The code for `k = 0` is exactly the γ code.
//!
//! Exponential Golomb codes are used in H.264 and H.265.

use super::gamma::{len_gamma, GammaRead, GammaWrite};
use super::rice::check_log;
use crate::error::{Error, Result};
use crate::traits::*;

/// Returns the length of the exponential Golomb code for `n` with
/// parameter `k`.
#[must_use]
#[inline]
pub fn len_exp_golomb(n: u64, k: usize) -> usize {
    let quotient = if k >= 64 { 0 } else { n >> k };
    len_gamma(quotient) + k
}

/// Trait for reading exponential Golomb codes.
pub trait ExpGolombRead: BitRead + GammaRead {
    fn read_exp_golomb(&mut self, k: usize) -> Result<u64> {
        guarded_read(self, |backend| default_read_exp_golomb(backend, k))
    }
}

/// Trait for writing exponential Golomb codes.
pub trait ExpGolombWrite: BitWrite + GammaWrite {
    fn write_exp_golomb(&mut self, n: u64, k: usize) -> Result<usize> {
        guarded_write(self, |backend| default_write_exp_golomb(backend, n, k))
    }
}

fn default_read_exp_golomb<B: BitRead + ?Sized>(backend: &mut B, k: usize) -> Result<u64> {
    check_log(k, backend.max_bits())?;
    let quotient = backend.read_gamma()? as u128;
    let remainder = if k == 0 { 0 } else { backend.read_bits(k)? };
    let value = (quotient << k) + remainder as u128;
    if value > backend.mask() as u128 {
        return Err(Error::Corruption(
            "exponential Golomb codeword decodes beyond the stream width",
        ));
    }
    Ok(value as u64)
}

fn default_write_exp_golomb<B: BitWrite + ?Sized>(backend: &mut B, n: u64, k: usize) -> Result<usize> {
    check_log(k, backend.max_bits())?;
    backend.check_value(n)?;
    let quotient = if k >= 64 { 0 } else { n >> k };
    let mut written = backend.write_gamma(quotient)?;
    if k > 0 {
        written += backend.write_bits(n & low_mask(k as u32), k)?;
    }
    Ok(written)
}

impl<B: BitRead + ?Sized> ExpGolombRead for B {}
impl<B: BitWrite + ?Sized> ExpGolombWrite for B {}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_bits() -> Result<()> {
        for (value, k, expected) in [
            (0, 0, "1"),
            (0, 1, "10"),
            (1, 1, "11"),
            (2, 1, "0100"),
            (11, 2, "01111"),
            (14, 2, "0010010"),
        ] {
            let mut stream = BitStream::with_max_bits(64)?;
            assert_eq!(stream.write_exp_golomb(value, k)?, expected.len());
            assert_eq!(len_exp_golomb(value, k), expected.len());
            assert_eq!(stream.to_string(), expected);
            stream.rewind_for_read();
            assert_eq!(stream.read_exp_golomb(k)?, value);
        }
        Ok(())
    }

    #[test]
    fn test_zero_parameter_is_gamma() -> Result<()> {
        for n in 0..200 {
            let mut exp = BitStream::with_max_bits(32)?;
            let mut gamma = BitStream::with_max_bits(32)?;
            exp.write_exp_golomb(n, 0)?;
            gamma.write_gamma(n)?;
            assert_eq!(exp.to_string(), gamma.to_string());
        }
        Ok(())
    }
}
