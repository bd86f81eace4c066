/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Gamma-Golomb codes.
//!
//! [Golomb codes](super::golomb) whose unary quotient is replaced by the
//! [γ code](super::gamma), making the code universal for any modulus: the
//! quotient grows logarithmically instead of linearly. The code for `m = 1`
//! is exactly the γ code, and for `m = 2^k` it coincides with the
//! [exponential Golomb code](super::exp_golomb) of parameter `k`.

use super::gamma::{len_gamma, GammaRead, GammaWrite};
use super::golomb::check_modulus;
use super::minimal_binary::{len_minimal_binary, MinimalBinaryRead, MinimalBinaryWrite};
use crate::error::{Error, Result};
use crate::traits::*;

/// Returns the length of the gamma-Golomb code for `n` with modulus `m`.
#[must_use]
#[inline]
pub fn len_gamma_golomb(n: u64, m: u64) -> usize {
    len_gamma(n / m) + len_minimal_binary(n % m, m)
}

/// Trait for reading gamma-Golomb codes.
pub trait GammaGolombRead: BitRead + GammaRead + MinimalBinaryRead {
    fn read_gamma_golomb(&mut self, m: u64) -> Result<u64> {
        guarded_read(self, |backend| default_read_gamma_golomb(backend, m))
    }
}

/// Trait for writing gamma-Golomb codes.
pub trait GammaGolombWrite: BitWrite + GammaWrite + MinimalBinaryWrite {
    fn write_gamma_golomb(&mut self, n: u64, m: u64) -> Result<usize> {
        guarded_write(self, |backend| default_write_gamma_golomb(backend, n, m))
    }
}

fn default_read_gamma_golomb<B: BitRead + ?Sized>(backend: &mut B, m: u64) -> Result<u64> {
    check_modulus(m, backend.mask())?;
    let quotient = backend.read_gamma()?;
    let remainder = backend.read_minimal_binary(m)?;
    quotient
        .checked_mul(m)
        .and_then(|q| q.checked_add(remainder))
        .filter(|&value| value <= backend.mask())
        .ok_or(Error::Corruption(
            "gamma-Golomb codeword decodes beyond the stream width",
        ))
}

fn default_write_gamma_golomb<B: BitWrite + ?Sized>(backend: &mut B, n: u64, m: u64) -> Result<usize> {
    check_modulus(m, backend.mask())?;
    backend.check_value(n)?;
    Ok(backend.write_gamma(n / m)? + backend.write_minimal_binary(n % m, m)?)
}

impl<B: BitRead + ?Sized> GammaGolombRead for B {}
impl<B: BitWrite + ?Sized> GammaGolombWrite for B {}

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
            (3, "0100"),
            (5, "01011"),
            (9, "001000"),
        ] {
            let mut stream = BitStream::with_max_bits(64)?;
            assert_eq!(stream.write_gamma_golomb(value, 3)?, expected.len());
            assert_eq!(len_gamma_golomb(value, 3), expected.len());
            assert_eq!(stream.to_string(), expected);
            stream.rewind_for_read();
            assert_eq!(stream.read_gamma_golomb(3)?, value);
        }
        Ok(())
    }

    #[test]
    fn test_unit_modulus_is_gamma() -> Result<()> {
        for n in 0..200 {
            let mut gg = BitStream::with_max_bits(32)?;
            let mut gamma = BitStream::with_max_bits(32)?;
            gg.write_gamma_golomb(n, 1)?;
            gamma.write_gamma(n)?;
            assert_eq!(gg.to_string(), gamma.to_string());
        }
        Ok(())
    }
}
