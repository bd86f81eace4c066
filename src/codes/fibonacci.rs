/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fibonacci code (order 2, the C¹ code of Fraenkel and Klein).
//!
//! The codeword of `n` is the Zeckendorf representation of `n + 1` over the
//! Fibonacci basis 1, 2, 3, 5, 8, …, written lowest index first, followed
//! by a closing `1`: since no Zeckendorf representation contains two
//! consecutive ones, every codeword ends with the unique pair `11`, which
//! is what the decoder scans for. A codeword that runs off the end of the
//! stream without its `11` is corruption.
//!
//! The basis is computed once per process and capped at the largest
//! Fibonacci number that fits a `u64`, which is enough to cover `2^W` for
//! every stream width.
//!
//! # References
//!
//! Aviezri S. Fraenkel, Shmuel T. Klein. “Robust universal complete codes
//! for transmission and compression”, Discrete Applied Mathematics,
//! vol. 64, no. 1, pp. 31–55, 1996, doi:
//! <https://doi.org/10.1016/0166-218X(93)00116-H>.

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::traits::*;

static BASIS: OnceLock<Vec<u64>> = OnceLock::new();

/// The memoized Fibonacci basis 1, 2, 3, 5, 8, …, up to the largest value
/// fitting a `u64`.
pub(crate) fn basis() -> &'static [u64] {
    BASIS.get_or_init(|| {
        let mut basis = vec![1_u64, 2];
        loop {
            let n = basis.len();
            match basis[n - 1].checked_add(basis[n - 2]) {
                Some(next) => basis.push(next),
                None => break,
            }
        }
        basis
    })
}

/// Returns the index of the largest basis element not above `m ≥ 1`.
fn top_index(m: u128) -> usize {
    let basis = basis();
    let mut top = 0;
    while top + 1 < basis.len() && basis[top + 1] as u128 <= m {
        top += 1;
    }
    top
}

/// Returns the length of the Fibonacci code for `n`.
#[must_use]
#[inline]
pub fn len_fibonacci(n: u64) -> usize {
    top_index(n as u128 + 1) + 2
}

/// Trait for reading Fibonacci codes.
pub trait FibonacciRead: BitRead {
    fn read_fibonacci(&mut self) -> Result<u64> {
        guarded_read(self, default_read_fibonacci)
    }
}

/// Trait for writing Fibonacci codes.
pub trait FibonacciWrite: BitWrite {
    fn write_fibonacci(&mut self, n: u64) -> Result<usize> {
        guarded_write(self, |backend| default_write_fibonacci(backend, n))
    }
}

fn default_read_fibonacci<B: BitRead + ?Sized>(backend: &mut B) -> Result<u64> {
    let basis = basis();
    let mut sum: u128 = 0;
    let mut previous = false;
    let mut index = 0;
    loop {
        let bit = unterminated(backend.read_bits(1))? == 1;
        if bit && previous {
            let value = sum - 1;
            if value > backend.mask() as u128 {
                return Err(Error::Corruption(
                    "Fibonacci codeword decodes beyond the stream width",
                ));
            }
            return Ok(value as u64);
        }
        if bit {
            if index >= basis.len() {
                return Err(Error::Corruption(
                    "Fibonacci codeword decodes beyond the stream width",
                ));
            }
            sum += basis[index] as u128;
        }
        previous = bit;
        index += 1;
    }
}

/// The `11` terminator is part of the code: running out of bits without it
/// means the codeword is malformed.
fn unterminated(res: Result<u64>) -> Result<u64> {
    res.map_err(|e| match e {
        Error::Underflow { .. } => {
            Error::Corruption("Fibonacci codeword missing its 11 terminator")
        }
        e => e,
    })
}

fn default_write_fibonacci<B: BitWrite + ?Sized>(backend: &mut B, n: u64) -> Result<usize> {
    backend.check_value(n)?;
    let basis = basis();
    let mut m = n as u128 + 1;
    let top = top_index(m);
    let mut bits = vec![false; top + 1];
    for (index, &f) in basis[..=top].iter().enumerate().rev() {
        if f as u128 <= m {
            bits[index] = true;
            m -= f as u128;
        }
    }
    debug_assert_eq!(m, 0);
    let mut written = 0;
    for &bit in &bits {
        written += backend.write_bits(bit as u64, 1)?;
    }
    Ok(written + backend.write_bits(1, 1)?)
}

impl<B: BitRead + ?Sized> FibonacciRead for B {}
impl<B: BitWrite + ?Sized> FibonacciWrite for B {}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_basis() {
        let basis = super::basis();
        assert_eq!(&basis[..8], &[1, 2, 3, 5, 8, 13, 21, 34]);
        // the basis covers 2^64, the largest value + 1 any stream needs
        assert_eq!(basis.last(), Some(&12_200_160_415_121_876_738));
    }

    #[test]
    fn test_bits() -> Result<()> {
        for (value, expected) in [
            (0, "11"),
            (1, "011"),
            (2, "0011"),
            (3, "1011"),
            (4, "00011"),
            (5, "10011"),
            (6, "01011"),
            (7, "000011"),
            (13, "1000011"),
            (99, "00101000011"),
        ] {
            let mut stream = BitStream::with_max_bits(64)?;
            assert_eq!(stream.write_fibonacci(value)?, expected.len());
            assert_eq!(len_fibonacci(value), expected.len());
            assert_eq!(stream.to_string(), expected);
            stream.rewind_for_read();
            assert_eq!(stream.read_fibonacci()?, value);
        }
        Ok(())
    }

    #[test]
    fn test_sentinel() -> Result<()> {
        for width in [16, 32, 64] {
            let mut stream = BitStream::with_max_bits(width)?;
            let mask = BitWrite::mask(&stream);
            stream.write_fibonacci(mask)?;
            stream.rewind_for_read();
            assert_eq!(stream.read_fibonacci()?, mask);
        }
        Ok(())
    }

    #[test]
    fn test_unterminated_is_corrupt() -> Result<()> {
        let mut stream = BitStream::with_max_bits(64)?;
        stream.write_bits(0b10101, 5)?;
        stream.rewind_for_read();
        assert!(matches!(
            stream.read_fibonacci(),
            Err(Error::Corruption(_))
        ));
        assert_eq!(stream.pos()?, 0);
        Ok(())
    }
}
