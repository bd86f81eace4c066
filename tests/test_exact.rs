/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Pinned codeword strings, so a change in conventions cannot slip through
//! the round-trip tests unnoticed.

use anyhow::Result;
use universal_codes::prelude::*;

#[test]
fn test_unary_bits() -> Result<()> {
    let mut stream = BitStream::new();
    stream.write_unary(5)?;
    assert_eq!(stream.to_string(), "000001");
    stream.erase_for_write();
    stream.write_unary1(5)?;
    assert_eq!(stream.to_string(), "111110");
    Ok(())
}

#[test]
fn test_gamma_bits() -> Result<()> {
    let mut stream = BitStream::new();
    stream.write_gamma(0)?;
    stream.write_gamma(1)?;
    stream.write_gamma(2)?;
    assert_eq!(stream.to_string(), concat!("1", "010", "011"));
    Ok(())
}

#[test]
fn test_delta_bits() -> Result<()> {
    let mut stream = BitStream::new();
    stream.write_delta(13)?;
    assert_eq!(stream.to_string(), "00100110");
    stream.rewind_for_read();
    assert_eq!(stream.read_delta()?, 13);
    Ok(())
}

#[test]
fn test_omega_bits() -> Result<()> {
    // the block chain of 14 is 11 1110 0
    let mut stream = BitStream::new();
    stream.write_omega(13)?;
    assert_eq!(stream.to_string(), "1111100");
    stream.rewind_for_read();
    assert_eq!(stream.read_omega()?, 13);
    Ok(())
}

#[test]
fn test_fibonacci_bits() -> Result<()> {
    let mut stream = BitStream::new();
    stream.write_fibonacci(13)?;
    assert_eq!(stream.to_string(), "1000011");
    stream.rewind_for_read();
    assert_eq!(stream.read_fibonacci()?, 13);
    Ok(())
}

/// Encode/decode pairs preserve FIFO order exactly across codes.
#[test]
fn test_fifo_order() -> Result<()> {
    let mut stream = BitStream::new();
    stream.write_unary(3)?;
    stream.write_gamma(14)?;
    stream.write_fibonacci(99)?;
    stream.write_rice(21, 2)?;
    stream.write_delta(0)?;
    stream.rewind_for_read();
    assert_eq!(stream.read_unary()?, 3);
    assert_eq!(stream.read_gamma()?, 14);
    assert_eq!(stream.read_fibonacci()?, 99);
    assert_eq!(stream.read_rice(2)?, 21);
    assert_eq!(stream.read_delta()?, 0);
    assert_eq!(stream.remaining_bits(), 0);
    Ok(())
}
