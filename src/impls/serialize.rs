/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Text, raw, and store serialization for [`BitStream`].
//!
//! The text form is a string of exactly `len` characters from `{'0', '1'}`,
//! MSB-first, with no separators. The raw form is the same bits packed into
//! bytes, with the last byte zero-padded; the bit length is not part of the
//! raw bytes and must travel out of band. The store form prefixes the raw
//! payload with any caller header lines and the bit length as eight
//! big-endian bytes.

use core::fmt;
use core::str::FromStr;
use std::io::{BufRead, Read, Write};

use log::debug;

use crate::error::{Error, Result};
use crate::impls::BitStream;

impl fmt::Display for BitStream {
    /// Writes the stream as `len` characters from `{'0', '1'}`, MSB-first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len() {
            f.write_str(if self.bit(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitStream {
    type Err = Error;

    /// Parses a `'0'`/`'1'` string into a stream of the platform's natural
    /// width, reading at position 0.
    fn from_str(s: &str) -> Result<Self> {
        let mut stream = BitStream::new();
        stream.from_string(s, None)?;
        Ok(stream)
    }
}

impl BitStream {
    /// Replaces the stream contents with the first `nbits` bits of `s`
    /// (all of them when `nbits` is `None`) and leaves the stream reading
    /// at position 0.
    ///
    /// Fails with [`BadArgument`](Error::BadArgument), leaving the stream
    /// untouched, if `s` contains a character outside `{'0', '1'}` or
    /// `nbits` exceeds the length of `s`.
    pub fn from_string(&mut self, s: &str, nbits: Option<usize>) -> Result<()> {
        let nbits = nbits.unwrap_or(s.len());
        if nbits > s.len() {
            return Err(Error::BadArgument(format!(
                "{nbits} bits requested from a string of {} characters",
                s.len()
            )));
        }
        let mut words = vec![0_u64; (nbits + 63) / 64];
        for (i, c) in s.chars().enumerate() {
            match c {
                '0' => {}
                '1' => {
                    if i < nbits {
                        words[i / 64] |= 1 << (63 - i % 64);
                    }
                }
                _ => {
                    return Err(Error::BadArgument(format!(
                        "character {c:?} at index {i} is not a bit"
                    )))
                }
            }
        }
        self.replace(words, nbits as u64);
        Ok(())
    }

    /// Returns the stream as packed bytes, MSB-first, with the last byte
    /// zero-padded.
    ///
    /// The bit length is not encoded in the bytes; pair the result with
    /// [`len`](BitStream::len) to reconstruct the stream through
    /// [`from_raw`](BitStream::from_raw).
    pub fn to_raw(&self) -> Vec<u8> {
        let nbytes = ((self.len() + 7) / 8) as usize;
        let mut bytes = Vec::with_capacity(self.words().len() * 8);
        for word in self.words() {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        bytes.truncate(nbytes);
        bytes
    }

    /// Replaces the stream contents with the first `nbits` bits of `bytes`
    /// and leaves the stream reading at position 0.
    pub fn from_raw(&mut self, bytes: &[u8], nbits: u64) -> Result<()> {
        if nbits > bytes.len() as u64 * 8 {
            return Err(Error::BadArgument(format!(
                "{nbits} bits requested from {} bytes",
                bytes.len()
            )));
        }
        let mut words = Vec::with_capacity((bytes.len() + 7) / 8);
        for chunk in bytes.chunks(8) {
            let mut word = [0_u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            words.push(u64::from_be_bytes(word));
        }
        self.replace(words, nbits);
        Ok(())
    }

    /// Writes the stream to `writer` in the store format: the header lines
    /// attached to this stream, if any, then the bit length as eight
    /// big-endian bytes, then the raw payload.
    pub fn write_store<W: Write>(&self, mut writer: W) -> Result<()> {
        if let Some(header) = self.file_header() {
            writer.write_all(header.as_bytes())?;
            if !header.ends_with('\n') {
                writer.write_all(b"\n")?;
            }
        }
        writer.write_all(&self.len().to_be_bytes())?;
        writer.write_all(&self.to_raw())?;
        writer.flush()?;
        debug!("stored {} bits", self.len());
        Ok(())
    }

    /// Reads a stream in the store format from `reader`, consuming the
    /// first `header_lines` lines verbatim into the stream's header.
    ///
    /// The stream is returned reading at position 0, with the platform's
    /// natural width. A payload shorter than the declared bit length fails
    /// with [`Corruption`](Error::Corruption).
    pub fn read_store<R: BufRead>(mut reader: R, header_lines: usize) -> Result<Self> {
        let mut header = String::new();
        for _ in 0..header_lines {
            if reader.read_line(&mut header)? == 0 {
                return Err(Error::Corruption("store ends inside the header"));
            }
        }
        let mut len = [0_u8; 8];
        reader.read_exact(&mut len).map_err(|_| {
            Error::Corruption("store too short to hold a bit length")
        })?;
        let len = u64::from_be_bytes(len);
        let mut bytes = vec![0_u8; ((len + 7) / 8) as usize];
        reader.read_exact(&mut bytes).map_err(|_| {
            Error::Corruption("store payload shorter than its declared bit length")
        })?;
        debug!("loaded {len} bits");
        let mut stream = BitStream::new();
        stream.from_raw(&bytes, len)?;
        if !header.is_empty() {
            stream.set_file_header(header);
        }
        Ok(stream)
    }

    /// Reads the remaining input as one raw payload whose bit length is
    /// `8 ×` the number of bytes read. This is the byte-aligned variant of
    /// [`read_store`](BitStream::read_store) for payloads produced without
    /// a length prefix.
    pub fn read_raw<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let mut stream = BitStream::new();
        let nbits = bytes.len() as u64 * 8;
        stream.from_raw(&bytes, nbits)?;
        Ok(stream)
    }
}
