/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A registry mapping code names to encoder/decoder pairs.
//!
//! Where [`Codes`](super::Codes) is a closed enum, a [`CodeRegistry`] is an
//! open table: it resolves textual specifications such as `"rice(3)"` to a
//! [`Codec`], a pair of boxed encode/decode functions bound to a
//! [`BitStream`], and accepts user-defined codes through
//! [`add_code`](CodeRegistry::add_code). The registry is meant to be
//! populated during initialization and shared read-only afterwards.
//!
//! ```
//! use universal_codes::prelude::*;
//!
//! # fn main() -> universal_codes::Result<()> {
//! let registry = CodeRegistry::new();
//! let codec = registry.lookup("golomb(3)")?;
//! let mut stream = BitStream::new();
//! codec.encode(&mut stream, 5)?;
//! stream.rewind_for_read();
//! assert_eq!(codec.decode(&mut stream)?, 5);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use log::trace;

use super::dispatch::{split_spec, Codes};
use crate::error::{Error, Result};
use crate::impls::BitStream;

/// A boxed encoding function: writes one value and returns the number of
/// bits written.
pub type Encoder = Box<dyn Fn(&mut BitStream, u64) -> Result<usize> + Send + Sync>;

/// A boxed decoding function: reads one value.
pub type Decoder = Box<dyn Fn(&mut BitStream) -> Result<u64> + Send + Sync>;

/// A code resolved by a [`CodeRegistry`]: the canonical name, with its
/// parsed parameter, and the encoder/decoder pair.
pub struct Codec {
    name: String,
    encoder: Encoder,
    decoder: Decoder,
}

impl Codec {
    /// Builds a codec from a name and an encoder/decoder pair.
    pub fn new(name: impl Into<String>, encoder: Encoder, decoder: Decoder) -> Self {
        Self {
            name: name.into(),
            encoder,
            decoder,
        }
    }

    /// The canonical specification of this codec, parameters included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes `value` to `stream` and returns the number of bits written.
    pub fn encode(&self, stream: &mut BitStream, value: u64) -> Result<usize> {
        (self.encoder)(stream, value)
    }

    /// Reads one value from `stream`.
    pub fn decode(&self, stream: &mut BitStream) -> Result<u64> {
        (self.decoder)(stream)
    }
}

impl core::fmt::Debug for Codec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Codec").field("name", &self.name).finish()
    }
}

/// Builds a [`Codec`] from the lowercase name it was registered under and
/// the raw parameter text of the specification, or fails with
/// [`BadArgument`](Error::BadArgument) if the parameters do not parse.
pub type CodecBuilder = fn(name: &str, params: Option<&str>) -> Result<Codec>;

fn builtin_builder(name: &str, params: Option<&str>) -> Result<Codec> {
    let spec = match params {
        Some(params) => format!("{name}({params})"),
        None => name.to_string(),
    };
    let code: Codes = spec.parse()?;
    let decode = code.clone();
    Ok(Codec::new(
        code.to_string(),
        Box::new(move |stream, value| code.write(stream, value)),
        Box::new(move |stream| decode.read(stream)),
    ))
}

/// A name → builder table resolving textual code specifications.
pub struct CodeRegistry {
    builders: HashMap<String, CodecBuilder>,
}

impl CodeRegistry {
    /// Creates a registry holding all the codes of this library, under the
    /// names recognized by [`Codes`](super::Codes) parsing.
    pub fn new() -> Self {
        let mut registry = Self {
            builders: HashMap::new(),
        };
        for name in [
            "unary",
            "unary1",
            "gamma",
            "delta",
            "omega",
            "levenstein",
            "evenrodeh",
            "fib",
            "fibonacci",
            "golomb",
            "rice",
            "gammagolomb",
            "expgolomb",
            "startstop",
        ] {
            registry.add_code(name, builtin_builder);
        }
        registry
    }

    /// Registers a builder under `name` (case-insensitive), replacing any
    /// previous entry with that name.
    pub fn add_code(&mut self, name: &str, builder: CodecBuilder) {
        trace!("registering code {name:?}");
        self.builders.insert(name.to_ascii_lowercase(), builder);
    }

    /// Resolves a specification such as `"gamma"` or `"startstop(3-2-3)"`
    /// to a [`Codec`].
    ///
    /// Fails with [`UnknownCode`](Error::UnknownCode) if the name is not
    /// registered, and with whatever error the builder returns if the
    /// parameters are invalid.
    pub fn lookup(&self, spec: &str) -> Result<Codec> {
        let (name, params) = split_spec(spec)?;
        let builder = self
            .builders
            .get(&name)
            .ok_or_else(|| Error::UnknownCode(spec.trim().to_string()))?;
        builder(&name, params)
    }

    /// The registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }
}

impl Default for CodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
