/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Dynamic dispatch for codes.
//!
//! The code traits in the sibling modules select a code at compile time. In
//! many contexts, however, one does not want to commit to a specific code:
//! a stream encoder might let the user choose depending on the expected
//! distribution of the values. The [`Codes`] enum represents every code
//! supported by the library, with parametric variants carrying their
//! parameter, and dispatches reads and writes to the right trait method.
//!
//! Both [`Display`](core::fmt::Display) and [`FromStr`](core::str::FromStr)
//! are implemented in a dual way, so a code can be stored as a string such
//! as `"rice(3)"` or `"startstop(0-1-2-3-3-3-3)"` in a configuration file
//! and parsed back. Names are case-insensitive, and `fib` and `fibonacci`
//! are synonyms.
//!
//! Equality is semantic rather than structural: some parameter choices make
//! different families coincide, so, for example,
//! `Codes::Unary == Codes::Rice { k: 0 }` and
//! `Codes::Gamma == Codes::ExpGolomb { k: 0 }`.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use super::*;
use crate::error::{Error, Result};
use crate::traits::{BitRead, BitWrite};

/// An enum whose variants represent all the available codes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[non_exhaustive]
pub enum Codes {
    Unary,
    Unary1,
    Gamma,
    Delta,
    Omega,
    Levenstein,
    EvenRodeh,
    Fibonacci,
    Golomb { m: u64 },
    Rice { k: usize },
    GammaGolomb { m: u64 },
    ExpGolomb { k: usize },
    StartStop { steps: Vec<u32> },
}

/// Maps the members of the Golomb family onto their quotient code and
/// modulus, so that equivalent parameter choices compare equal.
fn golomb_class(code: &Codes) -> Option<(bool, u128)> {
    Some(match code {
        Codes::Unary => (false, 1),
        Codes::Golomb { m } => (false, *m as u128),
        Codes::Rice { k } if *k < 128 => (false, 1_u128 << k),
        Codes::Gamma => (true, 1),
        Codes::GammaGolomb { m } => (true, *m as u128),
        Codes::ExpGolomb { k } if *k < 128 => (true, 1_u128 << k),
        _ => return None,
    })
}

impl PartialEq for Codes {
    fn eq(&self, other: &Self) -> bool {
        match (golomb_class(self), golomb_class(other)) {
            (Some(a), Some(b)) => a == b,
            _ => match (self, other) {
                (Codes::Unary1, Codes::Unary1)
                | (Codes::Delta, Codes::Delta)
                | (Codes::Omega, Codes::Omega)
                | (Codes::Levenstein, Codes::Levenstein)
                | (Codes::EvenRodeh, Codes::EvenRodeh)
                | (Codes::Fibonacci, Codes::Fibonacci) => true,
                (Codes::Rice { k }, Codes::Rice { k: other }) => k == other,
                (Codes::ExpGolomb { k }, Codes::ExpGolomb { k: other }) => k == other,
                (Codes::StartStop { steps }, Codes::StartStop { steps: other }) => steps == other,
                _ => false,
            },
        }
    }
}

impl Eq for Codes {}

impl Codes {
    /// Reads one value with this code.
    pub fn read<B: CodesRead>(&self, reader: &mut B) -> Result<u64> {
        match self {
            Codes::Unary => reader.read_unary(),
            Codes::Unary1 => reader.read_unary1(),
            Codes::Gamma => reader.read_gamma(),
            Codes::Delta => reader.read_delta(),
            Codes::Omega => reader.read_omega(),
            Codes::Levenstein => reader.read_levenstein(),
            Codes::EvenRodeh => reader.read_even_rodeh(),
            Codes::Fibonacci => reader.read_fibonacci(),
            Codes::Golomb { m } => reader.read_golomb(*m),
            Codes::Rice { k } => reader.read_rice(*k),
            Codes::GammaGolomb { m } => reader.read_gamma_golomb(*m),
            Codes::ExpGolomb { k } => reader.read_exp_golomb(*k),
            Codes::StartStop { steps } => reader.read_start_stop(steps),
        }
    }

    /// Writes one value with this code and returns the number of bits
    /// written.
    pub fn write<B: CodesWrite>(&self, writer: &mut B, value: u64) -> Result<usize> {
        match self {
            Codes::Unary => writer.write_unary(value),
            Codes::Unary1 => writer.write_unary1(value),
            Codes::Gamma => writer.write_gamma(value),
            Codes::Delta => writer.write_delta(value),
            Codes::Omega => writer.write_omega(value),
            Codes::Levenstein => writer.write_levenstein(value),
            Codes::EvenRodeh => writer.write_even_rodeh(value),
            Codes::Fibonacci => writer.write_fibonacci(value),
            Codes::Golomb { m } => writer.write_golomb(value, *m),
            Codes::Rice { k } => writer.write_rice(value, *k),
            Codes::GammaGolomb { m } => writer.write_gamma_golomb(value, *m),
            Codes::ExpGolomb { k } => writer.write_exp_golomb(value, *k),
            Codes::StartStop { steps } => writer.write_start_stop(value, steps),
        }
    }

    /// Reads a sequence of values with this code: exactly `count` of them,
    /// or all the values remaining in the stream when `count` is `None`.
    ///
    /// An empty stream yields an empty sequence. On error the read position
    /// is restored to where the sequence started.
    pub fn read_all<B: CodesRead>(
        &self,
        reader: &mut B,
        count: Option<usize>,
    ) -> Result<Vec<u64>> {
        let checkpoint = BitRead::checkpoint(reader);
        let res = (|| {
            let mut values = Vec::new();
            match count {
                Some(count) => {
                    values.reserve(count);
                    for _ in 0..count {
                        values.push(self.read(reader)?);
                    }
                }
                None => {
                    while reader.remaining_bits() > 0 {
                        values.push(self.read(reader)?);
                    }
                }
            }
            Ok(values)
        })();
        if res.is_err() {
            BitRead::restore(reader, checkpoint);
        }
        res
    }

    /// Writes a sequence of values with this code and returns the total
    /// number of bits written. On error nothing is persisted.
    pub fn write_all<B: CodesWrite>(&self, writer: &mut B, values: &[u64]) -> Result<usize> {
        let checkpoint = BitWrite::checkpoint(writer);
        let res = (|| {
            let mut written = 0;
            for &value in values {
                written += self.write(writer, value)?;
            }
            Ok(written)
        })();
        if res.is_err() {
            BitWrite::restore(writer, checkpoint);
        }
        res
    }

    /// Returns the length of the codeword for `value` under the 64-bit
    /// stream conventions, or `None` when `value` is not representable.
    pub fn len(&self, value: u64) -> Option<usize> {
        Some(match self {
            Codes::Unary | Codes::Unary1 => len_unary(value),
            Codes::Gamma => len_gamma(value),
            Codes::Delta => len_delta(value),
            Codes::Omega => len_omega(value),
            Codes::Levenstein => len_levenstein(value),
            Codes::EvenRodeh => len_even_rodeh(value),
            Codes::Fibonacci => len_fibonacci(value),
            Codes::Golomb { m } => len_golomb(value, *m),
            Codes::Rice { k } => len_rice(value, *k),
            Codes::GammaGolomb { m } => len_gamma_golomb(value, *m),
            Codes::ExpGolomb { k } => len_exp_golomb(value, *k),
            Codes::StartStop { steps } => return len_start_stop(value, steps),
        })
    }

    /// Whether the codeword length of this code grows as `O(log v)`, with
    /// every natural number representable.
    pub fn is_universal(&self) -> bool {
        matches!(
            self,
            Codes::Gamma
                | Codes::Delta
                | Codes::Omega
                | Codes::Levenstein
                | Codes::EvenRodeh
                | Codes::Fibonacci
                | Codes::GammaGolomb { .. }
                | Codes::ExpGolomb { .. }
        )
    }
}

impl fmt::Display for Codes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codes::Unary => write!(f, "unary"),
            Codes::Unary1 => write!(f, "unary1"),
            Codes::Gamma => write!(f, "gamma"),
            Codes::Delta => write!(f, "delta"),
            Codes::Omega => write!(f, "omega"),
            Codes::Levenstein => write!(f, "levenstein"),
            Codes::EvenRodeh => write!(f, "evenrodeh"),
            Codes::Fibonacci => write!(f, "fib"),
            Codes::Golomb { m } => write!(f, "golomb({m})"),
            Codes::Rice { k } => write!(f, "rice({k})"),
            Codes::GammaGolomb { m } => write!(f, "gammagolomb({m})"),
            Codes::ExpGolomb { k } => write!(f, "expgolomb({k})"),
            Codes::StartStop { steps } => {
                write!(f, "startstop(")?;
                for (i, step) in steps.iter().enumerate() {
                    if i > 0 {
                        write!(f, "-")?;
                    }
                    write!(f, "{step}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Splits a textual code specification into its lowercase name and the raw
/// parameter text between parentheses, if any.
pub(crate) fn split_spec(spec: &str) -> Result<(String, Option<&str>)> {
    let spec = spec.trim();
    let (name, params) = match spec.split_once('(') {
        None => (spec, None),
        Some((name, rest)) => {
            let params = rest.trim_end().strip_suffix(')').ok_or_else(|| {
                Error::BadArgument(format!("unbalanced parentheses in code spec {spec:?}"))
            })?;
            (name.trim_end(), Some(params))
        }
    };
    Ok((name.to_ascii_lowercase(), params))
}

fn parse_param<T: FromStr>(name: &str, params: Option<&str>) -> Result<T> {
    let params = params
        .ok_or_else(|| Error::BadArgument(format!("code {name:?} requires a parameter")))?;
    params
        .trim()
        .parse()
        .map_err(|_| Error::BadArgument(format!("invalid parameter {params:?} for {name:?}")))
}

fn no_param(name: &str, params: Option<&str>, code: Codes) -> Result<Codes> {
    if params.is_some() {
        return Err(Error::BadArgument(format!(
            "code {name:?} takes no parameter"
        )));
    }
    Ok(code)
}

impl FromStr for Codes {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self> {
        let (name, params) = split_spec(spec)?;
        match name.as_str() {
            "unary" => no_param(&name, params, Codes::Unary),
            "unary1" => no_param(&name, params, Codes::Unary1),
            "gamma" => no_param(&name, params, Codes::Gamma),
            "delta" => no_param(&name, params, Codes::Delta),
            "omega" => no_param(&name, params, Codes::Omega),
            "levenstein" => no_param(&name, params, Codes::Levenstein),
            "evenrodeh" => no_param(&name, params, Codes::EvenRodeh),
            "fib" | "fibonacci" => no_param(&name, params, Codes::Fibonacci),
            "golomb" => {
                let m = parse_param(&name, params)?;
                if m == 0 {
                    return Err(Error::BadArgument("Golomb modulus must be positive".into()));
                }
                Ok(Codes::Golomb { m })
            }
            "rice" => Ok(Codes::Rice {
                k: parse_param(&name, params)?,
            }),
            "gammagolomb" => {
                let m = parse_param(&name, params)?;
                if m == 0 {
                    return Err(Error::BadArgument("Golomb modulus must be positive".into()));
                }
                Ok(Codes::GammaGolomb { m })
            }
            "expgolomb" => Ok(Codes::ExpGolomb {
                k: parse_param(&name, params)?,
            }),
            "startstop" => {
                let params = params.ok_or_else(|| {
                    Error::BadArgument("startstop requires a step list".into())
                })?;
                let steps = params
                    .split('-')
                    .map(|step| {
                        step.trim().parse().map_err(|_| {
                            Error::BadArgument(format!("invalid start-stop step {step:?}"))
                        })
                    })
                    .collect::<Result<Vec<u32>>>()?;
                if steps.is_empty() {
                    return Err(Error::BadArgument("empty start-stop step list".into()));
                }
                Ok(Codes::StartStop { steps })
            }
            _ => Err(Error::UnknownCode(spec.trim().to_string())),
        }
    }
}
