/*
 * SPDX-FileCopyrightText: 2025 The universal-codes developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]

pub mod codes;
pub mod error;
pub mod impls;
pub mod traits;

pub use error::{Error, Result};

/// Prelude module to import everything from this crate
pub mod prelude {
    pub use crate::codes::*;
    pub use crate::error::*;
    pub use crate::impls::*;
    pub use crate::traits::*;
}
