/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Symbol identification code decoding
//!
//! ```
//! # use mil_sidc::*;
//! #
//! let code = SymbolCode::new("SFGPUCI");
//!
//! assert!(code.as_str() == "SFGPUCI--------");
//! assert!(code.coding_scheme() == Some(CodingScheme::Warfighting));
//! assert!(code.standard_identity() == Some(StandardIdentity::Friend));
//! ```
//!
//! A symbol identification code (SIDC) is a fixed-format 15-character string that
//! identifies a military map symbol: its coding scheme, standard identity, battle
//! dimension, function, echelon or mobility, country and order of battle all live at
//! fixed positions. `SymbolCode` normalizes raw input to the fixed width and the
//! `schema` modules decode the individual fields.
//!
//! Decoding is total: empty, short or unrecognized input produces the documented
//! `None`/zero/empty sentinel instead of an error, so symbol codes straight from user
//! input can be decoded without validation. Only `SymbolCode::is_valid` distinguishes
//! well-formed input.
//!
//! The `labels` module parses `key=value` annotation strings and arranges the
//! resulting text lines around a symbol frame, and `hats` decodes the echelon and
//! mobility indicator offsets used to place auxiliary markers.
//!

pub mod hats;
pub mod labels;
pub mod schema;

mod code;

pub use self::code::*;
pub use self::labels::{LabelBlock, LabelMap, LabelSide};
pub use self::schema::{CodingScheme, StandardIdentity};
