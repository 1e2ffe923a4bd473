/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Schema tables for the fields of a symbol identification code
//!
//! One module per field, each decoding a fixed 1-2 character fragment of the code
//! against a static table. Every function here is total: empty, short or unrecognized
//! input produces the documented `None`/zero/empty sentinel, and fragment matching is
//! case-insensitive throughout.
//!

pub mod appendix;
pub mod battle_dimension;
pub mod coding_scheme;
pub mod countries;
pub mod echelon;
pub mod equipment;
pub mod mobility;
pub mod modifier;
pub mod order_of_battle;
pub mod standard_identity;
pub mod status;

pub use self::coding_scheme::CodingScheme;
pub use self::standard_identity::StandardIdentity;

///
/// The uppercased character at a fixed position of a symbol code, if the code reaches it
///
pub(crate) fn field_char(symbol_code: &str, position: usize) -> Option<char> {
    symbol_code
        .chars()
        .nth(position)
        .map(|c| c.to_ascii_uppercase())
}
