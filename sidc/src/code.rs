/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::hats;
use crate::schema;
use crate::schema::{CodingScheme, StandardIdentity};

use std::fmt;
use std::str::FromStr;

/// The fixed width of a normalized symbol identification code
pub const CODE_LENGTH: usize = 15;

///
/// A normalized 15-character symbol identification code
///
/// Raw input is normalized once at construction (trimmed, padded with the `-`
/// don't-care character to the fixed width, truncated beyond it) and never mutated
/// afterwards: every decoding method is a pure read over the normalized string.
///
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SymbolCode {
    code: String,
}

///
/// Normalizes a raw symbol code to the fixed 15-character width
///
/// Trims surrounding whitespace, truncates anything beyond 15 characters and pads
/// shorter input on the right with the `-` don't-care character. Normalizing an
/// already-normalized code returns it unchanged.
///
pub fn normalize(raw: &str) -> String {
    let mut code = String::with_capacity(CODE_LENGTH);
    code.extend(raw.trim().chars().take(CODE_LENGTH));

    let count = code.chars().count();
    for _ in count..CODE_LENGTH {
        code.push('-');
    }

    code
}

///
/// True if a raw symbol code is well formed: 4 to 15 characters before padding, drawn
/// from ASCII letters, digits and the `-` and `*` don't-care characters
///
pub fn is_valid(raw: &str) -> bool {
    let trimmed = raw.trim();
    let count = trimmed.chars().count();

    (4..=CODE_LENGTH).contains(&count)
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '*')
}

impl SymbolCode {
    ///
    /// Creates a symbol code from raw input, normalizing it to the fixed width
    ///
    pub fn new(raw: &str) -> SymbolCode {
        SymbolCode {
            code: normalize(raw),
        }
    }

    ///
    /// The normalized 15-character code
    ///
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    ///
    /// The reduced canonical form of this code, used as a lookup and equality key
    ///
    /// Uppercases the code and masks the positions that do not change which glyph a
    /// symbol uses: the standard identity, the status, and the modifier, country and
    /// order-of-battle region. Two codes with the same reduced form draw the same
    /// base symbol.
    ///
    pub fn reduced(&self) -> String {
        self.code
            .chars()
            .enumerate()
            .map(|(position, c)| match position {
                1 | 3 => '*',
                10..=14 => '*',
                _ => c.to_ascii_uppercase(),
            })
            .collect()
    }

    ///
    /// True if this code and another share the same reduced form
    ///
    pub fn same_symbol(&self, other: &SymbolCode) -> bool {
        self.reduced() == other.reduced()
    }

    ///
    /// The coding scheme at position 0, if recognized
    ///
    pub fn coding_scheme(&self) -> Option<CodingScheme> {
        CodingScheme::of(&self.code)
    }

    ///
    /// The standard identity at position 1, if recognized
    ///
    pub fn standard_identity(&self) -> Option<StandardIdentity> {
        StandardIdentity::of(&self.code)
    }

    ///
    /// The battle dimension (or tactical-graphics category) rank, 0 when unknown
    ///
    pub fn battle_dimension_rank(&self) -> u8 {
        schema::battle_dimension::rank(&self.code)
    }

    ///
    /// The battle dimension (or tactical-graphics category) name, empty when unknown
    ///
    pub fn battle_dimension_name(&self) -> &'static str {
        schema::battle_dimension::name(&self.code)
    }

    ///
    /// The status/operational-capacity name, empty when unknown
    ///
    pub fn status_name(&self) -> &'static str {
        schema::status::name(&self.code)
    }

    ///
    /// The echelon name, empty when unknown
    ///
    pub fn echelon_name(&self) -> &'static str {
        schema::echelon::name(&self.code)
    }

    ///
    /// The mobility name, empty when unknown
    ///
    pub fn mobility_name(&self) -> &'static str {
        schema::mobility::name(&self.code)
    }

    ///
    /// The two-character country fragment, uppercased, when the code is long enough
    ///
    pub fn country_digraph(&self) -> Option<String> {
        schema::countries::digraph(&self.code)
    }

    ///
    /// The country name, empty when the digraph is unknown
    ///
    pub fn country_name(&self) -> &'static str {
        schema::countries::name(&self.code)
    }

    ///
    /// The order-of-battle name, empty when unknown
    ///
    pub fn order_of_battle_name(&self) -> &'static str {
        schema::order_of_battle::name(&self.code)
    }

    ///
    /// The combined task-force/headquarters and echelon modifier name
    ///
    pub fn modifier_name(&self) -> String {
        schema::modifier::name(&self.code)
    }

    ///
    /// True if this code identifies equipment rather than a unit or installation
    ///
    pub fn is_equipment(&self) -> bool {
        schema::equipment::is_equipment(&self.code)
    }

    ///
    /// The indented appendix description of this code, empty when nothing matches
    ///
    pub fn description(&self) -> String {
        schema::appendix::description(&self.code)
    }

    ///
    /// The vertical hat offset for this code's modifier fragment
    ///
    pub fn hat_offset(&self) -> Option<f64> {
        hats::hat_offset(&self.code)
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for SymbolCode {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl From<&str> for SymbolCode {
    fn from(raw: &str) -> SymbolCode {
        SymbolCode::new(raw)
    }
}

impl FromStr for SymbolCode {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<SymbolCode, Self::Err> {
        Ok(SymbolCode::new(raw))
    }
}
