/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::field_char;

use serde_derive::{Deserialize, Serialize};

///
/// The coding scheme of a symbol code, drawn from its first character
///
/// The scheme is the discriminant for everything that follows: it selects which
/// category table applies at position 2, which appendix describes the function
/// identifier, how labels are arranged and where the equipment discriminator sits.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CodingScheme {
    /// Units, equipment and installations ('S')
    Warfighting,

    /// Tactical graphics ('G')
    TacticalGraphics,

    /// Meteorological and oceanographic symbols ('W')
    Weather,

    /// Signals intelligence ('I')
    Intelligence,

    /// Stability operations ('O')
    StabilityOperations,

    /// Emergency management ('E')
    EmergencyManagement,
}

impl CodingScheme {
    ///
    /// Decodes the coding scheme of a symbol code, if it has a recognized one
    ///
    pub fn of(symbol_code: &str) -> Option<CodingScheme> {
        match field_char(symbol_code, 0)? {
            'S' => Some(CodingScheme::Warfighting),
            'G' => Some(CodingScheme::TacticalGraphics),
            'W' => Some(CodingScheme::Weather),
            'I' => Some(CodingScheme::Intelligence),
            'O' => Some(CodingScheme::StabilityOperations),
            'E' => Some(CodingScheme::EmergencyManagement),
            _ => None,
        }
    }

    ///
    /// The character this scheme occupies at position 0 of a symbol code
    ///
    pub fn code(&self) -> char {
        match self {
            CodingScheme::Warfighting => 'S',
            CodingScheme::TacticalGraphics => 'G',
            CodingScheme::Weather => 'W',
            CodingScheme::Intelligence => 'I',
            CodingScheme::StabilityOperations => 'O',
            CodingScheme::EmergencyManagement => 'E',
        }
    }

    ///
    /// The human-readable name of this scheme
    ///
    pub fn name(&self) -> &'static str {
        match self {
            CodingScheme::Warfighting => "War Fighting",
            CodingScheme::TacticalGraphics => "Tactical Graphics",
            CodingScheme::Weather => "Meteorological and Oceanographic",
            CodingScheme::Intelligence => "Signals Intelligence",
            CodingScheme::StabilityOperations => "Stability Operations",
            CodingScheme::EmergencyManagement => "Emergency Management",
        }
    }
}

///
/// The coding scheme name of a symbol code, empty when unrecognized
///
pub fn name(symbol_code: &str) -> &'static str {
    CodingScheme::of(symbol_code)
        .map(|scheme| scheme.name())
        .unwrap_or("")
}
