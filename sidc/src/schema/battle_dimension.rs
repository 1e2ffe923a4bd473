/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coding_scheme::CodingScheme;
use super::field_char;

///
/// Decodes the battle dimension (or category) at position 2 of a symbol code
///
/// Which table applies depends on the coding scheme: warfighting, intelligence and
/// their relatives use the battle dimension table, while tactical graphics, stability
/// operations and emergency management each have their own category table. The METOC
/// scheme has no battle dimension at this position.
///
/// `(rank, name)` pair per entry; rank 0 is the unknown sentinel.
///
fn entry(symbol_code: &str) -> Option<(u8, &'static str)> {
    let scheme = CodingScheme::of(symbol_code)?;
    let dimension = field_char(symbol_code, 2)?;

    match scheme {
        CodingScheme::Warfighting | CodingScheme::Intelligence => match dimension {
            'P' => Some((1, "Space")),
            'A' => Some((2, "Air")),
            'G' => Some((3, "Ground")),
            'S' => Some((4, "Sea Surface")),
            'U' => Some((5, "Sea Subsurface")),
            'F' => Some((6, "Special Operations Forces")),
            'X' => Some((7, "Other")),
            'Z' => Some((8, "Unknown")),
            _ => None,
        },

        CodingScheme::TacticalGraphics => match dimension {
            'T' => Some((1, "Tasks")),
            'G' => Some((2, "Command & Control, General Maneuver")),
            'M' => Some((3, "Mobility/Survivability")),
            'F' => Some((4, "Fire Support")),
            'S' => Some((5, "Combat Service Support")),
            'O' => Some((6, "Other")),
            _ => None,
        },

        CodingScheme::StabilityOperations => match dimension {
            'V' => Some((1, "Violent Activities")),
            'L' => Some((2, "Locations")),
            'O' => Some((3, "Operations")),
            'I' => Some((4, "Items")),
            'P' => Some((5, "Individual")),
            'G' => Some((6, "Nonmilitary Group or Organization")),
            _ => None,
        },

        CodingScheme::EmergencyManagement => match dimension {
            'I' => Some((1, "Incident")),
            'N' => Some((2, "Natural Events")),
            'O' => Some((3, "Operations")),
            'F' => Some((4, "Infrastructure")),
            _ => None,
        },

        CodingScheme::Weather => None,
    }
}

///
/// The battle dimension or category rank of a symbol code, 0 when unrecognized
///
pub fn rank(symbol_code: &str) -> u8 {
    entry(symbol_code).map(|(rank, _)| rank).unwrap_or(0)
}

///
/// The battle dimension or category name of a symbol code, empty when unrecognized
///
pub fn name(symbol_code: &str) -> &'static str {
    entry(symbol_code).map(|(_, name)| name).unwrap_or("")
}
