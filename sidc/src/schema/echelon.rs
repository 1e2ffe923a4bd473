/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::field_char;

/// The position of the echelon character within a symbol code
pub(crate) const ECHELON_POSITION: usize = 11;

///
/// The `(rank, name)` entry for an echelon character
///
pub(crate) fn entry(echelon: char) -> Option<(u8, &'static str)> {
    match echelon {
        'A' => Some((1, "Team/Crew")),
        'B' => Some((2, "Squad")),
        'C' => Some((3, "Section")),
        'D' => Some((4, "Platoon/Detachment")),
        'E' => Some((5, "Company/Battery/Troop")),
        'F' => Some((6, "Battalion/Squadron")),
        'G' => Some((7, "Regiment/Group")),
        'H' => Some((8, "Brigade")),
        'I' => Some((9, "Division")),
        'J' => Some((10, "Corps/MEF")),
        'K' => Some((11, "Army")),
        'L' => Some((12, "Army Group/Front")),
        'M' => Some((13, "Region")),
        'N' => Some((14, "Command")),
        _ => None,
    }
}

///
/// The echelon name of a symbol code, empty when unrecognized
///
pub fn name(symbol_code: &str) -> &'static str {
    field_char(symbol_code, ECHELON_POSITION)
        .and_then(entry)
        .map(|(_, name)| name)
        .unwrap_or("")
}

///
/// The echelon size rank of a symbol code, from 1 (team/crew) to 14 (command), 0 when
/// unrecognized
///
pub fn rank(symbol_code: &str) -> u8 {
    field_char(symbol_code, ECHELON_POSITION)
        .and_then(entry)
        .map(|(rank, _)| rank)
        .unwrap_or(0)
}
