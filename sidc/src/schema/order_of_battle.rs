/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coding_scheme::CodingScheme;
use super::field_char;

///
/// The order-of-battle name at position 14 of a symbol code, empty when unrecognized
///
/// Tactical graphics use the control-markings variant of the table; every other scheme
/// shares the standard one.
///
pub fn name(symbol_code: &str) -> &'static str {
    let scheme = match CodingScheme::of(symbol_code) {
        Some(scheme) => scheme,
        None => return "",
    };
    let order = match field_char(symbol_code, 14) {
        Some(order) => order,
        None => return "",
    };

    if scheme == CodingScheme::TacticalGraphics {
        return match order {
            'X' => "Control Markings",
            _ => "",
        };
    }

    match order {
        'A' => "Air",
        'E' => "Electronic",
        'C' => "Civilian",
        'G' => "Ground",
        'N' => "Maritime",
        'S' => "Strategic Force Related",
        _ => "",
    }
}
