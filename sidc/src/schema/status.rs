/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::field_char;

///
/// The status/operational-capacity name at position 3 of a symbol code, empty when
/// unrecognized
///
pub fn name(symbol_code: &str) -> &'static str {
    match field_char(symbol_code, 3) {
        Some('A') => "Anticipated/Planned",
        Some('P') => "Present",
        Some('C') => "Present/Fully Capable",
        Some('D') => "Present/Damaged",
        Some('X') => "Present/Destroyed",
        Some('F') => "Present/Full To Capacity",
        _ => "",
    }
}
