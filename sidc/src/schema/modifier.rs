/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::echelon;
use super::field_char;

use itertools::Itertools;

///
/// The name for a task-force/headquarters/feint flag character at position 10
///
pub(crate) fn flag_name(flag: char) -> &'static str {
    match flag {
        'A' => "Headquarters",
        'B' => "Task Force & Headquarters",
        'C' => "Feint/Dummy & Headquarters",
        'D' => "Feint/Dummy, Task Force & Headquarters",
        'E' => "Task Force",
        'F' => "Feint/Dummy",
        'G' => "Feint/Dummy & Task Force",
        'H' => "Installation",
        _ => "",
    }
}

///
/// The combined modifier name of a symbol code
///
/// Composes the task-force/headquarters flag at position 10 and the echelon at
/// position 11, joining the non-empty components with a newline in that fixed order.
/// A code with neither component produces the empty string.
///
pub fn name(symbol_code: &str) -> String {
    let flag = field_char(symbol_code, 10)
        .map(flag_name)
        .unwrap_or("");
    let echelon = field_char(symbol_code, echelon::ECHELON_POSITION)
        .and_then(echelon::entry)
        .map(|(_, name)| name)
        .unwrap_or("");

    [flag, echelon]
        .iter()
        .filter(|component| !component.is_empty())
        .join("\n")
}
