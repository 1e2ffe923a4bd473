/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::field_char;

///
/// The name for a two-character mobility fragment, if it is one
///
pub(crate) fn entry(first: char, second: char) -> Option<&'static str> {
    match (first, second) {
        ('M', 'O') => Some("Wheeled (Limited Cross Country)"),
        ('M', 'P') => Some("Wheeled (Cross Country)"),
        ('M', 'Q') => Some("Tracked"),
        ('M', 'R') => Some("Wheeled and Tracked Combination"),
        ('M', 'S') => Some("Towed"),
        ('M', 'T') => Some("Railway"),
        ('M', 'U') => Some("Over Snow"),
        ('M', 'V') => Some("Sled"),
        ('M', 'W') => Some("Pack Animals"),
        ('M', 'X') => Some("Barge"),
        ('M', 'Y') => Some("Amphibious"),
        ('N', 'S') => Some("Towed Array (Short)"),
        ('N', 'L') => Some("Towed Array (Long)"),
        _ => None,
    }
}

///
/// The mobility name of a symbol code's modifier fragment at positions 10-11, empty
/// when the fragment is not a mobility code
///
pub fn name(symbol_code: &str) -> &'static str {
    let first = field_char(symbol_code, 10);
    let second = field_char(symbol_code, 11);

    match (first, second) {
        (Some(first), Some(second)) => entry(first, second).unwrap_or(""),
        _ => "",
    }
}
