/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coding_scheme::CodingScheme;
use super::field_char;

///
/// The position of the unit/equipment/installation discriminator for a scheme, if the
/// scheme has one
///
/// Warfighting codes carry the discriminator as the first function-identifier
/// character. Emergency management only distinguishes equipment within its Operations
/// category, where the discriminator sits one place further right. The remaining
/// schemes draw no unit/equipment distinction at all.
///
fn discriminator_position(scheme: CodingScheme, symbol_code: &str) -> Option<usize> {
    match scheme {
        CodingScheme::Warfighting => Some(4),

        CodingScheme::EmergencyManagement => {
            if field_char(symbol_code, 2) == Some('O') {
                Some(5)
            } else {
                None
            }
        }

        _ => None,
    }
}

///
/// True if a symbol code identifies equipment rather than a unit or installation
///
/// Signals intelligence codes always describe equipment, so any recognized
/// intelligence lead-in answers true without inspecting further fields. For the
/// schemes with a discriminator position the character there must be `E`; everything
/// else answers false, including malformed input.
///
pub fn is_equipment(symbol_code: &str) -> bool {
    let scheme = match CodingScheme::of(symbol_code) {
        Some(scheme) => scheme,
        None => return false,
    };

    if scheme == CodingScheme::Intelligence {
        return true;
    }

    discriminator_position(scheme, symbol_code)
        .and_then(|position| field_char(symbol_code, position))
        .map(|discriminator| discriminator == 'E')
        .unwrap_or(false)
}
