/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod path_stream;

pub use self::path_stream::*;

#[cfg(feature = "outline-fonts")]
mod glyph_layout;
#[cfg(feature = "outline-fonts")]
mod outline_fonts;

#[cfg(feature = "outline-fonts")]
pub use self::glyph_layout::*;
#[cfg(feature = "outline-fonts")]
pub use self::outline_fonts::*;

mod dashed_lines;

pub use self::dashed_lines::*;
