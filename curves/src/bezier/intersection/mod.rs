/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod curve_curve_clip;
mod curve_line;
mod fat_line;
mod self_intersection;

pub use self::curve_curve_clip::*;
pub use self::curve_line::*;
pub use self::self_intersection::*;
