/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod create_distance_field;
mod path_contour;
mod path_distance_field;
mod ray_cast_contour;
mod sampled_approx_distance_field_cache;

pub use create_distance_field::*;
pub use path_contour::*;
pub use path_distance_field::*;
pub use ray_cast_contour::*;
pub use sampled_approx_distance_field_cache::*;
