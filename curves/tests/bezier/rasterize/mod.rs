/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod path_contour_tests;
mod path_distance_field_tests;
mod ray_cast_contour_tests;
mod sampled_approx_distance_field_cache_tests;
