/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod brush_stroke_tests;
mod circular_distance_field_tests;
mod daub_brush_distance_field_tests;
mod marching_squares_tests;
mod sampled_contour_tests;
mod scaled_distance_field_tests;
