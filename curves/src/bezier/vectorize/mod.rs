/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod brush_stroke;
mod circular_brush;
mod circular_distance_field;
mod column_sampled_contour;
mod contour_edges_by_scanline;
mod daub_brush_distance_field;
mod distance_field;
mod intercept_scan_edge_iterator;
mod marching_squares;
mod sampled_contour;
mod scaled_brush;
mod scaled_contour;
mod scaled_distance_field;

pub use brush_stroke::*;
pub use circular_brush::*;
pub use circular_distance_field::*;
pub use column_sampled_contour::*;
pub use contour_edges_by_scanline::*;
pub use daub_brush_distance_field::*;
pub use distance_field::*;
pub use intercept_scan_edge_iterator::*;
pub use marching_squares::*;
pub use sampled_contour::*;
pub use scaled_brush::*;
pub use scaled_contour::*;
pub use scaled_distance_field::*;
