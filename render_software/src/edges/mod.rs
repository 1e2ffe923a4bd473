/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use bezier_subpath_edge::*;
pub use clipping_edge::*;
pub use contour_edge::*;
pub use flattened_bezier_subpath_edge::*;
pub use line_stroke_edge::*;
pub use polyline_edge::*;
pub use rectangle_edge::*;

mod bezier_subpath_edge;
mod clipping_edge;
mod contour_edge;
mod flattened_bezier_subpath_edge;
mod line_stroke_edge;
mod polyline_edge;
mod rectangle_edge;
