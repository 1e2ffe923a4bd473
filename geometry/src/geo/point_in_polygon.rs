/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;

use itertools::Itertools;

///
/// Tests whether a point lies inside a polygon, by winding number
///
/// `points` must be a closed list: the final entry duplicates the first, so a triangle
/// is passed as four points. The winding number counts signed edge crossings of a
/// horizontal ray through `point`, and the point is inside whenever the count is
/// non-zero.
///
pub fn point_in_polygon(points: &[Coord2], point: Coord2) -> bool {
    if points.len() < 2 {
        return false;
    }

    let mut winding = 0i32;

    for (start, end) in points.iter().copied().tuple_windows() {

        if start.1 <= point.1 {
            // Upward crossing with the point strictly to the left of the edge
            if end.1 > point.1 && is_left(start, end, point) > 0.0 {
                winding += 1;
            }
        } else {
            // Downward crossing with the point strictly to the right of the edge
            if end.1 <= point.1 && is_left(start, end, point) < 0.0 {
                winding -= 1;
            }
        }
    }

    winding != 0
}

/// Positive if `point` is left of the line from `start` to `end`, negative if right
#[inline]
fn is_left(start: Coord2, end: Coord2, point: Coord2) -> f64 {
    (end.0 - start.0) * (point.1 - start.1) - (point.0 - start.0) * (end.1 - start.1)
}
