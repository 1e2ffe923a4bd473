/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::geo::*;
use super::super::solve::*;

///
/// Computes the Bezier control points of a smooth closed curve through a set of knots
///
/// Returns one first and one second control point per knot: the curve segment leaving
/// `knots[i]` is drawn as `(knots[i], first[i], second[(i+1) % n], knots[(i+1) % n])`.
/// Fewer than three knots cannot form a closed curve and produce two empty vectors.
///
/// The control points satisfy the usual C2 continuity conditions, which for a closed
/// curve form a cyclic tridiagonal system with ones on the off-diagonals and corners
/// and fours on the diagonal. The system is solved once per coordinate component, so
/// any `Coordinate` type can supply the knots.
///
pub fn closed_curve_control_points<Point: Coordinate>(knots: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let n = knots.len();

    if n < 3 {
        return (vec![], vec![]);
    }

    // Constant closed-spline system
    let a = vec![1.0; n];
    let b = vec![4.0; n];
    let c = vec![1.0; n];

    // Solve once per coordinate component
    let mut per_component = Vec::with_capacity(Point::len());

    for component in 0..Point::len() {
        let rhs = (0..n)
            .map(|i| {
                4.0 * knots[i].get(component) + 2.0 * knots[(i + 1) % n].get(component)
            })
            .collect::<Vec<_>>();

        // The system is diagonally dominant so the solver cannot hit a zero pivot
        let solution =
            solve_cyclic(&a, &b, &c, 1.0, 1.0, &rhs).unwrap_or_else(|_| vec![0.0; n]);
        per_component.push(solution);
    }

    // Reassemble the per-component solutions into first control points
    let mut components = vec![0.0; Point::len()];
    let first = (0..n)
        .map(|i| {
            for (component, solution) in per_component.iter().enumerate() {
                components[component] = solution[i];
            }
            Point::from_components(&components)
        })
        .collect::<Vec<_>>();

    // Second control points are the first ones reflected through their knots
    let second = (0..n).map(|i| knots[i] * 2.0 - first[i]).collect();

    (first, second)
}
