/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;
use super::tridiagonal::*;

use smallvec::SmallVec;

///
/// Solves a tridiagonal system with extra corner elements
///
/// `alpha` is the bottom-left corner coefficient and `beta` the top-right one, which is
/// the form closed splines produce. Uses the Sherman-Morrison formula: the corners are
/// folded into the diagonal, the modified system is solved twice (once for the right
/// hand side and once for the perturbation vector) and a scalar correction combines the
/// two. Needs at least three equations.
///
pub fn solve_cyclic(
    a: &[f64],
    b: &[f64],
    c: &[f64],
    alpha: f64,
    beta: f64,
    rhs: &[f64],
) -> Result<Vec<f64>, SolveError> {
    let n = b.len();

    if a.len() != n || c.len() != n || rhs.len() != n {
        return Err(SolveError::LengthMismatch);
    }
    if n <= 2 {
        return Err(SolveError::TooFewEquations);
    }

    // Fold the corner elements into the diagonal
    let gamma = -b[0];
    let mut modified = b.to_vec();
    modified[0] = b[0] - gamma;
    modified[n - 1] = b[n - 1] - alpha * beta / gamma;

    let mut x = solve_tridiagonal(a, &modified, c, rhs)?;

    // Solve again for the perturbation vector
    let mut u = SmallVec::<[f64; 16]>::from_elem(0.0, n);
    u[0] = gamma;
    u[n - 1] = alpha;

    let z = solve_tridiagonal(a, &modified, c, &u)?;

    // Combine via the scalar correction factor
    let fact =
        (x[0] + beta * x[n - 1] / gamma) / (1.0 + z[0] + beta * z[n - 1] / gamma);

    for i in 0..n {
        x[i] -= fact * z[i];
    }

    Ok(x)
}
