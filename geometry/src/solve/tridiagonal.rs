/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;

use smallvec::SmallVec;

///
/// Solves a tridiagonal linear system by the Thomas algorithm
///
/// `a` is the subdiagonal, `b` the main diagonal and `c` the superdiagonal. All four
/// slices must have the same length: `a[0]` and `c[n-1]` are placeholders that are
/// never read. Runs in O(n) with a single O(n) work vector alongside the result.
///
pub fn solve_tridiagonal(
    a: &[f64],
    b: &[f64],
    c: &[f64],
    rhs: &[f64],
) -> Result<Vec<f64>, SolveError> {
    let n = b.len();

    if a.len() != n || c.len() != n || rhs.len() != n {
        return Err(SolveError::LengthMismatch);
    }
    if n == 0 {
        return Err(SolveError::TooFewEquations);
    }
    if b[0] == 0.0 {
        return Err(SolveError::SingularMatrix);
    }

    // Forward elimination (gamma is the only extra storage beyond the result)
    let mut gamma = SmallVec::<[f64; 16]>::from_elem(0.0, n);
    let mut x = vec![0.0; n];
    let mut pivot = b[0];

    x[0] = rhs[0] / pivot;

    for i in 1..n {
        gamma[i] = c[i - 1] / pivot;
        pivot = b[i] - a[i] * gamma[i];

        if pivot == 0.0 {
            return Err(SolveError::SingularMatrix);
        }

        x[i] = (rhs[i] - a[i] * x[i - 1]) / pivot;
    }

    // Back substitution
    for i in (0..n - 1).rev() {
        x[i] -= gamma[i + 1] * x[i + 1];
    }

    Ok(x)
}
