/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Errors produced when a linear system cannot be solved
///
/// These indicate a mistake in how the caller assembled the system rather than a
/// condition that can be recovered from, so they are surfaced instead of being folded
/// into the result.
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SolveError {
    /// The coefficient vectors and the right-hand side do not all have the same length
    LengthMismatch,

    /// A pivot of exactly zero was encountered during forward elimination
    SingularMatrix,

    /// The system has fewer equations than the solver supports
    TooFewEquations,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::LengthMismatch => write!(f, "coefficient vectors have mismatched lengths"),
            SolveError::SingularMatrix => write!(f, "matrix is singular (zero pivot)"),
            SolveError::TooFewEquations => write!(f, "system has too few equations"),
        }
    }
}

impl Error for SolveError {}
