/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Linear solvers for spline control points
//!
//! The control points of a smooth closed curve are found by solving a tridiagonal
//! system with extra corner elements. `solve_tridiagonal` implements the Thomas
//! algorithm for the plain system and `solve_cyclic` wraps it with the
//! Sherman-Morrison correction for the corners.
//!

mod cyclic;
mod error;
mod tridiagonal;

pub use self::cyclic::*;
pub use self::error::*;
pub use self::tridiagonal::*;
