/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Geometry for positioning map symbols
//!
//! ```
//! # use mil_geometry::*;
//! #
//! let knots = vec![
//!     Coord2(0.0, 0.0),
//!     Coord2(4.0, 0.0),
//!     Coord2(4.0, 4.0),
//!     Coord2(0.0, 4.0),
//! ];
//! let (first, second) = closed_curve_control_points(&knots);
//!
//! assert!(first.len() == 4 && second.len() == 4);
//! ```
//!
//! This crate supplies the platform-independent geometry a symbology renderer needs to
//! place graphics on a map: solvers for the control points of smooth closed curves,
//! bearing/range calculations on a spherical earth, Web-Mercator tile arithmetic and a
//! 2D affine transform.
//!
//! Geodesic routines are generic over the `GeoPosition` trait, so a map layer can have
//! results constructed directly in its own position type rather than converting through
//! an intermediate representation. The planar routines work the same way through the
//! `Coordinate` trait, with `Coord2` provided as the basic implementation.
//!

pub mod geo;
pub mod solve;
pub mod spline;
pub mod transform;

mod consts;

pub use self::consts::*;
pub use self::geo::*;
pub use self::solve::*;
pub use self::spline::*;
pub use self::transform::*;
