/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Planar and geodesic geometry
//!
//! The `Coordinate` trait describes anything with numeric components that the spline
//! and transform routines can operate on: `Coord2` is the basic planar implementation
//! and `LatLon` the basic geographic one. The `GeoPosition` trait is the seam between
//! the geodesic routines and a host map layer's own position type: any implementor can
//! be used as both input and output of the bearing/range calculations.
//!

mod coord2;
mod coordinate;
mod geodesic;
mod mercator;
mod point_in_polygon;
mod position;

pub use self::coord2::*;
pub use self::coordinate::*;
pub use self::geodesic::*;
pub use self::mercator::*;
pub use self::point_in_polygon::*;
pub use self::position::*;
