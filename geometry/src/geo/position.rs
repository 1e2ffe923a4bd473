/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;

use serde_derive::{Deserialize, Serialize};

use std::ops::{Add, Mul, Sub};

///
/// Trait implemented by types that locate a point on the earth
///
/// This is the seam between the geometry routines and whatever concrete position type
/// a map layer uses: the geodesic functions both read their inputs and construct their
/// results through this trait, so no intermediate representation is needed. Map
/// adapters implement it once for their native point type and every routine in this
/// crate becomes available on that type.
///
pub trait GeoPosition: Sized + Copy {
    ///
    /// Creates a position from a latitude and longitude in degrees
    ///
    fn from_lat_lon(latitude: f64, longitude: f64) -> Self;

    /// The latitude of this position in degrees
    fn latitude(&self) -> f64;

    /// The longitude of this position in degrees
    fn longitude(&self) -> f64;
}

///
/// Basic latitude/longitude position, in degrees
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    ///
    /// Creates a new position from a latitude and longitude in degrees
    ///
    pub fn new(latitude: f64, longitude: f64) -> LatLon {
        LatLon {
            latitude,
            longitude,
        }
    }
}

impl GeoPosition for LatLon {
    #[inline]
    fn from_lat_lon(latitude: f64, longitude: f64) -> LatLon {
        LatLon::new(latitude, longitude)
    }

    #[inline]
    fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Add<LatLon> for LatLon {
    type Output = LatLon;

    #[inline]
    fn add(self, rhs: LatLon) -> LatLon {
        LatLon::new(self.latitude + rhs.latitude, self.longitude + rhs.longitude)
    }
}

impl Sub<LatLon> for LatLon {
    type Output = LatLon;

    #[inline]
    fn sub(self, rhs: LatLon) -> LatLon {
        LatLon::new(self.latitude - rhs.latitude, self.longitude - rhs.longitude)
    }
}

impl Mul<f64> for LatLon {
    type Output = LatLon;

    #[inline]
    fn mul(self, rhs: f64) -> LatLon {
        LatLon::new(self.latitude * rhs, self.longitude * rhs)
    }
}

// Componentwise coordinate arithmetic: this is what lets lat/lon positions act as
// spline knots, where the control points are solved per component
impl Coordinate for LatLon {
    fn from_components(components: &[f64]) -> LatLon {
        LatLon::new(components[0], components[1])
    }

    #[inline]
    fn origin() -> LatLon {
        LatLon::new(0.0, 0.0)
    }

    #[inline]
    fn len() -> usize {
        2
    }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.latitude,
            1 => self.longitude,
            _ => panic!("LatLon only has two components"),
        }
    }

    fn from_biggest_components(p1: LatLon, p2: LatLon) -> LatLon {
        LatLon::new(
            f64::max(p1.latitude, p2.latitude),
            f64::max(p1.longitude, p2.longitude),
        )
    }

    fn from_smallest_components(p1: LatLon, p2: LatLon) -> LatLon {
        LatLon::new(
            f64::min(p1.latitude, p2.latitude),
            f64::min(p1.longitude, p2.longitude),
        )
    }
}
