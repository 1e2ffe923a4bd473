/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Radius of the spherical earth model used by the geodesic routines, in kilometres
pub const EARTH_RADIUS_KM: f64 = 6367.0;

/// Latitude beyond which the Web-Mercator projection is clipped
pub const MAX_MERCATOR_LATITUDE: f64 = 85.05112878;

/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;
