/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::consts::*;
use super::position::*;

///
/// The initial bearing from one position to another, in degrees in the range [0, 360)
///
pub fn bearing<Pos: GeoPosition>(from: &Pos, to: &Pos) -> f64 {
    let phi1 = from.latitude().to_radians();
    let phi2 = to.latitude().to_radians();
    let delta_lambda = (to.longitude() - from.longitude()).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();
    let theta = y.atan2(x).to_degrees();

    (theta + 360.0) % 360.0
}

///
/// The great-circle distance between two positions in kilometres, by the haversine formula
///
pub fn range<Pos: GeoPosition>(from: &Pos, to: &Pos) -> f64 {
    let phi1 = from.latitude().to_radians();
    let phi2 = to.latitude().to_radians();
    let half_delta_phi = (to.latitude() - from.latitude()).to_radians() / 2.0;
    let half_delta_lambda = (to.longitude() - from.longitude()).to_radians() / 2.0;

    let a = half_delta_phi.sin() * half_delta_phi.sin()
        + phi1.cos() * phi2.cos() * half_delta_lambda.sin() * half_delta_lambda.sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

///
/// The position reached by travelling along a bearing for an arc length
///
/// `bearing_degrees` is measured clockwise from north and `arc_km` along the great
/// circle in kilometres.
///
pub fn destination<Pos: GeoPosition>(origin: &Pos, bearing_degrees: f64, arc_km: f64) -> Pos {
    let delta = arc_km / EARTH_RADIUS_KM;
    let theta = bearing_degrees.to_radians();
    let phi1 = origin.latitude().to_radians();
    let lambda1 = origin.longitude().to_radians();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos())
            .atan2(delta.cos() - phi1.sin() * phi2.sin());

    Pos::from_lat_lon(phi2.to_degrees(), wrap_longitude(lambda2.to_degrees()))
}

///
/// The point halfway along the great circle between two positions
///
pub fn midpoint<Pos: GeoPosition>(from: &Pos, to: &Pos) -> Pos {
    destination(from, bearing(from, to), range(from, to) / 2.0)
}

///
/// The point a quarter of the way along the great circle between two positions
///
pub fn quarterpoint<Pos: GeoPosition>(from: &Pos, to: &Pos) -> Pos {
    destination(from, bearing(from, to), range(from, to) / 4.0)
}

///
/// Mirrors a position through an origin position
///
/// The result lies on the great circle through both points, as far beyond the origin
/// as `position` is before it.
///
pub fn reflect<Pos: GeoPosition>(origin: &Pos, position: &Pos) -> Pos {
    destination(
        origin,
        bearing(position, origin),
        range(origin, position),
    )
}

///
/// The position at a perpendicular offset from the line between two positions
///
/// The offset is taken at `from`, to the right of the `from`-`to` direction for a
/// positive `offset_km` and to the left for a negative one.
///
pub fn perpendicular<Pos: GeoPosition>(from: &Pos, to: &Pos, offset_km: f64) -> Pos {
    destination(from, bearing(from, to) + 90.0, offset_km)
}

///
/// Projects a position onto the great circle through `line_start` and `line_end`
///
/// Returns the along-track point: the closest position on the line to `position`.
///
pub fn project_onto<Pos: GeoPosition>(line_start: &Pos, line_end: &Pos, position: &Pos) -> Pos {
    let delta13 = range(line_start, position) / EARTH_RADIUS_KM;
    let theta13 = bearing(line_start, position).to_radians();
    let theta12 = bearing(line_start, line_end).to_radians();

    // Cross-track then along-track arc lengths
    let cross_track = (delta13.sin() * (theta13 - theta12).sin()).asin();
    let along_track = clamp(delta13.cos() / cross_track.cos(), -1.0, 1.0).acos();

    destination(
        line_start,
        theta12.to_degrees(),
        along_track * EARTH_RADIUS_KM,
    )
}

///
/// Wraps a longitude in degrees into the range [-180, 180)
///
fn wrap_longitude(longitude: f64) -> f64 {
    let mut wrapped = (longitude + 180.0) % 360.0;
    if wrapped < 0.0 {
        wrapped += 360.0;
    }

    wrapped - 180.0
}

#[inline]
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
