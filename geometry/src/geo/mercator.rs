/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::consts::*;

use std::f64::consts::PI;

///
/// The width and height in pixels of the Web-Mercator world map at a level of detail
///
#[inline]
pub fn map_size(level_of_detail: u32) -> u64 {
    256u64 << level_of_detail
}

///
/// Converts a latitude/longitude in degrees to quad-tree pixel coordinates
///
/// Latitude is clipped to the Mercator limit of ±85.05112878° and longitude to ±180°
/// before projecting, which is what keeps the projected map square.
///
pub fn lat_lon_to_pixel(latitude: f64, longitude: f64, level_of_detail: u32) -> (i64, i64) {
    let latitude = clip(latitude, -MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
    let longitude = clip(longitude, -180.0, 180.0);

    let x = (longitude + 180.0) / 360.0;
    let sin_latitude = (latitude * PI / 180.0).sin();
    let y = 0.5 - ((1.0 + sin_latitude) / (1.0 - sin_latitude)).ln() / (4.0 * PI);

    let size = map_size(level_of_detail) as f64;
    let pixel_x = clip(x * size + 0.5, 0.0, size - 1.0) as i64;
    let pixel_y = clip(y * size + 0.5, 0.0, size - 1.0) as i64;

    (pixel_x, pixel_y)
}

///
/// Converts quad-tree pixel coordinates back to a latitude/longitude in degrees
///
pub fn pixel_to_lat_lon(pixel_x: i64, pixel_y: i64, level_of_detail: u32) -> (f64, f64) {
    let size = map_size(level_of_detail) as f64;

    let x = clip(pixel_x as f64, 0.0, size - 1.0) / size - 0.5;
    let y = 0.5 - clip(pixel_y as f64, 0.0, size - 1.0) / size;

    let latitude = 90.0 - 360.0 * (-y * 2.0 * PI).exp().atan() / PI;
    let longitude = 360.0 * x;

    (latitude, longitude)
}

#[inline]
fn clip(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
