/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Add, Mul, Sub};

///
/// Represents a value with n numeric components
///
pub trait Coordinate:
    Sized + Copy + Add<Self, Output = Self> + Mul<f64, Output = Self> + Sub<Self, Output = Self>
{
    ///
    /// Creates a new coordinate from the specified set of components
    ///
    fn from_components(components: &[f64]) -> Self;

    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// The number of components in this coordinate
    ///
    fn len() -> usize;

    ///
    /// Retrieves the component at the specified index
    ///
    fn get(&self, index: usize) -> f64;

    ///
    /// Returns a coordinate made up of the largest components of the two input coordinates
    ///
    fn from_biggest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Returns a coordinate made up of the smallest components of the two input coordinates
    ///
    fn from_smallest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    fn distance_to(&self, target: &Self) -> f64 {
        let sum_squares = (0..Self::len())
            .map(|index| {
                let diff = self.get(index) - target.get(index);
                diff * diff
            })
            .sum::<f64>();

        f64::sqrt(sum_squares)
    }

    ///
    /// Computes the dot product of this coordinate and another of the same type
    ///
    fn dot(&self, target: &Self) -> f64 {
        (0..Self::len())
            .map(|index| self.get(index) * target.get(index))
            .sum()
    }

    ///
    /// The magnitude of this coordinate, treated as a vector from the origin
    ///
    fn magnitude(&self) -> f64 {
        self.distance_to(&Self::origin())
    }
}
