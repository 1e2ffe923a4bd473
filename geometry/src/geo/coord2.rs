/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;

use serde_derive::{Deserialize, Serialize};

use std::ops::{Add, Mul, Neg, Sub};

///
/// Represents a 2D point
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Coord2(pub f64, pub f64);

///
/// Trait implemented by coordinates with an x and y component
///
pub trait Coordinate2D {
    /// The x component of this coordinate
    fn x(&self) -> f64;

    /// The y component of this coordinate
    fn y(&self) -> f64;
}

impl Coordinate2D for Coord2 {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}

impl Coordinate for Coord2 {
    fn from_components(components: &[f64]) -> Coord2 {
        Coord2(components[0], components[1])
    }

    #[inline]
    fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    fn len() -> usize {
        2
    }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.0,
            1 => self.1,
            _ => panic!("Coord2 only has two components"),
        }
    }

    fn from_biggest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::max(p1.0, p2.0), f64::max(p1.1, p2.1))
    }

    fn from_smallest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::min(p1.0, p2.0), f64::min(p1.1, p2.1))
    }

    #[inline]
    fn distance_to(&self, target: &Coord2) -> f64 {
        let dx = target.0 - self.0;
        let dy = target.1 - self.1;

        f64::sqrt(dx * dx + dy * dy)
    }

    #[inline]
    fn dot(&self, target: &Coord2) -> f64 {
        self.0 * target.0 + self.1 * target.1
    }
}

///
/// Trait implemented by vector types that can be scaled to unit length
///
pub trait Normalize {
    ///
    /// Scales this vector to a length of 1
    ///
    /// A zero-length input divides by zero and produces non-finite components: this
    /// matches the behavior of the rendering pipeline this crate was extracted from,
    /// so callers that need a guard must check the magnitude themselves.
    ///
    fn to_unit_vector(&self) -> Self;
}

impl Normalize for Coord2 {
    #[inline]
    fn to_unit_vector(&self) -> Coord2 {
        let magnitude = self.magnitude();

        Coord2(self.0 / magnitude, self.1 / magnitude)
    }
}

///
/// The normal on the left-hand side of a vector
///
#[inline]
pub fn left_normal(vector: Coord2) -> Coord2 {
    Coord2(-vector.1, vector.0)
}

///
/// The normal on the right-hand side of a vector
///
#[inline]
pub fn right_normal(vector: Coord2) -> Coord2 {
    Coord2(vector.1, -vector.0)
}

///
/// The unit-length normal on the left-hand side of a vector
///
pub fn unit_left_normal(vector: Coord2) -> Coord2 {
    left_normal(vector).to_unit_vector()
}

///
/// The unit-length normal on the right-hand side of a vector
///
pub fn unit_right_normal(vector: Coord2) -> Coord2 {
    right_normal(vector).to_unit_vector()
}

///
/// Projects the vector `onto` is pointing along out of `vector`
///
/// Returns the component of `vector` that lies along `onto`.
///
pub fn projection(vector: Coord2, onto: Coord2) -> Coord2 {
    let onto_length_squared = onto.dot(&onto);

    onto * (vector.dot(&onto) / onto_length_squared)
}
