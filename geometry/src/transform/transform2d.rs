/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::geo::*;

use serde_derive::{Deserialize, Serialize};

use std::ops::Mul;

///
/// A 2D affine transformation
///
/// Stored row-major: a point transforms as `x' = m[0][0]·x + m[0][1]·y + m[0][2]` and
/// `y' = m[1][0]·x + m[1][1]·y + m[1][2]`. Only those six coefficients are active: the
/// bottom row is fixed at `[0, 0, 1]` and never read or written by the operations here.
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transform2D(pub [[f64; 3]; 3]);

impl Transform2D {
    ///
    /// The identity transform
    ///
    pub fn identity() -> Transform2D {
        Transform2D([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// A transform that translates by an offset
    ///
    pub fn translate(dx: f64, dy: f64) -> Transform2D {
        Transform2D([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]])
    }

    ///
    /// A transform that scales about the origin
    ///
    pub fn scale(scale_x: f64, scale_y: f64) -> Transform2D {
        Transform2D([[scale_x, 0.0, 0.0], [0.0, scale_y, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// The affine transform that maps one triangle of points onto another
    ///
    /// `src[i]` is mapped exactly onto `dst[i]` for each of the three pairs. Collinear
    /// source points describe no such transform: the division by the zero determinant
    /// then produces non-finite coefficients rather than an error, preserving the
    /// behavior of the legacy rendering pipeline (see `invert`).
    ///
    pub fn from_triangles(src: &[Coord2; 3], dst: &[Coord2; 3]) -> Transform2D {
        let (x0, y0) = (src[0].0, src[0].1);
        let (x1, y1) = (src[1].0, src[1].1);
        let (x2, y2) = (src[2].0, src[2].1);

        // Determinant of the source triangle system
        let det = x0 * (y1 - y2) - y0 * (x1 - x2) + (x1 * y2 - x2 * y1);

        // Cramer's rule, once for the x outputs and once for the y outputs
        let row = |u0: f64, u1: f64, u2: f64| {
            [
                (u0 * (y1 - y2) - y0 * (u1 - u2) + (u1 * y2 - u2 * y1)) / det,
                (x0 * (u1 - u2) - u0 * (x1 - x2) + (x1 * u2 - x2 * u1)) / det,
                (x0 * (y1 * u2 - y2 * u1) - y0 * (x1 * u2 - x2 * u1) + u0 * (x1 * y2 - x2 * y1))
                    / det,
            ]
        };

        Transform2D([
            row(dst[0].0, dst[1].0, dst[2].0),
            row(dst[0].1, dst[1].1, dst[2].1),
            [0.0, 0.0, 1.0],
        ])
    }

    ///
    /// The determinant of the affine part of this transform
    ///
    pub fn determinant(&self) -> f64 {
        let Transform2D(m) = self;

        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    ///
    /// The inverse of this transform
    ///
    /// A singular transform (`determinant() == 0`) has no inverse: the division by zero
    /// here then produces non-finite coefficients rather than an error. The legacy
    /// rendering pipeline relied on that silent behavior, so it is preserved; callers
    /// that need a guard should test the determinant first.
    ///
    pub fn invert(&self) -> Transform2D {
        let Transform2D(m) = self;
        let det = self.determinant();

        Transform2D([
            [
                m[1][1] / det,
                -m[0][1] / det,
                (m[0][1] * m[1][2] - m[1][1] * m[0][2]) / det,
            ],
            [
                -m[1][0] / det,
                m[0][0] / det,
                (m[1][0] * m[0][2] - m[0][0] * m[1][2]) / det,
            ],
            [0.0, 0.0, 1.0],
        ])
    }

    ///
    /// Applies this transform to a point
    ///
    #[inline]
    pub fn transform_point(&self, point: Coord2) -> Coord2 {
        let Transform2D(m) = self;

        Coord2(
            m[0][0] * point.0 + m[0][1] * point.1 + m[0][2],
            m[1][0] * point.0 + m[1][1] * point.1 + m[1][2],
        )
    }

    ///
    /// Applies this transform to a list of positions, treating longitude as x and latitude as y
    ///
    /// The results are constructed through the `GeoPosition` trait, so the output
    /// points are in the caller's own representation.
    ///
    pub fn transform_positions<Pos: GeoPosition>(&self, positions: &[Pos]) -> Vec<Pos> {
        positions
            .iter()
            .map(|position| {
                let transformed =
                    self.transform_point(Coord2(position.longitude(), position.latitude()));
                Pos::from_lat_lon(transformed.1, transformed.0)
            })
            .collect()
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    ///
    /// Composes two transforms: the right-hand transform is applied first
    ///
    fn mul(self, rhs: Transform2D) -> Transform2D {
        let Transform2D(a) = self;
        let Transform2D(b) = rhs;

        // Restricted to the six active coefficients (the bottom rows are [0, 0, 1])
        Transform2D([
            [
                a[0][0] * b[0][0] + a[0][1] * b[1][0],
                a[0][0] * b[0][1] + a[0][1] * b[1][1],
                a[0][0] * b[0][2] + a[0][1] * b[1][2] + a[0][2],
            ],
            [
                a[1][0] * b[0][0] + a[1][1] * b[1][0],
                a[1][0] * b[0][1] + a[1][1] * b[1][1],
                a[1][0] * b[0][2] + a[1][1] * b[1][2] + a[1][2],
            ],
            [0.0, 0.0, 1.0],
        ])
    }
}

impl Mul<Coord2> for Transform2D {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: Coord2) -> Coord2 {
        self.transform_point(rhs)
    }
}
