/*
 * The $1 and $P Gesture Recognizers (rust version)
 *
 * Original authors:
 *
 *      Jacob O. Wobbrock, Ph.D.
 *      The Information School
 *      University of Washington
 *      Seattle, WA 98195-2840
 *      wobbrock@uw.edu
 *
 *      Andrew D. Wilson, Ph.D.
 *      Microsoft Research
 *      One Microsoft Way
 *      Redmond, WA 98052
 *      awilson@microsoft.com
 *
 *      Yang Li, Ph.D.
 *      Department of Computer Science and Engineering
 *      University of Washington
 *      Seattle, WA 98195-2840
 *      yangli@cs.washington.edu
 *
 *      Radu-Daniel Vatavu, Ph.D.
 *      University Stefan cel Mare of Suceava
 *      Suceava 720229, Romania
 *      vatavu@eed.usv.ro
 *
 *      Lisa Anthony, Ph.D.
 *      UMBC
 *      Information Systems Department
 *      1000 Hilltop Circle
 *      Baltimore, MD 21250
 *      lanthony@umbc.edu
 *
 * The academic publications for the $1 and $P recognizers, and what should be
 * used to cite them, are:
 *
 *  Wobbrock, J.O., Wilson, A.D. and Li, Y. (2007). Gestures without
 *    libraries, toolkits or training: A $1 recognizer for user interface
 *    prototypes. Proceedings of the ACM Symposium on User Interface
 *    Software and Technology (UIST '07). Newport, Rhode Island (October
 *    7-10, 2007). New York: ACM Press, pp. 159-168.
 *
 *  Vatavu, R.-D., Anthony, L. and Wobbrock, J.O. (2012).
 *    Gestures as point clouds: A $P recognizer for user interface
 *    prototypes. Proceedings of the ACM Int'l Conference on
 *    Multimodal Interfaces (ICMI '12). Santa Monica, California
 *    (October 22-26, 2012). New York: ACM Press, pp. 273-280.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (c) 2007-2012, Jacob O. Wobbrock, Andrew D. Wilson, Yang Li,
 * Radu-Daniel Vatavu, and Lisa Anthony. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University Stefan cel Mare of Suceava,
 *      University of Washington, Microsoft Research, nor UMBC, nor the names
 *      of its contributors may be used to endorse or promote products derived
 *      from this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Jacob O. Wobbrock OR Andrew D. Wilson
 * OR Yang Li OR Radu-Daniel Vatavu OR Lisa Anthony BE LIABLE FOR ANY DIRECT,
 * INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING,
 * BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE,
 * DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY
 * OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING
 * NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE,
 * EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
**/

//! Stateless geometry helpers shared by the normalization pipeline and the
//! recognizers.

use crate::{error::RecognitionError, point::Point};

/// Axis-aligned bounds of a point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    /// May be zero for a stroke that never leaves a vertical line.
    pub width: f64,
    /// May be zero for a stroke that never leaves a horizontal line.
    pub height: f64,
}

/// Computes the squared Euclidean distance between two points
pub fn sqr_euclidean_distance(a: &Point, b: &Point) -> f64 {
    (a.x - b.x) * (a.x - b.x) + (a.y - b.y) * (a.y - b.y)
}

/// Computes the Euclidean distance between two points
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    sqr_euclidean_distance(a, b).sqrt()
}

/// Computes the centroid for an array of points
pub fn centroid(points: &[Point]) -> Result<Point, RecognitionError> {
    if points.is_empty() {
        return Err(RecognitionError::EmptyInput);
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    for p in points {
        cx += p.x;
        cy += p.y;
    }
    let n = points.len() as f64;
    Ok(Point::new(cx / n, cy / n, 0))
}

/// Computes the bounding box for an array of points
pub fn bounding_box(points: &[Point]) -> Result<BoundingBox, RecognitionError> {
    if points.is_empty() {
        return Err(RecognitionError::EmptyInput);
    }
    let (mut minx, mut miny) = (f64::MAX, f64::MAX);
    let (mut maxx, mut maxy) = (f64::MIN, f64::MIN);
    for p in points {
        minx = minx.min(p.x);
        miny = miny.min(p.y);
        maxx = maxx.max(p.x);
        maxy = maxy.max(p.y);
    }
    Ok(BoundingBox {
        min_x: minx,
        min_y: miny,
        width: maxx - minx,
        height: maxy - miny,
    })
}

/// Computes the path length for an array of points.
///
/// Pen-up jumps between strokes do not count, and neither does a segment
/// whose length is not finite.
pub fn path_length(points: &[Point]) -> f64 {
    let mut length = 0.0;
    for pair in points.windows(2) {
        if pair[0].stroke_id != pair[1].stroke_id {
            continue;
        }
        let dist = euclidean_distance(&pair[0], &pair[1]);
        if dist.is_finite() {
            length += dist;
        }
    }
    length
}

/// Angle between the centroid and the first point, in radians
pub fn indicative_angle(points: &[Point]) -> Result<f64, RecognitionError> {
    let c = centroid(points)?;
    let first = &points[0];
    Ok((first.y - c.y).atan2(first.x - c.x))
}

/// Rotates every point by `radians` around `center`
pub fn rotate_about(points: &[Point], center: &Point, radians: f64) -> Vec<Point> {
    let (sin, cos) = radians.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - center.x;
            let dy = p.y - center.y;
            p.with_position(
                dx * cos - dy * sin + center.x,
                dx * sin + dy * cos + center.y,
            )
        })
        .collect()
}

/// Rotates the points by `radians` around their centroid
pub fn rotate_by(points: &[Point], radians: f64) -> Result<Vec<Point>, RecognitionError> {
    let c = centroid(points)?;
    Ok(rotate_about(points, &c, radians))
}

/// Average distance between points with the same index.
///
/// Both sequences are expected to have the same, non-zero length.
pub fn path_distance(points1: &[Point], points2: &[Point]) -> f64 {
    debug_assert_eq!(points1.len(), points2.len());
    let sum: f64 = points1
        .iter()
        .zip(points2)
        .map(|(a, b)| euclidean_distance(a, b))
        .sum();
    sum / points1.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y, 0)
    }

    #[test]
    fn centroid_is_the_mean() {
        let c = centroid(&[p(0.0, 0.0), p(4.0, 0.0), p(4.0, 2.0), p(0.0, 2.0)]).unwrap();
        assert_eq!((c.x, c.y), (2.0, 1.0));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(centroid(&[]), Err(RecognitionError::EmptyInput));
        assert_eq!(bounding_box(&[]), Err(RecognitionError::EmptyInput));
        assert_eq!(rotate_by(&[], 1.0), Err(RecognitionError::EmptyInput));
    }

    #[test]
    fn bounding_box_of_a_vertical_line_has_zero_width() {
        let b = bounding_box(&[p(3.0, -1.0), p(3.0, 5.0)]).unwrap();
        assert_eq!(b.min_x, 3.0);
        assert_eq!(b.min_y, -1.0);
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 6.0);
    }

    #[test]
    fn path_length_skips_stroke_boundaries() {
        let points = [
            Point::new(0.0, 0.0, 0),
            Point::new(3.0, 4.0, 0),
            // the jump to the second stroke is a pen-up move
            Point::new(100.0, 100.0, 1),
            Point::new(100.0, 110.0, 1),
        ];
        assert_eq!(path_length(&points), 15.0);
    }

    #[test]
    fn path_length_ignores_non_finite_segments() {
        let points = [p(0.0, 0.0), p(f64::INFINITY, 0.0), p(1.0, 0.0)];
        assert_eq!(path_length(&points), 0.0);
        let points = [p(0.0, 0.0), p(0.0, 0.0), p(0.0, 2.0)];
        assert_eq!(path_length(&points), 2.0);
    }

    #[test]
    fn rotation_about_centroid() {
        let rotated = rotate_by(&[p(-1.0, 0.0), p(1.0, 0.0)], FRAC_PI_2).unwrap();
        assert!((rotated[0].x - 0.0).abs() < 1e-12);
        assert!((rotated[0].y + 1.0).abs() < 1e-12);
        assert!((rotated[1].y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn indicative_angle_points_at_first_point() {
        let angle = indicative_angle(&[p(0.0, 1.0), p(0.0, -1.0)]).unwrap();
        assert!((angle - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn path_distance_is_averaged() {
        let a = [p(0.0, 0.0), p(1.0, 0.0)];
        let b = [p(0.0, 2.0), p(1.0, 4.0)];
        assert_eq!(path_distance(&a, &b), 3.0);
    }
}
