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

use crate::{
    error::RecognitionError,
    geometry::{self, BoundingBox},
    point::Point,
    recognizer::Recognizer,
};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Default number of points on the gesture path
pub const SAMPLING_RESOLUTION: usize = 64;
/// Default side of the square $1 scales gestures into
pub const SQUARE_SIZE: f64 = 250.0;
/// An axis whose extent is this small relative to the other one is treated
/// as flat and is not stretched when scaling to a square.
const FLAT_AXIS_RATIO: f64 = 1e-9;

/// A recorded gesture: a class name and the points as they were captured.
///
/// Names are not unique. Several templates per class improve recognition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GestureTemplate {
    /// Gesture class
    pub name: String,
    /// Gesture points (raw)
    pub points: Vec<Point>,
}

impl GestureTemplate {
    /// Constructs a new template from a list of points and a name
    pub fn new(pts: Vec<Point>, name: &str) -> Self {
        Self {
            points: pts,
            name: name.into(),
        }
    }

    /// Canonical points of this template as `recognizer` sees them.
    /// Recognizers recompute these on every call; this is meant for previews.
    pub fn canonical_points<R>(&self, recognizer: &R) -> Result<Vec<Point>, RecognitionError>
    where
        R: Recognizer + ?Sized,
    {
        Ok(recognizer.normalize(&self.points)?.into_points())
    }
}

/// A step of the normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stage {
    /// The points as they were handed in.
    Raw,
    /// Resampled into equally spaced points.
    Resampled,
    /// Rotated so the indicative angle is zero. Identical to `Resampled`
    /// when the normalization preserves orientation.
    Rotated,
    Scaled,
    /// Centered at the origin. These are the canonical points.
    #[default]
    Translated,
}

/// How a recognizer wants its gestures normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// $1: rotate to the indicative angle, then stretch each axis to a
    /// `size` x `size` square.
    RotateAndSquare { size: f64 },
    /// $P: keep the orientation, scale uniformly into the unit square.
    PreserveOrientation,
}

/// Every stage of the normalization of one gesture, computed once.
#[derive(Debug, Clone)]
pub struct NormalizedGesture {
    raw: Vec<Point>,
    resampled: Vec<Point>,
    rotated: Vec<Point>,
    scaled: Vec<Point>,
    translated: Vec<Point>,
}

impl NormalizedGesture {
    /// Runs the whole pipeline over a copy of `points`: resample to `n`
    /// points, rotate, scale and translate to the origin.
    pub fn new(
        points: &[Point],
        n: usize,
        normalization: Normalization,
    ) -> Result<Self, RecognitionError> {
        validate(points, n)?;
        let distinct = dedup(points);
        if distinct.len() < 2 || geometry::path_length(&distinct) <= 0.0 {
            return Err(RecognitionError::DegenerateGeometry);
        }

        let resampled = resample(&distinct, n);
        let (rotated, scaled) = match normalization {
            Normalization::RotateAndSquare { size } => {
                let rotated = rotate_to_zero(&resampled)?;
                let scaled = scale_to_square(&rotated, size)?;
                (rotated, scaled)
            }
            Normalization::PreserveOrientation => {
                let scaled = scale(&resampled)?;
                (resampled.clone(), scaled)
            }
        };
        let translated = translate_to_origin(&scaled)?;

        Ok(Self {
            raw: points.to_vec(),
            resampled,
            rotated,
            scaled,
            translated,
        })
    }

    /// The output of one pipeline stage.
    pub fn stage(&self, stage: Stage) -> &[Point] {
        match stage {
            Stage::Raw => &self.raw,
            Stage::Resampled => &self.resampled,
            Stage::Rotated => &self.rotated,
            Stage::Scaled => &self.scaled,
            Stage::Translated => &self.translated,
        }
    }

    /// The canonical points.
    pub fn points(&self) -> &[Point] {
        &self.translated
    }

    pub fn into_points(self) -> Vec<Point> {
        self.translated
    }
}

fn validate(points: &[Point], n: usize) -> Result<(), RecognitionError> {
    if points.len() < 2 {
        return Err(RecognitionError::InvalidInput(format!(
            "a gesture needs at least 2 points, got {}",
            points.len()
        )));
    }
    if n < 2 {
        return Err(RecognitionError::InvalidInput(format!(
            "cannot resample into {n} points, at least 2 are needed"
        )));
    }
    if let Some(p) = points.iter().find(|p| !p.is_finite()) {
        return Err(RecognitionError::InvalidInput(format!(
            "non-finite point ({}, {})",
            p.x, p.y
        )));
    }
    if let Some(pair) = points.windows(2).find(|w| w[1].stroke_id < w[0].stroke_id) {
        return Err(RecognitionError::InvalidInput(format!(
            "stroke {} follows stroke {}",
            pair[1].stroke_id, pair[0].stroke_id
        )));
    }
    Ok(())
}

/// Drops samples that repeat the previous one within the same stroke
fn dedup(points: &[Point]) -> Vec<Point> {
    let mut distinct: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if distinct.last() != Some(p) {
            distinct.push(*p);
        }
    }
    distinct
}

/// Resamples the array of points into n equally-distanced points
fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let mut new_points = Vec::with_capacity(n);
    new_points.push(points[0]);

    let interval = geometry::path_length(points) / (n as f64 - 1.0);
    let mut d = 0.0;

    for i in 1..points.len() {
        // never interpolate across a pen-up
        if points[i].stroke_id != points[i - 1].stroke_id {
            continue;
        }
        let mut first_point = points[i - 1];
        let mut dist = geometry::euclidean_distance(&first_point, &points[i]);
        if !dist.is_finite() {
            continue;
        }
        while d + dist >= interval && new_points.len() < n {
            let t = if dist > 0.0 {
                ((interval - d) / dist).clamp(0.0, 1.0)
            } else {
                0.5
            };
            let q = Point::new(
                first_point.x + t * (points[i].x - first_point.x),
                first_point.y + t * (points[i].y - first_point.y),
                points[i].stroke_id,
            );
            new_points.push(q);

            // update partial length
            dist = d + dist - interval;
            d = 0.0;
            first_point = q;
        }
        d += dist;
    }

    // rounding can leave us short of the last point
    let last = points[points.len() - 1];
    while new_points.len() < n {
        new_points.push(last);
    }
    new_points.truncate(n);
    new_points
}

/// Rotates the points so that the indicative angle is zero
fn rotate_to_zero(points: &[Point]) -> Result<Vec<Point>, RecognitionError> {
    let angle = geometry::indicative_angle(points)?;
    geometry::rotate_by(points, -angle)
}

/// Stretches each axis so that the bounding box becomes a `size` x `size`
/// square. A flat axis is left as it is.
fn scale_to_square(points: &[Point], size: f64) -> Result<Vec<Point>, RecognitionError> {
    let BoundingBox { width, height, .. } = geometry::bounding_box(points)?;
    let longest = width.max(height);
    let factor = |extent: f64| {
        if extent > 0.0 && extent > longest * FLAT_AXIS_RATIO {
            size / extent
        } else {
            1.0
        }
    };
    let (sx, sy) = (factor(width), factor(height));
    Ok(points
        .iter()
        .map(|p| p.with_position(p.x * sx, p.y * sy))
        .collect())
}

/// Performs scale normalization with shape preservation into [0..1]x[0..1]
fn scale(points: &[Point]) -> Result<Vec<Point>, RecognitionError> {
    let b = geometry::bounding_box(points)?;
    let mut scale = b.width.max(b.height);
    if scale <= 0.0 {
        scale = 1.0;
    }
    Ok(points
        .iter()
        .map(|p| p.with_position((p.x - b.min_x) / scale, (p.y - b.min_y) / scale))
        .collect())
}

/// Translates the points so that their centroid is the origin
fn translate_to_origin(points: &[Point]) -> Result<Vec<Point>, RecognitionError> {
    let c = geometry::centroid(points)?;
    Ok(points
        .iter()
        .map(|p| p.with_position(p.x - c.x, p.y - c.y))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::from_strokes;

    const SQUARE: Normalization = Normalization::RotateAndSquare { size: SQUARE_SIZE };

    fn zigzag() -> Vec<Point> {
        from_strokes(&[vec![
            (0.0, 0.0),
            (10.0, 30.0),
            (20.0, 0.0),
            (30.0, 30.0),
            (40.0, 0.0),
        ]])
    }

    #[test]
    fn resample_yields_exactly_n_points() {
        for n in [2, 3, 16, 64, 100] {
            let g = NormalizedGesture::new(&zigzag(), n, SQUARE).unwrap();
            for stage in [Stage::Resampled, Stage::Rotated, Stage::Scaled, Stage::Translated] {
                assert_eq!(g.stage(stage).len(), n, "stage {stage:?} with n = {n}");
            }
        }
    }

    #[test]
    fn resample_is_deterministic() {
        let a = NormalizedGesture::new(&zigzag(), 64, SQUARE).unwrap();
        let b = NormalizedGesture::new(&zigzag(), 64, SQUARE).unwrap();
        assert_eq!(a.points(), b.points());
        assert_eq!(a.stage(Stage::Resampled), b.stage(Stage::Resampled));
    }

    #[test]
    fn resampled_points_are_equally_spaced() {
        let line = from_strokes(&[vec![(0.0, 0.0), (7.0, 0.0), (9.0, 0.0)]]);
        let resampled = resample(&line, 10);
        for (i, p) in resampled.iter().enumerate() {
            assert!((p.x - i as f64).abs() < 1e-9, "{resampled:?}");
        }
    }

    #[test]
    fn a_long_segment_emits_several_points() {
        let line = from_strokes(&[vec![(0.0, 0.0), (100.0, 0.0)]]);
        let resampled = resample(&line, 5);
        assert_eq!(resampled.len(), 5);
        for (p, expected) in resampled.iter().zip([0.0, 25.0, 50.0, 75.0, 100.0]) {
            assert!((p.x - expected).abs() < 1e-9, "{resampled:?}");
        }
    }

    #[test]
    fn resampling_never_bridges_strokes() {
        let points = from_strokes(&[
            vec![(0.0, 0.0), (10.0, 0.0)],
            vec![(0.0, 100.0), (10.0, 100.0)],
        ]);
        let resampled = resample(&points, 32);
        assert_eq!(resampled.len(), 32);
        for p in &resampled {
            let expected_y = if p.stroke_id == 0 { 0.0 } else { 100.0 };
            assert_eq!(p.y, expected_y, "{p:?} lies between the strokes");
        }
        assert!(resampled.iter().any(|p| p.stroke_id == 1));
    }

    #[test]
    fn raw_stage_is_the_input() {
        let mut points = zigzag();
        points.insert(1, points[0]);
        let g = NormalizedGesture::new(&points, 16, SQUARE).unwrap();
        assert_eq!(g.stage(Stage::Raw), points.as_slice());
    }

    #[test]
    fn rotation_puts_first_point_on_positive_x_axis() {
        let g = NormalizedGesture::new(&zigzag(), 64, SQUARE).unwrap();
        let rotated = g.stage(Stage::Rotated);
        let c = geometry::centroid(rotated).unwrap();
        assert!((rotated[0].y - c.y).abs() < 1e-9);
        assert!(rotated[0].x > c.x);
    }

    #[test]
    fn scaled_to_square_and_centered() {
        let g = NormalizedGesture::new(&zigzag(), 64, SQUARE).unwrap();
        let b = geometry::bounding_box(g.stage(Stage::Scaled)).unwrap();
        assert!((b.width - SQUARE_SIZE).abs() < 1e-9);
        assert!((b.height - SQUARE_SIZE).abs() < 1e-9);
        let c = geometry::centroid(g.points()).unwrap();
        assert!(c.x.abs() < 1e-9 && c.y.abs() < 1e-9);
    }

    #[test]
    fn flat_axes_are_not_stretched() {
        let horizontal = from_strokes(&[vec![(0.0, 5.0), (50.0, 5.0)]]);
        let vertical = from_strokes(&[vec![(5.0, 0.0), (5.0, 50.0)]]);
        for points in [horizontal, vertical] {
            let g = NormalizedGesture::new(&points, 16, SQUARE).unwrap();
            let b = geometry::bounding_box(g.points()).unwrap();
            assert!(g.points().iter().all(Point::is_finite));
            assert!((b.width.max(b.height) - SQUARE_SIZE).abs() < 1e-9);
            assert!(b.width.min(b.height) < 1e-6);
        }
    }

    #[test]
    fn preserving_orientation_scales_uniformly() {
        let rect = from_strokes(&[vec![(0.0, 0.0), (40.0, 0.0), (40.0, 10.0)]]);
        let g = NormalizedGesture::new(&rect, 32, Normalization::PreserveOrientation).unwrap();
        assert_eq!(g.stage(Stage::Rotated), g.stage(Stage::Resampled));
        let b = geometry::bounding_box(g.stage(Stage::Scaled)).unwrap();
        assert!((b.width - 1.0).abs() < 1e-9);
        assert!((b.height - 0.25).abs() < 1e-9);
        assert_eq!((b.min_x, b.min_y), (0.0, 0.0));
    }

    #[test]
    fn too_few_points_are_rejected() {
        let err = NormalizedGesture::new(&[Point::new(1.0, 1.0, 0)], 64, SQUARE).unwrap_err();
        assert!(matches!(err, RecognitionError::InvalidInput(_)));
        let err = NormalizedGesture::new(&[], 64, SQUARE).unwrap_err();
        assert!(matches!(err, RecognitionError::InvalidInput(_)));
    }

    #[test]
    fn bad_resample_count_is_rejected() {
        let err = NormalizedGesture::new(&zigzag(), 1, SQUARE).unwrap_err();
        assert!(matches!(err, RecognitionError::InvalidInput(_)));
    }

    #[test]
    fn out_of_order_strokes_are_rejected() {
        let points = [
            Point::new(0.0, 0.0, 1),
            Point::new(1.0, 0.0, 1),
            Point::new(2.0, 0.0, 0),
        ];
        let err = NormalizedGesture::new(&points, 8, SQUARE).unwrap_err();
        assert!(matches!(err, RecognitionError::InvalidInput(_)));
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let points = [Point::new(0.0, 0.0, 0), Point::new(f64::NAN, 0.0, 0)];
        let err = NormalizedGesture::new(&points, 8, SQUARE).unwrap_err();
        assert!(matches!(err, RecognitionError::InvalidInput(_)));
    }

    #[test]
    fn zero_length_gestures_are_degenerate() {
        let dot = [Point::new(3.0, 3.0, 0); 5];
        assert_eq!(
            NormalizedGesture::new(&dot, 64, SQUARE).unwrap_err(),
            RecognitionError::DegenerateGeometry
        );
        // two taps, each a single point
        let taps = [Point::new(0.0, 0.0, 0), Point::new(9.0, 9.0, 1)];
        assert_eq!(
            NormalizedGesture::new(&taps, 64, Normalization::PreserveOrientation).unwrap_err(),
            RecognitionError::DegenerateGeometry
        );
    }

    #[test]
    fn duplicate_samples_do_not_change_the_result() {
        let points = zigzag();
        let mut doubled = Vec::new();
        for p in &points {
            doubled.push(*p);
            doubled.push(*p);
        }
        let a = NormalizedGesture::new(&points, 32, SQUARE).unwrap();
        let b = NormalizedGesture::new(&doubled, 32, SQUARE).unwrap();
        assert_eq!(a.points(), b.points());
    }
}
