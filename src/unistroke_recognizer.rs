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

use log::warn;

use crate::{
    config::RecognizerConfig,
    error::RecognitionError,
    geometry,
    gesture::{GestureTemplate, NormalizedGesture, Normalization},
    point::Point,
    recognizer::{closest_template, Recognition, Recognizer, Score},
};

/// 0.5 * (-1 + sqrt(5))
const PHI: f64 = 0.618_033_988_749_894_9;

/// The $1 recognizer.
///
/// Gestures are resampled, rotated so that their indicative angle is zero,
/// stretched into a square and centered. A golden section search then looks
/// for the rotation that best aligns the candidate with each template.
#[derive(Debug, Clone, PartialEq)]
pub struct UnistrokeRecognizer {
    pub resample_count: usize,
    pub square_size: f64,
    /// Radians searched on each side of the indicative angle
    pub angle_range: f64,
    /// Radians
    pub angle_precision: f64,
}

impl Default for UnistrokeRecognizer {
    fn default() -> Self {
        Self::from_config(&RecognizerConfig::default())
    }
}

impl UnistrokeRecognizer {
    pub fn from_config(config: &RecognizerConfig) -> Self {
        Self {
            resample_count: config.resample_count,
            square_size: config.square_size,
            angle_range: config.angle_range,
            angle_precision: config.angle_precision,
        }
    }

    fn check_parameters(&self) -> Result<(), RecognitionError> {
        if !(self.angle_precision.is_finite() && self.angle_precision > 0.0) {
            return Err(RecognitionError::InvalidInput(format!(
                "angle precision must be positive, got {}",
                self.angle_precision
            )));
        }
        if !(self.square_size.is_finite() && self.square_size > 0.0) {
            return Err(RecognitionError::InvalidInput(format!(
                "square size must be positive, got {}",
                self.square_size
            )));
        }
        Ok(())
    }

    /// Converts an average point distance into a similarity score.
    pub fn score(&self, distance: f64) -> f64 {
        let half_diagonal = 0.5 * (2.0 * self.square_size * self.square_size).sqrt();
        1.0 - distance / half_diagonal
    }
}

impl Recognizer for UnistrokeRecognizer {
    fn normalize(&self, points: &[Point]) -> Result<NormalizedGesture, RecognitionError> {
        NormalizedGesture::new(
            points,
            self.resample_count,
            Normalization::RotateAndSquare {
                size: self.square_size,
            },
        )
    }

    /// Main function of the $1 recognizer.
    /// Classifies a candidate gesture against a set of templates.
    fn recognize(
        &self,
        points: &[Point],
        templates: &[GestureTemplate],
    ) -> Result<Recognition, RecognitionError> {
        self.check_parameters()?;
        let candidate = self.normalize(points)?.into_points();

        let (index, distance) = closest_template(templates, |template| {
            let template_points = self.normalize(&template.points)?.into_points();
            // $1 compares points index by index
            if template_points.len() != candidate.len() {
                warn!(
                    "Skipping template {:?}: {} points, candidate has {}",
                    template.name,
                    template_points.len(),
                    candidate.len()
                );
                return Ok(None);
            }
            Ok(Some(distance_at_best_angle(
                &candidate,
                &template_points,
                -self.angle_range,
                self.angle_range,
                self.angle_precision,
            )?))
        })?;

        Ok(Recognition {
            name: templates[index].name.clone(),
            score: Score::Similarity(self.score(distance)),
            template_index: index,
        })
    }
}

/// Golden section search for the rotation of `points` within `[from, to]`
/// that minimizes the path distance to `template`.
/// Stops once the bracket is narrower than `threshold`.
pub fn distance_at_best_angle(
    points: &[Point],
    template: &[Point],
    from: f64,
    to: f64,
    threshold: f64,
) -> Result<f64, RecognitionError> {
    let center = geometry::centroid(points)?;
    let (mut a, mut b) = (from, to);

    let mut x1 = PHI * a + (1.0 - PHI) * b;
    let mut f1 = distance_at_angle(points, &center, template, x1);
    let mut x2 = (1.0 - PHI) * a + PHI * b;
    let mut f2 = distance_at_angle(points, &center, template, x2);

    while (b - a).abs() > threshold {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * a + (1.0 - PHI) * b;
            f1 = distance_at_angle(points, &center, template, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - PHI) * a + PHI * b;
            f2 = distance_at_angle(points, &center, template, x2);
        }
    }
    Ok(f1.min(f2))
}

/// Path distance to `template` after rotating `points` by `radians` about `center`
fn distance_at_angle(points: &[Point], center: &Point, template: &[Point], radians: f64) -> f64 {
    let rotated = geometry::rotate_about(points, center, radians);
    geometry::path_distance(&rotated, template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::from_strokes;

    fn triangle() -> Vec<Point> {
        from_strokes(&[[(0.0, 0.0), (50.0, 80.0), (100.0, 0.0), (0.0, 0.0)]])
    }

    fn check() -> Vec<Point> {
        from_strokes(&[[(0.0, 40.0), (30.0, 80.0), (100.0, 0.0)]])
    }

    #[test]
    fn search_finds_the_aligning_rotation() {
        let template = UnistrokeRecognizer::default()
            .normalize(&triangle())
            .unwrap()
            .into_points();
        let turned = geometry::rotate_by(&template, 20f64.to_radians()).unwrap();
        let unaligned = geometry::path_distance(&turned, &template);
        let best = distance_at_best_angle(
            &turned,
            &template,
            -45f64.to_radians(),
            45f64.to_radians(),
            2f64.to_radians(),
        )
        .unwrap();
        assert!(best < 5.0, "best = {best}");
        assert!(best < unaligned);
    }

    #[test]
    fn self_match_scores_close_to_one() {
        let recognizer = UnistrokeRecognizer::default();
        let templates = [
            GestureTemplate::new(check(), "check"),
            GestureTemplate::new(triangle(), "triangle"),
        ];
        let result = recognizer.recognize(&triangle(), &templates).unwrap();
        assert_eq!(result.name, "triangle");
        assert_eq!(result.template_index, 1);
        match result.score {
            Score::Similarity(s) => assert!(s > 0.95 && s <= 1.0, "score = {s}"),
            other => panic!("unexpected score {other:?}"),
        }
    }

    #[test]
    fn score_is_one_at_zero_distance() {
        let recognizer = UnistrokeRecognizer::default();
        assert_eq!(recognizer.score(0.0), 1.0);
        let half_diagonal = 0.5 * (2.0f64 * 250.0 * 250.0).sqrt();
        assert!((recognizer.score(half_diagonal)).abs() < 1e-12);
        assert!(recognizer.score(2.0 * half_diagonal) < 0.0);
    }

    #[test]
    fn degenerate_templates_leave_no_match() {
        let dot = GestureTemplate::new(vec![Point::new(1.0, 1.0, 0); 3], "dot");
        let err = UnistrokeRecognizer::default()
            .recognize(&triangle(), &[dot])
            .unwrap_err();
        assert_eq!(err, RecognitionError::NoMatch);
    }

    #[test]
    fn bad_parameters_are_rejected() {
        let templates = [GestureTemplate::new(triangle(), "triangle")];
        let zero_precision = UnistrokeRecognizer {
            angle_precision: 0.0,
            ..Default::default()
        };
        let negative_size = UnistrokeRecognizer {
            square_size: -1.0,
            ..Default::default()
        };
        for recognizer in [zero_precision, negative_size] {
            let err = recognizer.recognize(&triangle(), &templates).unwrap_err();
            assert!(matches!(err, RecognitionError::InvalidInput(_)));
        }
    }
}
