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
    config::RecognizerConfig,
    geometry,
    gesture::{GestureTemplate, NormalizedGesture, Normalization},
    error::RecognitionError,
    point::Point,
    recognizer::{closest_template, Recognition, Recognizer, Score},
};

/// The $P recognizer.
///
/// Gestures are treated as unordered point clouds, so neither the order of
/// the strokes nor the direction they were drawn in matters.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloudRecognizer {
    pub resample_count: usize,
    /// Controls the number of greedy search trials (eps is in [0..1])
    pub epsilon: f64,
}

impl Default for PointCloudRecognizer {
    fn default() -> Self {
        Self::from_config(&RecognizerConfig::default())
    }
}

impl PointCloudRecognizer {
    pub fn from_config(config: &RecognizerConfig) -> Self {
        Self {
            resample_count: config.resample_count,
            epsilon: config.epsilon,
        }
    }
}

impl Recognizer for PointCloudRecognizer {
    fn normalize(&self, points: &[Point]) -> Result<NormalizedGesture, RecognitionError> {
        NormalizedGesture::new(points, self.resample_count, Normalization::PreserveOrientation)
    }

    /// Main function of the $P recognizer.
    /// Classifies a candidate gesture against a set of training samples.
    /// Returns the class of the closest neighbor in the training set.
    fn recognize(
        &self,
        points: &[Point],
        templates: &[GestureTemplate],
    ) -> Result<Recognition, RecognitionError> {
        let candidate = self.normalize(points)?.into_points();

        let (index, distance) = closest_template(templates, |template| {
            let template_points = self.normalize(&template.points)?.into_points();
            Ok(Some(greedy_cloud_match(
                &candidate,
                &template_points,
                self.epsilon,
            )))
        })?;

        Ok(Recognition {
            name: templates[index].name.clone(),
            score: Score::Distance(distance),
            template_index: index,
        })
    }
}

/// Implements greedy search for a minimum-distance matching between two point clouds
pub fn greedy_cloud_match(points1: &[Point], points2: &[Point], eps: f64) -> f64 {
    // the two clouds should have the same number of points by now
    let n = points1.len().min(points2.len());
    if n == 0 {
        return f64::MAX;
    }

    let step = ((n as f64).powf(1.0 - eps.clamp(0.0, 1.0)).floor() as usize).max(1);
    let mut min_distance = f64::MAX;
    for i in (0..n).step_by(step) {
        // match points1 --> points2 starting with index point i
        let dist1 = cloud_distance(&points1[..n], &points2[..n], i);
        // match points2 --> points1 starting with index point i
        let dist2 = cloud_distance(&points2[..n], &points1[..n], i);
        min_distance = min_distance.min(dist1).min(dist2);
    }
    min_distance
}

/// Computes the distance between two point clouds by performing a minimum-distance greedy matching
/// starting with point startIndex
fn cloud_distance(points1: &[Point], points2: &[Point], start_index: usize) -> f64 {
    let n = points1.len();
    // matched[i] signals whether point i from the 2nd cloud has been already matched
    let mut matched = vec![false; n];
    // computes the sum of distances between matched points (i.e., the distance between the two clouds)
    let mut sum = 0.0;
    let mut i = start_index;
    loop {
        let mut index = 0;
        let mut min_dist = f64::MAX;
        for (j, p) in points2.iter().enumerate() {
            if !matched[j] {
                let dist = geometry::euclidean_distance(&points1[i], p);
                if dist < min_dist {
                    min_dist = dist;
                    index = j;
                }
            }
        }
        // point index from the 2nd cloud is matched to point i from the 1st cloud
        matched[index] = true;
        // weight each distance with a confidence coefficient that decreases from 1 to 0
        let weight = 1.0 - ((i + n - start_index) % n) as f64 / n as f64;
        sum += weight * min_dist;
        i = (i + 1) % n;
        if i == start_index {
            break;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::from_strokes;

    fn cross() -> Vec<Point> {
        from_strokes(&[
            vec![(0.0, 0.0), (100.0, 100.0)],
            vec![(100.0, 0.0), (0.0, 100.0)],
        ])
    }

    fn bar() -> Vec<Point> {
        from_strokes(&[vec![(0.0, 50.0), (100.0, 50.0)], vec![(50.0, 0.0), (50.0, 100.0)]])
    }

    #[test]
    fn identical_clouds_are_at_distance_zero() {
        let points = PointCloudRecognizer::default()
            .normalize(&cross())
            .unwrap()
            .into_points();
        assert_eq!(greedy_cloud_match(&points, &points, 0.5), 0.0);
    }

    #[test]
    fn cloud_distance_weights_early_points_more() {
        let a = [Point::new(0.0, 0.0, 0), Point::new(10.0, 0.0, 0)];
        let b = [Point::new(0.0, 1.0, 0), Point::new(10.0, 0.0, 0)];
        // start 0: first point is off by 1 with weight 1
        assert_eq!(cloud_distance(&a, &b, 0), 1.0);
        // start 1: the mismatch comes last, weight 1/2
        assert_eq!(cloud_distance(&a, &b, 1), 0.5);
        assert_eq!(greedy_cloud_match(&a, &b, 0.5), 0.5);
    }

    #[test]
    fn stroke_order_and_direction_do_not_matter() {
        let reordered = from_strokes(&[
            vec![(0.0, 100.0), (100.0, 0.0)],
            vec![(100.0, 100.0), (0.0, 0.0)],
        ]);
        let templates = [
            GestureTemplate::new(bar(), "plus"),
            GestureTemplate::new(cross(), "x"),
        ];
        let result = PointCloudRecognizer::default()
            .recognize(&reordered, &templates)
            .unwrap();
        assert_eq!(result.name, "x");
        match result.score {
            Score::Distance(d) => assert!(d < 0.5, "distance = {d}"),
            other => panic!("unexpected score {other:?}"),
        }
    }

    #[test]
    fn empty_template_set_is_invalid() {
        let err = PointCloudRecognizer::default()
            .recognize(&cross(), &[])
            .unwrap_err();
        assert!(matches!(err, RecognitionError::InvalidInput(_)));
    }

    #[test]
    fn extreme_epsilon_still_terminates() {
        let points = PointCloudRecognizer::default()
            .normalize(&bar())
            .unwrap()
            .into_points();
        for eps in [0.0, 1.0, 7.0] {
            assert_eq!(greedy_cloud_match(&points, &points, eps), 0.0);
        }
    }
}
