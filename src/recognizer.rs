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

//! The recognition facade: one trait both matchers implement, plus free
//! functions that pick a matcher from an [`Algorithm`].

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

use crate::{
    config::{Algorithm, RecognizerConfig},
    error::RecognitionError,
    gesture::{GestureTemplate, NormalizedGesture, Stage},
    point::Point,
};

/// How well a gesture matched its best template.
///
/// $1 reports a similarity and $P a distance, so the two are kept apart.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Score {
    /// Roughly in [0..1], higher is better. Very poor matches go negative.
    Similarity(f64),
    /// Zero for a perfect match, lower is better.
    Distance(f64),
}

impl Score {
    /// The raw number, whichever kind it is.
    pub fn value(&self) -> f64 {
        match *self {
            Score::Similarity(v) | Score::Distance(v) => v,
        }
    }
}

/// The best template for a gesture.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recognition {
    /// Class of the closest template
    pub name: String,
    pub score: Score,
    /// Position of the winning template in the slice that was searched
    pub template_index: usize,
}

/// A gesture matcher.
///
/// Implementations are stateless between calls: every call normalizes the
/// gesture and every template again. They hold no interior state, so a
/// recognizer can be shared between threads.
pub trait Recognizer: Send + Sync {
    /// Runs the normalization pipeline this matcher uses.
    fn normalize(&self, points: &[Point]) -> Result<NormalizedGesture, RecognitionError>;

    /// Compares `points` against every template and returns the closest one.
    fn recognize(
        &self,
        points: &[Point],
        templates: &[GestureTemplate],
    ) -> Result<Recognition, RecognitionError>;
}

/// Returns one stage of the normalization `algorithm` applies to `points`
/// when resampling into `n` points.
pub fn normalize(
    points: &[Point],
    n: usize,
    stage: Stage,
    algorithm: Algorithm,
) -> Result<Vec<Point>, RecognitionError> {
    let recognizer = RecognizerConfig::new(algorithm)
        .with_resample_count(n)
        .recognizer();
    Ok(recognizer.normalize(points)?.stage(stage).to_vec())
}

/// Recognizes `points` among `templates` with the default parameters of
/// `algorithm`, resampling into `n` points.
pub fn recognize(
    points: &[Point],
    n: usize,
    templates: &[GestureTemplate],
    algorithm: Algorithm,
) -> Result<Recognition, RecognitionError> {
    recognize_with(
        points,
        templates,
        &RecognizerConfig::new(algorithm).with_resample_count(n),
    )
}

/// Recognizes `points` among `templates` with the matcher `config` describes.
pub fn recognize_with(
    points: &[Point],
    templates: &[GestureTemplate],
    config: &RecognizerConfig,
) -> Result<Recognition, RecognitionError> {
    let recognition = config.recognizer().recognize(points, templates)?;
    debug!(
        "{:?} recognized {:?} (template {}) with {:?}",
        config.algorithm, recognition.name, recognition.template_index, recognition.score
    );
    Ok(recognition)
}

/// Finds the template with the smallest distance.
///
/// `distance` returns `Ok(None)` for a template that cannot be compared;
/// a template that fails with an error is skipped too. Ties go to the
/// template that comes first.
pub(crate) fn closest_template<F>(
    templates: &[GestureTemplate],
    mut distance: F,
) -> Result<(usize, f64), RecognitionError>
where
    F: FnMut(&GestureTemplate) -> Result<Option<f64>, RecognitionError>,
{
    if templates.is_empty() {
        return Err(RecognitionError::InvalidInput(
            "the template set is empty".into(),
        ));
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, template) in templates.iter().enumerate() {
        let dist = match distance(template) {
            Ok(Some(dist)) => dist,
            Ok(None) => continue,
            Err(err) => {
                warn!("Skipping template {i} ({:?}): {err}", template.name);
                continue;
            }
        };
        if !dist.is_finite() {
            warn!("Skipping template {i} ({:?}): non-finite distance {dist}", template.name);
            continue;
        }
        debug!("Template {i} ({:?}) - Distance: {dist}", template.name);
        if best.map_or(true, |(_, min)| dist < min) {
            best = Some((i, dist));
        }
    }
    best.ok_or(RecognitionError::NoMatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::from_strokes;

    fn template(name: &str, stroke: &[(f64, f64)]) -> GestureTemplate {
        GestureTemplate::new(from_strokes(&[stroke]), name)
    }

    #[test]
    fn empty_template_set_is_invalid() {
        let err = closest_template(&[], |_| Ok(Some(0.0))).unwrap_err();
        assert!(matches!(err, RecognitionError::InvalidInput(_)));
    }

    #[test]
    fn ties_go_to_the_first_template() {
        let templates = [
            template("a", &[(0.0, 0.0), (1.0, 1.0)]),
            template("b", &[(0.0, 0.0), (1.0, 1.0)]),
        ];
        let (index, dist) = closest_template(&templates, |_| Ok(Some(1.0))).unwrap();
        assert_eq!((index, dist), (0, 1.0));
    }

    #[test]
    fn excluded_and_failing_templates_are_skipped() {
        let templates = [
            template("excluded", &[(0.0, 0.0), (1.0, 1.0)]),
            template("broken", &[(0.0, 0.0), (1.0, 1.0)]),
            template("nan", &[(0.0, 0.0), (1.0, 1.0)]),
            template("kept", &[(0.0, 0.0), (1.0, 1.0)]),
        ];
        let result = closest_template(&templates, |t| match t.name.as_str() {
            "excluded" => Ok(None),
            "broken" => Err(RecognitionError::DegenerateGeometry),
            "nan" => Ok(Some(f64::NAN)),
            _ => Ok(Some(7.0)),
        });
        assert_eq!(result, Ok((3, 7.0)));
    }

    #[test]
    fn nothing_comparable_is_no_match() {
        let templates = [template("a", &[(0.0, 0.0), (1.0, 1.0)])];
        assert_eq!(
            closest_template(&templates, |_| Ok(None)),
            Err(RecognitionError::NoMatch)
        );
    }

    #[test]
    fn normalize_exposes_every_stage() {
        let points = from_strokes(&[[(0.0, 0.0), (10.0, 20.0), (20.0, 0.0)]]);
        let raw = normalize(&points, 16, Stage::Raw, Algorithm::DollarOne).unwrap();
        assert_eq!(raw, points);
        for algorithm in [Algorithm::DollarOne, Algorithm::DollarP] {
            let canonical = normalize(&points, 16, Stage::Translated, algorithm).unwrap();
            assert_eq!(canonical.len(), 16);
        }
    }

    #[test]
    fn boxed_recognizers_can_be_shared_between_threads() {
        let recognizer: std::sync::Arc<dyn Recognizer> =
            RecognizerConfig::new(Algorithm::DollarP).recognizer().into();
        let templates = vec![template("v", &[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)])];
        let worker = {
            let recognizer = std::sync::Arc::clone(&recognizer);
            std::thread::spawn(move || {
                let points = from_strokes(&[[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]]);
                recognizer.recognize(&points, &templates).map(|r| r.name)
            })
        };
        assert_eq!(worker.join().unwrap(), Ok("v".to_string()));
    }

    #[test]
    fn score_value() {
        assert_eq!(Score::Similarity(0.75).value(), 0.75);
        assert_eq!(Score::Distance(2.5).value(), 2.5);
    }
}
