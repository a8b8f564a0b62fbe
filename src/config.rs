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

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

use crate::{
    gesture::{SAMPLING_RESOLUTION, SQUARE_SIZE},
    point_cloud_recognizer::PointCloudRecognizer,
    recognizer::Recognizer,
    unistroke_recognizer::UnistrokeRecognizer,
};

/// Which matcher a [`RecognizerConfig`] builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// $1: ordered points, rotation-invariant through a search over angles.
    /// Scores are similarities, higher is better.
    #[default]
    DollarOne,
    /// $P: unordered point clouds, invariant to stroke order and direction.
    /// Scores are distances, lower is better.
    DollarP,
}

/// All recognition parameters in one struct.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecognizerConfig {
    pub algorithm: Algorithm,
    /// Number of points every gesture is resampled to.
    pub resample_count: usize,

    // -- $1 only --
    /// Side of the square $1 scales gestures into.
    pub square_size: f64,
    /// Half-width of the angle bracket searched by $1, in radians.
    pub angle_range: f64,
    /// Bracket width at which the $1 angle search stops, in radians.
    pub angle_precision: f64,

    // -- $P only --
    /// Controls the number of greedy matching trials, in [0..1].
    /// `n^(1 - epsilon)` points are skipped between two starting points.
    pub epsilon: f64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::DollarOne,
            resample_count: SAMPLING_RESOLUTION,
            square_size: SQUARE_SIZE,
            angle_range: 45f64.to_radians(),
            angle_precision: 2f64.to_radians(),
            epsilon: 0.5,
        }
    }
}

impl RecognizerConfig {
    /// Default parameters for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_resample_count(mut self, n: usize) -> Self {
        self.resample_count = n;
        self
    }

    /// Builds the matcher selected by `algorithm`.
    pub fn recognizer(&self) -> Box<dyn Recognizer> {
        match self.algorithm {
            Algorithm::DollarOne => Box::new(UnistrokeRecognizer::from_config(self)),
            Algorithm::DollarP => Box::new(PointCloudRecognizer::from_config(self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RecognizerConfig::default();
        assert_eq!(config.algorithm, Algorithm::DollarOne);
        assert_eq!(config.resample_count, 64);
        assert_eq!(config.square_size, 250.0);
        assert!((config.angle_range.to_degrees() - 45.0).abs() < 1e-9);
        assert!((config.angle_precision.to_degrees() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn builder_keeps_other_defaults() {
        let config = RecognizerConfig::new(Algorithm::DollarP).with_resample_count(32);
        assert_eq!(config.algorithm, Algorithm::DollarP);
        assert_eq!(config.resample_count, 32);
        assert_eq!(config.epsilon, 0.5);
    }
}
