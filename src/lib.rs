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

//! $1 and $P gesture recognizers.
//!
//! A gesture is a sequence of [`Point`]s, each tagged with the stroke it was
//! drawn in. It is compared against a set of [`GestureTemplate`]s and the
//! closest template is returned as a [`Recognition`].
//!
//! ```
//! use dollar_recognizer::{point::from_strokes, recognize, Algorithm, GestureTemplate};
//!
//! let square = from_strokes(&[[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]]);
//! let templates = [GestureTemplate::new(square.clone(), "square")];
//! let result = recognize(&square, 4, &templates, Algorithm::DollarOne)?;
//! assert_eq!(result.name, "square");
//! # Ok::<(), dollar_recognizer::RecognitionError>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod point;
pub mod point_cloud_recognizer;
pub mod recognizer;
pub mod unistroke_recognizer;

pub use config::{Algorithm, RecognizerConfig};
pub use error::RecognitionError;
pub use gesture::{GestureTemplate, NormalizedGesture, Stage};
pub use point::Point;
pub use point_cloud_recognizer::PointCloudRecognizer;
pub use recognizer::{normalize, recognize, recognize_with, Recognition, Recognizer, Score};
pub use unistroke_recognizer::UnistrokeRecognizer;
