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

use thiserror::Error;

/// Errors that can occur while normalizing or recognizing a gesture.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RecognitionError {
    /// The caller handed over something the recognizers cannot work with:
    /// too few points, a resampling count below two, stroke ids out of
    /// capture order, non-finite coordinates or an empty template set.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The gesture has no extent to resample along (all of its points coincide).
    #[error("degenerate geometry: the gesture path has zero length")]
    DegenerateGeometry,

    /// Every template was excluded from the comparison.
    #[error("no template could be compared with the gesture")]
    NoMatch,

    /// A geometry helper was called on an empty point sequence.
    #[error("empty point sequence")]
    EmptyInput,
}
