// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CurveError {
    #[error("Cannot crop {start} samples from the front and {end} from the back of a sequence with only {len} samples")]
    Range { start: usize, end: usize, len: usize },

    #[error("The target and reference sequences have different lengths ({target} vs. {reference}); align them first")]
    LengthMismatch { target: usize, reference: usize },

    #[error("Independent-variable grids diverge at sample {index}: {a} vs. {b} (tolerance {tolerance})")]
    GridMismatch {
        index: usize,
        a: f64,
        b: f64,
        tolerance: f64,
    },

    #[error("Degenerate input: {what} is zero{}", .index.map(|i| format!(" at sample {i}")).unwrap_or_default())]
    DegenerateInput {
        what: &'static str,
        index: Option<usize>,
    },

    #[error("No finite samples remain in the sequence")]
    Empty,
}
