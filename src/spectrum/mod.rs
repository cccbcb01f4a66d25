// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sample sequences.
//!
//! A [`Spectrum`] is an ordered sequence of (independent, dependent) pairs,
//! e.g. (wavelength, flux) or (time, flux), stored as two parallel arrays.
//! Nothing is enforced about the independent variable's ordering; it's
//! expected to be non-decreasing within one sequence, and
//! [`Spectrum::is_monotonic`] reports whether it is.

mod error;

pub use error::SpectrumError;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// The independent variable (e.g. wavelength or time).
    x: Vec<f64>,

    /// The dependent variable (e.g. flux).
    y: Vec<f64>,

    /// The unit of `x`, if known (e.g. from a FITS `TUNITn` key).
    #[serde(default)]
    pub x_unit: Option<String>,

    /// The unit of `y`, if known.
    #[serde(default)]
    pub y_unit: Option<String>,
}

impl Spectrum {
    /// Build a sequence from parallel arrays. They must be the same length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Spectrum, SpectrumError> {
        if x.len() != y.len() {
            return Err(SpectrumError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Spectrum {
            x,
            y,
            x_unit: None,
            y_unit: None,
        })
    }

    /// Attach units to this sequence.
    pub fn with_units(mut self, x_unit: Option<String>, y_unit: Option<String>) -> Spectrum {
        self.x_unit = x_unit;
        self.y_unit = y_unit;
        self
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterate over the (x, y) pairs of this sequence.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// A new sequence made of the samples in `range`, keeping units. The range
    /// must be in bounds.
    pub(crate) fn slice(&self, range: std::ops::Range<usize>) -> Spectrum {
        Spectrum {
            x: self.x[range.clone()].to_vec(),
            y: self.y[range].to_vec(),
            x_unit: self.x_unit.clone(),
            y_unit: self.y_unit.clone(),
        }
    }

    /// Is the independent variable non-decreasing? NaNs make a sequence
    /// non-monotonic.
    pub fn is_monotonic(&self) -> bool {
        self.x.windows(2).all(|w| w[0] <= w[1])
    }

    /// The smallest and largest finite values of the independent variable.
    /// `None` if there aren't any.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        finite_range(&self.x)
    }

    /// The smallest and largest finite values of the dependent variable.
    /// `None` if there aren't any.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        finite_range(&self.y)
    }
}

pub(crate) fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}
