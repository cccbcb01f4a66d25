// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Aligning paired sample sequences and deriving curves from them.
//!
//! An extinction curve is built from a reddened "target" spectrum and an
//! unreddened "reference" spectrum taken with the same instrument
//! configuration. The two rarely have exactly the same number of samples, so
//! they are first [`crop`]ped of detector-edge artifacts, then [`align`]ed to
//! a common length, and finally turned into a [`DerivedCurve`] with
//! [`derive_curve`].
//!
//! Everything here is pure; all constants are supplied by the caller.

mod error;
mod light_curve;

pub use error::CurveError;
pub use light_curve::normalise_light_curve;

use itertools::izip;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{spectrum::SpectrumError, Spectrum};

/// How to bring two sequences of different lengths to a common length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum AlignMode {
    /// Drop trailing samples of the longer sequence.
    #[default]
    Truncate,

    /// As [`AlignMode::Truncate`], but fail if the independent variables of
    /// the truncated sequences differ by more than `tolerance` at any sample.
    Strict { tolerance: f64 },
}

impl AlignMode {
    pub fn align(self, a: &Spectrum, b: &Spectrum) -> Result<(Spectrum, Spectrum), CurveError> {
        match self {
            AlignMode::Truncate => Ok(align(a, b)),
            AlignMode::Strict { tolerance } => align_strict(a, b, tolerance),
        }
    }
}

/// Truncate the longer of two sequences so that both have the length of the
/// shorter one. The first `min(len(a), len(b))` samples of each are kept in
/// order.
///
/// This is positional truncation; it assumes that any excess samples are
/// trailing (e.g. from a longer exposure). If samples are missing from the
/// start of one sequence, or the sampling is offset, the result is misaligned
/// and nothing here notices. Use [`align_strict`] to check the grids.
pub fn align(a: &Spectrum, b: &Spectrum) -> (Spectrum, Spectrum) {
    let n = a.len().min(b.len());
    if a.len() != b.len() {
        debug!(
            "Aligning sequences of lengths {} and {}; dropping {} trailing samples from the {} sequence",
            a.len(),
            b.len(),
            a.len().abs_diff(b.len()),
            if a.len() > b.len() { "first" } else { "second" }
        );
    }
    (a.slice(0..n), b.slice(0..n))
}

/// As [`align`], then check that the independent variables of the aligned
/// sequences agree to within `tolerance` at every sample.
pub fn align_strict(
    a: &Spectrum,
    b: &Spectrum,
    tolerance: f64,
) -> Result<(Spectrum, Spectrum), CurveError> {
    let (a, b) = align(a, b);
    for (index, (&x_a, &x_b)) in a.x().iter().zip(b.x()).enumerate() {
        // A NaN on either side fails the comparison, and so the check.
        if !((x_a - x_b).abs() <= tolerance) {
            return Err(CurveError::GridMismatch {
                index,
                a: x_a,
                b: x_b,
                tolerance,
            });
        }
    }
    Ok((a, b))
}

/// Drop `start` samples from the front and `end` samples from the back of a
/// sequence, e.g. to discard detector-edge artifacts. At least one sample must
/// remain.
pub fn crop(seq: &Spectrum, start: usize, end: usize) -> Result<Spectrum, CurveError> {
    let len = seq.len();
    match start.checked_add(end) {
        Some(total) if total < len => Ok(seq.slice(start..len - end)),
        _ => Err(CurveError::Range { start, end, len }),
    }
}

/// The output of [`derive_curve`]: transformed independent variable against
/// the derived quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedCurve {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl DerivedCurve {
    /// Build a curve from parallel arrays. They must be the same length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<DerivedCurve, SpectrumError> {
        if x.len() != y.len() {
            return Err(SpectrumError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(DerivedCurve { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Only the pairs where both values are finite. Degenerate samples are
    /// kept in the curve itself, so this is what should be drawn.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.iter().filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    pub fn num_non_finite(&self) -> usize {
        self.len() - self.finite_points().count()
    }
}

impl From<Spectrum> for DerivedCurve {
    fn from(s: Spectrum) -> Self {
        DerivedCurve {
            x: s.x().to_vec(),
            y: s.y().to_vec(),
        }
    }
}

/// Derive a curve from two equal-length (aligned) sequences. For each sample
/// `i`:
///
/// ```text
/// derived[i] = ln((target_norm / reference_norm) / (target.y[i] / reference.y[i])) / norm_difference
/// x[i]       = k / target.x[i]
/// ```
///
/// With V-band fluxes as the norms and E(B-V) as `norm_difference`, this is an
/// extinction curve against inverse wavelength (`k` converting the wavelength
/// unit to microns).
///
/// Zero denominators are not special-cased; they come out as infinities or
/// NaNs. Crop degenerate edge samples beforehand, or filter them afterwards
/// with [`DerivedCurve::finite_points`]. The only error is for sequences of
/// different lengths.
pub fn derive_curve(
    target: &Spectrum,
    reference: &Spectrum,
    target_norm: f64,
    reference_norm: f64,
    norm_difference: f64,
    k: f64,
) -> Result<DerivedCurve, CurveError> {
    if target.len() != reference.len() {
        return Err(CurveError::LengthMismatch {
            target: target.len(),
            reference: reference.len(),
        });
    }

    let ratio_norm = target_norm / reference_norm;
    trace!("Norm. ratio: {ratio_norm}, norm. difference: {norm_difference}, k: {k}");
    let (x, y) = izip!(target.x(), target.y(), reference.y())
        .map(|(&x, &flux_target, &flux_reference)| {
            let ratio_flux = flux_target / flux_reference;
            (k / x, (ratio_norm / ratio_flux).ln() / norm_difference)
        })
        .unzip();

    Ok(DerivedCurve { x, y })
}

/// As [`derive_curve`], but fail rather than produce non-finite values when
/// any denominator is zero: `reference_norm`, `norm_difference`, a reference
/// flux, a target flux (the flux ratio) or a target wavelength.
pub fn derive_curve_strict(
    target: &Spectrum,
    reference: &Spectrum,
    target_norm: f64,
    reference_norm: f64,
    norm_difference: f64,
    k: f64,
) -> Result<DerivedCurve, CurveError> {
    if reference_norm == 0.0 {
        return Err(CurveError::DegenerateInput {
            what: "the reference normalisation",
            index: None,
        });
    }
    if norm_difference == 0.0 {
        return Err(CurveError::DegenerateInput {
            what: "the normalisation difference",
            index: None,
        });
    }
    if let Some(index) = reference.y().iter().position(|&f| f == 0.0) {
        return Err(CurveError::DegenerateInput {
            what: "the reference flux",
            index: Some(index),
        });
    }
    if let Some(index) = target.y().iter().position(|&f| f == 0.0) {
        return Err(CurveError::DegenerateInput {
            what: "the target flux",
            index: Some(index),
        });
    }
    if let Some(index) = target.x().iter().position(|&x| x == 0.0) {
        return Err(CurveError::DegenerateInput {
            what: "the target wavelength",
            index: Some(index),
        });
    }

    derive_curve(
        target,
        reference,
        target_norm,
        reference_norm,
        norm_difference,
        k,
    )
}
