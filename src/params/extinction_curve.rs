// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters for making an extinction curve.

use log::{debug, warn};
use thiserror::Error;

use super::OutputCurveParams;
use crate::{
    curve::{crop, derive_curve, derive_curve_strict, AlignMode, CurveError},
    io::write::WriteError,
    photometry::Normalisation,
    plotting::PlotError,
    DerivedCurve, Spectrum,
};

pub(crate) struct ExtinctionCurveParams {
    /// The reddened spectrum.
    pub(crate) target: Spectrum,

    /// The unreddened spectrum.
    pub(crate) reference: Spectrum,

    /// The number of samples to drop from the (front, back) of the target.
    pub(crate) target_crop: (usize, usize),

    /// The number of samples to drop from the (front, back) of the reference.
    pub(crate) reference_crop: (usize, usize),

    pub(crate) align_mode: AlignMode,

    /// Fail on zero denominators rather than producing non-finite samples.
    pub(crate) strict_derive: bool,

    pub(crate) normalisation: Normalisation,

    /// Converts the wavelength unit of the target into microns.
    pub(crate) k: f64,

    pub(crate) output: OutputCurveParams,
}

impl ExtinctionCurveParams {
    /// Crop, align and derive the curve. Nothing is written.
    pub(crate) fn derive(&self) -> Result<DerivedCurve, CurveError> {
        let (start, end) = self.target_crop;
        let target = crop(&self.target, start, end)?;
        let (start, end) = self.reference_crop;
        let reference = crop(&self.reference, start, end)?;
        debug!(
            "Cropped target to {} samples, reference to {} samples",
            target.len(),
            reference.len()
        );

        let (target, reference) = self.align_mode.align(&target, &reference)?;

        let Normalisation {
            target_norm,
            reference_norm,
            norm_difference,
        } = self.normalisation;
        let derive = if self.strict_derive {
            derive_curve_strict
        } else {
            derive_curve
        };
        let curve = derive(
            &target,
            &reference,
            target_norm,
            reference_norm,
            norm_difference,
            self.k,
        )?;

        let num_non_finite = curve.num_non_finite();
        if num_non_finite > 0 {
            warn!(
                "{num_non_finite} of {} curve samples are not finite; they are written but not plotted",
                curve.len()
            );
        }
        Ok(curve)
    }

    pub(crate) fn run(&self) -> Result<DerivedCurve, ExtinctionCurveError> {
        let curve = self.derive()?;
        self.output.write::<ExtinctionCurveError>(&curve)?;
        Ok(curve)
    }
}

#[derive(Error, Debug)]
pub(crate) enum ExtinctionCurveError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}
