// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use super::OutputCurveParams;
use crate::{
    curve::{normalise_light_curve, CurveError},
    io::write::WriteError,
    plotting::PlotError,
    DerivedCurve, Spectrum,
};

pub(crate) struct LightCurveParams {
    pub(crate) light_curve: Spectrum,
    pub(crate) output: OutputCurveParams,
}

impl LightCurveParams {
    pub(crate) fn run(&self) -> Result<DerivedCurve, LightCurveError> {
        let curve = DerivedCurve::from(normalise_light_curve(&self.light_curve)?);
        self.output.write::<LightCurveError>(&curve)?;
        Ok(curve)
    }
}

#[derive(Error, Debug)]
pub(crate) enum LightCurveError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}
