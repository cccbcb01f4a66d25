// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters for each of the `mast-curves` operations.
//!
//! The code here is kind of "mirroring" the code within the `cli` module; the
//! idea is that `cli` is unparsed, user-facing code, whereas parameters have
//! been parsed (and inputs read) and are ready to be used directly.

mod extinction_curve;
mod light_curve;
#[cfg(test)]
mod tests;

pub(crate) use extinction_curve::{ExtinctionCurveError, ExtinctionCurveParams};
pub(crate) use light_curve::{LightCurveError, LightCurveParams};

use std::path::PathBuf;

use log::info;

use crate::{
    io::write::{write_curve, CurveLabels, WriteError},
    plotting::{plot_curve, PlotError, PlotSpec},
    DerivedCurve,
};

/// Where a curve goes once it has been made.
pub(crate) struct OutputCurveParams {
    pub(crate) output_file: PathBuf,
    pub(crate) labels: CurveLabels,
    pub(crate) plot: Option<(PathBuf, PlotSpec)>,
}

impl OutputCurveParams {
    fn write<E>(&self, curve: &DerivedCurve) -> Result<(), E>
    where
        E: From<WriteError> + From<PlotError>,
    {
        write_curve(&self.output_file, curve, self.labels)?;
        info!("Curve written to {}", self.output_file.display());

        if let Some((plot_file, plot_spec)) = &self.plot {
            let points = curve.finite_points().collect::<Vec<_>>();
            plot_curve(plot_file, plot_spec, &points)?;
            info!("Plot written to {}", plot_file.display());
        }
        Ok(())
    }
}
