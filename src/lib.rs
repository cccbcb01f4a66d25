// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Extinction curves and light curves from spectra and time series retrieved from
the Mikulski Archive for Space Telescopes (MAST).

The core operations are in [`curve`]: [`crop`] a sample sequence, [`align`]
two of them to a common length, then [`derive_curve`] from the pair.
 */

mod cli;
pub mod constants;
pub mod curve;
pub mod io;
pub(crate) mod params;
pub mod photometry;
pub mod plotting;
pub mod spectrum;
pub mod unit_parsing;

// Re-exports.
pub use cli::{MastCurves, MastCurvesError};
pub use curve::{
    align, align_strict, crop, derive_curve, derive_curve_strict, normalise_light_curve,
    AlignMode, CurveError, DerivedCurve,
};
pub use io::read::{read_spectrum, SpectrumSource};
pub use photometry::{Normalisation, Photometry};
pub use spectrum::Spectrum;
