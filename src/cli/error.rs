// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all mast-curves-related errors. This should be the *only*
//! error enum that is publicly visible from the command line.

use thiserror::Error;

use super::{extinction_curve::ExtinctionCurveArgsError, light_curve::LightCurveArgsError};
use crate::{
    curve::CurveError,
    io::{
        read::{FitsError, SpectrumReadError},
        write::WriteError,
    },
    params::{ExtinctionCurveError, LightCurveError},
    plotting::PlotError,
    unit_parsing::UnitParseError,
};

/// The *only* publicly visible error from mast-curves. Each error message
/// should include a hint on what to do, unless it's "generic".
#[derive(Error, Debug)]
pub enum MastCurvesError {
    /// An error from cropping, aligning or deriving curves.
    #[error("{0}\n\nCheck the crop offsets and that both spectra cover the same wavelengths.")]
    Curve(String),

    /// An error related to reading spectra or light curves.
    #[error("{0}\n\nInputs may be FITS tables, CSV files with a header row, or whitespace-delimited text. Use --hdu, --x-column and --y-column to select the data.")]
    SpectrumRead(String),

    /// An error related to the photometry used for normalisation.
    #[error("{0}\n\nGive B and V magnitudes with --target-bv and --reference-bv, or give the normalisation constants explicitly.")]
    Photometry(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are TOML or JSON; --save-toml writes one for a given set of arguments.")]
    ArgFile(String),

    /// An error related to plotting.
    #[error("{0}\n\nPlots are written as PNG files.")]
    Plot(String),

    /// A cfitsio error. Because these are usually quite spartan, some
    /// suggestions are provided here.
    #[error("cfitsio error: {0}\n\nIf you don't know what this means, try turning up verbosity (-v or -vv).")]
    Cfitsio(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

// Binary sub-command errors.

impl From<ExtinctionCurveArgsError> for MastCurvesError {
    fn from(e: ExtinctionCurveArgsError) -> Self {
        let s = e.to_string();
        match e {
            ExtinctionCurveArgsError::NoTarget
            | ExtinctionCurveArgsError::NoReference
            | ExtinctionCurveArgsError::BadCrop { .. }
            | ExtinctionCurveArgsError::BadTolerance(_) => Self::Generic(s),
            ExtinctionCurveArgsError::BadPhotometry { .. }
            | ExtinctionCurveArgsError::IncompletePhotometry
            | ExtinctionCurveArgsError::NoNormalisation(_) => Self::Photometry(s),
            ExtinctionCurveArgsError::UnitParse(e) => Self::from(e),
            ExtinctionCurveArgsError::SpectrumRead(e) => Self::from(e),
            ExtinctionCurveArgsError::Write(e) => Self::from(e),
            ExtinctionCurveArgsError::Plot(e) => Self::from(e),
        }
    }
}

impl From<ExtinctionCurveError> for MastCurvesError {
    fn from(e: ExtinctionCurveError) -> Self {
        match e {
            ExtinctionCurveError::Curve(e) => Self::from(e),
            ExtinctionCurveError::Write(e) => Self::from(e),
            ExtinctionCurveError::Plot(e) => Self::from(e),
        }
    }
}

impl From<LightCurveArgsError> for MastCurvesError {
    fn from(e: LightCurveArgsError) -> Self {
        match e {
            LightCurveArgsError::NoInput => Self::Generic(e.to_string()),
            LightCurveArgsError::SpectrumRead(e) => Self::from(e),
            LightCurveArgsError::Write(e) => Self::from(e),
            LightCurveArgsError::Plot(e) => Self::from(e),
        }
    }
}

impl From<LightCurveError> for MastCurvesError {
    fn from(e: LightCurveError) -> Self {
        match e {
            LightCurveError::Curve(e) => Self::from(e),
            LightCurveError::Write(e) => Self::from(e),
            LightCurveError::Plot(e) => Self::from(e),
        }
    }
}

// Library code errors.

impl From<CurveError> for MastCurvesError {
    fn from(e: CurveError) -> Self {
        Self::Curve(e.to_string())
    }
}

impl From<SpectrumReadError> for MastCurvesError {
    fn from(e: SpectrumReadError) -> Self {
        let s = e.to_string();
        match e {
            SpectrumReadError::UnknownFileType(_)
            | SpectrumReadError::MissingColumn { .. }
            | SpectrumReadError::Parse { .. }
            | SpectrumReadError::Csv(_) => Self::SpectrumRead(s),
            SpectrumReadError::Fits(e) => Self::from(e),
            SpectrumReadError::IO(e) => Self::from(e),
        }
    }
}

impl From<FitsError> for MastCurvesError {
    fn from(e: FitsError) -> Self {
        let s = e.to_string();
        match e {
            FitsError::MissingColumn { .. } | FitsError::NotTable { .. } => Self::SpectrumRead(s),
            FitsError::Open { .. } | FitsError::Fitsio { .. } | FitsError::Parse { .. } => {
                Self::Cfitsio(s)
            }
        }
    }
}

impl From<WriteError> for MastCurvesError {
    fn from(e: WriteError) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<PlotError> for MastCurvesError {
    fn from(e: PlotError) -> Self {
        Self::Plot(e.to_string())
    }
}

impl From<UnitParseError> for MastCurvesError {
    fn from(e: UnitParseError) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<std::io::Error> for MastCurvesError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
