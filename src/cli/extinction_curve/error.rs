// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::{
    io::{read::SpectrumReadError, write::WriteError},
    plotting::PlotError,
    unit_parsing::UnitParseError,
};

#[derive(Error, Debug)]
pub(crate) enum ExtinctionCurveArgsError {
    #[error("No target spectrum was supplied")]
    NoTarget,

    #[error("No reference spectrum was supplied")]
    NoReference,

    #[error("The {which} crop needs exactly 2 values (start and end), but {num} were given")]
    BadCrop { which: &'static str, num: usize },

    #[error("The alignment tolerance must not be negative; got {0}")]
    BadTolerance(f64),

    #[error("The {which} photometry needs exactly 2 values (B and V), but {num} were given")]
    BadPhotometry { which: &'static str, num: usize },

    #[error("B and V magnitudes must be given for both the target and the reference")]
    IncompletePhotometry,

    #[error("No {0} was given and there is no photometry to derive it from")]
    NoNormalisation(&'static str),

    #[error(transparent)]
    UnitParse(#[from] UnitParseError),

    #[error(transparent)]
    SpectrumRead(#[from] SpectrumReadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}
