// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[cfg(not(feature = "plotting"))]
    #[error("mast-curves was not compiled with the \"plotting\" feature.\nYou need to compile mast-curves from source with this feature to make plots.")]
    NoPlottingFeature,

    #[error("Plots can only be written to PNG files; '{}' doesn't end in .png", .0.display())]
    NotPng(PathBuf),

    #[error("There are no finite points to plot")]
    NoFinitePoints,

    #[error("Error from the plotters library: {0}")]
    Plotters(String),
}
